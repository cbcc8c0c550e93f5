#![cfg_attr(not(test), no_std)]

//! HC-05 configurator for the nRF52840-DK
//!
//! Drives an HC-05 Bluetooth serial module through AT commands on one UART
//! while a human operator picks actions from a text menu on another. The
//! configurator logic is written against the [`link::SerialPort`] seam and
//! `embedded-hal-async` delays so it runs unchanged on host tests; the
//! `board` feature adds the nRF52840 wiring.

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod at;
pub mod cli;
pub mod config;
pub mod error;
pub mod key_pin;
pub mod link;

// Board support (conditional compilation for board feature)
#[cfg(feature = "board")]
pub mod board;

pub use cli::{Configurator, LoopState};
pub use config::{ConfiguratorConfig, LineEnding};
pub use error::{ConfiguratorError, ConfiguratorResult, InputError, LinkError};
pub use key_pin::engage_key_pin;
