//! nRF52840-DK wiring
//!
//! Operator terminal on UARTE0 through the J-Link virtual COM port
//! (RX P0.08, TX P0.06), HC-05 on UARTE1 (RX P1.14, TX P1.15). Each receiver
//! is drained by its own task into a static pipe so the configurator can
//! check for buffered bytes without waiting.

use crate::config::check_baud_rate;
use crate::error::{ConfiguratorError, ConfiguratorResult, LinkError};
use crate::link::SerialPort;
use embassy_nrf::gpio::Output;
use embassy_nrf::peripherals;
use embassy_nrf::uarte::{self, UarteRx, UarteTx};
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::pipe::Pipe;
use embassy_time::{Duration, Timer};
use embedded_hal_async::delay::DelayNs;

pub const RX_PIPE_SIZE: usize = 256;
const TX_CHUNK_SIZE: usize = 32;

pub type RxPipe = Pipe<ThreadModeRawMutex, RX_PIPE_SIZE>;

pub static OPERATOR_RX: RxPipe = Pipe::new();
pub static MODULE_RX: RxPipe = Pipe::new();

/// Copyable delay on the embassy time driver, one per configurator component.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

impl DelayNs for TimerDelay {
    async fn delay_ns(&mut self, ns: u32) {
        Timer::after_nanos(u64::from(ns)).await
    }

    async fn delay_us(&mut self, us: u32) {
        Timer::after_micros(u64::from(us)).await
    }

    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(u64::from(ms)).await
    }
}

/// Map a configured baud rate onto the UARTE setting.
pub fn baudrate(rate: u32) -> ConfiguratorResult<uarte::Baudrate> {
    match check_baud_rate(rate)? {
        9600 => Ok(uarte::Baudrate::BAUD9600),
        19200 => Ok(uarte::Baudrate::BAUD19200),
        38400 => Ok(uarte::Baudrate::BAUD38400),
        57600 => Ok(uarte::Baudrate::BAUD57600),
        115200 => Ok(uarte::Baudrate::BAUD115200),
        other => Err(ConfiguratorError::UnsupportedBaudRate(other)),
    }
}

/// 8N1 UARTE configuration at `rate`.
pub fn uart_config(rate: u32) -> ConfiguratorResult<uarte::Config> {
    let mut config = uarte::Config::default();
    config.parity = uarte::Parity::EXCLUDED;
    config.baudrate = baudrate(rate)?;
    Ok(config)
}

#[embassy_executor::task]
pub async fn operator_rx_task(rx: UarteRx<'static, peripherals::UARTE0>) -> ! {
    info!("Starting operator receive pump");
    pump(rx, &OPERATOR_RX).await
}

#[embassy_executor::task]
pub async fn module_rx_task(rx: UarteRx<'static, peripherals::UARTE1>) -> ! {
    info!("Starting module receive pump");
    pump(rx, &MODULE_RX).await
}

async fn pump<T: uarte::Instance>(mut rx: UarteRx<'static, T>, pipe: &'static RxPipe) -> ! {
    let mut byte = [0u8; 1];
    loop {
        match rx.read(&mut byte).await {
            Ok(()) => pipe.write_all(&byte).await,
            Err(e) => warn!("UARTE read error: {}", e),
        }
    }
}

/// UARTE transmitter paired with the pipe its receive pump fills.
pub struct UarteLink<'d, T: uarte::Instance> {
    tx: UarteTx<'d, T>,
    rx: &'static RxPipe,
    tx_led: Option<Output<'d>>,
}

impl<'d, T: uarte::Instance> UarteLink<'d, T> {
    pub fn new(tx: UarteTx<'d, T>, rx: &'static RxPipe) -> Self {
        Self {
            tx,
            rx,
            tx_led: None,
        }
    }

    pub fn with_tx_led(mut self, tx_led: Output<'d>) -> Self {
        self.tx_led = Some(tx_led);
        self
    }
}

impl<'d, T: uarte::Instance> SerialPort for UarteLink<'d, T> {
    fn bytes_available(&self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.rx.try_read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        // Flash TX LED during transmission if available
        if let Some(ref mut led) = self.tx_led {
            led.set_low(); // Turn on LED (active low)
        }

        // EasyDMA only reads from RAM, so stage flash-resident text first
        let mut staging = [0u8; TX_CHUNK_SIZE];
        let mut result = Ok(());
        for chunk in bytes.chunks(TX_CHUNK_SIZE) {
            staging[..chunk.len()].copy_from_slice(chunk);
            if let Err(e) = self.tx.write(&staging[..chunk.len()]).await {
                warn!("UARTE write error: {}", e);
                result = Err(LinkError::Write);
                break;
            }
        }

        // Small delay to make TX flash visible, then turn off TX LED
        if let Some(ref mut led) = self.tx_led {
            Timer::after(Duration::from_millis(10)).await;
            led.set_high(); // Turn off LED (active low)
        }

        result
    }
}
