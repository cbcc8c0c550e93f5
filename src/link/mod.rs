//! Character streams shared by the operator terminal and the AT transport.

pub mod reader;

pub use reader::{read_available, read_operator_line, InputLine, INPUT_CAPACITY};

use crate::error::LinkError;
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

/// A byte stream with a receive buffer that can be inspected without waiting.
#[allow(async_fn_in_trait)]
pub trait SerialPort {
    /// Bytes buffered and ready to be read.
    fn bytes_available(&self) -> usize;

    /// Take one buffered byte, never waits.
    fn read_byte(&mut self) -> Option<u8>;

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError>;
}

/// Sleep for `duration` on any async delay provider.
pub async fn sleep<D: DelayNs>(delay: &mut D, duration: Duration) {
    let micros = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
    if micros > 0 {
        delay.delay_us(micros).await;
    }
}
