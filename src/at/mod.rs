//! AT command exchange with the HC-05 over the module stream.

pub mod command;
pub mod response;

pub use command::{CommandLine, ATTENTION, SET_NAME_PREFIX, SET_PASSKEY_PREFIX};
pub use response::Response;

use crate::config::{ConfiguratorConfig, LineEnding};
use crate::error::ConfiguratorResult;
use crate::link::{read_available, sleep, SerialPort};
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

pub struct AtClient<M, D> {
    port: M,
    delay: D,
    line_ending: LineEnding,
    poll_interval: Duration,
    poll_attempts: u32,
    settle: Duration,
}

impl<M, D> AtClient<M, D>
where
    M: SerialPort,
    D: DelayNs,
{
    pub fn new(port: M, delay: D, config: &ConfiguratorConfig) -> Self {
        Self {
            port,
            delay,
            line_ending: config.line_ending,
            poll_interval: config.reply_poll_interval,
            poll_attempts: config.reply_poll_attempts,
            settle: config.reply_settle,
        }
    }

    /// Send `command` and capture the reply into `response`.
    ///
    /// Waits a bounded time for the first reply byte and carries on silently
    /// when none arrives. Returns whether the reply starts with `OK`.
    pub async fn exchange(
        &mut self,
        command: &[u8],
        response: &mut Response,
    ) -> ConfiguratorResult<bool> {
        let command = command::strip_terminators(command);
        self.port.write_all(command).await?;
        self.port.write_all(self.line_ending.as_bytes()).await?;

        let mut attempts = 0;
        while self.port.bytes_available() == 0 && attempts < self.poll_attempts {
            sleep(&mut self.delay, self.poll_interval).await;
            attempts += 1;
        }
        if self.port.bytes_available() == 0 {
            debug!("AT: no reply after {} polls", attempts);
        }

        response.clear();
        let consumed = read_available(
            &mut self.port,
            &mut self.delay,
            self.settle,
            response.buffer_mut(),
        )
        .await;
        debug!("AT: {} reply bytes consumed", consumed);

        Ok(response.is_ok())
    }

    /// Submit a prepared command line.
    pub async fn send(
        &mut self,
        command: &CommandLine,
        response: &mut Response,
    ) -> ConfiguratorResult<bool> {
        self.exchange(command.as_bytes(), response).await
    }

    /// Whether the module currently answers `AT` with `OK`, i.e. sits in
    /// command mode.
    pub async fn in_command_mode(&mut self) -> bool {
        let mut response = Response::new();
        match self.exchange(ATTENTION, &mut response).await {
            Ok(ready) => ready,
            Err(e) => {
                warn!("AT: mode check failed: {}", e);
                false
            }
        }
    }
}
