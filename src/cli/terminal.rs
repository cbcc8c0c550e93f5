use crate::config::ConfiguratorConfig;
use crate::error::LinkError;
use crate::link::{read_operator_line, sleep, InputLine, SerialPort};
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

/// Operator side of the configurator: prompts out, lines in.
pub struct Terminal<O, D> {
    port: O,
    delay: D,
    poll_interval: Duration,
    byte_gap: Duration,
}

impl<O, D> Terminal<O, D>
where
    O: SerialPort,
    D: DelayNs,
{
    pub fn new(port: O, delay: D, config: &ConfiguratorConfig) -> Self {
        Self {
            port,
            delay,
            poll_interval: config.input_poll_interval,
            byte_gap: config.input_byte_gap,
        }
    }

    pub async fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        self.port.write_all(bytes).await
    }

    pub async fn write_str(&mut self, s: &str) -> Result<(), LinkError> {
        self.write_bytes(s.as_bytes()).await
    }

    pub async fn write_line(&mut self, s: &str) -> Result<(), LinkError> {
        self.write_str(s).await?;
        self.write_str("\r\n").await
    }

    pub async fn write_lines(&mut self, lines: &[&str]) -> Result<(), LinkError> {
        for line in lines {
            self.write_line(line).await?;
        }
        Ok(())
    }

    pub async fn blank_line(&mut self) -> Result<(), LinkError> {
        self.write_str("\r\n").await
    }

    /// `label` followed by `value` with its trailing line ending replaced by CRLF.
    pub async fn write_labelled(&mut self, label: &str, value: &[u8]) -> Result<(), LinkError> {
        self.write_str(label).await?;
        self.write_bytes(crate::at::command::strip_terminators(value))
            .await?;
        self.write_str("\r\n").await
    }

    /// Block until the operator has typed at least one byte. Never times out.
    pub async fn wait_for_input(&mut self) {
        while self.port.bytes_available() == 0 {
            sleep(&mut self.delay, self.poll_interval).await;
        }
    }

    /// Read one line, returning the number of bytes stored in `line`.
    pub async fn read_line(&mut self, line: &mut InputLine) -> usize {
        read_operator_line(&mut self.port, &mut self.delay, self.byte_gap, line).await
    }

    /// Wait for the operator, then read one line.
    pub async fn next_line(&mut self, line: &mut InputLine) -> usize {
        self.wait_for_input().await;
        self.read_line(line).await
    }
}
