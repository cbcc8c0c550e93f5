use crate::cli::Messages;
use crate::error::{ConfiguratorError, ConfiguratorResult};
use embassy_time::Duration;

/// Rates the board's UARTEs are set up for.
pub const SUPPORTED_BAUD_RATES: [u32; 5] = [9600, 19200, 38400, 57600, 115200];

pub fn check_baud_rate(rate: u32) -> ConfiguratorResult<u32> {
    if SUPPORTED_BAUD_RATES.contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfiguratorError::UnsupportedBaudRate(rate))
    }
}

/// Terminator appended to every command sent to the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEnding {
    /// `\n` only
    Lf,
    /// `\r\n`, required by some HC-05 firmware revisions
    CrLf,
}

impl LineEnding {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfiguratorConfig {
    /// Baud rate of the operator terminal
    pub operator_baud_rate: u32,

    /// Baud rate of the HC-05 in AT command mode
    pub module_baud_rate: u32,

    /// Sleep between polls while waiting for the first reply byte
    pub reply_poll_interval: Duration,

    /// Number of polls before giving up on a reply
    pub reply_poll_attempts: u32,

    /// Idle time after which a reply is considered complete
    pub reply_settle: Duration,

    /// Sleep between polls while waiting for the operator
    pub input_poll_interval: Duration,

    /// Inter-byte gap while reading an operator line
    pub input_byte_gap: Duration,

    /// Pause before probing again when the module is not in command mode
    pub retry_delay: Duration,

    /// Pause after each handled menu choice
    pub loop_delay: Duration,

    /// Terminator appended to commands
    pub line_ending: LineEnding,

    /// Operator-facing text
    pub messages: &'static Messages,
}

impl ConfiguratorConfig {
    /// Upper bound on the wait for the first reply byte
    pub fn reply_timeout(&self) -> Duration {
        self.reply_poll_interval * self.reply_poll_attempts
    }

    /// Reject settings the board cannot apply.
    pub fn validate(&self) -> ConfiguratorResult<()> {
        check_baud_rate(self.operator_baud_rate)?;
        check_baud_rate(self.module_baud_rate)?;
        Ok(())
    }
}

impl Default for ConfiguratorConfig {
    fn default() -> Self {
        Self {
            operator_baud_rate: 9600,
            module_baud_rate: 38400, // HC-05 command mode rate
            reply_poll_interval: Duration::from_millis(10),
            reply_poll_attempts: 100, // ~1s
            reply_settle: Duration::from_millis(5),
            input_poll_interval: Duration::from_millis(10),
            input_byte_gap: Duration::from_millis(10),
            retry_delay: Duration::from_secs(3),
            loop_delay: Duration::from_millis(100),
            line_ending: LineEnding::Lf,
            messages: &Messages::FRENCH,
        }
    }
}
