use crate::error::InputError;
use heapless::Vec;

pub const COMMAND_CAPACITY: usize = 80;

/// Attention command, answered with `OK` only while the module is in command mode.
pub const ATTENTION: &[u8] = b"AT";
pub const SET_NAME_PREFIX: &str = "AT+NAME=";
pub const SET_PASSKEY_PREFIX: &str = "AT+PSWD=";

/// One AT command, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    bytes: Vec<u8, COMMAND_CAPACITY>,
}

impl CommandLine {
    /// Raw command exactly as typed by the operator.
    pub fn raw(line: &[u8]) -> Result<Self, InputError> {
        Self::with_argument("", line)
    }

    /// `prefix` followed by `argument`, e.g. `AT+NAME=` + `MyDevice`.
    pub fn with_argument(prefix: &str, argument: &[u8]) -> Result<Self, InputError> {
        let mut bytes = Vec::new();
        bytes
            .extend_from_slice(prefix.as_bytes())
            .map_err(|_| InputError::CommandTooLong)?;
        bytes
            .extend_from_slice(strip_terminators(argument))
            .map_err(|_| InputError::CommandTooLong)?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Drop trailing `\r` and `\n` so exactly one line ending goes on the wire.
pub fn strip_terminators(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != b'\r' && b != b'\n')
        .map_or(0, |i| i + 1);
    &bytes[..end]
}
