/// Failure on one of the two character streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    Write,
}

/// Operator input that cannot be turned into a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Line filled the input buffer without a terminator.
    Unterminated,
    /// Prefix plus argument does not fit a command line.
    CommandTooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfiguratorError {
    Link(LinkError),
    Gpio,
    UnsupportedBaudRate(u32),
}

impl From<LinkError> for ConfiguratorError {
    fn from(err: LinkError) -> Self {
        ConfiguratorError::Link(err)
    }
}

pub type ConfiguratorResult<T> = Result<T, ConfiguratorError>;
