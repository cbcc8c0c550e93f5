use crate::error::{ConfiguratorError, ConfiguratorResult};
use embedded_hal::digital::OutputPin;

/// Drive the HC-05 KEY pin high so the module boots into its configuration
/// mode. Done once at start-up; the level is never changed afterwards.
pub fn engage_key_pin<P: OutputPin>(pin: &mut P) -> ConfiguratorResult<()> {
    pin.set_high().map_err(|_| ConfiguratorError::Gpio)?;
    info!("KEY pin driven high");
    Ok(())
}
