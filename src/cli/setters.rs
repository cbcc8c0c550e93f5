use super::input::{is_rejected, normalize};
use super::{Messages, Terminal};
use crate::at::{AtClient, CommandLine, Response, SET_NAME_PREFIX, SET_PASSKEY_PREFIX};
use crate::error::ConfiguratorResult;
use crate::link::{InputLine, SerialPort};
use embedded_hal_async::delay::DelayNs;

/// Module setting changed through a dedicated menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Setting {
    ModuleName,
    Passkey,
}

impl Setting {
    pub fn prefix(self) -> &'static str {
        match self {
            Setting::ModuleName => SET_NAME_PREFIX,
            Setting::Passkey => SET_PASSKEY_PREFIX,
        }
    }

    fn prompt(self, messages: &Messages) -> &'static str {
        match self {
            Setting::ModuleName => messages.name_prompt,
            Setting::Passkey => messages.passkey_prompt,
        }
    }

    fn confirmation(self, messages: &Messages) -> &'static str {
        match self {
            Setting::ModuleName => messages.name_set,
            Setting::Passkey => messages.passkey_set,
        }
    }

    /// The name setter shows the module reply whatever the outcome; the
    /// passkey setter only confirms success.
    pub fn echoes_reply(self) -> bool {
        matches!(self, Setting::ModuleName)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetterOutcome {
    /// Empty input or leading space, nothing sent
    Ignored,
    /// Input did not fit, nothing sent
    InputTooLong,
    Sent { accepted: bool },
}

/// Ask the operator for a new value and push it to the module.
pub async fn apply_setting<O, M, D>(
    setting: Setting,
    terminal: &mut Terminal<O, D>,
    module: &mut AtClient<M, D>,
    messages: &Messages,
) -> ConfiguratorResult<SetterOutcome>
where
    O: SerialPort,
    M: SerialPort,
    D: DelayNs,
{
    terminal.write_line(setting.prompt(messages)).await?;

    let mut raw = InputLine::new();
    let count = terminal.next_line(&mut raw).await;
    if count == 0 || is_rejected(&raw) {
        debug!("{}: input ignored", setting);
        return Ok(SetterOutcome::Ignored);
    }

    let command = match normalize(&raw)
        .and_then(|value| CommandLine::with_argument(setting.prefix(), &value))
    {
        Ok(command) => command,
        Err(e) => {
            warn!("{}: {}", setting, e);
            terminal.write_line(messages.input_too_long).await?;
            return Ok(SetterOutcome::InputTooLong);
        }
    };

    let mut response = Response::new();
    let accepted = module.send(&command, &mut response).await?;
    info!("{}: module accepted = {}", setting, accepted);

    if accepted {
        let value = &command.as_bytes()[setting.prefix().len()..];
        terminal
            .write_labelled(setting.confirmation(messages), value)
            .await?;
    }
    if setting.echoes_reply() {
        terminal
            .write_labelled(messages.module_reply, response.as_bytes())
            .await?;
    }

    Ok(SetterOutcome::Sent { accepted })
}
