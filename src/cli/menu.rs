use super::input::normalize;
use super::parser::MenuChoice;
use super::setters::{apply_setting, Setting};
use super::Terminal;
use crate::at::{AtClient, CommandLine, Response};
use crate::config::ConfiguratorConfig;
use crate::error::ConfiguratorResult;
use crate::link::{sleep, InputLine, SerialPort};
use embedded_hal_async::delay::DelayNs;

/// Which branch one loop iteration took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopState {
    /// Module did not answer `AT`; instructions shown
    NotReady,
    /// Module in command mode; menu shown and one choice handled
    Ready,
}

/// Top-level menu loop tying the operator terminal to the module.
pub struct Configurator<O, M, D> {
    terminal: Terminal<O, D>,
    module: AtClient<M, D>,
    delay: D,
    config: ConfiguratorConfig,
}

impl<O, M, D> Configurator<O, M, D>
where
    O: SerialPort,
    M: SerialPort,
    D: DelayNs + Clone,
{
    pub fn new(operator: O, module: M, delay: D, config: ConfiguratorConfig) -> Self {
        Self {
            terminal: Terminal::new(operator, delay.clone(), &config),
            module: AtClient::new(module, delay.clone(), &config),
            delay,
            config,
        }
    }

    /// Print the banner, then handle menu iterations forever.
    pub async fn run(&mut self) -> ! {
        if let Err(e) = self.banner().await {
            warn!("Banner not sent: {}", e);
        }

        loop {
            if let Err(e) = self.run_once().await {
                warn!("Iteration aborted: {}", e);
            }
        }
    }

    /// Banner followed by a blank line, written once at start-up.
    pub async fn banner(&mut self) -> ConfiguratorResult<()> {
        self.terminal.write_line(self.config.messages.banner).await?;
        self.terminal.blank_line().await?;
        Ok(())
    }

    /// One pass of the loop. Command mode is checked afresh every time since
    /// only a button press on the module changes it.
    pub async fn run_once(&mut self) -> ConfiguratorResult<LoopState> {
        let messages = self.config.messages;

        let state = if self.module.in_command_mode().await {
            self.terminal.write_lines(messages.menu).await?;

            let mut line = InputLine::new();
            let count = self.terminal.next_line(&mut line).await;
            if count > 0 {
                self.dispatch(&line).await?;
            }
            sleep(&mut self.delay, self.config.loop_delay).await;
            LoopState::Ready
        } else {
            info!("Module not in command mode");
            self.terminal.write_lines(messages.not_ready).await?;
            self.terminal.write_line(messages.retrying).await?;
            sleep(&mut self.delay, self.config.retry_delay).await;
            LoopState::NotReady
        };

        self.terminal.blank_line().await?;
        Ok(state)
    }

    async fn dispatch(&mut self, raw: &[u8]) -> ConfiguratorResult<()> {
        let messages = self.config.messages;

        let line = match normalize(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!("Menu input rejected: {}", e);
                self.terminal.write_line(messages.input_too_long).await?;
                return Ok(());
            }
        };

        match MenuChoice::parse(&line) {
            MenuChoice::ModuleName => {
                apply_setting(
                    Setting::ModuleName,
                    &mut self.terminal,
                    &mut self.module,
                    messages,
                )
                .await?;
            }
            MenuChoice::Passkey => {
                apply_setting(
                    Setting::Passkey,
                    &mut self.terminal,
                    &mut self.module,
                    messages,
                )
                .await?;
            }
            MenuChoice::Raw => self.forward_raw(&line).await?,
        }

        Ok(())
    }

    async fn forward_raw(&mut self, line: &[u8]) -> ConfiguratorResult<()> {
        let messages = self.config.messages;
        self.terminal
            .write_labelled(messages.unknown_option, line)
            .await?;

        let command = match CommandLine::raw(line) {
            Ok(command) => command,
            Err(e) => {
                warn!("Raw command rejected: {}", e);
                self.terminal.write_line(messages.input_too_long).await?;
                return Ok(());
            }
        };

        let mut response = Response::new();
        let accepted = self.module.send(&command, &mut response).await?;
        info!("Raw command sent, module accepted = {}", accepted);
        self.terminal
            .write_labelled(messages.module_reply, response.as_bytes())
            .await?;
        Ok(())
    }
}
