//! Module name and passkey setter tests

mod common;

use common::{Module, Operator, TestDelay};
use embassy_futures::block_on;
use hc05_configurator::at::AtClient;
use hc05_configurator::cli::{apply_setting, Messages, Setting, SetterOutcome, Terminal};
use hc05_configurator::link::INPUT_CAPACITY;
use hc05_configurator::{ConfiguratorConfig, ConfiguratorError, ConfiguratorResult, LinkError};

const MSG: &Messages = &Messages::FRENCH;

fn try_setter(
    setting: Setting,
    operator: &Operator,
    module: &Module,
) -> ConfiguratorResult<SetterOutcome> {
    let config = ConfiguratorConfig::default();
    let delay = TestDelay::new();
    let mut terminal = Terminal::new(operator.clone(), delay.clone(), &config);
    let mut at = AtClient::new(module.clone(), delay, &config);
    block_on(apply_setting(setting, &mut terminal, &mut at, MSG))
}

fn run_setter(setting: Setting, operator: &Operator, module: &Module) -> SetterOutcome {
    try_setter(setting, operator, module).unwrap()
}

#[test]
fn test_name_is_sent_and_confirmed() {
    let operator = Operator::typing("MyDevice\r\n");
    let module = Module::replying(&["OK\r\n"]);

    let outcome = run_setter(Setting::ModuleName, &operator, &module);

    assert_eq!(outcome, SetterOutcome::Sent { accepted: true });
    assert_eq!(module.written(), "AT+NAME=MyDevice\n");
    let output = operator.output();
    assert!(output.starts_with(MSG.name_prompt));
    assert!(output.contains(&format!("{}MyDevice\r\n", MSG.name_set)));
    assert!(output.contains(&format!("{}OK\r\n", MSG.module_reply)));
}

#[test]
fn test_rejected_name_still_shows_reply() {
    let operator = Operator::typing("MyDevice\n");
    let module = Module::replying(&["ERROR:(1D)\r\n"]);

    let outcome = run_setter(Setting::ModuleName, &operator, &module);

    assert_eq!(outcome, SetterOutcome::Sent { accepted: false });
    let output = operator.output();
    assert!(!output.contains(MSG.name_set));
    assert!(output.contains(&format!("{}ERROR:(1D)\r\n", MSG.module_reply)));
}

#[test]
fn test_passkey_is_confirmed_without_reply() {
    let operator = Operator::typing("4321\n");
    let module = Module::replying(&["OK\r\n"]);

    let outcome = run_setter(Setting::Passkey, &operator, &module);

    assert_eq!(outcome, SetterOutcome::Sent { accepted: true });
    assert_eq!(module.written(), "AT+PSWD=4321\n");
    let output = operator.output();
    assert!(output.contains(&format!("{}4321\r\n", MSG.passkey_set)));
    assert!(!output.contains(MSG.module_reply));
}

#[test]
fn test_rejected_passkey_prints_nothing_after_prompt() {
    let operator = Operator::typing("4321\n");
    let module = Module::replying(&["ERROR:(1D)\r\n"]);

    let outcome = run_setter(Setting::Passkey, &operator, &module);

    assert_eq!(outcome, SetterOutcome::Sent { accepted: false });
    assert_eq!(operator.output(), format!("{}\r\n", MSG.passkey_prompt));
}

#[test]
fn test_leading_space_is_ignored() {
    for setting in [Setting::ModuleName, Setting::Passkey] {
        let operator = Operator::typing(" 1234\n");
        let module = Module::replying(&["OK\r\n"]);

        let outcome = run_setter(setting, &operator, &module);

        assert_eq!(outcome, SetterOutcome::Ignored);
        assert_eq!(module.written(), "");
        assert_eq!(operator.unread(), 0);
    }
}

#[test]
fn test_overlong_value_is_refused() {
    let operator = Operator::typing(&format!("{}\n", "x".repeat(100)));
    let module = Module::replying(&["OK\r\n"]);

    let outcome = run_setter(Setting::ModuleName, &operator, &module);

    assert_eq!(outcome, SetterOutcome::InputTooLong);
    assert_eq!(module.written(), "");
    assert!(operator.output().contains(MSG.input_too_long));
    assert_eq!(operator.unread(), 0);
}

#[test]
fn test_full_length_value_from_crlf_terminal_is_sent() {
    let value = "x".repeat(INPUT_CAPACITY - 1);
    let operator = Operator::typing(&format!("{value}\r\n"));
    let module = Module::replying(&["OK\r\n"]);

    let outcome = run_setter(Setting::ModuleName, &operator, &module);

    assert_eq!(outcome, SetterOutcome::Sent { accepted: true });
    assert_eq!(module.written(), format!("AT+NAME={value}\n"));
    assert!(!operator.output().contains(MSG.input_too_long));
}

#[test]
fn test_module_write_failure_aborts_setter() {
    let operator = Operator::typing("MyDevice\n");
    let module = Module::broken();

    let outcome = try_setter(Setting::ModuleName, &operator, &module);

    assert_eq!(outcome, Err(ConfiguratorError::Link(LinkError::Write)));
    assert!(!operator.output().contains(MSG.name_set));
}

#[test]
fn test_value_without_line_ending() {
    let operator = Operator::typing("1234");
    let module = Module::replying(&["OK\r\n"]);

    let outcome = run_setter(Setting::Passkey, &operator, &module);

    assert_eq!(outcome, SetterOutcome::Sent { accepted: true });
    assert_eq!(module.written(), "AT+PSWD=1234\n");
}

#[test]
fn test_setting_prefixes() {
    assert_eq!(Setting::ModuleName.prefix(), "AT+NAME=");
    assert_eq!(Setting::Passkey.prefix(), "AT+PSWD=");
    assert!(Setting::ModuleName.echoes_reply());
    assert!(!Setting::Passkey.echoes_reply());
}
