pub mod input;
pub mod menu;
pub mod messages;
pub mod parser;
pub mod setters;
pub mod terminal;

pub use menu::{Configurator, LoopState};
pub use messages::Messages;
pub use parser::MenuChoice;
pub use setters::{apply_setting, Setting, SetterOutcome};
pub use terminal::Terminal;
