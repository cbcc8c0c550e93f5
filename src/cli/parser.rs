/// What the operator picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuChoice {
    ModuleName,
    Passkey,
    /// Forward the whole line to the module as an AT command
    Raw,
}

impl MenuChoice {
    /// Dispatch on the first character only, case-sensitive.
    pub fn parse(line: &[u8]) -> MenuChoice {
        match line.first() {
            Some(b'N') => MenuChoice::ModuleName,
            Some(b'P') => MenuChoice::Passkey,
            _ => MenuChoice::Raw,
        }
    }
}
