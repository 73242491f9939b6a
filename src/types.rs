use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{NavError, NavResult};

/// Open/closed flag owned by a single `NavItem`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenState {
    open: bool,
}

impl OpenState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Flip the flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Identifier of a dropdown panel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MenuName(Cow<'static, str>);

impl MenuName {
    /// The top-level panel, shown when a dropdown first mounts.
    pub const MAIN: MenuName = MenuName(Cow::Borrowed("main"));

    /// Parse a panel name, rejecting blank input
    pub fn parse(name: &str) -> NavResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NavError::EmptyMenuName);
        }
        Ok(Self(Cow::Owned(name.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MenuName {
    fn default() -> Self {
        Self::MAIN
    }
}

impl FromStr for MenuName {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MenuName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_state_parity() {
        let mut state = OpenState::default();
        assert!(!state.is_open());

        for n in 1..=6 {
            state.toggle();
            assert_eq!(state.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_open_states_are_independent() {
        let mut a = OpenState::default();
        let b = OpenState::default();
        a.toggle();
        assert!(a.is_open());
        assert!(!b.is_open());
    }

    #[test]
    fn test_menu_name_default_is_main() {
        assert_eq!(MenuName::default(), MenuName::MAIN);
        assert_eq!(MenuName::MAIN.as_str(), "main");
    }

    #[test]
    fn test_menu_name_parse() {
        let parsed: MenuName = " main ".parse().unwrap();
        assert_eq!(parsed, MenuName::MAIN);
        assert_eq!(MenuName::parse("settings").unwrap().to_string(), "settings");
    }

    #[test]
    fn test_menu_name_rejects_blank() {
        assert!(matches!(MenuName::parse(""), Err(NavError::EmptyMenuName)));
        assert!(matches!(MenuName::parse("   "), Err(NavError::EmptyMenuName)));
    }
}
