//! Keyboard identifiers.
//!
//! Keys are identified by stable string codes that name the physical key,
//! independent of layout and modifiers ("KeyA", "ArrowLeft", "Enter", ...).
use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// A stable identifier for a physical key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(Cow<'static, str>);

impl KeyCode {
    /// Enter / Return.
    pub const ENTER: Self = Self::named("Enter");
    /// Space bar.
    pub const SPACE: Self = Self::named("Space");
    /// Escape.
    pub const ESCAPE: Self = Self::named("Escape");
    /// Tab.
    pub const TAB: Self = Self::named("Tab");
    /// Backspace.
    pub const BACKSPACE: Self = Self::named("Backspace");
    /// Up arrow.
    pub const UP: Self = Self::named("ArrowUp");
    /// Down arrow.
    pub const DOWN: Self = Self::named("ArrowDown");
    /// Left arrow.
    pub const LEFT: Self = Self::named("ArrowLeft");
    /// Right arrow.
    pub const RIGHT: Self = Self::named("ArrowRight");
    /// Left shift.
    pub const SHIFT: Self = Self::named("ShiftLeft");
    /// Left control.
    pub const CTRL: Self = Self::named("ControlLeft");
    /// Left alt.
    pub const ALT: Self = Self::named("AltLeft");

    /// A key code from a static name.
    pub const fn named(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The code for a letter or digit key, e.g. `'a'` -> "KeyA", `'7'` ->
    /// "Digit7". Returns `None` for other characters.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(Cow::Owned(format!("Key{}", c.to_ascii_uppercase()))))
        } else if c.is_ascii_digit() {
            Some(Self(Cow::Owned(format!("Digit{c}"))))
        } else if c == ' ' {
            Some(Self::SPACE)
        } else {
            None
        }
    }

    /// The code for a function key, e.g. `F5`.
    pub fn function(n: u8) -> Self {
        Self(Cow::Owned(format!("F{n}")))
    }

    /// The underlying code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for KeyCode {
    fn from(s: &'static str) -> Self {
        Self::named(s)
    }
}

impl From<String> for KeyCode {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char() {
        assert_eq!(KeyCode::from_char('a'), Some(KeyCode::named("KeyA")));
        assert_eq!(KeyCode::from_char('Z'), Some(KeyCode::named("KeyZ")));
        assert_eq!(KeyCode::from_char('3'), Some(KeyCode::named("Digit3")));
        assert_eq!(KeyCode::from_char(' '), Some(KeyCode::SPACE));
        assert_eq!(KeyCode::from_char('!'), None);
    }

    #[test]
    fn owned_and_borrowed_compare_equal() {
        assert_eq!(KeyCode::from("Enter".to_string()), KeyCode::ENTER);
    }

    #[test]
    fn serde_is_a_plain_string() {
        let json = serde_json::to_string(&KeyCode::LEFT).unwrap();
        assert_eq!(json, "\"ArrowLeft\"");
        let k: KeyCode = serde_json::from_str("\"KeyQ\"").unwrap();
        assert_eq!(k.as_str(), "KeyQ");
    }
}
