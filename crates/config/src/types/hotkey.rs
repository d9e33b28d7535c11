//! Hotkey parsing and validation.
//!
//! Responsibilities:
//! - Parse human-readable key strings ("f11", "ctrl+shift+x", "esc") into `HotKey`.
//! - Provide a canonical lowercase form used for display, serialization and conflict checks.
//!
//! Does NOT handle:
//! - Registering hotkeys with the operating system.
//!
//! Invariants:
//! - Base keys are a single ASCII letter or digit, `f1`..`f24`, or a named key.
//! - Exactly one base key per hotkey; modifiers may repeat but are stored as flags.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::constants::MAX_FUNCTION_KEY;

/// Errors that can occur when parsing a hotkey.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotKeyError {
    /// Invalid key syntax
    #[error("expected a key like 'f11', 'i' or 'ctrl+x'")]
    InvalidSyntax,

    /// Unknown key name
    #[error("unknown key name '{name}'")]
    UnknownKey {
        /// The unknown key name
        name: String,
    },
}

/// Key code names accepted in hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// An ASCII letter or digit, stored lowercase
    Char(char),
    /// Function key F1-F24
    F(u8),
    Esc,
    Enter,
    Space,
    Tab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::F(n) => write!(f, "f{}", n),
            Self::Esc => write!(f, "esc"),
            Self::Enter => write!(f, "enter"),
            Self::Space => write!(f, "space"),
            Self::Tab => write!(f, "tab"),
            Self::Backspace => write!(f, "backspace"),
            Self::Delete => write!(f, "delete"),
            Self::Insert => write!(f, "insert"),
            Self::Home => write!(f, "home"),
            Self::End => write!(f, "end"),
            Self::PageUp => write!(f, "pageup"),
            Self::PageDown => write!(f, "pagedown"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Modifier flags for key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// A validated hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotKey {
    code: KeyCode,
    modifiers: Modifiers,
}

impl HotKey {
    pub fn code(&self) -> KeyCode {
        self.code
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl fmt::Display for HotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.alt {
            write!(f, "alt+")?;
        }
        if self.modifiers.shift {
            write!(f, "shift+")?;
        }
        write!(f, "{}", self.code)
    }
}

impl Serialize for HotKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl FromStr for HotKey {
    type Err = HotKeyError;

    /// Parse a key string like "ctrl+x", "F1", "shift+tab".
    fn from_str(key_str: &str) -> Result<Self, Self::Err> {
        let key_str = key_str.trim();
        if key_str.is_empty() {
            return Err(HotKeyError::InvalidSyntax);
        }

        let mut modifiers = Modifiers::default();
        let mut key_name = "";

        for part in key_str.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ => {
                    // Multiple non-modifier parts is invalid
                    if !key_name.is_empty() {
                        return Err(HotKeyError::InvalidSyntax);
                    }
                    key_name = part;
                }
            }
        }

        if key_name.is_empty() {
            return Err(HotKeyError::InvalidSyntax);
        }

        let code = parse_key_code(key_name)?;
        Ok(Self { code, modifiers })
    }
}

/// Parse a key code name (without modifiers).
fn parse_key_code(name: &str) -> Result<KeyCode, HotKeyError> {
    let name_lower = name.to_ascii_lowercase();

    match name_lower.as_str() {
        "esc" | "escape" => return Ok(KeyCode::Esc),
        "enter" | "return" => return Ok(KeyCode::Enter),
        "space" => return Ok(KeyCode::Space),
        "tab" => return Ok(KeyCode::Tab),
        "backspace" => return Ok(KeyCode::Backspace),
        "delete" | "del" => return Ok(KeyCode::Delete),
        "insert" | "ins" => return Ok(KeyCode::Insert),
        "home" => return Ok(KeyCode::Home),
        "end" => return Ok(KeyCode::End),
        "pageup" | "page_up" | "pgup" => return Ok(KeyCode::PageUp),
        "pagedown" | "page_down" | "pgdn" => return Ok(KeyCode::PageDown),
        "up" => return Ok(KeyCode::Up),
        "down" => return Ok(KeyCode::Down),
        "left" => return Ok(KeyCode::Left),
        "right" => return Ok(KeyCode::Right),
        _ => {}
    }

    if let Some(num_str) = name_lower.strip_prefix('f')
        && let Ok(num) = num_str.parse::<u8>()
        && (1..=MAX_FUNCTION_KEY).contains(&num)
    {
        return Ok(KeyCode::F(num));
    }

    let mut chars = name_lower.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_ascii_alphanumeric()
    {
        return Ok(KeyCode::Char(c));
    }

    Err(HotKeyError::UnknownKey {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<HotKey, HotKeyError> {
        s.parse()
    }

    #[test]
    fn test_parse_simple_char() {
        let key = parse("i").unwrap();
        assert_eq!(key.code(), KeyCode::Char('i'));
        assert_eq!(key.modifiers(), Modifiers::default());
    }

    #[test]
    fn test_parse_uppercase_char_is_lowercased() {
        assert_eq!(parse("I").unwrap().code(), KeyCode::Char('i'));
    }

    #[test]
    fn test_parse_function_key() {
        assert_eq!(parse("F11").unwrap().code(), KeyCode::F(11));
        assert_eq!(parse("f12").unwrap().code(), KeyCode::F(12));
        assert_eq!(parse("f24").unwrap().code(), KeyCode::F(24));
    }

    #[test]
    fn test_parse_invalid_function_key() {
        assert!(parse("f0").is_err());
        assert!(parse("f25").is_err());
        assert!(parse("f100").is_err());
    }

    #[test]
    fn test_parse_modifiers() {
        let key = parse("Ctrl+Shift+x").unwrap();
        assert_eq!(key.code(), KeyCode::Char('x'));
        assert!(key.modifiers().ctrl);
        assert!(key.modifiers().shift);
        assert!(!key.modifiers().alt);
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse("Esc").unwrap().code(), KeyCode::Esc);
        assert_eq!(parse("escape").unwrap().code(), KeyCode::Esc);
        assert_eq!(parse("PgUp").unwrap().code(), KeyCode::PageUp);
        assert_eq!(parse("space").unwrap().code(), KeyCode::Space);
    }

    #[test]
    fn test_parse_rejects_bad_syntax() {
        assert_eq!(parse(""), Err(HotKeyError::InvalidSyntax));
        assert_eq!(parse("   "), Err(HotKeyError::InvalidSyntax));
        assert_eq!(parse("ctrl+"), Err(HotKeyError::InvalidSyntax));
        assert_eq!(parse("a+b"), Err(HotKeyError::InvalidSyntax));
        assert!(matches!(
            parse("?"),
            Err(HotKeyError::UnknownKey { .. })
        ));
        assert!(matches!(
            parse("numpad9"),
            Err(HotKeyError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_canonical_display() {
        assert_eq!(parse("Shift + Ctrl + F5").unwrap().to_string(), "ctrl+shift+f5");
        assert_eq!(parse("PageDown").unwrap().to_string(), "pagedown");
    }

    #[test]
    fn test_equal_after_normalization() {
        assert_eq!(parse("CTRL+X").unwrap(), parse("ctrl + x").unwrap());
    }
}
