//! Host key identifiers used by the configurable bindings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A key as reported by the host's input events.
///
/// Keys are written to the config file by name (`"F8"`, `"Q"`, `"Enter"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    /// Function key `F1`..=`F12`.
    F(u8),
    /// Printable character, stored upper-cased.
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Tab,
    Space,
}

impl Key {
    /// Builds a character key; letters are normalised to upper case.
    pub fn char(ch: char) -> Self {
        Self::Char(ch.to_ascii_uppercase())
    }

    /// Returns the key in the form it reads back from the config file, or
    /// `None` if it has no config name.
    pub fn normalized(self) -> Option<Self> {
        match self {
            Key::F(n) if (1..=12).contains(&n) => Some(self),
            Key::F(_) => None,
            Key::Char(ch) if ch.is_whitespace() || ch.is_control() => None,
            Key::Char(ch) => Some(Key::char(ch)),
            named => Some(named),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::F(n) => write!(f, "F{n}"),
            Key::Char(ch) => write!(f, "{ch}"),
            Key::Up => f.write_str("Up"),
            Key::Down => f.write_str("Down"),
            Key::Left => f.write_str("Left"),
            Key::Right => f.write_str("Right"),
            Key::Enter => f.write_str("Enter"),
            Key::Escape => f.write_str("Escape"),
            Key::Tab => f.write_str("Tab"),
            Key::Space => f.write_str("Space"),
        }
    }
}

impl FromStr for Key {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let named = match trimmed.to_ascii_lowercase().as_str() {
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "enter" => Some(Key::Enter),
            "escape" | "esc" => Some(Key::Escape),
            "tab" => Some(Key::Tab),
            "space" => Some(Key::Space),
            _ => None,
        };
        if let Some(key) = named {
            return Ok(key);
        }

        if let Some(number) = trimmed
            .strip_prefix('F')
            .or_else(|| trimmed.strip_prefix('f'))
            .and_then(|rest| rest.parse::<u8>().ok())
            && (1..=12).contains(&number)
        {
            return Ok(Key::F(number));
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_whitespace() => Ok(Key::char(ch)),
            _ => Err(ConfigError::UnknownKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}
