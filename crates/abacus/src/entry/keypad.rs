//! Keypad actions
//!
//! Error prevention: each button maps to one typed action, so the entry
//! session never has to interpret free text.

use crate::core::Operation;
use thiserror::Error;

/// Errors from parsing keypad sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    /// A character that is not on the keypad
    #[error("Unknown key: '{0}'")]
    UnknownKey(char),
}

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert the decimal separator
    Decimal,
    /// Finish the current operand and queue an operator
    Operator(Operation),
    /// Evaluate the pending expression
    Equals,
    /// Drop the pending expression and reset the display
    Clear,
}

impl KeypadAction {
    /// Maps a typed character to an action
    ///
    /// Both `.` and `,` press the decimal key whatever separator the display
    /// uses. Whitespace maps to `None`.
    pub fn from_char(c: char) -> Result<Option<Self>, KeyError> {
        if c.is_whitespace() {
            return Ok(None);
        }
        let action = match c {
            '0'..='9' => Self::Digit(c as u8 - b'0'),
            '.' | ',' => Self::Decimal,
            '=' => Self::Equals,
            'C' | 'c' => Self::Clear,
            _ => Self::Operator(Operation::from_char(c).ok_or(KeyError::UnknownKey(c))?),
        };
        Ok(Some(action))
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self, decimal_separator: char) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => decimal_separator.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
        }
    }
}

/// Parses a typed key sequence such as `"12+3="`
pub fn parse_keys(keys: &str) -> Result<Vec<KeypadAction>, KeyError> {
    keys.chars()
        .filter_map(|c| KeypadAction::from_char(c).transpose())
        .collect()
}
