//! Binary operations
//!
//! Four operations, no precedence: the evaluator applies them strictly in
//! the order they were entered.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe operation enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (x)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations, in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "/",
        }
    }

    /// Maps a keypad character to an operation
    ///
    /// Accepts the display symbols plus the common alternates `*`, `×` and `÷`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            'x' | 'X' | '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Parses a single-symbol operator token
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Applies the operation to `lhs` and `rhs`
    ///
    /// Add, subtract and multiply are total. Divide fails when `rhs` is
    /// exactly zero (either sign).
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
