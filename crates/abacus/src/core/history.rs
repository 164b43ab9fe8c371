//! Calculation history
//!
//! Calculations are kept in insertion order. Presentation order (newest
//! first) is derived on demand from the timestamps.

use crate::core::token::Expression;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The expression that was evaluated
    pub expression: Expression,
    /// The result of the calculation
    #[serde(with = "crate::core::number_serde")]
    pub result: f64,
    /// When the calculation was performed
    pub timestamp: DateTime<Utc>,
}

impl Calculation {
    /// Creates a calculation stamped with the current time
    #[must_use]
    pub fn new(expression: Expression, result: f64) -> Self {
        Self::with_timestamp(expression, result, Utc::now())
    }

    /// Creates a calculation with a specific timestamp
    #[must_use]
    pub fn with_timestamp(
        expression: Expression,
        result: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    /// Returns a one-line display string
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Calculator history list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<Calculation>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a history from previously stored calculations
    #[must_use]
    pub fn from_entries(entries: Vec<Calculation>) -> Self {
        Self { entries }
    }

    /// Appends a calculation
    pub fn push(&mut self, calculation: Calculation) {
        self.entries.push(calculation);
    }

    /// Returns the number of calculations
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all calculations
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the calculations in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[Calculation] {
        &self.entries
    }

    /// Returns an iterator over the calculations (insertion order)
    pub fn iter(&self) -> impl Iterator<Item = &Calculation> {
        self.entries.iter()
    }

    /// Returns the most recently appended calculation
    #[must_use]
    pub fn last(&self) -> Option<&Calculation> {
        self.entries.last()
    }

    /// Returns the calculations sorted by timestamp, newest first
    ///
    /// Calculations sharing a timestamp come out latest-inserted first.
    #[must_use]
    pub fn newest_first(&self) -> Vec<&Calculation> {
        let mut sorted: Vec<&Calculation> = self.entries.iter().rev().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    /// Serializes the history to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Deserializes history from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<Calculation> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }
}
