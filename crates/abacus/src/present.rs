//! History table rows
//!
//! One row per calculation, newest first, each with a `dd.MM.yyyy` date
//! header, the expression as entered and its result.

use crate::core::history::{Calculation, History};
use crate::core::token::{Expression, Token};
use crate::format::NumberFormat;
use serde::Serialize;

/// Date header format
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A rendered history row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    /// Date the calculation was made
    pub date: String,
    /// Expression tokens joined by spaces
    pub expression: String,
    /// Formatted result
    pub result: String,
}

impl HistoryRow {
    /// Renders a single calculation
    #[must_use]
    pub fn from_calculation(calculation: &Calculation, format: &NumberFormat) -> Self {
        Self {
            date: calculation.timestamp.format(DATE_FORMAT).to_string(),
            expression: format_expression(&calculation.expression, format),
            result: format.format(calculation.result),
        }
    }
}

/// Renders an expression token by token
#[must_use]
pub fn format_expression(expression: &Expression, format: &NumberFormat) -> String {
    expression
        .iter()
        .map(|token| match token {
            Token::Number(n) => format.format(*n),
            Token::Operator(op) => op.symbol().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the whole history, newest first
#[must_use]
pub fn present_rows(history: &History, format: &NumberFormat) -> Vec<HistoryRow> {
    history
        .newest_first()
        .into_iter()
        .map(|c| HistoryRow::from_calculation(c, format))
        .collect()
}
