//! Arithmetic core: token model, operations and the left-to-right evaluator
//!
//! Everything here is pure; persistence and input handling live in sibling
//! modules and depend on this one, never the other way around.

pub mod evaluator;
pub mod history;
pub(crate) mod number_serde;
mod operations;
pub mod token;

pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Division by zero is the only failure arithmetic can produce. Malformed
/// token streams are tolerated by the evaluator rather than reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Division by zero");
    }

    #[test]
    fn test_calc_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_copy() {
        let err = CalcError::DivisionByZero;
        let copied = err;
        assert_eq!(err, copied);
    }
}
