//! Left-to-right token stream evaluator
//!
//! `2 + 3 x 4` is `(2 + 3) x 4 = 20`: there is no precedence, each operator
//! folds into the running accumulator as soon as its right operand arrives.

use crate::core::token::{Expression, Token};
use crate::core::CalcResult;
use tracing::{debug, warn};

/// Evaluator for token streams
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an expression
    pub fn evaluate(&self, expression: &Expression) -> CalcResult<f64> {
        self.evaluate_tokens(expression.tokens())
    }

    /// Evaluates a raw token slice
    ///
    /// A stream that does not start with an operand (including the empty
    /// stream) yields `0`. A malformed `(operator, operand)` pair stops the
    /// fold and the accumulator so far is returned. A trailing operator is
    /// ignored. Division by zero aborts the whole evaluation.
    pub fn evaluate_tokens(&self, tokens: &[Token]) -> CalcResult<f64> {
        let Some(Token::Number(first)) = tokens.first() else {
            debug!(len = tokens.len(), "expression has no leading operand");
            return Ok(0.0);
        };

        let mut acc = *first;
        for pair in tokens[1..].chunks_exact(2) {
            let (Token::Operator(op), Token::Number(rhs)) = (pair[0], pair[1]) else {
                debug!(?pair, "malformed token pair, stopping early");
                break;
            };
            acc = op.apply(acc, rhs).map_err(|e| {
                warn!(lhs = acc, rhs, "division by zero");
                e
            })?;
        }

        debug!(len = tokens.len(), result = acc, "evaluated expression");
        Ok(acc)
    }
}

/// Evaluates an expression with a default [`Evaluator`]
pub fn evaluate(expression: &Expression) -> CalcResult<f64> {
    Evaluator::new().evaluate(expression)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operation};

    use Operation::{Add, Divide, Multiply, Subtract};

    fn expr(tokens: &[Token]) -> Expression {
        Expression::from_tokens(tokens.to_vec())
    }

    fn n(v: f64) -> Token {
        Token::Number(v)
    }

    fn op(o: Operation) -> Token {
        Token::Operator(o)
    }

    // ===== Basic evaluation tests =====

    #[test]
    fn test_single_operand() {
        assert_eq!(evaluate(&expr(&[n(5.0)])), Ok(5.0));
    }

    #[test]
    fn test_each_operation() {
        assert_eq!(evaluate(&expr(&[n(10.0), op(Add), n(5.0)])), Ok(15.0));
        assert_eq!(evaluate(&expr(&[n(10.0), op(Subtract), n(3.0)])), Ok(7.0));
        assert_eq!(evaluate(&expr(&[n(6.0), op(Multiply), n(7.0)])), Ok(42.0));
        assert_eq!(evaluate(&expr(&[n(20.0), op(Divide), n(4.0)])), Ok(5.0));
    }

    #[test]
    fn test_left_to_right_ignores_precedence() {
        let e = expr(&[n(2.0), op(Add), n(3.0), op(Multiply), n(4.0)]);
        assert_eq!(evaluate(&e), Ok(20.0));
    }

    #[test]
    fn test_repeated_subtraction() {
        let e = expr(&[n(10.0), op(Subtract), n(4.0), op(Subtract), n(3.0)]);
        assert_eq!(evaluate(&e), Ok(3.0));
    }

    #[test]
    fn test_division_chain() {
        let e = expr(&[n(100.0), op(Divide), n(5.0), op(Divide), n(4.0)]);
        assert_eq!(evaluate(&e), Ok(5.0));
    }

    // ===== Error handling tests =====

    #[test]
    fn test_division_by_zero() {
        let e = expr(&[n(6.0), op(Divide), n(0.0)]);
        assert_eq!(evaluate(&e), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_division_by_zero_mid_stream_aborts() {
        let e = expr(&[n(6.0), op(Divide), n(0.0), op(Add), n(1.0)]);
        assert_eq!(evaluate(&e), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_division_by_zero_after_reduction() {
        // (3 - 3) is zero but only the divisor matters
        let e = expr(&[n(3.0), op(Subtract), n(3.0), op(Divide), n(2.0)]);
        assert_eq!(evaluate(&e), Ok(0.0));
    }

    // ===== Malformed stream tolerance =====

    #[test]
    fn test_trailing_operator_ignored() {
        let e = expr(&[n(2.0), op(Add), n(3.0), op(Multiply)]);
        assert_eq!(evaluate(&e), Ok(5.0));
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(evaluate(&Expression::new()), Ok(0.0));
    }

    #[test]
    fn test_leading_operator_is_zero() {
        let e = expr(&[op(Add), n(3.0)]);
        assert_eq!(evaluate(&e), Ok(0.0));
    }

    #[test]
    fn test_operand_where_operator_expected_stops() {
        let e = expr(&[n(2.0), n(3.0), op(Add), n(4.0)]);
        assert_eq!(evaluate(&e), Ok(2.0));
    }

    #[test]
    fn test_operator_where_operand_expected_stops() {
        let e = expr(&[n(2.0), op(Add), n(3.0), op(Add), op(Add), n(9.0)]);
        assert_eq!(evaluate(&e), Ok(5.0));
    }

    #[test]
    fn test_malformed_pair_hides_later_division_by_zero() {
        let e = expr(&[n(1.0), op(Add), op(Divide), n(0.0)]);
        assert_eq!(evaluate(&e), Ok(1.0));
    }

    #[test]
    fn test_evaluator_struct_matches_free_fn() {
        let e = expr(&[n(9.0), op(Divide), n(3.0)]);
        assert_eq!(Evaluator::new().evaluate(&e), evaluate(&e));
        assert_eq!(Evaluator.evaluate_tokens(e.tokens()), Ok(3.0));
    }
}
