//! Property-based tests for evaluation and history recording

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use abacus::prelude::*;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn operand_strategy() -> impl Strategy<Value = f64> {
    (-1000i32..1000i32).prop_map(|n| f64::from(n) / 4.0)
}

fn nonzero_operand_strategy() -> impl Strategy<Value = f64> {
    operand_strategy().prop_filter("divisor must be nonzero", |v| *v != 0.0)
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

/// A well-formed expression with no zero divisors
fn expression_strategy() -> impl Strategy<Value = (f64, Vec<(Operation, f64)>)> {
    (
        operand_strategy(),
        prop::collection::vec((operation_strategy(), nonzero_operand_strategy()), 0..8),
    )
}

fn build(first: f64, pairs: &[(Operation, f64)]) -> Expression {
    let mut expr = Expression::new().with(first);
    for (op, rhs) in pairs {
        expr.push_operator(*op);
        expr.push_number(*rhs);
    }
    expr
}

fn reference_fold(first: f64, pairs: &[(Operation, f64)]) -> f64 {
    pairs.iter().fold(first, |acc, (op, rhs)| match op {
        Operation::Add => acc + rhs,
        Operation::Subtract => acc - rhs,
        Operation::Multiply => acc * rhs,
        Operation::Divide => acc / rhs,
    })
}

// ===== Evaluator properties =====

proptest! {
    /// Evaluation is exactly the left fold over (operator, operand) pairs
    #[test]
    fn prop_evaluate_is_left_fold((first, pairs) in expression_strategy()) {
        let expr = build(first, &pairs);
        prop_assert_eq!(evaluate(&expr).unwrap(), reference_fold(first, &pairs));
    }

    /// A single operand evaluates to itself
    #[test]
    fn prop_single_operand_identity(v in operand_strategy()) {
        prop_assert_eq!(evaluate(&Expression::new().with(v)), Ok(v));
    }

    /// A trailing operator never changes the result
    #[test]
    fn prop_trailing_operator_ignored(
        (first, pairs) in expression_strategy(),
        trailing in operation_strategy(),
    ) {
        let expr = build(first, &pairs);
        let with_trailing = expr.clone().with(trailing);
        prop_assert_eq!(evaluate(&with_trailing), evaluate(&expr));
    }

    /// Any zero divisor anywhere in a well-formed stream fails the whole evaluation
    #[test]
    fn prop_zero_divisor_always_fails(
        (first, mut pairs) in expression_strategy(),
        at in 0usize..8,
    ) {
        let index = at.min(pairs.len());
        pairs.insert(index, (Operation::Divide, 0.0));
        let expr = build(first, &pairs);
        prop_assert_eq!(evaluate(&expr), Err(CalcError::DivisionByZero));
    }

    /// `a + b x c` is `(a + b) x c`, never `a + (b x c)`
    #[test]
    fn prop_no_precedence(a in operand_strategy(), b in operand_strategy(), c in operand_strategy()) {
        let expr = Expression::new()
            .with(a)
            .with(Operation::Add)
            .with(b)
            .with(Operation::Multiply)
            .with(c);
        prop_assert_eq!(evaluate(&expr).unwrap(), (a + b) * c);
    }
}

// ===== Recorder properties =====

proptest! {
    /// N successful evaluations with distinct timestamps present strictly descending
    #[test]
    fn prop_history_presented_newest_first(
        offsets in prop::collection::hash_set(0i64..1_000_000, 1..20),
    ) {
        let mut recorder = HistoryRecorder::new(MemoryStore::new());
        for (i, secs) in offsets.iter().enumerate() {
            let ts = Utc.timestamp_opt(1_600_000_000 + secs, 0).unwrap();
            recorder
                .evaluate_at(Expression::new().with(i as f64), ts)
                .unwrap();
        }

        let ordered = recorder.history().newest_first();
        prop_assert_eq!(ordered.len(), offsets.len());
        for window in ordered.windows(2) {
            prop_assert!(window[0].timestamp > window[1].timestamp);
        }
    }

    /// Each success appends one calculation; each failure appends none
    #[test]
    fn prop_history_grows_only_on_success(divisors in prop::collection::vec(-3i32..3, 1..20)) {
        let mut recorder = HistoryRecorder::new(MemoryStore::new());
        let mut expected = 0usize;
        for d in divisors {
            let expr = Expression::new()
                .with(12.0)
                .with(Operation::Divide)
                .with(f64::from(d));
            match recorder.evaluate(expr.clone()) {
                Ok(calc) => {
                    expected += 1;
                    prop_assert_eq!(calc.expression, expr);
                    prop_assert_eq!(calc.result, 12.0 / f64::from(d));
                }
                Err(RecordError::Calculation(CalcError::DivisionByZero)) => {
                    prop_assert_eq!(d, 0);
                }
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
            prop_assert_eq!(recorder.history().len(), expected);
            prop_assert_eq!(recorder.store().saved().len(), expected);
        }
    }
}
