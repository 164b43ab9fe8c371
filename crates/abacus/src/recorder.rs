//! History recorder
//!
//! Owns the in-memory history list and keeps the persistence collaborator
//! in sync with it. Failed evaluations never reach the history or the store.

use crate::core::evaluator::Evaluator;
use crate::core::history::{Calculation, History};
use crate::core::token::Expression;
use crate::core::CalcError;
use crate::storage::{HistoryStore, StorageError, StorageResult};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from [`HistoryRecorder::evaluate`]
#[derive(Debug, Error)]
pub enum RecordError {
    /// Evaluation failed; history untouched
    #[error(transparent)]
    Calculation(#[from] CalcError),

    /// Evaluation succeeded and was added to history, but saving failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Source of calculation timestamps
pub type Clock = fn() -> DateTime<Utc>;

/// Evaluates expressions and records successful ones
#[derive(Debug)]
pub struct HistoryRecorder<S> {
    evaluator: Evaluator,
    history: History,
    store: S,
    clock: Clock,
}

impl<S: HistoryStore> HistoryRecorder<S> {
    /// Creates a recorder with an empty history
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            evaluator: Evaluator::new(),
            history: History::new(),
            store,
            clock: Utc::now,
        }
    }

    /// Creates a recorder seeded with whatever `store` already holds
    pub fn open(store: S) -> StorageResult<Self> {
        let entries = store.load()?;
        debug!(entries = entries.len(), "opened history");
        Ok(Self {
            history: History::from_entries(entries),
            ..Self::new(store)
        })
    }

    /// Replaces the timestamp source
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Evaluates `expression`, stamping it with the recorder's clock
    pub fn evaluate(&mut self, expression: Expression) -> Result<Calculation, RecordError> {
        let now = (self.clock)();
        self.evaluate_at(expression, now)
    }

    /// Evaluates `expression` and records it under `timestamp`
    ///
    /// On success exactly one calculation is appended and the whole history
    /// is saved. If saving fails the calculation stays in memory and the
    /// storage error is returned.
    pub fn evaluate_at(
        &mut self,
        expression: Expression,
        timestamp: DateTime<Utc>,
    ) -> Result<Calculation, RecordError> {
        let result = self.evaluator.evaluate(&expression)?;
        let calculation = Calculation::with_timestamp(expression, result, timestamp);
        self.history.push(calculation.clone());

        if let Err(e) = self.store.save(self.history.as_slice()) {
            warn!(error = %e, "failed to persist history");
            return Err(RecordError::Storage(e));
        }
        Ok(calculation)
    }

    /// Returns the recorded history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the persistence collaborator
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Empties the history and saves the empty list
    pub fn clear(&mut self) -> StorageResult<()> {
        self.history.clear();
        self.store.save(self.history.as_slice())
    }
}
