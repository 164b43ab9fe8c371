//! Abacus - left-to-right calculator core with history
//!
//! A four-function calculator whose expressions are flat token streams
//! evaluated strictly left to right, with every successful calculation
//! recorded in a persisted history.
//!
//! # Layers
//!
//! - [`core`]: tokens, operations and the evaluator (pure)
//! - [`recorder`]: appends successful calculations and persists them
//! - [`storage`]: the persistence collaborator ([`storage::HistoryStore`])
//! - [`entry`]: keypad-driven entry session producing expressions
//! - [`present`]: history rows for display, newest first
//!
//! # Example
//!
//! ```rust
//! use abacus::prelude::*;
//!
//! // No precedence: (2 + 3) x 4
//! let expr = Expression::new()
//!     .with(2.0)
//!     .with(Operation::Add)
//!     .with(3.0)
//!     .with(Operation::Multiply)
//!     .with(4.0);
//! assert_eq!(evaluate(&expr), Ok(20.0));
//!
//! // Keypad entry with an in-memory history
//! let mut session = EntrySession::new(HistoryRecorder::new(MemoryStore::new()));
//! session.press_all(parse_keys("6/0=").unwrap()).unwrap();
//! assert!(session.is_error());
//! assert!(session.history().is_empty());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod entry;
pub mod format;
pub mod present;
pub mod recorder;
pub mod storage;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{evaluate, Evaluator};
    pub use crate::core::history::{Calculation, History};
    pub use crate::core::token::{Expression, Token};
    pub use crate::core::{CalcError, CalcResult, Operation};
    pub use crate::entry::{parse_keys, EntryEvent, EntrySession, KeyError, KeypadAction};
    pub use crate::format::NumberFormat;
    pub use crate::present::{present_rows, HistoryRow};
    pub use crate::recorder::{HistoryRecorder, RecordError};
    pub use crate::storage::{HistoryStore, JsonFileStore, MemoryStore, StorageError};
}
