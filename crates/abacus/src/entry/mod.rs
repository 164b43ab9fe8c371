//! Keypad-driven entry session
//!
//! Mirrors a pocket calculator screen: the display holds the operand being
//! typed, operator presses move it into the pending token stream, and
//! equals hands the stream to the history recorder.

mod keypad;

pub use keypad::{parse_keys, KeyError, KeypadAction};

use crate::core::history::{Calculation, History};
use crate::core::token::Expression;
use crate::core::{CalcError, Operation};
use crate::format::NumberFormat;
use crate::recorder::{HistoryRecorder, RecordError};
use crate::storage::{HistoryStore, StorageError};
use tracing::debug;

/// Display text shown after a failed evaluation
pub const ERROR_MARKER: &str = "Error";

const RESET_DISPLAY: &str = "0";

/// What a key press did
#[derive(Debug, Clone, PartialEq)]
pub enum EntryEvent {
    /// The display changed
    Updated,
    /// The press had no effect
    Ignored,
    /// Equals produced a recorded calculation
    Evaluated(Calculation),
    /// Equals failed; the display shows [`ERROR_MARKER`]
    Failed(CalcError),
    /// Pending expression dropped and display reset
    Cleared,
}

/// Calculator screen state plus the recorder behind it
#[derive(Debug)]
pub struct EntrySession<S> {
    display: String,
    pending: Expression,
    last_result: Option<f64>,
    format: NumberFormat,
    recorder: HistoryRecorder<S>,
}

impl<S: HistoryStore> EntrySession<S> {
    /// Creates a session with the default number format
    #[must_use]
    pub fn new(recorder: HistoryRecorder<S>) -> Self {
        Self::with_format(recorder, NumberFormat::default())
    }

    /// Creates a session with a custom number format
    #[must_use]
    pub fn with_format(recorder: HistoryRecorder<S>, format: NumberFormat) -> Self {
        Self {
            display: RESET_DISPLAY.to_string(),
            pending: Expression::new(),
            last_result: None,
            format,
            recorder,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns true if the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    /// Returns the tokens entered since the last equals or clear
    #[must_use]
    pub fn pending(&self) -> &Expression {
        &self.pending
    }

    /// Returns the result of the last successful evaluation
    #[must_use]
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Returns the number format used by the display
    #[must_use]
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Returns the recorded history
    #[must_use]
    pub fn history(&self) -> &History {
        self.recorder.history()
    }

    /// Returns the recorder
    #[must_use]
    pub fn recorder(&self) -> &HistoryRecorder<S> {
        &self.recorder
    }

    /// Applies one key press
    ///
    /// Arithmetic failures are reported as [`EntryEvent::Failed`]. An `Err`
    /// means the calculation succeeded and is displayed but could not be
    /// persisted.
    pub fn press(&mut self, action: KeypadAction) -> Result<EntryEvent, StorageError> {
        let event = match action {
            KeypadAction::Digit(d) if d <= 9 => self.type_char(char::from(b'0' + d)),
            KeypadAction::Digit(_) => EntryEvent::Ignored,
            KeypadAction::Decimal => self.type_char(self.format.decimal_separator),
            KeypadAction::Operator(op) => self.operator(op),
            KeypadAction::Equals => return self.equals(),
            KeypadAction::Clear => self.clear(),
        };
        Ok(event)
    }

    /// Applies a sequence of key presses, stopping at the first storage error
    pub fn press_all(
        &mut self,
        actions: impl IntoIterator<Item = KeypadAction>,
    ) -> Result<Vec<EntryEvent>, StorageError> {
        actions.into_iter().map(|a| self.press(a)).collect()
    }

    fn type_char(&mut self, c: char) -> EntryEvent {
        let separator = self.format.decimal_separator;
        if c == separator && self.display.contains(separator) {
            return EntryEvent::Ignored;
        }

        if self.is_error() {
            self.reset_display();
        }

        if self.display == RESET_DISPLAY {
            if c == separator {
                self.display.push(c);
            } else {
                self.display = c.to_string();
            }
        } else {
            self.display.push(c);
        }
        EntryEvent::Updated
    }

    fn operator(&mut self, op: Operation) -> EntryEvent {
        let Some(value) = self.format.parse(&self.display) else {
            debug!(display = %self.display, "operator ignored, display is not a number");
            return EntryEvent::Ignored;
        };
        self.pending.push_number(value);
        self.pending.push_operator(op);
        self.reset_display();
        EntryEvent::Updated
    }

    fn equals(&mut self) -> Result<EntryEvent, StorageError> {
        let Some(value) = self.format.parse(&self.display) else {
            debug!(display = %self.display, "equals ignored, display is not a number");
            return Ok(EntryEvent::Ignored);
        };
        self.pending.push_number(value);
        let expression = std::mem::take(&mut self.pending);

        match self.recorder.evaluate(expression) {
            Ok(calculation) => {
                self.show_result(calculation.result);
                Ok(EntryEvent::Evaluated(calculation))
            }
            Err(RecordError::Calculation(e)) => {
                self.display = ERROR_MARKER.to_string();
                Ok(EntryEvent::Failed(e))
            }
            Err(RecordError::Storage(e)) => {
                if let Some(result) = self.recorder.history().last().map(|c| c.result) {
                    self.show_result(result);
                }
                Err(e)
            }
        }
    }

    fn clear(&mut self) -> EntryEvent {
        self.pending.clear();
        self.reset_display();
        EntryEvent::Cleared
    }

    fn show_result(&mut self, result: f64) {
        self.display = self.format.format(result);
        self.last_result = Some(result);
    }

    fn reset_display(&mut self) {
        self.display = RESET_DISPLAY.to_string();
    }
}
