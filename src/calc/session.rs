//! One calculator session: the call surface used by the key handler and
//! the keypad.
//!
//! Every button or key press maps to exactly one method here. Errors are
//! returned to the caller for status reporting and also latched so that
//! [`Calculator::display`] shows `Error` until the next press.

use super::accumulator::{Accumulator, AccumulatorState};
use super::error::CalcError;
use super::history::HistoryLog;
use super::memory::MemoryRegister;
use super::ops::{AngleUnit, Operator, UnaryFn};
use tracing::{debug, info, warn};

/// Text shown on the display after a failed operation.
pub const ERROR_TEXT: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
    Store,
}

impl MemoryOp {
    pub fn label(self) -> &'static str {
        match self {
            MemoryOp::Clear => "MC",
            MemoryOp::Recall => "MR",
            MemoryOp::Add => "M+",
            MemoryOp::Subtract => "M−",
            MemoryOp::Store => "MS",
        }
    }
}

#[derive(Debug, Default)]
pub struct Calculator {
    accumulator: Accumulator,
    memory: MemoryRegister,
    history: HistoryLog,
    angle_unit: AngleUnit,
    error: Option<CalcError>,
}

impl Calculator {
    pub fn new(angle_unit: AngleUnit) -> Self {
        Self {
            angle_unit,
            ..Self::default()
        }
    }

    pub fn press_digit(&mut self, ch: char) -> bool {
        self.error = None;
        self.accumulator.input_digit(ch)
    }

    pub fn press_operator(&mut self, op: Operator) -> bool {
        self.error = None;
        self.accumulator.input_operator(op)
    }

    /// Evaluate the pending operation and record it in the history.
    pub fn press_equals(&mut self) -> Result<Option<f64>, CalcError> {
        self.error = None;
        match self.accumulator.evaluate() {
            Ok(Some(eval)) => {
                let expression = eval.expression();
                info!(%expression, result = eval.result, "evaluated");
                self.history.append(expression, eval.result);
                Ok(Some(eval.result))
            }
            Ok(None) => Ok(None),
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn press_unary(&mut self, f: UnaryFn) -> Result<Option<f64>, CalcError> {
        self.error = None;
        match self.accumulator.apply_unary(f, self.angle_unit) {
            Ok(value) => {
                if let Some(value) = value {
                    debug!(function = f.name(), value, "applied function");
                }
                Ok(value)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn press_negate(&mut self) -> bool {
        self.error = None;
        self.accumulator.toggle_sign()
    }

    pub fn press_backspace(&mut self) -> bool {
        if self.error.take().is_some() {
            return true;
        }
        self.accumulator.backspace()
    }

    pub fn press_clear(&mut self) {
        self.error = None;
        self.accumulator.clear();
    }

    /// Run a memory key against the value currently on the display.
    ///
    /// Store/add/subtract do nothing while the display shows `Error`.
    pub fn press_memory(&mut self, op: MemoryOp) {
        match op {
            MemoryOp::Clear => self.memory.clear(),
            MemoryOp::Recall => {
                self.error = None;
                self.accumulator.load_value(self.memory.recall());
            }
            MemoryOp::Store | MemoryOp::Add | MemoryOp::Subtract => {
                let Some(value) = self.displayed_value() else {
                    return;
                };
                match op {
                    MemoryOp::Store => self.memory.store(value),
                    MemoryOp::Add => self.memory.add(value),
                    _ => self.memory.subtract(value),
                }
            }
        }
        debug!(op = op.label(), memory = self.memory.recall(), "memory updated");
    }

    /// Text for the clipboard: exactly what the display shows.
    pub fn copy_text(&self) -> String {
        self.display()
    }

    /// Load clipboard text into the entry. Text that is not a number is
    /// ignored without raising an error.
    pub fn paste(&mut self, text: &str) -> bool {
        match self.accumulator.set_entry(text) {
            Ok(_) => {
                self.error = None;
                true
            }
            Err(err) => {
                debug!(%err, "paste rejected");
                false
            }
        }
    }

    /// Put the result of a previous calculation back into the entry.
    pub fn reuse_history(&mut self, index: usize) -> bool {
        let Some(result) = self.history.get(index).map(|entry| entry.result) else {
            return false;
        };
        self.error = None;
        self.accumulator.load_value(result);
        true
    }

    pub fn display(&self) -> String {
        if self.error.is_some() {
            ERROR_TEXT.to_string()
        } else {
            self.accumulator.display()
        }
    }

    /// `"{left} {op}"` shown above the display while an operator is pending.
    pub fn expression_preview(&self) -> Option<String> {
        self.accumulator.expression_preview()
    }

    pub fn state(&self) -> AccumulatorState {
        self.accumulator.state()
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    pub fn memory(&self) -> &MemoryRegister {
        &self.memory
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    pub fn set_angle_unit(&mut self, unit: AngleUnit) {
        self.angle_unit = unit;
    }

    fn displayed_value(&self) -> Option<f64> {
        if self.error.is_some() {
            None
        } else {
            self.accumulator.display_value()
        }
    }

    fn fail(&mut self, err: CalcError) -> CalcError {
        warn!(%err, "calculation failed");
        self.error = Some(err.clone());
        err
    }
}
