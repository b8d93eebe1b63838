//! The accumulator state machine behind every calculator key press.
//!
//! Holds at most one pending binary operation: a left operand, an operator
//! and the entry being typed as the right operand. Nothing is evaluated
//! eagerly; pressing a second operator before `=` simply replaces the first.

use super::error::CalcError;
use super::format::{format_number, parse_number};
use super::ops::{AngleUnit, Operator, UnaryFn};
use tracing::debug;

/// The original display held 15 characters.
pub const MAX_ENTRY_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorState {
    /// Nothing typed and no operator pending.
    Empty,
    /// An operand (or a previous result) is in the entry buffer.
    EnteringOperand,
    /// An operator was chosen and the entry is waiting for its right operand.
    OperatorPending,
}

/// A successfully evaluated `lhs <op> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
}

impl Evaluation {
    /// `"{left} {op} {right}"` as it is recorded in the history.
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            format_number(self.lhs),
            self.operator.symbol(),
            format_number(self.rhs)
        )
    }
}

#[derive(Debug, Default)]
pub struct Accumulator {
    pending_operand: Option<f64>,
    entry: String,
    pending_operator: Option<Operator>,
    /// Full-precision value behind `entry` while it shows an untouched
    /// result. Dropped as soon as the text is edited.
    exact: Option<f64>,
    /// The entry holds a loaded value (memory, paste, history) that the next
    /// digit replaces instead of extending.
    fresh: bool,
}

impl Accumulator {
    pub fn state(&self) -> AccumulatorState {
        if !self.entry.is_empty() {
            AccumulatorState::EnteringOperand
        } else if self.pending_operator.is_some() {
            AccumulatorState::OperatorPending
        } else {
            AccumulatorState::Empty
        }
    }

    #[cfg(test)]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    #[cfg(test)]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    #[cfg(test)]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Append a digit or decimal point to the entry.
    ///
    /// A result left by `=` or a function is extended like typed text. A
    /// loaded value, or a result shown in exponent form, is replaced.
    /// Returns `false` (and changes nothing) for any other character, a
    /// second decimal point, or a full entry.
    pub fn input_digit(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() && ch != '.' {
            return false;
        }
        if self.fresh || self.entry.contains(['e', 'E']) {
            self.entry.clear();
            self.exact = None;
            self.fresh = false;
        }

        if ch == '.' {
            if self.entry.contains('.') {
                return false;
            }
            if self.entry.is_empty() || self.entry == "-" {
                self.entry.push('0');
            }
            self.entry.push('.');
            self.exact = None;
            return true;
        }

        if self.digit_count() >= MAX_ENTRY_DIGITS {
            return false;
        }
        // A lone zero is replaced, not extended.
        if self.entry == "0" {
            self.entry.clear();
        } else if self.entry == "-0" {
            self.entry.truncate(1);
        }
        self.entry.push(ch);
        self.exact = None;
        true
    }

    /// Choose the operator for the pending operation.
    ///
    /// A non-empty entry becomes the left operand; with an empty entry the
    /// operator replaces whichever one is already pending. Returns `false`
    /// when there is nothing to operate on.
    pub fn input_operator(&mut self, op: Operator) -> bool {
        if !self.entry.is_empty() {
            let value = match self.entry_value() {
                Ok(value) => value,
                Err(err) => {
                    debug!(%err, "ignoring operator on unparsable entry");
                    return false;
                }
            };
            self.pending_operand = Some(value);
            self.entry.clear();
            self.exact = None;
            self.fresh = false;
            self.pending_operator = Some(op);
            true
        } else if self.pending_operator.is_some() {
            self.pending_operator = Some(op);
            true
        } else {
            false
        }
    }

    /// Evaluate the pending operation.
    ///
    /// `Ok(None)` means the operation is incomplete and nothing changed. On
    /// success the entry holds the result, ready to be chained. Any error
    /// resets the accumulator to [`AccumulatorState::Empty`].
    pub fn evaluate(&mut self) -> Result<Option<Evaluation>, CalcError> {
        let (Some(lhs), Some(operator)) = (self.pending_operand, self.pending_operator) else {
            return Ok(None);
        };
        if self.entry.is_empty() {
            return Ok(None);
        }

        let outcome = self
            .entry_value()
            .and_then(|rhs| operator.apply(lhs, rhs).map(|result| (rhs, result)));
        match outcome {
            Ok((rhs, result)) => {
                self.pending_operand = None;
                self.pending_operator = None;
                self.show_result(result);
                Ok(Some(Evaluation {
                    lhs,
                    operator,
                    rhs,
                    result,
                }))
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }

    /// Replace the entry with `f(entry)`. Constants replace it regardless of
    /// what was typed. `Ok(None)` means there was no entry to apply to.
    pub fn apply_unary(&mut self, f: UnaryFn, unit: AngleUnit) -> Result<Option<f64>, CalcError> {
        let input = if f.is_constant() {
            0.0
        } else if self.entry.is_empty() {
            return Ok(None);
        } else {
            match self.entry_value() {
                Ok(value) => value,
                Err(err) => {
                    self.clear();
                    return Err(err);
                }
            }
        };

        match f.apply(input, unit) {
            Ok(value) => {
                self.show_result(value);
                Ok(Some(value))
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }

    /// Flip the sign of the entry.
    pub fn toggle_sign(&mut self) -> bool {
        if let Some(value) = self.exact {
            if value == 0.0 {
                return false;
            }
            self.entry = format_number(-value);
            self.exact = Some(-value);
            return true;
        }
        if self.entry.is_empty() || self.entry.trim_start_matches('-') == "0" {
            return false;
        }
        if let Some(rest) = self.entry.strip_prefix('-') {
            self.entry = rest.to_string();
        } else {
            self.entry.insert(0, '-');
        }
        true
    }

    /// Remove the last character. A loaded value or an exponent-form result
    /// is dropped whole.
    pub fn backspace(&mut self) -> bool {
        if self.entry.is_empty() {
            return false;
        }
        self.exact = None;
        if self.fresh || self.entry.contains(['e', 'E']) {
            self.entry.clear();
            self.fresh = false;
            return true;
        }
        self.entry.pop();
        if self.entry == "-" {
            self.entry.clear();
        }
        true
    }

    /// Replace the entry with the number in `text`. State is untouched when
    /// the text does not parse.
    pub fn set_entry(&mut self, text: &str) -> Result<f64, CalcError> {
        let value = parse_number(text)?;
        self.load_value(value);
        Ok(value)
    }

    /// Replace the entry with an already known value (memory recall,
    /// history reuse). The next digit starts a new number.
    pub fn load_value(&mut self, value: f64) {
        self.show_result(value);
        self.fresh = true;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Text for the main display line.
    pub fn display(&self) -> String {
        if !self.entry.is_empty() {
            self.entry.clone()
        } else if let Some(lhs) = self.pending_operand {
            format_number(lhs)
        } else {
            "0".to_string()
        }
    }

    /// The number currently on the display.
    pub fn display_value(&self) -> Option<f64> {
        if !self.entry.is_empty() {
            self.entry_value().ok()
        } else {
            Some(self.pending_operand.unwrap_or(0.0))
        }
    }

    /// `"{left} {op}"` while an operator waits for its right operand.
    pub fn expression_preview(&self) -> Option<String> {
        match (self.pending_operand, self.pending_operator) {
            (Some(lhs), Some(op)) => Some(format!("{} {}", format_number(lhs), op.symbol())),
            _ => None,
        }
    }

    fn entry_value(&self) -> Result<f64, CalcError> {
        match self.exact {
            Some(value) => Ok(value),
            None => parse_number(&self.entry),
        }
    }

    fn show_result(&mut self, value: f64) {
        self.entry = format_number(value);
        self.exact = Some(value);
        self.fresh = false;
    }

    fn digit_count(&self) -> usize {
        self.entry.chars().filter(|c| c.is_ascii_digit()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(acc: &mut Accumulator, digits: &str) {
        for ch in digits.chars() {
            acc.input_digit(ch);
        }
    }

    #[test]
    fn test_starts_empty() {
        let acc = Accumulator::default();
        assert_eq!(acc.state(), AccumulatorState::Empty);
        assert_eq!(acc.display(), "0");
        assert_eq!(acc.expression_preview(), None);
    }

    #[test]
    fn test_simple_addition() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "12");
        assert_eq!(acc.state(), AccumulatorState::EnteringOperand);
        assert!(acc.input_operator(Operator::Add));
        assert_eq!(acc.state(), AccumulatorState::OperatorPending);
        assert_eq!(acc.expression_preview().as_deref(), Some("12 +"));
        type_digits(&mut acc, "8");

        let eval = acc.evaluate().unwrap().unwrap();
        assert_eq!(eval.result, 20.0);
        assert_eq!(eval.expression(), "12 + 8");
        assert_eq!(acc.entry(), "20");
        assert_eq!(acc.pending_operand(), None);
        assert_eq!(acc.pending_operator(), None);
    }

    #[test]
    fn test_division_by_zero_resets() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "5");
        acc.input_operator(Operator::Divide);
        type_digits(&mut acc, "0");

        assert_eq!(acc.evaluate(), Err(CalcError::DivisionByZero));
        assert_eq!(acc.state(), AccumulatorState::Empty);
        assert_eq!(acc.display(), "0");
    }

    #[test]
    fn test_chained_operations() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "5");
        acc.input_operator(Operator::Add);
        type_digits(&mut acc, "3");
        assert_eq!(acc.evaluate().unwrap().unwrap().result, 8.0);

        acc.input_operator(Operator::Multiply);
        type_digits(&mut acc, "2");
        assert_eq!(acc.evaluate().unwrap().unwrap().result, 16.0);
    }

    #[test]
    fn test_chaining_keeps_full_precision() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "1");
        acc.input_operator(Operator::Divide);
        type_digits(&mut acc, "3");
        acc.evaluate().unwrap();
        assert_eq!(acc.entry(), "0.3333333333");

        acc.input_operator(Operator::Multiply);
        type_digits(&mut acc, "3");
        assert_eq!(acc.evaluate().unwrap().unwrap().result, 1.0);
    }

    #[test]
    fn test_later_operator_wins() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "4");
        acc.input_operator(Operator::Add);
        assert!(acc.input_operator(Operator::Subtract));
        type_digits(&mut acc, "2");
        let eval = acc.evaluate().unwrap().unwrap();
        assert_eq!(eval.result, 2.0);
        assert_eq!(eval.operator, Operator::Subtract);
    }

    #[test]
    fn test_second_operator_discards_unevaluated_left_side() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "4");
        acc.input_operator(Operator::Add);
        type_digits(&mut acc, "5");
        acc.input_operator(Operator::Multiply);
        type_digits(&mut acc, "2");
        // 4 + is dropped; the pending operation is 5 × 2.
        assert_eq!(acc.evaluate().unwrap().unwrap().result, 10.0);
    }

    #[test]
    fn test_operator_without_operand_is_ignored() {
        let mut acc = Accumulator::default();
        assert!(!acc.input_operator(Operator::Add));
        assert_eq!(acc.state(), AccumulatorState::Empty);
    }

    #[test]
    fn test_incomplete_evaluate_is_noop() {
        let mut acc = Accumulator::default();
        assert_eq!(acc.evaluate(), Ok(None));
        type_digits(&mut acc, "7");
        assert_eq!(acc.evaluate(), Ok(None));
        acc.input_operator(Operator::Add);
        assert_eq!(acc.evaluate(), Ok(None));
        assert_eq!(acc.state(), AccumulatorState::OperatorPending);
        assert_eq!(acc.display(), "7");
    }

    #[test]
    fn test_single_decimal_point() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "1.5");
        assert!(!acc.input_digit('.'));
        type_digits(&mut acc, "2");
        assert_eq!(acc.entry(), "1.52");
    }

    #[test]
    fn test_leading_decimal_point_gets_zero() {
        let mut acc = Accumulator::default();
        acc.input_digit('.');
        acc.input_digit('5');
        assert_eq!(acc.entry(), "0.5");
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "007");
        assert_eq!(acc.entry(), "7");
        acc.clear();
        type_digits(&mut acc, "0.05");
        assert_eq!(acc.entry(), "0.05");
    }

    #[test]
    fn test_invalid_digit_and_full_entry_are_ignored() {
        let mut acc = Accumulator::default();
        assert!(!acc.input_digit('a'));
        type_digits(&mut acc, "123456789012345");
        assert!(!acc.input_digit('6'));
        assert_eq!(acc.entry().len(), MAX_ENTRY_DIGITS);
        assert!(acc.input_digit('.'));
    }

    #[test]
    fn test_digit_after_result_extends_it() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "5");
        acc.input_operator(Operator::Add);
        type_digits(&mut acc, "3");
        acc.evaluate().unwrap();
        type_digits(&mut acc, "2");
        assert_eq!(acc.entry(), "82");
        acc.input_operator(Operator::Add);
        type_digits(&mut acc, "1");
        assert_eq!(acc.evaluate().unwrap().unwrap().result, 83.0);
    }

    #[test]
    fn test_result_keeps_entry_rules() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "1");
        acc.input_operator(Operator::Divide);
        type_digits(&mut acc, "4");
        acc.evaluate().unwrap();
        assert_eq!(acc.entry(), "0.25");
        assert!(!acc.input_digit('.'));
        type_digits(&mut acc, "123456789012");
        assert_eq!(acc.entry(), "0.25123456789012");
        assert!(!acc.input_digit('9'));
    }

    #[test]
    fn test_digit_after_unary_extends_it() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "9");
        acc.apply_unary(UnaryFn::Sqrt, AngleUnit::Radians).unwrap();
        type_digits(&mut acc, "1");
        assert_eq!(acc.entry(), "31");
    }

    #[test]
    fn test_digit_after_loaded_value_starts_new_entry() {
        let mut acc = Accumulator::default();
        acc.load_value(42.0);
        type_digits(&mut acc, "7");
        assert_eq!(acc.entry(), "7");
    }

    #[test]
    fn test_digit_after_exponent_result_starts_new_entry() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "1");
        acc.input_operator(Operator::Divide);
        type_digits(&mut acc, "10000000");
        acc.evaluate().unwrap();
        assert!(acc.entry().contains('e'));
        type_digits(&mut acc, "5");
        assert_eq!(acc.entry(), "5");
    }

    #[test]
    fn test_backspace_edits_result() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "6");
        acc.input_operator(Operator::Multiply);
        type_digits(&mut acc, "7");
        acc.evaluate().unwrap();
        assert!(acc.backspace());
        assert_eq!(acc.entry(), "4");
    }

    #[test]
    fn test_apply_unary_sqrt() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "16");
        assert_eq!(acc.apply_unary(UnaryFn::Sqrt, AngleUnit::Radians), Ok(Some(4.0)));
        assert_eq!(acc.entry(), "4");
    }

    #[test]
    fn test_apply_unary_domain_error_resets() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "1");
        acc.toggle_sign();
        assert_eq!(acc.entry(), "-1");
        let err = acc.apply_unary(UnaryFn::Sqrt, AngleUnit::Radians).unwrap_err();
        assert!(matches!(err, CalcError::DomainError { function: "sqrt", .. }));
        assert_eq!(acc.state(), AccumulatorState::Empty);
    }

    #[test]
    fn test_constants_replace_entry() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "12");
        acc.apply_unary(UnaryFn::Pi, AngleUnit::Radians).unwrap();
        assert_eq!(acc.entry(), "3.1415926536");
        // Chaining uses the exact constant.
        acc.input_operator(Operator::Multiply);
        type_digits(&mut acc, "2");
        let eval = acc.evaluate().unwrap().unwrap();
        assert_eq!(eval.result, std::f64::consts::PI * 2.0);
    }

    #[test]
    fn test_unary_on_empty_entry_is_noop() {
        let mut acc = Accumulator::default();
        assert_eq!(acc.apply_unary(UnaryFn::Sqrt, AngleUnit::Radians), Ok(None));
        assert_eq!(acc.state(), AccumulatorState::Empty);
    }

    #[test]
    fn test_toggle_sign_while_typing() {
        let mut acc = Accumulator::default();
        assert!(!acc.toggle_sign());
        type_digits(&mut acc, "0");
        assert!(!acc.toggle_sign());
        type_digits(&mut acc, "12");
        acc.toggle_sign();
        type_digits(&mut acc, "3");
        assert_eq!(acc.entry(), "-123");
        acc.toggle_sign();
        assert_eq!(acc.entry(), "123");
    }

    #[test]
    fn test_backspace() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "123");
        acc.backspace();
        assert_eq!(acc.entry(), "12");
        acc.toggle_sign();
        acc.backspace();
        acc.backspace();
        assert_eq!(acc.entry(), "");
        assert!(!acc.backspace());
    }

    #[test]
    fn test_backspace_drops_whole_result() {
        let mut acc = Accumulator::default();
        acc.set_entry("2.75").unwrap();
        assert!(acc.backspace());
        assert_eq!(acc.entry(), "");
    }

    #[test]
    fn test_set_entry_rejects_text() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "42");
        assert!(acc.set_entry("hello").is_err());
        assert_eq!(acc.entry(), "42");
        assert_eq!(acc.set_entry(" 3.5 "), Ok(3.5));
        assert_eq!(acc.entry(), "3.5");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut acc = Accumulator::default();
        type_digits(&mut acc, "9");
        acc.input_operator(Operator::Power);
        type_digits(&mut acc, "2");
        acc.clear();
        assert_eq!(acc.state(), AccumulatorState::Empty);
        assert_eq!(acc.pending_operand(), None);
        assert_eq!(acc.pending_operator(), None);
    }
}
