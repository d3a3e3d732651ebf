//! The calculator state machine
//!
//! [`Calculator`] owns the display buffer, the pending operation, the
//! "waiting for second operand" flag and the history. Every input runs to
//! completion and leaves the state consistent:
//!
//! - the display always parses as a number and holds at most one `.`
//! - a first operand exists exactly when an operator is pending
//!   ([`Pending::Awaiting`] carries both)
//! - waiting for a second operand implies a pending operation

use crate::engine::errors::CalcError;
use crate::engine::history::{History, HistoryEntry};
use crate::engine::number::{format_number, is_editable, parse_number};
use crate::engine::operator::Operator;
use crate::input::{Digit, Input};
use tracing::{debug, info, warn};

/// Display contents on startup and after a clear
pub const INITIAL_DISPLAY: &str = "0";

/// Operation waiting for its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pending {
    Idle,
    Awaiting { operand: f64, operator: Operator },
}

/// Four-function calculator with history
#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    pending: Pending,
    waiting_for_operand: bool,
    history: History,
    /// Notice raised by the last input that has not been dismissed yet
    alert: Option<CalcError>,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            display: INITIAL_DISPLAY.to_string(),
            pending: Pending::Idle,
            waiting_for_operand: false,
            history: History::new(),
            alert: None,
        }
    }

    /// Current contents of the display buffer
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Pending {
        self.pending
    }

    /// Left-hand value of the pending operation
    pub fn first_operand(&self) -> Option<f64> {
        match self.pending {
            Pending::Idle => None,
            Pending::Awaiting { operand, .. } => Some(operand),
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.pending {
            Pending::Idle => None,
            Pending::Awaiting { operator, .. } => Some(operator),
        }
    }

    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The undismissed notice, if any
    pub fn alert(&self) -> Option<CalcError> {
        self.alert
    }

    /// Acknowledge the current notice, returning it
    pub fn dismiss_alert(&mut self) -> Option<CalcError> {
        self.alert.take()
    }

    /// Dispatch a single input event
    pub fn press(&mut self, input: Input) {
        match input {
            Input::Digit(digit) => self.input_digit(digit),
            Input::Decimal => self.input_decimal(),
            Input::Operator(operator) => self.choose_operator(operator),
            Input::Equals => self.evaluate(),
            Input::Clear => self.clear(),
            Input::ClearHistory => self.clear_history(),
        }
    }

    /// Type a digit into the display
    pub fn input_digit(&mut self, digit: Digit) {
        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.display == INITIAL_DISPLAY || !is_editable(&self.display) {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
        debug!(display = %self.display, "digit entered");
    }

    /// Type a decimal point into the display
    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand || !is_editable(&self.display) {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains(|c: char| c == '.' || c == 'e') {
            self.display.push('.');
        }
        debug!(display = %self.display, "decimal point entered");
    }

    /// Choose the operator for the next calculation.
    ///
    /// An already pending operation is folded first, so `5 + 3 -` shows `8`.
    /// Pressing operators back to back only swaps the pending operator.
    pub fn choose_operator(&mut self, operator: Operator) {
        let input_value = self.input_value();
        let pending = self.pending;

        self.pending = match pending {
            Pending::Idle => Pending::Awaiting {
                operand: input_value,
                operator,
            },
            Pending::Awaiting { operand, .. } if self.waiting_for_operand => {
                Pending::Awaiting { operand, operator }
            }
            Pending::Awaiting {
                operand,
                operator: previous,
            } => {
                let result = self.apply(previous, operand, input_value);
                self.display = format_number(result);
                debug!(%previous, result = %self.display, "folded pending operation");
                Pending::Awaiting {
                    operand: result,
                    operator,
                }
            }
        };

        self.waiting_for_operand = true;
        debug!(%operator, display = %self.display, "operator chosen");
    }

    /// Evaluate the pending operation and record it in the history.
    ///
    /// Does nothing when no operation is pending, so repeated presses do not
    /// re-apply the last operator.
    pub fn evaluate(&mut self) {
        let Pending::Awaiting { operand, operator } = self.pending else {
            debug!("equals with nothing pending");
            return;
        };

        let input_value = self.input_value();
        let result = self.apply(operator, operand, input_value);

        let entry = HistoryEntry::new(
            format!(
                "{} {} {}",
                format_number(operand),
                operator.symbol(),
                format_number(input_value)
            ),
            format_number(result),
        );
        info!(
            calculation = entry.calculation(),
            result = entry.result(),
            "evaluated"
        );

        self.display = entry.result().to_string();
        self.history.record(entry);
        self.pending = Pending::Idle;
        self.waiting_for_operand = false;
    }

    /// Reset the display and drop any pending operation. History is kept.
    pub fn clear(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.pending = Pending::Idle;
        self.waiting_for_operand = false;
        debug!("cleared");
    }

    /// Forget all past calculations. The display is left alone.
    pub fn clear_history(&mut self) {
        let removed = self.history.len();
        self.history.clear();
        debug!(removed, "history cleared");
    }

    fn input_value(&self) -> f64 {
        // Inputs only ever build parseable buffers
        parse_number(&self.display).unwrap_or(0.0)
    }

    /// Apply `operator`, falling back to `left` when the operation fails
    fn apply(&mut self, operator: Operator, left: f64, right: f64) -> f64 {
        match operator.apply(left, right) {
            Ok(value) => value,
            Err(err) => {
                warn!(left, right, %operator, "{}", err);
                self.alert = Some(err);
                left
            }
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(n: u8) -> Digit {
        Digit::new(n).unwrap()
    }

    fn enter(calc: &mut Calculator, digits: &str) {
        for c in digits.chars() {
            if c == '.' {
                calc.input_decimal();
            } else {
                calc.input_digit(Digit::from_char(c).unwrap());
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending(), Pending::Idle);
        assert!(!calc.is_waiting_for_operand());
        assert!(calc.history().is_empty());
        assert!(calc.alert().is_none());
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let mut calc = Calculator::new();
        calc.input_digit(digit(0));
        assert_eq!(calc.display(), "0");
        calc.input_digit(digit(7));
        assert_eq!(calc.display(), "7");
        calc.input_digit(digit(0));
        assert_eq!(calc.display(), "70");
    }

    #[test]
    fn test_single_decimal_point() {
        let mut calc = Calculator::new();
        enter(&mut calc, "1.5.");
        assert_eq!(calc.display(), "1.5");

        let mut calc = Calculator::new();
        calc.input_decimal();
        assert_eq!(calc.display(), "0.");
        enter(&mut calc, "05");
        assert_eq!(calc.display(), "0.05");
    }

    #[test]
    fn test_operator_sets_pending_state() {
        let mut calc = Calculator::new();
        enter(&mut calc, "12");
        calc.choose_operator(Operator::Multiply);

        assert_eq!(calc.first_operand(), Some(12.0));
        assert_eq!(calc.operator(), Some(Operator::Multiply));
        assert!(calc.is_waiting_for_operand());
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn test_digit_after_operator_replaces_display() {
        let mut calc = Calculator::new();
        enter(&mut calc, "12");
        calc.choose_operator(Operator::Add);
        calc.input_digit(digit(3));
        assert_eq!(calc.display(), "3");
        assert!(!calc.is_waiting_for_operand());
    }

    #[test]
    fn test_decimal_after_operator_starts_fraction() {
        let mut calc = Calculator::new();
        enter(&mut calc, "4.5");
        calc.choose_operator(Operator::Subtract);
        calc.input_decimal();
        assert_eq!(calc.display(), "0.");
        assert!(!calc.is_waiting_for_operand());
    }

    #[test]
    fn test_repeated_operator_only_swaps() {
        let mut calc = Calculator::new();
        enter(&mut calc, "5");
        calc.choose_operator(Operator::Add);
        calc.choose_operator(Operator::Multiply);

        assert_eq!(calc.display(), "5");
        assert_eq!(calc.first_operand(), Some(5.0));
        assert_eq!(calc.operator(), Some(Operator::Multiply));

        enter(&mut calc, "3");
        calc.evaluate();
        assert_eq!(calc.display(), "15");
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_fold_on_second_operator() {
        let mut calc = Calculator::new();
        enter(&mut calc, "5");
        calc.choose_operator(Operator::Add);
        enter(&mut calc, "3");
        calc.choose_operator(Operator::Subtract);
        assert_eq!(calc.display(), "8");
        assert_eq!(calc.first_operand(), Some(8.0));
        // Folding does not produce history
        assert!(calc.history().is_empty());

        enter(&mut calc, "2");
        calc.evaluate();
        assert_eq!(calc.display(), "6");
        assert_eq!(calc.history().latest().map(|e| e.calculation()), Some("8 - 2"));
    }

    #[test]
    fn test_evaluate_records_history() {
        let mut calc = Calculator::new();
        enter(&mut calc, "3");
        calc.choose_operator(Operator::Add);
        enter(&mut calc, "2");
        calc.evaluate();

        assert_eq!(calc.display(), "5");
        assert_eq!(calc.history().latest(), Some(&HistoryEntry::new("3 + 2", "5")));
        assert_eq!(calc.pending(), Pending::Idle);
        assert!(!calc.is_waiting_for_operand());
    }

    #[test]
    fn test_equals_right_after_operator_reuses_display() {
        let mut calc = Calculator::new();
        enter(&mut calc, "5");
        calc.choose_operator(Operator::Add);
        calc.evaluate();
        assert_eq!(calc.display(), "10");
        assert_eq!(calc.history().latest().map(|e| e.calculation()), Some("5 + 5"));
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut calc = Calculator::new();
        enter(&mut calc, "7");
        calc.evaluate();
        assert_eq!(calc.display(), "7");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_divide_by_zero_keeps_first_operand() {
        let mut calc = Calculator::new();
        enter(&mut calc, "5");
        calc.choose_operator(Operator::Divide);
        enter(&mut calc, "0");
        calc.evaluate();

        assert_eq!(calc.display(), "5");
        assert_eq!(calc.alert(), Some(CalcError::DivisionByZero));
        assert_eq!(calc.history().latest(), Some(&HistoryEntry::new("5 / 0", "5")));

        assert_eq!(calc.dismiss_alert(), Some(CalcError::DivisionByZero));
        assert!(calc.alert().is_none());
    }

    #[test]
    fn test_divide_by_zero_while_folding() {
        let mut calc = Calculator::new();
        enter(&mut calc, "9");
        calc.choose_operator(Operator::Divide);
        enter(&mut calc, "0");
        calc.choose_operator(Operator::Add);

        assert_eq!(calc.display(), "9");
        assert_eq!(calc.first_operand(), Some(9.0));
        assert_eq!(calc.operator(), Some(Operator::Add));
        assert_eq!(calc.alert(), Some(CalcError::DivisionByZero));
    }

    #[test]
    fn test_digit_after_result_appends() {
        let mut calc = Calculator::new();
        enter(&mut calc, "4");
        calc.choose_operator(Operator::Add);
        enter(&mut calc, "4");
        calc.evaluate();
        enter(&mut calc, "1");
        assert_eq!(calc.display(), "81");
    }

    #[test]
    fn test_digit_after_infinite_result_starts_over() {
        let mut calc = Calculator::new();
        calc.display = "Infinity".to_string();
        calc.input_digit(digit(4));
        assert_eq!(calc.display(), "4");

        calc.display = "NaN".to_string();
        calc.input_decimal();
        assert_eq!(calc.display(), "0.");
    }

    #[test]
    fn test_decimal_ignored_in_exponent_form() {
        let mut calc = Calculator::new();
        calc.display = "1e+21".to_string();
        calc.input_decimal();
        assert_eq!(calc.display(), "1e+21");
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut calc = Calculator::new();
        enter(&mut calc, "2");
        calc.choose_operator(Operator::Multiply);
        enter(&mut calc, "3");
        calc.evaluate();
        enter(&mut calc, "9");
        calc.choose_operator(Operator::Add);

        calc.clear();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending(), Pending::Idle);
        assert!(!calc.is_waiting_for_operand());
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_clear_history_keeps_display() {
        let mut calc = Calculator::new();
        enter(&mut calc, "2");
        calc.choose_operator(Operator::Multiply);
        enter(&mut calc, "3");
        calc.evaluate();
        calc.choose_operator(Operator::Add);

        calc.clear_history();
        assert!(calc.history().is_empty());
        assert_eq!(calc.display(), "6");
        assert_eq!(calc.operator(), Some(Operator::Add));
    }

    #[test]
    fn test_press_dispatch() {
        let mut calc = Calculator::new();
        calc.press(Input::Digit(digit(8)));
        calc.press(Input::Operator(Operator::Divide));
        calc.press(Input::Digit(digit(2)));
        calc.press(Input::Equals);
        assert_eq!(calc.display(), "4");
        calc.press(Input::ClearHistory);
        assert!(calc.history().is_empty());
        calc.press(Input::Clear);
        assert_eq!(calc.display(), "0");
    }
}
