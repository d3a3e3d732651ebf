//! Input events and key bindings
//!
//! - [`Input`]: the six events the calculator understands
//! - [`Digit`]: a validated decimal digit
//! - [`keymap`]: character-to-event bindings, overridable from the config file

pub mod keymap;

pub use keymap::Keymap;

use crate::engine::operator::Operator;
use std::fmt;

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An event sent to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ClearHistory,
}

impl Input {
    /// Text shown on the keypad button for this input
    pub fn label(self) -> String {
        match self {
            Input::Digit(digit) => digit.to_string(),
            Input::Decimal => ".".to_string(),
            Input::Operator(operator) => operator.label().to_string(),
            Input::Equals => "=".to_string(),
            Input::Clear => "Clear".to_string(),
            Input::ClearHistory => "Clear history".to_string(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Digit(digit) => write!(f, "digit {}", digit),
            Input::Decimal => write!(f, "decimal point"),
            Input::Operator(Operator::Add) => write!(f, "add"),
            Input::Operator(Operator::Subtract) => write!(f, "subtract"),
            Input::Operator(Operator::Multiply) => write!(f, "multiply"),
            Input::Operator(Operator::Divide) => write!(f, "divide"),
            Input::Equals => write!(f, "equals"),
            Input::Clear => write!(f, "clear"),
            Input::ClearHistory => write!(f, "clear history"),
        }
    }
}
