use crate::engine::errors::CalcError;
use std::fmt;

/// One of the four binary operations the calculator supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// ASCII symbol used in history entries (`2 * 3`)
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Glyph shown on the keypad
    pub fn label(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Apply the operation to `left` and `right`.
    ///
    /// Division checks for a zero divisor before dividing. Everything else is
    /// plain IEEE-754 arithmetic, so overflow yields an infinity rather than
    /// an error.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_basic_operations() {
        assert_eq!(Operator::Add.apply(7.0, 3.0), Ok(10.0));
        assert_eq!(Operator::Subtract.apply(9.0, 4.0), Ok(5.0));
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operator::Divide.apply(8.0, 2.0), Ok(4.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        // Negative zero is still zero
        assert_eq!(
            Operator::Divide.apply(5.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_zero_divided_is_fine() {
        assert_eq!(Operator::Divide.apply(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_symbols_and_labels() {
        let symbols: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!["+", "-", "*", "/"]);
        assert_eq!(Operator::Divide.label(), "÷");
        assert_eq!(Operator::Multiply.to_string(), "*");
    }
}
