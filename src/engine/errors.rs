//! Error types for the calculator engine
//!
//! Division by zero is the only condition the engine reports. It never halts
//! the calculator: the pending operation is abandoned, the first operand is
//! kept as the result, and the error is raised as a notice for the
//! presentation layer to show.

use thiserror::Error;

/// Conditions the engine surfaces to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The right-hand operand of a division was zero
    #[error("Cannot divide by zero")]
    DivisionByZero,
}
