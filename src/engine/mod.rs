//! Calculator engine
//!
//! - [`calculator`]: the state machine driven by [`Input`](crate::input::Input) events
//! - [`operator`]: the four operations and their evaluation
//! - [`number`]: display-string formatting and parsing
//! - [`history`]: the newest-first list of finished calculations
//! - [`errors`]: the division-by-zero notice
//!
//! # Evaluation Model
//!
//! The engine holds at most one pending operation. Choosing a second
//! operator before equals folds the first one immediately, so there is no
//! precedence: `2 + 3 × 4` evaluates as `(2 + 3) × 4`.

pub mod calculator;
pub mod errors;
pub mod history;
pub mod number;
pub mod operator;

pub use calculator::{Calculator, Pending};
pub use errors::CalcError;
pub use history::{History, HistoryEntry};
pub use operator::Operator;
