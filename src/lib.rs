//! # Introduction
//!
//! calctty is a four-function calculator for the terminal. It keeps a single
//! pending operation, evaluates on equals, and records every evaluation in a
//! scrollable history. The UI is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Input pipeline
//!
//! ```text
//! Key → Keymap → Input → Calculator → Display + History → TUI / batch report
//! ```
//!
//! 1. [`input`]: maps typed characters to [`input::Input`] events through a
//!    configurable [`input::Keymap`].
//! 2. [`engine`]: the [`engine::Calculator`] state machine, the four
//!    operations, number formatting, and the history list.
//! 3. [`ui`]: ratatui-based TUI; not part of the stable library API.
//! 4. [`batch`]: replays a key string without a terminal and reports the
//!    final display and history.
//! 5. [`config`], [`cli`], [`logging`]: TOML configuration, command-line
//!    flags, and `tracing` setup.
//!
//! ## Calculator semantics
//!
//! Operators do not have precedence: choosing a second operator folds the
//! pending one first (`5 + 3 −` shows `8`). Equals with nothing pending does
//! nothing. Dividing by zero keeps the first operand and raises a
//! "Cannot divide by zero" notice.

pub mod batch;
pub mod cli;
pub mod config;
pub mod engine;
pub mod input;
pub mod logging;
pub mod ui;
