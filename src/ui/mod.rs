//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, alert handling
//! - **[`panes`]**: stateless render functions for each visible pane (display,
//!   keypad, history, status bar, alert popup)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Calculator`] and a
//! [`Keymap`] and call [`App::run`] to start the event loop.
//!
//! [`Calculator`]: crate::engine::calculator::Calculator
//! [`Keymap`]: crate::input::Keymap
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
