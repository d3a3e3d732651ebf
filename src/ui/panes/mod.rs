//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over the calculator state.
//!
//! # Pane Modules
//!
//! - [`display`]: the readout with the pending operation above the number
//! - [`keypad`]: the button grid, highlighting the last key pressed
//! - [`history`]: scrollable list of past calculations
//! - [`status`]: status bar with keybindings and the last action
//! - [`alert`]: modal popup for the division-by-zero notice

pub mod alert;
pub mod display;
pub mod history;
pub mod keypad;
pub mod status;

// Re-export render functions for convenience
pub use alert::render_alert;
pub use display::{render_display, DISPLAY_HEIGHT};
pub use history::render_history_pane;
pub use keypad::{render_keypad, KeyButton, KEYPAD};
pub use status::render_status_bar;
