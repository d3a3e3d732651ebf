//! Main TUI application state and logic

use crate::engine::calculator::Calculator;
use crate::input::{Input, Keymap};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame, Terminal,
};
use std::io;
use tracing::debug;

use super::panes::DISPLAY_HEIGHT;
use super::theme::DEFAULT_THEME;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Keypad,
    History,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Keypad => FocusedPane::History,
            FocusedPane::History => FocusedPane::Keypad,
        }
    }
}

/// The main application state
pub struct App {
    /// The calculator being driven
    pub calculator: Calculator,

    /// Character bindings for calculator inputs
    pub keymap: Keymap,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// First visible history entry
    pub history_scroll: usize,

    /// Last input sent to the calculator, highlighted on the keypad
    pub last_input: Option<Input>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app around the given calculator
    pub fn new(calculator: Calculator, keymap: Keymap) -> Self {
        App {
            calculator,
            keymap,
            focused_pane: FocusedPane::Keypad,
            history_scroll: 0,
            last_input: None,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Nothing changes between key presses, so block until the next one
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Calculator (left) | History (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        let calculator_block = Block::default()
            .title(" Calculator ")
            .borders(Borders::ALL)
            .border_style(self.border_style(FocusedPane::Keypad));
        let calculator_area = calculator_block.inner(columns[0]);
        frame.render_widget(calculator_block, columns[0]);

        // Readout above the keypad
        let calculator_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)])
            .split(calculator_area);

        super::panes::render_display(frame, calculator_rows[0], &self.calculator);
        super::panes::render_keypad(frame, calculator_rows[1], self.last_input);

        super::panes::render_history_pane(
            frame,
            columns[1],
            self.calculator.history(),
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            &self.keymap,
            self.calculator.history().len(),
            self.calculator.alert().is_some(),
        );

        if let Some(alert) = self.calculator.alert() {
            super::panes::render_alert(frame, size, &alert.to_string());
        }
    }

    fn border_style(&self, pane: FocusedPane) -> Style {
        if self.focused_pane == pane {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if let KeyCode::Char('q') | KeyCode::Char('Q') = key.code {
            self.should_quit = true;
            return;
        }

        // The alert is modal: nothing reaches the calculator until it is dismissed
        if self.calculator.alert().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.calculator.dismiss_alert();
                self.status_message = "Ready!".to_string();
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::History {
                    self.history_scroll = self.history_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::History {
                    self.history_scroll = self.history_scroll.saturating_add(1);
                }
            }
            KeyCode::Enter => self.dispatch(Input::Equals),
            KeyCode::Esc => self.dispatch(Input::Clear),
            KeyCode::Delete => self.dispatch(Input::ClearHistory),
            KeyCode::Char(c) => match self.keymap.lookup(c) {
                Some(input) => self.dispatch(input),
                None => {
                    self.status_message = format!("Unbound key '{}'", c);
                }
            },
            _ => {}
        }
    }

    /// Send one input to the calculator and update the status line
    fn dispatch(&mut self, input: Input) {
        if input == Input::ClearHistory && self.calculator.history().is_empty() {
            self.status_message = "History is empty".to_string();
            return;
        }

        let history_len = self.calculator.history().len();
        self.calculator.press(input);
        self.last_input = Some(input);
        debug!(%input, display = self.calculator.display(), "key dispatched");

        let evaluated = self.calculator.history().len() > history_len;
        if evaluated {
            // Newest entry is at the top
            self.history_scroll = 0;
        }

        self.status_message = if let Some(alert) = self.calculator.alert() {
            alert.to_string()
        } else {
            match input {
                Input::Equals => match self.calculator.history().latest() {
                    Some(entry) if evaluated => {
                        format!("{} = {}", entry.calculation(), entry.result())
                    }
                    _ => "Nothing to evaluate".to_string(),
                },
                Input::Clear => "Cleared".to_string(),
                Input::ClearHistory => "History cleared".to_string(),
                other => format!("Pressed {}", other.label()),
            }
        };
    }
}
