//! Keypad rendering
//!
//! The keypad is a 4 × 5 grid. `Clear` and `0` span two columns and `=`
//! spans the last two rows:
//!
//! ```text
//! ┌─────────┬────┬────┐
//! │  Clear  │ ÷  │ ×  │
//! ├────┬────┼────┼────┤
//! │ 7  │ 8  │ 9  │ −  │
//! │ 4  │ 5  │ 6  │ +  │
//! │ 1  │ 2  │ 3  │ =  │
//! │    0    │ .  │    │
//! └─────────┴────┴────┘
//! ```
//!
//! The most recently pressed key is highlighted.

use crate::engine::operator::Operator;
use crate::input::{Digit, Input};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub const KEYPAD_COLUMNS: u16 = 4;
pub const KEYPAD_ROWS: u16 = 5;

/// A keypad button and its grid placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyButton {
    pub input: Input,
    pub col: u16,
    pub row: u16,
    pub col_span: u16,
    pub row_span: u16,
}

const fn button(input: Input, col: u16, row: u16) -> KeyButton {
    KeyButton {
        input,
        col,
        row,
        col_span: 1,
        row_span: 1,
    }
}

const fn digit(n: usize, col: u16, row: u16) -> KeyButton {
    button(Input::Digit(Digit::ALL[n]), col, row)
}

pub const KEYPAD: [KeyButton; 17] = [
    KeyButton {
        col_span: 2,
        ..button(Input::Clear, 0, 0)
    },
    button(Input::Operator(Operator::Divide), 2, 0),
    button(Input::Operator(Operator::Multiply), 3, 0),
    digit(7, 0, 1),
    digit(8, 1, 1),
    digit(9, 2, 1),
    button(Input::Operator(Operator::Subtract), 3, 1),
    digit(4, 0, 2),
    digit(5, 1, 2),
    digit(6, 2, 2),
    button(Input::Operator(Operator::Add), 3, 2),
    digit(1, 0, 3),
    digit(2, 1, 3),
    digit(3, 2, 3),
    KeyButton {
        row_span: 2,
        ..button(Input::Equals, 3, 3)
    },
    KeyButton {
        col_span: 2,
        ..digit(0, 0, 4)
    },
    button(Input::Decimal, 2, 4),
];

/// Screen area of `button` within a keypad drawn in `area`
pub fn button_area(area: Rect, button: &KeyButton) -> Rect {
    let cell_width = area.width / KEYPAD_COLUMNS;
    let cell_height = area.height / KEYPAD_ROWS;
    Rect::new(
        area.x + button.col * cell_width,
        area.y + button.row * cell_height,
        cell_width * button.col_span,
        cell_height * button.row_span,
    )
}

fn label_color(input: Input) -> Color {
    match input {
        Input::Digit(_) | Input::Decimal => DEFAULT_THEME.fg,
        Input::Operator(_) => DEFAULT_THEME.operator,
        Input::Equals => DEFAULT_THEME.success,
        Input::Clear | Input::ClearHistory => DEFAULT_THEME.secondary,
    }
}

/// Render every keypad button into `area`
pub fn render_keypad(frame: &mut Frame, area: Rect, last_input: Option<Input>) {
    for button in &KEYPAD {
        let button_rect = button_area(area, button);
        if button_rect.width == 0 || button_rect.height == 0 {
            continue;
        }

        let is_pressed = last_input == Some(button.input);

        let border_style = if is_pressed {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };

        let mut label_style = Style::default().fg(label_color(button.input));
        if is_pressed {
            label_style = label_style
                .bg(DEFAULT_THEME.highlight_bg)
                .add_modifier(Modifier::BOLD);
        }

        // Centre the label vertically inside the border
        let top_padding = button_rect.height.saturating_sub(3) / 2;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .padding(Padding::new(0, 0, top_padding, 0));

        let paragraph = Paragraph::new(button.input.label())
            .style(label_style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(paragraph, button_rect);
    }
}
