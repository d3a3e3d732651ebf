//! Calculator readout

use crate::engine::calculator::{Calculator, Pending};
use crate::engine::number::format_number;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the readout including its border
pub const DISPLAY_HEIGHT: u16 = 4;

/// Render the display buffer, with the pending operation above it
pub fn render_display(frame: &mut Frame, area: Rect, calculator: &Calculator) {
    let pending_text = match calculator.pending() {
        Pending::Idle => String::new(),
        Pending::Awaiting { operand, operator } => {
            format!("{} {}", format_number(operand), operator.label())
        }
    };

    let lines = vec![
        Line::from(Span::styled(
            pending_text,
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(Span::styled(
            calculator.display().to_string(),
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right);

    frame.render_widget(paragraph, area);
}
