//! Modal notice shown over the whole screen

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const ALERT_WIDTH: u16 = 36;
const ALERT_HEIGHT: u16 = 6;

/// A `width` × `height` rectangle centred in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render `message` in a popup that covers whatever is below it
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area);

    let block = Block::default()
        .title(" Alert ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        );

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        popup,
    );
}
