//! Status bar rendering with keybindings and state indicators

use crate::input::{Input, Keymap};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// First key bound to `input`, for the hint list
fn hint_key(keymap: &Keymap, input: Input) -> String {
    keymap
        .keys_for(input)
        .first()
        .map(|key| key.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Key labels and descriptions for the right side of the status bar
fn key_hints(keymap: &Keymap) -> Vec<(String, &'static str)> {
    vec![
        (
            format!(" {} ↵ ", hint_key(keymap, Input::Equals)),
            "equals",
        ),
        (format!(" {} ", hint_key(keymap, Input::Clear)), "clear"),
        (
            format!(" {} ", hint_key(keymap, Input::ClearHistory)),
            "clear history",
        ),
        (" ↑/↓ ".to_string(), "scroll"),
        (" Tab ".to_string(), "focus"),
        (" q ".to_string(), "quit"),
    ]
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    keymap: &Keymap,
    history_len: usize,
    is_alert: bool,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: mode badge and last action
    let (badge, badge_bg) = if is_alert {
        (" ALERT ", DEFAULT_THEME.error)
    } else {
        (" READY ", DEFAULT_THEME.primary)
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.highlight_bg)
                .fg(if is_alert {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in key_hints(keymap).into_iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(
        format!(" {} ", history_len),
        Style::default()
            .bg(DEFAULT_THEME.success)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
