//! Calculation history pane rendering

use crate::engine::history::History;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Terminal rows used by one entry
const ROWS_PER_ENTRY: usize = 2;

/// Render the history pane, newest calculation at the top.
///
/// `scroll_offset` counts entries and is clamped so the last entry stays on
/// the bottom row.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &History,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Calculation History ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if history.is_empty() {
        *scroll_offset = 0;
        let paragraph = Paragraph::new("No calculations yet")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let visible_rows = area.height.saturating_sub(2).max(1) as usize; // Account for borders
    let visible_entries = (visible_rows / ROWS_PER_ENTRY).max(1);

    let total_entries = history.len();
    if total_entries > visible_entries {
        *scroll_offset = (*scroll_offset).min(total_entries - visible_entries);
    } else {
        *scroll_offset = 0;
    }

    let items: Vec<ListItem> = history
        .iter()
        .skip(*scroll_offset)
        .take(visible_entries)
        .map(|entry| {
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    entry.calculation().to_string(),
                    Style::default().fg(DEFAULT_THEME.comment),
                )),
                Line::from(Span::styled(
                    format!("= {}", entry.result()),
                    Style::default()
                        .fg(DEFAULT_THEME.result)
                        .add_modifier(Modifier::BOLD),
                )),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
