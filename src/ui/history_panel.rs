use crate::app::state::*;
use crate::calc::history::HistoryEntry;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use std::fmt::Write;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == FocusPanel::History;
    let (border_style, border_type) = if focused {
        (theme.border_focused(), theme.border_type_focused())
    } else {
        (theme.border(), theme.border_type())
    };

    let history = state.calc.history();
    let title = if history.is_empty() {
        " History ".to_string()
    } else {
        format!(" History ({}) ", history.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    if history.is_empty() {
        let list = List::new(vec![ListItem::new(Span::styled(
            " No calculations yet",
            theme.muted(),
        ))])
        .block(block);
        frame.render_widget(list, area);
        return;
    }

    let timestamp_format = &state.config.ui.timestamp_format;
    let items: Vec<ListItem> = history
        .snapshot()
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(timestamp(entry, timestamp_format), theme.muted()),
                    Span::raw("  "),
                    Span::styled(entry.expression.clone(), Style::default().fg(theme.text)),
                ]),
                Line::from(Span::styled(
                    format!("= {}", entry.result_text()),
                    theme.display_text(),
                ))
                .right_aligned(),
            ])
        })
        .collect();

    // Without a selection, keep the newest entry in view.
    let selected = state.history_selected.unwrap_or(history.len() - 1);
    let mut list_state = ListState::default().with_selected(Some(selected));
    let highlight = if focused {
        theme.history_selected()
    } else {
        Style::default()
    };

    let list = List::new(items).block(block).highlight_style(highlight);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Format the entry time, falling back to `%H:%M:%S` when the configured
/// format string is invalid.
fn timestamp(entry: &HistoryEntry, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", entry.recorded_at.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", entry.recorded_at.format("%H:%M:%S"));
    }
    out
}
