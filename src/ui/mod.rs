mod display;
mod help;
mod history_panel;
mod keypad;
mod layout;
mod status_bar;
mod theme;

use crate::app::keypad::rows;
use crate::app::state::AppState;
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = theme::Theme::for_kind(state.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base()), area);

    let app_layout = layout::compute_layout(area, state.show_history);

    display::render(frame, app_layout.display, state, &theme);
    keypad::render(frame, app_layout.keypad, state, &theme);
    if let Some(history_area) = app_layout.history {
        history_panel::render(frame, history_area, state, &theme);
    }
    status_bar::render(frame, app_layout.status_bar, state, &theme);
    help::render(frame, state, &theme);
}

/// Find the keypad button (row, column) under a terminal cell, using the
/// same layout as [`render`].
pub fn keypad_button_at(state: &AppState, column: u16, row: u16) -> Option<(usize, usize)> {
    let (width, height) = state.screen;
    let app_layout = layout::compute_layout(Rect::new(0, 0, width, height), state.show_history);
    let inner = keypad::inner_area(app_layout.keypad);
    let grid = rows(state.mode);
    let position = Position::new(column, row);

    keypad::button_rects(inner, &grid)
        .iter()
        .enumerate()
        .find_map(|(r, rects)| {
            rects
                .iter()
                .position(|rect| rect.contains(position))
                .map(|c| (r, c))
        })
}
