use crate::app::keypad::{self, Button};
use crate::app::state::*;
use crate::config::CalcMode;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == FocusPanel::Keypad;
    let (border_style, border_type) = if focused {
        (theme.border_focused(), theme.border_type_focused())
    } else {
        (theme.border(), theme.border_type())
    };
    let title = match state.mode {
        CalcMode::Basic => " Basic ",
        CalcMode::Scientific => " Scientific ",
    };

    let block = Block::default()
        .title(title)
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = keypad::rows(state.mode);
    for (r, rects) in button_rects(inner, &rows).into_iter().enumerate() {
        for (c, rect) in rects.into_iter().enumerate() {
            let button = rows[r][c];
            let selected = focused && state.cursor.row == r && state.cursor.col == c;
            render_button(frame, rect, button, selected, state.is_flashing(button), theme);
        }
    }
}

fn render_button(
    frame: &mut Frame,
    rect: Rect,
    button: Button,
    selected: bool,
    pressed: bool,
    theme: &Theme,
) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let style = if pressed {
        theme.button_pressed()
    } else if selected {
        theme.button_selected(button.kind())
    } else {
        theme.button(button.kind())
    };

    frame.render_widget(Block::default().style(style), rect);
    let label_area = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1);
    frame.render_widget(
        Paragraph::new(button.label())
            .alignment(Alignment::Center)
            .style(style),
        label_area,
    );
}

/// Area inside the keypad border.
pub fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// One rect per button, rows split evenly and buttons split evenly within
/// their row.
pub fn button_rects(area: Rect, rows: &[&[Button]]) -> Vec<Vec<Rect>> {
    if rows.is_empty() {
        return Vec::new();
    }
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
        .split(area);

    rows.iter()
        .zip(row_areas.iter())
        .map(|(row, row_area)| {
            if row.is_empty() {
                return Vec::new();
            }
            Layout::default()
                .direction(Direction::Horizontal)
                .spacing(1)
                .constraints(vec![Constraint::Ratio(1, row.len() as u32); row.len()])
                .split(*row_area)
                .to_vec()
        })
        .collect()
}
