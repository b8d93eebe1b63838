use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const BINDINGS: &[(&str, &str)] = &[
    ("0-9 .", "Enter digits"),
    ("+ - * / ^", "Choose operator"),
    ("Enter =", "Evaluate"),
    ("Esc", "Clear"),
    ("Backspace", "Delete last digit"),
    ("~", "Toggle sign"),
    ("r w", "Square root, square"),
    ("s c t", "sin, cos, tan"),
    ("l n", "log10, ln"),
    ("i p e", "1/x, π, e"),
    ("Ctrl+M / Alt+M", "Memory store"),
    ("Ctrl+Shift+M", "Memory clear"),
    ("Ctrl+R", "Memory recall"),
    ("Ctrl+P / Ctrl+N", "Memory add / subtract"),
    ("Ctrl+C / Ctrl+V", "Copy / paste"),
    ("Arrows Space", "Move on keypad, press"),
    ("Tab", "Focus history (Enter reuses)"),
    ("F2", "Basic / scientific"),
    ("F3", "Show / hide history"),
    ("F4", "Next theme"),
    ("F5", "Radians / degrees"),
    ("q Ctrl+Q", "Quit"),
];

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    if !state.show_help {
        return;
    }

    let area = frame.area();
    let popup_w = 52u16.min(area.width.saturating_sub(2));
    let popup_h = (BINDINGS.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_x = area.x + area.width.saturating_sub(popup_w) / 2;
    let popup_y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keys · Esc to close ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(theme.border_focused())
        .style(theme.base());

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<18}", keys),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*what, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
