use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts: Vec<Span> = Vec::new();

    let status_style = if state.status_message.is_some() {
        theme.status_error()
    } else {
        theme.status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), status_style));

    // Focus indicator and help hint on the right
    let focus_name = match state.focus {
        FocusPanel::Keypad => "KEYPAD",
        FocusPanel::History => "HISTORY",
    };
    let hint = " F1 help ";
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let right = focus_name.len() + 3 + hint.len();
    let remaining = (area.width as usize).saturating_sub(used + right);
    parts.push(Span::styled(" ".repeat(remaining), theme.status_bar()));
    parts.push(Span::styled(
        format!(" [{}]", focus_name),
        Style::default().fg(theme.accent).bg(theme.surface),
    ));
    parts.push(Span::styled(hint, theme.status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
