use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" crabcalc ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(theme.border_type())
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let text = state.calc.display();
    let text_style = if state.calc.last_error().is_some() {
        theme.error_text()
    } else {
        theme.display_text()
    };
    let preview = state.calc.expression_preview().unwrap_or_default();

    let mut indicators = Vec::new();
    if state.calc.memory().is_set() {
        indicators.push(Span::styled("M ", theme.indicator()));
    }
    indicators.push(Span::styled(state.calc.angle_unit().label(), theme.muted()));

    let lines = vec![
        Line::from(Span::styled(fit_width(&preview, width), theme.muted())).right_aligned(),
        Line::from(Span::styled(fit_width(&text, width), text_style)).right_aligned(),
        Line::from(indicators),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Keep the tail of `text` when it is wider than `width`, marking the cut
/// with an ellipsis.
fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut used = 1;
    for c in text.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        tail.push(c);
    }
    let mut out = String::from("…");
    out.extend(tail.into_iter().rev());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("12345", 10), "12345");
        assert_eq!(fit_width("123456789", 5), "…6789");
        assert_eq!(fit_width("12 ÷", 3), "… ÷");
        assert_eq!(fit_width("abc", 0), "");
    }
}
