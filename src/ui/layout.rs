use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the history panel when shown.
const HISTORY_WIDTH: u16 = 34;

pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub history: Option<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_history: bool) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: calculator | gap | history
    let (calculator, history) = if show_history {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints([Constraint::Min(30), Constraint::Length(HISTORY_WIDTH)])
            .split(content);
        (h_chunks[0], Some(h_chunks[1]))
    } else {
        (content, None)
    };

    // Calculator: display | keypad
    let calc_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Display
            Constraint::Min(3),    // Keypad
        ])
        .split(calculator);

    AppLayout {
        display: calc_chunks[0],
        keypad: calc_chunks[1],
        history,
        status_bar,
    }
}
