use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Text read from the system clipboard
    Pasted(String),

    /// The system clipboard could not be reached
    ClipboardError(String),

    /// Tick for UI refresh
    Tick,
}
