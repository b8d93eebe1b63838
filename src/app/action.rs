/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    CopyToClipboard { text: String },
    PasteFromClipboard,
    SaveConfig,
    Quit,
}
