//! System clipboard access.
//!
//! The handle is opened lazily and kept for the lifetime of the app: on X11
//! the copied text is only served while the owning handle is alive.

use anyhow::{Context, Result};
use arboard::Clipboard;

#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard> {
        if self.inner.is_none() {
            self.inner = Some(Clipboard::new().context("Failed to open clipboard")?);
        }
        self.inner
            .as_mut()
            .context("Clipboard handle missing after open")
    }

    pub fn copy(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text.to_string())
            .context("Failed to write clipboard")
    }

    pub fn paste(&mut self) -> Result<String> {
        self.handle()?
            .get_text()
            .context("Failed to read clipboard")
    }
}
