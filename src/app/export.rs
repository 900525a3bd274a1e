//! Markup export - clipboard write and acknowledgment handling

use super::GridEditor;
use crate::acknowledgment::Acknowledgment;
use crate::error::{GridError, GridResult};
use gpui::*;

impl GridEditor {
    /// Copy the generated markup to the system clipboard.
    ///
    /// The write is checked by reading the clipboard back; the outcome is
    /// shown as a blocking acknowledgment.
    pub fn export_to_clipboard(&mut self, cx: &mut Context<Self>) {
        if self.is_blocked() {
            return;
        }
        let markup = self.canvas.layout.render_markup();
        cx.write_to_clipboard(ClipboardItem::new_string(markup.clone()));
        let read_back = cx.read_from_clipboard().and_then(|item| item.text());

        let result = verify_clipboard(&markup, read_back);
        match &result {
            Ok(()) => tracing::info!(bytes = markup.len(), "Markup copied to clipboard"),
            Err(e) => tracing::error!("Clipboard export failed: {}", e),
        }

        self.ui.acknowledgment = Some(Acknowledgment::for_export(&result));
        cx.notify();
    }

    /// Close the acknowledgment modal
    pub fn dismiss_acknowledgment(&mut self, cx: &mut Context<Self>) {
        if self.ui.acknowledgment.take().is_some() {
            cx.notify();
        }
    }
}

/// Compare what the clipboard holds after a write with what was written
pub fn verify_clipboard(expected: &str, actual: Option<String>) -> GridResult<()> {
    match actual {
        None => Err(GridError::ClipboardUnavailable),
        Some(text) if text == expected => Ok(()),
        Some(_) => Err(GridError::ClipboardMismatch),
    }
}
