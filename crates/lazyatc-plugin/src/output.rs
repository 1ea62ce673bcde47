//! Where the window's output goes: notifications and the clipboard.

use tracing::{debug, warn};

use crate::error::{ClipboardError, FetchError};

/// Shows a blocking message to the controller.
pub trait Notifier {
    /// Display `message` and wait for it to be acknowledged.
    fn notify(&mut self, message: &str);
}

/// Plain-text clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Pass a successful result through; report a failed one to `notifier`.
///
/// Every fetch failure is shown once and not retried.
pub fn surface<T>(result: Result<T, FetchError>, notifier: &mut dyn Notifier) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "fetch failed");
            notifier.notify(&e.to_string());
            None
        }
    }
}

/// The operating system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError(format!("Failed to set clipboard text: {e}")))?;
        debug!(chars = text.len(), "copied to clipboard");
        Ok(())
    }
}
