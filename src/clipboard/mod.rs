//! Copying message content to the system clipboard.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

use crate::models::Message;

/// Largest message body we hand to the clipboard (10MB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Seam over the system clipboard so tests never touch the real one
trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<()>;
}

impl ClipboardSink for Clipboard {
    fn set_text(&mut self, text: String) -> Result<()> {
        Clipboard::set_text(self, text).context("Failed to set clipboard contents")
    }
}

fn checked_content(message: &Message) -> Result<&str> {
    let text = message.content.as_str();
    if text.trim().is_empty() {
        bail!("Message has no text to copy");
    }
    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Message too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }
    Ok(text)
}

fn copy_into(message: &Message, sink: &mut dyn ClipboardSink) -> Result<()> {
    let text = checked_content(message)?;
    sink.set_text(text.to_string())
}

/// Copy a message's content to the system clipboard
///
/// # Errors
///
/// Returns an error if the content is blank or larger than 10MB, or if the system
/// clipboard is unavailable (headless session, missing X11/Wayland support).
pub fn copy_message(message: &Message) -> Result<()> {
    // Validate before touching the clipboard so headless runs still report content errors
    checked_content(message)?;
    let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
    copy_into(message, &mut clipboard)
}
