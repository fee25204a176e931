//! Clipboard support for calculator results.

use anyhow::Context;
use arboard::Clipboard;

use crate::calculator::evaluation::CalcResult;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;

    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")
}

/// Copy a result: its value on success, its message on error.
pub fn copy_result(result: &CalcResult) -> anyhow::Result<()> {
    let text = result.text_for_clipboard();
    copy_to_clipboard(&text)?;
    tracing::debug!(text = %text, "Copied result to clipboard");
    Ok(())
}
