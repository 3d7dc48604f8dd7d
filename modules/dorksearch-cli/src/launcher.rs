//! Browser and clipboard side effects.

use anyhow::{Context, Result};

/// Hands a finished query to the desktop.
pub trait Launcher: Send + Sync {
    fn open_url(&self, url: &str) -> Result<()>;
    fn copy_text(&self, text: &str) -> Result<()>;
}

/// Default browser via `open`, system clipboard via `arboard`.
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_url(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Failed to open browser for {url}"))
    }

    fn copy_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
        clipboard
            .set_text(text.to_string())
            .context("Failed to write clipboard")
    }
}
