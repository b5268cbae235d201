use log::error;

/// Minimal clipboard API used by the GUI copy action, kept behind a trait
/// so callers and tests never touch the platform backend directly.
pub trait ClipboardManager {
    fn set_text(&mut self, text: String) -> anyhow::Result<()>;
}

/// Clipboard manager backed by `arboard`.
pub struct ArboardClipboardManager {
    /// Lazily initialized handle; `None` when clipboard access is
    /// unavailable in this environment.
    inner: Option<arboard::Clipboard>,
}

impl ArboardClipboardManager {
    pub fn new() -> Self {
        match arboard::Clipboard::new() {
            Ok(cb) => Self { inner: Some(cb) },
            Err(e) => {
                error!("failed to initialize clipboard: {}", e);
                Self { inner: None }
            }
        }
    }
}

impl Default for ArboardClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager for ArboardClipboardManager {
    fn set_text(&mut self, text: String) -> anyhow::Result<()> {
        let Some(cb) = &mut self.inner else {
            return Err(anyhow::anyhow!(
                "clipboard is not available in this environment"
            ));
        };
        cb.set_text(text)
            .map_err(|e| anyhow::anyhow!("clipboard write failed: {}", e))
    }
}

/// Write `text` to the system clipboard.
pub fn copy_text(text: String) -> anyhow::Result<()> {
    let mut manager = ArboardClipboardManager::new();
    manager.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
        fail: bool,
    }

    impl ClipboardManager for RecordingClipboard {
        fn set_text(&mut self, text: String) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("access denied");
            }
            self.writes.push(text);
            Ok(())
        }
    }

    #[test]
    fn text_reaches_the_backend() {
        let mut clipboard = RecordingClipboard::default();
        clipboard
            .set_text("You are a poetic assistant.".to_string())
            .unwrap();
        assert_eq!(clipboard.writes, vec!["You are a poetic assistant."]);
    }

    #[test]
    fn backend_failure_is_reported_to_the_caller() {
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..RecordingClipboard::default()
        };
        assert!(clipboard.set_text("text".to_string()).is_err());
        assert!(clipboard.writes.is_empty());
    }
}
