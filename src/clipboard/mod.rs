use anyhow::{Context, Result};
use arboard::Clipboard;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

#[cfg(test)]
fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot copy empty text to clipboard");
    }
    provider.set_text(text)?;
    Ok(())
}

/// Copy a result string to the system clipboard.
///
/// # Errors
/// Returns an error when the text is empty or the system clipboard is
/// unavailable (headless environment, access denied, locked by another
/// process).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot copy empty text to clipboard");
    }
    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock clipboard for testing without system clipboard access
    struct MockClipboard {
        text: Option<String>,
        should_fail: bool,
    }

    impl MockClipboard {
        fn new() -> Self {
            Self { text: None, should_fail: false }
        }

        fn with_failure() -> Self {
            Self { text: None, should_fail: true }
        }
    }

    impl ClipboardProvider for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.should_fail {
                anyhow::bail!("Mock clipboard error");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_digits_with_mock() {
        let mut mock = MockClipboard::new();
        let result = copy_with_provider("1111 1111", &mut mock);

        assert!(result.is_ok());
        assert_eq!(mock.text.as_deref(), Some("1111 1111"));
    }

    #[test]
    fn test_copy_empty_text_rejected() {
        let mut mock = MockClipboard::new();
        let result = copy_with_provider("", &mut mock);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
        assert!(mock.text.is_none());
    }

    #[test]
    fn test_clipboard_provider_failure() {
        let mut mock = MockClipboard::with_failure();
        let result = copy_with_provider("FF", &mut mock);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Mock clipboard error"));
    }

    #[test]
    fn test_copy_to_clipboard_validates_before_clipboard_access() {
        // Empty input must fail validation, not clipboard init
        let result = copy_to_clipboard("");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }
}
