//! Preview actions: download, copy feedback, validator link, guide

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::preview::Preview;

pub const DOWNLOAD_FILE_NAME: &str = "schema.json";
pub const DOWNLOAD_MIME: &str = "application/json";

/// External rich-results test, opened without parameters
pub const VALIDATOR_URL: &str = "https://search.google.com/test/rich-results";

/// How long the "copied" confirmation stays on the copy button
pub const COPY_CONFIRMATION_MS: u32 = 2000;

/// Blocking notice shown when the clipboard write is refused
pub const COPY_FAILURE_NOTICE: &str = "Failed to copy to clipboard. Please try again.";

/// The preview offered as a file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub file_name: String,
    pub mime: String,
    pub contents: String,
}

impl Download {
    pub fn from_preview(preview: &Preview) -> Self {
        Self {
            file_name: DOWNLOAD_FILE_NAME.to_string(),
            mime: DOWNLOAD_MIME.to_string(),
            contents: preview.text.clone(),
        }
    }

    /// Write the file into `dir`, returning the full path.
    pub fn write_into(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.contents.as_bytes())?;
        tracing::info!(path = %path.display(), bytes = self.contents.len(), "Wrote schema file");
        Ok(path)
    }
}

/// Ticket handed out by [`CopyFeedback::confirm`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Transient "Copied!" state of the copy control.
///
/// Every successful copy restarts the confirmation window; a timer that
/// fires for an older copy is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    generation: u64,
    confirming: bool,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the confirmation state. Expire the ticket after
    /// [`COPY_CONFIRMATION_MS`].
    pub fn confirm(&mut self) -> CopyTicket {
        self.generation += 1;
        self.confirming = true;
        CopyTicket(self.generation)
    }

    /// Leave the confirmation state if `ticket` is from the latest copy.
    /// Returns whether the state changed.
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if self.confirming && ticket.0 == self.generation {
            self.confirming = false;
            true
        } else {
            false
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn label(&self) -> &'static str {
        if self.confirming {
            "Copied!"
        } else {
            "Copy"
        }
    }
}

/// A section of the implementation guide
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GuideSection {
    pub title: &'static str,
    pub body: &'static str,
    pub snippet: &'static str,
}

const GUIDE: &[GuideSection] = &[
    GuideSection {
        title: "JSON-LD Implementation",
        body: "Copy the generated code and paste it within the <head> section of your HTML:",
        snippet: "<script type=\"application/ld+json\">\n// Your schema code here\n</script>",
    },
    GuideSection {
        title: "Microdata Implementation",
        body: "Microdata is added directly to your HTML elements using attributes:",
        snippet: "<div itemscope itemtype=\"http://schema.org/Product\">\n  <span itemprop=\"name\">Product Name</span>\n  <img itemprop=\"image\" src=\"product-image.jpg\" alt=\"Product\">\n</div>",
    },
];

/// Static instructions for embedding the generated markup
pub fn implementation_guide() -> &'static [GuideSection] {
    GUIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_carries_preview_text() {
        let preview = Preview {
            text: "{}".to_string(),
            html: "<span>{}</span>".to_string(),
        };
        let download = Download::from_preview(&preview);
        assert_eq!(download.file_name, "schema.json");
        assert_eq!(download.mime, "application/json");
        assert_eq!(download.contents, "{}");
    }

    #[test]
    fn test_copy_feedback_expires() {
        let mut feedback = CopyFeedback::new();
        assert_eq!(feedback.label(), "Copy");

        let ticket = feedback.confirm();
        assert_eq!(feedback.label(), "Copied!");
        assert!(feedback.expire(ticket));
        assert!(!feedback.is_confirming());
        assert!(!feedback.expire(ticket));
    }

    #[test]
    fn test_repeated_copy_restarts_window() {
        let mut feedback = CopyFeedback::new();
        let first = feedback.confirm();
        let second = feedback.confirm();

        assert!(!feedback.expire(first));
        assert!(feedback.is_confirming());
        assert!(feedback.expire(second));
        assert!(!feedback.is_confirming());
    }

    #[test]
    fn test_guide_sections() {
        let guide = implementation_guide();
        assert_eq!(guide.len(), 2);
        assert!(guide[0].snippet.contains("application/ld+json"));
        assert!(guide[1].snippet.contains("itemscope"));
    }
}
