//! Document-level value types.

use crate::error::Result;
use crate::render::RenderOptions;
use crate::scanner::MarkerScanner;
use serde::{Deserialize, Serialize};

/// Raw marker text paired with a page title.
///
/// Immutable per compile call; compiling the same document twice yields
/// byte-identical HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkupDocument {
    /// Page title, substituted into the page template
    pub title: String,

    /// Raw marker text, scanned line by line
    pub body: String,
}

impl MarkupDocument {
    /// Create a new markup document.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Compile the document to a full HTML page with default options.
    pub fn to_html(&self) -> Result<String> {
        MarkerScanner::new(RenderOptions::default()).compile(&self.title, &self.body)
    }
}

/// Mutable raw text plus title whose HTML view recompiles on every read.
///
/// There is no caching: every [`html`](Self::html) call reflects the latest
/// `raw_text`. The wrapper holds no lock either; callers sharing one across
/// threads own the single-writer/multiple-reader discipline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentWrapper {
    /// Page title
    pub title: String,

    /// Raw marker text, assigned directly by the caller
    pub raw_text: String,
}

impl DocumentWrapper {
    /// Create an empty wrapper with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            raw_text: String::new(),
        }
    }

    /// Compile the current raw text to a full HTML page.
    pub fn html(&self) -> Result<String> {
        MarkerScanner::new(RenderOptions::default()).compile(&self.title, &self.raw_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_document_to_html() {
        let doc = MarkupDocument::new("Guide", "plain line");
        let html = doc.to_html().unwrap();
        assert!(html.contains("<title>Guide</title>"));
        assert!(html.contains("plain line "));
    }

    #[test]
    fn test_wrapper_reflects_latest_raw_text() {
        let mut wrapper = DocumentWrapper::new("Notes");
        wrapper.raw_text = "first".to_string();
        assert!(wrapper.html().unwrap().contains("first"));

        wrapper.raw_text = "second".to_string();
        let html = wrapper.html().unwrap();
        assert!(html.contains("second"));
        assert!(!html.contains("first"));
    }
}
