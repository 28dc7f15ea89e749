//! Plain text packing.

use super::DocumentPacker;
use crate::error::Result;
use crate::model::Document;

/// Convert a document to plain text.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text().trim().to_string()
}

/// Packs the text content of a document, one block per paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPacker;

impl TextPacker {
    /// Create a new text packer.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPacker for TextPacker {
    fn name(&self) -> &str {
        "text"
    }

    fn extension(&self) -> &str {
        "txt"
    }

    fn mime_type(&self) -> &str {
        "text/plain"
    }

    fn pack(&self, doc: &Document) -> Result<Vec<u8>> {
        Ok(to_text(doc).into_bytes())
    }
}
