//! JSON packing of the document tree.

use super::DocumentPacker;
use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON. Logo bytes are omitted.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Pack(format!("JSON serialization error: {}", e)))
}

/// Packs the document tree as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPacker {
    format: JsonFormat,
}

impl JsonPacker {
    /// Create a pretty-printing JSON packer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compact JSON packer.
    pub fn compact() -> Self {
        Self {
            format: JsonFormat::Compact,
        }
    }

    /// Create a packer with the given format.
    pub fn with_format(format: JsonFormat) -> Self {
        Self { format }
    }
}

impl DocumentPacker for JsonPacker {
    fn name(&self) -> &str {
        "json"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }

    fn pack(&self, doc: &Document) -> Result<Vec<u8>> {
        to_json(doc, self.format).map(String::into_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::DocumentAssembler;
    use crate::model::Section;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

    fn sample() -> Document {
        DocumentAssembler::new()
            .with_title("Test")
            .assemble(&[Section::new("Rubrik", "Hello **there**")], PNG)
            .unwrap()
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Rubrik"));
        assert!(json.contains("\"type\": \"heading\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_round_trip_tree() {
        let doc = sample();
        let bytes = JsonPacker::new().pack(&doc).unwrap();
        let back: Document = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back.body, doc.body);
        assert!(back.header.logo.data.is_empty());
    }
}
