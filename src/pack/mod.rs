//! Packers: the hand-off from an assembled [`Document`] to bytes on disk.
//!
//! The `.docx` container writer is an external collaborator that plugs in
//! through [`DocumentPacker`]. The crate ships packers for inspecting the
//! tree (JSON), previewing it (Markdown) and extracting its text.
//!
//! # Example
//!
//! ```
//! use mdocx::pack::{JsonPacker, PackerRegistry};
//! use mdocx::{DocumentAssembler, Section};
//! use std::sync::Arc;
//!
//! let mut registry = PackerRegistry::new();
//! registry.register(Arc::new(JsonPacker::compact()));
//!
//! let logo = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
//! let doc = DocumentAssembler::new().assemble(&[Section::new("A", "b")], logo)?;
//! let packed = registry.pack(&doc, "json", "Skrivelse 2024-03-01")?;
//! assert_eq!(packed.file_name, "Skrivelse 2024-03-01.json");
//! # Ok::<(), mdocx::Error>(())
//! ```

mod json;
mod markdown;
mod text;

pub use json::{JsonFormat, JsonPacker};
pub use markdown::{blocks_to_markdown, MarkdownPacker};
pub use text::TextPacker;

use crate::error::{Error, Result};
use crate::model::Document;
use std::collections::HashMap;
use std::sync::Arc;

/// Output format served by the built-in packers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON document tree
    #[default]
    Json,

    /// Plain text
    Text,

    /// Normalized Markdown
    Markdown,
}

impl OutputFormat {
    /// Registry name of the packer serving this format.
    pub fn packer_name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// A packed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedDocument {
    /// Suggested file name, extension included
    pub file_name: String,

    /// MIME type of the bytes
    pub mime_type: String,

    /// Serialized content
    pub bytes: Vec<u8>,
}

impl PackedDocument {
    /// Get content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the packed content is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Trait for document packers.
///
/// Implement this trait to hand the assembled tree to a serializer.
/// Packers must not retry: the document is deterministic, so a failure is
/// reported to the caller as is.
pub trait DocumentPacker: Send + Sync {
    /// Get the name of this packer.
    fn name(&self) -> &str;

    /// File extension written by this packer, lowercase without the dot.
    fn extension(&self) -> &str;

    /// MIME type of the packed bytes.
    fn mime_type(&self) -> &str;

    /// Serialize the document.
    fn pack(&self, doc: &Document) -> Result<Vec<u8>>;

    /// Check if this packer writes the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        self.extension().eq_ignore_ascii_case(ext)
    }

    /// Serialize the document and name the result after `file_stem`.
    fn pack_named(&self, doc: &Document, file_stem: &str) -> Result<PackedDocument> {
        let bytes = self.pack(doc)?;
        Ok(PackedDocument {
            file_name: format!("{}.{}", file_stem, self.extension()),
            mime_type: self.mime_type().to_string(),
            bytes,
        })
    }
}

/// Registry for document packers, keyed by extension and by name.
pub struct PackerRegistry {
    by_extension: HashMap<String, Arc<dyn DocumentPacker>>,
    by_name: HashMap<String, Arc<dyn DocumentPacker>>,
}

impl PackerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_extension: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in packers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JsonPacker::new()));
        registry.register(Arc::new(TextPacker::new()));
        registry.register(Arc::new(MarkdownPacker::new()));
        registry
    }

    /// Register a packer under its name and extension.
    ///
    /// A later registration replaces an earlier one with the same key.
    pub fn register(&mut self, packer: Arc<dyn DocumentPacker>) {
        self.by_extension
            .insert(packer.extension().to_lowercase(), packer.clone());
        self.by_name.insert(packer.name().to_lowercase(), packer);
    }

    /// Get a packer by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentPacker>> {
        self.by_extension.get(&ext.to_lowercase()).cloned()
    }

    /// Get a packer by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentPacker>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Get a packer by name, falling back to extension.
    pub fn get(&self, key: &str) -> Result<Arc<dyn DocumentPacker>> {
        self.get_by_name(key)
            .or_else(|| self.get_by_extension(key))
            .ok_or_else(|| Error::UnknownPacker(key.to_string()))
    }

    /// Check if a name or extension is served.
    pub fn supports(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Get all registered extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.by_extension.keys().map(|s| s.as_str()).collect()
    }

    /// Pack a document with the packer registered under `key`.
    pub fn pack(&self, doc: &Document, key: &str, file_stem: &str) -> Result<PackedDocument> {
        let packer = self.get(key)?;
        log::debug!("Packing document with {} packer", packer.name());
        packer.pack_named(doc, file_stem)
    }
}

impl Default for PackerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = PackerRegistry::with_defaults();
        assert!(registry.supports("json"));
        assert!(registry.supports("JSON"));
        assert!(registry.supports("txt"));
        assert!(registry.supports("text"));
        assert!(registry.supports("md"));
        assert!(!registry.supports("docx"));
    }

    #[test]
    fn test_registry_unknown_packer() {
        let registry = PackerRegistry::new();
        assert!(matches!(registry.get("docx"), Err(Error::UnknownPacker(_))));
    }

    #[test]
    fn test_output_format_names() {
        let registry = PackerRegistry::with_defaults();
        for format in [OutputFormat::Json, OutputFormat::Text, OutputFormat::Markdown] {
            assert!(registry.get_by_name(format.packer_name()).is_some());
        }
    }
}
