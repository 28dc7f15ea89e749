//! # mdocx
//!
//! Compiles AI-generated markdown sections into a laid-out document tree
//! ready for an office document packer.
//!
//! The compiler reads a narrow markdown subset (headings, paragraphs, bullet
//! and numbered lists, block quotes, pipe tables, `**bold**` and `*italic*`)
//! and maps every block to fixed styling: fonts, spacing, indentation and
//! page margins in twips.
//!
//! ## Quick Start
//!
//! ```
//! use mdocx::{Mdocx, Section};
//! use chrono::NaiveDate;
//!
//! fn main() -> mdocx::Result<()> {
//!     let logo = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
//!     let sections = vec![
//!         Section::new("Bakgrund", "Some **bold** text.\n\n- one\n- two"),
//!     ];
//!
//!     let export = Mdocx::new("Skrivelse")
//!         .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
//!         .build(&sections, logo)?;
//!
//!     assert_eq!(export.file_name, "Skrivelse 2024-03-01.docx");
//!     assert_eq!(export.document.block_count(), 4);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Forgiving parser**: malformed tables and unmatched emphasis never fail
//! - **Fixed layout**: one style sheet, page geometry and logo header
//! - **Pluggable packers**: JSON, plain text and Markdown built in

pub mod assemble;
pub mod compiler;
pub mod detect;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod pack;
pub mod stats;

// Re-export commonly used types
pub use assemble::DocumentAssembler;
pub use compiler::{parse_inline, parse_table, scan, BlockScanner};
pub use detect::{detect_image_format, is_supported_image, ImageFormat};
pub use error::{Error, Result};
pub use export::{build_export, suggested_file_name, Export, ExportOptions};
pub use layout::LayoutMapper;
pub use model::{
    Alignment, Block, BlockFormat, Cell, Document, HeadingLevel, ListItem, Metadata, Run, Section,
    StyleSheet, StyledBlock, Table, TableRow,
};
pub use pack::{DocumentPacker, JsonFormat, OutputFormat, PackedDocument, PackerRegistry};
pub use stats::DocumentStats;

use chrono::NaiveDate;

/// Compile one markdown body into blocks, without styling.
///
/// # Example
///
/// ```
/// use mdocx::{compile_markdown, Block};
///
/// let blocks = compile_markdown("# Title\n\nBody text");
/// assert_eq!(blocks.len(), 2);
/// assert!(matches!(blocks[1], Block::Paragraph { .. }));
/// ```
pub fn compile_markdown(body: &str) -> Vec<Block> {
    scan(body)
}

/// Assemble sections into a document with default settings.
///
/// # Arguments
///
/// * `sections` - Ordered sections; each title becomes a level-1 heading
/// * `logo` - Header logo image bytes (PNG, JPEG, GIF or BMP)
pub fn assemble(sections: &[Section], logo: &[u8]) -> Result<Document> {
    DocumentAssembler::new().assemble(sections, logo)
}

/// Read sections from a JSON array of `{ "title", "body" }` objects.
///
/// The field name `answer` is accepted in place of `body`.
///
/// # Example
///
/// ```
/// let sections = mdocx::sections_from_json(r#"[{"title": "A", "answer": "b"}]"#)?;
/// assert_eq!(sections[0].body, "b");
/// # Ok::<(), mdocx::Error>(())
/// ```
pub fn sections_from_json(json: &str) -> Result<Vec<Section>> {
    Ok(serde_json::from_str(json)?)
}

/// Builder for compiling sections and packing the result.
///
/// # Example
///
/// ```
/// use mdocx::{Mdocx, OutputFormat, Section};
///
/// let logo = b"GIF89a\x01\x00";
/// let packed = Mdocx::new("Yttrande")
///     .with_format(OutputFormat::Text)
///     .export(&[Section::new("Title", "Hello *world*")], logo)?;
///
/// assert_eq!(packed.mime_type, "text/plain");
/// assert_eq!(String::from_utf8_lossy(&packed.bytes), "Title\n\nHello world");
/// # Ok::<(), mdocx::Error>(())
/// ```
pub struct Mdocx {
    options: ExportOptions,
}

impl Mdocx {
    /// Create a new builder for a flow.
    pub fn new(flow_name: impl Into<String>) -> Self {
        Self {
            options: ExportOptions::new(flow_name),
        }
    }

    /// Create a builder from existing options.
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Set the date stamp. Defaults to today.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.options = self.options.with_date(date);
        self
    }

    /// Set the output format used by [`Mdocx::export`].
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.options = self.options.with_format(format);
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.options = self.options.with_json_format(format);
        self
    }

    /// Get the export options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Assemble the document and its suggested file name.
    pub fn build(&self, sections: &[Section], logo: &[u8]) -> Result<Export> {
        build_export(
            sections,
            logo,
            &self.options.flow_name,
            self.options.resolved_date(),
        )
    }

    /// Assemble and pack with the built-in packer for the output format.
    pub fn export(&self, sections: &[Section], logo: &[u8]) -> Result<PackedDocument> {
        let export = self.build(sections, logo)?;
        match self.options.output_format {
            OutputFormat::Json => {
                export.pack(&pack::JsonPacker::with_format(self.options.json_format))
            }
            other => {
                let registry = PackerRegistry::with_defaults();
                let packer = registry.get(other.packer_name())?;
                export.pack(packer.as_ref())
            }
        }
    }

    /// Assemble and pack with a caller-supplied packer.
    pub fn export_with(
        &self,
        sections: &[Section],
        logo: &[u8],
        packer: &dyn DocumentPacker,
    ) -> Result<PackedDocument> {
        self.build(sections, logo)?.pack(packer)
    }
}
