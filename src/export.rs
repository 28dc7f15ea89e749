//! Export options and file naming.

use chrono::NaiveDate;

use crate::assemble::DocumentAssembler;
use crate::error::Result;
use crate::model::{Document, Section};
use crate::pack::{DocumentPacker, JsonFormat, OutputFormat, PackedDocument};

/// Extension of the office document produced by the external packer.
pub const DOCX_EXTENSION: &str = "docx";

/// File name stem: `<flow name> <YYYY-MM-DD>`.
pub fn file_stem(flow_name: &str, date: NaiveDate) -> String {
    format!("{} {}", flow_name, date.format("%Y-%m-%d"))
}

/// Suggested name of the exported office document.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use mdocx::export::suggested_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(suggested_file_name("Skrivelse", date), "Skrivelse 2024-03-01.docx");
/// ```
pub fn suggested_file_name(flow_name: &str, date: NaiveDate) -> String {
    format!("{}.{}", file_stem(flow_name, date), DOCX_EXTENSION)
}

/// Options for exporting sections.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Flow name; used as document title and file name prefix
    pub flow_name: String,

    /// Date stamp; today (UTC) when unset
    pub date: Option<NaiveDate>,

    /// Output format of the built-in packers
    pub output_format: OutputFormat,

    /// JSON layout when the output format is JSON
    pub json_format: JsonFormat,
}

impl ExportOptions {
    /// Create export options for a flow.
    pub fn new(flow_name: impl Into<String>) -> Self {
        Self {
            flow_name: flow_name.into(),
            ..Self::default()
        }
    }

    /// Set the date stamp.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// The date stamp to use.
    pub fn resolved_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

/// An assembled document and its suggested file name.
#[derive(Debug, Clone)]
pub struct Export {
    /// The assembled document
    pub document: Document,

    /// Suggested `.docx` file name
    pub file_name: String,

    file_stem: String,
}

impl Export {
    /// Get the file name without extension.
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Hand the document to a packer. The packer's extension replaces `.docx`.
    pub fn pack(&self, packer: &dyn DocumentPacker) -> Result<PackedDocument> {
        packer.pack_named(&self.document, &self.file_stem)
    }
}

/// Assemble sections into a document and name it.
///
/// Pure: the same inputs always give the same document and name.
pub fn build_export(
    sections: &[Section],
    logo: &[u8],
    flow_name: &str,
    date: NaiveDate,
) -> Result<Export> {
    let document = DocumentAssembler::new()
        .with_title(flow_name)
        .with_date(date)
        .assemble(sections, logo)?;
    let stem = file_stem(flow_name, date);

    Ok(Export {
        document,
        file_name: format!("{}.{}", stem, DOCX_EXTENSION),
        file_stem: stem,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::TextPacker;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()
    }

    #[test]
    fn test_file_names() {
        assert_eq!(file_stem("Yttrande", date()), "Yttrande 2025-01-09");
        assert_eq!(suggested_file_name("Yttrande", date()), "Yttrande 2025-01-09.docx");
    }

    #[test]
    fn test_export_options_builder() {
        let options = ExportOptions::new("Skrivelse")
            .with_date(date())
            .with_format(OutputFormat::Markdown)
            .with_json_format(JsonFormat::Compact);

        assert_eq!(options.flow_name, "Skrivelse");
        assert_eq!(options.resolved_date(), date());
        assert_eq!(options.output_format, OutputFormat::Markdown);
        assert_eq!(options.json_format, JsonFormat::Compact);
    }

    #[test]
    fn test_build_export() {
        let export = build_export(&[Section::new("A", "b")], PNG, "Skrivelse", date()).unwrap();
        assert_eq!(export.file_name, "Skrivelse 2025-01-09.docx");
        assert_eq!(export.document.metadata.title.as_deref(), Some("Skrivelse"));

        let packed = export.pack(&TextPacker::new()).unwrap();
        assert_eq!(packed.file_name, "Skrivelse 2025-01-09.txt");
        assert_eq!(packed.mime_type, "text/plain");
    }

    #[test]
    fn test_build_export_is_deterministic() {
        let sections = vec![Section::new("A", "- x\n- y\n\n|a|\n|-|")];
        let first = build_export(&sections, PNG, "F", date()).unwrap();
        let second = build_export(&sections, PNG, "F", date()).unwrap();
        assert_eq!(first.document.body, second.document.body);
        assert_eq!(first.file_name, second.file_name);
    }
}
