//! Document assembly: sections in, one laid-out document out.

use chrono::NaiveDate;

use crate::compiler::scan;
use crate::detect::detect_image_format;
use crate::error::{Error, Result};
use crate::layout::{heading_format, template, LayoutMapper};
use crate::model::{
    Alignment, Block, BlockFormat, Document, HeaderRegion, HeadingLevel, Logo, Metadata, Run,
    Section, StyledBlock,
};

/// Builds a [`Document`] from ordered sections and the header logo.
///
/// # Example
///
/// ```
/// use mdocx::{DocumentAssembler, Section};
///
/// let logo = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
/// let sections = vec![Section::new("Bakgrund", "Some **text**.")];
/// let doc = DocumentAssembler::new().assemble(&sections, logo)?;
/// assert_eq!(doc.block_count(), 2);
/// # Ok::<(), mdocx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    mapper: LayoutMapper,
    title: Option<String>,
    date: Option<NaiveDate>,
}

impl DocumentAssembler {
    /// Create a new assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title recorded in metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the date recorded in metadata.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Assemble all sections in order.
    ///
    /// Fails without producing a document if the logo bytes are empty or
    /// not a supported image.
    pub fn assemble(&self, sections: &[Section], logo: &[u8]) -> Result<Document> {
        let header = self.header_region(logo)?;

        let mut body = Vec::new();
        for section in sections {
            body.extend(self.section_blocks(section));
        }
        log::debug!(
            "Assembled {} section(s) into {} block(s)",
            sections.len(),
            body.len()
        );

        Ok(Document {
            metadata: Metadata {
                title: self.title.clone(),
                created: self.date,
                section_count: sections.len() as u32,
            },
            page: template::page_geometry(),
            header,
            styles: template::style_sheet(),
            body,
        })
    }

    /// Lay out one section: its title heading followed by its body blocks.
    pub fn section_blocks(&self, section: &Section) -> Vec<StyledBlock> {
        // Titles are taken literally; emphasis markers are not interpreted.
        let title = StyledBlock::new(
            Block::heading(HeadingLevel::H1, vec![Run::plain(section.title.clone())]),
            BlockFormat::Paragraph(heading_format(HeadingLevel::H1)),
        );

        let blocks = scan(&section.body);
        log::debug!("Section {:?}: {} block(s)", section.title, blocks.len());

        let mut out = Vec::with_capacity(blocks.len() + 1);
        out.push(title);
        out.extend(self.mapper.map_all(blocks));
        out
    }

    fn header_region(&self, logo: &[u8]) -> Result<HeaderRegion> {
        if logo.is_empty() {
            return Err(Error::MissingAsset("header logo is empty".into()));
        }
        let format = detect_image_format(logo)?;

        Ok(HeaderRegion {
            logo: Logo {
                data: logo.to_vec(),
                format,
                width: template::LOGO_WIDTH,
                height: template::LOGO_HEIGHT,
            },
            alignment: Alignment::Left,
            indent_left: template::logo_indent(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::ImageFormat;
    use crate::model::StyleRef;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

    #[test]
    fn test_section_title_comes_first() {
        let sections = vec![
            Section::new("Första", "Text ett"),
            Section::new("Andra", "- punkt"),
        ];
        let doc = DocumentAssembler::new().assemble(&sections, PNG).unwrap();
        let texts: Vec<String> = doc.blocks().map(|b| b.plain_text()).collect();

        assert_eq!(texts, vec!["Första", "Text ett", "Andra", "punkt"]);
        assert!(doc.body[0].block.is_heading());
        assert_eq!(
            doc.body[0].paragraph_format().map(|f| f.style),
            Some(StyleRef::Heading1)
        );
    }

    #[test]
    fn test_title_emphasis_not_parsed() {
        let doc = DocumentAssembler::new()
            .assemble(&[Section::new("**Mål**", "")], PNG)
            .unwrap();
        assert_eq!(doc.body[0].block.plain_text(), "**Mål**");
    }

    #[test]
    fn test_header_and_geometry() {
        let doc = DocumentAssembler::new().assemble(&[], PNG).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.header.logo.format, ImageFormat::Png);
        assert_eq!((doc.header.logo.width, doc.header.logo.height), (228, 91));
        assert_eq!(doc.header.indent_left, -1843);
        assert_eq!(doc.page.margins.top, 1570);
    }

    #[test]
    fn test_metadata() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let doc = DocumentAssembler::new()
            .with_title("Skrivelse")
            .with_date(date)
            .assemble(&[Section::new("a", "b")], PNG)
            .unwrap();
        assert_eq!(doc.metadata.title.as_deref(), Some("Skrivelse"));
        assert_eq!(doc.metadata.created, Some(date));
        assert_eq!(doc.metadata.section_count, 1);
    }

    #[test]
    fn test_missing_logo_fails() {
        let result = DocumentAssembler::new().assemble(&[Section::new("a", "b")], &[]);
        assert!(matches!(result, Err(Error::MissingAsset(_))));
    }

    #[test]
    fn test_unsupported_logo_fails() {
        let result = DocumentAssembler::new().assemble(&[Section::new("a", "b")], b"<svg/>");
        assert!(matches!(result, Err(Error::UnsupportedImage)));
    }
}
