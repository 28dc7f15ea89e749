//! Document-level types.

use super::{Alignment, Block, StyleSheet, StyledBlock};
use crate::detect::ImageFormat;
use crate::stats::DocumentStats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One titled section of generated markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title, rendered as a level-1 heading
    pub title: String,

    /// Markdown body
    #[serde(alias = "answer")]
    pub body: String,
}

impl Section {
    /// Create a new section.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// An assembled document, ready for a packer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: Metadata,

    /// Page geometry
    pub page: PageGeometry,

    /// Page header region
    pub header: HeaderRegion,

    /// Named styles
    pub styles: StyleSheet,

    /// Laid-out blocks in reading order
    pub body: Vec<StyledBlock>,
}

impl Document {
    /// Iterate over the blocks of the body.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.body.iter().map(|b| &b.block)
    }

    /// Get the number of blocks in the body.
    pub fn block_count(&self) -> usize {
        self.body.len()
    }

    /// Check if the body has no blocks.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks()
            .map(|block| block.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Count blocks, words and characters of the body.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::from_blocks(self.blocks())
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title (the flow name)
    pub title: Option<String>,

    /// Date stamp of the export
    pub created: Option<NaiveDate>,

    /// Number of input sections
    pub section_count: u32,
}

/// Page geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page margins
    pub margins: Margins,
}

/// Page margins in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: i32,
    /// Bottom margin
    pub bottom: i32,
    /// Left margin
    pub left: i32,
    /// Right margin
    pub right: i32,
}

/// The page header: a single paragraph holding the logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRegion {
    /// Logo image
    pub logo: Logo,

    /// Paragraph alignment
    pub alignment: Alignment,

    /// Left indent in twips; negative to bleed past the body margin
    pub indent_left: i32,
}

/// Header logo image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    /// Raw image bytes
    #[serde(skip_serializing, default)]
    pub data: Vec<u8>,

    /// Detected image format
    pub format: ImageFormat,

    /// Display width in pixels
    pub width: u32,

    /// Display height in pixels
    pub height: u32,
}

impl Logo {
    /// Get the size of the image data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}
