//! Formatting attached to blocks by the layout mapper.
//!
//! All lengths are in twips (1/20 pt) unless noted. Font sizes are in
//! half-points and line spacing in 240ths of a line, the units the office
//! format stores natively.

use super::{Alignment, Block};
use serde::{Deserialize, Serialize};

/// Run font properties of a named style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFont {
    /// Font family name
    pub family: String,

    /// Font size in half-points
    pub size: u32,

    /// Bold text
    pub bold: bool,

    /// Text color (hex without `#`)
    pub color: String,
}

/// Paragraph spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    /// Space before the paragraph in twips
    pub before: u32,

    /// Space after the paragraph in twips
    pub after: u32,

    /// Line spacing in 240ths of a line (276 = 1.15 lines)
    pub line: u32,
}

/// A named style definition of the style sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDef {
    /// Run font
    pub font: RunFont,

    /// Paragraph spacing
    pub spacing: Spacing,

    /// Paragraph alignment
    pub alignment: Alignment,
}

/// Document style sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Body text style
    pub default: StyleDef,

    /// Heading 1 style
    pub heading1: StyleDef,

    /// Heading 2 style
    pub heading2: StyleDef,

    /// Heading 3 style
    pub heading3: StyleDef,
}

impl StyleSheet {
    /// Look up a style by reference.
    pub fn get(&self, style: StyleRef) -> &StyleDef {
        match style {
            StyleRef::Normal => &self.default,
            StyleRef::Heading1 => &self.heading1,
            StyleRef::Heading2 => &self.heading2,
        }
    }
}

/// Reference from a paragraph to a style sheet entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleRef {
    /// Body text
    #[default]
    Normal,
    /// Heading 1
    Heading1,
    /// Heading 2
    Heading2,
}

/// List marker of a list paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListMarker {
    /// Bullet at the given nesting level
    Bullet {
        /// Nesting level
        level: u8,
    },
    /// Numbering definition reference
    Numbered {
        /// Numbering definition name
        reference: String,
        /// Nesting level
        level: u8,
    },
}

/// Paragraph formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    /// Style sheet entry
    pub style: StyleRef,

    /// Paragraph alignment
    pub alignment: Alignment,

    /// Paragraph spacing
    pub spacing: Spacing,

    /// Left indent in twips (negative values bleed into the margin)
    pub indent_left: Option<i32>,

    /// List marker if this is a list item
    pub list: Option<ListMarker>,
}

/// Border line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Single solid line
    #[default]
    Single,
}

/// A table border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    /// Line style
    pub style: BorderStyle,

    /// Line width in eighths of a point
    pub size: u32,

    /// Line color (hex without `#`)
    pub color: String,
}

/// Table formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFormat {
    /// Table width as a percentage of the text column
    pub width_percent: u8,

    /// Border applied to all outer edges and inner lines
    pub border: Border,

    /// Header cell background fill (hex without `#`)
    pub header_shading: String,

    /// Paragraph alignment of the cells in each column
    pub column_alignments: Vec<Alignment>,
}

/// Format of a laid-out block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockFormat {
    /// A paragraph-like block
    Paragraph(ParagraphFormat),
    /// A table
    Table(TableFormat),
}

/// A block together with its layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledBlock {
    /// The recognized block
    pub block: Block,

    /// The formatting attached to it
    pub format: BlockFormat,
}

impl StyledBlock {
    /// Pair a block with its format.
    pub fn new(block: Block, format: BlockFormat) -> Self {
        Self { block, format }
    }

    /// Paragraph format, if this is not a table.
    pub fn paragraph_format(&self) -> Option<&ParagraphFormat> {
        match &self.format {
            BlockFormat::Paragraph(p) => Some(p),
            BlockFormat::Table(_) => None,
        }
    }
}
