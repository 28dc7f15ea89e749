//! Block-level types.

use super::run::runs_text;
use super::{Run, Table};
use serde::{Deserialize, Serialize};

/// A top-level structural element recognized in a markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading
    Heading {
        /// Visual heading level
        level: HeadingLevel,
        /// Heading text runs
        runs: Vec<Run>,
    },

    /// A paragraph of body text
    Paragraph {
        /// Paragraph text runs
        runs: Vec<Run>,
    },

    /// An ordered or unordered list item
    ListItem(ListItem),

    /// A block quote
    BlockQuote {
        /// Quote text runs
        runs: Vec<Run>,
    },

    /// A table
    Table(Table),
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: HeadingLevel, runs: Vec<Run>) -> Self {
        Block::Heading { level, runs }
    }

    /// Create a paragraph block.
    pub fn paragraph(runs: Vec<Run>) -> Self {
        Block::Paragraph { runs }
    }

    /// Create a block quote.
    pub fn quote(runs: Vec<Run>) -> Self {
        Block::BlockQuote { runs }
    }

    /// Get the runs of a text block, or `None` for tables.
    pub fn runs(&self) -> Option<&[Run]> {
        match self {
            Block::Heading { runs, .. }
            | Block::Paragraph { runs }
            | Block::BlockQuote { runs } => Some(runs),
            Block::ListItem(item) => Some(&item.runs),
            Block::Table(_) => None,
        }
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Table(table) => table.plain_text(),
            _ => self.runs().map(runs_text).unwrap_or_default(),
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self, Block::ListItem(_))
    }

    /// Short name of the block kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::ListItem(_) => "list_item",
            Block::BlockQuote { .. } => "block_quote",
            Block::Table(_) => "table",
        }
    }
}

/// Heading levels of the target template.
///
/// Markdown depths beyond two are flattened to [`HeadingLevel::H2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading (also used for deeper markdown headings)
    H2,
}

impl HeadingLevel {
    /// Map a markdown `#` count to a heading level.
    pub fn from_depth(depth: usize) -> Self {
        if depth <= 1 {
            HeadingLevel::H1
        } else {
            HeadingLevel::H2
        }
    }

    /// Numeric level (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
        }
    }
}

/// A list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item text runs
    pub runs: Vec<Run>,

    /// Whether the item belongs to a numbered list
    pub ordered: bool,

    /// The number written before an ordered item
    pub ordinal: Option<u32>,

    /// Nesting level (0 = top level)
    pub level: u8,

    /// Last item of a flushed group; receives the larger trailing spacing
    pub ends_group: bool,
}

impl ListItem {
    /// Create a bulleted item.
    pub fn bullet(runs: Vec<Run>, level: u8, ends_group: bool) -> Self {
        Self {
            runs,
            ordered: false,
            ordinal: None,
            level,
            ends_group,
        }
    }

    /// Create a numbered item. Numbered items are never grouped.
    pub fn numbered(runs: Vec<Run>, ordinal: Option<u32>) -> Self {
        Self {
            runs,
            ordered: true,
            ordinal,
            level: 0,
            ends_group: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_depth_flattening() {
        assert_eq!(HeadingLevel::from_depth(1), HeadingLevel::H1);
        assert_eq!(HeadingLevel::from_depth(2), HeadingLevel::H2);
        assert_eq!(HeadingLevel::from_depth(6), HeadingLevel::H2);
        assert_eq!(HeadingLevel::from_depth(3).number(), 2);
    }

    #[test]
    fn test_block_plain_text() {
        let block = Block::paragraph(vec![Run::plain("Hello "), Run::italic("there")]);
        assert_eq!(block.plain_text(), "Hello there");
        assert_eq!(block.kind(), "paragraph");
    }

    #[test]
    fn test_list_item_constructors() {
        let bullet = ListItem::bullet(vec![Run::plain("a")], 0, false);
        assert!(!bullet.ordered);
        assert!(!bullet.ends_group);

        let numbered = ListItem::numbered(vec![Run::plain("b")], Some(3));
        assert!(numbered.ordered);
        assert_eq!(numbered.ordinal, Some(3));
        assert!(numbered.ends_group);
    }
}
