//! Content statistics of an assembled document.

use crate::model::Block;
use serde::{Deserialize, Serialize};

/// Block and text counts of a document body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of headings, section titles included
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of bulleted list items
    pub bullet_count: u32,

    /// Number of numbered list items
    pub numbered_count: u32,

    /// Number of block quotes
    pub quote_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a sequence of blocks.
    pub fn from_blocks<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> Self {
        let mut stats = Self::new();
        for block in blocks {
            stats.add_block(block);
        }
        stats
    }

    /// Count one block and its text.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Heading { .. } => self.heading_count += 1,
            Block::Paragraph { .. } => self.paragraph_count += 1,
            Block::ListItem(item) if item.ordered => self.numbered_count += 1,
            Block::ListItem(_) => self.bullet_count += 1,
            Block::BlockQuote { .. } => self.quote_count += 1,
            Block::Table(_) => self.table_count += 1,
        }
        self.count_text(&block.plain_text());
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.heading_count
            + self.paragraph_count
            + self.list_item_count()
            + self.quote_count
            + self.table_count
    }

    /// Total number of list items.
    pub fn list_item_count(&self) -> u32 {
        self.bullet_count + self.numbered_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &DocumentStats) {
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.bullet_count += other.bullet_count;
        self.numbered_count += other.numbered_count;
        self.quote_count += other.quote_count;
        self.table_count += other.table_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::scan;

    #[test]
    fn test_count_text() {
        let mut stats = DocumentStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_from_blocks() {
        let blocks = scan("# T\n- a\n- b\n\n1. c\n> d\n|x|\n|-|\ntext");
        let stats = DocumentStats::from_blocks(&blocks);

        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.bullet_count, 2);
        assert_eq!(stats.numbered_count, 1);
        assert_eq!(stats.list_item_count(), 3);
        assert_eq!(stats.quote_count, 1);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.block_count(), 7);
    }

    #[test]
    fn test_merge() {
        let mut first = DocumentStats {
            paragraph_count: 5,
            table_count: 2,
            ..Default::default()
        };
        let second = DocumentStats {
            paragraph_count: 3,
            quote_count: 4,
            ..Default::default()
        };

        first.merge(&second);

        assert_eq!(first.paragraph_count, 8);
        assert_eq!(first.table_count, 2);
        assert_eq!(first.quote_count, 4);
    }
}
