//! Attaches template formatting to compiled blocks.

use super::template::{
    quote_indent, table_border, BLOCK_AFTER, HEADING1_BEFORE, HEADING2_BEFORE, LINE_SPACING,
    LIST_CONTINUATION_AFTER, NUMBERING_REFERENCE, QUOTE_BEFORE, TABLE_HEADER_SHADING,
    TABLE_WIDTH_PERCENT,
};
use crate::model::{
    Alignment, Block, BlockFormat, HeadingLevel, ListItem, ListMarker, ParagraphFormat, Spacing,
    StyleRef, StyledBlock, Table, TableFormat,
};

/// Maps blocks to their template formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutMapper;

impl LayoutMapper {
    /// Create a new mapper.
    pub fn new() -> Self {
        Self
    }

    /// Attach formatting to a single block.
    pub fn map(&self, block: Block) -> StyledBlock {
        let format = self.format_for(&block);
        StyledBlock::new(block, format)
    }

    /// Attach formatting to each block, preserving order.
    pub fn map_all(&self, blocks: impl IntoIterator<Item = Block>) -> Vec<StyledBlock> {
        blocks.into_iter().map(|block| self.map(block)).collect()
    }

    /// Compute the format of a block.
    pub fn format_for(&self, block: &Block) -> BlockFormat {
        match block {
            Block::Heading { level, .. } => BlockFormat::Paragraph(heading_format(*level)),
            Block::Paragraph { .. } => BlockFormat::Paragraph(body_format(0, BLOCK_AFTER)),
            Block::ListItem(item) => BlockFormat::Paragraph(list_format(item)),
            Block::BlockQuote { .. } => BlockFormat::Paragraph(ParagraphFormat {
                indent_left: Some(quote_indent()),
                ..body_format(QUOTE_BEFORE, BLOCK_AFTER)
            }),
            Block::Table(table) => BlockFormat::Table(TableFormat {
                width_percent: TABLE_WIDTH_PERCENT,
                border: table_border(),
                header_shading: TABLE_HEADER_SHADING.to_string(),
                column_alignments: column_alignments(table),
            }),
        }
    }
}

/// Alignment of every column any row reaches, header included.
fn column_alignments(table: &Table) -> Vec<Alignment> {
    let widest_row = std::iter::once(&table.header)
        .chain(&table.rows)
        .map(|row| row.cells.len())
        .max()
        .unwrap_or(0);
    let columns = widest_row.max(table.alignments.len());
    (0..columns).map(|column| table.alignment_at(column)).collect()
}

fn spacing(before: u32, after: u32) -> Spacing {
    Spacing {
        before,
        after,
        line: LINE_SPACING,
    }
}

fn body_format(before: u32, after: u32) -> ParagraphFormat {
    ParagraphFormat {
        style: StyleRef::Normal,
        alignment: Alignment::Left,
        spacing: spacing(before, after),
        indent_left: None,
        list: None,
    }
}

/// Format of a heading; section titles use the level-1 format too.
pub fn heading_format(level: HeadingLevel) -> ParagraphFormat {
    let (style, before) = match level {
        HeadingLevel::H1 => (StyleRef::Heading1, HEADING1_BEFORE),
        HeadingLevel::H2 => (StyleRef::Heading2, HEADING2_BEFORE),
    };
    ParagraphFormat {
        style,
        ..body_format(before, BLOCK_AFTER)
    }
}

fn list_format(item: &ListItem) -> ParagraphFormat {
    if item.ordered {
        return ParagraphFormat {
            list: Some(ListMarker::Numbered {
                reference: NUMBERING_REFERENCE.to_string(),
                level: 0,
            }),
            ..body_format(0, BLOCK_AFTER)
        };
    }

    let after = if item.ends_group {
        BLOCK_AFTER
    } else {
        LIST_CONTINUATION_AFTER
    };
    ParagraphFormat {
        list: Some(ListMarker::Bullet { level: item.level }),
        ..body_format(0, after)
    }
}
