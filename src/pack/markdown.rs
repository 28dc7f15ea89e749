//! Markdown rendering of an assembled document, used for previews.
//!
//! The output scans back to the same blocks. Emphasis is written with
//! underscores, and runs the line would lose get a no-op delimiter pair.

use super::DocumentPacker;
use crate::error::Result;
use crate::model::{Alignment, Block, Document, HeadingLevel, ListItem, Run, Table, TableRow};

/// Render blocks back to the markdown subset the compiler reads.
pub fn blocks_to_markdown<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> String {
    let mut output = String::new();
    for block in blocks {
        render_block(&mut output, block);
    }
    output.trim().to_string()
}

fn render_block(output: &mut String, block: &Block) {
    match block {
        Block::Heading { level, runs } => {
            let prefix = match level {
                HeadingLevel::H1 => "#",
                HeadingLevel::H2 => "##",
            };
            output.push_str(prefix);
            output.push(' ');
            render_runs(output, runs);
            output.push_str("\n\n");
        }
        Block::Paragraph { runs } => {
            render_runs(output, runs);
            output.push_str("\n\n");
        }
        Block::ListItem(item) => render_list_item(output, item),
        Block::BlockQuote { runs } => {
            output.push_str("> ");
            render_runs(output, runs);
            output.push_str("\n\n");
        }
        Block::Table(table) => render_table(output, table),
    }
}

fn render_list_item(output: &mut String, item: &ListItem) {
    output.push_str(&"  ".repeat(item.level as usize));
    if item.ordered {
        match item.ordinal {
            Some(ordinal) => output.push_str(&format!("{}. ", ordinal)),
            // Digits past u32::MAX scan back to an item without an ordinal.
            None => output.push_str(&format!("{}. ", u64::from(u32::MAX) + 1)),
        }
    } else {
        output.push_str("- ");
    }
    render_runs(output, &item.runs);
    output.push('\n');
    if item.ends_group {
        output.push('\n');
    }
}

/// Bold toggle.
const BOLD: &str = "__";
/// Italic toggle.
const ITALIC: &str = "_";
/// Bold toggle and untoggle with nothing between: changes no style, but ends a run.
const NO_OP: &str = "____";

/// Delimiters that move the inline parser from one style to the next.
///
/// Underscores are used because no line marker starts with one. A run of
/// `n` delimiters toggles bold `n / 2` times and italic `n % 2` times.
fn toggles(from: (bool, bool), to: (bool, bool)) -> &'static str {
    match (from.0 != to.0, from.1 != to.1) {
        (false, false) => "",
        (true, false) => BOLD,
        (false, true) => ITALIC,
        (true, true) => "___",
    }
}

/// Whether plain text at the start of a line would be trimmed or taken as a block marker.
fn needs_leading_guard(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => true,
        Some('#' | '>' | '|') => true,
        Some('-' | '*') => chars.next().is_some_and(char::is_whitespace),
        Some(c) if c.is_ascii_digit() => {
            let rest = text.trim_start_matches(|c: char| c.is_ascii_digit());
            rest.strip_prefix('.').is_some_and(|rest| rest.starts_with(char::is_whitespace))
        }
        _ => false,
    }
}

fn render_runs(output: &mut String, runs: &[Run]) {
    if runs.is_empty() {
        output.push_str(NO_OP);
        return;
    }

    let mut style = (false, false);
    for (index, run) in runs.iter().enumerate() {
        let next = (run.bold, run.italic);
        let delimiters = toggles(style, next);
        if delimiters.is_empty() && (index > 0 || needs_leading_guard(&run.text)) {
            output.push_str(NO_OP);
        }
        output.push_str(delimiters);
        output.push_str(&run.text);
        style = next;
    }

    let closing = toggles(style, (false, false));
    let trailing_space = runs.last().is_some_and(|run| run.text.ends_with(char::is_whitespace));
    if closing.is_empty() && trailing_space {
        output.push_str(NO_OP);
    }
    output.push_str(closing);
}

fn render_row(output: &mut String, row: &TableRow) {
    output.push('|');
    for cell in &row.cells {
        output.push(' ');
        render_runs(output, &cell.runs);
        output.push_str(" |");
    }
    output.push('\n');
}

fn render_table(output: &mut String, table: &Table) {
    render_row(output, &table.header);

    output.push('|');
    for alignment in &table.alignments {
        let marker = match alignment {
            Alignment::Left => " --- |",
            Alignment::Center => " :---: |",
            Alignment::Right => " ---: |",
        };
        output.push_str(marker);
    }
    output.push('\n');

    for row in &table.rows {
        render_row(output, row);
    }
    output.push('\n');
}

/// Packs a Markdown preview of the document body.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownPacker;

impl MarkdownPacker {
    /// Create a new markdown packer.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPacker for MarkdownPacker {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extension(&self) -> &str {
        "md"
    }

    fn mime_type(&self) -> &str {
        "text/markdown"
    }

    fn pack(&self, doc: &Document) -> Result<Vec<u8>> {
        Ok(blocks_to_markdown(doc.blocks()).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::scan;

    #[test]
    fn test_render_headings_and_emphasis() {
        let blocks = scan("# Title\n### Deep\nSome **bold** and *italic*.");
        assert_eq!(
            blocks_to_markdown(&blocks),
            "# Title\n\n## Deep\n\nSome __bold__ and _italic_."
        );
    }

    #[test]
    fn test_render_lists() {
        let blocks = scan("- a\n- b\n\n3. c");
        assert_eq!(blocks_to_markdown(&blocks), "- a\n- b\n\n3. c");
    }

    #[test]
    fn test_render_table() {
        let blocks = scan("|H1|H2|\n|:-:|--:|\n|x|y|");
        assert_eq!(
            blocks_to_markdown(&blocks),
            "| H1 | H2 |\n| :---: | ---: |\n| x | y |"
        );
    }

    #[test]
    fn test_render_empty_runs() {
        let blocks = scan("# **\n- a\n- *\n- b");
        assert_eq!(blocks_to_markdown(&blocks), "# ____\n\n- a\n- ____\n- b");
    }

    #[test]
    fn test_render_guards_line_edges() {
        let blocks = vec![
            Block::paragraph(vec![Run::plain("# not a heading")]),
            Block::paragraph(vec![Run::plain("1. not an item")]),
            Block::paragraph(vec![Run::bold("x"), Run::plain("tail ")]),
            Block::paragraph(vec![Run::plain("a"), Run::plain("b")]),
        ];
        assert_eq!(
            blocks_to_markdown(&blocks),
            "____# not a heading\n\n____1. not an item\n\n__x__tail ____\n\na____b"
        );
    }

    #[test]
    fn test_rendered_markdown_scans_to_same_blocks() {
        let bodies = [
            "# A\n\nText *i* **b**\n\n- one\n- two\n\n> quote\n\n|a|b|\n|--|:-:|\n|1|2|",
            "_ x_",
            "# **",
            "- a\n- *\n- b",
            "***both*** then *i **bi** i* done",
            "****# hash\n\n**** lead\n\ntrail **** \n\na****b",
            "-  wide bullet\n\n> *\n\n12. __ x__\n99999999999. overflow",
            "|**|_ c_|\n|-|-|\n|x ****|y|",
        ];

        for body in bodies {
            let blocks = scan(body);
            let rendered = blocks_to_markdown(&blocks);
            assert_eq!(scan(&rendered), blocks, "body {:?} rendered as {:?}", body, rendered);
        }
    }
}
