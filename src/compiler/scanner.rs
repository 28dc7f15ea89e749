//! Line-oriented block scanner.

use std::sync::OnceLock;

use regex::Regex;

use super::parse_inline;
use super::table::{is_table_line, parse_table};
use crate::model::{Block, HeadingLevel, ListItem, Run};

fn heading_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#+\s+").expect("heading pattern is valid"))
}

fn bullet_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[-*]\s").expect("bullet pattern is valid"))
}

fn numbered_item() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.\s+(.+)$").expect("numbered pattern is valid")
    })
}

/// Bulleted items waiting for a blank line or the end of input.
#[derive(Debug, Default)]
struct ListBuffer {
    items: Vec<Vec<Run>>,
    level: u8,
}

impl ListBuffer {
    fn is_open(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Scanner state for one markdown body.
///
/// The table buffer is open while `table` is `Some`; the list buffer is open
/// while it holds items. Both can be open at once: a table may start while
/// bullets are still waiting for their blank line.
#[derive(Debug, Default)]
pub struct BlockScanner {
    blocks: Vec<Block>,
    table: Option<Vec<String>>,
    list: ListBuffer,
}

impl BlockScanner {
    /// Create a scanner with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line.
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();

        if is_table_line(line) {
            self.table.get_or_insert_with(Vec::new).push(line.to_string());
            return;
        }

        if let Some(lines) = self.table.take() {
            self.flush_table(&lines);
            if line.is_empty() {
                return;
            }
        }

        if line.is_empty() {
            self.flush_list();
            return;
        }

        if line.starts_with('#') {
            self.push_heading(line);
            return;
        }

        if let Some(marker) = bullet_prefix().find(line) {
            self.list.items.push(parse_inline(&line[marker.end()..]));
            return;
        }

        if let Some(caps) = numbered_item().captures(line) {
            let ordinal = caps[1].parse::<u32>().ok();
            let item = ListItem::numbered(parse_inline(&caps[2]), ordinal);
            self.blocks.push(Block::ListItem(item));
            return;
        }

        if let Some(quote) = line.strip_prefix('>') {
            self.blocks.push(Block::quote(parse_inline(quote.trim())));
            return;
        }

        if self.list.is_open() {
            log::debug!("Dropping line inside bulleted list: {:?}", line);
        } else {
            self.blocks.push(Block::paragraph(parse_inline(line)));
        }
    }

    /// Flush open buffers and return the blocks in recognition order.
    pub fn finish(mut self) -> Vec<Block> {
        if let Some(lines) = self.table.take() {
            self.flush_table(&lines);
        }
        self.flush_list();
        self.blocks
    }

    fn push_heading(&mut self, line: &str) {
        let depth = line.len() - line.trim_start_matches('#').len();
        // Without whitespace after the hashes the line is kept verbatim.
        let text = match heading_prefix().find(line) {
            Some(prefix) => &line[prefix.end()..],
            None => line,
        };
        self.blocks.push(Block::heading(
            HeadingLevel::from_depth(depth),
            parse_inline(text),
        ));
    }

    fn flush_table(&mut self, lines: &[String]) {
        match parse_table(lines) {
            Some(table) => self.blocks.push(Block::Table(table)),
            None => log::debug!("Discarding table fragment of {} line(s)", lines.len()),
        }
    }

    fn flush_list(&mut self) {
        if !self.list.is_open() {
            return;
        }
        let items = std::mem::take(&mut self.list.items);
        let count = items.len();
        log::debug!("Flushing {} bulleted list item(s)", count);

        for (index, runs) in items.into_iter().enumerate() {
            let item = ListItem::bullet(runs, self.list.level, index + 1 == count);
            self.blocks.push(Block::ListItem(item));
        }
    }
}

/// Scan a markdown body into blocks.
///
/// # Example
///
/// ```
/// use mdocx::compiler::scan;
/// use mdocx::Block;
///
/// let blocks = scan("# Title\n\nSome *text*.");
/// assert_eq!(blocks.len(), 2);
/// assert!(matches!(blocks[1], Block::Paragraph { .. }));
/// ```
pub fn scan(body: &str) -> Vec<Block> {
    let mut scanner = BlockScanner::new();
    for line in body.split('\n') {
        scanner.push_line(line);
    }
    scanner.finish()
}
