//! Markdown compiler: lowers a markdown body into a flat block sequence.
//!
//! Only the narrow subset produced by the upstream generator is recognized:
//! `#` headings, `-`/`*` bullets, `N.` numbered items, `>` quotes, pipe
//! tables and `*`/`_` emphasis. Everything else becomes a paragraph.

mod inline;
mod scanner;
mod table;

pub use inline::parse_inline;
pub use scanner::{scan, BlockScanner};
pub use table::{is_table_line, parse_table, MIN_TABLE_LINES};
