//! Document model types for compiled markdown content.
//!
//! This module defines the tree handed to a packer: blocks recognized in
//! the markdown bodies, the fixed formatting attached to each of them, and
//! the page-level geometry and header region of the exported document.

mod block;
mod document;
mod run;
mod style;
mod table;

pub use block::{Block, HeadingLevel, ListItem};
pub use document::{Document, HeaderRegion, Logo, Margins, Metadata, PageGeometry, Section};
pub use run::{Alignment, Run};
pub use style::{
    BlockFormat, Border, BorderStyle, ListMarker, ParagraphFormat, RunFont, Spacing, StyleDef,
    StyleRef, StyleSheet, StyledBlock, TableFormat,
};
pub use table::{Cell, Table, TableRow};
