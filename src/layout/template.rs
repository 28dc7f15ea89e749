//! Fixed values of the target visual template.
//!
//! These values must match the office template exactly; they are not
//! configuration.

use super::units::{cm_to_twips, inches_to_twips, points_to_half_points};
use crate::model::{
    Alignment, Border, BorderStyle, Margins, PageGeometry, RunFont, Spacing, StyleDef, StyleSheet,
};

/// Body text font family.
pub const BODY_FONT: &str = "Times New Roman";

/// Heading font family.
pub const HEADING_FONT: &str = "Arial";

/// Text color of every style.
pub const TEXT_COLOR: &str = "000000";

/// Line spacing of 1.15 lines, in 240ths.
pub const LINE_SPACING: u32 = 276;

/// Space before a level-1 heading.
pub const HEADING1_BEFORE: u32 = 400;

/// Space before a level-2 heading.
pub const HEADING2_BEFORE: u32 = 300;

/// Space after headings, paragraphs, quotes, numbered items and the last bullet of a group.
pub const BLOCK_AFTER: u32 = 200;

/// Space after a bullet that is followed by another of its group.
pub const LIST_CONTINUATION_AFTER: u32 = 100;

/// Space before a block quote.
pub const QUOTE_BEFORE: u32 = 200;

/// Left indent of block quotes in inches.
pub const QUOTE_INDENT_INCHES: f64 = 0.5;

/// Numbering definition used by numbered items.
pub const NUMBERING_REFERENCE: &str = "default-numbering";

/// Header cell background fill.
pub const TABLE_HEADER_SHADING: &str = "F2F2F2";

/// Table width as a percentage of the text column.
pub const TABLE_WIDTH_PERCENT: u8 = 100;

/// Logo width in pixels.
pub const LOGO_WIDTH: u32 = 228;

/// Logo height in pixels.
pub const LOGO_HEIGHT: u32 = 91;

/// Left indent of the logo paragraph in centimeters.
pub const LOGO_INDENT_CM: f64 = -3.25;

/// Page margins in centimeters: top, bottom, left, right.
pub const MARGINS_CM: (f64, f64, f64, f64) = (2.77, 2.49, 3.7, 5.5);

fn font(family: &str, points: u32, bold: bool) -> RunFont {
    RunFont {
        family: family.to_string(),
        size: points_to_half_points(points),
        bold,
        color: TEXT_COLOR.to_string(),
    }
}

fn heading_style(points: u32, before: u32) -> StyleDef {
    StyleDef {
        font: font(HEADING_FONT, points, true),
        spacing: Spacing {
            before,
            after: BLOCK_AFTER,
            line: LINE_SPACING,
        },
        alignment: Alignment::Left,
    }
}

/// The template style sheet.
pub fn style_sheet() -> StyleSheet {
    StyleSheet {
        default: StyleDef {
            font: font(BODY_FONT, 12, false),
            spacing: Spacing {
                before: 0,
                after: 0,
                line: LINE_SPACING,
            },
            alignment: Alignment::Left,
        },
        heading1: heading_style(20, HEADING1_BEFORE),
        heading2: heading_style(16, HEADING2_BEFORE),
        heading3: heading_style(14, HEADING2_BEFORE),
    }
}

/// The template page geometry.
pub fn page_geometry() -> PageGeometry {
    let (top, bottom, left, right) = MARGINS_CM;
    PageGeometry {
        margins: Margins {
            top: cm_to_twips(top),
            bottom: cm_to_twips(bottom),
            left: cm_to_twips(left),
            right: cm_to_twips(right),
        },
    }
}

/// Left indent of block quotes in twips.
pub fn quote_indent() -> i32 {
    inches_to_twips(QUOTE_INDENT_INCHES)
}

/// Left indent of the logo paragraph in twips.
pub fn logo_indent() -> i32 {
    cm_to_twips(LOGO_INDENT_CM)
}

/// Border used on every table edge and inner line.
pub fn table_border() -> Border {
    Border {
        style: BorderStyle::Single,
        size: 1,
        color: TEXT_COLOR.to_string(),
    }
}
