//! Layout and style mapping.
//!
//! Every page margin and indent goes through [`cm_to_twips`]; the template
//! values live in [`template`].

mod mapper;
pub mod template;
mod units;

pub use mapper::{heading_format, LayoutMapper};
pub use units::{cm_to_twips, inches_to_twips, points_to_half_points, TWIPS_PER_CM};
