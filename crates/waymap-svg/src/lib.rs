#![forbid(unsafe_code)]

//! SVG path generation and document export for roadmap diagrams.
//!
//! Two layers:
//!
//! - [`path`] - pure builders turning point pairs into SVG path data
//!   strings, one per curve family, plus the [`path::PathStyle`] /
//!   [`path::PathAttributes`] attribute bag.
//! - [`export`] - [`export::SvgExporter`], which runs the layout pass over
//!   a persona and assembles a complete standalone `<svg>` document.

pub mod export;
pub mod path;

pub use export::SvgExporter;
pub use path::{
    LineCap, PathAttributes, PathStyle, curved_path, elbow_path, path_attributes, quadratic_path,
    straight_path, vertical_curved_path,
};
pub use waymap_layout::Point;
