#![forbid(unsafe_code)]

//! Waymap public facade crate.
//!
//! Re-exports the stable surface of the workspace crates and offers a
//! lightweight prelude for day-to-day usage:
//!
//! ```
//! use waymap::prelude::*;
//!
//! let persona = Persona {
//!     id: "for-myself".into(),
//!     title: "For Myself".into(),
//!     subtitle: String::new(),
//!     icon: String::new(),
//!     sections: vec![],
//! };
//! let config = LayoutConfig::DEFAULT.with_spine(true);
//! let svg = SvgExporter::default().export(&persona, &config);
//! assert!(svg.starts_with("<svg"));
//! ```

use std::fmt;

// --- Model re-exports ------------------------------------------------------

pub use waymap_model::{
    DetailNode, MainTopic, ModelError, NodeIndex, NodeRef, Persona, Resource, ResourceBuckets,
    ResourceKind, Section, SelectionState, Side,
};

// --- Layout re-exports -----------------------------------------------------

pub use waymap_layout::{
    Connection, ConnectionKind, LayoutConfig, NodeKind, NodePosition, NodePositions, Point,
    SectionLabel, calculate_node_positions, canvas_height, canvas_width, section_labels,
};

// --- SVG re-exports --------------------------------------------------------

pub use waymap_svg::{
    LineCap, PathAttributes, PathStyle, SvgExporter, curved_path, elbow_path, path_attributes,
    quadratic_path, straight_path, vertical_curved_path,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for waymap applications.
#[derive(Debug)]
pub enum Error {
    /// I/O failure reading or writing persona/SVG files.
    Io(std::io::Error),
    /// Invalid persona data.
    Model(ModelError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Model(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ModelError> for Error {
    fn from(err: ModelError) -> Self {
        Self::Model(err)
    }
}

/// Common imports for building and rendering roadmaps.
pub mod prelude {
    pub use crate::Error;
    pub use waymap_layout::{LayoutConfig, NodePositions, Point, calculate_node_positions};
    pub use waymap_model::{
        DetailNode, MainTopic, Persona, Resource, ResourceBuckets, ResourceKind, Section,
        SelectionState, Side,
    };
    pub use waymap_svg::{PathStyle, SvgExporter};
}
