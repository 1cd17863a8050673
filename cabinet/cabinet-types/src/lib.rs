//! Core cabinet types.
//!
//! This crate provides the foundational types shared by the cabinet
//! geometry crates:
//!
//! - [`CabinetSpec`] - The normalized input for one cabinet
//! - [`Standards`] - Named construction constants with fallback defaults
//! - [`StyleConfig`] - A face-frame style resolved into placement settings
//! - [`Part`] - One physical piece with position, size and shop notes
//! - [`InternalBounds`] - The region Internal-category parts must stay inside
//!
//! # Units
//!
//! All lengths are `f64` inches. Closure checks use the fixed
//! [`TOLERANCE`] of one thousandth of an inch.
//!
//! # Coordinate System
//!
//! The origin is the front-bottom-left corner of the cabinet box:
//! - X: width (left to right)
//! - Y: height (bottom to top); the toe kick occupies negative Y
//! - Z: depth (front to back)
//!
//! A part's position is its front-bottom-left corner.
//!
//! # Example
//!
//! ```
//! use cabinet_types::{CabinetCategory, CabinetSpec, FaceFrameStyle};
//!
//! let spec = CabinetSpec::new(CabinetCategory::SinkBase, 36.0, 34.75, 24.0)
//!     .with_style(FaceFrameStyle::FullOverlay);
//!
//! assert!(spec.category.is_sink_base());
//! assert!(spec.style_config().has_stiles);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod error;
mod part;
mod spec;
mod standards;
mod style;

pub use bounds::{Edge, InternalBounds};
pub use error::{InvalidSpec, SpecError, StandardsError};
pub use part::{
    FaceUp, GrainDirection, MiterCut, Orientation, Part, PartCategory, PartMap, PartType,
    Territory, YRange,
};
pub use spec::{
    AssemblyRules, CabinetCategory, CabinetSpec, DrawerHardware, FalseFront, FinishedEnds,
    SideHeightConvention,
};
pub use standards::{StandardKey, Standards};
pub use style::{FacePosition, FaceFrameStyle, FaceSpan, StyleConfig};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

/// Absolute tolerance for every closure and containment check, in inches.
pub const TOLERANCE: f64 = 0.001;

/// Whether two lengths agree within [`TOLERANCE`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}
