//! Cabinet geometry and construction audit engine.
//!
//! This umbrella crate re-exports the cabinet-* crates and adds the
//! end-to-end build: validate a [`CabinetSpec`], run the six dimensional
//! gates, generate every 3D part, check the layout closes, and summarize
//! the result as an audit report and a cut list.
//!
//! # Quick Start
//!
//! ```
//! use cabinet::prelude::*;
//!
//! let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
//!     .with_style(FaceFrameStyle::FaceFrame)
//!     .with_false_front(FalseFront::new(4.0))
//!     .with_drawers(vec![6.0, 8.0])
//!     .with_finished_ends(true, false);
//!
//! let build = build_cabinet(&spec).unwrap();
//! assert!(build.is_fabrication_ready());
//!
//! println!("{}", build.audit_report());
//! println!("{}", build.cut_list());
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Spec, standards, styles, parts and internal bounds
//! - [`gates`] - The six dimensional gates and their audit trail
//! - [`layout`] - Part placement, bounds clamping, miters and closure checks
//!
//! # Feature Flags
//!
//! - `serde` - Serialization for specs, gate results, parts and reports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cut_list;
mod engine;

// =============================================================================
// Re-exports
// =============================================================================

/// Spec, standards, styles, parts and internal bounds.
pub use cabinet_types as types;

/// The six dimensional gates.
pub use cabinet_gates as gates;

/// Part placement, constraints, miters and validation.
pub use cabinet_layout as layout;

pub use cut_list::{CutGroup, CutList, CutPiece};
pub use engine::{CabinetBuild, CabinetResult, build_cabinet, build_cabinets};

pub use cabinet_types::{
    AssemblyRules, CabinetCategory, CabinetSpec, DrawerHardware, FaceFrameStyle, FalseFront,
    InvalidSpec, Part, PartMap, SpecError, StandardKey, Standards, TOLERANCE,
};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for building cabinets.
///
/// ```
/// use cabinet::prelude::*;
/// ```
pub mod prelude {
    // Input
    pub use cabinet_types::{
        AssemblyRules, CabinetCategory, CabinetSpec, DrawerHardware, FaceFrameStyle, FalseFront,
        SideHeightConvention, StandardKey, Standards,
    };

    // Output
    pub use cabinet_gates::{GateResults, Severity};
    pub use cabinet_layout::ValidationResult;
    pub use cabinet_types::{Part, PartCategory, PartMap, PartType};

    // Build
    pub use crate::{CabinetBuild, CutList, build_cabinet, build_cabinets};
}

// =============================================================================
// Tests
// =============================================================================
