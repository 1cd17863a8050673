//! 3D part placement for cabinets.
//!
//! Takes a [`CabinetSpec`] and its [`GateResults`] and produces a named map
//! of axis-aligned parts in the cabinet frame: X left to right, Y up from
//! the top of the toe kick, Z from the front of the face frame toward the
//! wall. On top of placement this crate provides:
//!
//! - internal-bounds checking and clamping ([`check_bounds`], [`clamp_to_bounds`])
//! - 45 degree miter joints between overlapping parts ([`compute_miter`])
//! - closure validation of a finished layout ([`validate_layout`])
//!
//! # Example
//!
//! ```
//! use cabinet_gates::run_gates;
//! use cabinet_layout::{generate_parts, validate_layout};
//! use cabinet_types::{CabinetCategory, CabinetSpec};
//!
//! let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
//!     .with_drawers(vec![6.0]);
//! let gates = run_gates(&spec);
//! let parts = generate_parts(&spec, &gates);
//!
//! assert!(parts.contains_key("drawer_1_box_bottom"));
//! assert!(validate_layout(&spec, &gates, &parts).is_valid());
//! ```
//!
//! [`CabinetSpec`]: cabinet_types::CabinetSpec
//! [`GateResults`]: cabinet_gates::GateResults

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::similar_names)]

mod constraint;
mod generate;
mod miter;
mod rules;
mod validation;

pub use constraint::{
    BoundViolation, PartOverlap, check_bounds, clamp_to_bounds, find_overlap, footprints_overlap,
    internal_bounds,
};
pub use generate::{
    DRAWER_BOTTOM_THICKNESS, DRAWER_DADO_DEPTH, DRAWER_DADO_OFFSET, DRAWER_STOCK_THICKNESS,
    generate_parts, material,
};
pub use miter::{Corner, MITER_ANGLE, MiterJoint, apply_miter, compute_miter};
pub use rules::ResolvedRules;
pub use validation::{CheckResult, ValidationResult, validate_layout};
