//! Dimensional gate pipeline for cabinet construction.
//!
//! Six ordered gates turn a [`CabinetSpec`] into carcass, opening, layout,
//! drawer-box, stretcher and face-frame dimensions. Every gate returns a
//! typed result struct for downstream logic plus a [`GateOutput`] holding
//! the named scalars and the formula text that produced them.
//!
//! | Gate | Function | Result |
//! |------|----------|--------|
//! | 1 | [`box_gate`] | [`BoxGate`] |
//! | 2 | [`opening_gate`] | [`OpeningGate`] |
//! | 3 | [`component_gate`] | [`ComponentGate`] |
//! | 4 | [`drawer_gate`] | [`DrawerGate`] |
//! | 5 | [`stretcher_gate`] | [`StretcherGate`] |
//! | 6 | [`face_frame_gate`] | [`FaceFrameGate`] |
//!
//! Layout and hardware problems are reported as [`GateIssue`]s, never as
//! errors: the pipeline always completes.
//!
//! # Example
//!
//! ```
//! use cabinet_gates::run_gates;
//! use cabinet_types::{CabinetCategory, CabinetSpec};
//!
//! let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
//!     .with_drawers(vec![6.0]);
//! let gates = run_gates(&spec);
//!
//! assert_eq!(gates.box_dims.box_height, 30.25);
//! assert_eq!(gates.opening.opening_width, 27.0);
//! assert_eq!(gates.stretchers.count, 2);
//! ```
//!
//! [`CabinetSpec`]: cabinet_types::CabinetSpec

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Formula text uses the same names as the quantities.
#![allow(clippy::similar_names)]

mod audit;
mod box_gate;
mod components;
mod drawer_boxes;
mod face_frame;
mod opening;
mod pipeline;
mod stretchers;

pub use audit::{
    CalculationStep, GateId, GateIssue, GateOutput, IssueKind, Severity, fmt_len,
};
pub use box_gate::{BoxGate, box_gate};
pub use components::{
    ComponentGate, ComponentKind, ComponentSlot, LayoutStatus, component_gate,
    stacked_components,
};
pub use drawer_boxes::{
    DrawerBox, DrawerGate, SHOP_DEPTH_ALLOWANCE, SLIDE_LENGTH_STEP, drawer_gate, shop_round_down,
};
pub use face_frame::{FaceFrameGate, face_frame_gate};
pub use opening::{OpeningGate, opening_gate};
pub use pipeline::{GateResults, run_gates};
pub use stretchers::{StretcherGate, SupportStretcher, TOP_STRETCHERS, stretcher_gate};
