//! The six gates run in order over one spec.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cabinet_types::CabinetSpec;
use tracing::info;

use crate::audit::{GateIssue, GateOutput};
use crate::box_gate::{BoxGate, box_gate};
use crate::components::{ComponentGate, component_gate};
use crate::drawer_boxes::{DrawerGate, drawer_gate};
use crate::face_frame::{FaceFrameGate, face_frame_gate};
use crate::opening::{OpeningGate, opening_gate};
use crate::stretchers::{StretcherGate, stretcher_gate};

/// Outputs of all six gates for one cabinet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GateResults {
    /// Gate 1.
    pub box_dims: BoxGate,
    /// Gate 2.
    pub opening: OpeningGate,
    /// Gate 3.
    pub components: ComponentGate,
    /// Gate 4.
    pub drawers: DrawerGate,
    /// Gate 5.
    pub stretchers: StretcherGate,
    /// Gate 6.
    pub face_frame: FaceFrameGate,
}

impl GateResults {
    /// Run every gate in numeric order.
    ///
    /// The cabinet spec is assumed valid; see [`CabinetSpec::validate`].
    #[must_use]
    pub fn run(spec: &CabinetSpec) -> Self {
        info!(
            "Running gates for {} cabinet {} x {} x {}",
            spec.category.tag(),
            spec.width,
            spec.height,
            spec.depth
        );

        let box_dims = box_gate(spec);
        let opening = opening_gate(spec, &box_dims);
        let components = component_gate(spec, &opening);
        let drawers = drawer_gate(spec, &box_dims, &opening);
        let stretchers = stretcher_gate(spec);
        let face_frame = face_frame_gate(spec, &box_dims, &opening);

        let results = Self {
            box_dims,
            opening,
            components,
            drawers,
            stretchers,
            face_frame,
        };

        info!(
            "Gates complete: {} issues ({})",
            results.issues().count(),
            if results.has_errors() {
                "has errors"
            } else {
                "no errors"
            }
        );

        results
    }

    /// Audit outputs in gate order.
    #[must_use]
    pub fn outputs(&self) -> [&GateOutput; 6] {
        [
            &self.box_dims.audit,
            &self.opening.audit,
            &self.components.audit,
            &self.drawers.audit,
            &self.stretchers.audit,
            &self.face_frame.audit,
        ]
    }

    /// Every issue raised by any gate, in gate order.
    pub fn issues(&self) -> impl Iterator<Item = &GateIssue> {
        self.outputs().into_iter().flat_map(GateOutput::issues)
    }

    /// Whether any gate reported an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.outputs().iter().any(|o| o.has_errors())
    }
}

/// Run the gate pipeline.
#[must_use]
pub fn run_gates(spec: &CabinetSpec) -> GateResults {
    GateResults::run(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::GateId;
    use cabinet_types::CabinetCategory;

    #[test]
    fn test_outputs_in_gate_order() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0]);
        let results = run_gates(&spec);
        let ids: Vec<_> = results.outputs().iter().map(|o| o.gate()).collect();
        assert_eq!(
            ids,
            vec![
                GateId::Box,
                GateId::Opening,
                GateId::Components,
                GateId::DrawerBoxes,
                GateId::Stretchers,
                GateId::FaceFrame,
            ]
        );
        assert!(!results.has_errors());
        assert_eq!(results.issues().count(), 0);
    }

    #[test]
    fn test_deterministic() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0, 8.0]);
        assert_eq!(run_gates(&spec), run_gates(&spec));
    }
}
