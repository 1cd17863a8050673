//! Gate 6: face-frame pieces.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cabinet_types::CabinetSpec;
use tracing::debug;

use crate::audit::{GateId, GateOutput, fmt_len};
use crate::box_gate::BoxGate;
use crate::opening::OpeningGate;

/// Stile, rail and mid-rail cut list for the face frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceFrameGate {
    /// Number of stiles.
    pub stile_count: usize,
    /// Stile length.
    pub stile_length: f64,
    /// Number of full-width rails.
    pub rail_count: usize,
    /// Rail length between the stiles.
    pub rail_length: f64,
    /// Number of mid rails between stacked faces.
    pub mid_rail_count: usize,
    /// Formula trail.
    pub audit: GateOutput,
}

/// Run Gate 6.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn face_frame_gate(
    spec: &CabinetSpec,
    box_dims: &BoxGate,
    opening: &OpeningGate,
) -> FaceFrameGate {
    let mut audit = GateOutput::new(GateId::FaceFrame);
    let style = spec.style_config();

    let stile_count: usize = if style.has_stiles { 2 } else { 0 };
    let stile_length = box_dims.box_height;
    audit.record("stile_count", stile_count.to_string(), stile_count as f64);
    audit.record(
        "stile_length",
        format!("box_height = {}", fmt_len(stile_length)),
        stile_length,
    );

    let rail_count: usize = if style.has_rails { 2 } else { 0 };
    let rail_length = spec.width - 2.0 * opening.stile_width;
    audit.record("rail_count", rail_count.to_string(), rail_count as f64);
    audit.record(
        "rail_length",
        format!(
            "width − 2 × stile_width = {} − 2 × {} = {}",
            fmt_len(spec.width),
            fmt_len(opening.stile_width),
            fmt_len(rail_length)
        ),
        rail_length,
    );

    let components = spec.component_count();
    let mid_rail_count = if style.has_mid_rails {
        components.saturating_sub(1)
    } else {
        0
    };
    let mid_formula = if style.has_mid_rails {
        format!("max(0, component_count − 1) = max(0, {components} − 1) = {mid_rail_count}")
    } else {
        format!("{} has no mid rails = 0", style.style.tag())
    };
    audit.record("mid_rail_count", mid_formula, mid_rail_count as f64);

    debug!(
        "Gate 6: {} stiles @ {}, {} rails @ {}, {} mid rails",
        stile_count, stile_length, rail_count, rail_length, mid_rail_count
    );

    FaceFrameGate {
        stile_count,
        stile_length,
        rail_count,
        rail_length,
        mid_rail_count,
        audit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_gate::box_gate;
    use crate::opening::opening_gate;
    use approx::assert_relative_eq;
    use cabinet_types::{CabinetCategory, FaceFrameStyle};

    fn run(spec: &CabinetSpec) -> FaceFrameGate {
        let b = box_gate(spec);
        let o = opening_gate(spec, &b);
        face_frame_gate(spec, &b, &o)
    }

    #[test]
    fn test_standard_frame() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0, 8.0, 10.0]);
        let gate = run(&spec);
        assert_eq!(gate.stile_count, 2);
        assert_relative_eq!(gate.stile_length, 30.25);
        assert_eq!(gate.rail_count, 2);
        assert_relative_eq!(gate.rail_length, 27.0);
        assert_eq!(gate.mid_rail_count, 2);
    }

    #[test]
    fn test_single_component_has_no_mid_rail() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0]);
        assert_eq!(run(&spec).mid_rail_count, 0);
    }

    #[test]
    fn test_frameless_and_full_overlay() {
        let frameless = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0, 6.0])
            .with_style(FaceFrameStyle::Frameless);
        let gate = run(&frameless);
        assert_eq!(gate.stile_count, 0);
        assert_eq!(gate.rail_count, 0);
        assert_relative_eq!(gate.rail_length, 30.0);

        let overlay = frameless.with_style(FaceFrameStyle::FullOverlay);
        let gate = run(&overlay);
        assert_eq!(gate.stile_count, 2);
        assert_eq!(gate.mid_rail_count, 0);
    }
}
