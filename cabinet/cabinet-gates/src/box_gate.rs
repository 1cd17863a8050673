//! Gate 1: carcass box dimensions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cabinet_types::{CabinetSpec, SideHeightConvention, StandardKey};
use tracing::debug;

use crate::audit::{GateId, GateOutput, fmt_len};

/// Carcass dimensions derived from the raw spec.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxGate {
    /// Height above the toe kick.
    pub box_height: f64,
    /// Clear width between the sides.
    pub inside_width: f64,
    /// Clear depth between the face frame and the back.
    pub inside_depth: f64,
    /// Carcass depth behind the face frame.
    pub box_depth: f64,
    /// Face-frame depth in front of the carcass (0 without a frame).
    pub frame_thickness: f64,
    /// Stretcher stock thickness used for the side deduction.
    pub stretcher_thickness: f64,
    /// Whether the cabinet is a sink base.
    pub is_sink_base: bool,
    /// Side height when sides run the full box height.
    pub side_height_full: f64,
    /// Side height when sides are sandwiched under the stretchers.
    pub side_height_sandwiched: f64,
    /// Side height under the selected `SideHeightConvention`.
    pub side_height: f64,
    /// Formula trail.
    pub audit: GateOutput,
}

/// Run Gate 1.
#[must_use]
pub fn box_gate(spec: &CabinetSpec) -> BoxGate {
    let mut audit = GateOutput::new(GateId::Box);
    let style = spec.style_config();
    let stretcher_thickness = spec.standards.get(StandardKey::StretcherThickness);
    let is_sink_base = spec.category.is_sink_base();

    let box_height = audit.record(
        "box_height",
        format!(
            "height − toe_kick_height = {} − {} = {}",
            fmt_len(spec.height),
            fmt_len(spec.toe_kick_height),
            fmt_len(spec.box_height())
        ),
        spec.box_height(),
    );

    let inside_width = spec.width - 2.0 * spec.side_thickness;
    audit.record(
        "inside_width",
        format!(
            "width − 2 × side_thickness = {} − 2 × {} = {}",
            fmt_len(spec.width),
            fmt_len(spec.side_thickness),
            fmt_len(inside_width)
        ),
        inside_width,
    );

    let frame_thickness = style.frame_thickness(spec.face_frame_thickness);
    let frame_formula = if style.has_stiles {
        format!("face_frame_thickness = {}", fmt_len(frame_thickness))
    } else {
        format!("no face frame ({}) = 0", style.style.tag())
    };
    audit.record("frame_thickness", frame_formula, frame_thickness);

    let inside_depth = spec.depth - spec.back_thickness - frame_thickness;
    audit.record(
        "inside_depth",
        format!(
            "depth − back_thickness − face_frame_thickness = {} − {} − {} = {}",
            fmt_len(spec.depth),
            fmt_len(spec.back_thickness),
            fmt_len(frame_thickness),
            fmt_len(inside_depth)
        ),
        inside_depth,
    );

    let box_depth = spec.depth - frame_thickness;
    audit.record(
        "box_depth",
        format!(
            "depth − face_frame_thickness = {} − {} = {}",
            fmt_len(spec.depth),
            fmt_len(frame_thickness),
            fmt_len(box_depth)
        ),
        box_depth,
    );

    let side_height_full = audit.record(
        "side_height_full",
        format!("box_height = {}", fmt_len(box_height)),
        box_height,
    );

    let side_height_sandwiched = if is_sink_base {
        audit.record(
            "side_height_sandwiched",
            format!(
                "box_height (sink base, no stretcher deduction) = {}",
                fmt_len(box_height)
            ),
            box_height,
        )
    } else {
        let value = box_height - stretcher_thickness;
        audit.record(
            "side_height_sandwiched",
            format!(
                "box_height − stretcher_thickness = {} − {} = {}",
                fmt_len(box_height),
                fmt_len(stretcher_thickness),
                fmt_len(value)
            ),
            value,
        )
    };

    let (side_height, convention) = match spec.side_height_convention {
        SideHeightConvention::FullHeight => (side_height_full, "full height"),
        SideHeightConvention::Sandwiched => (side_height_sandwiched, "sandwiched"),
    };
    audit.record(
        "side_height",
        format!("{convention} convention = {}", fmt_len(side_height)),
        side_height,
    );

    debug!(
        "Gate 1: box_height={}, inside_width={}, inside_depth={}, side_height={} (sink base: {})",
        box_height, inside_width, inside_depth, side_height, is_sink_base
    );

    BoxGate {
        box_height,
        inside_width,
        inside_depth,
        box_depth,
        frame_thickness,
        stretcher_thickness,
        is_sink_base,
        side_height_full,
        side_height_sandwiched,
        side_height,
        audit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cabinet_types::{CabinetCategory, FaceFrameStyle};

    fn spec(category: CabinetCategory) -> CabinetSpec {
        CabinetSpec::new(category, 30.0, 34.75, 24.0).with_drawers(vec![6.0])
    }

    #[test]
    fn test_standard_base() {
        let gate = box_gate(&spec(CabinetCategory::Base));
        assert_relative_eq!(gate.box_height, 30.25);
        assert_relative_eq!(gate.inside_width, 28.5);
        assert_relative_eq!(gate.inside_depth, 22.5);
        assert_relative_eq!(gate.box_depth, 23.25);
        assert_relative_eq!(gate.side_height, 29.5);
        assert!(!gate.is_sink_base);
    }

    #[test]
    fn test_sink_base_sides_run_full_height() {
        let gate = box_gate(&spec(CabinetCategory::SinkBase));
        assert!(gate.is_sink_base);
        assert_relative_eq!(gate.side_height, gate.box_height);
        assert_relative_eq!(gate.side_height_sandwiched, 30.25);
    }

    #[test]
    fn test_both_conventions_exposed() {
        let s = spec(CabinetCategory::Base)
            .with_side_height_convention(SideHeightConvention::FullHeight);
        let gate = box_gate(&s);
        assert_relative_eq!(gate.side_height, 30.25);
        assert_relative_eq!(gate.side_height_sandwiched, 29.5);
        assert_eq!(gate.audit.value("side_height_full"), Some(30.25));
        assert_eq!(gate.audit.value("side_height_sandwiched"), Some(29.5));
    }

    #[test]
    fn test_frameless_has_no_frame_depth() {
        let s = spec(CabinetCategory::Base).with_style(FaceFrameStyle::Frameless);
        let gate = box_gate(&s);
        assert_relative_eq!(gate.frame_thickness, 0.0);
        assert_relative_eq!(gate.inside_depth, 23.25);
    }

    #[test]
    fn test_formula_text() {
        let gate = box_gate(&spec(CabinetCategory::Base));
        let step = &gate.audit.steps()[0];
        assert_eq!(step.name, "box_height");
        assert_eq!(step.formula, "height − toe_kick_height = 34.75 − 4.5 = 30.25");
        assert_eq!(
            gate.audit.steps()[1].formula,
            "width − 2 × side_thickness = 30 − 2 × 0.75 = 28.5"
        );
    }
}
