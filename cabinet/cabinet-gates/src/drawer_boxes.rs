//! Gate 4: drawer box clearances.
//!
//! Box heights are shop-rounded DOWN to the nearest half inch. A box that is
//! slightly short runs fine on its slides; one that is too tall does not fit.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cabinet_types::{CabinetSpec, TOLERANCE};
use tracing::{debug, warn};

use crate::audit::{GateId, GateOutput, IssueKind, Severity, fmt_len};
use crate::box_gate::BoxGate;
use crate::opening::OpeningGate;

/// Extra length added to the slide length for the shop box depth.
pub const SHOP_DEPTH_ALLOWANCE: f64 = 0.25;

/// Standard slide lengths come in this increment.
pub const SLIDE_LENGTH_STEP: f64 = 3.0;

/// Round down to the nearest half unit.
///
/// ```
/// use cabinet_gates::shop_round_down;
///
/// assert_eq!(shop_round_down(5.1875), 5.0);
/// assert_eq!(shop_round_down(5.5), 5.5);
/// assert_eq!(shop_round_down(5.4999), 5.0);
/// ```
#[must_use]
pub fn shop_round_down(value: f64) -> f64 {
    (value * 2.0).floor() / 2.0
}

/// Sizing of one drawer box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawerBox {
    /// Drawer index, top to bottom.
    pub index: usize,
    /// Face height the box hangs behind.
    pub face_height: f64,
    /// Outside box width.
    pub box_width: f64,
    /// Theoretical box height.
    pub box_height_exact: f64,
    /// Box height to cut.
    pub box_height_shop: f64,
    /// Box depth (slide length).
    pub box_depth: f64,
    /// Box depth to cut.
    pub box_depth_shop: f64,
}

/// Drawer box sizes and the cavity depth check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawerGate {
    /// One entry per drawer, top to bottom.
    pub boxes: Vec<DrawerBox>,
    /// Clear width the slides mount into.
    pub clear_width: f64,
    /// Depth available behind the face frame.
    pub cavity_depth: f64,
    /// Depth the slide needs.
    pub required_depth: f64,
    /// Whether the cavity is deep enough (always true without drawers).
    pub depth_ok: bool,
    /// Formula trail.
    pub audit: GateOutput,
}

/// Longest standard slide whose requirement fits `cavity_depth`.
fn suggest_slide(cavity_depth: f64, cavity_clearance: f64) -> Option<f64> {
    let usable = cavity_depth - cavity_clearance;
    let slide = (usable / SLIDE_LENGTH_STEP).floor() * SLIDE_LENGTH_STEP;
    (slide >= SLIDE_LENGTH_STEP).then_some(slide)
}

/// Run Gate 4.
#[must_use]
pub fn drawer_gate(spec: &CabinetSpec, box_dims: &BoxGate, opening: &OpeningGate) -> DrawerGate {
    let mut audit = GateOutput::new(GateId::DrawerBoxes);
    let hw = &spec.hardware;

    let clear_width = opening.opening_width.min(box_dims.inside_width);
    audit.record(
        "clear_width",
        format!(
            "min(opening_width, inside_width) = min({}, {}) = {}",
            fmt_len(opening.opening_width),
            fmt_len(box_dims.inside_width),
            fmt_len(clear_width)
        ),
        clear_width,
    );

    let box_width = clear_width - hw.side_deduction;
    let box_depth = hw.slide_length;
    let box_depth_shop = hw.slide_length + SHOP_DEPTH_ALLOWANCE;

    let mut boxes = Vec::with_capacity(spec.drawer_heights.len());
    for (index, face_height) in spec.drawer_heights.iter().copied().enumerate() {
        let n = index + 1;
        let box_height_exact = face_height - hw.height_deduction;
        let box_height_shop = shop_round_down(box_height_exact);

        audit.record(
            &format!("drawer_{n}_box_width"),
            format!(
                "clear_width − side_deduction = {} − {} = {}",
                fmt_len(clear_width),
                fmt_len(hw.side_deduction),
                fmt_len(box_width)
            ),
            box_width,
        );
        audit.record(
            &format!("drawer_{n}_box_height_exact"),
            format!(
                "face_height − height_deduction = {} − {} = {}",
                fmt_len(face_height),
                fmt_len(hw.height_deduction),
                fmt_len(box_height_exact)
            ),
            box_height_exact,
        );
        audit.record(
            &format!("drawer_{n}_box_height_shop"),
            format!(
                "floor({} × 2) / 2 = {}",
                fmt_len(box_height_exact),
                fmt_len(box_height_shop)
            ),
            box_height_shop,
        );
        audit.record(
            &format!("drawer_{n}_box_depth_shop"),
            format!(
                "slide_length + {} = {} + {} = {}",
                fmt_len(SHOP_DEPTH_ALLOWANCE),
                fmt_len(box_depth),
                fmt_len(SHOP_DEPTH_ALLOWANCE),
                fmt_len(box_depth_shop)
            ),
            box_depth_shop,
        );

        if box_height_shop <= 0.0 {
            warn!(
                "Gate 4: drawer {} face {} too short for a box",
                n, face_height
            );
            audit.push_issue(
                Severity::Error,
                IssueKind::DrawerBoxTooShort {
                    drawer: index,
                    exact_height: box_height_exact,
                },
                format!(
                    "drawer {n}: face height {} leaves box height {} after the {} deduction",
                    fmt_len(face_height),
                    fmt_len(box_height_exact),
                    fmt_len(hw.height_deduction)
                ),
            );
        }
        if box_width <= 0.0 {
            warn!("Gate 4: drawer {} box width {} not positive", n, box_width);
            audit.push_issue(
                Severity::Error,
                IssueKind::DrawerBoxTooNarrow {
                    drawer: index,
                    box_width,
                },
                format!(
                    "drawer {n}: clear width {} is narrower than the {} slide deduction",
                    fmt_len(clear_width),
                    fmt_len(hw.side_deduction)
                ),
            );
        }

        boxes.push(DrawerBox {
            index,
            face_height,
            box_width,
            box_height_exact,
            box_height_shop,
            box_depth,
            box_depth_shop,
        });
    }

    let cavity_depth = box_dims.inside_depth;
    let required_depth = hw.slide_length + hw.cavity_clearance;
    audit.record(
        "required_depth",
        format!(
            "slide_length + cavity_clearance = {} + {} = {}",
            fmt_len(hw.slide_length),
            fmt_len(hw.cavity_clearance),
            fmt_len(required_depth)
        ),
        required_depth,
    );
    audit.record(
        "cavity_depth",
        format!("inside_depth = {}", fmt_len(cavity_depth)),
        cavity_depth,
    );

    let depth_ok = boxes.is_empty() || cavity_depth >= required_depth - TOLERANCE;
    if !depth_ok {
        let shortfall = required_depth - cavity_depth;
        let suggested = suggest_slide(cavity_depth, hw.cavity_clearance);
        let suggested_required = suggested.map(|s| s + hw.cavity_clearance);
        let remedy = match (suggested, suggested_required) {
            (Some(slide), Some(depth)) => format!(
                "use a {}\" slide (requires {})",
                fmt_len(slide),
                fmt_len(depth)
            ),
            _ => "no standard slide fits this cavity".to_string(),
        };
        warn!(
            "Gate 4: cavity depth {} short of {} by {}",
            cavity_depth, required_depth, shortfall
        );
        audit.push_issue(
            Severity::Error,
            IssueKind::DepthShortfall {
                required_depth,
                available_depth: cavity_depth,
                shortfall,
                suggested_slide_length: suggested,
                suggested_required_depth: suggested_required,
            },
            format!(
                "cavity depth {} is {} short of the {} required for a {}\" slide; {remedy}",
                fmt_len(cavity_depth),
                fmt_len(shortfall),
                fmt_len(required_depth),
                fmt_len(hw.slide_length)
            ),
        );
    }

    debug!(
        "Gate 4: {} drawer boxes, width {}, depth ok: {}",
        boxes.len(),
        box_width,
        depth_ok
    );

    DrawerGate {
        boxes,
        clear_width,
        cavity_depth,
        required_depth,
        depth_ok,
        audit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_gate::box_gate;
    use crate::opening::opening_gate;
    use approx::assert_relative_eq;
    use cabinet_types::{CabinetCategory, DrawerHardware, FaceFrameStyle};

    fn run(spec: &CabinetSpec) -> DrawerGate {
        let b = box_gate(spec);
        let o = opening_gate(spec, &b);
        drawer_gate(spec, &b, &o)
    }

    #[test]
    fn test_shop_round_down() {
        assert_relative_eq!(shop_round_down(5.1875), 5.0);
        assert_relative_eq!(shop_round_down(5.75), 5.5);
        assert_relative_eq!(shop_round_down(6.0), 6.0);
        assert_relative_eq!(shop_round_down(0.3), 0.0);
    }

    #[test]
    fn test_single_drawer_box() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0]);
        let gate = run(&spec);
        let b = &gate.boxes[0];

        assert_relative_eq!(gate.clear_width, 27.0);
        assert_relative_eq!(b.box_width, 26.375);
        assert_relative_eq!(b.box_height_exact, 5.1875);
        assert_relative_eq!(b.box_height_shop, 5.0);
        assert_relative_eq!(b.box_depth, 21.0);
        assert_relative_eq!(b.box_depth_shop, 21.25);
        assert!(gate.depth_ok);
        assert!(gate.audit.issues().is_empty());
    }

    #[test]
    fn test_frameless_uses_inside_width() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_style(FaceFrameStyle::Frameless)
            .with_drawers(vec![6.0]);
        let gate = run(&spec);
        assert_relative_eq!(gate.clear_width, 28.5);
    }

    #[test]
    fn test_depth_shortfall_suggests_shorter_slide() {
        // inside depth 22.5; 24" slide needs 24.625
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0])
            .with_hardware(DrawerHardware::default().with_slide_length(24.0));
        let gate = run(&spec);

        assert!(!gate.depth_ok);
        let issue = &gate.audit.issues()[0];
        assert_eq!(issue.severity, Severity::Error);
        match &issue.kind {
            IssueKind::DepthShortfall {
                shortfall,
                suggested_slide_length,
                suggested_required_depth,
                ..
            } => {
                assert_relative_eq!(*shortfall, 2.125);
                assert_eq!(*suggested_slide_length, Some(21.0));
                assert_eq!(*suggested_required_depth, Some(21.625));
            }
            other => panic!("unexpected issue {other:?}"),
        }
        assert!(issue.message.contains("use a 21\" slide"));
    }

    #[test]
    fn test_no_drawers_skips_depth_check() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 12.0);
        let gate = run(&spec);
        assert!(gate.boxes.is_empty());
        assert!(gate.depth_ok);
    }

    #[test]
    fn test_short_face_is_reported() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![1.0]);
        let gate = run(&spec);
        assert!(gate.audit.has_errors());
        assert!(matches!(
            gate.audit.issues()[0].kind,
            IssueKind::DrawerBoxTooShort { drawer: 0, .. }
        ));
    }
}
