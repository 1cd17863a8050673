//! Gate 5: stretchers.
//!
//! Sink bases get no stretchers; their sides run the full box height.
//! Everything else gets a front and back top stretcher plus one drawer
//! support between each pair of adjacent drawers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cabinet_types::{CabinetSpec, StandardKey};
use tracing::debug;

use crate::audit::{GateId, GateOutput, fmt_len};

/// Stretchers across the top of a normal carcass.
pub const TOP_STRETCHERS: usize = 2;

/// A drawer-support stretcher.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SupportStretcher {
    /// Index of the drawer resting above this support, top to bottom.
    pub drawer_above: usize,
    /// Face heights accumulated below the support.
    pub cumulative_height: f64,
    /// Support top above the bottom of the stack.
    pub top_relative: f64,
    /// Support top in box coordinates when the stack rests on its bottom
    /// reveal. Placed parts hang the support from the face it carries.
    pub top_y: f64,
}

/// Stretcher count, stock and drawer-support positions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StretcherGate {
    /// Total stretchers, top and supports.
    pub count: usize,
    /// Top stretchers (front and back).
    pub top_count: usize,
    /// Supports, bottom to top.
    pub supports: Vec<SupportStretcher>,
    /// Stock thickness.
    pub thickness: f64,
    /// Stock depth, front to back.
    pub depth: f64,
    /// Formula trail.
    pub audit: GateOutput,
}

/// Running height of the bottom-up drawer stack.
#[derive(Debug, Clone, Copy, Default)]
struct Cumulative {
    height: f64,
}

/// Run Gate 5.
#[must_use]
pub fn stretcher_gate(spec: &CabinetSpec) -> StretcherGate {
    let mut audit = GateOutput::new(GateId::Stretchers);
    let style = spec.style_config();
    let thickness = spec.standards.get(StandardKey::StretcherThickness);
    let depth = spec.standards.get(StandardKey::StretcherDepth);
    let drawer_count = spec.drawer_count();

    if spec.category.is_sink_base() {
        audit.record(
            "stretcher_count",
            format!(
                "{} is a sink base: sides extend instead = 0",
                spec.category.tag()
            ),
            0.0,
        );
        debug!("Gate 5: sink base, no stretchers");
        return StretcherGate {
            count: 0,
            top_count: 0,
            supports: Vec::new(),
            thickness,
            depth,
            audit,
        };
    }

    let support_count = drawer_count.saturating_sub(1);
    let count = TOP_STRETCHERS + support_count;
    #[allow(clippy::cast_precision_loss)]
    let count_value = count as f64;
    audit.record(
        "stretcher_count",
        format!(
            "{TOP_STRETCHERS} + max(0, drawer_count − 1) = {TOP_STRETCHERS} + max(0, {drawer_count} − 1) = {count}"
        ),
        count_value,
    );
    audit.record("stretcher_thickness", fmt_len(thickness), thickness);
    audit.record("stretcher_depth", fmt_len(depth), depth);

    let rail = style.rail_width(spec.rail_width);
    let stack_bottom = style.opening_floor(rail) + style.bottom_reveal;
    let offset = spec.hardware.bottom_clearance - style.reveal_gap;
    audit.record(
        "support_offset",
        format!(
            "bottom_clearance − reveal_gap = {} − {} = {}",
            fmt_len(spec.hardware.bottom_clearance),
            fmt_len(style.reveal_gap),
            fmt_len(offset)
        ),
        offset,
    );

    // Bottom-up over every drawer except the top one.
    let (supports, _) = spec
        .drawer_heights
        .iter()
        .enumerate()
        .rev()
        .take(support_count)
        .fold(
            (Vec::with_capacity(support_count), Cumulative::default()),
            |(mut supports, acc), (index, face_height)| {
                let next = Cumulative {
                    height: acc.height + face_height,
                };
                let top_relative = next.height + offset;
                supports.push(SupportStretcher {
                    drawer_above: index - 1,
                    cumulative_height: next.height,
                    top_relative,
                    top_y: stack_bottom + top_relative,
                });
                (supports, next)
            },
        );

    for (i, support) in supports.iter().enumerate() {
        let n = i + 1;
        audit.record(
            &format!("support_{n}_top"),
            format!(
                "cumulative_height + support_offset = {} + {} = {}",
                fmt_len(support.cumulative_height),
                fmt_len(offset),
                fmt_len(support.top_relative)
            ),
            support.top_relative,
        );
        audit.record(
            &format!("support_{n}_top_y"),
            format!(
                "stack_bottom + support_{n}_top = {} + {} = {}",
                fmt_len(stack_bottom),
                fmt_len(support.top_relative),
                fmt_len(support.top_y)
            ),
            support.top_y,
        );
    }

    debug!(
        "Gate 5: {} stretchers ({} supports)",
        count,
        supports.len()
    );

    StretcherGate {
        count,
        top_count: TOP_STRETCHERS,
        supports,
        thickness,
        depth,
        audit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cabinet_types::CabinetCategory;

    #[test]
    fn test_single_drawer_needs_no_supports() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0]);
        let gate = stretcher_gate(&spec);
        assert_eq!(gate.count, 2);
        assert!(gate.supports.is_empty());
    }

    #[test]
    fn test_sink_base_has_none() {
        let spec = CabinetSpec::new(CabinetCategory::SinkBase, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0, 6.0]);
        let gate = stretcher_gate(&spec);
        assert_eq!(gate.count, 0);
        assert_eq!(gate.top_count, 0);
        assert!(gate.supports.is_empty());
    }

    #[test]
    fn test_support_positions_accumulate_bottom_up() {
        let spec = CabinetSpec::new(CabinetCategory::DrawerBase, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0, 8.0, 10.0]);
        let gate = stretcher_gate(&spec);

        assert_eq!(gate.count, 4);
        assert_eq!(gate.supports.len(), 2);

        // offset = 0.5625 − 0.125
        let lowest = gate.supports[0];
        assert_eq!(lowest.drawer_above, 1);
        assert_relative_eq!(lowest.cumulative_height, 10.0);
        assert_relative_eq!(lowest.top_relative, 10.4375);
        // rail 1.5 + bottom reveal 0.125
        assert_relative_eq!(lowest.top_y, 1.625 + 10.4375);

        let upper = gate.supports[1];
        assert_eq!(upper.drawer_above, 0);
        assert_relative_eq!(upper.cumulative_height, 18.0);
        assert!(upper.top_y > lowest.top_y);
    }

    #[test]
    fn test_count_formula_text() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0, 6.0]);
        let gate = stretcher_gate(&spec);
        assert_eq!(
            gate.audit.steps()[0].formula,
            "2 + max(0, drawer_count − 1) = 2 + max(0, 2 − 1) = 3"
        );
    }
}
