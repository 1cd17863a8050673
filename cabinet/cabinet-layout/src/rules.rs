//! Assembly rules resolved into carcass placement figures.
//!
//! The three rule flags are independent. They are resolved once here so the
//! placement code reads numbers instead of branching on flags.

use cabinet_gates::BoxGate;
use cabinet_types::{AssemblyRules, CabinetSpec, PartCategory};

/// Carcass placement derived from the assembly rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRules {
    /// The flags this was resolved from.
    pub rules: AssemblyRules,
    /// Y of the bottom edge of each side.
    pub side_y: f64,
    /// Height of each side.
    pub side_height: f64,
    /// Depth of each side, from the back of the face frame.
    pub side_depth: f64,
    /// X of the bottom panel.
    pub bottom_x: f64,
    /// Width of the bottom panel.
    pub bottom_width: f64,
    /// X of the back panel.
    pub back_x: f64,
    /// Width of the back panel.
    pub back_width: f64,
    /// X of the top stretchers.
    pub stretcher_x: f64,
    /// Width of the top stretchers.
    pub stretcher_width: f64,
    /// Category the top stretchers fall into.
    pub stretcher_category: PartCategory,
}

impl ResolvedRules {
    /// Resolve the cabinet's assembly rules against Gate 1.
    #[must_use]
    pub fn resolve(spec: &CabinetSpec, box_dims: &BoxGate) -> Self {
        let rules = spec.rules;
        let has_stretchers = !box_dims.is_sink_base;

        let side_y = if rules.sides_on_bottom {
            spec.bottom_thickness
        } else {
            0.0
        };
        let stretcher_cap = if rules.stretchers_on_top && has_stretchers {
            box_dims.stretcher_thickness
        } else {
            0.0
        };
        let side_height = box_dims.box_height - side_y - stretcher_cap;

        let side_depth = if rules.back_inset_from_sides {
            box_dims.box_depth
        } else {
            box_dims.box_depth - spec.back_thickness
        };

        let (bottom_x, bottom_width) = if rules.sides_on_bottom {
            (0.0, spec.width)
        } else {
            (spec.side_thickness, box_dims.inside_width)
        };

        let (back_x, back_width) = if rules.back_inset_from_sides {
            (spec.side_thickness, box_dims.inside_width)
        } else {
            (0.0, spec.width)
        };

        let (stretcher_x, stretcher_width, stretcher_category) = if rules.stretchers_on_top {
            (0.0, spec.width, PartCategory::Box)
        } else {
            (
                spec.side_thickness,
                box_dims.inside_width,
                PartCategory::Internal,
            )
        };

        Self {
            rules,
            side_y,
            side_height,
            side_depth,
            bottom_x,
            bottom_width,
            back_x,
            back_width,
            stretcher_x,
            stretcher_width,
            stretcher_category,
        }
    }
}
