//! 3D part generation.
//!
//! [`generate_parts`] turns a spec and its gate results into a [`PartMap`].
//! Placement runs in a fixed order: carcass, top stretchers, face frame,
//! finished ends (with their miters), stacked faces, drawer supports,
//! drawer boxes. Each drawer box is capped below whatever solid part sits
//! over it. A final
//! pass clamps every Internal part into the internal bounds and marks any
//! part it had to move.

mod carcass;
mod drawer_box;
mod finished_end;
mod frame;
mod stack;
mod stretcher;

use cabinet_gates::GateResults;
use cabinet_types::{
    CabinetSpec, InternalBounds, Orientation, Part, PartCategory, PartMap, PartType, StyleConfig,
};
use nalgebra::{Point3, Vector3};
use tracing::{debug, info};

use crate::constraint::{clamp_to_bounds, internal_bounds};
use crate::rules::ResolvedRules;

pub use drawer_box::{
    DRAWER_BOTTOM_THICKNESS, DRAWER_DADO_DEPTH, DRAWER_DADO_OFFSET, DRAWER_STOCK_THICKNESS,
};

/// Material labels.
pub mod material {
    /// Carcass sheet goods.
    pub const CARCASS: &str = "plywood";
    /// Face frame and faces.
    pub const HARDWOOD: &str = "hardwood";
    /// Drawer box sides, fronts and backs.
    pub const DRAWER_BOX: &str = "baltic birch";
    /// Drawer bottoms.
    pub const DRAWER_BOTTOM: &str = "plywood";
}

/// Shared state while placing the parts of one cabinet.
pub(crate) struct PartGenerator<'a> {
    spec: &'a CabinetSpec,
    gates: &'a GateResults,
    style: StyleConfig,
    rules: ResolvedRules,
    bounds: InternalBounds,
    parts: PartMap,
}

impl<'a> PartGenerator<'a> {
    fn new(spec: &'a CabinetSpec, gates: &'a GateResults) -> Self {
        Self {
            spec,
            gates,
            style: spec.style_config(),
            rules: ResolvedRules::resolve(spec, &gates.box_dims),
            bounds: internal_bounds(spec, &gates.box_dims),
            parts: PartMap::new(),
        }
    }

    /// Build a part with the given footprint.
    fn part(
        name: impl Into<String>,
        category: PartCategory,
        part_type: PartType,
        position: [f64; 3],
        dimensions: [f64; 3],
        orientation: Orientation,
        material: &str,
    ) -> Part {
        Part::new(
            name,
            category,
            part_type,
            Point3::new(position[0], position[1], position[2]),
            Vector3::new(dimensions[0], dimensions[1], dimensions[2]),
        )
        .with_orientation(orientation)
        .with_material(material)
    }

    fn insert(&mut self, part: Part) {
        let p = part.position();
        debug!(
            "Placed {} ({}) at ({:.4}, {:.4}, {:.4}) size {:.4} x {:.4} x {:.4}",
            part.name(),
            part.part_type().label(),
            p.x,
            p.y,
            p.z,
            part.width(),
            part.height(),
            part.depth()
        );
        self.parts.insert(part.name().to_string(), part);
    }

    /// Clamp every Internal part and count the corrections.
    fn enforce_bounds(&mut self) -> usize {
        let bounds = self.bounds;
        self.parts
            .values_mut()
            .filter(|p| p.category() == PartCategory::Internal)
            .map(|p| clamp_to_bounds(p, &bounds))
            .filter(|&clamped| clamped)
            .count()
    }

    fn finish(mut self) -> PartMap {
        self.place_carcass();
        self.place_stretchers();
        self.place_face_frame();
        self.place_finished_ends();
        self.place_stack();
        self.place_supports();
        self.place_drawer_boxes();
        let clamped = self.enforce_bounds();

        let adjusted = self.parts.values().filter(|p| p.constraint_applied()).count();
        info!(
            "Generated {} parts ({} adjusted, {} clamped in final pass)",
            self.parts.len(),
            adjusted,
            clamped
        );
        self.parts
    }
}

/// Generate every part of a cabinet.
///
/// `spec` is assumed valid and `gates` must come from the same `spec`.
#[must_use]
pub fn generate_parts(spec: &CabinetSpec, gates: &GateResults) -> PartMap {
    PartGenerator::new(spec, gates).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::check_bounds;
    use cabinet_gates::run_gates;
    use cabinet_types::{AssemblyRules, CabinetCategory, FaceFrameStyle, FalseFront};

    fn generate(spec: &CabinetSpec) -> PartMap {
        generate_parts(spec, &run_gates(spec))
    }

    #[test]
    fn test_standard_base_part_names() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0]);
        let parts = generate(&spec);

        for name in [
            "left_side",
            "right_side",
            "bottom",
            "back",
            "toe_kick",
            "stretcher_front",
            "stretcher_back",
            "face_frame_left_stile",
            "face_frame_right_stile",
            "face_frame_top_rail",
            "face_frame_bottom_rail",
            "drawer_face_1",
            "drawer_1_box_left_side",
            "drawer_1_box_right_side",
            "drawer_1_box_front",
            "drawer_1_box_back",
            "drawer_1_box_bottom",
        ] {
            assert!(parts.contains_key(name), "missing {name}");
        }
        assert!(!parts.keys().any(|k| k.starts_with("drawer_support")));
    }

    #[test]
    fn test_internal_parts_contained_for_every_style_and_rule() {
        for style in FaceFrameStyle::ALL {
            for rules in AssemblyRules::all_combinations() {
                let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
                    .with_style(style)
                    .with_rules(rules)
                    .with_false_front(FalseFront::new(4.0))
                    .with_drawers(vec![6.0, 8.0]);
                let gates = run_gates(&spec);
                let bounds = internal_bounds(&spec, &gates.box_dims);
                let parts = generate_parts(&spec, &gates);
                for part in parts.values() {
                    assert!(
                        check_bounds(part, &bounds).is_empty(),
                        "{} escapes bounds for {:?} {:?}",
                        part.name(),
                        style,
                        rules
                    );
                }
            }
        }
    }

    #[test]
    fn test_sink_base_has_no_stretchers() {
        let spec = CabinetSpec::new(CabinetCategory::SinkBase, 30.0, 34.75, 24.0);
        let parts = generate(&spec);
        assert!(!parts.values().any(|p| p.part_type() == PartType::Stretcher));
        assert!(parts.contains_key("left_side"));
    }

    #[test]
    fn test_wall_cabinet_has_no_toe_kick() {
        let spec = CabinetSpec::new(CabinetCategory::Wall, 30.0, 30.0, 12.0);
        assert!(!generate(&spec).contains_key("toe_kick"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let spec = CabinetSpec::new(CabinetCategory::DrawerBase, 24.0, 34.75, 24.0)
            .with_finished_ends(true, true)
            .with_drawers(vec![6.0, 8.0, 10.0]);
        assert_eq!(generate(&spec), generate(&spec));
    }
}
