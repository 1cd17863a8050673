//! Top stretchers and drawer supports.
//!
//! Stretchers butt the face frame and the back panel with no gap. Drawer
//! supports are placed once the faces are, one under each drawer but the
//! bottom one.

use cabinet_gates::ComponentKind;
use cabinet_types::{FaceUp, GrainDirection, Orientation, PartCategory, PartType};
use tracing::warn;

use super::stack::face_name;
use super::{PartGenerator, material};

impl PartGenerator<'_> {
    pub(super) fn place_stretchers(&mut self) {
        let spec = self.spec;
        let gates = self.gates;
        let gate = &gates.stretchers;
        if gate.count == 0 {
            return;
        }

        let box_dims = &gates.box_dims;
        let rules = self.rules;
        let fz = box_dims.frame_thickness;
        let y = box_dims.box_height - gate.thickness;
        let flat = Orientation::new(0.0, GrainDirection::Horizontal, FaceUp::Top);

        let front_z = fz;
        let back_z = spec.depth - spec.back_thickness - gate.depth;
        for (name, z) in [("stretcher_front", front_z), ("stretcher_back", back_z)] {
            let mut stretcher = Self::part(
                name,
                rules.stretcher_category,
                PartType::Stretcher,
                [rules.stretcher_x, y, z],
                [rules.stretcher_width, gate.thickness, gate.depth],
                flat,
                material::CARCASS,
            );
            if rules.rules.stretchers_on_top {
                stretcher.add_note("sits on top of sides");
            }
            self.insert(stretcher);
        }
    }

    /// Hang each drawer support from the face it carries.
    ///
    /// The support top sits `bottom_clearance − reveal_gap` above the placed
    /// face bottom, so the drawer's slide clearance is measured from the
    /// same face the box hangs behind.
    pub(super) fn place_supports(&mut self) {
        let spec = self.spec;
        let gates = self.gates;
        let gate = &gates.stretchers;
        let fz = gates.box_dims.frame_thickness;
        let offset = spec.hardware.bottom_clearance - self.style.reveal_gap;
        let flat = Orientation::new(0.0, GrainDirection::Horizontal, FaceUp::Top);

        for (i, support) in gate.supports.iter().enumerate() {
            let face = face_name(ComponentKind::Drawer(support.drawer_above));
            let Some(face_bottom) = self.parts.get(&face).map(|p| p.position().y) else {
                warn!("No {} to carry; drawer support {} not generated", face, i + 1);
                continue;
            };
            let top = face_bottom + offset;
            let mut part = Self::part(
                format!("drawer_support_{}", i + 1),
                PartCategory::Internal,
                PartType::DrawerSupport,
                [spec.side_thickness, top - gate.thickness, fz],
                [gates.box_dims.inside_width, gate.thickness, gate.depth],
                flat,
                material::CARCASS,
            );
            part.add_note(format!("supports drawer {}", support.drawer_above + 1));
            self.insert(part);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::generate::generate_parts;
    use crate::constraint::find_overlap;
    use approx::assert_relative_eq;
    use cabinet_gates::run_gates;
    use cabinet_types::{AssemblyRules, CabinetCategory, CabinetSpec, PartCategory};

    #[test]
    fn test_stretchers_butt_frame_and_back() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0, 8.0, 10.0]);
        let gates = run_gates(&spec);
        let parts = generate_parts(&spec, &gates);

        let front = &parts["stretcher_front"];
        assert_relative_eq!(front.position().z, 0.75);
        assert_relative_eq!(front.max().y, 30.25);
        assert_relative_eq!(front.position().x, 0.75);
        assert_eq!(front.category(), PartCategory::Internal);

        let back = &parts["stretcher_back"];
        assert_relative_eq!(back.max().z, parts["back"].position().z);

        assert!(parts.contains_key("drawer_support_2"));
        assert!(!parts.contains_key("drawer_support_3"));
    }

    #[test]
    fn test_supports_hang_from_the_drawer_they_carry() {
        let spec = CabinetSpec::new(CabinetCategory::DrawerBase, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0, 8.0, 10.0]);
        let gates = run_gates(&spec);
        let parts = generate_parts(&spec, &gates);

        // lowest support carries the middle drawer, upper one the top drawer
        let offset = 0.5625 - 0.125;
        let lowest = &parts["drawer_support_1"];
        assert_eq!(gates.stretchers.supports[0].drawer_above, 1);
        assert_relative_eq!(lowest.max().y, parts["drawer_face_2"].position().y + offset);
        let upper = &parts["drawer_support_2"];
        assert_relative_eq!(upper.max().y, parts["drawer_face_1"].position().y + offset);

        // each support sits between the box it carries and the box below
        for (support, above, below) in [
            (lowest, "drawer_2_box_left_side", "drawer_3_box_left_side"),
            (upper, "drawer_1_box_left_side", "drawer_2_box_left_side"),
        ] {
            assert!(support.max().y <= parts[above].position().y + 1e-9);
            assert!(support.position().y >= parts[below].max().y - 1e-9);
        }

        for support in [lowest, upper] {
            for part in parts.values().filter(|p| p.name().contains("_box_")) {
                assert!(
                    find_overlap(support, part).is_none(),
                    "{} overlaps {}",
                    support.name(),
                    part.name()
                );
            }
        }
    }

    #[test]
    fn test_stretchers_on_top_span_full_width() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0).with_rules(
            AssemblyRules {
                stretchers_on_top: true,
                ..AssemblyRules::default()
            },
        );
        let parts = generate_parts(&spec, &run_gates(&spec));
        let front = &parts["stretcher_front"];
        assert_relative_eq!(front.width(), 30.0);
        assert_eq!(front.category(), PartCategory::Box);
        assert_relative_eq!(parts["left_side"].max().y, front.position().y);
    }
}
