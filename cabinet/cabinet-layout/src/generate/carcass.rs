//! Sides, bottom, back and toe kick.

use cabinet_types::{FaceUp, GrainDirection, Orientation, PartCategory, PartType};

use super::{PartGenerator, material};

impl PartGenerator<'_> {
    pub(super) fn place_carcass(&mut self) {
        let spec = self.spec;
        let gates = self.gates;
        let box_dims = &gates.box_dims;
        let rules = self.rules;
        let fz = box_dims.frame_thickness;

        let side_orientation = Orientation::new(0.0, GrainDirection::Vertical, FaceUp::Outside);
        for (name, x) in [
            ("left_side", 0.0),
            ("right_side", spec.width - spec.side_thickness),
        ] {
            let mut side = Self::part(
                name,
                PartCategory::Box,
                PartType::CabinetSide,
                [x, rules.side_y, fz],
                [spec.side_thickness, rules.side_height, rules.side_depth],
                side_orientation,
                material::CARCASS,
            );
            if rules.rules.sides_on_bottom {
                side.add_note("stands on bottom panel");
            } else {
                side.add_note(format!("dado for bottom, {:.4} wide", spec.bottom_thickness));
            }
            if rules.rules.back_inset_from_sides {
                side.add_note(format!("rabbet for back, {:.4} wide", spec.back_thickness));
            }
            self.insert(side);
        }

        let bottom = Self::part(
            "bottom",
            PartCategory::Box,
            PartType::CabinetBottom,
            [rules.bottom_x, 0.0, fz],
            [rules.bottom_width, spec.bottom_thickness, box_dims.inside_depth],
            Orientation::new(0.0, GrainDirection::Horizontal, FaceUp::Top),
            material::CARCASS,
        );
        self.insert(bottom);

        let back = Self::part(
            "back",
            PartCategory::Box,
            PartType::CabinetBack,
            [rules.back_x, 0.0, spec.depth - spec.back_thickness],
            [rules.back_width, box_dims.box_height, spec.back_thickness],
            Orientation::new(0.0, GrainDirection::Vertical, FaceUp::Inside),
            material::CARCASS,
        );
        self.insert(back);

        if spec.toe_kick_height > 0.0 {
            let toe_kick = Self::part(
                "toe_kick",
                PartCategory::Box,
                PartType::ToeKick,
                [0.0, -spec.toe_kick_height, spec.toe_kick_recess],
                [spec.width, spec.toe_kick_height, spec.side_thickness],
                Orientation::new(0.0, GrainDirection::Horizontal, FaceUp::Front),
                material::CARCASS,
            );
            self.insert(toe_kick);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::generate::generate_parts;
    use approx::assert_relative_eq;
    use cabinet_gates::run_gates;
    use cabinet_types::{AssemblyRules, CabinetCategory, CabinetSpec, PartMap};

    fn generate(rules: AssemblyRules) -> PartMap {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0).with_rules(rules);
        generate_parts(&spec, &run_gates(&spec))
    }

    #[test]
    fn test_default_carcass() {
        let parts = generate(AssemblyRules::default());

        let left = &parts["left_side"];
        assert_relative_eq!(left.position().x, 0.0);
        assert_relative_eq!(left.position().y, 0.0);
        assert_relative_eq!(left.position().z, 0.75);
        assert_relative_eq!(left.height(), 30.25);
        assert_relative_eq!(left.depth(), 22.5);

        let right = &parts["right_side"];
        assert_relative_eq!(right.max().x, 30.0);

        let bottom = &parts["bottom"];
        assert_relative_eq!(bottom.position().x, 0.75);
        assert_relative_eq!(bottom.width(), 28.5);
        assert_relative_eq!(bottom.max().z, parts["back"].position().z);

        let back = &parts["back"];
        assert_relative_eq!(back.width(), 30.0);
        assert_relative_eq!(back.max().z, 24.0);

        let toe = &parts["toe_kick"];
        assert_relative_eq!(toe.position().y, -4.5);
        assert_relative_eq!(toe.max().y, 0.0);
        assert_relative_eq!(toe.position().z, 3.0);
    }

    #[test]
    fn test_sides_on_bottom_with_inset_back() {
        let parts = generate(AssemblyRules {
            sides_on_bottom: true,
            back_inset_from_sides: true,
            stretchers_on_top: false,
        });

        let left = &parts["left_side"];
        assert_relative_eq!(left.position().y, 0.75);
        assert_relative_eq!(left.height(), 29.5);
        assert_relative_eq!(left.depth(), 23.25);

        assert_relative_eq!(parts["bottom"].width(), 30.0);
        assert_relative_eq!(parts["back"].position().x, 0.75);
        assert_relative_eq!(parts["back"].width(), 28.5);
    }
}
