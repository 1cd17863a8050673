//! Face-frame stiles and rails.

use cabinet_types::{FaceUp, GrainDirection, Orientation, PartCategory, PartType};

use super::{PartGenerator, material};

/// Left stile name.
pub(super) const LEFT_STILE: &str = "face_frame_left_stile";
/// Right stile name.
pub(super) const RIGHT_STILE: &str = "face_frame_right_stile";

impl PartGenerator<'_> {
    pub(super) fn place_face_frame(&mut self) {
        let spec = self.spec;
        let gates = self.gates;
        let frame = &gates.face_frame;
        let fz = gates.box_dims.frame_thickness;
        let stile_width = gates.opening.stile_width;
        let rail_width = gates.opening.rail_width;

        if frame.stile_count > 0 {
            let vertical = Orientation::new(0.0, GrainDirection::Vertical, FaceUp::Front);
            for (name, x) in [
                (LEFT_STILE, 0.0),
                (RIGHT_STILE, spec.width - stile_width),
            ] {
                let stile = Self::part(
                    name,
                    PartCategory::External,
                    PartType::FaceFrameStile,
                    [x, 0.0, 0.0],
                    [stile_width, frame.stile_length, fz],
                    vertical,
                    material::HARDWOOD,
                );
                self.insert(stile);
            }
        }

        if frame.rail_count > 0 {
            let horizontal = Orientation::new(90.0, GrainDirection::Horizontal, FaceUp::Front);
            for (name, y) in [
                ("face_frame_top_rail", gates.box_dims.box_height - rail_width),
                ("face_frame_bottom_rail", 0.0),
            ] {
                let rail = Self::part(
                    name,
                    PartCategory::External,
                    PartType::FaceFrameRail,
                    [stile_width, y, 0.0],
                    [frame.rail_length, rail_width, fz],
                    horizontal,
                    material::HARDWOOD,
                )
                .with_note("pocket screw to stiles");
                self.insert(rail);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::generate::generate_parts;
    use approx::assert_relative_eq;
    use cabinet_gates::run_gates;
    use cabinet_types::{CabinetCategory, CabinetSpec, FaceFrameStyle};

    #[test]
    fn test_frame_encloses_opening() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0);
        let gates = run_gates(&spec);
        let parts = generate_parts(&spec, &gates);

        let left = &parts[super::LEFT_STILE];
        let right = &parts[super::RIGHT_STILE];
        assert_relative_eq!(left.height(), 30.25);
        assert_relative_eq!(left.depth(), 0.75);
        assert_relative_eq!(right.position().x - left.max().x, gates.opening.opening_width);

        let top = &parts["face_frame_top_rail"];
        let bottom = &parts["face_frame_bottom_rail"];
        assert_relative_eq!(top.width(), 27.0);
        assert_relative_eq!(top.max().y, 30.25);
        assert_relative_eq!(
            top.position().y - bottom.max().y,
            gates.opening.opening_height
        );
    }

    #[test]
    fn test_frameless_has_no_frame() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_style(FaceFrameStyle::Frameless);
        let parts = generate_parts(&spec, &run_gates(&spec));
        assert!(!parts.keys().any(|k| k.starts_with("face_frame")));
    }
}
