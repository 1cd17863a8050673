//! Applied finished end panels and their miter to the adjoining stile.

use cabinet_types::{FaceUp, GrainDirection, Orientation, PartCategory, PartType, StandardKey};
use nalgebra::{Point3, Vector3};
use tracing::warn;

use super::frame::{LEFT_STILE, RIGHT_STILE};
use super::{PartGenerator, material};
use crate::miter::{Corner, apply_miter};

impl PartGenerator<'_> {
    pub(super) fn place_finished_ends(&mut self) {
        let spec = self.spec;
        let ends = spec.finished_ends;
        if !ends.left && !ends.right {
            return;
        }

        let thickness = spec.standards.get(StandardKey::FinishedEndThickness);
        let gap = spec.standards.get(StandardKey::FinishedEndGap);
        let scribe = spec.standards.get(StandardKey::BackWallGap);
        let reach = gap + thickness;

        let sides = [
            (ends.left, "finished_end_left", -reach, LEFT_STILE, Corner::Left),
            (
                ends.right,
                "finished_end_right",
                spec.width + gap,
                RIGHT_STILE,
                Corner::Right,
            ),
        ];

        for (wanted, name, x, stile, corner) in sides {
            if !wanted {
                continue;
            }

            let panel = Self::part(
                name,
                PartCategory::External,
                PartType::FinishedEnd,
                [x, -spec.toe_kick_height, 0.0],
                [thickness, spec.height, spec.depth + scribe],
                Orientation::new(90.0, GrainDirection::Vertical, FaceUp::Outside),
                material::CARCASS,
            )
            .with_note(format!("scribe allowance {scribe:.4} at wall"));
            self.insert(panel);

            let Some(stile_part) = self.parts.get_mut(stile) else {
                continue;
            };
            let pos = stile_part.position();
            let dims = stile_part.dimensions();
            let new_x = match corner {
                Corner::Left => pos.x - reach,
                Corner::Right => pos.x,
            };
            stile_part.set_position(Point3::new(new_x, pos.y, pos.z));
            stile_part.set_dimensions(Vector3::new(dims.x + reach, dims.y, dims.z));
            stile_part.add_note(format!("extended {reach:.4} to cover {name}"));

            if apply_miter(&mut self.parts, stile, name, Some(corner)).is_none() {
                warn!("{} and {} do not overlap; no miter cut", stile, name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::generate::generate_parts;
    use approx::assert_relative_eq;
    use cabinet_gates::run_gates;
    use cabinet_types::{CabinetCategory, CabinetSpec, FaceFrameStyle, PartMap, Territory};

    fn generate(style: FaceFrameStyle) -> PartMap {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_style(style)
            .with_finished_ends(true, true);
        generate_parts(&spec, &run_gates(&spec))
    }

    #[test]
    fn test_end_panels_span_full_height_and_scribe() {
        let parts = generate(FaceFrameStyle::FaceFrame);
        let left = &parts["finished_end_left"];
        assert_relative_eq!(left.position().x, -0.75);
        assert_relative_eq!(left.position().y, -4.5);
        assert_relative_eq!(left.height(), 34.75);
        assert_relative_eq!(left.depth(), 24.5);

        let right = &parts["finished_end_right"];
        assert_relative_eq!(right.position().x, 30.0);
    }

    #[test]
    fn test_stiles_widen_and_miter() {
        let parts = generate(FaceFrameStyle::FaceFrame);

        let stile = &parts["face_frame_left_stile"];
        assert_relative_eq!(stile.position().x, -0.75);
        assert_relative_eq!(stile.width(), 2.25);
        // stile is in front of the deep end panel
        assert_eq!(
            stile.miter_cut().map(|c| c.removes),
            Some(Territory::BackTerritory)
        );
        assert_eq!(
            parts["finished_end_left"].miter_cut().map(|c| c.removes),
            Some(Territory::FrontTerritory)
        );

        let right = &parts["face_frame_right_stile"];
        assert_relative_eq!(right.max().x, 30.75);
        assert!(right.miter_cut().is_some());
    }

    #[test]
    fn test_frameless_ends_have_no_miter() {
        let parts = generate(FaceFrameStyle::Frameless);
        assert!(parts["finished_end_left"].miter_cut().is_none());
    }
}
