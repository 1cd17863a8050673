//! Exploded drawer boxes.
//!
//! Each box is sized by Gate 4 and hung behind its face: bottom edge at the
//! face bottom plus the slide's bottom clearance, front against the back of
//! the face frame, centered on the cabinet in X. The box envelope is clamped
//! into the internal bounds and capped under any stretcher, support or
//! backing above it before the five sub-parts are cut from it.

use cabinet_gates::{ComponentKind, DrawerBox};
use cabinet_types::{
    FaceUp, GrainDirection, Orientation, Part, PartCategory, PartType, Point3, TOLERANCE,
    Vector3,
};
use tracing::warn;

use super::stack::face_name;
use super::{PartGenerator, material};
use crate::constraint::{clamp_to_bounds, footprints_overlap};

/// Side, front and back stock thickness.
pub const DRAWER_STOCK_THICKNESS: f64 = 0.5;

/// Bottom panel thickness.
pub const DRAWER_BOTTOM_THICKNESS: f64 = 0.25;

/// Depth of the dado the bottom sits in.
pub const DRAWER_DADO_DEPTH: f64 = 0.25;

/// Height of the dado above the box bottom edge.
pub const DRAWER_DADO_OFFSET: f64 = 0.5;

/// Room above a drawer box envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Headroom {
    /// Nothing over the box.
    Clear,
    /// Cut down to stop at this Y.
    Capped(f64),
    /// Too little left to hold the bottom.
    Blocked,
}

impl PartGenerator<'_> {
    pub(super) fn place_drawer_boxes(&mut self) {
        let gates = self.gates;
        for drawer in &gates.drawers.boxes {
            self.place_drawer_box(drawer);
        }
    }

    /// Lowest bottom of any carcass or internal part standing over the
    /// envelope's footprint above its bottom edge.
    fn ceiling_over(&self, envelope: &Part) -> Option<f64> {
        let floor = envelope.position().y;
        self.parts
            .values()
            .filter(|p| p.category() != PartCategory::External)
            .filter(|p| p.position().y > floor + TOLERANCE)
            .filter(|p| footprints_overlap(p, envelope))
            .map(|p| p.position().y)
            .min_by(f64::total_cmp)
    }

    /// Shorten the envelope to stop under its ceiling.
    fn cap_below_ceiling(&self, envelope: &mut Part) -> Headroom {
        let Some(ceiling) = self.ceiling_over(envelope) else {
            return Headroom::Clear;
        };
        if envelope.max().y <= ceiling + TOLERANCE {
            return Headroom::Clear;
        }

        let height = ceiling - envelope.position().y;
        if height <= DRAWER_DADO_OFFSET + DRAWER_BOTTOM_THICKNESS {
            warn!(
                "{} has only {:.4} below the part over it at {:.4}; box not generated",
                envelope.name(),
                height,
                ceiling
            );
            return Headroom::Blocked;
        }
        warn!(
            "{} capped from {:.4} to {:.4} below the part over it at {:.4}",
            envelope.name(),
            envelope.height(),
            height,
            ceiling
        );
        let dims = envelope.dimensions();
        envelope.set_dimensions(Vector3::new(dims.x, height, dims.z));
        Headroom::Capped(ceiling)
    }

    fn place_drawer_box(&mut self, drawer: &DrawerBox) {
        let spec = self.spec;
        let n = drawer.index + 1;
        let face = face_name(ComponentKind::Drawer(drawer.index));

        let Some(face_bottom) = self.parts.get(&face).map(|p| p.position().y) else {
            warn!("Drawer {} has no face; box not generated", n);
            return;
        };

        let s = DRAWER_STOCK_THICKNESS;
        if drawer.box_height_shop <= DRAWER_DADO_OFFSET + DRAWER_BOTTOM_THICKNESS
            || drawer.box_width <= 2.0 * s
        {
            warn!(
                "Drawer {} box {:.4} x {:.4} is too small to build",
                n, drawer.box_width, drawer.box_height_shop
            );
            return;
        }

        let mut envelope = Part::new(
            format!("drawer_{n}_box"),
            PartCategory::Internal,
            PartType::DrawerBoxSide,
            Point3::new(
                (spec.width - drawer.box_width) / 2.0,
                face_bottom + spec.hardware.bottom_clearance,
                self.gates.box_dims.frame_thickness,
            ),
            Vector3::new(drawer.box_width, drawer.box_height_shop, drawer.box_depth),
        );
        let clamped = clamp_to_bounds(&mut envelope, &self.bounds);
        let headroom = self.cap_below_ceiling(&mut envelope);
        if headroom == Headroom::Blocked {
            return;
        }

        let o = envelope.position();
        let (w, h, d) = (envelope.width(), envelope.height(), envelope.depth());
        let dado = DRAWER_DADO_DEPTH;
        let bottom_y = o.y + DRAWER_DADO_OFFSET;

        let upright = Orientation::new(0.0, GrainDirection::Horizontal, FaceUp::Outside);
        let flat = Orientation::new(0.0, GrainDirection::Any, FaceUp::Top);
        let dado_note = format!(
            "dado {dado:.4} deep x {DRAWER_BOTTOM_THICKNESS:.4} wide, {DRAWER_DADO_OFFSET:.4} up"
        );

        let mut pieces = vec![
            Self::part(
                format!("drawer_{n}_box_left_side"),
                PartCategory::Internal,
                PartType::DrawerBoxSide,
                [o.x, o.y, o.z],
                [s, h, d],
                upright,
                material::DRAWER_BOX,
            )
            .with_note(dado_note.as_str()),
            Self::part(
                format!("drawer_{n}_box_right_side"),
                PartCategory::Internal,
                PartType::DrawerBoxSide,
                [o.x + w - s, o.y, o.z],
                [s, h, d],
                upright,
                material::DRAWER_BOX,
            )
            .with_note(dado_note.as_str()),
            Self::part(
                format!("drawer_{n}_box_front"),
                PartCategory::Internal,
                PartType::DrawerBoxFront,
                [o.x + s, o.y, o.z],
                [w - 2.0 * s, h, s],
                upright,
                material::DRAWER_BOX,
            )
            .with_note(dado_note.as_str()),
            // The back sits on the bottom.
            Self::part(
                format!("drawer_{n}_box_back"),
                PartCategory::Internal,
                PartType::DrawerBoxBack,
                [o.x + s, bottom_y + DRAWER_BOTTOM_THICKNESS, o.z + d - s],
                [w - 2.0 * s, h - DRAWER_DADO_OFFSET - DRAWER_BOTTOM_THICKNESS, s],
                upright,
                material::DRAWER_BOX,
            ),
            Self::part(
                format!("drawer_{n}_box_bottom"),
                PartCategory::Internal,
                PartType::DrawerBoxBottom,
                [o.x + s - dado, bottom_y, o.z + s - dado],
                [w - 2.0 * s + 2.0 * dado, DRAWER_BOTTOM_THICKNESS, d - s + dado],
                flat,
                material::DRAWER_BOTTOM,
            )
            .with_note("seated in side and front dados"),
        ];

        if clamped {
            for piece in &mut pieces {
                piece.mark_adjusted("drawer box envelope clamped to internal bounds");
            }
        }
        if let Headroom::Capped(ceiling) = headroom {
            for piece in &mut pieces {
                piece.mark_adjusted(format!("drawer box capped below {ceiling:.4}"));
            }
        }
        for piece in pieces {
            self.insert(piece);
        }
    }
}
