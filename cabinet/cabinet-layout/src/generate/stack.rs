//! Stacked faces, mid rails and false-front backings.
//!
//! Faces are placed top-down from the style's stack top. No face bottom may
//! drop below the stack floor; a face that would is shortened and marked.
//! A backing keeps its bottom level with the face and is cut short under
//! the front stretcher.

use cabinet_gates::ComponentKind;
use cabinet_types::{
    FaceUp, GrainDirection, Orientation, PartCategory, PartType, StandardKey, TOLERANCE,
};
use tracing::warn;

use super::{PartGenerator, material};

/// Vertical extent of one placed face.
#[derive(Debug, Clone, Copy)]
struct PlacedFace {
    kind: ComponentKind,
    top: f64,
    bottom: f64,
    raised: bool,
}

/// Running top edge of the next face, moving down.
#[derive(Debug, Clone, Copy)]
struct StackCursor {
    y: f64,
}

/// Name of the face part for a component.
pub(super) fn face_name(kind: ComponentKind) -> String {
    match kind {
        ComponentKind::FalseFront(i) => format!("false_front_{}", i + 1),
        ComponentKind::Drawer(i) => format!("drawer_face_{}", i + 1),
    }
}

impl PartGenerator<'_> {
    fn stack_faces(&self) -> Vec<PlacedFace> {
        let gates = self.gates;
        let rail = gates.opening.rail_width;
        let floor = self.style.stack_floor(rail);
        let gap = gates.components.gap;
        let start = StackCursor {
            y: self.style.stack_top(gates.box_dims.box_height, rail),
        };

        let (faces, _) = gates.components.slots.iter().fold(
            (Vec::with_capacity(gates.components.slots.len()), start),
            |(mut faces, cursor), slot| {
                let top = cursor.y;
                let natural = top - slot.height;
                let raised = natural < floor - TOLERANCE;
                let bottom = if raised { floor } else { natural };
                faces.push(PlacedFace {
                    kind: slot.kind,
                    top,
                    bottom,
                    raised,
                });
                (faces, StackCursor { y: bottom - gap })
            },
        );
        faces
    }

    pub(super) fn place_stack(&mut self) {
        let spec = self.spec;
        let gates = self.gates;
        let style = self.style;
        let rail = gates.opening.rail_width;
        let floor = style.stack_floor(rail);
        let fz = gates.box_dims.frame_thickness;
        let face_thickness = spec.standards.get(StandardKey::FaceThickness);
        let span = style.face_span(spec.width, spec.stile_width, gates.opening.opening_width);
        let face_z = style.face_z(face_thickness);
        let face_orientation = Orientation::new(90.0, GrainDirection::Horizontal, FaceUp::Front);

        let faces = self.stack_faces();
        let mut placed = Vec::with_capacity(faces.len());

        for face in &faces {
            let name = face_name(face.kind);
            let height = face.top - face.bottom;
            if height <= TOLERANCE {
                warn!("No room left for {} above the stack floor {}", name, floor);
                continue;
            }

            let part_type = match face.kind {
                ComponentKind::FalseFront(_) => PartType::FalseFront,
                ComponentKind::Drawer(_) => PartType::DrawerFace,
            };
            let mut part = Self::part(
                name.as_str(),
                PartCategory::External,
                part_type,
                [span.x, face.bottom, face_z],
                [span.width, height, face_thickness],
                face_orientation,
                material::HARDWOOD,
            );
            if face.raised {
                warn!(
                    "{} bottom raised to stack floor {:.4}; face shortened to {:.4}",
                    name, floor, height
                );
                part.mark_adjusted(format!("bottom raised to stack floor {floor:.4}"));
            }
            self.insert(part);
            placed.push(*face);
        }

        if style.has_mid_rails {
            let frame = &gates.face_frame;
            for (i, pair) in placed.windows(2).enumerate() {
                let center = (pair[0].bottom + pair[1].top) / 2.0;
                let mid_rail = Self::part(
                    format!("face_frame_mid_rail_{}", i + 1),
                    PartCategory::External,
                    PartType::FaceFrameMidRail,
                    [gates.opening.stile_width, center - rail / 2.0, 0.0],
                    [frame.rail_length, rail, fz],
                    face_orientation,
                    material::HARDWOOD,
                );
                self.insert(mid_rail);
            }
        }

        self.place_backings(&placed);
    }

    fn place_backings(&mut self, placed: &[PlacedFace]) {
        let spec = self.spec;
        let gates = self.gates;
        let fz = gates.box_dims.frame_thickness;
        let has_stretchers = gates.stretchers.count > 0;
        let stretcher_bottom = gates.box_dims.box_height - gates.stretchers.thickness;

        for face in placed {
            let ComponentKind::FalseFront(index) = face.kind else {
                continue;
            };
            let Some(descriptor) = spec.false_fronts.get(index) else {
                continue;
            };
            if !descriptor.has_backing {
                continue;
            }

            let name = format!("false_front_{}_backing", index + 1);
            let height = descriptor.resolved_backing_height();
            let thickness = descriptor.resolved_backing_thickness(&spec.standards);
            let bottom = face.top - height;
            let top = if has_stretchers {
                face.top.min(stretcher_bottom)
            } else {
                face.top
            };
            if top - bottom <= TOLERANCE {
                warn!(
                    "{} has no room below the front stretcher at {:.4}; not generated",
                    name, stretcher_bottom
                );
                continue;
            }

            let mut part = Self::part(
                name.as_str(),
                PartCategory::Internal,
                PartType::FalseFrontBacking,
                [spec.side_thickness, bottom, fz],
                [gates.box_dims.inside_width, top - bottom, thickness],
                Orientation::new(90.0, GrainDirection::Horizontal, FaceUp::Front),
                material::CARCASS,
            )
            .with_note("doubles as a stretcher");

            if top < face.top - TOLERANCE {
                warn!(
                    "{} collides with the front stretcher; trimmed to {:.4}",
                    name,
                    top - bottom
                );
                part.mark_adjusted(format!(
                    "trimmed below front stretcher at {stretcher_bottom:.4}"
                ));
            }
            self.insert(part);
        }
    }
}
