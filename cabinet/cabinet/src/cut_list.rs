//! Cut list grouped by material and thickness.
//!
//! Each part is reduced to a flat blank: its smallest dimension is the
//! stock thickness, the other two are length and width. Blanks of the same
//! material and thickness form one group, which is what a sheet or board
//! nesting step consumes. No packing is done here.

use std::fmt;

use cabinet_types::{Part, PartMap, PartType, TOLERANCE};
use hashbrown::HashMap;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One blank to cut.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutPiece {
    /// Part name.
    pub name: String,
    /// Part type.
    pub part_type: PartType,
    /// Longest dimension.
    pub length: f64,
    /// Middle dimension.
    pub width: f64,
    /// Whether the part carries a miter cut.
    pub mitered: bool,
}

impl CutPiece {
    /// Face area of the blank.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

/// Blanks sharing a material and thickness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutGroup {
    /// Material label.
    pub material: String,
    /// Stock thickness.
    pub thickness: f64,
    /// Blanks, sorted by name.
    pub pieces: Vec<CutPiece>,
}

impl CutGroup {
    /// Number of blanks.
    #[must_use]
    pub fn quantity(&self) -> usize {
        self.pieces.len()
    }

    /// Total face area of every blank.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.pieces.iter().map(CutPiece::area).sum()
    }
}

/// Every blank of a cabinet, grouped for nesting.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutList {
    /// Groups, sorted by material then thickness.
    pub groups: Vec<CutGroup>,
}

/// Thickness bucket: thicknesses within the tolerance share a group.
#[allow(clippy::cast_possible_truncation)]
fn thickness_key(thickness: f64) -> i64 {
    (thickness / TOLERANCE).round() as i64
}

fn blank(part: &Part) -> (f64, CutPiece) {
    let d = part.dimensions();
    let mut dims = [d.x, d.y, d.z];
    dims.sort_by(f64::total_cmp);
    let piece = CutPiece {
        name: part.name().to_string(),
        part_type: part.part_type(),
        length: dims[2],
        width: dims[1],
        mitered: part.miter_cut().is_some(),
    };
    (dims[0], piece)
}

impl CutList {
    /// Group every part by material and thickness.
    #[must_use]
    pub fn from_parts(parts: &PartMap) -> Self {
        let mut groups: HashMap<(String, i64), CutGroup> = HashMap::new();

        for part in parts.values() {
            let (thickness, piece) = blank(part);
            groups
                .entry((part.material().to_string(), thickness_key(thickness)))
                .or_insert_with(|| CutGroup {
                    material: part.material().to_string(),
                    thickness,
                    pieces: Vec::new(),
                })
                .pieces
                .push(piece);
        }

        let mut groups: Vec<CutGroup> = groups.into_values().collect();
        for group in &mut groups {
            group.pieces.sort_by(|a, b| a.name.cmp(&b.name));
        }
        groups.sort_by(|a, b| {
            a.material
                .cmp(&b.material)
                .then(a.thickness.total_cmp(&b.thickness))
        });

        debug!("Cut list: {} parts in {} groups", parts.len(), groups.len());
        Self { groups }
    }

    /// Total number of blanks.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.groups.iter().map(CutGroup::quantity).sum()
    }

    /// Find the group for a material and thickness.
    #[must_use]
    pub fn group(&self, material: &str, thickness: f64) -> Option<&CutGroup> {
        let key = thickness_key(thickness);
        self.groups
            .iter()
            .find(|g| g.material == material && thickness_key(g.thickness) == key)
    }
}

impl fmt::Display for CutList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(
                f,
                "{} {:.4}\": {} piece(s), {:.2} sq in",
                group.material,
                group.thickness,
                group.quantity(),
                group.area()
            )?;
            for piece in &group.pieces {
                let miter = if piece.mitered { " (mitered)" } else { "" };
                writeln!(
                    f,
                    "  {}: {:.4} x {:.4}{miter}",
                    piece.name, piece.length, piece.width
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cabinet_types::{PartCategory, Point3, Vector3};

    fn part(name: &str, dims: [f64; 3], material: &str) -> Part {
        Part::new(
            name,
            PartCategory::Box,
            PartType::CabinetSide,
            Point3::origin(),
            Vector3::new(dims[0], dims[1], dims[2]),
        )
        .with_material(material)
    }

    #[test]
    fn test_groups_by_material_and_thickness() {
        let mut parts = PartMap::new();
        for p in [
            part("left_side", [0.75, 30.25, 22.5], "plywood"),
            part("right_side", [0.75, 30.25, 22.5], "plywood"),
            part("back", [30.0, 30.25, 0.75], "plywood"),
            part("drawer_1_box_bottom", [26.125, 0.25, 20.75], "plywood"),
            part("face_frame_top_rail", [27.0, 1.5, 0.75], "hardwood"),
        ] {
            parts.insert(p.name().to_string(), p);
        }

        let list = CutList::from_parts(&parts);
        assert_eq!(list.groups.len(), 3);
        assert_eq!(list.piece_count(), 5);
        assert_eq!(list.groups[0].material, "hardwood");

        let sheet = list.group("plywood", 0.75).unwrap();
        assert_eq!(sheet.quantity(), 3);
        assert_eq!(sheet.pieces[0].name, "back");
        assert_relative_eq!(sheet.pieces[1].length, 30.25);
        assert_relative_eq!(sheet.pieces[1].width, 22.5);
        assert_relative_eq!(sheet.area(), 30.0 * 30.25 + 2.0 * 30.25 * 22.5);

        assert!(list.group("plywood", 0.25).is_some());
        assert!(list.group("hardwood", 0.25).is_none());
    }

    #[test]
    fn test_display_lists_every_piece() {
        let mut parts = PartMap::new();
        let p = part("bottom", [28.5, 0.75, 22.5], "plywood");
        parts.insert(p.name().to_string(), p);

        let text = CutList::from_parts(&parts).to_string();
        assert!(text.contains("plywood 0.7500\": 1 piece(s)"));
        assert!(text.contains("  bottom: 28.5000 x 22.5000"));
    }
}
