//! 45° miter joints between parts that overlap in plan.
//!
//! Works on any two parts. The overlap of their X-Z footprints is split along
//! a diagonal; the part nearer the front keeps the front triangle and the
//! other keeps the back triangle. Each part records the triangle it loses.

use cabinet_types::{MiterCut, Part, PartMap, Point2, Territory, YRange};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Miter angle in degrees.
pub const MITER_ANGLE: f64 = 45.0;

/// Which outside corner the joint forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Corner {
    /// Diagonal runs from (x_min, z_min) to (x_max, z_max).
    Left,
    /// Diagonal runs from (x_max, z_min) to (x_min, z_max).
    Right,
}

/// Cuts for both parts of a mitered pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MiterJoint {
    /// Resolved corner.
    pub corner: Corner,
    /// Whether the first part given is the front part.
    pub first_is_front: bool,
    /// Cut for the first part.
    pub first: MiterCut,
    /// Cut for the second part.
    pub second: MiterCut,
}

/// Overlap rectangle in X-Z plus the shared Y range.
#[derive(Debug, Clone, Copy)]
struct Overlap {
    x_min: f64,
    x_max: f64,
    z_min: f64,
    z_max: f64,
    y: YRange,
}

fn overlap(a: &Part, b: &Part) -> Option<Overlap> {
    let (a_min, a_max) = (a.position(), a.max());
    let (b_min, b_max) = (b.position(), b.max());

    let x_min = a_min.x.max(b_min.x);
    let x_max = a_max.x.min(b_max.x);
    let z_min = a_min.z.max(b_min.z);
    let z_max = a_max.z.min(b_max.z);
    if x_max <= x_min || z_max <= z_min {
        return None;
    }

    Some(Overlap {
        x_min,
        x_max,
        z_min,
        z_max,
        y: YRange {
            start: a_min.y.max(b_min.y),
            end: a_max.y.min(b_max.y),
        },
    })
}

/// Front-side and back-side triangles of the overlap for a corner.
fn triangles(o: &Overlap, corner: Corner) -> ([Point2<f64>; 3], [Point2<f64>; 3]) {
    let p = Point2::new;
    match corner {
        Corner::Left => (
            [p(o.x_min, o.z_min), p(o.x_max, o.z_min), p(o.x_max, o.z_max)],
            [p(o.x_min, o.z_min), p(o.x_min, o.z_max), p(o.x_max, o.z_max)],
        ),
        Corner::Right => (
            [p(o.x_max, o.z_min), p(o.x_min, o.z_min), p(o.x_min, o.z_max)],
            [p(o.x_max, o.z_min), p(o.x_max, o.z_max), p(o.x_min, o.z_max)],
        ),
    }
}

/// Compute the miter between two parts.
///
/// `corner` forces the corner side; with `None` it is detected from where
/// the overlap sits relative to the parts' average X centroid. Returns
/// `None` when the footprints do not overlap.
///
/// # Example
///
/// ```
/// use cabinet_layout::{Corner, compute_miter};
/// use cabinet_types::{Part, PartCategory, PartType, Point3, Territory, Vector3};
///
/// let end = Part::new(
///     "finished_end_left",
///     PartCategory::External,
///     PartType::FinishedEnd,
///     Point3::new(-0.75, 0.0, 0.0),
///     Vector3::new(0.75, 30.0, 24.0),
/// );
/// let stile = Part::new(
///     "face_frame_left_stile",
///     PartCategory::External,
///     PartType::FaceFrameStile,
///     Point3::new(-0.75, 0.0, 0.0),
///     Vector3::new(2.25, 30.0, 0.75),
/// );
///
/// let joint = compute_miter(&stile, &end, None).unwrap();
/// assert_eq!(joint.corner, Corner::Left);
/// assert_eq!(joint.first.removes, Territory::BackTerritory);
/// assert_eq!(joint.second.removes, Territory::FrontTerritory);
/// ```
#[must_use]
pub fn compute_miter(a: &Part, b: &Part, corner: Option<Corner>) -> Option<MiterJoint> {
    let o = overlap(a, b)?;

    let first_is_front = a.centroid().z <= b.centroid().z;

    let corner = corner.unwrap_or_else(|| {
        let mid_x = (o.x_min + o.x_max) / 2.0;
        let avg_x = (a.centroid().x + b.centroid().x) / 2.0;
        if mid_x <= avg_x {
            Corner::Left
        } else {
            Corner::Right
        }
    });

    let (front_tri, back_tri) = triangles(&o, corner);
    let front_cut = MiterCut {
        vertices_xz: back_tri,
        y_range: o.y,
        angle: MITER_ANGLE,
        removes: Territory::BackTerritory,
    };
    let back_cut = MiterCut {
        vertices_xz: front_tri,
        y_range: o.y,
        angle: MITER_ANGLE,
        removes: Territory::FrontTerritory,
    };

    let (first, second) = if first_is_front {
        (front_cut, back_cut)
    } else {
        (back_cut, front_cut)
    };

    Some(MiterJoint {
        corner,
        first_is_front,
        first,
        second,
    })
}

/// Miter two named parts in a map, attaching one cut to each.
///
/// Returns the joint, or `None` when either part is missing or they do not
/// overlap (in which case nothing is changed).
pub fn apply_miter(
    parts: &mut PartMap,
    first: &str,
    second: &str,
    corner: Option<Corner>,
) -> Option<MiterJoint> {
    let joint = compute_miter(parts.get(first)?, parts.get(second)?, corner)?;

    for (name, cut) in [(first, joint.first), (second, joint.second)] {
        if let Some(part) = parts.get_mut(name) {
            part.set_miter_cut(cut);
            part.add_note(format!("{MITER_ANGLE}° miter, removes {:?}", cut.removes));
        }
    }

    debug!(
        "Mitered {} / {} ({:?} corner, front: {})",
        first,
        second,
        joint.corner,
        if joint.first_is_front { first } else { second }
    );

    Some(joint)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cabinet_types::{PartCategory, PartType, Point3, Vector3};

    fn part(name: &str, pos: [f64; 3], dims: [f64; 3]) -> Part {
        Part::new(
            name,
            PartCategory::External,
            PartType::FinishedEnd,
            Point3::new(pos[0], pos[1], pos[2]),
            Vector3::new(dims[0], dims[1], dims[2]),
        )
    }

    #[test]
    fn test_front_part_loses_back_triangle() {
        // Thin panel in front, deep stile behind it, overlapping on the left.
        let front = part("end", [0.0, 0.0, 0.0], [2.0, 30.0, 1.0]);
        let back = part("stile", [0.0, 5.0, 0.0], [1.0, 20.0, 10.0]);

        let joint = compute_miter(&front, &back, Some(Corner::Left)).unwrap();
        assert!(joint.first_is_front);
        assert_eq!(joint.first.removes, Territory::BackTerritory);
        assert_eq!(joint.second.removes, Territory::FrontTerritory);

        // overlap x [0,1], z [0,1]; back triangle of a left corner
        let v = joint.first.vertices_xz;
        assert_relative_eq!(v[1].x, 0.0);
        assert_relative_eq!(v[1].y, 1.0);
        assert_relative_eq!(joint.first.y_range.start, 5.0);
        assert_relative_eq!(joint.first.y_range.end, 25.0);
        assert_relative_eq!(joint.first.angle, 45.0);
    }

    #[test]
    fn test_order_of_arguments_does_not_matter() {
        let front = part("end", [0.0, 0.0, 0.0], [2.0, 30.0, 1.0]);
        let back = part("stile", [0.0, 0.0, 0.0], [1.0, 30.0, 10.0]);

        let ab = compute_miter(&front, &back, None).unwrap();
        let ba = compute_miter(&back, &front, None).unwrap();
        assert_eq!(ab.first, ba.second);
        assert_eq!(ab.second, ba.first);
        assert!(!ba.first_is_front);
    }

    #[test]
    fn test_corner_detection() {
        // Overlap at the far right of the pair.
        let front = part("stile", [28.0, 0.0, 0.0], [3.0, 30.0, 1.0]);
        let back = part("end", [30.0, 0.0, 0.0], [1.0, 30.0, 24.0]);
        let joint = compute_miter(&front, &back, None).unwrap();
        assert_eq!(joint.corner, Corner::Right);

        // right diagonal starts at (x_max, z_min)
        assert_relative_eq!(joint.second.vertices_xz[0].x, 31.0);
        assert_relative_eq!(joint.second.vertices_xz[0].y, 0.0);
    }

    #[test]
    fn test_no_overlap_no_miter() {
        let a = part("a", [0.0, 0.0, 0.0], [1.0, 30.0, 1.0]);
        let b = part("b", [5.0, 0.0, 0.0], [1.0, 30.0, 1.0]);
        assert!(compute_miter(&a, &b, None).is_none());

        // touching edges only
        let c = part("c", [1.0, 0.0, 0.0], [1.0, 30.0, 1.0]);
        assert!(compute_miter(&a, &c, None).is_none());
    }

    #[test]
    fn test_apply_attaches_one_cut_each() {
        let mut parts = PartMap::new();
        parts.insert("end".into(), part("end", [-0.75, 0.0, 0.0], [0.75, 30.0, 24.0]));
        parts.insert("stile".into(), part("stile", [-0.75, 0.0, 0.0], [2.25, 30.0, 0.75]));
        parts.insert("far".into(), part("far", [40.0, 0.0, 0.0], [1.0, 30.0, 1.0]));

        assert!(apply_miter(&mut parts, "stile", "end", None).is_some());
        assert_eq!(
            parts["stile"].miter_cut().map(|c| c.removes),
            Some(Territory::BackTerritory)
        );
        assert_eq!(
            parts["end"].miter_cut().map(|c| c.removes),
            Some(Territory::FrontTerritory)
        );

        assert!(apply_miter(&mut parts, "stile", "far", None).is_none());
        assert!(parts["far"].miter_cut().is_none());
        assert!(apply_miter(&mut parts, "stile", "missing", None).is_none());
    }
}
