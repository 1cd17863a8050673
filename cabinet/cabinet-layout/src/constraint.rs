//! Boundary constraints for Internal-category parts, and part-to-part
//! interference.

use std::fmt;

use cabinet_gates::BoxGate;
use cabinet_types::{CabinetSpec, Edge, InternalBounds, Part, PartCategory, TOLERANCE};
use nalgebra::{Point3, Vector3};
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One edge of one part outside the internal bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundViolation {
    /// Offending part.
    pub part: String,
    /// Which edge.
    pub edge: Edge,
    /// The bound's limit on that edge.
    pub limit: f64,
    /// The part's coordinate on that edge.
    pub actual: f64,
    /// How far past the limit the part reaches.
    pub excess: f64,
}

impl fmt::Display for BoundViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} exceeds the {} bound: {:.4} vs limit {:.4} (by {:.4})",
            self.part, self.edge, self.actual, self.limit, self.excess
        )
    }
}

/// Two solid parts sharing volume.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartOverlap {
    /// First part, by name order.
    pub first: String,
    /// Second part.
    pub second: String,
    /// Size of the shared box along X, Y and Z.
    pub extent: Vector3<f64>,
}

impl PartOverlap {
    /// Volume both parts claim.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.extent.x * self.extent.y * self.extent.z
    }
}

impl fmt::Display for PartOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} overlaps {} by {:.4} x {:.4} x {:.4}",
            self.first, self.second, self.extent.x, self.extent.y, self.extent.z
        )
    }
}

/// Length shared by `[a_min, a_max]` and `[b_min, b_max]`; may be negative.
fn shared(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> f64 {
    a_max.min(b_max) - a_min.max(b_min)
}

/// Whether two parts cover each other in plan (X and Z) by more than the
/// tolerance.
#[must_use]
pub fn footprints_overlap(a: &Part, b: &Part) -> bool {
    let (a0, a1, b0, b1) = (a.position(), a.max(), b.position(), b.max());
    shared(a0.x, a1.x, b0.x, b1.x) > TOLERANCE && shared(a0.z, a1.z, b0.z, b1.z) > TOLERANCE
}

/// The volume two parts share, when it exceeds the tolerance on every axis.
///
/// Parts that only touch along a face are not overlapping.
#[must_use]
pub fn find_overlap(a: &Part, b: &Part) -> Option<PartOverlap> {
    let (a0, a1, b0, b1) = (a.position(), a.max(), b.position(), b.max());
    let extent = Vector3::new(
        shared(a0.x, a1.x, b0.x, b1.x),
        shared(a0.y, a1.y, b0.y, b1.y),
        shared(a0.z, a1.z, b0.z, b1.z),
    );
    if extent.iter().any(|&e| e <= TOLERANCE) {
        return None;
    }
    let (first, second) = if a.name() <= b.name() { (a, b) } else { (b, a) };
    Some(PartOverlap {
        first: first.name().to_string(),
        second: second.name().to_string(),
        extent,
    })
}

/// Compute the internal bounds from the cabinet dimensions and Gate 1.
#[must_use]
pub fn internal_bounds(spec: &CabinetSpec, box_dims: &BoxGate) -> InternalBounds {
    InternalBounds {
        x_min: spec.side_thickness,
        x_max: spec.width - spec.side_thickness,
        y_min: spec.bottom_thickness,
        y_max: box_dims.box_height,
        z_min: box_dims.frame_thickness,
        z_max: spec.depth - spec.back_thickness,
    }
}

/// How far a part reaches past `edge`; positive means outside.
fn excess(part: &Part, bounds: &InternalBounds, edge: Edge) -> (f64, f64) {
    let min = part.position();
    let max = part.max();
    let limit = bounds.limit(edge);
    let actual = match edge {
        Edge::Left => min.x,
        Edge::Right => max.x,
        Edge::Bottom => min.y,
        Edge::Top => max.y,
        Edge::Front => min.z,
        Edge::Back => max.z,
    };
    let over = match edge {
        Edge::Left | Edge::Bottom | Edge::Front => limit - actual,
        Edge::Right | Edge::Top | Edge::Back => actual - limit,
    };
    (actual, over)
}

/// Check all six edges of a part against the bounds.
///
/// Only Internal parts are constrained; other categories never violate.
#[must_use]
pub fn check_bounds(part: &Part, bounds: &InternalBounds) -> Vec<BoundViolation> {
    if part.category() != PartCategory::Internal {
        return Vec::new();
    }

    Edge::ALL
        .iter()
        .filter_map(|&edge| {
            let (actual, over) = excess(part, bounds, edge);
            (over > TOLERANCE).then(|| BoundViolation {
                part: part.name().to_string(),
                edge,
                limit: bounds.limit(edge),
                actual,
                excess: over,
            })
        })
        .collect()
}

/// Fit a position/size pair along one axis into `[min, max]`.
fn clamp_axis(pos: f64, size: f64, min: f64, max: f64) -> (f64, f64) {
    let range = (max - min).max(0.0);
    if size > range {
        (min, range)
    } else {
        (pos.clamp(min, max - size), size)
    }
}

/// Move and if necessary shrink an Internal part to fit the bounds.
///
/// Returns `true` and records the adjustment on the part when anything
/// changed. Other categories are left alone.
pub fn clamp_to_bounds(part: &mut Part, bounds: &InternalBounds) -> bool {
    if part.category() != PartCategory::Internal || check_bounds(part, bounds).is_empty() {
        return false;
    }

    let pos = part.position();
    let dims = part.dimensions();
    let (x, w) = clamp_axis(pos.x, dims.x, bounds.x_min, bounds.x_max);
    let (y, h) = clamp_axis(pos.y, dims.y, bounds.y_min, bounds.y_max);
    let (z, d) = clamp_axis(pos.z, dims.z, bounds.z_min, bounds.z_max);

    warn!(
        "Clamped {} into internal bounds: ({:.4}, {:.4}, {:.4}) {:.4} x {:.4} x {:.4}",
        part.name(),
        x,
        y,
        z,
        w,
        h,
        d
    );

    part.set_position(Point3::new(x, y, z));
    part.set_dimensions(Vector3::new(w, h, d));
    part.mark_adjusted("clamped to internal bounds");
    true
}
