//! Internal bounding box of a cabinet carcass.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::{Point3, Vector3};

/// The axis-aligned region Internal-category parts must stay inside.
///
/// Inside the side panels in X, above the bottom panel and below the box top
/// in Y, behind the face frame and in front of the back panel in Z.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InternalBounds {
    /// Inner face of the left side.
    pub x_min: f64,
    /// Inner face of the right side.
    pub x_max: f64,
    /// Top of the bottom panel.
    pub y_min: f64,
    /// Top of the carcass.
    pub y_max: f64,
    /// Back of the face frame.
    pub z_min: f64,
    /// Front of the back panel.
    pub z_max: f64,
}

/// One of the six faces of a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Edge {
    /// Minimum X.
    Left,
    /// Maximum X.
    Right,
    /// Minimum Y.
    Bottom,
    /// Maximum Y.
    Top,
    /// Minimum Z.
    Front,
    /// Maximum Z.
    Back,
}

impl Edge {
    /// All six edges in check order.
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Bottom,
        Self::Top,
        Self::Front,
        Self::Back,
    ];

    /// Lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl InternalBounds {
    /// Minimum corner.
    #[must_use]
    pub fn min(&self) -> Point3<f64> {
        Point3::new(self.x_min, self.y_min, self.z_min)
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> Point3<f64> {
        Point3::new(self.x_max, self.y_max, self.z_max)
    }

    /// Size along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max() - self.min()
    }

    /// Whether the bounds enclose no volume.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_min >= self.x_max || self.y_min >= self.y_max || self.z_min >= self.z_max
    }

    /// The limit this box places on `edge`.
    #[must_use]
    pub fn limit(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.x_min,
            Edge::Right => self.x_max,
            Edge::Bottom => self.y_min,
            Edge::Top => self.y_max,
            Edge::Front => self.z_min,
            Edge::Back => self.z_max,
        }
    }

    /// Whether a point lies inside, with `tolerance` slack on every face.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>, tolerance: f64) -> bool {
        point.x >= self.x_min - tolerance
            && point.x <= self.x_max + tolerance
            && point.y >= self.y_min - tolerance
            && point.y <= self.y_max + tolerance
            && point.z >= self.z_min - tolerance
            && point.z <= self.z_max + tolerance
    }
}
