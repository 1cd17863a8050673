//! Individual cabinet parts.
//!
//! A [`Part`] is one physical piece with its position, size, orientation and
//! shop notes. Parts never reference each other; relationships are expressed
//! only through shared coordinate values.

use std::collections::BTreeMap;

use nalgebra::{Point2, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All parts of one cabinet, keyed by unique name.
///
/// Ordered so that two runs over the same spec produce identical maps.
pub type PartMap = BTreeMap<String, Part>;

/// Boundary-constraint class of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartCategory {
    /// Defines the carcass envelope.
    Box,
    /// May extend beyond the envelope.
    External,
    /// Must stay inside the internal bounds.
    Internal,
}

/// What a part is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PartType {
    /// Carcass side panel.
    CabinetSide,
    /// Carcass bottom panel.
    CabinetBottom,
    /// Carcass back panel.
    CabinetBack,
    /// Toe-kick board.
    ToeKick,
    /// Face-frame stile.
    FaceFrameStile,
    /// Face-frame top or bottom rail.
    FaceFrameRail,
    /// Face-frame rail between stacked faces.
    FaceFrameMidRail,
    /// Top stretcher.
    Stretcher,
    /// Stretcher carrying a drawer slide.
    DrawerSupport,
    /// Drawer face.
    DrawerFace,
    /// False front face.
    FalseFront,
    /// Structural backing behind a false front.
    FalseFrontBacking,
    /// Drawer box side.
    DrawerBoxSide,
    /// Drawer box front.
    DrawerBoxFront,
    /// Drawer box back.
    DrawerBoxBack,
    /// Drawer box bottom, seated in dados.
    DrawerBoxBottom,
    /// Applied finished end panel.
    FinishedEnd,
}

impl PartType {
    /// Stable snake-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CabinetSide => "cabinet_side",
            Self::CabinetBottom => "cabinet_bottom",
            Self::CabinetBack => "cabinet_back",
            Self::ToeKick => "toe_kick",
            Self::FaceFrameStile => "face_frame_stile",
            Self::FaceFrameRail => "face_frame_rail",
            Self::FaceFrameMidRail => "face_frame_mid_rail",
            Self::Stretcher => "stretcher",
            Self::DrawerSupport => "drawer_support",
            Self::DrawerFace => "drawer_face",
            Self::FalseFront => "false_front",
            Self::FalseFrontBacking => "false_front_backing",
            Self::DrawerBoxSide => "drawer_box_side",
            Self::DrawerBoxFront => "drawer_box_front",
            Self::DrawerBoxBack => "drawer_box_back",
            Self::DrawerBoxBottom => "drawer_box_bottom",
            Self::FinishedEnd => "finished_end",
        }
    }
}

/// Grain direction on the visible face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrainDirection {
    /// Grain runs along Y.
    #[default]
    Vertical,
    /// Grain runs along X or Z.
    Horizontal,
    /// No grain constraint.
    Any,
}

/// Which side of the part faces up on the cutting table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FaceUp {
    /// Show face toward the cabinet front.
    #[default]
    Front,
    /// Show face up.
    Top,
    /// Show face toward the cabinet exterior side.
    Outside,
    /// Show face toward the cabinet interior.
    Inside,
}

/// Orientation and grain of a part.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    /// Rotation about Y in degrees.
    pub rotation: f64,
    /// Grain direction.
    pub grain_direction: GrainDirection,
    /// Face up when cutting.
    pub face_up: FaceUp,
}

impl Orientation {
    /// Create an orientation.
    #[must_use]
    pub const fn new(rotation: f64, grain_direction: GrainDirection, face_up: FaceUp) -> Self {
        Self {
            rotation,
            grain_direction,
            face_up,
        }
    }
}

/// Which triangle of a miter overlap a part gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Territory {
    /// The triangle on the front side of the diagonal.
    FrontTerritory,
    /// The triangle on the back side of the diagonal.
    BackTerritory,
}

/// Start and end of a range along Y.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YRange {
    /// Lower bound.
    pub start: f64,
    /// Upper bound.
    pub end: f64,
}

/// A triangular-prism volume removed from a part to form a miter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MiterCut {
    /// Triangle corners in the X-Z plane.
    pub vertices_xz: [Point2<f64>; 3],
    /// Extrusion range along Y.
    pub y_range: YRange,
    /// Miter angle in degrees.
    pub angle: f64,
    /// Territory removed from this part.
    pub removes: Territory,
}

/// A single cabinet part.
///
/// # Example
///
/// ```
/// use cabinet_types::{Part, PartCategory, PartType, Point3, Vector3};
///
/// let side = Part::new(
///     "left_side",
///     PartCategory::Box,
///     PartType::CabinetSide,
///     Point3::new(0.0, 0.0, 0.75),
///     Vector3::new(0.75, 30.25, 22.5),
/// )
/// .with_material("3/4\" plywood");
///
/// assert_eq!(side.name(), "left_side");
/// assert_eq!(side.max().x, 0.75);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    name: String,
    category: PartCategory,
    part_type: PartType,
    /// Front-bottom-left corner.
    position: Point3<f64>,
    /// Width (X), height (Y), depth (Z).
    dimensions: Vector3<f64>,
    orientation: Orientation,
    material: String,
    machining_notes: Vec<String>,
    miter_cut: Option<MiterCut>,
    /// Reasons this part was moved or resized to satisfy a constraint.
    adjustments: Vec<String>,
}

impl Part {
    /// Create a part with default orientation and no material.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: PartCategory,
        part_type: PartType,
        position: Point3<f64>,
        dimensions: Vector3<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            part_type,
            position,
            dimensions,
            orientation: Orientation::default(),
            material: String::new(),
            machining_notes: Vec::new(),
            miter_cut: None,
            adjustments: Vec::new(),
        }
    }

    /// Get the part name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the constraint category.
    #[must_use]
    pub fn category(&self) -> PartCategory {
        self.category
    }

    /// Get the part type.
    #[must_use]
    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    /// Get the front-bottom-left corner.
    #[must_use]
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Get the size as (width, height, depth).
    #[must_use]
    pub fn dimensions(&self) -> Vector3<f64> {
        self.dimensions
    }

    /// Size along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Size along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Size along Z.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Back-top-right corner.
    #[must_use]
    pub fn max(&self) -> Point3<f64> {
        self.position + self.dimensions
    }

    /// Geometric center.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        self.position + self.dimensions * 0.5
    }

    /// Get the orientation.
    #[must_use]
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Get the material label.
    #[must_use]
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Get the machining notes.
    #[must_use]
    pub fn machining_notes(&self) -> &[String] {
        &self.machining_notes
    }

    /// Get the miter cut, if any.
    #[must_use]
    pub fn miter_cut(&self) -> Option<&MiterCut> {
        self.miter_cut.as_ref()
    }

    /// Get the constraint adjustments applied to this part.
    #[must_use]
    pub fn adjustments(&self) -> &[String] {
        &self.adjustments
    }

    /// Whether the placement was corrected to satisfy a constraint.
    #[must_use]
    pub fn constraint_applied(&self) -> bool {
        !self.adjustments.is_empty()
    }

    /// Set the orientation (builder pattern).
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the material label (builder pattern).
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    /// Add a machining note (builder pattern).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.machining_notes.push(note.into());
        self
    }

    /// Add a machining note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.machining_notes.push(note.into());
    }

    /// Move the part.
    pub fn set_position(&mut self, position: Point3<f64>) {
        self.position = position;
    }

    /// Resize the part.
    pub fn set_dimensions(&mut self, dimensions: Vector3<f64>) {
        self.dimensions = dimensions;
    }

    /// Attach a miter cut.
    pub fn set_miter_cut(&mut self, cut: MiterCut) {
        self.miter_cut = Some(cut);
    }

    /// Record that the placement was corrected.
    pub fn mark_adjusted(&mut self, reason: impl Into<String>) {
        self.adjustments.push(reason.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn panel() -> Part {
        Part::new(
            "bottom",
            PartCategory::Box,
            PartType::CabinetBottom,
            Point3::new(0.75, 0.0, 0.75),
            Vector3::new(28.5, 0.75, 22.5),
        )
    }

    #[test]
    fn test_part_extent() {
        let part = panel();
        assert_relative_eq!(part.max().x, 29.25);
        assert_relative_eq!(part.max().z, 23.25);
        assert_relative_eq!(part.centroid().y, 0.375);
        assert_relative_eq!(part.width(), 28.5);
    }

    #[test]
    fn test_part_builder() {
        let part = panel()
            .with_material("3/4\" plywood")
            .with_note("edge band front")
            .with_orientation(Orientation::new(
                90.0,
                GrainDirection::Horizontal,
                FaceUp::Top,
            ));

        assert_eq!(part.material(), "3/4\" plywood");
        assert_eq!(part.machining_notes(), ["edge band front"]);
        assert_eq!(part.orientation().face_up, FaceUp::Top);
        assert!(part.miter_cut().is_none());
    }

    #[test]
    fn test_adjustment_marker() {
        let mut part = panel();
        assert!(!part.constraint_applied());

        part.set_position(Point3::new(0.75, 0.75, 0.75));
        part.mark_adjusted("raised above bottom panel");
        assert!(part.constraint_applied());
        assert_eq!(part.adjustments().len(), 1);
    }

    #[test]
    fn test_part_type_labels() {
        assert_eq!(PartType::FalseFrontBacking.label(), "false_front_backing");
        assert_eq!(PartType::DrawerBoxSide.label(), "drawer_box_side");
    }
}
