//! The normalized cabinet specification.
//!
//! A [`CabinetSpec`] arrives already defaulted and merged by whatever ingests
//! CAD or user input. It is immutable for the duration of a geometry run.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{InvalidSpec, SpecError};
use crate::standards::{StandardKey, Standards};
use crate::style::{FaceFrameStyle, StyleConfig};

/// Kind of cabinet being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CabinetCategory {
    /// Standard floor-standing base cabinet.
    #[default]
    Base,
    /// Base cabinet housing a sink; no top stretchers.
    SinkBase,
    /// Base cabinet made up entirely of drawers.
    DrawerBase,
    /// Bathroom vanity.
    Vanity,
    /// Bathroom vanity housing a sink.
    VanitySink,
    /// Wall-hung cabinet without a toe kick.
    Wall,
    /// Full-height pantry or utility cabinet.
    Tall,
}

impl CabinetCategory {
    /// Stable snake-case tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::SinkBase => "sink_base",
            Self::DrawerBase => "drawer_base",
            Self::Vanity => "vanity",
            Self::VanitySink => "vanity_sink",
            Self::Wall => "wall",
            Self::Tall => "tall",
        }
    }

    /// Whether the cabinet surrounds a sink: sides run full height and no
    /// stretchers are built.
    #[must_use]
    pub const fn is_sink_base(self) -> bool {
        matches!(self, Self::SinkBase | Self::VanitySink)
    }

    /// Whether the cabinet normally stands on a toe kick.
    #[must_use]
    pub const fn has_toe_kick(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// The three independent carcass assembly rules.
///
/// All eight combinations are valid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssemblyRules {
    /// Sides stand on the bottom panel instead of capturing it.
    pub sides_on_bottom: bool,
    /// The back fits between the sides instead of covering their back edges.
    pub back_inset_from_sides: bool,
    /// Stretchers span the full width on top of the sides.
    pub stretchers_on_top: bool,
}

impl AssemblyRules {
    /// Every combination of the three flags.
    #[must_use]
    pub fn all_combinations() -> [Self; 8] {
        std::array::from_fn(|bits| Self {
            sides_on_bottom: bits & 0b001 != 0,
            back_inset_from_sides: bits & 0b010 != 0,
            stretchers_on_top: bits & 0b100 != 0,
        })
    }
}

/// Which side-panel height Gate 1 reports as the cabinet's side height.
///
/// Both values are always computed; this only selects the headline figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SideHeightConvention {
    /// Sides run the full box height.
    FullHeight,
    /// Sides are shortened by the stretcher thickness.
    #[default]
    Sandwiched,
}

/// A false (non-opening) face, optionally with a structural backing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FalseFront {
    /// Height of the visible face.
    pub face_height: f64,
    /// Whether a backing piece is fitted behind the face.
    pub has_backing: bool,
    /// Backing height; defaults to the face height.
    pub backing_height: Option<f64>,
    /// Backing thickness; defaults to the backing-thickness standard.
    pub backing_thickness: Option<f64>,
}

impl FalseFront {
    /// A false front with a default backing.
    #[must_use]
    pub fn new(face_height: f64) -> Self {
        Self {
            face_height,
            has_backing: true,
            backing_height: None,
            backing_thickness: None,
        }
    }

    /// Remove the backing (builder pattern).
    #[must_use]
    pub fn without_backing(mut self) -> Self {
        self.has_backing = false;
        self
    }

    /// Set the backing size (builder pattern).
    #[must_use]
    pub fn with_backing(mut self, height: f64, thickness: f64) -> Self {
        self.has_backing = true;
        self.backing_height = Some(height);
        self.backing_thickness = Some(thickness);
        self
    }

    /// Resolved backing height.
    #[must_use]
    pub fn resolved_backing_height(&self) -> f64 {
        self.backing_height.unwrap_or(self.face_height)
    }

    /// Resolved backing thickness.
    #[must_use]
    pub fn resolved_backing_thickness(&self, standards: &Standards) -> f64 {
        self.backing_thickness
            .unwrap_or_else(|| standards.get(StandardKey::BackingThickness))
    }
}

/// Drawer slide clearances, resolved from the selected hardware.
///
/// The engine never chooses hardware; it applies these numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawerHardware {
    /// Nominal slide length, which is also the drawer box depth.
    pub slide_length: f64,
    /// Total width deducted from the clear opening for the slides.
    pub side_deduction: f64,
    /// Clearance above the drawer box.
    pub top_clearance: f64,
    /// Clearance below the drawer box.
    pub bottom_clearance: f64,
    /// Total deducted from the face height to get the box height.
    pub height_deduction: f64,
    /// Extra cavity depth required behind the slide.
    pub cavity_clearance: f64,
}

impl Default for DrawerHardware {
    /// 21" full-extension undermount slide.
    fn default() -> Self {
        Self {
            slide_length: 21.0,
            side_deduction: 0.625,
            top_clearance: 0.25,
            bottom_clearance: 0.5625,
            height_deduction: 0.8125,
            cavity_clearance: 0.625,
        }
    }
}

impl DrawerHardware {
    /// Set the slide length (builder pattern).
    #[must_use]
    pub fn with_slide_length(mut self, length: f64) -> Self {
        self.slide_length = length;
        self
    }

    /// Set the side deduction (builder pattern).
    #[must_use]
    pub fn with_side_deduction(mut self, deduction: f64) -> Self {
        self.side_deduction = deduction;
        self
    }

    /// Set the top and bottom clearances (builder pattern).
    ///
    /// The height deduction is left unchanged.
    #[must_use]
    pub fn with_clearances(mut self, top: f64, bottom: f64) -> Self {
        self.top_clearance = top;
        self.bottom_clearance = bottom;
        self
    }

    /// Set the height deduction (builder pattern).
    #[must_use]
    pub fn with_height_deduction(mut self, deduction: f64) -> Self {
        self.height_deduction = deduction;
        self
    }

    /// Set the cavity clearance (builder pattern).
    #[must_use]
    pub fn with_cavity_clearance(mut self, clearance: f64) -> Self {
        self.cavity_clearance = clearance;
        self
    }
}

/// Which cabinet ends get an applied finished panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FinishedEnds {
    /// Panel on the left end.
    pub left: bool,
    /// Panel on the right end.
    pub right: bool,
}

/// Complete input for one cabinet geometry run.
///
/// All lengths are in inches.
///
/// # Example
///
/// ```
/// use cabinet_types::{CabinetCategory, CabinetSpec};
///
/// let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
///     .with_drawers(vec![6.0]);
///
/// assert!(spec.validate().is_ok());
/// assert_eq!(spec.box_height(), 30.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CabinetSpec {
    /// Kind of cabinet.
    pub category: CabinetCategory,
    /// Overall width.
    pub width: f64,
    /// Overall height, floor to top.
    pub height: f64,
    /// Overall depth, frame front to back panel.
    pub depth: f64,
    /// Toe-kick height (0 for none).
    pub toe_kick_height: f64,
    /// Toe-kick setback from the front.
    pub toe_kick_recess: f64,
    /// Side panel thickness.
    pub side_thickness: f64,
    /// Back panel thickness.
    pub back_thickness: f64,
    /// Bottom panel thickness.
    pub bottom_thickness: f64,
    /// Face-frame stile width.
    pub stile_width: f64,
    /// Face-frame rail width.
    pub rail_width: f64,
    /// Face-frame stock thickness.
    pub face_frame_thickness: f64,
    /// Drawer face heights, top to bottom.
    pub drawer_heights: Vec<f64>,
    /// False fronts, top to bottom; stacked above the drawers.
    pub false_fronts: Vec<FalseFront>,
    /// Front construction style.
    pub style: FaceFrameStyle,
    /// Carcass assembly rules.
    pub rules: AssemblyRules,
    /// Applied finished end panels.
    pub finished_ends: FinishedEnds,
    /// Headline side-height convention for Gate 1.
    pub side_height_convention: SideHeightConvention,
    /// Drawer slide clearances.
    pub hardware: DrawerHardware,
    /// Shop standards.
    pub standards: Standards,
}

impl CabinetSpec {
    /// Create a spec with every unspecified value taken from default standards.
    #[must_use]
    pub fn new(category: CabinetCategory, width: f64, height: f64, depth: f64) -> Self {
        Self::from_standards(category, width, height, depth, Standards::new())
    }

    /// Create a spec with every unspecified value taken from `standards`.
    #[must_use]
    pub fn from_standards(
        category: CabinetCategory,
        width: f64,
        height: f64,
        depth: f64,
        standards: Standards,
    ) -> Self {
        use StandardKey as K;

        let (toe_kick_height, toe_kick_recess) = if category.has_toe_kick() {
            (standards.get(K::ToeKickHeight), standards.get(K::ToeKickRecess))
        } else {
            (0.0, 0.0)
        };

        Self {
            category,
            width,
            height,
            depth,
            toe_kick_height,
            toe_kick_recess,
            side_thickness: standards.get(K::SidePanelThickness),
            back_thickness: standards.get(K::BackPanelThickness),
            bottom_thickness: standards.get(K::BottomPanelThickness),
            stile_width: standards.get(K::StileWidth),
            rail_width: standards.get(K::RailWidth),
            face_frame_thickness: standards.get(K::FaceFrameThickness),
            drawer_heights: Vec::new(),
            false_fronts: Vec::new(),
            style: FaceFrameStyle::default(),
            rules: AssemblyRules::default(),
            finished_ends: FinishedEnds::default(),
            side_height_convention: SideHeightConvention::default(),
            hardware: DrawerHardware::default(),
            standards,
        }
    }

    /// Set drawer face heights, top to bottom (builder pattern).
    #[must_use]
    pub fn with_drawers(mut self, heights: Vec<f64>) -> Self {
        self.drawer_heights = heights;
        self
    }

    /// Append a false front below any existing ones (builder pattern).
    #[must_use]
    pub fn with_false_front(mut self, false_front: FalseFront) -> Self {
        self.false_fronts.push(false_front);
        self
    }

    /// Set the front style (builder pattern).
    #[must_use]
    pub fn with_style(mut self, style: FaceFrameStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the assembly rules (builder pattern).
    #[must_use]
    pub fn with_rules(mut self, rules: AssemblyRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the finished ends (builder pattern).
    #[must_use]
    pub fn with_finished_ends(mut self, left: bool, right: bool) -> Self {
        self.finished_ends = FinishedEnds { left, right };
        self
    }

    /// Set the toe kick (builder pattern).
    #[must_use]
    pub fn with_toe_kick(mut self, height: f64, recess: f64) -> Self {
        self.toe_kick_height = height;
        self.toe_kick_recess = recess;
        self
    }

    /// Set the face-frame stock (builder pattern).
    #[must_use]
    pub fn with_face_frame(mut self, stile_width: f64, rail_width: f64, thickness: f64) -> Self {
        self.stile_width = stile_width;
        self.rail_width = rail_width;
        self.face_frame_thickness = thickness;
        self
    }

    /// Set the carcass panel thicknesses (builder pattern).
    #[must_use]
    pub fn with_panels(mut self, side: f64, back: f64, bottom: f64) -> Self {
        self.side_thickness = side;
        self.back_thickness = back;
        self.bottom_thickness = bottom;
        self
    }

    /// Set the drawer hardware (builder pattern).
    #[must_use]
    pub fn with_hardware(mut self, hardware: DrawerHardware) -> Self {
        self.hardware = hardware;
        self
    }

    /// Set the Gate 1 side-height convention (builder pattern).
    #[must_use]
    pub fn with_side_height_convention(mut self, convention: SideHeightConvention) -> Self {
        self.side_height_convention = convention;
        self
    }

    /// Height of the carcass above the toe kick.
    #[must_use]
    pub fn box_height(&self) -> f64 {
        self.height - self.toe_kick_height
    }

    /// Number of drawers.
    #[must_use]
    pub fn drawer_count(&self) -> usize {
        self.drawer_heights.len()
    }

    /// Number of stacked faces: false fronts plus drawers.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.false_fronts.len() + self.drawer_heights.len()
    }

    /// Resolve the front style against this spec's standards.
    #[must_use]
    pub fn style_config(&self) -> StyleConfig {
        StyleConfig::resolve(self.style, &self.standards)
    }

    /// Check every input invariant.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSpec`] listing every problem found.
    pub fn validate(&self) -> Result<(), InvalidSpec> {
        let mut problems = Vec::new();

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("side_thickness", self.side_thickness),
            ("back_thickness", self.back_thickness),
            ("bottom_thickness", self.bottom_thickness),
            ("stile_width", self.stile_width),
            ("rail_width", self.rail_width),
            ("face_frame_thickness", self.face_frame_thickness),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                problems.push(SpecError::NonPositiveDimension { field, value });
            }
        }

        for (field, value) in [
            ("toe_kick_height", self.toe_kick_height),
            ("toe_kick_recess", self.toe_kick_recess),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                problems.push(SpecError::NegativeDimension { field, value });
            }
        }

        if self.height.is_finite()
            && self.toe_kick_height.is_finite()
            && self.box_height() <= 0.0
        {
            problems.push(SpecError::BoxHeightNotPositive {
                height: self.height,
                toe_kick_height: self.toe_kick_height,
            });
        }

        for (index, &value) in self.drawer_heights.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                problems.push(SpecError::NonPositiveDrawerHeight { index, value });
            }
        }

        for (index, front) in self.false_fronts.iter().enumerate() {
            let mut fields = vec![("face_height", front.face_height)];
            if front.has_backing {
                fields.push(("backing_height", front.resolved_backing_height()));
                fields.push((
                    "backing_thickness",
                    front.resolved_backing_thickness(&self.standards),
                ));
            }
            for (field, value) in fields {
                if !(value.is_finite() && value > 0.0) {
                    problems.push(SpecError::NonPositiveFalseFront {
                        index,
                        field,
                        value,
                    });
                }
            }
        }

        for key in StandardKey::ALL {
            let value = self.standards.get(key);
            let (ok, requirement) = if key.is_stock_size() {
                (value > 0.0, "positive")
            } else {
                (value >= 0.0, "non-negative")
            };
            if !ok {
                problems.push(SpecError::InvalidStandard {
                    key,
                    requirement,
                    value,
                });
            }
        }

        let hw = &self.hardware;
        if !(hw.slide_length.is_finite() && hw.slide_length > 0.0) {
            problems.push(SpecError::InvalidHardware {
                field: "slide_length",
                value: hw.slide_length,
            });
        }
        for (field, value) in [
            ("side_deduction", hw.side_deduction),
            ("top_clearance", hw.top_clearance),
            ("bottom_clearance", hw.bottom_clearance),
            ("height_deduction", hw.height_deduction),
            ("cavity_clearance", hw.cavity_clearance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                problems.push(SpecError::InvalidHardware { field, value });
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(InvalidSpec { problems })
        }
    }
}
