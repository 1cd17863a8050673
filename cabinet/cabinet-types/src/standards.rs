//! Shop standards: named construction constants with built-in fallbacks.
//!
//! A [`Standards`] bundle is supplied by whatever resolves shop or customer
//! preferences. Every lookup falls back to a hard-coded default, so a missing
//! override can never stop a geometry run.

use hashbrown::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::StandardsError;

/// Name of every construction constant the engine reads.
///
/// All values are in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StandardKey {
    /// Toe-kick height below the carcass.
    ToeKickHeight,
    /// Toe-kick setback from the cabinet front.
    ToeKickRecess,
    /// Face-frame stile width.
    StileWidth,
    /// Face-frame rail width.
    RailWidth,
    /// Face-frame stock thickness.
    FaceFrameThickness,
    /// Front-to-back depth of a stretcher.
    StretcherDepth,
    /// Stretcher stock thickness.
    StretcherThickness,
    /// Side panel thickness.
    SidePanelThickness,
    /// Back panel thickness.
    BackPanelThickness,
    /// Bottom panel thickness.
    BottomPanelThickness,
    /// Gap left between the cabinet back and the wall; finished ends extend
    /// into it as scribe allowance.
    BackWallGap,
    /// Vertical gap between stacked faces.
    ComponentGap,
    /// Drawer face and false front stock thickness.
    FaceThickness,
    /// Thickness of an applied finished end panel.
    FinishedEndThickness,
    /// Air gap between a finished end panel and the side it covers.
    FinishedEndGap,
    /// Default thickness of a false-front backing.
    BackingThickness,
    /// Amount a stack may overflow its opening before it is an error.
    OverlayTolerance,
    /// Frameless edge reveal.
    FramelessRevealGap,
    /// Frameless bottom reveal.
    FramelessBottomReveal,
    /// Face-frame style reveal.
    FaceFrameRevealGap,
    /// Face-frame style bottom reveal.
    FaceFrameBottomReveal,
    /// Full-overlay amount over stiles and rails.
    FullOverlayAmount,
    /// Full-overlay reveal between faces.
    FullOverlayRevealGap,
    /// Full-overlay bottom reveal.
    FullOverlayBottomReveal,
    /// Inset reveal around each face.
    InsetRevealGap,
    /// Inset bottom reveal.
    InsetBottomReveal,
    /// Partial-overlay amount over stiles and rails.
    PartialOverlayAmount,
    /// Partial-overlay reveal between faces.
    PartialOverlayRevealGap,
    /// Partial-overlay bottom reveal.
    PartialOverlayBottomReveal,
}

impl StandardKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 29] = [
        Self::ToeKickHeight,
        Self::ToeKickRecess,
        Self::StileWidth,
        Self::RailWidth,
        Self::FaceFrameThickness,
        Self::StretcherDepth,
        Self::StretcherThickness,
        Self::SidePanelThickness,
        Self::BackPanelThickness,
        Self::BottomPanelThickness,
        Self::BackWallGap,
        Self::ComponentGap,
        Self::FaceThickness,
        Self::FinishedEndThickness,
        Self::FinishedEndGap,
        Self::BackingThickness,
        Self::OverlayTolerance,
        Self::FramelessRevealGap,
        Self::FramelessBottomReveal,
        Self::FaceFrameRevealGap,
        Self::FaceFrameBottomReveal,
        Self::FullOverlayAmount,
        Self::FullOverlayRevealGap,
        Self::FullOverlayBottomReveal,
        Self::InsetRevealGap,
        Self::InsetBottomReveal,
        Self::PartialOverlayAmount,
        Self::PartialOverlayRevealGap,
        Self::PartialOverlayBottomReveal,
    ];

    /// Stable snake-case name used by configuration sources.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToeKickHeight => "toe_kick_height",
            Self::ToeKickRecess => "toe_kick_recess",
            Self::StileWidth => "stile_width",
            Self::RailWidth => "rail_width",
            Self::FaceFrameThickness => "face_frame_thickness",
            Self::StretcherDepth => "stretcher_depth",
            Self::StretcherThickness => "stretcher_thickness",
            Self::SidePanelThickness => "side_panel_thickness",
            Self::BackPanelThickness => "back_panel_thickness",
            Self::BottomPanelThickness => "bottom_panel_thickness",
            Self::BackWallGap => "back_wall_gap",
            Self::ComponentGap => "component_gap",
            Self::FaceThickness => "face_thickness",
            Self::FinishedEndThickness => "finished_end_thickness",
            Self::FinishedEndGap => "finished_end_gap",
            Self::BackingThickness => "backing_thickness",
            Self::OverlayTolerance => "overlay_tolerance",
            Self::FramelessRevealGap => "frameless_reveal_gap",
            Self::FramelessBottomReveal => "frameless_bottom_reveal",
            Self::FaceFrameRevealGap => "face_frame_reveal_gap",
            Self::FaceFrameBottomReveal => "face_frame_bottom_reveal",
            Self::FullOverlayAmount => "full_overlay_amount",
            Self::FullOverlayRevealGap => "full_overlay_reveal_gap",
            Self::FullOverlayBottomReveal => "full_overlay_bottom_reveal",
            Self::InsetRevealGap => "inset_reveal_gap",
            Self::InsetBottomReveal => "inset_bottom_reveal",
            Self::PartialOverlayAmount => "partial_overlay_amount",
            Self::PartialOverlayRevealGap => "partial_overlay_reveal_gap",
            Self::PartialOverlayBottomReveal => "partial_overlay_bottom_reveal",
        }
    }

    /// Hard-coded fallback used when no override exists.
    #[must_use]
    pub const fn default_value(self) -> f64 {
        match self {
            Self::ToeKickHeight => 4.5,
            Self::ToeKickRecess => 3.0,
            Self::StileWidth | Self::RailWidth => 1.5,
            Self::FaceFrameThickness
            | Self::StretcherThickness
            | Self::SidePanelThickness
            | Self::BackPanelThickness
            | Self::BottomPanelThickness
            | Self::FaceThickness
            | Self::FinishedEndThickness
            | Self::BackingThickness => 0.75,
            Self::StretcherDepth => 3.5,
            Self::BackWallGap | Self::OverlayTolerance => 0.5,
            Self::ComponentGap
            | Self::FaceFrameRevealGap
            | Self::FaceFrameBottomReveal
            | Self::FullOverlayRevealGap
            | Self::FullOverlayBottomReveal
            | Self::PartialOverlayRevealGap
            | Self::PartialOverlayBottomReveal => 0.125,
            Self::FinishedEndGap => 0.0,
            Self::FramelessRevealGap
            | Self::FramelessBottomReveal
            | Self::InsetRevealGap
            | Self::InsetBottomReveal => 0.0625,
            Self::FullOverlayAmount => 1.25,
            Self::PartialOverlayAmount => 0.375,
        }
    }

    /// Whether the value is a stock size that must be strictly positive.
    ///
    /// Gaps, reveals, overlays, tolerances and toe-kick values may be zero.
    #[must_use]
    pub const fn is_stock_size(self) -> bool {
        matches!(
            self,
            Self::StileWidth
                | Self::RailWidth
                | Self::FaceFrameThickness
                | Self::StretcherDepth
                | Self::StretcherThickness
                | Self::SidePanelThickness
                | Self::BackPanelThickness
                | Self::BottomPanelThickness
                | Self::FaceThickness
                | Self::FinishedEndThickness
                | Self::BackingThickness
        )
    }

    /// Look a key up by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// A bundle of construction constants with fallback defaults.
///
/// # Example
///
/// ```
/// use cabinet_types::{StandardKey, Standards};
///
/// let standards = Standards::new().with(StandardKey::StileWidth, 2.0);
///
/// assert_eq!(standards.get(StandardKey::StileWidth), 2.0);
/// // Keys without an override fall back to the built-in default.
/// assert_eq!(standards.get(StandardKey::RailWidth), 1.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Standards {
    overrides: HashMap<StandardKey, f64>,
}

impl Standards {
    /// Create a bundle with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a constant, falling back to its default.
    #[must_use]
    pub fn get(&self, key: StandardKey) -> f64 {
        self.overrides
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_value())
    }

    /// Whether an override is present for `key`.
    #[must_use]
    pub fn is_overridden(&self, key: StandardKey) -> bool {
        self.overrides.contains_key(&key)
    }

    /// Set an override (builder pattern).
    ///
    /// Non-finite values are ignored so the fallback stays in effect.
    #[must_use]
    pub fn with(mut self, key: StandardKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Set an override in place. Non-finite values are ignored.
    pub fn set(&mut self, key: StandardKey, value: f64) {
        if value.is_finite() {
            self.overrides.insert(key, value);
        }
    }

    /// Remove an override, restoring the default.
    pub fn clear(&mut self, key: StandardKey) {
        self.overrides.remove(&key);
    }

    /// Set an override from a configuration name (builder pattern).
    ///
    /// # Errors
    ///
    /// Returns [`StandardsError::UnknownKey`] if no constant has this name, or
    /// [`StandardsError::NonFinite`] for NaN or infinite values.
    pub fn try_with_named(mut self, name: &str, value: f64) -> Result<Self, StandardsError> {
        let key = StandardKey::from_name(name).ok_or_else(|| StandardsError::UnknownKey {
            name: name.to_string(),
        })?;
        if !value.is_finite() {
            return Err(StandardsError::NonFinite {
                name: name.to_string(),
                value,
            });
        }
        self.overrides.insert(key, value);
        Ok(self)
    }

    /// Overrides in key order.
    #[must_use]
    pub fn overrides(&self) -> Vec<(StandardKey, f64)> {
        let mut entries: Vec<_> = self.overrides.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(key, _)| *key);
        entries
    }
}
