//! Face-frame style resolution.
//!
//! A [`FaceFrameStyle`] tag resolves once into a [`StyleConfig`]. Placement
//! code reads the config and the [`FacePosition`] formula family; it never
//! branches on the style tag itself.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::standards::{StandardKey, Standards};

/// Construction style of the cabinet front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FaceFrameStyle {
    /// No stiles or rails; faces cover the box edges.
    Frameless,
    /// Full frame; faces fill the openings between rails.
    #[default]
    FaceFrame,
    /// Stiles and outer rails; faces overlay the frame by a large amount.
    FullOverlay,
    /// Full frame; faces recessed flush inside the openings.
    Inset,
    /// Full frame; faces partially overlay stiles and rails.
    PartialOverlay,
}

impl FaceFrameStyle {
    /// Every style.
    pub const ALL: [Self; 5] = [
        Self::Frameless,
        Self::FaceFrame,
        Self::FullOverlay,
        Self::Inset,
        Self::PartialOverlay,
    ];

    /// Stable snake-case tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Frameless => "frameless",
            Self::FaceFrame => "face_frame",
            Self::FullOverlay => "full_overlay",
            Self::Inset => "inset",
            Self::PartialOverlay => "partial_overlay",
        }
    }

    /// Parse a style tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.tag() == tag)
    }
}

/// How a face is positioned relative to the frame opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FacePosition {
    /// Covers the box edge to edge, less the reveal.
    Flush,
    /// Spans exactly the frame opening, applied in front of the frame.
    Inside,
    /// Spans the opening plus the overlay on each side.
    Overlay,
    /// Sits within the opening, less the reveal, flush with the frame front.
    Inset,
}

/// Everything placement needs to know about a face-frame style.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleConfig {
    /// The style this config was resolved from.
    pub style: FaceFrameStyle,
    /// Whether stiles are built.
    pub has_stiles: bool,
    /// Whether top and bottom rails are built.
    pub has_rails: bool,
    /// Whether mid rails separate stacked faces.
    pub has_mid_rails: bool,
    /// Face placement mode.
    pub face_position: FacePosition,
    /// Overlay of faces onto the frame.
    pub overlay_amount: f64,
    /// Edge and top reveal.
    pub reveal_gap: f64,
    /// Minimum reveal under the bottom face.
    pub bottom_reveal: f64,
}

/// Horizontal placement of a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSpan {
    /// Left edge.
    pub x: f64,
    /// Width.
    pub width: f64,
}

impl StyleConfig {
    /// Resolve a style tag into its configuration.
    #[must_use]
    pub fn resolve(style: FaceFrameStyle, standards: &Standards) -> Self {
        use StandardKey as K;

        let (has_stiles, has_rails, has_mid_rails, face_position, overlay, reveal, bottom) =
            match style {
                FaceFrameStyle::Frameless => (
                    false,
                    false,
                    false,
                    FacePosition::Flush,
                    0.0,
                    standards.get(K::FramelessRevealGap),
                    standards.get(K::FramelessBottomReveal),
                ),
                FaceFrameStyle::FaceFrame => (
                    true,
                    true,
                    true,
                    FacePosition::Inside,
                    0.0,
                    standards.get(K::FaceFrameRevealGap),
                    standards.get(K::FaceFrameBottomReveal),
                ),
                FaceFrameStyle::FullOverlay => (
                    true,
                    true,
                    false,
                    FacePosition::Overlay,
                    standards.get(K::FullOverlayAmount),
                    standards.get(K::FullOverlayRevealGap),
                    standards.get(K::FullOverlayBottomReveal),
                ),
                FaceFrameStyle::Inset => (
                    true,
                    true,
                    true,
                    FacePosition::Inset,
                    0.0,
                    standards.get(K::InsetRevealGap),
                    standards.get(K::InsetBottomReveal),
                ),
                FaceFrameStyle::PartialOverlay => (
                    true,
                    true,
                    true,
                    FacePosition::Overlay,
                    standards.get(K::PartialOverlayAmount),
                    standards.get(K::PartialOverlayRevealGap),
                    standards.get(K::PartialOverlayBottomReveal),
                ),
            };

        Self {
            style,
            has_stiles,
            has_rails,
            has_mid_rails,
            face_position,
            overlay_amount: overlay,
            reveal_gap: reveal,
            bottom_reveal: bottom,
        }
    }

    /// Stile width that actually exists for this style.
    #[must_use]
    pub fn stile_width(&self, stile_width: f64) -> f64 {
        if self.has_stiles { stile_width } else { 0.0 }
    }

    /// Rail width that actually exists for this style.
    #[must_use]
    pub fn rail_width(&self, rail_width: f64) -> f64 {
        if self.has_rails { rail_width } else { 0.0 }
    }

    /// Face-frame depth in front of the carcass.
    #[must_use]
    pub fn frame_thickness(&self, face_frame_thickness: f64) -> f64 {
        if self.has_stiles {
            face_frame_thickness
        } else {
            0.0
        }
    }

    /// Vertical gap between stacked faces.
    ///
    /// Inset faces with mid rails need room for the rail and a reveal on each
    /// side of it.
    #[must_use]
    pub fn component_gap(&self, standard_gap: f64, rail_width: f64) -> f64 {
        match self.face_position {
            FacePosition::Inset if self.has_mid_rails => rail_width + 2.0 * self.reveal_gap,
            _ => standard_gap,
        }
    }

    /// Left edge and width of every face.
    ///
    /// `stile_width` is the raw spec value; styles without stiles ignore it.
    #[must_use]
    pub fn face_span(&self, cabinet_width: f64, stile_width: f64, opening_width: f64) -> FaceSpan {
        let s = self.stile_width(stile_width);
        let g = self.reveal_gap;
        let o = self.overlay_amount;
        match self.face_position {
            FacePosition::Flush => FaceSpan {
                x: g,
                width: cabinet_width - 2.0 * g,
            },
            FacePosition::Inside => FaceSpan {
                x: s,
                width: opening_width,
            },
            FacePosition::Overlay => FaceSpan {
                x: s - o,
                width: opening_width + 2.0 * o,
            },
            FacePosition::Inset => FaceSpan {
                x: s + g,
                width: opening_width - 2.0 * g,
            },
        }
    }

    /// Y of the top edge of the topmost face.
    #[must_use]
    pub fn stack_top(&self, box_height: f64, rail_width: f64) -> f64 {
        let r = self.rail_width(rail_width);
        let g = self.reveal_gap;
        match self.face_position {
            FacePosition::Flush => box_height - g,
            FacePosition::Inside | FacePosition::Inset => box_height - r - g,
            FacePosition::Overlay => box_height - r + self.overlay_amount - g,
        }
    }

    /// Y of the bottom of the opening faces are stacked into, before the
    /// bottom reveal.
    #[must_use]
    pub fn opening_floor(&self, rail_width: f64) -> f64 {
        let r = self.rail_width(rail_width);
        match self.face_position {
            FacePosition::Flush => 0.0,
            FacePosition::Inside | FacePosition::Inset => r,
            FacePosition::Overlay => r - self.overlay_amount,
        }
    }

    /// Lowest Y any face bottom may reach.
    #[must_use]
    pub fn stack_floor(&self, rail_width: f64) -> f64 {
        self.opening_floor(rail_width) + self.bottom_reveal
    }

    /// Z of the front of every face.
    #[must_use]
    pub fn face_z(&self, face_thickness: f64) -> f64 {
        match self.face_position {
            FacePosition::Inset => 0.0,
            FacePosition::Flush | FacePosition::Inside | FacePosition::Overlay => -face_thickness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn resolve(style: FaceFrameStyle) -> StyleConfig {
        StyleConfig::resolve(style, &Standards::new())
    }

    #[test]
    fn test_every_style_resolves() {
        for style in FaceFrameStyle::ALL {
            let config = resolve(style);
            assert_eq!(config.style, style);
            assert_eq!(FaceFrameStyle::from_tag(style.tag()), Some(style));
            // Mid rails only exist inside a frame.
            assert!(!config.has_mid_rails || config.has_rails);
        }
    }

    #[test]
    fn test_frameless_has_no_frame() {
        let config = resolve(FaceFrameStyle::Frameless);
        assert!(!config.has_stiles);
        assert!(!config.has_rails);
        assert_relative_eq!(config.overlay_amount, 0.0);
        assert_relative_eq!(config.stile_width(1.5), 0.0);
        assert_relative_eq!(config.frame_thickness(0.75), 0.0);
    }

    #[test]
    fn test_face_span_modes() {
        // 30 wide, 1.5 stiles, 27 opening
        let inside = resolve(FaceFrameStyle::FaceFrame).face_span(30.0, 1.5, 27.0);
        assert_relative_eq!(inside.x, 1.5);
        assert_relative_eq!(inside.width, 27.0);

        let overlay = resolve(FaceFrameStyle::FullOverlay).face_span(30.0, 1.5, 27.0);
        assert_relative_eq!(overlay.x, 0.25);
        assert_relative_eq!(overlay.width, 29.5);

        let inset = resolve(FaceFrameStyle::Inset).face_span(30.0, 1.5, 27.0);
        assert_relative_eq!(inset.x, 1.5625);
        assert_relative_eq!(inset.width, 26.875);

        let flush = resolve(FaceFrameStyle::Frameless).face_span(30.0, 1.5, 30.0);
        assert_relative_eq!(flush.x, 0.0625);
        assert_relative_eq!(flush.width, 29.875);
    }

    #[test]
    fn test_stack_extent() {
        let config = resolve(FaceFrameStyle::FaceFrame);
        assert_relative_eq!(config.stack_top(30.25, 1.5), 28.625);
        assert_relative_eq!(config.stack_floor(1.5), 1.625);

        let overlay = resolve(FaceFrameStyle::FullOverlay);
        assert_relative_eq!(overlay.stack_top(30.25, 1.5), 29.875);
        assert_relative_eq!(overlay.stack_floor(1.5), 0.375);
    }

    #[test]
    fn test_inset_gap_clears_mid_rail() {
        let inset = resolve(FaceFrameStyle::Inset);
        assert_relative_eq!(inset.component_gap(0.125, 1.5), 1.625);
        assert_relative_eq!(inset.face_z(0.75), 0.0);

        let frame = resolve(FaceFrameStyle::FaceFrame);
        assert_relative_eq!(frame.component_gap(0.125, 1.5), 0.125);
        assert_relative_eq!(frame.face_z(0.75), -0.75);
    }
}
