//! Gate 3: vertical layout of stacked faces.
//!
//! Components are stacked bottom-up from the bottom reveal, one running
//! position carried through a fold, then reversed for top-down display.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cabinet_types::{CabinetSpec, StandardKey, TOLERANCE};
use tracing::{debug, warn};

use crate::audit::{GateId, GateOutput, IssueKind, Severity, fmt_len, sum_expr};
use crate::opening::OpeningGate;

/// What a stacked component is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComponentKind {
    /// False front with the given index, top to bottom.
    FalseFront(usize),
    /// Drawer with the given index, top to bottom.
    Drawer(usize),
}

impl ComponentKind {
    /// Human-readable label, numbered from 1.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::FalseFront(i) => format!("false_front_{}", i + 1),
            Self::Drawer(i) => format!("drawer_{}", i + 1),
        }
    }
}

/// One face in the bottom-up layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentSlot {
    /// What the face belongs to.
    pub kind: ComponentKind,
    /// Face height.
    pub height: f64,
    /// Bottom edge above the opening floor.
    pub bottom: f64,
    /// Top edge above the opening floor.
    pub top: f64,
}

/// Whether the stack fits its opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayoutStatus {
    /// Remaining space is not negative.
    Fits,
    /// Components need more height than the opening has.
    DoesNotFit,
}

/// Vertical layout of every stacked face.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentGate {
    /// Slots, top to bottom.
    pub slots: Vec<ComponentSlot>,
    /// Reveal under the bottom face.
    pub bottom_reveal: f64,
    /// Reveal above the top face.
    pub top_reveal: f64,
    /// Gap between adjacent faces.
    pub gap: f64,
    /// Total height the stack needs.
    pub consumed_height: f64,
    /// Opening height minus consumed height.
    pub remaining_space: f64,
    /// Fit verdict.
    pub status: LayoutStatus,
    /// Formula trail.
    pub audit: GateOutput,
}

/// Running position of the bottom-up stack.
#[derive(Debug, Clone, Copy)]
struct StackCursor {
    y: f64,
}

/// Stacked components, top to bottom: false fronts above drawers.
#[must_use]
pub fn stacked_components(spec: &CabinetSpec) -> Vec<(ComponentKind, f64)> {
    let fronts = spec
        .false_fronts
        .iter()
        .enumerate()
        .map(|(i, f)| (ComponentKind::FalseFront(i), f.face_height));
    let drawers = spec
        .drawer_heights
        .iter()
        .enumerate()
        .map(|(i, h)| (ComponentKind::Drawer(i), *h));
    fronts.chain(drawers).collect()
}

/// Run Gate 3.
#[must_use]
pub fn component_gate(spec: &CabinetSpec, opening: &OpeningGate) -> ComponentGate {
    let mut audit = GateOutput::new(GateId::Components);
    let style = spec.style_config();
    let components = stacked_components(spec);

    let bottom_reveal = style.bottom_reveal;
    let top_reveal = style.reveal_gap;
    let gap = style.component_gap(
        spec.standards.get(StandardKey::ComponentGap),
        style.rail_width(spec.rail_width),
    );
    audit.record("bottom_reveal", fmt_len(bottom_reveal), bottom_reveal);
    audit.record("top_reveal", fmt_len(top_reveal), top_reveal);
    audit.record("component_gap", fmt_len(gap), gap);

    let mut terms = Vec::with_capacity(components.len() * 2 + 1);
    let consumed_height = if components.is_empty() {
        0.0
    } else {
        terms.push(bottom_reveal);
        for (i, (_, height)) in components.iter().enumerate() {
            if i > 0 {
                terms.push(gap);
            }
            terms.push(*height);
        }
        terms.push(top_reveal);
        terms.iter().sum()
    };
    audit.record(
        "consumed_height",
        format!(
            "bottom_reveal + Σ face heights + gaps + top_reveal = {} = {}",
            sum_expr(&terms),
            fmt_len(consumed_height)
        ),
        consumed_height,
    );

    let remaining_space = opening.opening_height - consumed_height;
    audit.record(
        "remaining_space",
        format!(
            "opening_height − consumed_height = {} − {} = {}",
            fmt_len(opening.opening_height),
            fmt_len(consumed_height),
            fmt_len(remaining_space)
        ),
        remaining_space,
    );

    let status = if remaining_space >= -TOLERANCE {
        LayoutStatus::Fits
    } else {
        LayoutStatus::DoesNotFit
    };

    if status == LayoutStatus::DoesNotFit {
        let overflow = -remaining_space;
        let tolerance = spec.standards.get(StandardKey::OverlayTolerance);
        let severity = if overflow <= tolerance + TOLERANCE {
            Severity::Warning
        } else {
            Severity::Error
        };
        warn!(
            "Gate 3: components exceed opening height {} by {}",
            opening.opening_height, overflow
        );
        audit.push_issue(
            severity,
            IssueKind::LayoutOverflow { overflow },
            format!(
                "components need {} but the opening is {}: over by {} (overlay tolerance {})",
                fmt_len(consumed_height),
                fmt_len(opening.opening_height),
                fmt_len(overflow),
                fmt_len(tolerance)
            ),
        );
    }

    // Bottom-up: the running cursor starts at the bottom reveal and only grows.
    let (mut slots, _) = components.iter().rev().fold(
        (
            Vec::with_capacity(components.len()),
            StackCursor { y: bottom_reveal },
        ),
        |(mut slots, cursor), (kind, height)| {
            slots.push(ComponentSlot {
                kind: *kind,
                height: *height,
                bottom: cursor.y,
                top: cursor.y + height,
            });
            (
                slots,
                StackCursor {
                    y: cursor.y + height + gap,
                },
            )
        },
    );
    slots.reverse();

    for slot in &slots {
        audit.explain(
            &slot.kind.label(),
            format!(
                "bottom {} → top {} (height {})",
                fmt_len(slot.bottom),
                fmt_len(slot.top),
                fmt_len(slot.height)
            ),
            slot.bottom,
        );
    }

    debug!(
        "Gate 3: {} components, consumed {}, remaining {}",
        slots.len(),
        consumed_height,
        remaining_space
    );

    ComponentGate {
        slots,
        bottom_reveal,
        top_reveal,
        gap,
        consumed_height,
        remaining_space,
        status,
        audit,
    }
}
