//! Gate 2: face-frame opening.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cabinet_types::CabinetSpec;
use tracing::debug;

use crate::audit::{GateId, GateOutput, fmt_len};
use crate::box_gate::BoxGate;

/// The aperture faces are fitted into.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpeningGate {
    /// Width between the stiles.
    pub opening_width: f64,
    /// Height between the top and bottom rails.
    pub opening_height: f64,
    /// Stile width actually built (0 without stiles).
    pub stile_width: f64,
    /// Rail width actually built (0 without rails).
    pub rail_width: f64,
    /// Formula trail.
    pub audit: GateOutput,
}

/// Run Gate 2.
#[must_use]
pub fn opening_gate(spec: &CabinetSpec, box_dims: &BoxGate) -> OpeningGate {
    let mut audit = GateOutput::new(GateId::Opening);
    let style = spec.style_config();
    let stile_width = style.stile_width(spec.stile_width);
    let rail_width = style.rail_width(spec.rail_width);

    let opening_width = spec.width - 2.0 * stile_width;
    audit.record(
        "opening_width",
        format!(
            "width − 2 × stile_width = {} − 2 × {} = {}",
            fmt_len(spec.width),
            fmt_len(stile_width),
            fmt_len(opening_width)
        ),
        opening_width,
    );

    let opening_height = box_dims.box_height - 2.0 * rail_width;
    audit.record(
        "opening_height",
        format!(
            "box_height − 2 × rail_width = {} − 2 × {} = {}",
            fmt_len(box_dims.box_height),
            fmt_len(rail_width),
            fmt_len(opening_height)
        ),
        opening_height,
    );

    debug!(
        "Gate 2: opening {} x {} ({})",
        opening_width,
        opening_height,
        style.style.tag()
    );

    OpeningGate {
        opening_width,
        opening_height,
        stile_width,
        rail_width,
        audit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_gate::box_gate;
    use approx::assert_relative_eq;
    use cabinet_types::{CabinetCategory, FaceFrameStyle};

    #[test]
    fn test_standard_opening() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0);
        let gate = opening_gate(&spec, &box_gate(&spec));
        assert_relative_eq!(gate.opening_width, 27.0);
        assert_relative_eq!(gate.opening_height, 27.25);
        assert_eq!(
            gate.audit.steps()[0].formula,
            "width − 2 × stile_width = 30 − 2 × 1.5 = 27"
        );
    }

    #[test]
    fn test_frameless_opening_is_whole_box() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_style(FaceFrameStyle::Frameless);
        let gate = opening_gate(&spec, &box_gate(&spec));
        assert_relative_eq!(gate.opening_width, 30.0);
        assert_relative_eq!(gate.opening_height, 30.25);
        assert_relative_eq!(gate.stile_width, 0.0);
    }
}
