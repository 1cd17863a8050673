//! Single and batch cabinet builds.

use std::fmt::Write as _;

use cabinet_gates::{GateIssue, GateResults, run_gates};
use cabinet_layout::{ValidationResult, generate_parts, validate_layout};
use cabinet_types::{CabinetSpec, InvalidSpec, Part, PartMap};
use rayon::prelude::*;
use tracing::{info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cut_list::CutList;

/// Result type for cabinet builds.
pub type CabinetResult<T> = Result<T, InvalidSpec>;

/// Everything computed for one cabinet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CabinetBuild {
    /// The cabinet spec this was built from.
    pub spec: CabinetSpec,
    /// Outputs of the six gates.
    pub gates: GateResults,
    /// Generated parts by name.
    pub parts: PartMap,
    /// Closure check results.
    pub validation: ValidationResult,
}

impl CabinetBuild {
    /// Look up a part by name.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.get(name)
    }

    /// Every gate issue, in gate order.
    pub fn issues(&self) -> impl Iterator<Item = &GateIssue> {
        self.gates.issues()
    }

    /// No gate errors and a clean validation.
    ///
    /// Gate warnings and constraint-adjusted parts do not block fabrication.
    #[must_use]
    pub fn is_fabrication_ready(&self) -> bool {
        !self.gates.has_errors() && self.validation.is_valid()
    }

    /// Group the parts for cutting.
    #[must_use]
    pub fn cut_list(&self) -> CutList {
        CutList::from_parts(&self.parts)
    }

    /// Plain-text audit of every gate, followed by the validation report.
    #[must_use]
    pub fn audit_report(&self) -> String {
        let spec = &self.spec;
        let mut report = String::new();
        let _ = writeln!(
            report,
            "{} cabinet {:.4} W x {:.4} H x {:.4} D ({:?})",
            spec.category.tag(),
            spec.width,
            spec.height,
            spec.depth,
            spec.style
        );
        let _ = writeln!(
            report,
            "Fabrication ready: {}",
            if self.is_fabrication_ready() { "yes" } else { "no" }
        );
        for output in self.gates.outputs() {
            report.push('\n');
            let _ = write!(report, "{output}");
        }
        report.push('\n');
        let _ = write!(report, "{}", self.validation);
        report
    }
}

/// Validate a spec, run the gates, generate parts and check the layout.
///
/// Only an invalid spec is an error. Layout and hardware problems are
/// reported through the gate issues and the validation result.
///
/// # Errors
///
/// Returns [`InvalidSpec`] listing every problem with the input.
///
/// # Example
///
/// ```
/// use cabinet::{CabinetCategory, CabinetSpec, build_cabinet};
///
/// let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
///     .with_drawers(vec![6.0]);
/// let build = build_cabinet(&spec).unwrap();
///
/// assert!(build.is_fabrication_ready());
/// assert!(build.part("drawer_face_1").is_some());
/// ```
pub fn build_cabinet(spec: &CabinetSpec) -> CabinetResult<CabinetBuild> {
    spec.validate()?;
    info!(
        "Building {} cabinet {}x{}x{}",
        spec.category.tag(),
        spec.width,
        spec.height,
        spec.depth
    );

    let gates = run_gates(spec);
    let parts = generate_parts(spec, &gates);
    let validation = validate_layout(spec, &gates, &parts);

    let build = CabinetBuild {
        spec: spec.clone(),
        gates,
        parts,
        validation,
    };
    if !build.is_fabrication_ready() {
        warn!(
            "Cabinet is not fabrication-ready: {} gate issue(s), {}",
            build.issues().count(),
            build.validation.summary()
        );
    }
    Ok(build)
}

/// Build independent cabinets in parallel.
///
/// Results are returned in input order.
#[must_use]
pub fn build_cabinets(specs: &[CabinetSpec]) -> Vec<CabinetResult<CabinetBuild>> {
    info!("Building {} cabinets", specs.len());
    specs.par_iter().map(build_cabinet).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cabinet_types::{CabinetCategory, SpecError, StandardKey, Standards};

    fn base() -> CabinetSpec {
        CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0).with_drawers(vec![6.0])
    }

    #[test]
    fn test_invalid_spec_is_rejected() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 0.0, 34.75, -1.0);
        let err = build_cabinet(&spec).unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(matches!(
            err.problems[0],
            SpecError::NonPositiveDimension { field: "width", .. }
        ));
    }

    #[test]
    fn test_out_of_range_standards_are_rejected() {
        let standards = Standards::new()
            .with(StandardKey::StretcherThickness, -0.75)
            .with(StandardKey::FaceThickness, 0.0);
        let spec = CabinetSpec::from_standards(CabinetCategory::Base, 30.0, 34.75, 24.0, standards)
            .with_drawers(vec![6.0]);
        let err = build_cabinet(&spec).unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.problems.iter().all(|p| matches!(p, SpecError::InvalidStandard { .. })));
    }

    #[test]
    fn test_overflow_is_not_fabrication_ready() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 27.5, 24.0)
            .with_drawers(vec![11.0, 11.0]);
        let build = build_cabinet(&spec).unwrap();
        assert!(build.gates.has_errors());
        assert!(!build.is_fabrication_ready());
        assert!(build.audit_report().contains("Fabrication ready: no"));
    }

    #[test]
    fn test_audit_report_covers_every_gate() {
        let report = build_cabinet(&base()).unwrap().audit_report();
        assert!(report.contains("Fabrication ready: yes"));
        for n in 1..=6 {
            assert!(report.contains(&format!("Gate {n}:")), "missing gate {n}");
        }
        assert!(report.contains("Layout is valid"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let specs = vec![
            base(),
            CabinetSpec::new(CabinetCategory::Wall, 0.0, 30.0, 12.0),
            CabinetSpec::new(CabinetCategory::SinkBase, 36.0, 34.75, 24.0),
        ];
        let results = build_cabinets(&specs);
        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().is_ok_and(|b| b.spec == specs[0]));
        assert!(results[1].is_err());
        assert!(results[2].as_ref().is_ok_and(|b| b.spec.width == 36.0));
    }
}
