//! Closure and consistency checks over a generated part map.
//!
//! Every check is independent and measured from the parts themselves, then
//! compared against the cabinet dimensions and the gate results. All comparisons use the
//! fixed absolute [`TOLERANCE`].

use std::fmt;

use cabinet_gates::GateResults;
use cabinet_types::{CabinetSpec, Part, PartCategory, PartMap, TOLERANCE};
use tracing::{info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constraint::{BoundViolation, PartOverlap, check_bounds, find_overlap, internal_bounds};

/// Outcome of a single closure check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckResult {
    /// Check name.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Expected value (or limit).
    pub expected: f64,
    /// Measured value.
    pub actual: f64,
    /// Why the check failed or was skipped.
    pub reason: Option<String>,
}

/// Full validation report for one cabinet.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationResult {
    /// Every check, in evaluation order.
    pub checks: Vec<CheckResult>,
    /// Internal parts outside the internal bounds.
    pub violations: Vec<BoundViolation>,
    /// Carcass and internal parts sharing volume.
    pub overlaps: Vec<PartOverlap>,
    /// Parts that only fit after a constraint correction.
    pub adjusted_parts: Vec<String>,
}

impl ValidationResult {
    /// Whether every check passed, no part breaches the bounds and no two
    /// solid parts overlap.
    ///
    /// Adjusted parts do not make a layout invalid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
            && self.violations.is_empty()
            && self.overlaps.is_empty()
    }

    /// Checks that failed.
    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Look up a check by name.
    #[must_use]
    pub fn check(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// Failed checks, bound violations and overlaps.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.failed_checks().count() + self.violations.len() + self.overlaps.len()
    }

    /// One-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return format!(
                "Layout is valid: {} checks passed, {} part(s) adjusted",
                self.checks.len(),
                self.adjusted_parts.len()
            );
        }

        let mut issues = Vec::new();
        let failed = self.failed_checks().count();
        if failed > 0 {
            issues.push(format!("{failed} failed check(s)"));
        }
        if !self.violations.is_empty() {
            issues.push(format!("{} bound violation(s)", self.violations.len()));
        }
        if !self.overlaps.is_empty() {
            issues.push(format!("{} overlap(s)", self.overlaps.len()));
        }
        format!("Validation failed: {}", issues.join(", "))
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for check in &self.checks {
            let mark = if check.passed { "PASS" } else { "FAIL" };
            write!(
                f,
                "  [{mark}] {}: expected {:.4}, actual {:.4}",
                check.name, check.expected, check.actual
            )?;
            if let Some(reason) = &check.reason {
                write!(f, " ({reason})")?;
            }
            writeln!(f)?;
        }
        for violation in &self.violations {
            writeln!(f, "  [BOUND] {violation}")?;
        }
        for overlap in &self.overlaps {
            writeln!(f, "  [OVERLAP] {overlap}")?;
        }
        for name in &self.adjusted_parts {
            writeln!(f, "  [ADJUSTED] {name}")?;
        }
        Ok(())
    }
}

/// Collects checks as they run.
#[derive(Default)]
struct Checks {
    results: Vec<CheckResult>,
}

impl Checks {
    fn push(&mut self, name: &str, passed: bool, expected: f64, actual: f64, reason: String) {
        if !passed {
            warn!("Check {} failed: {}", name, reason);
        }
        self.results.push(CheckResult {
            name: name.to_string(),
            passed,
            expected,
            actual,
            reason: (!passed).then_some(reason),
        });
    }

    fn equal(&mut self, name: &str, expected: f64, actual: f64, what: &str) {
        let passed = (expected - actual).abs() <= TOLERANCE;
        self.push(
            name,
            passed,
            expected,
            actual,
            format!("{what}: expected {expected:.4}, got {actual:.4}"),
        );
    }

    fn at_least(&mut self, name: &str, minimum: f64, actual: f64, what: &str) {
        self.push(
            name,
            actual >= minimum - TOLERANCE,
            minimum,
            actual,
            format!("{what}: {actual:.4} is below {minimum:.4}"),
        );
    }

    fn at_most(&mut self, name: &str, maximum: f64, actual: f64, what: &str) {
        self.push(
            name,
            actual <= maximum + TOLERANCE,
            maximum,
            actual,
            format!("{what}: {actual:.4} exceeds {maximum:.4}"),
        );
    }

    fn missing(&mut self, name: &str, part: &str) {
        self.push(name, false, 0.0, 0.0, format!("part {part} is missing"));
    }

    /// A check that does not apply to this cabinet.
    fn not_applicable(&mut self, name: &str, why: &str) {
        self.results.push(CheckResult {
            name: name.to_string(),
            passed: true,
            expected: 0.0,
            actual: 0.0,
            reason: Some(why.to_string()),
        });
    }
}

/// Run every closure check over a generated part map.
#[must_use]
pub fn validate_layout(spec: &CabinetSpec, gates: &GateResults, parts: &PartMap) -> ValidationResult {
    info!("Validating layout ({} parts)", parts.len());

    let mut checks = Checks::default();
    check_carcass(&mut checks, spec, gates, parts);
    check_face_frame(&mut checks, gates, parts);
    check_drawers(&mut checks, spec, gates, parts);
    check_backings(&mut checks, spec, parts);

    let bounds = internal_bounds(spec, &gates.box_dims);
    let violations: Vec<BoundViolation> = parts
        .values()
        .flat_map(|p| check_bounds(p, &bounds))
        .collect();
    for v in &violations {
        warn!("{}", v);
    }

    let overlaps = find_overlaps(parts);
    for o in &overlaps {
        warn!("{}", o);
    }

    let adjusted_parts = parts
        .values()
        .filter(|p| p.constraint_applied())
        .map(|p| p.name().to_string())
        .collect();

    let result = ValidationResult {
        checks: checks.results,
        violations,
        overlaps,
        adjusted_parts,
    };
    info!("{}", result.summary());
    result
}

/// Drawer assembly a part belongs to, e.g. `drawer_2` for `drawer_2_box_front`.
fn assembly(name: &str) -> Option<&str> {
    name.split_once("_box_").map(|(drawer, _)| drawer)
}

/// Every pair of carcass or internal parts that share volume.
///
/// Pieces of the same drawer box interlock at their dados and are not
/// compared with each other.
fn find_overlaps(parts: &PartMap) -> Vec<PartOverlap> {
    let mut solid: Vec<&Part> = parts
        .values()
        .filter(|p| p.category() != PartCategory::External)
        .collect();
    solid.sort_by(|a, b| a.name().cmp(b.name()));

    solid
        .iter()
        .enumerate()
        .flat_map(|(i, a)| solid[i + 1..].iter().map(move |b| (*a, *b)))
        .filter(|(a, b)| match (assembly(a.name()), assembly(b.name())) {
            (Some(x), Some(y)) => x != y,
            _ => true,
        })
        .filter_map(|(a, b)| find_overlap(a, b))
        .collect()
}

fn check_carcass(checks: &mut Checks, spec: &CabinetSpec, gates: &GateResults, parts: &PartMap) {
    let box_dims = &gates.box_dims;
    let rules = spec.rules;

    match (parts.get("left_side"), parts.get("right_side")) {
        (Some(left), Some(right)) => {
            let inside = right.position().x - left.max().x;
            checks.equal(
                "envelope_width",
                spec.width,
                right.max().x - left.position().x,
                "left side outer face to right side outer face",
            );
            checks.equal(
                "inside_width",
                box_dims.inside_width,
                inside,
                "gap between the sides",
            );

            let side_y = if rules.sides_on_bottom {
                spec.bottom_thickness
            } else {
                0.0
            };
            checks.equal("side_y", side_y, left.position().y, "side bottom edge");

            let capped = rules.stretchers_on_top && !spec.category.is_sink_base();
            let expected_height = box_dims.box_height
                - side_y
                - if capped {
                    box_dims.stretcher_thickness
                } else {
                    0.0
                };
            checks.equal(
                "side_height",
                expected_height,
                left.height(),
                "side height for the assembly rules",
            );
        }
        _ => checks.missing("envelope_width", "left_side/right_side"),
    }

    let toe = parts.get("toe_kick");
    if spec.toe_kick_height > 0.0 {
        match toe {
            Some(toe) => {
                checks.equal(
                    "toe_kick_bottom",
                    -spec.toe_kick_height,
                    toe.position().y,
                    "toe kick in negative Y",
                );
                checks.equal("toe_kick_top", 0.0, toe.max().y, "toe kick top at Y=0");
            }
            None => checks.missing("toe_kick_bottom", "toe_kick"),
        }
    } else {
        checks.not_applicable("toe_kick_bottom", "no toe kick");
    }

    match parts.get("back") {
        Some(back) => {
            let toe_height = toe.map_or(0.0, Part::height);
            checks.equal(
                "total_height",
                spec.height,
                toe_height + back.max().y,
                "toe kick + box height",
            );

            let (x, width) = if rules.back_inset_from_sides {
                (spec.side_thickness, box_dims.inside_width)
            } else {
                (0.0, spec.width)
            };
            checks.equal("back_x", x, back.position().x, "back panel X");
            checks.equal("back_width", width, back.width(), "back panel width");

            match parts.get("bottom") {
                Some(bottom) => {
                    checks.equal(
                        "total_depth",
                        spec.depth,
                        bottom.position().z + bottom.depth() + back.depth(),
                        "face frame + inside depth + back",
                    );
                    checks.equal("bottom_y", 0.0, bottom.position().y, "bottom panel at Y=0");
                }
                None => checks.missing("total_depth", "bottom"),
            }
        }
        None => checks.missing("total_height", "back"),
    }
}

fn check_face_frame(checks: &mut Checks, gates: &GateResults, parts: &PartMap) {
    match (
        parts.get("face_frame_left_stile"),
        parts.get("face_frame_right_stile"),
    ) {
        (Some(left), Some(right)) => checks.equal(
            "opening_width",
            gates.opening.opening_width,
            right.position().x - left.max().x,
            "gap between the stiles",
        ),
        _ if gates.face_frame.stile_count == 0 => {
            checks.not_applicable("opening_width", "style has no stiles");
        }
        _ => checks.missing("opening_width", "face_frame stiles"),
    }

    match (
        parts.get("face_frame_top_rail"),
        parts.get("face_frame_bottom_rail"),
    ) {
        (Some(top), Some(bottom)) => checks.equal(
            "opening_height",
            gates.opening.opening_height,
            top.position().y - bottom.max().y,
            "gap between the rails",
        ),
        _ if gates.face_frame.rail_count == 0 => {
            checks.not_applicable("opening_height", "style has no rails");
        }
        _ => checks.missing("opening_height", "face_frame rails"),
    }
}

fn check_backings(checks: &mut Checks, spec: &CabinetSpec, parts: &PartMap) {
    for (index, front) in spec.false_fronts.iter().enumerate() {
        let n = index + 1;
        if !front.has_backing || !parts.contains_key(&format!("false_front_{n}")) {
            continue;
        }
        let backing = format!("false_front_{n}_backing");
        match parts.get(&backing) {
            Some(part) => checks.at_most(
                &format!("false_front_{n}_backing_height"),
                front.resolved_backing_height(),
                part.height(),
                "backing height",
            ),
            None => checks.missing(&format!("false_front_{n}_backing_height"), &backing),
        }
    }
}

fn check_drawers(checks: &mut Checks, spec: &CabinetSpec, gates: &GateResults, parts: &PartMap) {
    let hw = &spec.hardware;

    for drawer in &gates.drawers.boxes {
        let n = drawer.index + 1;
        let name = |check: &str| format!("drawer_{n}_{check}");
        let part = move |piece: &str| parts.get(&format!("drawer_{n}_box_{piece}"));

        let (Some(left), Some(right), Some(front)) =
            (part("left_side"), part("right_side"), part("front"))
        else {
            for check in ["width_clearance", "centered", "contained", "depth", "height_clearance"] {
                checks.missing(&name(check), &format!("drawer_{n}_box"));
            }
            continue;
        };

        let x0 = left.position().x;
        let x1 = right.max().x;
        let width = x1 - x0;

        checks.at_least(
            &name("width_clearance"),
            hw.side_deduction,
            gates.drawers.clear_width - width,
            "clear width minus box width",
        );
        checks.equal(
            &name("centered"),
            spec.width / 2.0,
            (x0 + x1) / 2.0,
            "box center X",
        );

        let inside = x0 >= spec.side_thickness - TOLERANCE
            && x1 <= spec.width - spec.side_thickness + TOLERANCE;
        checks.push(
            &name("contained"),
            inside,
            spec.width - spec.side_thickness,
            x1,
            format!(
                "box spans X {x0:.4}..{x1:.4}, sides leave {:.4}..{:.4}",
                spec.side_thickness,
                spec.width - spec.side_thickness
            ),
        );

        checks.at_most(
            &name("depth"),
            gates.box_dims.inside_depth,
            left.max().z - front.position().z,
            "box depth",
        );
        checks.at_least(
            &name("height_clearance"),
            hw.top_clearance + hw.bottom_clearance,
            drawer.face_height - left.height(),
            "face height minus box height",
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::generate::generate_parts;
    use cabinet_gates::run_gates;
    use cabinet_types::{
        AssemblyRules, CabinetCategory, DrawerHardware, FaceFrameStyle, FalseFront, Point3,
        Vector3,
    };

    fn validate(spec: &CabinetSpec) -> ValidationResult {
        let gates = run_gates(spec);
        let parts = generate_parts(spec, &gates);
        validate_layout(spec, &gates, &parts)
    }

    #[test]
    fn test_standard_base_is_valid() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0]);
        let result = validate(&spec);
        assert!(result.is_valid(), "{result}");
        assert_eq!(result.issue_count(), 0);
        assert!(result.check("drawer_1_centered").is_some_and(|c| c.passed));
        assert!(result.summary().starts_with("Layout is valid"));
    }

    #[test]
    fn test_every_style_and_rule_closes() {
        for style in FaceFrameStyle::ALL {
            for rules in AssemblyRules::all_combinations() {
                let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
                    .with_style(style)
                    .with_rules(rules)
                    .with_finished_ends(true, false)
                    .with_false_front(FalseFront::new(4.0))
                    .with_drawers(vec![6.0, 8.0]);
                let result = validate(&spec);
                assert!(result.is_valid(), "{style:?} {rules:?}: {result}");
            }
        }
    }

    #[test]
    fn test_frameless_skips_opening_checks() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_style(FaceFrameStyle::Frameless);
        let result = validate(&spec);
        let check = result.check("opening_width").unwrap();
        assert!(check.passed);
        assert_eq!(check.reason.as_deref(), Some("style has no stiles"));
    }

    #[test]
    fn test_hardware_without_clearance_fails_height_check() {
        // deduction smaller than the clearances it is supposed to cover
        let hardware = DrawerHardware::default().with_height_deduction(0.25);
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_hardware(hardware)
            .with_drawers(vec![6.0]);
        let result = validate(&spec);
        assert!(!result.is_valid());
        let failed: Vec<_> = result.failed_checks().map(|c| c.name.as_str()).collect();
        assert_eq!(failed, vec!["drawer_1_height_clearance"]);
        assert!(result.to_string().contains("[FAIL] drawer_1_height_clearance"));
    }

    #[test]
    fn test_moved_part_is_reported() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0);
        let gates = run_gates(&spec);
        let mut parts = generate_parts(&spec, &gates);
        if let Some(back) = parts.get_mut("back") {
            back.set_position(Point3::new(0.5, 0.0, 23.25));
        }
        if let Some(stretcher) = parts.get_mut("stretcher_front") {
            stretcher.set_dimensions(Vector3::new(29.0, 0.75, 3.5));
        }

        let result = validate_layout(&spec, &gates, &parts);
        assert!(!result.check("back_x").unwrap().passed);
        assert_eq!(result.violations.len(), 1);
        assert!(result.summary().contains("1 bound violation(s)"));
        // the widened stretcher now runs into the right side
        assert_eq!(result.overlaps.len(), 1);
        assert_eq!(result.overlaps[0].first, "right_side");
        assert_eq!(result.overlaps[0].second, "stretcher_front");
    }

    #[test]
    fn test_overlapping_parts_are_reported() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_drawers(vec![6.0]);
        let gates = run_gates(&spec);
        let mut parts = generate_parts(&spec, &gates);
        assert!(validate_layout(&spec, &gates, &parts).overlaps.is_empty());

        // drop the front stretcher into the drawer box
        if let Some(stretcher) = parts.get_mut("stretcher_front") {
            stretcher.set_position(Point3::new(0.75, 27.0, 0.75));
        }
        let result = validate_layout(&spec, &gates, &parts);
        assert!(result.violations.is_empty());
        assert!(result.checks.iter().all(|c| c.passed));
        assert!(!result.is_valid());

        let mut hit: Vec<_> = result.overlaps.iter().map(|o| o.first.as_str()).collect();
        hit.sort_unstable();
        assert_eq!(
            hit,
            vec![
                "drawer_1_box_front",
                "drawer_1_box_left_side",
                "drawer_1_box_right_side"
            ]
        );
        assert!(result.overlaps.iter().all(|o| o.second == "stretcher_front"));
        assert_eq!(result.issue_count(), 3);
        assert!(result.summary().contains("3 overlap(s)"));
        assert!(result.to_string().contains("[OVERLAP] drawer_1_box_front overlaps stretcher_front"));
    }

    #[test]
    fn test_envelope_width_is_measured() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0);
        let gates = run_gates(&spec);
        let mut parts = generate_parts(&spec, &gates);
        if let Some(side) = parts.get_mut("right_side") {
            side.set_position(Point3::new(29.0, 0.0, 0.75));
        }

        let result = validate_layout(&spec, &gates, &parts);
        let envelope = result.check("envelope_width").unwrap();
        assert!(!envelope.passed);
        assert!((envelope.actual - 29.75).abs() < 1e-9);
        assert!(!result.check("inside_width").unwrap().passed);
    }

    #[test]
    fn test_backing_missing_is_reported() {
        let spec = CabinetSpec::new(CabinetCategory::Base, 30.0, 34.75, 24.0)
            .with_false_front(FalseFront::new(4.0))
            .with_drawers(vec![6.0]);
        let gates = run_gates(&spec);
        let mut parts = generate_parts(&spec, &gates);
        let result = validate_layout(&spec, &gates, &parts);
        assert!(result.check("false_front_1_backing_height").unwrap().passed);

        parts.remove("false_front_1_backing");
        let result = validate_layout(&spec, &gates, &parts);
        let check = result.check("false_front_1_backing_height").unwrap();
        assert!(!check.passed);
        assert_eq!(
            check.reason.as_deref(),
            Some("part false_front_1_backing is missing")
        );
    }
}
