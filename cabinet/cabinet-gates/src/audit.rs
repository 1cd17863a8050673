//! Formula audit trail shared by every gate.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one of the six gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GateId {
    /// Gate 1: carcass box.
    Box,
    /// Gate 2: face-frame opening.
    Opening,
    /// Gate 3: vertical component layout.
    Components,
    /// Gate 4: drawer box clearances.
    DrawerBoxes,
    /// Gate 5: stretchers.
    Stretchers,
    /// Gate 6: face-frame pieces.
    FaceFrame,
}

impl GateId {
    /// Gate number, 1 through 6.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Box => 1,
            Self::Opening => 2,
            Self::Components => 3,
            Self::DrawerBoxes => 4,
            Self::Stretchers => 5,
            Self::FaceFrame => 6,
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Box => "Box",
            Self::Opening => "Face-frame opening",
            Self::Components => "Component vertical layout",
            Self::DrawerBoxes => "Drawer box clearances",
            Self::Stretchers => "Stretchers",
            Self::FaceFrame => "Face-frame pieces",
        }
    }
}

/// One line of a gate's audit trail.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationStep {
    /// Name of the quantity computed.
    pub name: String,
    /// Formula with substituted values.
    pub formula: String,
    /// Computed result.
    pub result: f64,
}

/// How serious a gate issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// The caller may proceed.
    Warning,
    /// The cabinet is not fabrication-ready.
    Error,
}

/// Machine-readable description of a gate issue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum IssueKind {
    /// Stacked faces need more height than the opening provides.
    LayoutOverflow {
        /// Height required beyond the opening.
        overflow: f64,
    },
    /// The carcass is too shallow for the requested slide.
    DepthShortfall {
        /// Depth the slide requires.
        required_depth: f64,
        /// Inside depth available.
        available_depth: f64,
        /// Missing depth.
        shortfall: f64,
        /// Longest standard slide that fits, if any.
        suggested_slide_length: Option<f64>,
        /// Depth that suggested slide requires.
        suggested_required_depth: Option<f64>,
    },
    /// A drawer face is too short to hold a box after clearances.
    DrawerBoxTooShort {
        /// Drawer index, top to bottom.
        drawer: usize,
        /// Box height before rounding.
        exact_height: f64,
    },
    /// The clear opening is too narrow for the slide deduction.
    DrawerBoxTooNarrow {
        /// Drawer index, top to bottom.
        drawer: usize,
        /// Computed box width.
        box_width: f64,
    },
}

/// A non-fatal finding reported by a gate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GateIssue {
    /// Severity.
    pub severity: Severity,
    /// What went wrong.
    pub kind: IssueKind,
    /// Human-readable explanation.
    pub message: String,
}

/// Named scalar results and formula trail of one gate.
///
/// Produced once and never mutated afterwards. Later gates read the typed
/// gate structs, never the text recorded here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GateOutput {
    gate: GateId,
    values: BTreeMap<String, f64>,
    steps: Vec<CalculationStep>,
    issues: Vec<GateIssue>,
}

impl GateOutput {
    pub(crate) fn new(gate: GateId) -> Self {
        Self {
            gate,
            values: BTreeMap::new(),
            steps: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Record a named output with its formula and return the value.
    pub(crate) fn record(&mut self, name: &str, formula: impl Into<String>, result: f64) -> f64 {
        self.values.insert(name.to_string(), result);
        self.explain(name, formula, result)
    }

    /// Record a formula step without adding a named output.
    pub(crate) fn explain(&mut self, name: &str, formula: impl Into<String>, result: f64) -> f64 {
        self.steps.push(CalculationStep {
            name: name.to_string(),
            formula: formula.into(),
            result,
        });
        result
    }

    pub(crate) fn push_issue(&mut self, severity: Severity, kind: IssueKind, message: String) {
        self.issues.push(GateIssue {
            severity,
            kind,
            message,
        });
    }

    /// Which gate produced this output.
    #[must_use]
    pub fn gate(&self) -> GateId {
        self.gate
    }

    /// Look up a named scalar.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// All named scalars, ordered by name.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, f64> {
        &self.values
    }

    /// The formula trail in evaluation order.
    #[must_use]
    pub fn steps(&self) -> &[CalculationStep] {
        &self.steps
    }

    /// Issues found by the gate.
    #[must_use]
    pub fn issues(&self) -> &[GateIssue] {
        &self.issues
    }

    /// Whether any issue is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }
}

impl fmt::Display for GateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gate {}: {}", self.gate.number(), self.gate.title())?;
        for step in &self.steps {
            writeln!(f, "  {}: {}", step.name, step.formula)?;
        }
        for issue in &self.issues {
            let label = match issue.severity {
                Severity::Warning => "WARNING",
                Severity::Error => "ERROR",
            };
            writeln!(f, "  {label}: {}", issue.message)?;
        }
        Ok(())
    }
}

/// Format a length for formula text: at most four decimals, no trailing zeros.
#[must_use]
pub fn fmt_len(value: f64) -> String {
    let text = format!("{value:.4}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Join lengths into a sum expression, e.g. `0.125 + 11 + 0.125`.
pub(crate) fn sum_expr(terms: &[f64]) -> String {
    if terms.is_empty() {
        return "0".to_string();
    }
    terms.iter().map(|t| fmt_len(*t)).collect::<Vec<_>>().join(" + ")
}
