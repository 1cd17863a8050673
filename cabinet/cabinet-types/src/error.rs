//! Error types for cabinet specification handling.

use thiserror::Error;

use crate::standards::StandardKey;

/// A single problem found while validating a [`CabinetSpec`](crate::CabinetSpec).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SpecError {
    /// A length that must be strictly positive is zero, negative or not finite.
    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension {
        /// Name of the offending field.
        field: &'static str,
        /// The value supplied.
        value: f64,
    },

    /// A length that may be zero is negative or not finite.
    #[error("{field} must not be negative, got {value}")]
    NegativeDimension {
        /// Name of the offending field.
        field: &'static str,
        /// The value supplied.
        value: f64,
    },

    /// The toe kick consumes the whole cabinet height.
    #[error("box height must be positive: height {height} - toe kick {toe_kick_height} <= 0")]
    BoxHeightNotPositive {
        /// Overall cabinet height.
        height: f64,
        /// Toe-kick height.
        toe_kick_height: f64,
    },

    /// A drawer face height is not positive.
    #[error("drawer {index} face height must be positive, got {value}")]
    NonPositiveDrawerHeight {
        /// Zero-based drawer index (top to bottom).
        index: usize,
        /// The value supplied.
        value: f64,
    },

    /// A false-front descriptor has a non-positive length.
    #[error("false front {index} {field} must be positive, got {value}")]
    NonPositiveFalseFront {
        /// Zero-based false-front index (top to bottom).
        index: usize,
        /// Name of the offending field.
        field: &'static str,
        /// The value supplied.
        value: f64,
    },

    /// A shop standard is out of range for its kind of length.
    #[error("standard {} must be {requirement}, got {value}", .key.name())]
    InvalidStandard {
        /// The offending standard.
        key: StandardKey,
        /// `"positive"` or `"non-negative"`.
        requirement: &'static str,
        /// The effective value.
        value: f64,
    },

    /// A hardware clearance is invalid.
    #[error("drawer hardware {field} must not be negative, got {value}")]
    InvalidHardware {
        /// Name of the offending field.
        field: &'static str,
        /// The value supplied.
        value: f64,
    },
}

/// Every problem found in a cabinet specification.
///
/// Validation never stops at the first problem, so callers can show the
/// complete list at once.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid cabinet specification: {}", summarize(.problems))]
pub struct InvalidSpec {
    /// The individual problems, in field order.
    pub problems: Vec<SpecError>,
}

impl InvalidSpec {
    /// Number of problems found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Whether the problem list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

fn summarize(problems: &[SpecError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while building a [`Standards`](crate::Standards) bundle from named values.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// No standard constant has this name.
    #[error("unknown standard '{name}'")]
    UnknownKey {
        /// The name that was looked up.
        name: String,
    },

    /// The override value is NaN or infinite.
    #[error("standard '{name}' must be finite, got {value}")]
    NonFinite {
        /// The constant name.
        name: String,
        /// The value supplied.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_spec_lists_every_problem() {
        let err = InvalidSpec {
            problems: vec![
                SpecError::NonPositiveDimension {
                    field: "width",
                    value: 0.0,
                },
                SpecError::BoxHeightNotPositive {
                    height: 4.0,
                    toe_kick_height: 4.5,
                },
            ],
        };

        let message = err.to_string();
        assert_eq!(err.len(), 2);
        assert!(message.contains("width must be positive"));
        assert!(message.contains("toe kick 4.5"));
    }
}
