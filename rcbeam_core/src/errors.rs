//! # Error Types
//!
//! Structured error types for rcbeam_core. Every error carries enough context
//! for an engineer to verify the finding by hand: the offending field or
//! quantity, a human-readable reason and, where one applies, the IS 456 clause.
//!
//! ## Propagation
//!
//! Malformed inputs are returned as `Err(DesignError::InvalidInput { .. })`
//! before any calculation starts. Design findings (over-reinforcement, an
//! arrangement that cannot be built, shear beyond the section's capacity) are
//! not `Err`s: they travel inside the result structures next to an
//! `is_safe = false` flag so batch callers keep going.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::errors::{DesignError, DesignResult};
//!
//! fn validate_width(width_mm: f64) -> DesignResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(DesignError::invalid_input(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_width(-1.0).unwrap_err().error_code(), "INPUT_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clauses::is456_ref;

/// Result type alias for rcbeam_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Why no buildable bar arrangement exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfeasibilityReason {
    /// No candidate diameters were supplied
    NoCandidateDiameters,
    /// Every candidate diameter violated the minimum clear spacing in two layers
    SpacingBelowMinimum,
    /// Width left after cover and stirrups cannot hold two bars of any diameter
    InsufficientWidth,
    /// Every alternative handed to the cost optimizer was rejected or short of the required area
    NoAdequateAlternative,
    /// Every strategy of the baseline fallback chain failed
    FallbackExhausted,
    /// Redesigning at the bar centroid kept moving the centroid up
    EffectiveDepthUnsettled,
}

impl InfeasibilityReason {
    /// Short reason code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            InfeasibilityReason::NoCandidateDiameters => "NO_CANDIDATE_DIAMETERS",
            InfeasibilityReason::SpacingBelowMinimum => "SPACING_BELOW_MINIMUM",
            InfeasibilityReason::InsufficientWidth => "INSUFFICIENT_WIDTH",
            InfeasibilityReason::NoAdequateAlternative => "NO_ADEQUATE_ALTERNATIVE",
            InfeasibilityReason::FallbackExhausted => "FALLBACK_EXHAUSTED",
            InfeasibilityReason::EffectiveDepthUnsettled => "EFFECTIVE_DEPTH_UNSETTLED",
        }
    }
}

/// Structured error type for design operations.
///
/// Variants are ranked by [`DesignError::severity`],
/// which the compliance aggregator uses to surface the worst finding.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// Malformed geometry, material or load before any calculation
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Moment exceeds capacity even with the maximum permitted compression steel
    #[error("Over-reinforced section: {message} ({clause})")]
    OverReinforced { message: String, clause: String },

    /// No bar diameter/count satisfies the placement rules
    #[error("No feasible bar arrangement [{}]: {message} ({clause})", .reason.code())]
    InfeasibleArrangement {
        reason: InfeasibilityReason,
        message: String,
        clause: String,
    },

    /// A ratio's denominator was zero or negative; checked before dividing
    #[error("Division guard on '{quantity}': denominator {value} must be positive")]
    DivisionGuard { quantity: String, value: f64 },

    /// Nominal shear stress exceeds the maximum the concrete can carry
    #[error("Shear stress {tau_v:.3} N/mm² exceeds τc,max {tau_c_max:.2} N/mm²; resize the section ({clause})")]
    ShearCapacityExceeded {
        tau_v: f64,
        tau_c_max: f64,
        clause: String,
    },

    /// Required stirrup spacing is too close to be placed and compacted
    #[error("Stirrup spacing {spacing_mm:.0} mm is below the practical minimum of {minimum_mm:.0} mm ({clause})")]
    StirrupSpacingImpractical {
        spacing_mm: f64,
        minimum_mm: f64,
        clause: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl DesignError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OverReinforced error
    pub fn over_reinforced(message: impl Into<String>, clause: impl Into<String>) -> Self {
        DesignError::OverReinforced {
            message: message.into(),
            clause: clause.into(),
        }
    }

    /// Create an InfeasibleArrangement error
    pub fn infeasible(reason: InfeasibilityReason, message: impl Into<String>) -> Self {
        DesignError::InfeasibleArrangement {
            reason,
            message: message.into(),
            clause: is456_ref::BAR_SPACING.to_string(),
        }
    }

    /// Create a DivisionGuard error
    pub fn division_guard(quantity: impl Into<String>, value: f64) -> Self {
        DesignError::DivisionGuard {
            quantity: quantity.into(),
            value,
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        DesignError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INPUT_ERROR",
            DesignError::OverReinforced { .. } => "OVER_REINFORCED",
            DesignError::InfeasibleArrangement { .. } => "INFEASIBLE_ARRANGEMENT",
            DesignError::DivisionGuard { .. } => "DIVISION_GUARD",
            DesignError::ShearCapacityExceeded { .. } => "SHEAR_CAPACITY_EXCEEDED",
            DesignError::StirrupSpacingImpractical { .. } => "STIRRUP_SPACING_IMPRACTICAL",
            DesignError::FileError { .. } => "FILE_ERROR",
            DesignError::SerializationError { .. } => "SERIALIZATION_ERROR",
            DesignError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }

    /// Code clause the finding can be verified against, if any
    pub fn clause(&self) -> Option<&str> {
        match self {
            DesignError::OverReinforced { clause, .. }
            | DesignError::InfeasibleArrangement { clause, .. }
            | DesignError::ShearCapacityExceeded { clause, .. }
            | DesignError::StirrupSpacingImpractical { clause, .. } => Some(clause),
            _ => None,
        }
    }

    /// Severity rank; higher is worse.
    ///
    /// Inputs that could not be evaluated at all outrank findings that demand
    /// a resized section, which outrank findings about detailing.
    pub fn severity(&self) -> u8 {
        match self {
            DesignError::FileError { .. }
            | DesignError::SerializationError { .. }
            | DesignError::VersionMismatch { .. } => 6,
            DesignError::InvalidInput { .. } => 5,
            DesignError::DivisionGuard { .. } => 4,
            DesignError::OverReinforced { .. } => 3,
            DesignError::ShearCapacityExceeded { .. } => 3,
            DesignError::InfeasibleArrangement { .. } => 2,
            DesignError::StirrupSpacingImpractical { .. } => 1,
        }
    }
}

/// Pick the most severe error of a collection; the first one wins ties.
pub fn most_severe<'a, I>(errors: I) -> Option<&'a DesignError>
where
    I: IntoIterator<Item = &'a DesignError>,
{
    errors.into_iter().fold(None, |worst, e| match worst {
        Some(w) if w.severity() >= e.severity() => Some(w),
        _ => Some(e),
    })
}
