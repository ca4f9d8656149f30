//! # Design Calculations
//!
//! The code-checking components. Each follows the same pattern:
//!
//! - inputs are the immutable [`BeamSection`](crate::section::BeamSection) plus scalar actions
//! - `design_*(..) -> DesignResult<*Result>` is a pure function
//! - `Err` only for malformed inputs; design findings travel inside the result
//!   with `is_safe = false`
//!
//! ## Available Calculations
//!
//! - [`flexure`] - limiting moment and required tension/compression steel
//! - [`shear`] - nominal shear stress, τc and stirrup spacing
//! - [`detailing`] - development/lap lengths and bar spacing limits

pub mod detailing;
pub mod flexure;
pub mod shear;

pub use flexure::{design_flexure, FlexureDesignType, FlexureResult};
pub use shear::{design_shear, ShearResult, SpacingRule};

/// Relative tolerance for demand/capacity comparisons.
///
/// Keeps `Mu == Mu_lim` (and similar boundaries) on one side under
/// floating-point noise.
pub const RATIO_TOLERANCE: f64 = 1e-6;

/// `demand ≤ capacity` with a relative tolerance
pub fn within_limit(demand: f64, capacity: f64) -> bool {
    demand <= capacity + RATIO_TOLERANCE * capacity.abs().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limit_absorbs_noise() {
        let cap = 202.914e6;
        assert!(within_limit(cap, cap));
        assert!(within_limit(cap * (1.0 + 1e-9), cap));
        assert!(!within_limit(cap * 1.001, cap));
    }
}
