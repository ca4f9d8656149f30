//! # Cost Optimization
//!
//! Prices each feasible [`BarOption`] over the member span and picks the
//! cheapest one that still provides the required area.
//!
//! ## Method
//!
//! ```text
//! steel volume = provided area × span
//! steel mass   = volume × steel density
//! steel cost   = mass × steel rate
//! ```
//!
//! Ties on cost go to the smaller provided area. Savings are reported
//! against the originally selected design (`selected_area_mm2`), not
//! against the cheapest alternative, and are not clamped: a negative value
//! means the original choice was already cheaper.
//!
//! Concrete and formwork costs do not depend on the bars, so they are
//! reported once for the member.
//!
//! Inputs are never modified; every [`Alternative`] owns a copy of its
//! option.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::arrangement::BarOption;
use crate::cost_profile::CostProfile;
use crate::errors::{DesignError, DesignResult, InfeasibilityReason};
use crate::section::BeamSection;
use crate::units::{CubicMeters, CubicMillimeters};

/// A priced bar option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Copy of the priced option
    pub option: BarOption,

    /// Steel volume over the span (m³)
    pub steel_volume_m3: f64,

    /// Steel mass over the span (kg)
    pub steel_mass_kg: f64,

    /// Steel cost over the span
    pub steel_cost: f64,

    /// Provided area / selected baseline area
    pub area_ratio_to_baseline: f64,

    /// Provided area reaches the required area
    pub meets_requirement: bool,

    /// The cheapest adequate alternative
    pub is_optimal: bool,
}

/// An option left out of the ranking, with the finding that excluded it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedAlternative {
    pub option: BarOption,
    pub error: DesignError,
}

/// Result of a cost optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostOptimization {
    /// Cost profile the prices came from
    pub profile_name: String,
    pub profile_version: String,
    pub currency: String,

    /// Member span (mm)
    pub span_mm: f64,

    /// Cheapest adequate alternative
    pub best: Alternative,

    /// All adequate alternatives, cheapest first; the first is `best`
    pub ranked: Vec<Alternative>,

    /// Area of the originally selected design (mm²)
    pub baseline_area_mm2: f64,

    /// Steel cost of the originally selected design
    pub baseline_steel_cost: f64,

    /// baseline cost − best cost, may be negative
    pub savings: f64,

    /// Savings as a percentage of the baseline cost
    pub savings_percent: f64,

    /// Concrete cost of the member, independent of the bars
    pub concrete_cost: f64,

    /// Formwork cost of the member, independent of the bars
    pub formwork_cost: f64,

    /// Options excluded before ranking
    pub rejected: Vec<RejectedAlternative>,
}

impl CostOptimization {
    /// The `(best, ranked)` pair
    pub fn best_and_ranked(&self) -> (&Alternative, &[Alternative]) {
        (&self.best, &self.ranked)
    }

    /// Steel, concrete and formwork for the best alternative
    pub fn total_member_cost(&self) -> f64 {
        self.best.steel_cost + self.concrete_cost + self.formwork_cost
    }
}

/// Steel volume, mass and cost for `area_mm2` over `span_mm`
fn price_steel(area_mm2: f64, span_mm: f64, profile: &CostProfile) -> (f64, f64, f64) {
    let volume: CubicMeters = CubicMillimeters(area_mm2 * span_mm).into();
    let mass = volume.0 * profile.steel_density_kg_per_m3;
    (volume.0, mass, mass * profile.steel_rate_per_kg)
}

/// Select the minimum-cost alternative and report savings against the
/// originally selected design.
///
/// # Arguments
///
/// * `alternatives` - Candidate options, typically from `generate_alternatives`
/// * `section` - Member section, for concrete and formwork quantities
/// * `span_mm` - Member length the steel runs over (mm)
/// * `selected_area_mm2` - Steel area of the originally selected design (mm²)
/// * `profile` - Rates to price with
///
/// # Returns
///
/// * `Err(DivisionGuard)` - `selected_area_mm2 ≤ 0`; checked before any pricing
/// * `Err(InfeasibleArrangement)` - no alternative is adequate
/// * `Err(InvalidInput)` - bad span, section or profile
pub fn optimize_cost(
    alternatives: &[BarOption],
    section: &BeamSection,
    span_mm: f64,
    selected_area_mm2: f64,
    profile: &CostProfile,
) -> DesignResult<CostOptimization> {
    profile.validate()?;
    section.validate()?;
    if !span_mm.is_finite() || span_mm <= 0.0 {
        return Err(DesignError::invalid_input(
            "span_mm",
            span_mm.to_string(),
            "Span must be a positive finite number",
        ));
    }
    if !selected_area_mm2.is_finite() || selected_area_mm2 <= 0.0 {
        return Err(DesignError::division_guard("selected_area_mm2", selected_area_mm2));
    }

    let mut adequate = Vec::new();
    let mut rejected = Vec::new();
    for option in alternatives {
        if !option.provided_area_mm2.is_finite() || option.provided_area_mm2 <= 0.0 {
            rejected.push(RejectedAlternative {
                option: option.clone(),
                error: DesignError::division_guard("provided_area_mm2", option.provided_area_mm2),
            });
            continue;
        }
        if option.provided_area_mm2 < option.required_area_mm2 {
            rejected.push(RejectedAlternative {
                option: option.clone(),
                error: DesignError::infeasible(
                    InfeasibilityReason::NoAdequateAlternative,
                    format!(
                        "{} provides {:.0} mm² of the {:.0} mm² required",
                        option.designation(),
                        option.provided_area_mm2,
                        option.required_area_mm2
                    ),
                ),
            });
            continue;
        }

        let (volume, mass, cost) = price_steel(option.provided_area_mm2, span_mm, profile);
        adequate.push(Alternative {
            option: option.clone(),
            steel_volume_m3: volume,
            steel_mass_kg: mass,
            steel_cost: cost,
            area_ratio_to_baseline: option.provided_area_mm2 / selected_area_mm2,
            meets_requirement: true,
            is_optimal: false,
        });
    }

    if adequate.is_empty() {
        warn!(
            candidates = alternatives.len(),
            rejected = rejected.len(),
            "no adequate alternative to price"
        );
        return Err(DesignError::infeasible(
            InfeasibilityReason::NoAdequateAlternative,
            format!(
                "None of the {} alternatives provides the required area",
                alternatives.len()
            ),
        ));
    }

    adequate.sort_by(|a, b| {
        a.steel_cost
            .total_cmp(&b.steel_cost)
            .then(a.option.provided_area_mm2.total_cmp(&b.option.provided_area_mm2))
            .then(a.option.dia_mm.cmp(&b.option.dia_mm))
    });
    adequate[0].is_optimal = true;
    let best = adequate[0].clone();

    let (_, _, baseline_steel_cost) = price_steel(selected_area_mm2, span_mm, profile);
    let savings = baseline_steel_cost - best.steel_cost;
    let savings_percent = 100.0 * savings / baseline_steel_cost;

    let concrete_volume: CubicMeters = CubicMillimeters(section.concrete_area_mm2() * span_mm).into();
    let formwork_area_m2 = section.formwork_perimeter_mm() * span_mm * 1e-6;

    debug!(
        best = %best.option.designation(),
        best_cost = best.steel_cost,
        baseline_steel_cost,
        savings,
        "cost optimization complete"
    );

    Ok(CostOptimization {
        profile_name: profile.name.clone(),
        profile_version: profile.version.clone(),
        currency: profile.currency.clone(),
        span_mm,
        best,
        ranked: adequate,
        baseline_area_mm2: selected_area_mm2,
        baseline_steel_cost,
        savings,
        savings_percent,
        concrete_cost: concrete_volume.0 * profile.concrete_rate_per_m3,
        formwork_cost: formwork_area_m2 * profile.formwork_rate_per_m2,
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::arrangement::{generate_alternatives, DEFAULT_DIAMETERS_MM};

    fn test_section() -> BeamSection {
        BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0)
    }

    fn options() -> Vec<BarOption> {
        generate_alternatives(682.3, &test_section(), &DEFAULT_DIAMETERS_MM)
            .unwrap()
            .alternatives
    }

    #[test]
    fn test_zero_selected_area_is_guarded() {
        let err = optimize_cost(&options(), &test_section(), 6000.0, 0.0, &CostProfile::default())
            .unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_GUARD");
        let negative = optimize_cost(&options(), &test_section(), 6000.0, -10.0, &CostProfile::default());
        assert!(matches!(negative, Err(DesignError::DivisionGuard { .. })));
    }

    #[test]
    fn test_best_is_cheapest_adequate() {
        let result =
            optimize_cost(&options(), &test_section(), 6000.0, 942.5, &CostProfile::default()).unwrap();
        // 7-12φ gives 791.7 mm², the tightest fit over 682.3
        assert_eq!((result.best.option.count, result.best.option.dia_mm), (7, 12));
        assert!(result.best.is_optimal);
        assert_eq!(result.ranked.iter().filter(|a| a.is_optimal).count(), 1);
        for pair in result.ranked.windows(2) {
            assert!(pair[0].steel_cost <= pair[1].steel_cost);
        }
        let (best, ranked) = result.best_and_ranked();
        assert_eq!(best, &ranked[0]);
    }

    #[test]
    fn test_steel_pricing() {
        let result =
            optimize_cost(&options(), &test_section(), 6000.0, 804.25, &CostProfile::default()).unwrap();
        let four_16 = result.ranked.iter().find(|a| a.option.dia_mm == 16).unwrap();
        // 804.25 mm² × 6 m = 0.004825 m³ → 37.88 kg → 2651.6 at 70/kg
        assert!((four_16.steel_volume_m3 - 0.0048255).abs() < 1e-6);
        assert!((four_16.steel_mass_kg - 37.88).abs() < 0.01);
        assert!((four_16.steel_cost - 2651.6).abs() < 0.5);
        assert!((four_16.area_ratio_to_baseline - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_negative_savings_not_clamped() {
        // Baseline tighter than any buildable option
        let result =
            optimize_cost(&options(), &test_section(), 6000.0, 700.0, &CostProfile::default()).unwrap();
        assert!(result.savings < 0.0);
        assert!(result.savings_percent < 0.0);
    }

    #[test]
    fn test_invalid_options_rejected_not_priced() {
        let mut opts = options();
        let mut zero = opts[0].clone();
        zero.provided_area_mm2 = 0.0;
        let mut short = opts[1].clone();
        short.provided_area_mm2 = short.required_area_mm2 - 1.0;
        opts.push(zero);
        opts.push(short);

        let result =
            optimize_cost(&opts, &test_section(), 6000.0, 804.25, &CostProfile::default()).unwrap();
        assert_eq!(result.rejected.len(), 2);
        assert_eq!(result.rejected[0].error.error_code(), "DIVISION_GUARD");
        assert_eq!(result.rejected[1].error.error_code(), "INFEASIBLE_ARRANGEMENT");
        assert!(result.ranked.iter().all(|a| a.steel_cost.is_finite()));
    }

    #[test]
    fn test_no_adequate_alternative() {
        let err = optimize_cost(&[], &test_section(), 6000.0, 804.25, &CostProfile::default()).unwrap_err();
        assert!(matches!(
            err,
            DesignError::InfeasibleArrangement { reason: InfeasibilityReason::NoAdequateAlternative, .. }
        ));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let opts = options();
        let snapshot = opts.clone();
        let _ = optimize_cost(&opts, &test_section(), 6000.0, 804.25, &CostProfile::default()).unwrap();
        assert_eq!(opts, snapshot);
    }

    #[test]
    fn test_member_costs() {
        let result =
            optimize_cost(&options(), &test_section(), 6000.0, 804.25, &CostProfile::default()).unwrap();
        // 0.15 m² × 6 m × 6000
        assert!((result.concrete_cost - 5400.0).abs() < 1e-6);
        // 1.3 m × 6 m × 400
        assert!((result.formwork_cost - 3120.0).abs() < 1e-6);
        assert!(result.total_member_cost() > result.best.steel_cost);
    }

    #[test]
    fn test_bad_span() {
        let err = optimize_cost(&options(), &test_section(), 0.0, 804.25, &CostProfile::default()).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_ERROR");
    }

    #[test]
    fn test_idempotent() {
        let a = optimize_cost(&options(), &test_section(), 6000.0, 804.25, &CostProfile::default()).unwrap();
        let b = optimize_cost(&options(), &test_section(), 6000.0, 804.25, &CostProfile::default()).unwrap();
        assert_eq!(a, b);
    }
}
