//! # Bar Arrangement Search
//!
//! Enumerates buildable (diameter, count, layers) layouts for a required
//! tension steel area.
//!
//! ## Rules
//!
//! For every candidate diameter:
//!
//! 1. Start from `max(2, ⌈Ast,req / Abar⌉)` bars.
//! 2. Try one layer. Clear spacing `(w − n·φ)/(n − 1)` must be at least
//!    `max(φ, agg + 5)`; if it is wider than the crack-control limit the
//!    count is raised until it is not.
//! 3. If one layer is too tight, split into two layers (bottom layer holds
//!    the larger half) with the vertical spacing rule between them.
//! 4. If two layers are still too tight the diameter is rejected.
//!
//! Only the smallest adequate count is kept per diameter, which is the
//! smallest excess over `Ast,req`. The output is sorted by diameter then
//! count. No option with clear spacing below the code minimum is ever
//! returned; an empty result always comes with a reason code.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::optimization::arrangement::{generate_alternatives, DEFAULT_DIAMETERS_MM};
//! use rcbeam_core::section::BeamSection;
//!
//! let section = BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0);
//! let search = generate_alternatives(682.3, &section, &DEFAULT_DIAMETERS_MM).unwrap();
//!
//! assert!(search.is_feasible());
//! for option in &search.alternatives {
//!     assert!(option.provided_area_mm2 >= option.required_area_mm2);
//!     assert!(option.clear_spacing_mm >= option.min_clear_spacing_mm);
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::detailing::{
    max_clear_spacing, min_horizontal_clear_spacing, min_vertical_clear_spacing,
};
use crate::calculations::{design_flexure, FlexureResult};
use crate::errors::{DesignError, DesignResult, InfeasibilityReason};
use crate::materials::{bar_area_mm2, is_standard_diameter, SteelGrade};
use crate::section::BeamSection;

/// Diameters tried when the caller does not choose (mm)
pub const DEFAULT_DIAMETERS_MM: [u32; 5] = [12, 16, 20, 25, 32];

/// Fewest bars in a beam: one in each bottom corner of the stirrup
const MIN_BARS: u32 = 2;

/// Extra bars the crack-control escalation may add for one diameter
const MAX_CRACK_CONTROL_EXTRA_BARS: u32 = 24;

/// How far the bar centroid may sit above the design effective depth (mm)
pub const DEPTH_TOLERANCE_MM: f64 = 0.5;

/// Flexure redesigns allowed while the bar centroid settles
const MAX_DEPTH_REVISIONS: u32 = 4;

/// One candidate reinforcement layout.
///
/// Invariants: `provided_area_mm2 ≥ required_area_mm2` and
/// `clear_spacing_mm ≥ min_clear_spacing_mm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarOption {
    /// Bar diameter (mm)
    pub dia_mm: u32,

    /// Total number of bars
    pub count: u32,

    /// Number of layers (1 or 2)
    pub layers: u32,

    /// Bars per layer, bottom layer first
    pub bars_per_layer: Vec<u32>,

    /// Provided area n·π·φ²/4 (mm²)
    pub provided_area_mm2: f64,

    /// Area the option was generated for (mm²)
    pub required_area_mm2: f64,

    /// Horizontal clear spacing in the fullest layer (mm)
    pub clear_spacing_mm: f64,

    /// Code minimum horizontal clear spacing for this diameter (mm)
    pub min_clear_spacing_mm: f64,

    /// Clear gap between layers (mm); `None` for one layer
    pub vertical_clear_spacing_mm: Option<f64>,

    /// Effective depth to the centroid of this bar group (mm)
    pub effective_depth_mm: f64,
}

impl BarOption {
    /// Provided area above the requirement (mm²)
    pub fn excess_area_mm2(&self) -> f64 {
        self.provided_area_mm2 - self.required_area_mm2
    }

    /// Bar call-out such as "4-16φ" or "5-25φ (3+2)"
    pub fn designation(&self) -> String {
        if self.layers > 1 {
            let split: Vec<String> = self.bars_per_layer.iter().map(|n| n.to_string()).collect();
            format!("{}-{}φ ({})", self.count, self.dia_mm, split.join("+"))
        } else {
            format!("{}-{}φ", self.count, self.dia_mm)
        }
    }
}

/// Why one diameter produced no option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason")]
pub enum RejectionReason {
    /// Not an IS 1786 bar size
    NonStandardDiameter,
    /// Even two layers leave less than the minimum clear spacing
    SpacingBelowMinimum {
        /// Widest spacing achieved, in the two-layer split (mm)
        best_spacing_mm: f64,
        minimum_mm: f64,
    },
    /// No count brought the spacing under the crack-control limit
    CrackControlUnattainable { maximum_mm: f64 },
}

/// A diameter that was tried and rejected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedDiameter {
    pub dia_mm: u32,
    pub reason: RejectionReason,
}

/// Outcome of an arrangement search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangementSearch {
    /// Area searched for (mm²)
    pub required_area_mm2: f64,

    /// Feasible options sorted by diameter, then count
    pub alternatives: Vec<BarOption>,

    /// Diameters with no feasible option
    pub rejected: Vec<RejectedDiameter>,

    /// Set exactly when `alternatives` is empty
    pub infeasibility: Option<InfeasibilityReason>,
}

impl ArrangementSearch {
    /// At least one buildable option exists
    pub fn is_feasible(&self) -> bool {
        !self.alternatives.is_empty()
    }

    /// Structured error for an empty search
    pub fn to_error(&self) -> Option<DesignError> {
        self.infeasibility.map(|reason| {
            let tried: Vec<String> = self.rejected.iter().map(|r| format!("{}φ", r.dia_mm)).collect();
            DesignError::infeasible(
                reason,
                format!(
                    "No arrangement provides {:.0} mm² within the section width (tried {})",
                    self.required_area_mm2,
                    if tried.is_empty() { "none".to_string() } else { tried.join(", ") }
                ),
            )
        })
    }

    /// Conventional choice among the alternatives: fewest bars, then the
    /// tightest area, then the smaller diameter.
    pub fn preferred(&self) -> Option<&BarOption> {
        preferred_option(&self.alternatives)
    }
}

/// Conventional choice among options: fewest bars, then tightest area,
/// then smaller diameter.
pub fn preferred_option(options: &[BarOption]) -> Option<&BarOption> {
    options.iter().min_by(|a, b| {
        a.count
            .cmp(&b.count)
            .then(a.provided_area_mm2.total_cmp(&b.provided_area_mm2))
            .then(a.dia_mm.cmp(&b.dia_mm))
    })
}

/// Clear spacing of `n` bars of `dia` across `width` (mm)
fn layer_clear_spacing(n: u32, dia_mm: u32, width_mm: f64) -> f64 {
    let phi = f64::from(dia_mm);
    if n <= 1 {
        width_mm - phi
    } else {
        (width_mm - f64::from(n) * phi) / f64::from(n - 1)
    }
}

/// Most bars of `dia` that fit side by side in one layer
fn max_bars_per_layer(dia_mm: u32, width_mm: f64, min_spacing_mm: f64) -> u32 {
    let fit = ((width_mm + min_spacing_mm) / (f64::from(dia_mm) + min_spacing_mm)).floor();
    if fit.is_finite() && fit > 0.0 {
        fit.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// Smallest count of `dia` bars whose area reaches `required`, or `None`
/// when that count exceeds `limit`.
fn minimum_count(required_mm2: f64, dia_mm: u32, limit: u32) -> Option<u32> {
    let area = bar_area_mm2(dia_mm);
    let bars = (required_mm2 / area).ceil();
    if !bars.is_finite() || bars > f64::from(limit) {
        return None;
    }
    let mut n = (bars as u32).max(MIN_BARS);
    while f64::from(n) * area < required_mm2 {
        n = n.checked_add(1)?;
    }
    Some(n)
}

fn build_option(
    section: &BeamSection,
    required_mm2: f64,
    dia_mm: u32,
    bars_per_layer: Vec<u32>,
    clear_spacing_mm: f64,
    min_clear_spacing_mm: f64,
) -> BarOption {
    let phi = f64::from(dia_mm);
    let count: u32 = bars_per_layer.iter().sum();
    let layers = bars_per_layer.len() as u32;
    let vertical = (layers > 1).then(|| min_vertical_clear_spacing(dia_mm, section.aggregate_size_mm));

    // Centroid height above the soffit
    let first_layer = section.clear_cover_mm + f64::from(section.stirrup_dia_mm) + phi / 2.0;
    let step = phi + vertical.unwrap_or(0.0);
    let moment: f64 = bars_per_layer
        .iter()
        .enumerate()
        .map(|(i, &n)| f64::from(n) * (first_layer + i as f64 * step))
        .sum();
    let centroid = moment / f64::from(count);

    BarOption {
        dia_mm,
        count,
        layers,
        bars_per_layer,
        provided_area_mm2: f64::from(count) * bar_area_mm2(dia_mm),
        required_area_mm2: required_mm2,
        clear_spacing_mm,
        min_clear_spacing_mm,
        vertical_clear_spacing_mm: vertical,
        effective_depth_mm: section.overall_depth_mm - centroid,
    }
}

fn arrange_diameter(
    section: &BeamSection,
    steel: SteelGrade,
    required_mm2: f64,
    dia_mm: u32,
) -> Result<BarOption, RejectionReason> {
    let width = section.clear_width_for_bars_mm();
    let min_spacing = min_horizontal_clear_spacing(dia_mm, section.aggregate_size_mm);
    let max_spacing = max_clear_spacing(steel);

    // Two full layers is the most that can ever be placed
    let capacity = max_bars_per_layer(dia_mm, width, min_spacing).saturating_mul(2);
    let Some(first) = minimum_count(required_mm2, dia_mm, capacity.max(MIN_BARS)) else {
        let bottom = (required_mm2 / bar_area_mm2(dia_mm) / 2.0).ceil().max(2.0);
        let phi = f64::from(dia_mm);
        return Err(RejectionReason::SpacingBelowMinimum {
            best_spacing_mm: (width - bottom * phi) / (bottom - 1.0),
            minimum_mm: min_spacing,
        });
    };

    for n in first..=first.saturating_add(MAX_CRACK_CONTROL_EXTRA_BARS) {
        let single = layer_clear_spacing(n, dia_mm, width);
        if single >= min_spacing {
            if single <= max_spacing {
                return Ok(build_option(section, required_mm2, dia_mm, vec![n], single, min_spacing));
            }
            continue;
        }

        let bottom = n.div_ceil(2);
        let top = n - bottom;
        let double = layer_clear_spacing(bottom, dia_mm, width);
        if double >= min_spacing {
            return Ok(build_option(
                section,
                required_mm2,
                dia_mm,
                vec![bottom, top],
                double,
                min_spacing,
            ));
        }
        return Err(RejectionReason::SpacingBelowMinimum {
            best_spacing_mm: double,
            minimum_mm: min_spacing,
        });
    }

    Err(RejectionReason::CrackControlUnattainable {
        maximum_mm: max_spacing,
    })
}

/// Enumerate feasible bar arrangements for a required tension steel area.
///
/// # Arguments
///
/// * `ast_required_mm2` - Area to provide, ≥ 0
/// * `section` - Section supplying width, cover, stirrups and aggregate
/// * `diameters` - Candidate diameters in mm (duplicates ignored)
///
/// # Returns
///
/// * `Ok(ArrangementSearch)` - possibly empty, with `infeasibility` set
/// * `Err(DesignError::InvalidInput)` - malformed section or area
pub fn generate_alternatives(
    ast_required_mm2: f64,
    section: &BeamSection,
    diameters: &[u32],
) -> DesignResult<ArrangementSearch> {
    section.validate()?;
    if !ast_required_mm2.is_finite() || ast_required_mm2 < 0.0 {
        return Err(DesignError::invalid_input(
            "ast_required_mm2",
            ast_required_mm2.to_string(),
            "Required steel area must be a finite value ≥ 0",
        ));
    }
    let steel = section.steel_grade()?;

    let mut candidates: Vec<u32> = diameters.to_vec();
    candidates.sort_unstable();
    candidates.dedup();

    let mut alternatives = Vec::new();
    let mut rejected = Vec::new();
    for dia_mm in candidates.iter().copied() {
        if !is_standard_diameter(dia_mm) {
            rejected.push(RejectedDiameter {
                dia_mm,
                reason: RejectionReason::NonStandardDiameter,
            });
            continue;
        }
        match arrange_diameter(section, steel, ast_required_mm2, dia_mm) {
            Ok(option) => alternatives.push(option),
            Err(reason) => rejected.push(RejectedDiameter { dia_mm, reason }),
        }
    }

    alternatives.sort_by(|a, b| a.dia_mm.cmp(&b.dia_mm).then(a.count.cmp(&b.count)));

    let infeasibility = if !alternatives.is_empty() {
        None
    } else if candidates.iter().all(|&d| !is_standard_diameter(d)) {
        Some(InfeasibilityReason::NoCandidateDiameters)
    } else if section.clear_width_for_bars_mm() <= 0.0 {
        Some(InfeasibilityReason::InsufficientWidth)
    } else {
        Some(InfeasibilityReason::SpacingBelowMinimum)
    };

    debug!(
        ast_required_mm2,
        feasible = alternatives.len(),
        rejected = rejected.len(),
        "bar arrangements generated"
    );

    Ok(ArrangementSearch {
        required_area_mm2: ast_required_mm2,
        alternatives,
        rejected,
        infeasibility,
    })
}

/// Flexure and the tension bars chosen for it, agreeing on `d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensionDesign {
    /// Flexure at the effective depth the bars actually provide
    pub flexure: FlexureResult,

    /// Section at that effective depth
    pub section: BeamSection,

    /// Conventional bar choice; `None` when flexure is unsafe or nothing fits
    pub arrangement: Option<BarOption>,

    /// Arrangement finding (empty search or unsettled depth)
    pub error: Option<DesignError>,
}

impl TensionDesign {
    pub fn is_safe(&self) -> bool {
        self.flexure.is_safe && self.arrangement.is_some() && self.error.is_none()
    }
}

/// Design flexure, choose the conventional bars, and redesign at the bar
/// centroid whenever it sits above the effective depth that was assumed.
///
/// A two-layer group lowers `d`; the loop repeats until the chosen bars
/// provide the depth their area was computed at. A group that never settles
/// is reported as `InfeasibleArrangement(EffectiveDepthUnsettled)`.
pub fn design_tension_bars(
    section: &BeamSection,
    mu_knm: f64,
    diameters: &[u32],
) -> DesignResult<TensionDesign> {
    let mut design_section = section.clone();
    let mut flexure = design_flexure(section, mu_knm)?;
    let mut revisions = 0;

    loop {
        if !flexure.is_safe {
            return Ok(TensionDesign {
                flexure,
                section: design_section,
                arrangement: None,
                error: None,
            });
        }

        let search = generate_alternatives(flexure.ast_required_mm2, section, diameters)?;
        let Some(option) = search.preferred().cloned() else {
            return Ok(TensionDesign {
                flexure,
                section: design_section,
                arrangement: None,
                error: search.to_error(),
            });
        };

        let assumed = design_section.effective_depth_mm;
        if option.effective_depth_mm >= assumed - DEPTH_TOLERANCE_MM {
            return Ok(TensionDesign {
                flexure,
                section: design_section,
                arrangement: Some(option),
                error: None,
            });
        }

        if revisions == MAX_DEPTH_REVISIONS {
            let error = DesignError::infeasible(
                InfeasibilityReason::EffectiveDepthUnsettled,
                format!(
                    "{} puts the steel centroid at d = {:.1} mm, above the {:.1} mm it was designed for",
                    option.designation(),
                    option.effective_depth_mm,
                    assumed
                ),
            );
            return Ok(TensionDesign {
                flexure,
                section: design_section,
                arrangement: Some(option),
                error: Some(error),
            });
        }

        debug!(
            bars = %option.designation(),
            assumed_mm = assumed,
            centroid_mm = option.effective_depth_mm,
            "redesigning flexure at the bar centroid"
        );
        revisions += 1;
        design_section = section.with_effective_depth(option.effective_depth_mm);
        flexure = design_flexure(&design_section, mu_knm)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_section() -> BeamSection {
        BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0)
    }

    fn narrow_section() -> BeamSection {
        BeamSection::rectangular(200.0, 450.0, 400.0, 25.0, 25.0, 500.0)
    }

    #[test]
    fn test_scenario_singly_reinforced_bars() {
        let search = generate_alternatives(682.3, &test_section(), &DEFAULT_DIAMETERS_MM).unwrap();
        let sixteen = search.alternatives.iter().find(|o| o.dia_mm == 16).unwrap();
        assert_eq!(sixteen.count, 4);
        assert_eq!(sixteen.layers, 1);
        assert!((sixteen.provided_area_mm2 - 804.0).abs() < 5.0);
        assert_eq!(sixteen.designation(), "4-16φ");
    }

    #[test]
    fn test_exact_minimum_spacing_is_accepted() {
        // 7-12φ in 234 mm: (234 − 84)/6 = 25 exactly
        let search = generate_alternatives(682.3, &test_section(), &[12]).unwrap();
        let opt = &search.alternatives[0];
        assert_eq!(opt.count, 7);
        assert_eq!(opt.clear_spacing_mm, 25.0);
    }

    #[test]
    fn test_narrow_beam_escalates_or_excludes() {
        let search = generate_alternatives(2000.0, &narrow_section(), &DEFAULT_DIAMETERS_MM).unwrap();
        assert!(search.is_feasible());
        for opt in &search.alternatives {
            assert!(opt.provided_area_mm2 >= 2000.0);
            assert!(opt.clear_spacing_mm >= opt.min_clear_spacing_mm);
            assert!(!(opt.layers == 1 && opt.clear_spacing_mm < 25.0));
        }
        for dia in [25, 32] {
            if let Some(opt) = search.alternatives.iter().find(|o| o.dia_mm == dia) {
                assert_eq!(opt.layers, 2);
            }
        }
        let rejected: Vec<u32> = search.rejected.iter().map(|r| r.dia_mm).collect();
        assert_eq!(rejected, vec![12, 16, 20]);
    }

    #[test]
    fn test_two_layer_reduces_effective_depth() {
        let search = generate_alternatives(2000.0, &narrow_section(), &[25]).unwrap();
        let opt = &search.alternatives[0];
        assert_eq!(opt.bars_per_layer, vec![3, 2]);
        assert_eq!(opt.vertical_clear_spacing_mm, Some(25.0));
        let single_layer_d = 450.0 - 25.0 - 8.0 - 12.5;
        assert!(opt.effective_depth_mm < single_layer_d);
        assert_eq!(opt.designation(), "5-25φ (3+2)");
    }

    #[test]
    fn test_empty_result_has_reason() {
        let search = generate_alternatives(6000.0, &narrow_section(), &DEFAULT_DIAMETERS_MM).unwrap();
        assert!(!search.is_feasible());
        assert_eq!(search.infeasibility, Some(InfeasibilityReason::SpacingBelowMinimum));
        let err = search.to_error().unwrap();
        assert_eq!(err.error_code(), "INFEASIBLE_ARRANGEMENT");
    }

    #[test]
    fn test_no_candidate_diameters() {
        let search = generate_alternatives(500.0, &test_section(), &[]).unwrap();
        assert_eq!(search.infeasibility, Some(InfeasibilityReason::NoCandidateDiameters));
        let odd = generate_alternatives(500.0, &test_section(), &[18]).unwrap();
        assert_eq!(odd.rejected[0].reason, RejectionReason::NonStandardDiameter);
        assert_eq!(odd.infeasibility, Some(InfeasibilityReason::NoCandidateDiameters));
    }

    #[test]
    fn test_crack_control_raises_count() {
        // 600 wide: 2-32φ would leave 470 mm between bars
        let wide = BeamSection::rectangular(600.0, 700.0, 650.0, 25.0, 25.0, 500.0);
        let search = generate_alternatives(1000.0, &wide, &[32]).unwrap();
        let opt = &search.alternatives[0];
        assert!(opt.count > 2);
        assert!(opt.clear_spacing_mm <= 150.0);
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let search = generate_alternatives(900.0, &test_section(), &[25, 12, 16, 12]).unwrap();
        let dias: Vec<u32> = search.alternatives.iter().map(|o| o.dia_mm).collect();
        assert_eq!(dias, vec![12, 16, 25]);
    }

    #[test]
    fn test_preferred_is_fewest_bars() {
        let search = generate_alternatives(682.3, &test_section(), &DEFAULT_DIAMETERS_MM).unwrap();
        let preferred = search.preferred().unwrap();
        // Crack control lifts 25φ and 32φ to 3 bars; 3-20φ is the tighter fit
        assert_eq!((preferred.count, preferred.dia_mm), (3, 20));
    }

    #[test]
    fn test_huge_area_is_rejected_not_overflowed() {
        let search = generate_alternatives(1.0e12, &test_section(), &[12]).unwrap();
        assert!(!search.is_feasible());
        assert_eq!(search.infeasibility, Some(InfeasibilityReason::SpacingBelowMinimum));
        assert!(matches!(
            search.rejected[0].reason,
            RejectionReason::SpacingBelowMinimum { best_spacing_mm, .. } if best_spacing_mm < 0.0
        ));

        let all = generate_alternatives(1.0e12, &test_section(), &DEFAULT_DIAMETERS_MM).unwrap();
        assert_eq!(all.rejected.len(), DEFAULT_DIAMETERS_MM.len());
    }

    #[test]
    fn test_max_bars_per_layer() {
        // 234 mm clear: 7-12φ at 25 mm fills it exactly
        assert_eq!(max_bars_per_layer(12, 234.0, 25.0), 7);
        assert_eq!(max_bars_per_layer(32, 20.0, 32.0), 0);
    }

    #[test]
    fn test_single_layer_keeps_design_depth() {
        let design = design_tension_bars(&test_section(), 120.0, &DEFAULT_DIAMETERS_MM).unwrap();
        assert!(design.is_safe());
        assert_eq!(design.flexure.effective_depth_mm, 450.0);
        assert_eq!(design.section, test_section());
    }

    #[test]
    fn test_two_layer_bars_redesign_at_centroid() {
        // 3-32φ (2+1) in 200 mm puts the centroid at d ≈ 379.7, not 400
        let design = design_tension_bars(&narrow_section(), 240.0, &DEFAULT_DIAMETERS_MM).unwrap();
        let bars = design.arrangement.as_ref().unwrap();
        assert_eq!(bars.layers, 2);
        assert!(design.flexure.effective_depth_mm < 400.0);
        assert!(bars.effective_depth_mm >= design.flexure.effective_depth_mm - DEPTH_TOLERANCE_MM);
        assert!(bars.provided_area_mm2 >= design.flexure.ast_required_mm2);
        assert_eq!(design.section.effective_depth_mm, design.flexure.effective_depth_mm);

        let nominal = design_flexure(&narrow_section(), 240.0).unwrap();
        assert!(design.flexure.ast_required_mm2 > nominal.ast_required_mm2);
        assert!(design.flexure.asc_required_mm2 > nominal.asc_required_mm2);
        assert!(design.is_safe());
    }

    #[test]
    fn test_unsafe_flexure_has_no_bars() {
        let design = design_tension_bars(&narrow_section(), 900.0, &DEFAULT_DIAMETERS_MM).unwrap();
        assert!(!design.flexure.is_safe);
        assert!(design.arrangement.is_none());
        assert!(!design.is_safe());
    }

    #[test]
    fn test_negative_area_rejected() {
        assert!(generate_alternatives(-1.0, &test_section(), &DEFAULT_DIAMETERS_MM).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_option_is_buildable(
            required in 0.0_f64..8000.0,
            width in 150.0_f64..600.0,
            cover in 20.0_f64..40.0,
        ) {
            let section = BeamSection::rectangular(width, 650.0, 590.0, cover, 30.0, 415.0);
            let search = generate_alternatives(required, &section, &DEFAULT_DIAMETERS_MM).unwrap();
            prop_assert_eq!(search.is_feasible(), search.infeasibility.is_none());
            for opt in &search.alternatives {
                prop_assert!(opt.provided_area_mm2 >= opt.required_area_mm2);
                prop_assert!(opt.clear_spacing_mm >= min_horizontal_clear_spacing(opt.dia_mm, 20.0));
                prop_assert!(opt.layers <= 2);
                prop_assert!(opt.count >= 2);
            }
        }
    }
}
