//! # Baseline Design Fallback Chain
//!
//! The baseline is the conventional design the cost optimizer measures
//! savings against. When the section as given cannot be designed, an
//! ordered list of [`FallbackStrategy`]s is tried, each a pure transform of
//! the section:
//!
//! | Strategy             | Transform                                      |
//! |----------------------|------------------------------------------------|
//! | `AsDesigned`         | none                                           |
//! | `ConcreteGrade(g)`   | raise fck to grade `g` (skipped if not higher) |
//! | `SpanDepthRatio(r)`  | deepen to span/r, rounded up to 25 mm          |
//!
//! The first strategy giving a safe flexure design, a buildable bar
//! arrangement and safe shear wins. Every attempt is recorded.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::arrangement::{design_tension_bars, BarOption, TensionDesign};
use crate::calculations::{design_shear, FlexureResult, ShearResult};
use crate::errors::{DesignError, DesignResult, InfeasibilityReason};
use crate::materials::ConcreteGrade;
use crate::section::{BeamSection, LoadCase};

/// Depths from span/depth ratios are rounded up to this (mm)
const DEPTH_INCREMENT_MM: f64 = 25.0;

/// One step of the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FallbackStrategy {
    /// The section exactly as supplied
    AsDesigned,
    /// Raise the concrete grade
    ConcreteGrade(ConcreteGrade),
    /// Deepen the section to span / ratio, cover zone kept
    SpanDepthRatio(f64),
}

impl FallbackStrategy {
    /// Transformed section, or `None` when the strategy changes nothing
    pub fn apply(&self, section: &BeamSection, span_mm: f64) -> DesignResult<Option<BeamSection>> {
        match *self {
            FallbackStrategy::AsDesigned => Ok(Some(section.clone())),
            FallbackStrategy::ConcreteGrade(grade) => {
                if grade > section.concrete_grade()? {
                    Ok(Some(section.with_fck(grade.fck())))
                } else {
                    Ok(None)
                }
            }
            FallbackStrategy::SpanDepthRatio(ratio) => {
                if !ratio.is_finite() || ratio <= 0.0 {
                    return Err(DesignError::invalid_input(
                        "span_depth_ratio",
                        ratio.to_string(),
                        "Span/depth ratio must be positive",
                    ));
                }
                let depth = (span_mm / ratio / DEPTH_INCREMENT_MM).ceil() * DEPTH_INCREMENT_MM;
                if depth <= section.overall_depth_mm {
                    return Ok(None);
                }
                let bottom_zone = section.overall_depth_mm - section.effective_depth_mm;
                Ok(Some(BeamSection {
                    overall_depth_mm: depth,
                    effective_depth_mm: depth - bottom_zone,
                    ..section.clone()
                }))
            }
        }
    }

    /// Short label for reports
    pub fn label(&self) -> String {
        match self {
            FallbackStrategy::AsDesigned => "as designed".to_string(),
            FallbackStrategy::ConcreteGrade(g) => format!("concrete {}", g),
            FallbackStrategy::SpanDepthRatio(r) => format!("depth span/{}", r),
        }
    }
}

/// The usual chain: as designed, M25, M30, then span/10 depth.
pub fn default_fallback_chain() -> Vec<FallbackStrategy> {
    vec![
        FallbackStrategy::AsDesigned,
        FallbackStrategy::ConcreteGrade(ConcreteGrade::M25),
        FallbackStrategy::ConcreteGrade(ConcreteGrade::M30),
        FallbackStrategy::SpanDepthRatio(10.0),
    ]
}

/// What happened to one strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum AttemptOutcome {
    /// Strategy would not change the section
    Skipped,
    /// Strategy was tried and failed with this finding
    Failed { error: DesignError },
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackAttempt {
    pub strategy: FallbackStrategy,
    pub outcome: AttemptOutcome,
}

/// The baseline design and how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineDesign {
    /// Strategy that succeeded
    pub strategy: FallbackStrategy,

    /// Section after the strategy's transform
    pub section: BeamSection,

    pub flexure: FlexureResult,

    /// Conventional bar choice for the tension steel
    pub arrangement: BarOption,

    /// Shear design with the arranged steel
    pub shear: ShearResult,

    /// Every strategy considered, in order
    pub attempts: Vec<FallbackAttempt>,
}

impl BaselineDesign {
    /// Provided tension steel area of the baseline (mm²)
    pub fn selected_area_mm2(&self) -> f64 {
        self.arrangement.provided_area_mm2
    }
}

/// Flexure, bars and shear for one candidate section.
fn try_section(
    section: &BeamSection,
    case: &LoadCase,
    diameters: &[u32],
) -> DesignResult<(FlexureResult, BarOption, ShearResult)> {
    let tension = design_tension_bars(section, case.mu_knm, diameters)?;
    let TensionDesign {
        flexure,
        section: design_section,
        arrangement,
        error,
    } = tension;
    if let Some(error) = flexure.error.clone().or(error) {
        return Err(error);
    }
    let Some(arrangement) = arrangement else {
        return Err(DesignError::infeasible(
            InfeasibilityReason::SpacingBelowMinimum,
            "No arrangement found",
        ));
    };

    let shear = design_shear(&design_section, case.vu_kn, arrangement.provided_area_mm2)?;
    if let Some(error) = shear.error.clone() {
        return Err(error);
    }
    Ok((flexure, arrangement, shear))
}

/// Run the fallback chain and return the first design that works.
///
/// Input errors on the section or case stop the chain immediately; design
/// findings move on to the next strategy. When every strategy fails the
/// result is `InfeasibleArrangement(FallbackExhausted)`.
pub fn design_baseline(
    section: &BeamSection,
    case: &LoadCase,
    span_mm: f64,
    diameters: &[u32],
    chain: &[FallbackStrategy],
) -> DesignResult<BaselineDesign> {
    section.validate()?;
    case.validate()?;
    if !span_mm.is_finite() || span_mm <= 0.0 {
        return Err(DesignError::invalid_input(
            "span_mm",
            span_mm.to_string(),
            "Span must be a positive finite number",
        ));
    }

    let mut attempts = Vec::with_capacity(chain.len());
    for strategy in chain.iter().copied() {
        let Some(candidate) = strategy.apply(section, span_mm)? else {
            attempts.push(FallbackAttempt {
                strategy,
                outcome: AttemptOutcome::Skipped,
            });
            continue;
        };

        match try_section(&candidate, case, diameters) {
            Ok((flexure, arrangement, shear)) => {
                attempts.push(FallbackAttempt {
                    strategy,
                    outcome: AttemptOutcome::Succeeded,
                });
                debug!(strategy = %strategy.label(), bars = %arrangement.designation(), "baseline found");
                return Ok(BaselineDesign {
                    strategy,
                    section: candidate,
                    flexure,
                    arrangement,
                    shear,
                    attempts,
                });
            }
            Err(error @ DesignError::InvalidInput { .. }) => return Err(error),
            Err(error) => {
                info!(strategy = %strategy.label(), code = error.error_code(), "baseline strategy failed");
                attempts.push(FallbackAttempt {
                    strategy,
                    outcome: AttemptOutcome::Failed { error },
                });
            }
        }
    }

    Err(DesignError::infeasible(
        InfeasibilityReason::FallbackExhausted,
        format!(
            "No baseline design for case '{}' after {} strategies",
            case.id,
            attempts.len()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::arrangement::{DEFAULT_DIAMETERS_MM, DEPTH_TOLERANCE_MM};

    fn test_section() -> BeamSection {
        BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0)
    }

    #[test]
    fn test_as_designed_succeeds_first() {
        let case = LoadCase::new("LC1", 120.0, 80.0);
        let baseline = design_baseline(
            &test_section(),
            &case,
            6000.0,
            &DEFAULT_DIAMETERS_MM,
            &default_fallback_chain(),
        )
        .unwrap();
        assert_eq!(baseline.strategy, FallbackStrategy::AsDesigned);
        assert_eq!(baseline.attempts.len(), 1);
        assert!(baseline.selected_area_mm2() >= baseline.flexure.ast_required_mm2);
    }

    #[test]
    fn test_falls_back_to_higher_grade() {
        // τv = 420/(300·450) = 3.11 exceeds τc,max of M20 (2.8) and M25 (3.1)
        let mut section = test_section().with_fck(20.0);
        section.stirrup_dia_mm = 10;
        section.stirrup_legs = 4;
        let case = LoadCase::new("LC1", 150.0, 420.0);
        let baseline =
            design_baseline(&section, &case, 6000.0, &DEFAULT_DIAMETERS_MM, &default_fallback_chain())
                .unwrap();
        assert_eq!(baseline.strategy, FallbackStrategy::ConcreteGrade(ConcreteGrade::M30));
        assert!(matches!(baseline.attempts[0].outcome, AttemptOutcome::Failed { .. }));
        assert!(matches!(baseline.attempts[1].outcome, AttemptOutcome::Failed { .. }));
        assert_eq!(baseline.section.fck_mpa, 30.0);
    }

    #[test]
    fn test_lower_grade_is_skipped() {
        let section = test_section().with_fck(30.0);
        let applied = FallbackStrategy::ConcreteGrade(ConcreteGrade::M25)
            .apply(&section, 6000.0)
            .unwrap();
        assert!(applied.is_none());
    }

    #[test]
    fn test_span_depth_keeps_bottom_zone() {
        let deeper = FallbackStrategy::SpanDepthRatio(10.0)
            .apply(&test_section(), 7100.0)
            .unwrap()
            .unwrap();
        assert_eq!(deeper.overall_depth_mm, 725.0);
        assert_eq!(deeper.effective_depth_mm, 675.0);
    }

    #[test]
    fn test_chain_exhausted() {
        // τv far above τc,max at every grade and depth in the chain
        let case = LoadCase::new("LC1", 100.0, 900.0);
        let err = design_baseline(
            &test_section(),
            &case,
            6000.0,
            &DEFAULT_DIAMETERS_MM,
            &default_fallback_chain(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DesignError::InfeasibleArrangement { reason: InfeasibilityReason::FallbackExhausted, .. }
        ));
    }

    #[test]
    fn test_two_layer_baseline_designed_at_bar_centroid() {
        let narrow = BeamSection::rectangular(200.0, 450.0, 400.0, 25.0, 25.0, 500.0);
        let case = LoadCase::new("LC1", 240.0, 40.0);
        let baseline =
            design_baseline(&narrow, &case, 5000.0, &DEFAULT_DIAMETERS_MM, &default_fallback_chain())
                .unwrap();
        assert_eq!(baseline.strategy, FallbackStrategy::AsDesigned);
        assert_eq!(baseline.arrangement.layers, 2);
        assert!(
            baseline.arrangement.effective_depth_mm
                >= baseline.flexure.effective_depth_mm - DEPTH_TOLERANCE_MM
        );
        assert!(baseline.flexure.effective_depth_mm < 400.0);
    }

    #[test]
    fn test_input_error_stops_chain() {
        let case = LoadCase::new("LC1", -5.0, 10.0);
        let err = design_baseline(&test_section(), &case, 6000.0, &DEFAULT_DIAMETERS_MM, &default_fallback_chain())
            .unwrap_err();
        assert_eq!(err.error_code(), "INPUT_ERROR");
    }
}
