//! # Compliance Aggregation
//!
//! Runs flexure, bar arrangement, shear and detailing for every load case on
//! a section and picks the governing case.
//!
//! ## Utilization
//!
//! Per case:
//!
//! ```text
//! utilization = max(Mu/Mu,lim, τv/τc,max, Ast,req/Ast,max)
//! ```
//!
//! The governing case has the highest utilization, whichever check produced
//! it; equal utilizations go to the smaller case id. Mu/Mu,lim above 1 is a
//! doubly reinforced section, not a failure: safety is read from the
//! `is_safe` flags.
//!
//! ## Failures
//!
//! A case whose inputs are malformed stays in the report, marked unsafe
//! with its error and no utilization. The report's `most_severe_error`
//! surfaces the worst finding across all cases.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::compliance::aggregate;
//! use rcbeam_core::section::{BeamSection, LoadCase};
//!
//! let section = BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0);
//! let cases = vec![
//!     LoadCase::new("1.5(DL+LL)", 120.0, 80.0),
//!     LoadCase::new("1.2(DL+LL+EQ)", 95.0, 110.0),
//! ];
//!
//! let report = aggregate(&section, &cases);
//! assert!(report.passes);
//! assert_eq!(report.cases.len(), 2);
//! ```

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::detailing::{
    development_length, lap_length, max_clear_spacing, min_horizontal_clear_spacing,
    side_face_reinforcement_mm2, LapDetail, LapZone, MAX_LAPPED_DIA_MM,
};
use crate::calculations::{design_shear, FlexureResult, ShearResult};
use crate::clauses::is456_ref;
use crate::errors::{most_severe, DesignError, DesignResult};
use crate::materials::BarStress;
use crate::optimization::arrangement::{
    design_tension_bars, generate_alternatives, BarOption, DEFAULT_DIAMETERS_MM,
};
use crate::section::{BeamSection, LoadCase};

/// Check that produced a case's utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoverningCheck {
    /// Mu / Mu,lim
    Flexure,
    /// τv / τc,max
    Shear,
    /// Ast,required / Ast,max
    SteelRatio,
}

/// Anchorage and spacing figures for the chosen tension bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailingSummary {
    pub bar_dia_mm: u32,

    /// Tension development length (mm)
    pub development_length_mm: f64,

    /// Flexural tension lap; `None` for bars that may not be lapped (mm)
    pub lap_length_mm: Option<f64>,

    /// Minimum horizontal clear spacing (mm)
    pub min_clear_spacing_mm: f64,

    /// Crack-control maximum clear spacing (mm)
    pub max_clear_spacing_mm: f64,

    /// Side-face steel for deep beams, both faces (mm²)
    pub side_face_steel_mm2: Option<f64>,

    /// Clauses the figures above come from
    pub references: Vec<String>,
}

/// Everything computed for one load case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseResult {
    pub case_id: String,
    pub mu_knm: f64,
    pub vu_kn: f64,

    /// `None` when the case failed before flexure ran
    pub flexure: Option<FlexureResult>,

    /// Conventional tension bar choice
    pub arrangement: Option<BarOption>,

    /// Bars for the compression steel of doubly reinforced sections
    pub compression_arrangement: Option<BarOption>,

    pub shear: Option<ShearResult>,

    pub detailing: Option<DetailingSummary>,

    /// `None` when the case could not be evaluated
    pub utilization: Option<f64>,

    pub governing_check: Option<GoverningCheck>,

    pub is_safe: bool,

    /// Findings, in the order they were produced
    pub errors: Vec<DesignError>,
}

impl CaseResult {
    fn failed(case: &LoadCase, error: DesignError) -> Self {
        CaseResult {
            case_id: case.id.clone(),
            mu_knm: case.mu_knm,
            vu_kn: case.vu_kn,
            flexure: None,
            arrangement: None,
            compression_arrangement: None,
            shear: None,
            detailing: None,
            utilization: None,
            governing_check: None,
            is_safe: false,
            errors: vec![error],
        }
    }
}

/// Compliance of one section over all its load cases.
///
/// Built once by [`aggregate`]; consumers that want to annotate it should
/// work on a clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub section: BeamSection,

    /// Per-case results in input order
    pub cases: Vec<CaseResult>,

    pub governing_case_id: Option<String>,

    pub governing_utilization: Option<f64>,

    pub governing_check: Option<GoverningCheck>,

    /// Every case evaluated and safe
    pub passes: bool,

    /// Worst finding across all cases and the section itself
    pub most_severe_error: Option<DesignError>,

    /// Findings that apply to the whole section
    pub section_errors: Vec<DesignError>,
}

impl ComplianceReport {
    /// Result for the governing case
    pub fn governing_case(&self) -> Option<&CaseResult> {
        let id = self.governing_case_id.as_deref()?;
        self.cases.iter().find(|c| c.case_id == id)
    }

    /// Ids of unsafe cases
    pub fn failed_case_ids(&self) -> Vec<&str> {
        self.cases
            .iter()
            .filter(|c| !c.is_safe)
            .map(|c| c.case_id.as_str())
            .collect()
    }
}

/// Aggregate all cases with the default bar diameters.
pub fn aggregate(section: &BeamSection, cases: &[LoadCase]) -> ComplianceReport {
    aggregate_with_diameters(section, cases, &DEFAULT_DIAMETERS_MM)
}

/// Aggregate all cases, arranging bars from `diameters`.
///
/// Cases are evaluated in parallel; the report keeps input order.
pub fn aggregate_with_diameters(
    section: &BeamSection,
    cases: &[LoadCase],
    diameters: &[u32],
) -> ComplianceReport {
    let mut section_errors = Vec::new();
    if let Err(e) = section.validate() {
        section_errors.push(e);
    }
    if cases.is_empty() {
        section_errors.push(DesignError::invalid_input(
            "cases",
            "[]",
            "At least one load case is required",
        ));
    }

    let duplicates = duplicate_positions(cases);
    let results: Vec<CaseResult> = cases
        .par_iter()
        .enumerate()
        .map(|(i, case)| {
            if let Some(e) = section_errors.first() {
                return CaseResult::failed(case, e.clone());
            }
            if duplicates.contains(&i) {
                return CaseResult::failed(
                    case,
                    DesignError::invalid_input("id", case.id.clone(), "Load case id is not unique"),
                );
            }
            evaluate_case(section, case, diameters).unwrap_or_else(|e| CaseResult::failed(case, e))
        })
        .collect();

    let governing = results
        .iter()
        .filter_map(|r| r.utilization.map(|u| (r, u)))
        .max_by(|(a, ua), (b, ub)| ua.total_cmp(ub).then_with(|| b.case_id.cmp(&a.case_id)));

    let most_severe_error = most_severe(
        section_errors
            .iter()
            .chain(results.iter().flat_map(|r| r.errors.iter())),
    )
    .cloned();

    let passes = section_errors.is_empty() && results.iter().all(|r| r.is_safe);
    if !passes {
        warn!(
            section = %section.label(),
            failed = results.iter().filter(|r| !r.is_safe).count(),
            "section does not comply"
        );
    }

    ComplianceReport {
        section: section.clone(),
        governing_case_id: governing.map(|(r, _)| r.case_id.clone()),
        governing_utilization: governing.map(|(_, u)| u),
        governing_check: governing.and_then(|(r, _)| r.governing_check),
        passes,
        most_severe_error,
        section_errors,
        cases: results,
    }
}

/// Positions of cases whose id already appeared earlier
fn duplicate_positions(cases: &[LoadCase]) -> HashSet<usize> {
    let mut seen = HashSet::new();
    cases
        .iter()
        .enumerate()
        .filter(|(_, c)| !seen.insert(c.id.as_str()))
        .map(|(i, _)| i)
        .collect()
}

fn evaluate_case(
    section: &BeamSection,
    case: &LoadCase,
    diameters: &[u32],
) -> DesignResult<CaseResult> {
    case.validate()?;
    let mut errors = Vec::new();

    // Flexure is redesigned at the bar centroid when the bars sit higher
    let tension = design_tension_bars(section, case.mu_knm, diameters)?;
    let design_section = tension.section;
    let flexure = tension.flexure;
    let arrangement = tension.arrangement;
    if let Some(e) = &flexure.error {
        errors.push(e.clone());
    }
    errors.extend(tension.error);

    // An over-reinforced section has no meaningful bar layout
    let mut compression_arrangement = None;
    if flexure.is_safe && flexure.asc_required_mm2 > 0.0 {
        let top = generate_alternatives(flexure.asc_required_mm2, section, diameters)?;
        compression_arrangement = top.preferred().cloned();
        errors.extend(top.to_error());
    }

    let ast_provided = arrangement
        .as_ref()
        .map_or(flexure.ast_required_mm2, |a| a.provided_area_mm2);
    let shear = design_shear(&design_section, case.vu_kn, ast_provided)?;
    if let Some(e) = &shear.error {
        errors.push(e.clone());
    }

    let detailing = arrangement
        .as_ref()
        .map(|a| detailing_summary(&design_section, a.dia_mm))
        .transpose()?;

    let (utilization, governing_check) = match utilization(&flexure, &shear) {
        Ok((u, check)) => (Some(u), Some(check)),
        Err(e) => {
            errors.push(e);
            (None, None)
        }
    };

    let is_safe = flexure.is_safe && shear.is_safe && arrangement.is_some() && errors.is_empty();
    debug!(case = %case.id, ?utilization, ?governing_check, is_safe, "case evaluated");

    Ok(CaseResult {
        case_id: case.id.clone(),
        mu_knm: case.mu_knm,
        vu_kn: case.vu_kn,
        flexure: Some(flexure),
        arrangement,
        compression_arrangement,
        shear: Some(shear),
        detailing,
        utilization,
        governing_check,
        is_safe,
        errors,
    })
}

/// Largest of the three demand/capacity ratios; earlier checks win ties
fn utilization(flexure: &FlexureResult, shear: &ShearResult) -> DesignResult<(f64, GoverningCheck)> {
    let ratios = [
        (flexure.moment_utilization()?, GoverningCheck::Flexure),
        (shear.stress_utilization()?, GoverningCheck::Shear),
        (flexure.steel_ratio_utilization()?, GoverningCheck::SteelRatio),
    ];
    let mut best = ratios[0];
    for candidate in &ratios[1..] {
        if candidate.0 > best.0 {
            best = *candidate;
        }
    }
    Ok(best)
}

fn detailing_summary(section: &BeamSection, dia_mm: u32) -> DesignResult<DetailingSummary> {
    let concrete = section.concrete_grade()?;
    let steel = section.steel_grade()?;
    let lap = if dia_mm <= MAX_LAPPED_DIA_MM {
        Some(lap_length(dia_mm, concrete, steel, LapZone::FlexuralTension, LapDetail::Straight)?.lap_length_mm)
    } else {
        None
    };
    let side_face = side_face_reinforcement_mm2(section);

    let mut references: Vec<String> = [
        is456_ref::DEVELOPMENT_LENGTH,
        is456_ref::BOND_STRESS,
        is456_ref::BAR_SPACING,
        is456_ref::MAX_BAR_SPACING,
    ]
    .iter()
    .map(|r| r.to_string())
    .collect();
    if lap.is_some() {
        references.push(is456_ref::LAP_SPLICE.to_string());
    }
    if side_face.is_some() {
        references.push(is456_ref::SIDE_FACE_STEEL.to_string());
    }

    Ok(DetailingSummary {
        bar_dia_mm: dia_mm,
        development_length_mm: development_length(dia_mm, concrete, steel, BarStress::Tension),
        lap_length_mm: lap,
        min_clear_spacing_mm: min_horizontal_clear_spacing(dia_mm, section.aggregate_size_mm),
        max_clear_spacing_mm: max_clear_spacing(steel),
        side_face_steel_mm2: side_face,
        references,
    })
}
