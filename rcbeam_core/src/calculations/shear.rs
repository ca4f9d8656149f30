//! # Shear Design
//!
//! Nominal shear stress, concrete shear strength and vertical stirrup spacing
//! per IS 456:2000 clause 40.
//!
//! ## Method
//!
//! - `τv = Vu/(b·d)` (40.1)
//! - `τc` from Table 19 at `pt = 100·Ast,provided/(b·d)`, clamped to the table
//! - `τv > τc,max` (Table 20): unsafe whatever the stirrups, the section must
//!   be resized
//! - otherwise the spacing is the smallest of the strength requirement
//!   `0.87·fy·Asv·d/Vus`, the minimum-steel spacing `0.87·fy·Asv/(0.4·b)` and
//!   `min(0.75·d, 300)`, then rounded **down** to a 25 mm multiple
//!
//! Stirrup design strength is capped at 415 N/mm² (40.4).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::within_limit;
use crate::clauses::is456_ref;
use crate::errors::{DesignError, DesignResult};
use crate::materials::{bar_area_mm2, design_shear_strength, max_shear_stress};
use crate::section::BeamSection;
use crate::units::{KiloNewtons, Newtons};

/// Stirrup spacings are detailed in multiples of this (mm)
pub const SPACING_INCREMENT_MM: f64 = 25.0;

/// Closest stirrup spacing that can still be placed and compacted (mm)
pub const MIN_PRACTICAL_SPACING_MM: f64 = 75.0;

/// Absolute cap on stirrup spacing (mm), 26.5.1.5
const MAX_SPACING_MM: f64 = 300.0;

/// Upper limit on the design strength of shear reinforcement (N/mm²)
const MAX_STIRRUP_FY: f64 = 415.0;

/// Which limit produced the stirrup spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacingRule {
    /// Shear in excess of τc·b·d
    Strength,
    /// Minimum shear reinforcement, 26.5.1.6
    MinimumReinforcement,
    /// 0.75·d or 300 mm, 26.5.1.5
    MaximumSpacing,
}

impl SpacingRule {
    pub fn clause(&self) -> &'static str {
        match self {
            SpacingRule::Strength => is456_ref::SHEAR_REINFORCEMENT,
            SpacingRule::MinimumReinforcement => is456_ref::MIN_SHEAR_STEEL,
            SpacingRule::MaximumSpacing => is456_ref::STIRRUP_MAX_SPACING,
        }
    }
}

/// Results from shear design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearResult {
    /// Factored shear Vu (kN)
    pub vu_kn: f64,

    /// Nominal shear stress τv (N/mm²)
    pub tau_v_mpa: f64,

    /// Design shear strength of concrete τc (N/mm²)
    pub tau_c_mpa: f64,

    /// Maximum shear stress τc,max (N/mm²)
    pub tau_c_max_mpa: f64,

    /// Tension steel percentage used for τc
    pub pt_percent: f64,

    /// Shear to be carried by stirrups, Vu − τc·b·d, never negative (kN)
    pub vus_kn: f64,

    /// Stirrup bar diameter (mm)
    pub stirrup_dia_mm: u32,

    /// Number of stirrup legs
    pub stirrup_legs: u32,

    /// Design strength used for stirrups, fy capped at 415 (N/mm²)
    pub stirrup_fy_mpa: f64,

    /// Spacing before rounding (mm); `None` when τv > τc,max
    pub computed_spacing_mm: Option<f64>,

    /// Detailed spacing, rounded down to 25 mm (mm); `None` when τv > τc,max
    pub required_spacing_mm: Option<f64>,

    /// Limit that produced the spacing
    pub spacing_rule: Option<SpacingRule>,

    /// False when τv > τc,max or the spacing cannot be built
    pub is_safe: bool,

    /// Structured finding when `is_safe` is false
    pub error: Option<DesignError>,

    /// Clauses the figures above were computed under
    pub references: Vec<String>,
}

impl ShearResult {
    /// τv / τc,max
    pub fn stress_utilization(&self) -> DesignResult<f64> {
        if self.tau_c_max_mpa <= 0.0 {
            return Err(DesignError::division_guard("tau_c_max_mpa", self.tau_c_max_mpa));
        }
        Ok(self.tau_v_mpa / self.tau_c_max_mpa)
    }
}

/// Round a spacing down to the detailing increment
pub fn round_spacing_down(spacing_mm: f64) -> f64 {
    (spacing_mm / SPACING_INCREMENT_MM).floor() * SPACING_INCREMENT_MM
}

/// Design vertical stirrups for a factored shear.
///
/// # Arguments
///
/// * `section` - Beam section (web width for flanged sections)
/// * `vu_kn` - Factored shear, kN, ≥ 0
/// * `ast_provided_mm2` - Tension steel actually provided at the section, mm²
pub fn design_shear(
    section: &BeamSection,
    vu_kn: f64,
    ast_provided_mm2: f64,
) -> DesignResult<ShearResult> {
    section.validate()?;
    if !vu_kn.is_finite() || vu_kn < 0.0 {
        return Err(DesignError::invalid_input(
            "vu_kn",
            vu_kn.to_string(),
            "Factored shear must be a finite value ≥ 0",
        ));
    }
    if !ast_provided_mm2.is_finite() || ast_provided_mm2 < 0.0 {
        return Err(DesignError::invalid_input(
            "ast_provided_mm2",
            ast_provided_mm2.to_string(),
            "Provided steel area must be a finite value ≥ 0",
        ));
    }

    let grade = section.concrete_grade()?;
    let b = section.width_mm;
    let d = section.effective_depth_mm;
    let vu: Newtons = KiloNewtons(vu_kn).into();

    let tau_v = vu.value() / (b * d);
    let pt = 100.0 * ast_provided_mm2 / (b * d);
    let tau_c = design_shear_strength(pt, grade);
    let tau_c_max = max_shear_stress(grade);
    let vus = (vu - Newtons(tau_c * b * d)).value().max(0.0);

    let stirrup_fy = section.fy_mpa.min(MAX_STIRRUP_FY);
    let asv = f64::from(section.stirrup_legs) * bar_area_mm2(section.stirrup_dia_mm);

    let mut result = ShearResult {
        vu_kn,
        tau_v_mpa: tau_v,
        tau_c_mpa: tau_c,
        tau_c_max_mpa: tau_c_max,
        pt_percent: pt,
        vus_kn: KiloNewtons::from(Newtons(vus)).0,
        stirrup_dia_mm: section.stirrup_dia_mm,
        stirrup_legs: section.stirrup_legs,
        stirrup_fy_mpa: stirrup_fy,
        computed_spacing_mm: None,
        required_spacing_mm: None,
        spacing_rule: None,
        is_safe: true,
        error: None,
        references: vec![
            is456_ref::NOMINAL_SHEAR.to_string(),
            is456_ref::SHEAR_STRENGTH.to_string(),
            is456_ref::MAX_SHEAR_STRESS.to_string(),
        ],
    };

    if !within_limit(tau_v, tau_c_max) {
        warn!(section = %section.label(), tau_v, tau_c_max, "shear exceeds τc,max");
        result.is_safe = false;
        result.error = Some(DesignError::ShearCapacityExceeded {
            tau_v,
            tau_c_max,
            clause: is456_ref::MAX_SHEAR_STRESS.to_string(),
        });
        return Ok(result);
    }

    let mut spacing = (0.75 * d).min(MAX_SPACING_MM);
    let mut rule = SpacingRule::MaximumSpacing;

    let minimum_steel_spacing = 0.87 * stirrup_fy * asv / (0.4 * b);
    if minimum_steel_spacing < spacing {
        spacing = minimum_steel_spacing;
        rule = SpacingRule::MinimumReinforcement;
    }
    if vus > 0.0 {
        let strength_spacing = 0.87 * stirrup_fy * asv * d / vus;
        if strength_spacing < spacing {
            spacing = strength_spacing;
            rule = SpacingRule::Strength;
        }
    }

    let rounded = round_spacing_down(spacing);
    result.computed_spacing_mm = Some(spacing);
    result.required_spacing_mm = Some(rounded);
    result.spacing_rule = Some(rule);
    result.references.push(rule.clause().to_string());

    if rounded < MIN_PRACTICAL_SPACING_MM {
        warn!(section = %section.label(), spacing_mm = rounded, "stirrup spacing impractical");
        result.is_safe = false;
        result.error = Some(DesignError::StirrupSpacingImpractical {
            spacing_mm: rounded,
            minimum_mm: MIN_PRACTICAL_SPACING_MM,
            clause: is456_ref::SHEAR_REINFORCEMENT.to_string(),
        });
    }

    debug!(tau_v, tau_c, pt, spacing_mm = rounded, rule = ?rule, "shear designed");
    Ok(result)
}
