//! Reinforcing bar geometry and compression-steel stress.
//!
//! Bar areas for the standard IS 1786 diameters, and the design stress in
//! compression steel `fsc` as a function of `d'/d`: SP 16 Table F inside
//! its range, strain compatibility on the IS 456 Fig. 23 curves beyond it.

use std::f64::consts::PI;

use super::{interpolate_clamped, SteelGrade};

/// Standard bar diameters stocked for beam reinforcement (mm)
pub const STANDARD_DIAMETERS_MM: [u32; 9] = [8, 10, 12, 16, 20, 25, 32, 36, 40];

/// Whether `dia_mm` is a standard bar size
pub fn is_standard_diameter(dia_mm: u32) -> bool {
    STANDARD_DIAMETERS_MM.contains(&dia_mm)
}

/// Cross-sectional area of one bar, π·φ²/4 (mm²)
pub fn bar_area_mm2(dia_mm: u32) -> f64 {
    let d = f64::from(dia_mm);
    PI * d * d / 4.0
}

/// d'/d breakpoints of SP 16 Table F
const FSC_RATIO: [f64; 4] = [0.05, 0.10, 0.15, 0.20];

/// Stress in compression steel fsc (N/mm²) at the breakpoints above
fn fsc_row(grade: SteelGrade) -> [f64; 4] {
    match grade {
        SteelGrade::Fe250 => [217.0, 217.0, 217.0, 217.0],
        SteelGrade::Fe415 => [355.0, 353.0, 342.0, 329.0],
        SteelGrade::Fe500 => [424.0, 412.0, 395.0, 370.0],
        SteelGrade::Fe550 => [458.0, 441.0, 419.0, 380.0],
    }
}

/// Modulus of elasticity of steel Es (N/mm²)
pub const STEEL_MODULUS_MPA: f64 = 200_000.0;

/// Ultimate compressive strain in concrete
const CONCRETE_ULTIMATE_STRAIN: f64 = 0.0035;

/// Cold-worked bar curve (IS 456 Fig. 23A): stress as a fraction of
/// 0.87·fy and the inelastic strain at that stress
const COLD_WORKED_CURVE: [(f64, f64); 6] = [
    (0.80, 0.0),
    (0.85, 0.0001),
    (0.90, 0.0003),
    (0.95, 0.0007),
    (0.975, 0.0010),
    (1.0, 0.0020),
];

/// Design stress (N/mm²) at a compressive strain on the IS 456 Fig. 23
/// stress-strain curve of the grade.
pub fn design_stress_at_strain(grade: SteelGrade, strain: f64) -> f64 {
    let fyd = grade.design_stress();
    if strain <= 0.0 {
        return 0.0;
    }
    if matches!(grade, SteelGrade::Fe250) {
        return (STEEL_MODULUS_MPA * strain).min(fyd);
    }

    let strains: Vec<f64> = COLD_WORKED_CURVE
        .iter()
        .map(|&(f, inelastic)| f * fyd / STEEL_MODULUS_MPA + inelastic)
        .collect();
    let stresses: Vec<f64> = COLD_WORKED_CURVE.iter().map(|&(f, _)| f * fyd).collect();
    if strain < strains[0] {
        return STEEL_MODULUS_MPA * strain;
    }
    interpolate_clamped(&strains, &stresses, strain)
}

/// Design stress in compression steel fsc (N/mm²) for a given `d'/d`.
///
/// Below 0.05 the 0.05 value applies, which is the lower stress. Above
/// 0.20 the stress follows strain compatibility at `xu,max`,
/// `εsc = 0.0035·(1 − (d'/d)/(xu,max/d))`, and never exceeds the 0.20 value.
pub fn compression_steel_stress(grade: SteelGrade, cover_ratio: f64) -> f64 {
    let row = fsc_row(grade);
    let last = FSC_RATIO[FSC_RATIO.len() - 1];
    if cover_ratio <= last {
        return interpolate_clamped(&FSC_RATIO, &row, cover_ratio);
    }
    let strain = CONCRETE_ULTIMATE_STRAIN * (1.0 - cover_ratio / grade.xu_max_ratio());
    design_stress_at_strain(grade, strain).min(row[row.len() - 1])
}
