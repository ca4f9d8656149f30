//! Concrete strength tables (IS 456:2000)
//!
//! - Table 19: design shear strength τc vs. tension steel percentage
//! - Table 20: maximum shear stress τc,max
//! - 26.2.1.1: design bond stress τbd

use serde::{Deserialize, Serialize};

use super::{interpolate_clamped, ConcreteGrade};

/// Steel percentage breakpoints of Table 19 (100·As/bd)
const TAU_C_PT: [f64; 13] = [
    0.15, 0.25, 0.50, 0.75, 1.00, 1.25, 1.50, 1.75, 2.00, 2.25, 2.50, 2.75, 3.00,
];

/// Table 19 columns: M15, M20, M25, M30, M35, M40 and above (N/mm²)
const TAU_C: [[f64; 13]; 6] = [
    [0.28, 0.35, 0.46, 0.54, 0.60, 0.64, 0.68, 0.71, 0.71, 0.71, 0.71, 0.71, 0.71],
    [0.28, 0.36, 0.48, 0.56, 0.62, 0.67, 0.72, 0.75, 0.79, 0.81, 0.82, 0.82, 0.82],
    [0.29, 0.36, 0.49, 0.57, 0.64, 0.70, 0.74, 0.78, 0.82, 0.85, 0.88, 0.90, 0.92],
    [0.29, 0.37, 0.50, 0.59, 0.66, 0.71, 0.76, 0.80, 0.84, 0.88, 0.91, 0.94, 0.96],
    [0.29, 0.37, 0.50, 0.59, 0.67, 0.73, 0.78, 0.82, 0.86, 0.90, 0.93, 0.96, 0.99],
    [0.30, 0.38, 0.51, 0.60, 0.68, 0.74, 0.79, 0.84, 0.88, 0.92, 0.95, 0.98, 1.01],
];

fn table_19_column(grade: ConcreteGrade) -> usize {
    match grade {
        ConcreteGrade::M15 => 0,
        ConcreteGrade::M20 => 1,
        ConcreteGrade::M25 => 2,
        ConcreteGrade::M30 => 3,
        ConcreteGrade::M35 => 4,
        ConcreteGrade::M40 | ConcreteGrade::M45 | ConcreteGrade::M50 => 5,
    }
}

/// Design shear strength of concrete τc (N/mm²), Table 19.
///
/// Linear between tabulated percentages and clamped at 0.15 % and 3.00 %.
pub fn design_shear_strength(pt_percent: f64, grade: ConcreteGrade) -> f64 {
    interpolate_clamped(&TAU_C_PT, &TAU_C[table_19_column(grade)], pt_percent)
}

/// Maximum shear stress τc,max (N/mm²), Table 20.
pub fn max_shear_stress(grade: ConcreteGrade) -> f64 {
    match grade {
        ConcreteGrade::M15 => 2.5,
        ConcreteGrade::M20 => 2.8,
        ConcreteGrade::M25 => 3.1,
        ConcreteGrade::M30 => 3.5,
        ConcreteGrade::M35 => 3.7,
        ConcreteGrade::M40 | ConcreteGrade::M45 | ConcreteGrade::M50 => 4.0,
    }
}

/// Bar surface, which scales the bond stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarSurface {
    /// Plain mild-steel bars
    Plain,
    /// Deformed bars conforming to IS 1786 (+60 %)
    #[default]
    Deformed,
}

/// Stress state of a bar being anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarStress {
    #[default]
    Tension,
    /// Bars in compression get +25 %
    Compression,
}

/// Design bond stress τbd (N/mm²), 26.2.1.1.
pub fn bond_stress(grade: ConcreteGrade, surface: BarSurface, stress: BarStress) -> f64 {
    // M15 is outside the 2000 table; 1.0 is the value the earlier edition gave
    let plain = match grade {
        ConcreteGrade::M15 => 1.0,
        ConcreteGrade::M20 => 1.2,
        ConcreteGrade::M25 => 1.4,
        ConcreteGrade::M30 => 1.5,
        ConcreteGrade::M35 => 1.7,
        ConcreteGrade::M40 | ConcreteGrade::M45 | ConcreteGrade::M50 => 1.9,
    };
    let surface_factor = match surface {
        BarSurface::Plain => 1.0,
        BarSurface::Deformed => 1.6,
    };
    let stress_factor = match stress {
        BarStress::Tension => 1.0,
        BarStress::Compression => 1.25,
    };
    plain * surface_factor * stress_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tau_c_at_breakpoints() {
        assert!((design_shear_strength(1.00, ConcreteGrade::M20) - 0.62).abs() < 1e-12);
        assert!((design_shear_strength(2.00, ConcreteGrade::M30) - 0.84).abs() < 1e-12);
    }

    #[test]
    fn test_tau_c_interpolates() {
        // M25 between 0.50 (0.49) and 0.75 (0.57)
        let tc = design_shear_strength(0.625, ConcreteGrade::M25);
        assert!((tc - 0.53).abs() < 1e-9);
    }

    #[test]
    fn test_tau_c_clamped_not_extrapolated() {
        assert_eq!(design_shear_strength(0.05, ConcreteGrade::M25), 0.29);
        assert_eq!(design_shear_strength(4.5, ConcreteGrade::M25), 0.92);
        assert_eq!(design_shear_strength(0.0, ConcreteGrade::M40), 0.30);
    }

    #[test]
    fn test_high_grades_use_m40_values() {
        assert_eq!(
            design_shear_strength(1.0, ConcreteGrade::M50),
            design_shear_strength(1.0, ConcreteGrade::M40)
        );
        assert_eq!(max_shear_stress(ConcreteGrade::M45), 4.0);
    }

    #[test]
    fn test_tau_c_monotone_in_pt() {
        for grade in ConcreteGrade::ALL {
            let mut prev = 0.0;
            for i in 0..=40 {
                let tc = design_shear_strength(i as f64 * 0.1, grade);
                assert!(tc >= prev);
                prev = tc;
            }
        }
    }

    #[test]
    fn test_bond_stress() {
        let tbd = bond_stress(ConcreteGrade::M25, BarSurface::Deformed, BarStress::Tension);
        assert!((tbd - 2.24).abs() < 1e-12);
        let tbd_c = bond_stress(ConcreteGrade::M20, BarSurface::Plain, BarStress::Compression);
        assert!((tbd_c - 1.5).abs() < 1e-12);
    }
}
