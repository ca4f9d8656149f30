//! # Material Tables
//!
//! Grade properties, code tables and bar geometry for IS 456:2000 design.
//! Everything here is pure data plus interpolation; no function holds state.
//!
//! ## Grades
//!
//! - **Concrete**: M15 to M50 (characteristic cube strength fck in N/mm²)
//! - **Steel**: Fe250 (mild steel), Fe415, Fe500, Fe550 (HYSD bars)
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::materials::{ConcreteGrade, SteelGrade};
//! use rcbeam_core::materials::concrete::design_shear_strength;
//!
//! let concrete = ConcreteGrade::from_fck(25.0).unwrap();
//! let steel = SteelGrade::from_fy(500.0).unwrap();
//!
//! assert_eq!(steel.xu_max_ratio(), 0.46);
//! // Table 19: M25 at pt = 0.50% gives 0.49 N/mm²
//! assert!((design_shear_strength(0.50, concrete) - 0.49).abs() < 1e-9);
//! ```

pub mod concrete;
pub mod rebar;

pub use concrete::{bond_stress, design_shear_strength, max_shear_stress, BarSurface, BarStress};
pub use rebar::{bar_area_mm2, compression_steel_stress, is_standard_diameter, STANDARD_DIAMETERS_MM};

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

/// Tolerance used when matching a supplied strength to a code grade (N/mm²)
const GRADE_MATCH_TOLERANCE: f64 = 1e-6;

/// Concrete grades per IS 456 Table 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConcreteGrade {
    M15,
    M20,
    M25,
    M30,
    M35,
    M40,
    M45,
    M50,
}

impl ConcreteGrade {
    /// All concrete grades, weakest first
    pub const ALL: [ConcreteGrade; 8] = [
        ConcreteGrade::M15,
        ConcreteGrade::M20,
        ConcreteGrade::M25,
        ConcreteGrade::M30,
        ConcreteGrade::M35,
        ConcreteGrade::M40,
        ConcreteGrade::M45,
        ConcreteGrade::M50,
    ];

    /// Characteristic compressive strength fck (N/mm²)
    pub fn fck(&self) -> f64 {
        match self {
            ConcreteGrade::M15 => 15.0,
            ConcreteGrade::M20 => 20.0,
            ConcreteGrade::M25 => 25.0,
            ConcreteGrade::M30 => 30.0,
            ConcreteGrade::M35 => 35.0,
            ConcreteGrade::M40 => 40.0,
            ConcreteGrade::M45 => 45.0,
            ConcreteGrade::M50 => 50.0,
        }
    }

    /// Resolve a grade from its fck; anything outside the code set is an input error
    pub fn from_fck(fck: f64) -> DesignResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| (g.fck() - fck).abs() < GRADE_MATCH_TOLERANCE)
            .ok_or_else(|| {
                DesignError::invalid_input(
                    "fck_mpa",
                    fck.to_string(),
                    "Concrete grade must be one of M15, M20, M25, M30, M35, M40, M45, M50",
                )
            })
    }

    /// Display name (e.g. "M25")
    pub fn display_name(&self) -> String {
        format!("M{}", self.fck() as u32)
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reinforcing steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// Mild steel, plain bars
    Fe250,
    /// High-yield strength deformed bars
    Fe415,
    Fe500,
    Fe550,
}

impl SteelGrade {
    /// All steel grades
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::Fe250,
        SteelGrade::Fe415,
        SteelGrade::Fe500,
        SteelGrade::Fe550,
    ];

    /// Characteristic yield strength fy (N/mm²)
    pub fn fy(&self) -> f64 {
        match self {
            SteelGrade::Fe250 => 250.0,
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
            SteelGrade::Fe550 => 550.0,
        }
    }

    /// Resolve a grade from its fy; anything outside the code set is an input error
    pub fn from_fy(fy: f64) -> DesignResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| (g.fy() - fy).abs() < GRADE_MATCH_TOLERANCE)
            .ok_or_else(|| {
                DesignError::invalid_input(
                    "fy_mpa",
                    fy.to_string(),
                    "Steel grade must be one of Fe250, Fe415, Fe500, Fe550",
                )
            })
    }

    /// Limiting neutral axis depth ratio xu,max/d (IS 456 38.1 note)
    pub fn xu_max_ratio(&self) -> f64 {
        match self {
            SteelGrade::Fe250 => 0.53,
            SteelGrade::Fe415 => 0.48,
            SteelGrade::Fe500 => 0.46,
            SteelGrade::Fe550 => 0.44,
        }
    }

    /// Design yield stress 0.87·fy (N/mm²)
    pub fn design_stress(&self) -> f64 {
        0.87 * self.fy()
    }

    /// Surface of bars in this grade; only mild steel is rolled plain
    pub fn surface(&self) -> BarSurface {
        match self {
            SteelGrade::Fe250 => BarSurface::Plain,
            _ => BarSurface::Deformed,
        }
    }

    /// Display name (e.g. "Fe500")
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::Fe250 => "Fe250",
            SteelGrade::Fe415 => "Fe415",
            SteelGrade::Fe500 => "Fe500",
            SteelGrade::Fe550 => "Fe550",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Linear interpolation over tabulated breakpoints, clamped at the table ends.
///
/// `xs` must be strictly increasing and the same length as `ys`. Values
/// outside the table take the nearest end value; nothing is extrapolated.
pub fn interpolate_clamped(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let (first, last) = (xs[0], xs[xs.len() - 1]);
    if x <= first {
        return ys[0];
    }
    if x >= last {
        return ys[ys.len() - 1];
    }
    let upper = xs.iter().position(|&bp| bp >= x).unwrap_or(xs.len() - 1);
    let lower = upper - 1;
    let t = (x - xs[lower]) / (xs[upper] - xs[lower]);
    ys[lower] + t * (ys[upper] - ys[lower])
}
