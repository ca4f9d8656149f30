//! # Unit Types
//!
//! Type-safe wrappers for the SI units the engine works in. They are plain
//! `f64` newtypes that serialize as bare numbers.
//!
//! ## Conventions
//!
//! The engine performs no unit inference. Callers supply:
//! - Length: millimetres (mm), spans included
//! - Stress: N/mm² (MPa)
//! - Moment: kilonewton-metres (kN·m) on load cases
//! - Shear: kilonewtons (kN) on load cases
//!
//! Internally moments are carried in N·mm and forces in N so that stresses
//! come out directly in N/mm².
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::units::{KiloNewtonMeters, NewtonMillimeters};
//!
//! let mu = KiloNewtonMeters(120.0);
//! let mu_nmm: NewtonMillimeters = mu.into();
//! assert_eq!(mu_nmm.0, 120.0e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Sub;

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1.0e3)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1.0e3)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

impl From<KiloNewtonMeters> for NewtonMillimeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * 1.0e6)
    }
}

impl From<NewtonMillimeters> for KiloNewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KiloNewtonMeters(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMillimeters(pub f64);

/// Volume in cubic metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl From<CubicMillimeters> for CubicMeters {
    fn from(mm3: CubicMillimeters) -> Self {
        CubicMeters(mm3.0 / 1.0e9)
    }
}

impl From<CubicMeters> for CubicMillimeters {
    fn from(m3: CubicMeters) -> Self {
        CubicMillimeters(m3.0 * 1.0e9)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Newtons);
impl_arithmetic!(NewtonMillimeters);
