//! # Reinforcement Detailing
//!
//! Stateless formulas for anchorage, laps and bar spacing. The bar
//! arrangement optimizer calls the spacing rules to decide what fits.
//!
//! | Quantity                 | Rule                                   | Clause        |
//! |--------------------------|----------------------------------------|---------------|
//! | Development length Ld    | φ·0.87fy / (4·τbd)                     | 26.2.1        |
//! | Lap, flexural tension    | max(Ld, 30φ)                           | 26.2.5.1(c)   |
//! | Lap, direct tension      | max(2Ld, 30φ)                          | 26.2.5.1(c)   |
//! | Lap, compression         | max(Ld,c, 24φ)                         | 26.2.5.1(d)   |
//! | Horizontal clear spacing | ≥ max(φ, agg + 5)                      | 26.3.2(a)     |
//! | Vertical clear spacing   | ≥ max(15, 2/3·agg, φ)                  | 26.3.2(b)     |
//! | Max clear spacing        | Table 15, no redistribution            | 26.3.3        |
//! | Side face steel          | 0.1 % of web area when D > 750 mm      | 26.5.1.3      |

use serde::{Deserialize, Serialize};

use crate::clauses::is456_ref;
use crate::errors::{DesignError, DesignResult};
use crate::materials::{bond_stress, BarStress, ConcreteGrade, SteelGrade};
use crate::section::BeamSection;

/// Bars above this diameter may not be lapped (mm), 26.2.5.1(a)
pub const MAX_LAPPED_DIA_MM: u32 = 36;

/// Confining hoop spacing over ductile lap splices (mm), IS 13920
pub const SEISMIC_LAP_HOOP_SPACING_MM: f64 = 150.0;

/// Depth above which side-face reinforcement is required (mm)
const SIDE_FACE_DEPTH_MM: f64 = 750.0;

/// Development length Ld = φ·σs/(4·τbd) with σs = 0.87·fy (mm).
///
/// Plain or deformed bond follows the steel grade (Fe250 is plain).
pub fn development_length(
    dia_mm: u32,
    concrete: ConcreteGrade,
    steel: SteelGrade,
    stress: BarStress,
) -> f64 {
    let tau_bd = bond_stress(concrete, steel.surface(), stress);
    f64::from(dia_mm) * steel.design_stress() / (4.0 * tau_bd)
}

/// Where a lap splice sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LapZone {
    /// Tension from bending
    #[default]
    FlexuralTension,
    /// Tie members in direct tension
    DirectTension,
    Compression,
}

/// Lap detail variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LapDetail {
    /// Plain straight lap
    #[default]
    Straight,
    /// Ductile detailing: lap at least the tension Ld, 135° hooks, hoops at 150 mm
    SeismicHook,
}

/// Computed lap splice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapLength {
    pub dia_mm: u32,
    pub zone: LapZone,
    pub detail: LapDetail,
    /// Development length for the bar's stress state (mm)
    pub development_length_mm: f64,
    /// Required lap length (mm)
    pub lap_length_mm: f64,
    /// Straight extension beyond a 135° hook (mm), seismic detail only
    pub hook_extension_mm: Option<f64>,
    /// Maximum hoop spacing over the splice (mm), seismic detail only
    pub confining_hoop_spacing_mm: Option<f64>,
    pub clause: String,
}

/// Lap length for a bar.
///
/// Returns an input error for bars larger than 36 mm, which must be welded
/// or mechanically coupled instead.
pub fn lap_length(
    dia_mm: u32,
    concrete: ConcreteGrade,
    steel: SteelGrade,
    zone: LapZone,
    detail: LapDetail,
) -> DesignResult<LapLength> {
    if dia_mm == 0 {
        return Err(DesignError::invalid_input("dia_mm", "0", "Bar diameter must be positive"));
    }
    if dia_mm > MAX_LAPPED_DIA_MM {
        return Err(DesignError::invalid_input(
            "dia_mm",
            dia_mm.to_string(),
            format!(
                "Bars larger than {} mm shall not be lapped ({})",
                MAX_LAPPED_DIA_MM,
                is456_ref::LAP_SPLICE
            ),
        ));
    }

    let phi = f64::from(dia_mm);
    let ld_tension = development_length(dia_mm, concrete, steel, BarStress::Tension);
    let (ld, base) = match zone {
        LapZone::FlexuralTension => (ld_tension, ld_tension.max(30.0 * phi)),
        LapZone::DirectTension => (ld_tension, (2.0 * ld_tension).max(30.0 * phi)),
        LapZone::Compression => {
            let ld_c = development_length(dia_mm, concrete, steel, BarStress::Compression);
            (ld_c, ld_c.max(24.0 * phi))
        }
    };

    Ok(match detail {
        LapDetail::Straight => LapLength {
            dia_mm,
            zone,
            detail,
            development_length_mm: ld,
            lap_length_mm: base,
            hook_extension_mm: None,
            confining_hoop_spacing_mm: None,
            clause: is456_ref::LAP_SPLICE.to_string(),
        },
        // Reversals can put any lap in tension
        LapDetail::SeismicHook => LapLength {
            dia_mm,
            zone,
            detail,
            development_length_mm: ld,
            lap_length_mm: base.max(ld_tension),
            hook_extension_mm: Some((10.0 * phi).max(75.0)),
            confining_hoop_spacing_mm: Some(SEISMIC_LAP_HOOP_SPACING_MM),
            clause: is456_ref::SEISMIC_LAP.to_string(),
        },
    })
}

/// Minimum horizontal clear distance between bars (mm)
pub fn min_horizontal_clear_spacing(dia_mm: u32, aggregate_size_mm: f64) -> f64 {
    f64::from(dia_mm).max(aggregate_size_mm + 5.0)
}

/// Minimum vertical clear distance between layers (mm)
pub fn min_vertical_clear_spacing(dia_mm: u32, aggregate_size_mm: f64) -> f64 {
    15.0_f64
        .max(2.0 * aggregate_size_mm / 3.0)
        .max(f64::from(dia_mm))
}

/// Maximum clear distance between tension bars for crack control (mm).
///
/// Table 15 lists Fe250, Fe415 and Fe500; Fe550 continues the trend.
pub fn max_clear_spacing(steel: SteelGrade) -> f64 {
    match steel {
        SteelGrade::Fe250 => 300.0,
        SteelGrade::Fe415 => 180.0,
        SteelGrade::Fe500 => 150.0,
        SteelGrade::Fe550 => 140.0,
    }
}

/// Side-face reinforcement on the web, total over both faces (mm²).
///
/// `None` when the depth does not call for it.
pub fn side_face_reinforcement_mm2(section: &BeamSection) -> Option<f64> {
    if section.overall_depth_mm > SIDE_FACE_DEPTH_MM {
        Some(0.001 * section.width_mm * section.overall_depth_mm)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_length_deformed() {
        // 16 mm Fe500 in M25: 16·435/(4·2.24)
        let ld = development_length(16, ConcreteGrade::M25, SteelGrade::Fe500, BarStress::Tension);
        assert!((ld - 776.79).abs() < 0.01);
    }

    #[test]
    fn test_development_length_plain_mild_steel() {
        // 12 mm Fe250 in M20: 12·217.5/(4·1.2)
        let ld = development_length(12, ConcreteGrade::M20, SteelGrade::Fe250, BarStress::Tension);
        assert!((ld - 543.75).abs() < 1e-9);
    }

    #[test]
    fn test_compression_development_is_shorter() {
        let t = development_length(20, ConcreteGrade::M30, SteelGrade::Fe415, BarStress::Tension);
        let c = development_length(20, ConcreteGrade::M30, SteelGrade::Fe415, BarStress::Compression);
        assert!((t / c - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_lap_lengths() {
        let flex = lap_length(16, ConcreteGrade::M25, SteelGrade::Fe500, LapZone::FlexuralTension, LapDetail::Straight).unwrap();
        assert!((flex.lap_length_mm - flex.development_length_mm).abs() < 1e-9);
        let direct = lap_length(16, ConcreteGrade::M25, SteelGrade::Fe500, LapZone::DirectTension, LapDetail::Straight).unwrap();
        assert!((direct.lap_length_mm - 2.0 * flex.development_length_mm).abs() < 1e-9);
        let comp = lap_length(16, ConcreteGrade::M25, SteelGrade::Fe500, LapZone::Compression, LapDetail::Straight).unwrap();
        assert!(comp.lap_length_mm < flex.lap_length_mm);
        assert!(comp.lap_length_mm >= 24.0 * 16.0);
    }

    #[test]
    fn test_thirty_phi_floor() {
        // Fe250 plain 10 mm in M40: Ld = 10·217.5/(4·1.9) = 286 < 300
        let lap = lap_length(10, ConcreteGrade::M40, SteelGrade::Fe250, LapZone::FlexuralTension, LapDetail::Straight).unwrap();
        assert_eq!(lap.lap_length_mm, 300.0);
    }

    #[test]
    fn test_seismic_hook_variant() {
        let lap = lap_length(12, ConcreteGrade::M25, SteelGrade::Fe500, LapZone::Compression, LapDetail::SeismicHook).unwrap();
        let ld_t = development_length(12, ConcreteGrade::M25, SteelGrade::Fe500, BarStress::Tension);
        assert!(lap.lap_length_mm >= ld_t);
        assert_eq!(lap.hook_extension_mm, Some(120.0));
        assert_eq!(lap.confining_hoop_spacing_mm, Some(150.0));
        let small = lap_length(8, ConcreteGrade::M25, SteelGrade::Fe500, LapZone::FlexuralTension, LapDetail::SeismicHook).unwrap();
        assert_eq!(small.hook_extension_mm, Some(80.0));
    }

    #[test]
    fn test_large_bars_not_lapped() {
        let err = lap_length(40, ConcreteGrade::M30, SteelGrade::Fe500, LapZone::FlexuralTension, LapDetail::Straight).unwrap_err();
        assert_eq!(err.error_code(), "INPUT_ERROR");
    }

    #[test]
    fn test_spacing_rules() {
        assert_eq!(min_horizontal_clear_spacing(12, 20.0), 25.0);
        assert_eq!(min_horizontal_clear_spacing(32, 20.0), 32.0);
        assert_eq!(min_vertical_clear_spacing(12, 20.0), 15.0_f64.max(40.0 / 3.0).max(12.0));
        assert_eq!(min_vertical_clear_spacing(25, 20.0), 25.0);
        assert_eq!(max_clear_spacing(SteelGrade::Fe415), 180.0);
    }

    #[test]
    fn test_side_face_reinforcement() {
        let shallow = BeamSection::rectangular(300.0, 600.0, 550.0, 25.0, 25.0, 500.0);
        assert!(side_face_reinforcement_mm2(&shallow).is_none());
        let deep = BeamSection::rectangular(300.0, 900.0, 850.0, 25.0, 25.0, 500.0);
        assert!((side_face_reinforcement_mm2(&deep).unwrap() - 270.0).abs() < 1e-9);
    }
}
