//! # Beam Section and Load Cases
//!
//! The immutable inputs every design function takes: a [`BeamSection`]
//! (geometry + materials) and one or more [`LoadCase`]s of factored actions.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "width_mm": 300.0,
//!   "overall_depth_mm": 500.0,
//!   "effective_depth_mm": 450.0,
//!   "clear_cover_mm": 25.0,
//!   "fck_mpa": 25.0,
//!   "fy_mpa": 500.0
//! }
//! ```
//!
//! Stirrup diameter (8 mm), stirrup legs (2), maximum aggregate size (20 mm)
//! and shape (rectangular) default when omitted.

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::materials::{ConcreteGrade, SteelGrade};

fn default_stirrup_dia() -> u32 {
    8
}

fn default_stirrup_legs() -> u32 {
    2
}

fn default_aggregate_size() -> f64 {
    20.0
}

/// Cross-section shape. The set is closed by the code: rectangular beams and
/// flanged (T or L) beams acting with a slab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum SectionShape {
    #[default]
    Rectangular,
    /// Flanged beam; `width_mm` on the section is the web width bw
    Flanged {
        /// Effective flange width bf (mm)
        flange_width_mm: f64,
        /// Flange (slab) thickness Df (mm)
        flange_thickness_mm: f64,
    },
}

/// Reinforced-concrete beam section.
///
/// Immutable value; all lengths in mm, strengths in N/mm².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSection {
    /// Width b (web width bw for flanged sections)
    pub width_mm: f64,

    /// Overall depth D
    pub overall_depth_mm: f64,

    /// Effective depth d to the centroid of tension steel
    pub effective_depth_mm: f64,

    /// Clear cover to the stirrups
    pub clear_cover_mm: f64,

    /// Characteristic concrete strength fck
    pub fck_mpa: f64,

    /// Characteristic steel yield strength fy
    pub fy_mpa: f64,

    /// Stirrup bar diameter
    #[serde(default = "default_stirrup_dia")]
    pub stirrup_dia_mm: u32,

    /// Number of stirrup legs
    #[serde(default = "default_stirrup_legs")]
    pub stirrup_legs: u32,

    /// Nominal maximum size of coarse aggregate
    #[serde(default = "default_aggregate_size")]
    pub aggregate_size_mm: f64,

    /// Rectangular or flanged
    #[serde(default)]
    pub shape: SectionShape,
}

impl BeamSection {
    /// Rectangular section with default stirrups and aggregate
    pub fn rectangular(
        width_mm: f64,
        overall_depth_mm: f64,
        effective_depth_mm: f64,
        clear_cover_mm: f64,
        fck_mpa: f64,
        fy_mpa: f64,
    ) -> Self {
        BeamSection {
            width_mm,
            overall_depth_mm,
            effective_depth_mm,
            clear_cover_mm,
            fck_mpa,
            fy_mpa,
            stirrup_dia_mm: default_stirrup_dia(),
            stirrup_legs: default_stirrup_legs(),
            aggregate_size_mm: default_aggregate_size(),
            shape: SectionShape::Rectangular,
        }
    }

    /// Turn this section into a flanged one (builder pattern)
    pub fn with_flange(mut self, flange_width_mm: f64, flange_thickness_mm: f64) -> Self {
        self.shape = SectionShape::Flanged {
            flange_width_mm,
            flange_thickness_mm,
        };
        self
    }

    /// Copy of this section with a different concrete strength
    pub fn with_fck(&self, fck_mpa: f64) -> Self {
        BeamSection {
            fck_mpa,
            ..self.clone()
        }
    }

    /// Copy of this section designed at a different effective depth
    pub fn with_effective_depth(&self, effective_depth_mm: f64) -> Self {
        BeamSection {
            effective_depth_mm,
            ..self.clone()
        }
    }

    /// Validate geometry and material invariants.
    pub fn validate(&self) -> DesignResult<()> {
        positive("width_mm", self.width_mm)?;
        positive("overall_depth_mm", self.overall_depth_mm)?;
        positive("effective_depth_mm", self.effective_depth_mm)?;
        if !self.clear_cover_mm.is_finite() || self.clear_cover_mm < 0.0 {
            return Err(DesignError::invalid_input(
                "clear_cover_mm",
                self.clear_cover_mm.to_string(),
                "Clear cover must be zero or positive",
            ));
        }
        if self.effective_depth_mm >= self.overall_depth_mm {
            return Err(DesignError::invalid_input(
                "effective_depth_mm",
                self.effective_depth_mm.to_string(),
                format!(
                    "Effective depth must be less than overall depth ({} mm)",
                    self.overall_depth_mm
                ),
            ));
        }
        if self.clear_cover_mm >= self.overall_depth_mm - self.effective_depth_mm {
            return Err(DesignError::invalid_input(
                "clear_cover_mm",
                self.clear_cover_mm.to_string(),
                "Clear cover leaves no room for the tension bars below the effective depth",
            ));
        }
        positive("aggregate_size_mm", self.aggregate_size_mm)?;
        if self.stirrup_dia_mm == 0 {
            return Err(DesignError::invalid_input(
                "stirrup_dia_mm",
                "0",
                "Stirrup diameter must be positive",
            ));
        }
        if self.stirrup_legs < 2 {
            return Err(DesignError::invalid_input(
                "stirrup_legs",
                self.stirrup_legs.to_string(),
                "Closed stirrups have at least two legs",
            ));
        }
        if let SectionShape::Flanged {
            flange_width_mm,
            flange_thickness_mm,
        } = self.shape
        {
            positive("flange_width_mm", flange_width_mm)?;
            positive("flange_thickness_mm", flange_thickness_mm)?;
            if flange_width_mm < self.width_mm {
                return Err(DesignError::invalid_input(
                    "flange_width_mm",
                    flange_width_mm.to_string(),
                    "Flange width must not be less than the web width",
                ));
            }
            if flange_thickness_mm >= self.effective_depth_mm {
                return Err(DesignError::invalid_input(
                    "flange_thickness_mm",
                    flange_thickness_mm.to_string(),
                    "Flange thickness must be less than the effective depth",
                ));
            }
        }
        self.concrete_grade()?;
        self.steel_grade()?;
        Ok(())
    }

    /// Concrete grade matching `fck_mpa`
    pub fn concrete_grade(&self) -> DesignResult<ConcreteGrade> {
        ConcreteGrade::from_fck(self.fck_mpa)
    }

    /// Steel grade matching `fy_mpa`
    pub fn steel_grade(&self) -> DesignResult<SteelGrade> {
        SteelGrade::from_fy(self.fy_mpa)
    }

    /// Depth of compression steel centroid d' (mm), taken as D − d
    pub fn compression_steel_depth_mm(&self) -> f64 {
        self.overall_depth_mm - self.effective_depth_mm
    }

    /// Gross concrete area b·D (mm²), web only for flanged sections
    pub fn gross_area_mm2(&self) -> f64 {
        self.width_mm * self.overall_depth_mm
    }

    /// Concrete area of the member cross-section, flange included (mm²)
    pub fn concrete_area_mm2(&self) -> f64 {
        match self.shape {
            SectionShape::Rectangular => self.gross_area_mm2(),
            SectionShape::Flanged {
                flange_width_mm,
                flange_thickness_mm,
            } => {
                self.width_mm * (self.overall_depth_mm - flange_thickness_mm)
                    + flange_width_mm * flange_thickness_mm
            }
        }
    }

    /// Formwork contact length per unit run: soffit plus both sides (mm).
    ///
    /// A flanged beam's sides stop at the slab soffit; the slab carries its
    /// own formwork.
    pub fn formwork_perimeter_mm(&self) -> f64 {
        match self.shape {
            SectionShape::Rectangular => self.width_mm + 2.0 * self.overall_depth_mm,
            SectionShape::Flanged {
                flange_thickness_mm,
                ..
            } => self.width_mm + 2.0 * (self.overall_depth_mm - flange_thickness_mm),
        }
    }

    /// Width available for main bars inside the stirrups (mm)
    pub fn clear_width_for_bars_mm(&self) -> f64 {
        self.width_mm - 2.0 * self.clear_cover_mm - 2.0 * f64::from(self.stirrup_dia_mm)
    }

    /// Short label such as "300x500 M25/Fe500"
    pub fn label(&self) -> String {
        format!(
            "{:.0}x{:.0} M{:.0}/Fe{:.0}",
            self.width_mm, self.overall_depth_mm, self.fck_mpa, self.fy_mpa
        )
    }
}

fn positive(field: &str, value: f64) -> DesignResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DesignError::invalid_input(
            field,
            value.to_string(),
            "Value must be a positive finite number",
        ));
    }
    Ok(())
}

/// A factored load case acting on one section.
///
/// ## JSON Example
///
/// ```json
/// { "id": "1.5(DL+LL)", "mu_knm": 120.0, "vu_kn": 80.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Case identifier, unique within a section
    pub id: String,

    /// Factored bending moment Mu (kN·m)
    pub mu_knm: f64,

    /// Factored shear force Vu (kN)
    pub vu_kn: f64,
}

impl LoadCase {
    /// Create a new load case
    pub fn new(id: impl Into<String>, mu_knm: f64, vu_kn: f64) -> Self {
        LoadCase {
            id: id.into(),
            mu_knm,
            vu_kn,
        }
    }

    /// Validate the case on its own
    pub fn validate(&self) -> DesignResult<()> {
        if self.id.trim().is_empty() {
            return Err(DesignError::invalid_input(
                "id",
                self.id.clone(),
                "Load case id must not be empty",
            ));
        }
        if !self.mu_knm.is_finite() || self.mu_knm < 0.0 {
            return Err(DesignError::invalid_input(
                "mu_knm",
                self.mu_knm.to_string(),
                "Factored moment must be a finite value ≥ 0",
            ));
        }
        if !self.vu_kn.is_finite() || self.vu_kn < 0.0 {
            return Err(DesignError::invalid_input(
                "vu_kn",
                self.vu_kn.to_string(),
                "Factored shear must be a finite value ≥ 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_section() -> BeamSection {
        BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0)
    }

    #[test]
    fn test_valid_section() {
        assert!(test_section().validate().is_ok());
    }

    #[test]
    fn test_effective_depth_must_be_less_than_overall() {
        let mut s = test_section();
        s.effective_depth_mm = 500.0;
        let err = s.validate().unwrap_err();
        assert!(matches!(err, DesignError::InvalidInput { ref field, .. } if field == "effective_depth_mm"));
    }

    #[test]
    fn test_negative_cover_rejected() {
        let mut s = test_section();
        s.clear_cover_mm = -5.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_grade_outside_set_rejected() {
        let s = test_section().with_fck(22.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_flange_narrower_than_web_rejected() {
        let s = test_section().with_flange(200.0, 120.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_clear_width() {
        // 300 - 2*25 - 2*8
        assert_eq!(test_section().clear_width_for_bars_mm(), 234.0);
    }

    #[test]
    fn test_concrete_and_formwork_quantities() {
        let rect = test_section();
        assert_eq!(rect.concrete_area_mm2(), 150_000.0);
        assert_eq!(rect.formwork_perimeter_mm(), 1300.0);

        let tee = test_section().with_flange(1000.0, 120.0);
        assert_eq!(tee.concrete_area_mm2(), 300.0 * 380.0 + 1000.0 * 120.0);
        assert_eq!(tee.formwork_perimeter_mm(), 300.0 + 2.0 * 380.0);
    }

    #[test]
    fn test_defaults_applied_on_deserialize() {
        let json = r#"{
            "width_mm": 230, "overall_depth_mm": 450, "effective_depth_mm": 410,
            "clear_cover_mm": 25, "fck_mpa": 20, "fy_mpa": 415
        }"#;
        let s: BeamSection = serde_json::from_str(json).unwrap();
        assert_eq!(s.stirrup_dia_mm, 8);
        assert_eq!(s.stirrup_legs, 2);
        assert_eq!(s.aggregate_size_mm, 20.0);
        assert_eq!(s.shape, SectionShape::Rectangular);
    }

    #[test]
    fn test_load_case_validation() {
        assert!(LoadCase::new("LC1", 120.0, 80.0).validate().is_ok());
        assert!(LoadCase::new("LC1", -1.0, 80.0).validate().is_err());
        assert!(LoadCase::new("LC1", 10.0, f64::NAN).validate().is_err());
        assert!(LoadCase::new(" ", 10.0, 5.0).validate().is_err());
    }
}
