//! # Cost Profiles
//!
//! Unit rates used by the cost optimizer. A profile is a named, versioned
//! value passed explicitly to every call; there is no process-wide default.
//!
//! ## TOML Example
//!
//! ```toml
//! name = "Pune 2025 Q3"
//! version = "2025.3"
//! currency = "INR"
//! steel_rate_per_kg = 72.0
//! concrete_rate_per_m3 = 6500.0
//! formwork_rate_per_m2 = 450.0
//! # steel_density_kg_per_m3 defaults to 7850
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

fn default_steel_density() -> f64 {
    7850.0
}

/// Named set of material and formwork rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostProfile {
    /// Profile name shown in reports
    pub name: String,

    /// Profile revision, e.g. a rate-schedule date
    pub version: String,

    /// Currency code the rates are quoted in
    pub currency: String,

    /// Reinforcing steel, supplied and fixed (per kg)
    pub steel_rate_per_kg: f64,

    /// Concrete, placed (per m³)
    pub concrete_rate_per_m3: f64,

    /// Formwork contact area (per m²)
    pub formwork_rate_per_m2: f64,

    /// Density of steel (kg/m³)
    #[serde(default = "default_steel_density")]
    pub steel_density_kg_per_m3: f64,
}

impl Default for CostProfile {
    /// Illustrative Indian market rates
    fn default() -> Self {
        CostProfile {
            name: "Default".to_string(),
            version: "1".to_string(),
            currency: "INR".to_string(),
            steel_rate_per_kg: 70.0,
            concrete_rate_per_m3: 6000.0,
            formwork_rate_per_m2: 400.0,
            steel_density_kg_per_m3: default_steel_density(),
        }
    }
}

impl CostProfile {
    /// Parse a profile from TOML text and validate it
    pub fn from_toml_str(text: &str) -> DesignResult<Self> {
        let profile: CostProfile = toml::from_str(text)
            .map_err(|e| DesignError::serialization(format!("Invalid cost profile: {}", e)))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Serialize the profile as TOML
    pub fn to_toml_string(&self) -> DesignResult<String> {
        toml::to_string_pretty(self).map_err(|e| DesignError::serialization(e.to_string()))
    }

    /// Check rates are usable.
    ///
    /// Rates may be zero except the steel rate and density, which every
    /// alternative is priced by.
    pub fn validate(&self) -> DesignResult<()> {
        if self.name.trim().is_empty() {
            return Err(DesignError::invalid_input(
                "name",
                self.name.clone(),
                "Cost profile name must not be empty",
            ));
        }
        for (field, value) in [
            ("concrete_rate_per_m3", self.concrete_rate_per_m3),
            ("formwork_rate_per_m2", self.formwork_rate_per_m2),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DesignError::invalid_input(
                    field,
                    value.to_string(),
                    "Rate must be a finite value ≥ 0",
                ));
            }
        }
        for (field, value) in [
            ("steel_rate_per_kg", self.steel_rate_per_kg),
            ("steel_density_kg_per_m3", self.steel_density_kg_per_m3),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DesignError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a positive finite number",
                ));
            }
        }
        Ok(())
    }
}

/// Load and validate a cost profile from a TOML file.
pub fn load_cost_profile(path: &Path) -> DesignResult<CostProfile> {
    let text = fs::read_to_string(path)
        .map_err(|e| DesignError::file_error("read", path.display().to_string(), e.to_string()))?;
    CostProfile::from_toml_str(&text)
}
