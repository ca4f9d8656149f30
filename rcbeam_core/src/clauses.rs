//! # Code Clause References
//!
//! Traceable references to IS 456:2000 (and IS 13920 for ductile detailing).
//! Every design finding quotes one of these so an engineer can check the
//! number against the code by hand.

/// IS 456:2000 clause references used by the design checks.
pub mod is456_ref {
    // Flexure
    /// Limiting depth of neutral axis
    pub const LIMITING_NEUTRAL_AXIS: &str = "IS 456:2000 38.1 (Note)";
    /// Limiting moment of resistance, rectangular section
    pub const LIMITING_MOMENT: &str = "IS 456:2000 Annex G-1.1(c)";
    /// Singly reinforced tension steel
    pub const SINGLY_REINFORCED: &str = "IS 456:2000 Annex G-1.1(b)";
    /// Doubly reinforced section
    pub const DOUBLY_REINFORCED: &str = "IS 456:2000 Annex G-1.2";
    /// Flanged section
    pub const FLANGED_SECTION: &str = "IS 456:2000 Annex G-2.2";
    /// Minimum tension reinforcement
    pub const MIN_TENSION_STEEL: &str = "IS 456:2000 26.5.1.1(a)";
    /// Maximum tension reinforcement
    pub const MAX_TENSION_STEEL: &str = "IS 456:2000 26.5.1.1(b)";
    /// Maximum compression reinforcement
    pub const MAX_COMPRESSION_STEEL: &str = "IS 456:2000 26.5.1.2";
    /// Side face reinforcement
    pub const SIDE_FACE_STEEL: &str = "IS 456:2000 26.5.1.3";

    // Shear
    /// Nominal shear stress
    pub const NOMINAL_SHEAR: &str = "IS 456:2000 40.1";
    /// Design shear strength of concrete
    pub const SHEAR_STRENGTH: &str = "IS 456:2000 Table 19";
    /// Maximum shear stress
    pub const MAX_SHEAR_STRESS: &str = "IS 456:2000 Table 20";
    /// Design of shear reinforcement
    pub const SHEAR_REINFORCEMENT: &str = "IS 456:2000 40.4";
    /// Maximum spacing of shear reinforcement
    pub const STIRRUP_MAX_SPACING: &str = "IS 456:2000 26.5.1.5";
    /// Minimum shear reinforcement
    pub const MIN_SHEAR_STEEL: &str = "IS 456:2000 26.5.1.6";

    // Detailing
    /// Development length
    pub const DEVELOPMENT_LENGTH: &str = "IS 456:2000 26.2.1";
    /// Design bond stress
    pub const BOND_STRESS: &str = "IS 456:2000 26.2.1.1";
    /// Lap splices
    pub const LAP_SPLICE: &str = "IS 456:2000 26.2.5.1";
    /// Minimum distance between individual bars
    pub const BAR_SPACING: &str = "IS 456:2000 26.3.2";
    /// Maximum distance between bars in tension
    pub const MAX_BAR_SPACING: &str = "IS 456:2000 26.3.3 / Table 15";
    /// Lap splices and hooks in ductile detailing
    pub const SEISMIC_LAP: &str = "IS 13920:2016 6.2.6";
}
