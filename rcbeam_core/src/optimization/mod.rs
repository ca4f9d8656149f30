//! # Reinforcement Optimization
//!
//! - [`arrangement`] - feasible bar layouts for a required area
//! - [`cost`] - cheapest adequate layout and savings against a baseline
//! - [`baseline`] - the conventional design, reached through a fallback chain

pub mod arrangement;
pub mod baseline;
pub mod cost;

pub use arrangement::{
    design_tension_bars, generate_alternatives, preferred_option, ArrangementSearch, BarOption,
    TensionDesign, DEFAULT_DIAMETERS_MM, DEPTH_TOLERANCE_MM,
};
pub use baseline::{default_fallback_chain, design_baseline, BaselineDesign, FallbackStrategy};
pub use cost::{optimize_cost, Alternative, CostOptimization};
