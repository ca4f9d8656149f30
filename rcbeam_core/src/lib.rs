//! # rcbeam_core - Reinforced Concrete Beam Design Engine
//!
//! `rcbeam_core` designs and checks reinforced-concrete beams to IS 456:2000:
//! steel for bending and shear, anchorage and laps, buildable bar
//! arrangements, and the cheapest arrangement for a cost profile. All inputs
//! and outputs are JSON-serializable value types.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured errors with IS 456 clause references
//! - **Findings, not panics**: unsafe designs come back with `is_safe = false`
//!
//! ## Quick Start
//!
//! ```rust
//! use rcbeam_core::compliance::aggregate;
//! use rcbeam_core::section::{BeamSection, LoadCase};
//!
//! let section = BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0);
//! let report = aggregate(&section, &[LoadCase::new("LC1", 120.0, 80.0)]);
//!
//! assert!(report.passes);
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`section`] - Beam section and load case inputs
//! - [`materials`] - Concrete and steel grades, IS 456 tables, bar geometry
//! - [`calculations`] - Flexure, shear and detailing
//! - [`optimization`] - Bar arrangement search, cost optimization, baseline fallback
//! - [`compliance`] - Per-section aggregation over load cases
//! - [`batch`] - Parallel design of every member in a project
//! - [`cost_profile`] - Unit rates loaded from TOML
//! - [`project`] / [`file_io`] - Project container and atomic JSON files
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod batch;
pub mod calculations;
pub mod clauses;
pub mod compliance;
pub mod cost_profile;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod optimization;
pub mod project;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use batch::{design_batch, BatchReport, MemberReport};
pub use compliance::{aggregate, ComplianceReport};
pub use cost_profile::{load_cost_profile, CostProfile};
pub use errors::{DesignError, DesignResult};
pub use file_io::{load_project, save_project};
pub use project::{BeamMember, DesignProject, ProjectMetadata, ProjectSettings};
pub use section::{BeamSection, LoadCase};
