//! # Project Data Structures
//!
//! A `DesignProject` is the root container for a set of beam members.
//! Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! DesignProject
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: ProjectSettings (code, cost profile, diameters, fallback chain)
//! └── members: Vec<BeamMember> (section, span, load cases)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::project::DesignProject;
//! use rcbeam_core::section::{BeamSection, LoadCase};
//!
//! let mut project = DesignProject::new("Jane Engineer", "25-042", "ACME Corp");
//! let section = BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0);
//! project.add_member("B1", section, 6000.0, vec![LoadCase::new("LC1", 120.0, 80.0)]);
//!
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("B1"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cost_profile::CostProfile;
use crate::optimization::{default_fallback_chain, FallbackStrategy, DEFAULT_DIAMETERS_MM};
use crate::section::{BeamSection, LoadCase};

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Members keep insertion order so batch reports line up with the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignProject {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Settings shared by every member
    #[serde(default)]
    pub settings: ProjectSettings,

    /// Beam members to design
    #[serde(default)]
    pub members: Vec<BeamMember>,
}

impl DesignProject {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `engineer` - Name of the responsible engineer
    /// * `job_id` - Job/project number (e.g., "25-001")
    /// * `client` - Client name
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        DesignProject {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: ProjectSettings::default(),
            members: Vec::new(),
        }
    }

    /// Add a beam member; returns its new id.
    pub fn add_member(
        &mut self,
        label: impl Into<String>,
        section: BeamSection,
        span_mm: f64,
        cases: Vec<LoadCase>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.members.push(BeamMember {
            id,
            label: label.into(),
            section,
            span_mm,
            cases,
        });
        self.touch();
        id
    }

    /// Remove a member by id.
    pub fn remove_member(&mut self, id: &Uuid) -> Option<BeamMember> {
        let index = self.members.iter().position(|m| &m.id == id)?;
        self.touch();
        Some(self.members.remove(index))
    }

    /// Get a member by id.
    pub fn get_member(&self, id: &Uuid) -> Option<&BeamMember> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl Default for DesignProject {
    fn default() -> Self {
        DesignProject::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Settings shared by every member of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Design code the members are checked against
    pub code: String,

    /// Rates used for cost optimization
    pub cost_profile: CostProfile,

    /// Candidate main bar diameters (mm)
    pub bar_diameters_mm: Vec<u32>,

    /// Strategies tried in order when the baseline cannot be designed
    pub fallback_chain: Vec<FallbackStrategy>,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        ProjectSettings {
            code: "IS 456:2000".to_string(),
            cost_profile: CostProfile::default(),
            bar_diameters_mm: DEFAULT_DIAMETERS_MM.to_vec(),
            fallback_chain: default_fallback_chain(),
        }
    }
}

/// A beam to design: one section over one span, with its load cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamMember {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Drawing mark, e.g. "B12"
    pub label: String,

    pub section: BeamSection,

    /// Length the main bars run over (mm)
    pub span_mm: f64,

    pub cases: Vec<LoadCase>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_section() -> BeamSection {
        BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0)
    }

    #[test]
    fn test_project_creation() {
        let project = DesignProject::new("John Doe", "25-001", "Acme Corp");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "25-001");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings.bar_diameters_mm, vec![12, 16, 20, 25, 32]);
    }

    #[test]
    fn test_project_serialization() {
        let mut project = DesignProject::new("Jane Engineer", "25-042", "Test Client");
        project.add_member("B1", test_section(), 6000.0, vec![LoadCase::new("LC1", 120.0, 80.0)]);
        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("IS 456:2000"));

        let roundtrip: DesignProject = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.members, project.members);
        assert_eq!(roundtrip.settings, project.settings);
    }

    #[test]
    fn test_add_remove_member() {
        let mut project = DesignProject::new("Engineer", "25-001", "Client");
        let id = project.add_member("B1", test_section(), 6000.0, Vec::new());
        assert_eq!(project.member_count(), 1);
        assert_eq!(project.get_member(&id).unwrap().label, "B1");

        assert!(project.remove_member(&id).is_some());
        assert!(project.remove_member(&id).is_none());
        assert_eq!(project.member_count(), 0);
    }

    #[test]
    fn test_hand_written_member_gets_id_and_settings() {
        let json = r#"{
            "meta": {
                "version": "0.1.0", "engineer": "E", "job_id": "J", "client": "C",
                "created": "2025-01-01T00:00:00Z", "modified": "2025-01-01T00:00:00Z"
            },
            "members": [{
                "label": "B7",
                "section": {
                    "width_mm": 230, "overall_depth_mm": 450, "effective_depth_mm": 410,
                    "clear_cover_mm": 25, "fck_mpa": 20, "fy_mpa": 415
                },
                "span_mm": 4500,
                "cases": [{ "id": "LC1", "mu_knm": 60, "vu_kn": 55 }]
            }]
        }"#;
        let project: DesignProject = serde_json::from_str(json).unwrap();
        assert_eq!(project.members[0].label, "B7");
        assert!(!project.members[0].id.is_nil());
        assert_eq!(project.settings, ProjectSettings::default());
    }

    #[test]
    fn test_fallback_chain_serialization() {
        let json = serde_json::to_string(&ProjectSettings::default().fallback_chain).unwrap();
        assert_eq!(
            json,
            r#"["AsDesigned",{"ConcreteGrade":"M25"},{"ConcreteGrade":"M30"},{"SpanDepthRatio":10.0}]"#
        );
    }
}
