//! # Batch Design
//!
//! Designs every member of a project. Members are independent, so they run
//! in parallel on the rayon pool; the report keeps project order.
//!
//! For each member:
//!
//! 1. [`aggregate`](crate::compliance::aggregate_with_diameters) all load cases
//! 2. design a baseline for the governing case through the fallback chain
//! 3. price the alternatives for the baseline's required area against the
//!    baseline's own bar choice

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::compliance::{aggregate_with_diameters, ComplianceReport};
use crate::cost_profile::CostProfile;
use crate::errors::{DesignError, DesignResult};
use crate::optimization::{
    design_baseline, generate_alternatives, optimize_cost, BarOption, BaselineDesign,
    CostOptimization, DEPTH_TOLERANCE_MM,
};
use crate::project::{BeamMember, DesignProject};

/// Outcome for one member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberReport {
    pub member_id: Uuid,
    pub label: String,
    pub compliance: ComplianceReport,

    /// Conventional design of the governing case
    pub baseline: Option<BaselineDesign>,

    /// Cheapest alternative against the baseline
    pub cost: Option<CostOptimization>,

    /// Why the baseline or cost step produced nothing
    pub errors: Vec<DesignError>,
}

impl MemberReport {
    pub fn passes(&self) -> bool {
        self.compliance.passes
    }
}

/// Outcome for a whole project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub job_id: String,
    pub code: String,
    pub cost_profile: String,
    pub members: Vec<MemberReport>,
}

impl BatchReport {
    /// Every member complies; an empty batch does not pass
    pub fn all_pass(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(MemberReport::passes)
    }

    /// Labels of members that do not comply
    pub fn failed_members(&self) -> Vec<&str> {
        self.members
            .iter()
            .filter(|m| !m.passes())
            .map(|m| m.label.as_str())
            .collect()
    }
}

/// Design every member with the project's own settings.
pub fn design_batch(project: &DesignProject) -> BatchReport {
    design_batch_with_profile(project, &project.settings.cost_profile)
}

/// Design every member, pricing with `profile` instead of the project's.
pub fn design_batch_with_profile(project: &DesignProject, profile: &CostProfile) -> BatchReport {
    info!(
        job = %project.meta.job_id,
        members = project.members.len(),
        profile = %profile.name,
        "batch design started"
    );

    let members: Vec<MemberReport> = project
        .members
        .par_iter()
        .map(|member| design_member(project, member, profile))
        .collect();

    let passed = members.iter().filter(|m| m.passes()).count();
    info!(passed, failed = members.len() - passed, "batch design finished");

    BatchReport {
        job_id: project.meta.job_id.clone(),
        code: project.settings.code.clone(),
        cost_profile: format!("{} ({})", profile.name, profile.version),
        members,
    }
}

fn design_member(project: &DesignProject, member: &BeamMember, profile: &CostProfile) -> MemberReport {
    let settings = &project.settings;
    let diameters = settings.bar_diameters_mm.as_slice();
    let compliance = aggregate_with_diameters(&member.section, &member.cases, diameters);

    let mut errors = Vec::new();
    let governing = compliance
        .governing_case_id
        .as_deref()
        .and_then(|id| member.cases.iter().find(|c| c.id == id));

    let baseline = governing.and_then(|case| {
        design_baseline(&member.section, case, member.span_mm, diameters, &settings.fallback_chain)
            .map_err(|e| errors.push(e))
            .ok()
    });

    let cost = baseline.as_ref().and_then(|design| {
        price_alternatives(member, design, diameters, profile)
            .map_err(|e| errors.push(e))
            .ok()
    });

    MemberReport {
        member_id: member.id,
        label: member.label.clone(),
        compliance,
        baseline,
        cost,
        errors,
    }
}

/// Price every arrangement of the baseline's required area against the
/// baseline's own bar choice. Layouts whose centroid sits above the depth
/// the area was designed at are left out.
fn price_alternatives(
    member: &BeamMember,
    baseline: &BaselineDesign,
    diameters: &[u32],
    profile: &CostProfile,
) -> DesignResult<CostOptimization> {
    let search = generate_alternatives(baseline.flexure.ast_required_mm2, &baseline.section, diameters)?;
    let design_depth = baseline.flexure.effective_depth_mm;
    let deep_enough: Vec<BarOption> = search
        .alternatives
        .into_iter()
        .filter(|o| o.effective_depth_mm >= design_depth - DEPTH_TOLERANCE_MM)
        .collect();
    optimize_cost(
        &deep_enough,
        &baseline.section,
        member.span_mm,
        baseline.selected_area_mm2(),
        profile,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{BeamSection, LoadCase};

    fn project() -> DesignProject {
        let mut project = DesignProject::new("Engineer", "25-001", "Client");
        let section = BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0);
        project.add_member(
            "B1",
            section.clone(),
            6000.0,
            vec![LoadCase::new("LC1", 120.0, 80.0), LoadCase::new("LC2", 90.0, 110.0)],
        );
        project.add_member("B2", section, 5000.0, vec![LoadCase::new("LC1", 280.0, 80.0)]);
        project
    }

    #[test]
    fn test_batch_passes_and_keeps_order() {
        let report = design_batch(&project());
        assert!(report.all_pass());
        let labels: Vec<&str> = report.members.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["B1", "B2"]);
    }

    #[test]
    fn test_member_has_baseline_and_cost() {
        let report = design_batch(&project());
        let b1 = &report.members[0];
        let baseline = b1.baseline.as_ref().unwrap();
        let cost = b1.cost.as_ref().unwrap();
        assert_eq!(cost.baseline_area_mm2, baseline.selected_area_mm2());
        // The baseline's bar choice is one of the priced options, so savings ≥ 0
        assert!(cost.savings >= 0.0);
        assert!(b1.errors.is_empty());
    }

    #[test]
    fn test_priced_options_keep_design_depth() {
        let mut p = DesignProject::new("Engineer", "25-002", "Client");
        let narrow = BeamSection::rectangular(200.0, 450.0, 400.0, 25.0, 25.0, 500.0);
        p.add_member("N1", narrow, 5000.0, vec![LoadCase::new("LC1", 240.0, 40.0)]);
        let report = design_batch(&p);
        let member = &report.members[0];
        let baseline = member.baseline.as_ref().unwrap();
        let cost = member.cost.as_ref().unwrap();
        let depth = baseline.flexure.effective_depth_mm;
        for alt in &cost.ranked {
            assert!(alt.option.effective_depth_mm >= depth - DEPTH_TOLERANCE_MM);
        }
        assert!(cost.savings >= 0.0);
    }

    #[test]
    fn test_failing_member_reported() {
        let mut p = project();
        let section = BeamSection::rectangular(230.0, 400.0, 360.0, 25.0, 20.0, 415.0);
        p.add_member("B3", section, 4000.0, vec![LoadCase::new("LC1", 40.0, 400.0)]);
        let report = design_batch(&p);
        assert!(!report.all_pass());
        assert_eq!(report.failed_members(), vec!["B3"]);
    }

    #[test]
    fn test_empty_batch_does_not_pass() {
        let report = design_batch(&DesignProject::new("E", "J", "C"));
        assert!(!report.all_pass());
    }

    #[test]
    fn test_profile_override() {
        let mut profile = CostProfile::default();
        profile.name = "Override".to_string();
        profile.steel_rate_per_kg = 2.0 * profile.steel_rate_per_kg;
        let report = design_batch_with_profile(&project(), &profile);
        assert!(report.cost_profile.starts_with("Override"));
        let base = design_batch(&project());
        let a = report.members[0].cost.as_ref().unwrap().best.steel_cost;
        let b = base.members[0].cost.as_ref().unwrap().best.steel_cost;
        assert!((a - 2.0 * b).abs() < 1e-9);
    }
}
