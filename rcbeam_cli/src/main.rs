//! # rcbeam CLI
//!
//! Batch front end for `rcbeam_core`.
//!
//! - `rcbeam batch beams.json` designs every member and prints one report
//!   per member as JSON on stdout
//! - `rcbeam init beams.json` writes a template project
//! - `rcbeam alternatives --b 300 --D 500 --d 450 ...` lists bar layouts
//!
//! Logs go to stderr (`RUST_LOG` overrides the `info` default) so stdout
//! stays machine-readable.
//!
//! Exit codes: 0 when every member complies, 1 when any does not, 2 when
//! the input could not be read.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rcbeam_core::batch::{design_batch_with_profile, BatchReport};
use rcbeam_core::cost_profile::load_cost_profile;
use rcbeam_core::errors::DesignError;
use rcbeam_core::file_io::{load_project, save_project, write_json_atomic};
use rcbeam_core::optimization::{generate_alternatives, DEFAULT_DIAMETERS_MM};
use rcbeam_core::project::DesignProject;
use rcbeam_core::section::{BeamSection, LoadCase};

const EXIT_NON_COMPLIANT: u8 = 1;
const EXIT_INPUT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "rcbeam")]
#[command(about = "IS 456:2000 reinforced concrete beam design", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Design every member of a project file
    Batch {
        /// Path to the project JSON file
        project_path: PathBuf,
        /// TOML cost profile overriding the project's
        #[arg(long)]
        cost_profile: Option<PathBuf>,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a template project file
    Init {
        /// Where to write the project
        project_path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// List feasible bar arrangements for a required steel area
    Alternatives {
        /// Width b (mm)
        #[arg(long = "b")]
        width_mm: f64,
        /// Overall depth D (mm)
        #[arg(long = "D")]
        overall_depth_mm: f64,
        /// Effective depth d (mm)
        #[arg(long = "d")]
        effective_depth_mm: f64,
        /// Clear cover (mm)
        #[arg(long, default_value_t = 25.0)]
        cover: f64,
        /// Concrete strength fck (N/mm²)
        #[arg(long)]
        fck: f64,
        /// Steel yield strength fy (N/mm²)
        #[arg(long)]
        fy: f64,
        /// Required tension steel area (mm²)
        #[arg(long)]
        ast: f64,
        /// Candidate diameters, comma separated (mm)
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_DIAMETERS_MM)]
        diameters: Vec<u32>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Batch {
            project_path,
            cost_profile,
            output,
        } => cmd_batch(&project_path, cost_profile.as_deref(), output.as_deref()),
        Commands::Init {
            project_path,
            force,
        } => cmd_init(&project_path, force),
        Commands::Alternatives {
            width_mm,
            overall_depth_mm,
            effective_depth_mm,
            cover,
            fck,
            fy,
            ast,
            diameters,
        } => {
            let section = BeamSection::rectangular(
                width_mm,
                overall_depth_mm,
                effective_depth_mm,
                cover,
                fck,
                fy,
            );
            cmd_alternatives(&section, ast, &diameters)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!(code = e.error_code(), "{e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{}", json);
            }
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}

fn cmd_batch(
    project_path: &Path,
    cost_profile: Option<&Path>,
    output: Option<&Path>,
) -> Result<ExitCode, DesignError> {
    let project = load_project(project_path)?;
    let profile = match cost_profile {
        Some(path) => load_cost_profile(path)?,
        None => project.settings.cost_profile.clone(),
    };

    let report = design_batch_with_profile(&project, &profile);
    print_summary(&report);

    match output {
        Some(path) => {
            write_json_atomic(&report, path)?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| DesignError::serialization(e.to_string()))?;
            println!("{}", json);
        }
    }

    Ok(if report.all_pass() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NON_COMPLIANT)
    })
}

/// One line per member on stderr
fn print_summary(report: &BatchReport) {
    for member in &report.members {
        let governing = &member.compliance;
        eprintln!(
            "{} {:<12} governing {:<12} utilization {:>5} {}",
            status_icon(member.passes()),
            member.label,
            governing.governing_case_id.as_deref().unwrap_or("-"),
            governing
                .governing_utilization
                .map_or_else(|| "-".to_string(), |u| format!("{:.2}", u)),
            member
                .cost
                .as_ref()
                .map_or_else(String::new, |c| format!(
                    "best {} ({:.0} {})",
                    c.best.option.designation(),
                    c.best.steel_cost,
                    c.currency
                )),
        );
    }
}

fn cmd_init(project_path: &Path, force: bool) -> Result<ExitCode, DesignError> {
    if project_path.exists() && !force {
        return Err(DesignError::file_error(
            "init",
            project_path.display().to_string(),
            "File exists; pass --force to overwrite",
        ));
    }

    let mut project = DesignProject::new("Engineer", "JOB-001", "Client");
    project.add_member(
        "B1",
        BeamSection::rectangular(300.0, 500.0, 450.0, 25.0, 25.0, 500.0),
        6000.0,
        vec![
            LoadCase::new("1.5(DL+LL)", 120.0, 80.0),
            LoadCase::new("1.2(DL+LL+EQ)", 95.0, 110.0),
        ],
    );
    project.add_member(
        "B2",
        BeamSection::rectangular(300.0, 600.0, 550.0, 25.0, 25.0, 500.0).with_flange(1200.0, 120.0),
        7500.0,
        vec![LoadCase::new("1.5(DL+LL)", 260.0, 150.0)],
    );

    save_project(&project, project_path)?;
    info!(path = %project_path.display(), "template project written");
    Ok(ExitCode::SUCCESS)
}

fn cmd_alternatives(
    section: &BeamSection,
    ast_required_mm2: f64,
    diameters: &[u32],
) -> Result<ExitCode, DesignError> {
    let search = generate_alternatives(ast_required_mm2, section, diameters)?;

    for option in &search.alternatives {
        eprintln!(
            "{:<16} {:>7.0} mm²  spacing {:>5.1} mm (min {:.0})  d = {:.0} mm",
            option.designation(),
            option.provided_area_mm2,
            option.clear_spacing_mm,
            option.min_clear_spacing_mm,
            option.effective_depth_mm
        );
    }
    if let Some(e) = search.to_error() {
        error!("{e}");
    }

    let json = serde_json::to_string_pretty(&search)
        .map_err(|e| DesignError::serialization(e.to_string()))?;
    println!("{}", json);

    Ok(if search.is_feasible() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NON_COMPLIANT)
    })
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]  " } else { "[FAIL]" }
}
