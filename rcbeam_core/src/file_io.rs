//! # File I/O Module
//!
//! Project files and reports are JSON. Writes are atomic:
//! serialize, write to a `.tmp` sibling, fsync, re-read and parse the
//! temp file, then rename over the target. An interrupted save leaves the
//! previous file intact.
//!
//! Loading checks the schema version before the project is used.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rcbeam_core::file_io::{load_project, save_project};
//! use rcbeam_core::project::DesignProject;
//! use std::path::Path;
//!
//! let project = DesignProject::new("Engineer", "25-001", "Client");
//! let path = Path::new("beams.json");
//! save_project(&project, path)?;
//! let loaded = load_project(path)?;
//! assert_eq!(loaded.meta.job_id, "25-001");
//! # Ok::<(), rcbeam_core::errors::DesignError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::{DesignError, DesignResult};
use crate::project::{DesignProject, SCHEMA_VERSION};

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Serialize `value` as pretty JSON and write it atomically.
///
/// The temp file is parsed back as `T` before the rename, so a file that
/// cannot be read again never replaces a good one.
pub fn write_json_atomic<T>(value: &T, path: &Path) -> DesignResult<()>
where
    T: Serialize + DeserializeOwned,
{
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| DesignError::serialization(e.to_string()))?;
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        DesignError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        DesignError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.sync_all().map_err(|e| {
        DesignError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    let verify = fs::read_to_string(&tmp_path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str::<T>(&text).map_err(|e| e.to_string()));
    if let Err(reason) = verify {
        let _ = fs::remove_file(&tmp_path);
        return Err(DesignError::file_error(
            "verify temp file",
            tmp_path.display().to_string(),
            reason,
        ));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        DesignError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = json.len(), "file saved");
    Ok(())
}

/// Save a project with atomic write semantics.
pub fn save_project(project: &DesignProject, path: &Path) -> DesignResult<()> {
    write_json_atomic(project, path)
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(DesignProject)` - Successfully loaded project
/// * `Err(DesignError::VersionMismatch)` - File version is incompatible
/// * `Err(DesignError::SerializationError)` - Invalid JSON
/// * `Err(DesignError::FileError)` - I/O error
pub fn load_project(path: &Path) -> DesignResult<DesignProject> {
    let contents = fs::read_to_string(path)
        .map_err(|e| DesignError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: DesignProject = serde_json::from_str(&contents).map_err(|e| {
        DesignError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&project.meta.version)?;
    Ok(project)
}

/// Major versions must match; in 0.x a newer minor version is refused.
fn validate_version(file_version: &str) -> DesignResult<()> {
    let mismatch = || DesignError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };
    let parse = |v: &str| -> Option<(u32, u32)> {
        let mut parts = v.split('.').map(|p| p.parse::<u32>().ok());
        Some((parts.next()??, parts.next().flatten().unwrap_or(0)))
    };

    let (file_major, file_minor) = parse(file_version).ok_or_else(mismatch)?;
    let (major, minor) = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != major || (major == 0 && file_minor > minor) {
        return Err(mismatch());
    }
    Ok(())
}
