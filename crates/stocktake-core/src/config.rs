//! Project configuration loaded from `.stocktake/config.toml`.
//!
//! There is no process-wide mutable configuration: callers load a
//! [`ProjectConfig`] once and pass the relevant section by reference into
//! pure functions. A missing file means defaults; a malformed file is an
//! error rather than a silent fallback.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory that marks a stocktake project root.
pub const PROJECT_DIR: &str = ".stocktake";

/// Store filename inside [`PROJECT_DIR`].
pub const STORE_FILE: &str = "assets.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

/// Thresholds for the reporting and insight layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Assets in normal status at or past this age are replacement
    /// candidates.
    #[serde(default = "default_replacement_age_years")]
    pub replacement_age_years: f64,
    /// Records priced at or above this are treated as high-value.
    #[serde(default = "default_high_value_threshold")]
    pub high_value_threshold: i64,
    /// Non-normal ratio above this triggers the health warning.
    #[serde(default = "default_issue_warn_ratio")]
    pub issue_warn_ratio: f64,
    /// Non-normal ratio above this (but under the warn bracket) is worth
    /// watching.
    #[serde(default = "default_issue_watch_ratio")]
    pub issue_watch_ratio: f64,
    /// Row count for the most-recently-purchased dashboard table.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            replacement_age_years: default_replacement_age_years(),
            high_value_threshold: default_high_value_threshold(),
            issue_warn_ratio: default_issue_warn_ratio(),
            issue_watch_ratio: default_issue_watch_ratio(),
            recent_limit: default_recent_limit(),
        }
    }
}

const fn default_replacement_age_years() -> f64 {
    3.0
}

const fn default_high_value_threshold() -> i64 {
    5_000_000
}

const fn default_issue_warn_ratio() -> f64 {
    0.30
}

const fn default_issue_watch_ratio() -> f64 {
    0.10
}

const fn default_recent_limit() -> usize {
    5
}

/// Load the project config, falling back to defaults when the file is
/// absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(PROJECT_DIR).join("config.toml");
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Path of the asset store under a project root.
#[must_use]
pub fn store_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_DIR).join(STORE_FILE)
}

/// Walk up from `start` looking for a directory containing
/// [`PROJECT_DIR`]; falls back to `start` itself when none is found.
#[must_use]
pub fn discover_root(start: &Path) -> PathBuf {
    let mut dir = start;
    loop {
        if dir.join(PROJECT_DIR).is_dir() {
            return dir.to_path_buf();
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return start.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectConfig, discover_root, load_project_config, store_path};

    #[test]
    fn defaults_match_the_documented_thresholds() {
        let config = ProjectConfig::default();
        assert!((config.report.replacement_age_years - 3.0).abs() < f64::EPSILON);
        assert_eq!(config.report.high_value_threshold, 5_000_000);
        assert!((config.report.issue_warn_ratio - 0.30).abs() < f64::EPSILON);
        assert!((config.report.issue_watch_ratio - 0.10).abs() < f64::EPSILON);
        assert_eq!(config.report.recent_limit, 5);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_project_config(dir.path()).expect("load");
        assert_eq!(config.report.high_value_threshold, 5_000_000);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let project = dir.path().join(".stocktake");
        std::fs::create_dir_all(&project).expect("mkdir");
        std::fs::write(
            project.join("config.toml"),
            "[report]\nreplacement_age_years = 4.5\n",
        )
        .expect("write config");

        let config = load_project_config(dir.path()).expect("load");
        assert!((config.report.replacement_age_years - 4.5).abs() < f64::EPSILON);
        assert_eq!(config.report.high_value_threshold, 5_000_000);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let project = dir.path().join(".stocktake");
        std::fs::create_dir_all(&project).expect("mkdir");
        std::fs::write(project.join("config.toml"), "report = {{ nope").expect("write config");

        assert!(load_project_config(dir.path()).is_err());
    }

    #[test]
    fn discover_root_walks_up_to_the_marker() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        std::fs::create_dir_all(root.join(".stocktake")).expect("mkdir");
        let nested = root.join("a/b/c");
        std::fs::create_dir_all(&nested).expect("mkdir nested");

        assert_eq!(discover_root(&nested), root);
        assert!(store_path(root).ends_with(".stocktake/assets.db"));
    }

    #[test]
    fn discover_root_without_marker_returns_start() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("plain");
        std::fs::create_dir_all(&nested).expect("mkdir");
        assert_eq!(discover_root(&nested), nested);
    }
}
