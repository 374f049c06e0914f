//! `stk init` — create the project directory, config, and store.

use anyhow::Context as _;
use clap::Args;
use serde::Serialize;
use std::io::Write as _;
use std::path::Path;

use stocktake_core::config::{PROJECT_DIR, ProjectConfig, store_path};
use stocktake_core::db;

use crate::output::{OutputMode, render};

/// Arguments for `stk init`.
#[derive(Args, Debug, Default)]
pub struct InitArgs {}

#[derive(Debug, Serialize)]
struct InitReport {
    project_dir: String,
    store: String,
    config: String,
    created: bool,
}

/// Execute `stk init`.
pub fn run_init(_args: &InitArgs, output: OutputMode, project_root: &Path) -> anyhow::Result<()> {
    let project_dir = project_root.join(PROJECT_DIR);
    let created = !project_dir.exists();
    std::fs::create_dir_all(&project_dir)
        .with_context(|| format!("create {}", project_dir.display()))?;

    let config_path = project_dir.join("config.toml");
    if !config_path.exists() {
        let defaults =
            toml::to_string_pretty(&ProjectConfig::default()).context("serialize defaults")?;
        std::fs::write(&config_path, defaults)
            .with_context(|| format!("write {}", config_path.display()))?;
    }

    let db_path = store_path(project_root);
    drop(db::open_store(&db_path)?);

    let report = InitReport {
        project_dir: project_dir.display().to_string(),
        store: db_path.display().to_string(),
        config: config_path.display().to_string(),
        created,
    };

    render(output, &report, |report, w| {
        if report.created {
            writeln!(w, "✓ initialized stocktake project")?;
        } else {
            writeln!(w, "✓ stocktake project already initialized")?;
        }
        writeln!(w, "  store:  {}", report.store)?;
        writeln!(w, "  config: {}", report.config)?;
        Ok(())
    })
}
