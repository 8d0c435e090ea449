//! Export Module
//!
//! Provides CSV and JSON export for the tree and home pages.
//!
//! - 'e' on the tree page → visible rows as CSV
//! - 'E' on the tree page → whole tree as JSON
//! - 'e' on the home page → project table as CSV
//! - Files land in the configured export dir, or the data dir's exports/

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::app::App;
use crate::core::{Action, ExportTarget, NotifyLevel};
use crate::data::home::Project;
use crate::modules::project_tree::ProjectTreePage;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Get the export directory path, creating it if needed
pub fn export_dir(configured: Option<&Path>) -> std::io::Result<PathBuf> {
    let export_dir = match configured {
        Some(dir) => dir.to_path_buf(),
        None => crate::config::data_dir()
            .map(|dir| dir.join("exports"))
            .unwrap_or_else(|| PathBuf::from(".projdash").join("exports")),
    };
    fs::create_dir_all(&export_dir)?;
    Ok(export_dir)
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

pub fn export_tree_rows(dir: &Path, page: &ProjectTreePage) -> Result<(PathBuf, usize), ExportError> {
    let path = dir.join(generate_filename("tree-rows", "csv"));
    let rows = page.rows();
    let count = csv_export::write_tree_rows(&path, &rows, page.indent_table())?;
    Ok((path, count))
}

pub fn export_tree_json(dir: &Path, page: &ProjectTreePage) -> Result<(PathBuf, usize), ExportError> {
    let path = dir.join(generate_filename("tree", "json"));
    let count = json_export::write_tree(&path, page.tree())?;
    Ok((path, count))
}

pub fn export_projects(dir: &Path, projects: &[Project]) -> Result<(PathBuf, usize), ExportError> {
    let path = dir.join(generate_filename("projects", "csv"));
    let count = csv_export::write_projects(&path, projects)?;
    Ok((path, count))
}

/// Export the data behind `target` and describe the outcome
pub fn export_target(app: &App, target: ExportTarget) -> Action {
    let dir = match export_dir(app.export_dir.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            log::error!("export dir unavailable: {e}");
            return Action::Notify(
                format!("Failed to create export directory: {}", e),
                NotifyLevel::Error,
            );
        }
    };

    let (noun, result) = match target {
        ExportTarget::TreeRows => ("rows", export_tree_rows(&dir, &app.tree)),
        ExportTarget::TreeJson => ("nodes", export_tree_json(&dir, &app.tree)),
        ExportTarget::Projects => ("projects", export_projects(&dir, app.home.projects())),
    };

    match result {
        Ok((path, count)) => {
            log::info!("exported {count} {noun} to {}", path.display());
            Action::Notify(
                format!("Exported {} {} to {}", count, noun, path.display()),
                NotifyLevel::Info,
            )
        }
        Err(e) => {
            log::error!("export of {noun} failed: {e}");
            Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error)
        }
    }
}
