//! CSV Export
//!
//! Writes visible tree rows and the project table to CSV files.

use std::path::Path;

use super::ExportError;
use crate::data::home::Project;
use crate::domain::tree::{FlattenedRow, IndentTable};

/// Write flattened tree rows to CSV file
pub fn write_tree_rows(
    path: &Path,
    rows: &[FlattenedRow<'_>],
    indent: &IndentTable,
) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "depth",
        "indent",
        "has_children",
        "name",
        "level",
        "start_date",
        "end_date",
    ])?;

    for row in rows {
        wtr.write_record([
            row.id.to_string(),
            row.depth.to_string(),
            indent.rank_for(row).to_string(),
            row.has_children.to_string(),
            row.node.name.clone(),
            row.node.level.clone(),
            row.node.start_date.clone(),
            row.node.end_date.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(rows.len())
}

/// Write projects to CSV file
pub fn write_projects(path: &Path, projects: &[Project]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "name", "budget", "spent", "status", "progress"])?;

    for project in projects {
        wtr.write_record([
            project.id.to_string(),
            project.name.to_string(),
            project.budget.to_string(),
            project.spent.to_string(),
            project.status.title().to_string(),
            project.progress.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(projects.len())
}
