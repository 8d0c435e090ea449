//! JSON Export
//!
//! Writes the whole project tree, regardless of expansion, to a JSON file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::ExportError;
use crate::domain::tree::{NodeId, TreeNode};

#[derive(Serialize)]
struct ExportableNode {
    id: String,
    name: String,
    level: String,
    start_date: String,
    end_date: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ExportableNode>,
}

impl ExportableNode {
    fn build(node: &TreeNode, id: NodeId) -> Self {
        let children = node
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| Self::build(child, id.child(index)))
            .collect();
        Self {
            id: id.to_string(),
            name: node.name.clone(),
            level: node.level.clone(),
            start_date: node.start_date.clone(),
            end_date: node.end_date.clone(),
            children,
        }
    }
}

/// Write the tree to JSON file, returns the number of nodes written
pub fn write_tree(path: &Path, root: &TreeNode) -> Result<usize, ExportError> {
    let exportable = ExportableNode::build(root, NodeId::root());

    let json = serde_json::to_string_pretty(&exportable)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(root.size())
}
