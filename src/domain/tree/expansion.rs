use std::collections::BTreeSet;

use super::NodeId;

/// Ids of the nodes currently showing their children.
///
/// Collapsing a node only removes that node's own id. Flags recorded for its
/// descendants stay in the set and apply again once the node is re-expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionSet {
    ids: BTreeSet<NodeId>,
}

impl Default for ExpansionSet {
    fn default() -> Self {
        let mut ids = BTreeSet::new();
        ids.insert(NodeId::root());
        Self { ids }
    }
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with exactly the given ids (the root is not implied).
    pub fn from_ids(ids: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Flips membership of `id`. Returns `true` when the node is now expanded.
    pub fn toggle(&mut self, id: &NodeId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.ids.contains(id)
    }

    pub fn expand_all(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.ids.extend(ids);
    }

    /// Back to the startup state: only the root expanded.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.ids.iter()
    }
}
