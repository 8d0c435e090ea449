use super::{ExpansionSet, NodeId, TreeNode};

/// One visible row of the flattened tree. Recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedRow<'a> {
    pub node: &'a TreeNode,
    pub id: NodeId,
    pub depth: usize,
    pub has_children: bool,
}

/// Pre-order rows of `root`, descending into a node's children only when the
/// node's id is in `expanded`. The root row is always present.
///
/// Collapsed subtrees are never walked, so the cost follows the number of
/// visible rows rather than the size of the tree.
pub fn flatten<'a>(root: &'a TreeNode, expanded: &ExpansionSet) -> Vec<FlattenedRow<'a>> {
    let mut rows = Vec::new();
    let mut stack = vec![(root, NodeId::root(), 0usize)];

    while let Some((node, id, depth)) = stack.pop() {
        let has_children = node.has_children();
        if has_children && expanded.is_expanded(&id) {
            // reversed so the first child is popped first
            for (index, child) in node.children.iter().enumerate().rev() {
                stack.push((child, id.child(index), depth + 1));
            }
        }
        rows.push(FlattenedRow {
            node,
            id,
            depth,
            has_children,
        });
    }

    rows
}

/// Ids of every node that has children, in pre-order.
pub fn expandable_ids(root: &TreeNode) -> Vec<NodeId> {
    let mut ids = Vec::new();
    let mut stack = vec![(root, NodeId::root())];
    while let Some((node, id)) = stack.pop() {
        if !node.has_children() {
            continue;
        }
        for (index, child) in node.children.iter().enumerate().rev() {
            stack.push((child, id.child(index)));
        }
        ids.push(id);
    }
    ids
}

/// Resolves an id back to its node by following the encoded path.
pub fn find<'a>(root: &'a TreeNode, id: &NodeId) -> Option<&'a TreeNode> {
    id.path()
        .into_iter()
        .try_fold(root, |node, index| node.children.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rows: &[FlattenedRow<'_>]) -> Vec<String> {
        rows.iter().map(|row| row.node.name.clone()).collect()
    }

    fn sample() -> TreeNode {
        TreeNode::new("root", "Проект", "", "").with_children(vec![
            TreeNode::new("A", "Направление", "", ""),
            TreeNode::new("B", "Направление", "", "").with_children(vec![TreeNode::new(
                "C", "Объект", "", "",
            )
            .with_children(vec![TreeNode::new("D", "Система", "", "")])]),
        ])
    }

    #[test]
    fn test_default_shows_root_children() {
        let tree = sample();
        let rows = flatten(&tree, &ExpansionSet::new());
        assert_eq!(names(&rows), vec!["root", "A", "B"]);
        assert_eq!(
            rows.iter().map(|row| row.depth).collect::<Vec<_>>(),
            vec![0, 1, 1]
        );
        assert!(rows[2].has_children);
        assert!(!rows[1].has_children);
    }

    #[test]
    fn test_root_always_emitted() {
        let tree = sample();
        let rows = flatten(&tree, &ExpansionSet::from_ids([]));
        assert_eq!(names(&rows), vec!["root"]);
        assert!(rows[0].has_children);
    }

    #[test]
    fn test_expanding_reveals_direct_children_only() {
        let tree = sample();
        let mut expanded = ExpansionSet::new();
        expanded.toggle(&NodeId::root().child(1));
        let rows = flatten(&tree, &expanded);
        assert_eq!(names(&rows), vec!["root", "A", "B", "C"]);
        assert_eq!(rows[3].depth, 2);
        assert_eq!(rows[3].id.as_str(), "0-1-0");
        assert!(rows[3].has_children);
    }

    #[test]
    fn test_expandable_ids() {
        let tree = sample();
        let ids: Vec<String> = expandable_ids(&tree)
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["0", "0-1", "0-1-0"]);
    }

    #[test]
    fn test_find() {
        let tree = sample();
        let d = NodeId::root().child(1).child(0).child(0);
        assert_eq!(find(&tree, &d).map(|n| n.name.as_str()), Some("D"));
        assert_eq!(find(&tree, &NodeId::root()).map(|n| n.name.as_str()), Some("root"));
        assert!(find(&tree, &NodeId::root().child(5)).is_none());
    }
}
