use crate::domain::tree::{
    TreeNode, LEVEL_DIRECTION, LEVEL_OBJECT, LEVEL_PROJECT, LEVEL_SYSTEM, LEVEL_WORK_PACKAGE,
};

const WORK_PACKAGES: [(&str, &str, &str); 7] = [
    ("P01.02.01.01.01. Пакет работ 3", "2024-12-14", "2026-10-24"),
    ("P01.02.01.01.02. Пакет работ 2", "2024-10-14", "2024-10-30"),
    ("P01.02.01.01.03. Пакет работ 12", "2024-02-01", "2024-07-09"),
    ("P01.02.01.01.04. Пакет работ 45", "2024-11-04", "2024-11-19"),
    ("P01.02.01.01.05. Пакет работ 24", "2025-01-15", "2025-01-30"),
    ("P01.02.01.01.PS. to_test", "2025-12-12", "2027-11-12"),
    ("P01.02.01.01.QS. lost144", "2025-12-12", "2027-12-12"),
];

/// The project hierarchy shown on the tree page.
pub fn project_tree() -> TreeNode {
    let packages = WORK_PACKAGES
        .iter()
        .map(|(name, start, end)| TreeNode::new(*name, LEVEL_WORK_PACKAGE, *start, *end))
        .collect();

    let system = TreeNode::new("P01.02.01.01. Система 2", LEVEL_SYSTEM, "2024-02-01", "2027-12-12")
        .with_children(packages);
    let object = TreeNode::new("P01.02.01. Объект 2", LEVEL_OBJECT, "2024-02-01", "2027-12-12")
        .with_children(vec![system]);

    TreeNode::new("P01. Проект 1", LEVEL_PROJECT, "2024-02-01", "2030-07-10").with_children(vec![
        TreeNode::new("P01.01. Шахта 1", LEVEL_DIRECTION, "2024-09-11", "2030-07-10"),
        TreeNode::new(
            "P01.02. Направление 2",
            LEVEL_DIRECTION,
            "2024-02-01",
            "2027-12-12",
        )
        .with_children(vec![object]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_tree_shape() {
        let tree = project_tree();
        assert_eq!(tree.size(), 12);
        assert_eq!(tree.children.len(), 2);
        assert!(!tree.children[0].has_children());
        let system = &tree.children[1].children[0].children[0];
        assert_eq!(system.level, LEVEL_SYSTEM);
        assert_eq!(system.children.len(), 7);
    }
}
