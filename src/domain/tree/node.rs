/// A labelled node of the project hierarchy.
///
/// Nodes are built once from static data and never mutated afterwards.
/// Dates are display strings (`YYYY-MM-DD`) and are not parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub level: String,
    pub start_date: String,
    pub end_date: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(
        name: impl Into<String>,
        level: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}
