use std::fmt;

const ROOT: &str = "0";
const SEPARATOR: char = '-';

/// Positional identifier of a node: the root is `0`, its second child is
/// `0-1`, that child's first child is `0-1-0`, and so on.
///
/// Ids depend only on the path from the root, never on node content, so two
/// renders of the same tree always agree on them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    /// Id of the `index`-th child of `self`.
    pub fn child(&self, index: usize) -> Self {
        Self(format!("{}{SEPARATOR}{index}", self.0))
    }

    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(parent, _)| Self(parent.to_string()))
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    /// Path length from the root (root = 0).
    pub fn depth(&self) -> usize {
        self.0.matches(SEPARATOR).count()
    }

    /// Child indices from the root down to this node.
    pub fn path(&self) -> Vec<usize> {
        self.0
            .split(SEPARATOR)
            .skip(1)
            .filter_map(|part| part.parse().ok())
            .collect()
    }

    /// Parses a textual id, rejecting anything that is not `0(-N)*`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let mut parts = input.split(SEPARATOR);
        if parts.next()? != ROOT {
            return None;
        }
        for part in parts {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
        }
        Some(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
