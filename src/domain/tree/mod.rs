//! Project hierarchy: static tree, positional ids, expansion state and the
//! flattening pass that turns them into renderable rows.

mod expansion;
mod flatten;
mod id;
mod indent;
mod node;

pub use expansion::ExpansionSet;
pub use flatten::{expandable_ids, find, flatten, FlattenedRow};
pub use id::NodeId;
pub use indent::{
    IndentTable, DEFAULT_INDENT_UNIT, LEVEL_DIRECTION, LEVEL_OBJECT, LEVEL_PROJECT, LEVEL_SYSTEM,
    LEVEL_WORK_PACKAGE,
};
pub use node::TreeNode;
