//! Hard-coded dashboard content.

pub mod home;
pub mod menu;
mod project_tree;

pub use project_tree::project_tree;
