//! UI Modules
//!
//! Page and shell components. Pages implement the Module trait and turn keys
//! into Actions; shell pieces expose plain methods the input router calls.
//!
//! Modules:
//! - dropdown: single-open overlay tracking with click-outside dismissal
//! - sidebar: collapsible menu column
//! - header: menu toggle, nav dropdowns, profile panel
//! - home: budget cards, charts, projects table
//! - project_tree: expandable hierarchy table
//! - export: CSV and JSON files

pub mod dropdown;
pub mod export;
pub mod header;
pub mod home;
pub mod project_tree;
pub mod sidebar;
