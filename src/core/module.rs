//! Module trait for page-scoped UI components

use crossterm::event::KeyEvent;

use super::Action;

/// A page or panel that owns its state and reacts to keys
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
