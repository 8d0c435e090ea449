//! Project tree page: expandable hierarchy rendered as indented table rows

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, ExportTarget, Module, NotifyLevel};
use crate::domain::tree::{
    expandable_ids, flatten, ExpansionSet, FlattenedRow, IndentTable, NodeId, TreeNode,
};

const PAGE_STEP: usize = 10;

#[derive(Debug, Clone)]
pub struct ProjectTreePage {
    tree: TreeNode,
    expanded: ExpansionSet,
    indent: IndentTable,
    indent_unit: u16,
    selected: usize,
    offset: usize,
}

impl ProjectTreePage {
    pub fn new(tree: TreeNode, indent: IndentTable, indent_unit: u16) -> Self {
        Self {
            tree,
            expanded: ExpansionSet::default(),
            indent,
            indent_unit,
            selected: 0,
            offset: 0,
        }
    }

    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    pub fn expanded(&self) -> &ExpansionSet {
        &self.expanded
    }

    pub fn indent_table(&self) -> &IndentTable {
        &self.indent
    }

    pub fn indent_unit(&self) -> u16 {
        self.indent_unit
    }

    /// Rows visible under the current expansion state.
    pub fn rows(&self) -> Vec<FlattenedRow<'_>> {
        flatten(&self.tree, &self.expanded)
    }

    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expanded.is_expanded(id)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn selected_row(&self) -> Option<FlattenedRow<'_>> {
        self.rows().into_iter().nth(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        let len = self.rows().len();
        self.selected = index.min(len.saturating_sub(1));
    }

    pub fn move_selection(&mut self, forward: bool, step: usize) {
        if forward {
            self.select(self.selected.saturating_add(step));
        } else {
            self.select(self.selected.saturating_sub(step));
        }
    }

    /// Flips expansion of `id` and keeps the selection on the same node, or
    /// on its closest visible ancestor if it just got hidden.
    pub fn toggle(&mut self, id: &NodeId) -> bool {
        let keep = self.selected_row().map(|row| row.id);
        self.flip(id, keep)
    }

    pub fn toggle_selected(&mut self) -> Action {
        match self.selected_entry() {
            Some((id, true)) => {
                self.flip(&id, Some(id.clone()));
                Action::None
            }
            Some(_) => Action::None,
            None => Action::Notify("Nothing selected".to_string(), NotifyLevel::Warn),
        }
    }

    /// Expands the selected node, or steps into its first child when it is
    /// already open.
    pub fn expand_selected(&mut self) {
        let Some((id, true)) = self.selected_entry() else {
            return;
        };
        if self.expanded.is_expanded(&id) {
            self.select(self.selected + 1);
        } else {
            self.flip(&id, Some(id.clone()));
        }
    }

    /// Collapses the selected node, or moves to its parent when there is
    /// nothing to collapse.
    pub fn collapse_selected(&mut self) {
        let Some((id, has_children)) = self.selected_entry() else {
            return;
        };
        if has_children && self.expanded.is_expanded(&id) {
            self.flip(&id, Some(id.clone()));
        } else if let Some(parent) = id.parent() {
            self.reselect(&parent);
        }
    }

    pub fn expand_all(&mut self) {
        let keep = self.selected_row().map(|row| row.id);
        self.expanded.expand_all(expandable_ids(&self.tree));
        if let Some(keep) = keep {
            self.reselect(&keep);
        }
    }

    /// Back to the startup expansion state.
    pub fn reset(&mut self) {
        let keep = self.selected_row().map(|row| row.id);
        self.expanded.reset();
        match keep {
            Some(keep) => self.reselect(&keep),
            None => self.select(0),
        }
    }

    /// Handles a click on the `index`-th row currently on screen.
    pub fn click_row(&mut self, index: usize) -> Action {
        let target = self.offset + index;
        let entry = self
            .rows()
            .into_iter()
            .nth(target)
            .map(|row| (row.id, row.has_children));
        match entry {
            Some((id, has_children)) => {
                self.selected = target;
                if has_children {
                    self.flip(&id, Some(id.clone()));
                }
                Action::None
            }
            None => Action::None,
        }
    }

    /// Scrolls so the selection fits in `height` rows; returns the offset.
    pub fn ensure_visible(&mut self, height: usize) -> usize {
        let height = height.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
        let len = self.rows().len();
        self.offset = self.offset.min(len.saturating_sub(height));
        self.offset
    }

    fn flip(&mut self, id: &NodeId, keep: Option<NodeId>) -> bool {
        let expanded = self.expanded.toggle(id);
        log::debug!(
            "tree toggle {id} -> {}",
            if expanded { "expanded" } else { "collapsed" }
        );
        if let Some(keep) = keep {
            self.reselect(&keep);
        }
        expanded
    }

    fn selected_entry(&self) -> Option<(NodeId, bool)> {
        self.selected_row().map(|row| (row.id, row.has_children))
    }

    fn reselect(&mut self, id: &NodeId) {
        let ids: Vec<NodeId> = self.rows().into_iter().map(|row| row.id).collect();
        let mut current = Some(id.clone());
        while let Some(candidate) = current {
            if let Some(index) = ids.iter().position(|row_id| *row_id == candidate) {
                self.selected = index;
                return;
            }
            current = candidate.parent();
        }
        self.selected = self.selected.min(ids.len().saturating_sub(1));
    }
}

impl Module for ProjectTreePage {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false, 1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true, 1);
                Action::None
            }
            KeyCode::PageUp => {
                self.move_selection(false, PAGE_STEP);
                Action::None
            }
            KeyCode::PageDown => {
                self.move_selection(true, PAGE_STEP);
                Action::None
            }
            KeyCode::Home => {
                self.select(0);
                Action::None
            }
            KeyCode::End => {
                self.select(usize::MAX);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Right | KeyCode::Char('l') => {
                self.expand_selected();
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.collapse_selected();
                Action::None
            }
            KeyCode::Char('a') => {
                self.expand_all();
                Action::Notify("Expanded all rows".to_string(), NotifyLevel::Info)
            }
            KeyCode::Char('c') => {
                self.reset();
                Action::Notify("Collapsed to default".to_string(), NotifyLevel::Info)
            }
            KeyCode::Char('y') => match self.selected_row() {
                Some(row) => Action::Copy(row.node.name.clone()),
                None => Action::Notify("Nothing to copy".to_string(), NotifyLevel::Warn),
            },
            KeyCode::Char('e') => Action::Export(ExportTarget::TreeRows),
            KeyCode::Char('E') => Action::Export(ExportTarget::TreeJson),
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::project_tree;
    use crossterm::event::KeyModifiers;

    fn page() -> ProjectTreePage {
        ProjectTreePage::new(project_tree(), IndentTable::default(), 2)
    }

    fn press(page: &mut ProjectTreePage, code: KeyCode) -> Action {
        page.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_initial_rows() {
        let page = page();
        let rows = page.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].node.name, "P01.02. Направление 2");
    }

    #[test]
    fn test_enter_toggles_selected() {
        let mut page = page();
        press(&mut page, KeyCode::Down);
        press(&mut page, KeyCode::Down);
        press(&mut page, KeyCode::Enter);
        assert_eq!(page.rows().len(), 4);
        press(&mut page, KeyCode::Enter);
        assert_eq!(page.rows().len(), 3);
    }

    #[test]
    fn test_enter_on_leaf_does_nothing() {
        let mut page = page();
        press(&mut page, KeyCode::Down);
        let before = page.expanded().clone();
        assert_eq!(press(&mut page, KeyCode::Enter), Action::None);
        assert_eq!(page.expanded(), &before);
    }

    #[test]
    fn test_right_then_left() {
        let mut page = page();
        page.select(2);
        press(&mut page, KeyCode::Right);
        assert_eq!(page.rows().len(), 4);
        press(&mut page, KeyCode::Right);
        assert_eq!(page.selected(), 3);
        // leaf-or-collapsed row: Left jumps to the parent
        press(&mut page, KeyCode::Left);
        assert_eq!(page.selected(), 2);
        press(&mut page, KeyCode::Left);
        assert_eq!(page.rows().len(), 3);
    }

    #[test]
    fn test_collapsing_root_keeps_selection_on_root() {
        let mut page = page();
        page.select(2);
        page.toggle(&NodeId::root());
        assert_eq!(page.rows().len(), 1);
        assert_eq!(page.selected(), 0);
    }

    #[test]
    fn test_expand_all_and_reset() {
        let mut page = page();
        press(&mut page, KeyCode::Char('a'));
        assert_eq!(page.rows().len(), page.tree().size());
        page.select(usize::MAX);
        press(&mut page, KeyCode::Char('c'));
        assert_eq!(page.rows().len(), 3);
        // last package collapses back onto "Направление 2"
        assert_eq!(page.selected(), 2);
    }

    #[test]
    fn test_click_row_uses_offset() {
        let mut page = page();
        page.expand_all();
        page.select(11);
        assert_eq!(page.ensure_visible(5), 7);
        page.click_row(0);
        assert_eq!(page.selected(), 7);
    }

    #[test]
    fn test_click_past_end_is_ignored() {
        let mut page = page();
        assert_eq!(page.click_row(10), Action::None);
        assert_eq!(page.selected(), 0);
    }

    #[test]
    fn test_copy_and_export_keys() {
        let mut page = page();
        assert_eq!(
            press(&mut page, KeyCode::Char('y')),
            Action::Copy("P01. Проект 1".to_string())
        );
        assert_eq!(
            press(&mut page, KeyCode::Char('E')),
            Action::Export(ExportTarget::TreeJson)
        );
    }

    #[test]
    fn test_selection_tracks_node_across_toggles() {
        let mut page = page();
        page.select(2);
        page.click_row(2);
        assert_eq!(page.rows().len(), 4);
        assert_eq!(page.selected_row().map(|row| row.id.to_string()).as_deref(), Some("0-1"));

        // collapsing the root pulls the selection up to it
        page.toggle(&NodeId::root());
        assert_eq!(page.selected(), 0);
        page.toggle(&NodeId::root());
        assert_eq!(page.selected(), 0);

        page.select(3);
        page.click_row(2);
        assert_eq!(page.rows().len(), 3);
        assert_eq!(page.selected(), 2);
    }
}
