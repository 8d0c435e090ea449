//! Home page: budget cards, charts and the top projects table

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, ExportTarget, Module, NotifyLevel};
use crate::data::home::{Project, PROJECTS};

#[derive(Debug, Clone, Default)]
pub struct HomePage {
    selected: usize,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &'static [Project] {
        &PROJECTS
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        PROJECTS.get(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(PROJECTS.len().saturating_sub(1));
    }

    pub fn move_selection(&mut self, forward: bool) {
        if forward {
            self.select(self.selected + 1);
        } else {
            self.select(self.selected.saturating_sub(1));
        }
    }
}

impl Module for HomePage {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Home => {
                self.select(0);
                Action::None
            }
            KeyCode::End => {
                self.select(PROJECTS.len());
                Action::None
            }
            KeyCode::Char('y') => match self.selected_project() {
                Some(project) => Action::Copy(project.name.to_string()),
                None => Action::Notify("Nothing to copy".to_string(), NotifyLevel::Warn),
            },
            KeyCode::Char('e') => Action::Export(ExportTarget::Projects),
            _ => Action::None,
        }
    }
}
