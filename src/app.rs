use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::{Action, Command, ExportTarget, NotifyLevel};
use crate::data::project_tree;
use crate::domain::tree::{find, IndentTable, NodeId};
use crate::modules::dropdown::DropdownLayer;
use crate::modules::header::Overlay;
use crate::modules::home::HomePage;
use crate::modules::project_tree::ProjectTreePage;
use crate::modules::sidebar::{Sidebar, SidebarMode};
use crate::ui::layout::Breakpoint;

/// Pages reachable from the sidebar and the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    ProjectTree,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::ProjectTree];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::ProjectTree => "Project Tree",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Page::Home => '1',
            Page::ProjectTree => '2',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

const STATUS_TTL: Duration = Duration::from_secs(3);

pub struct App {
    pub page: Page,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub sidebar: Sidebar,
    /// Header dropdowns and the profile panel share one single-open layer.
    pub overlays: DropdownLayer<Overlay>,
    pub home: HomePage,
    pub tree: ProjectTreePage,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub export_dir: Option<PathBuf>,
    pub compact_width: u16,
    pub help_open: bool,
    pub should_quit: bool,
    /// Last text handed to the clipboard
    pub clipboard: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let indent = IndentTable::with_overrides(&config.indent_levels);
        Self {
            page: config.start_page.into(),
            focus: Focus::Content,
            input_mode: InputMode::Normal,
            sidebar: Sidebar::new(config.sidebar_open),
            overlays: DropdownLayer::new(),
            home: HomePage::new(),
            tree: ProjectTreePage::new(project_tree(), indent, config.indent_unit.max(1)),
            command: CommandBar::default(),
            status: None,
            export_dir: config.export_dir_path(),
            compact_width: config.compact_width,
            help_open: false,
            should_quit: false,
            clipboard: None,
        }
    }

    pub fn breakpoint(&self, width: u16) -> Breakpoint {
        Breakpoint::of(width, self.compact_width)
    }

    pub fn sidebar_mode(&self, width: u16) -> SidebarMode {
        self.sidebar.mode(self.breakpoint(width))
    }

    pub fn sidebar_width(&self, width: u16) -> u16 {
        self.sidebar.width(self.breakpoint(width))
    }

    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            log::info!("page {} -> {}", self.page.title(), page.title());
        }
        self.page = page;
        self.focus = Focus::Content;
        self.overlays.dismiss();
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
        if self.focus == Focus::Sidebar {
            self.focus = Focus::Content;
        }
    }

    /// Tab order: sidebar, then page content. A hidden sidebar is skipped.
    pub fn cycle_focus(&mut self, width: u16) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Content,
            Focus::Content if self.sidebar_mode(width) != SidebarMode::Hidden => Focus::Sidebar,
            Focus::Content | Focus::Command => Focus::Content,
        };
    }

    /// Esc: help first, then overlays, then sidebar focus.
    pub fn close_overlay(&mut self) {
        if self.help_open {
            self.help_open = false;
        } else if self.overlays.dismiss().is_none() && self.focus == Focus::Sidebar {
            self.focus = Focus::Content;
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.focus = Focus::Command;
        self.command.input.clear();
        self.overlays.dismiss();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.focus = Focus::Content;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = crate::core::parse_command(&input);
        log::debug!("command {input:?} -> {cmd:?}");
        self.exit_command();
        let action = self.execute_command(&cmd);
        self.apply_action(action);
        self.command.last = Some(input);
    }

    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Home => Action::Navigate(Page::Home),
            Command::Tree => Action::Navigate(Page::ProjectTree),
            Command::Sidebar => Action::ToggleSidebar,
            Command::Help => {
                self.help_open = true;
                Action::None
            }
            Command::Quit => Action::Quit,

            Command::ExpandAll => {
                self.set_page(Page::ProjectTree);
                self.tree.expand_all();
                Action::Notify("Expanded all rows".to_string(), NotifyLevel::Info)
            }
            Command::CollapseAll => {
                self.set_page(Page::ProjectTree);
                self.tree.reset();
                Action::Notify("Collapsed to default".to_string(), NotifyLevel::Info)
            }
            Command::Toggle(raw) => self.toggle_by_id(raw),

            Command::Export(arg) => match export_target(self.page, arg.as_deref()) {
                Some(target) => Action::Export(target),
                None => Action::Notify(
                    format!(
                        "Unknown export format: {}",
                        arg.as_deref().unwrap_or_default()
                    ),
                    NotifyLevel::Warn,
                ),
            },

            Command::Unknown(s) => {
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    fn toggle_by_id(&mut self, raw: &str) -> Action {
        let Some(id) = NodeId::parse(raw) else {
            return Action::Notify(format!("Not a node id: {raw}"), NotifyLevel::Warn);
        };
        match find(self.tree.tree(), &id) {
            None => Action::Notify(format!("No node {id}"), NotifyLevel::Warn),
            Some(node) if !node.has_children() => {
                Action::Notify(format!("{} has no children", node.name), NotifyLevel::Warn)
            }
            Some(_) => {
                self.set_page(Page::ProjectTree);
                let expanded = self.tree.toggle(&id);
                Action::Notify(
                    format!(
                        "{} {id}",
                        if expanded { "Expanded" } else { "Collapsed" }
                    ),
                    NotifyLevel::Info,
                )
            }
        }
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(page) => self.set_page(page),
            Action::Copy(text) => self.copy_to_clipboard(text),
            Action::Export(target) => {
                let outcome = crate::modules::export::export_target(self, target);
                self.apply_action(outcome);
            }
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::ToggleSidebar => self.toggle_sidebar(),
            Action::CloseOverlay => self.close_overlay(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn copy_to_clipboard(&mut self, text: String) {
        use arboard::Clipboard;

        let result = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone()));
        match result {
            Ok(()) => {
                let shown: String = text.chars().take(24).collect();
                let ellipsis = if text.chars().count() > 24 { "..." } else { "" };
                self.set_status(format!("Copied: {shown}{ellipsis}"), StatusLevel::Info);
                self.clipboard = Some(text);
            }
            Err(err) => {
                log::warn!("clipboard unavailable: {err}");
                self.set_status("Clipboard not available", StatusLevel::Error);
            }
        }
    }
}

/// Resolves `:export [format]` against the current page.
fn export_target(page: Page, arg: Option<&str>) -> Option<ExportTarget> {
    match (page, arg) {
        (Page::Home, None) => Some(ExportTarget::Projects),
        (Page::ProjectTree, None) => Some(ExportTarget::TreeRows),
        (_, Some("projects")) => Some(ExportTarget::Projects),
        (_, Some("csv" | "rows")) => Some(ExportTarget::TreeRows),
        (_, Some("json" | "tree")) => Some(ExportTarget::TreeJson),
        _ => None,
    }
}
