//! App data flow without a terminal: keys, clicks, commands and actions

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use projdash::app::{App, Focus, InputMode, Page, StatusLevel};
use projdash::config::{self, Config};
use projdash::input::{handle_key, handle_mouse};
use projdash::modules::header::{self, Overlay};
use projdash::modules::sidebar::{SidebarMode, FULL_WIDTH, RAIL_WIDTH};
use projdash::ui;

const WIDE: Rect = Rect {
    x: 0,
    y: 0,
    width: 140,
    height: 40,
};

const NARROW: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 30,
};

fn app() -> App {
    App::new(&Config::default())
}

fn key(app: &mut App, code: KeyCode, size: Rect) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), size);
}

fn click(app: &mut App, column: u16, row: u16, size: Rect) {
    handle_mouse(
        app,
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
        size,
    );
}

fn command(app: &mut App, text: &str) {
    key(app, KeyCode::Char(':'), WIDE);
    for ch in text.chars() {
        key(app, KeyCode::Char(ch), WIDE);
    }
    key(app, KeyCode::Enter, WIDE);
}

#[test]
fn test_sidebar_width_follows_breakpoint() {
    let mut app = app();
    assert_eq!(app.sidebar_width(WIDE.width), FULL_WIDTH);
    assert_eq!(app.sidebar_width(NARROW.width), 0);

    key(&mut app, KeyCode::Char('b'), WIDE);
    assert_eq!(app.sidebar_width(WIDE.width), RAIL_WIDTH);
    assert_eq!(app.sidebar_mode(NARROW.width), SidebarMode::Full);
}

#[test]
fn test_compact_width_from_config() {
    let config = config::parse("compact_width = 60").unwrap();
    let app = App::new(&config);
    assert_eq!(app.sidebar_mode(NARROW.width), SidebarMode::Full);
}

#[test]
fn test_header_menu_button_toggles_sidebar() {
    let mut app = app();
    let header = ui::layout::areas(WIDE, app.sidebar_width(WIDE.width)).header;
    let (_, button) = header::targets(header)[0];
    click(&mut app, button.x, button.y, WIDE);
    assert!(!app.sidebar.is_open());
    click(&mut app, button.x, button.y, WIDE);
    assert!(app.sidebar.is_open());
}

#[test]
fn test_single_dropdown_open_at_a_time() {
    let mut app = app();
    let header = ui::layout::areas(WIDE, FULL_WIDTH).header;
    let targets = header::targets(header);
    let (_, overview) = targets[1];
    let (_, profile) = *targets.last().unwrap();

    click(&mut app, overview.x, overview.y, WIDE);
    assert_eq!(app.overlays.open_key(), Some(Overlay::Nav(0)));
    click(&mut app, profile.x + 1, profile.y, WIDE);
    assert_eq!(app.overlays.open_key(), Some(Overlay::Profile));

    key(&mut app, KeyCode::Esc, WIDE);
    assert!(!app.overlays.any_open());
}

#[test]
fn test_sidebar_click_rail_expands_then_opens_tree() {
    let mut app = app();
    key(&mut app, KeyCode::Char('b'), WIDE);
    assert_eq!(app.sidebar_mode(WIDE.width), SidebarMode::Rail);

    // first menu line sits just inside the sidebar border
    let sidebar = ui::layout::areas(WIDE, RAIL_WIDTH).sidebar;
    click(&mut app, sidebar.x + 2, sidebar.y + 1, WIDE);
    assert!(app.sidebar.is_open());
    assert_eq!(app.sidebar.active_menu(), Some(0));

    // sidebar is full now; first Projects item is on the next line
    let sidebar = ui::layout::areas(WIDE, FULL_WIDTH).sidebar;
    click(&mut app, sidebar.x + 4, sidebar.y + 2, WIDE);
    assert_eq!(app.page, Page::ProjectTree);
}

#[test]
fn test_other_sidebar_items_only_notify() {
    let mut app = app();
    app.sidebar.toggle_menu(1);
    let sidebar = ui::layout::areas(WIDE, FULL_WIDTH).sidebar;
    // Budget header is line 2, its first item line 3
    click(&mut app, sidebar.x + 4, sidebar.y + 3, WIDE);
    assert_eq!(app.page, Page::Home);
    let (text, level) = app.status_text().unwrap();
    assert!(text.contains("has no page yet"));
    assert_eq!(level, StatusLevel::Info);
}

#[test]
fn test_tree_keyboard_session() {
    let mut app = app();
    key(&mut app, KeyCode::Char('2'), WIDE);
    assert_eq!(app.focus, Focus::Content);

    // root, Шахта 1, Направление 2
    key(&mut app, KeyCode::Down, WIDE);
    key(&mut app, KeyCode::Down, WIDE);
    key(&mut app, KeyCode::Enter, WIDE);
    assert_eq!(app.tree.rows().len(), 4);

    key(&mut app, KeyCode::Right, WIDE);
    assert_eq!(app.tree.selected(), 3);
    key(&mut app, KeyCode::Right, WIDE);
    assert_eq!(app.tree.rows().len(), 5);

    key(&mut app, KeyCode::Left, WIDE);
    assert_eq!(app.tree.rows().len(), 4);
    key(&mut app, KeyCode::Left, WIDE);
    assert_eq!(app.tree.selected(), 2);
}

#[test]
fn test_collapsing_ancestor_moves_selection_up() {
    let mut app = app();
    app.set_page(Page::ProjectTree);
    key(&mut app, KeyCode::Char('a'), WIDE);
    key(&mut app, KeyCode::End, WIDE);
    assert_eq!(app.tree.selected(), 11);

    command(&mut app, "toggle 0-1");
    // the selected package is hidden; its nearest visible ancestor is 0-1
    let selected = app.tree.selected_row().map(|row| row.id.to_string());
    assert_eq!(selected.as_deref(), Some("0-1"));
}

#[test]
fn test_commands_drive_tree() {
    let mut app = app();
    command(&mut app, "expand-all");
    assert_eq!(app.page, Page::ProjectTree);
    assert_eq!(app.tree.rows().len(), 12);
    command(&mut app, "collapse-all");
    assert_eq!(app.tree.rows().len(), 3);
    assert_eq!(app.command.last.as_deref(), Some("collapse-all"));
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_command_escape_discards_input() {
    let mut app = app();
    key(&mut app, KeyCode::Char(':'), WIDE);
    key(&mut app, KeyCode::Char('t'), WIDE);
    key(&mut app, KeyCode::Esc, WIDE);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.page, Page::Home);
    assert!(app.command.input.is_empty());
}

#[test]
fn test_home_table_click_selects_project() {
    let mut app = app();
    let content = ui::layout::areas(WIDE, FULL_WIDTH).content;
    let projects = ui::home::areas(content).projects;
    // border, header, then rows
    click(&mut app, projects.x + 5, projects.y + 4, WIDE);
    assert_eq!(app.home.selected(), 2);
    assert_eq!(app.focus, Focus::Content);
}

#[test]
fn test_status_expires_on_tick() {
    let mut app = app();
    app.set_status("hello", StatusLevel::Info);
    app.on_tick();
    assert!(app.status_text().is_some());
    if let Some(status) = app.status.as_mut() {
        status.since -= std::time::Duration::from_secs(5);
    }
    app.on_tick();
    assert!(app.status_text().is_none());
}
