//! Keyboard and mouse routing. Screen geometry comes from the same layout
//! functions the renderer uses, so hit testing matches what was drawn.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Focus, InputMode, Page};
use crate::core::Module;
use crate::modules::dropdown::rect_contains;
use crate::modules::header::{self, HeaderTarget, Overlay};
use crate::modules::sidebar::SidebarMode;
use crate::ui::{self, rect_inner};

pub fn handle_key(app: &mut App, key: KeyEvent, size: Rect) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key, size),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent, size: Rect) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        (KeyCode::Char('q'), _) => app.should_quit = true,
        (KeyCode::Char('?'), _) => app.help_open = true,
        (KeyCode::Char(':') | KeyCode::Char('/'), _) => app.enter_command(),
        (KeyCode::Char('b'), _) => {
            app.toggle_sidebar();
            let mode = app.sidebar_mode(size.width);
            app.sidebar.clamp_cursor(mode);
        }
        (KeyCode::Char('1'), _) => app.set_page(Page::Home),
        (KeyCode::Char('2'), _) => app.set_page(Page::ProjectTree),
        (KeyCode::Tab, _) => app.cycle_focus(size.width),
        (KeyCode::Esc, _) => app.close_overlay(),
        _ => match app.focus {
            Focus::Sidebar => handle_sidebar_key(app, key, size),
            Focus::Content | Focus::Command => {
                let action = match app.page {
                    Page::Home => app.home.handle_key(key),
                    Page::ProjectTree => app.tree.handle_key(key),
                };
                app.apply_action(action);
            }
        },
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent, size: Rect) {
    let mode = app.sidebar_mode(size.width);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.sidebar.move_cursor(false, mode),
        KeyCode::Down | KeyCode::Char('j') => app.sidebar.move_cursor(true, mode),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let action = app.sidebar.activate(mode);
            app.apply_action(action);
        }
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    let areas = ui::layout::areas(size, app.sidebar_width(size.width));
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, areas, col, row),
        MouseEventKind::ScrollUp => handle_scroll(app, areas, col, row, true),
        MouseEventKind::ScrollDown => handle_scroll(app, areas, col, row, false),
        _ => {}
    }
}

fn handle_click(app: &mut App, areas: ui::layout::UiAreas, col: u16, row: u16) {
    // header buttons first so clicking the open dropdown's button closes it
    if let Some(target) = header::hit(areas.header, col, row) {
        match target {
            HeaderTarget::MenuToggle => {
                app.overlays.dismiss();
                app.toggle_sidebar();
                let mode = app.sidebar_mode(areas.size.width);
                app.sidebar.clamp_cursor(mode);
            }
            HeaderTarget::Nav(idx) => {
                app.overlays.toggle(Overlay::Nav(idx));
            }
            HeaderTarget::Profile => {
                app.overlays.toggle(Overlay::Profile);
            }
        }
        return;
    }

    if let Some(overlay) = app.overlays.open_key() {
        if app.overlays.contains(col, row) {
            let entry = app
                .overlays
                .bounds()
                .and_then(|bounds| header::overlay_entry_at(bounds, overlay, row));
            if let Some(entry) = entry {
                app.overlays.dismiss();
                app.apply_action(header::choose(overlay, entry));
            }
        } else {
            // a click outside only closes the overlay
            app.overlays.dismiss_outside(col, row);
        }
        return;
    }

    let mode = app.sidebar_mode(areas.size.width);
    if mode != SidebarMode::Hidden && rect_contains(areas.sidebar, col, row) {
        let inner = rect_inner(areas.sidebar);
        if !rect_contains(inner, col, row) {
            return;
        }
        app.sidebar.clamp_cursor(mode);
        let visible = inner.height.max(1) as usize;
        let offset = (app.sidebar.cursor() + 1).saturating_sub(visible);
        let index = offset + (row - inner.y) as usize;
        app.focus = Focus::Sidebar;
        let action = app.sidebar.click(index, mode);
        app.apply_action(action);
        return;
    }

    if rect_contains(areas.content, col, row) {
        app.focus = Focus::Content;
        match app.page {
            Page::Home => {
                let projects = ui::home::areas(areas.content).projects;
                if let Some(index) = ui::home::project_row_at(projects, app.home.selected(), row)
                {
                    app.home.select(index);
                }
            }
            Page::ProjectTree => {
                let (table, _) = ui::tree::areas(areas.content);
                if !rect_contains(table, col, row) {
                    return;
                }
                if let Some(index) = ui::tree::row_at(table, row) {
                    let action = app.tree.click_row(index);
                    app.apply_action(action);
                }
            }
        }
    }
}

fn handle_scroll(app: &mut App, areas: ui::layout::UiAreas, col: u16, row: u16, up: bool) {
    if app.overlays.any_open() {
        return;
    }
    let mode = app.sidebar_mode(areas.size.width);
    if mode != SidebarMode::Hidden && rect_contains(areas.sidebar, col, row) {
        app.focus = Focus::Sidebar;
        app.sidebar.move_cursor(!up, mode);
        return;
    }
    if rect_contains(areas.content, col, row) {
        app.focus = Focus::Content;
        match app.page {
            Page::Home => app.home.move_selection(!up),
            Page::ProjectTree => app.tree.move_selection(!up, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), SCREEN);
    }

    fn click(app: &mut App, column: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(app, mouse, SCREEN);
    }

    #[test]
    fn test_global_keys() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.page, Page::ProjectTree);
        press(&mut app, KeyCode::Char('b'));
        assert!(!app.sidebar.is_open());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.help_open);
        // help swallows other keys
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_content_keys_reach_tree() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.tree.rows().len(), 3);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.tree.rows().len(), 12);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.tree.rows().len(), 3);
    }

    #[test]
    fn test_command_mode_typing() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char(':'));
        for ch in "tree".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.page, Page::ProjectTree);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_sidebar_keyboard_opens_tree() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Sidebar);
        // open Projects, then pick its first item
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.page, Page::ProjectTree);
    }

    #[test]
    fn test_sidebar_cursor_survives_collapse_to_rail() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        for _ in 0..20 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Char('b'));
        let mode = app.sidebar_mode(SCREEN.width);
        assert_eq!(mode, SidebarMode::Rail);
        let rail_entries = app.sidebar.entries(mode).len();
        assert!(app.sidebar.cursor() < rail_entries);

        // Enter on the last rail line widens the sidebar again
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Sidebar);
        press(&mut app, KeyCode::Enter);
        assert!(app.sidebar.is_open());
    }

    #[test]
    fn test_header_dropdown_click_flow() {
        let mut app = App::new(&Config::default());
        let header = ui::layout::areas(SCREEN, 28).header;
        let targets = header::targets(header);
        let (_, nav0) = targets[1];
        let (_, nav1) = targets[2];

        click(&mut app, nav0.x, nav0.y);
        assert_eq!(app.overlays.open_key(), Some(Overlay::Nav(0)));
        click(&mut app, nav1.x, nav1.y);
        assert_eq!(app.overlays.open_key(), Some(Overlay::Nav(1)));
        click(&mut app, nav1.x, nav1.y);
        assert!(!app.overlays.any_open());
    }

    #[test]
    fn test_click_outside_dismisses() {
        let mut app = App::new(&Config::default());
        app.overlays.toggle(Overlay::Profile);
        app.overlays.set_bounds(Rect::new(90, 3, 28, 9));
        click(&mut app, 60, 20);
        assert!(!app.overlays.any_open());
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_click_overlay_entry_navigates() {
        let mut app = App::new(&Config::default());
        let header = ui::layout::areas(SCREEN, 28).header;
        app.overlays.toggle(Overlay::Nav(0));
        let bounds = header::overlay_rect(header, SCREEN, Overlay::Nav(0)).unwrap();
        app.overlays.set_bounds(bounds);
        // second entry is "Project Tree"
        click(&mut app, bounds.x + 2, bounds.y + 2);
        assert_eq!(app.page, Page::ProjectTree);
        assert!(!app.overlays.any_open());
    }

    #[test]
    fn test_click_tree_row_toggles() {
        let mut app = App::new(&Config::default());
        app.set_page(Page::ProjectTree);
        let content = ui::layout::areas(SCREEN, 28).content;
        let (table, _) = ui::tree::areas(content);
        // header at table.y + 1, rows from table.y + 2; third row is the direction
        click(&mut app, table.x + 4, table.y + 4);
        assert_eq!(app.tree.selected(), 2);
        assert_eq!(app.tree.rows().len(), 4);
    }
}
