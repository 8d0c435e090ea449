//! Full-frame renders against ratatui's TestBackend

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use projdash::app::{App, Page};
use projdash::config::Config;
use projdash::modules::header::Overlay;
use projdash::ui;

fn render(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_home_page_renders_cards_and_table() {
    let mut app = App::new(&Config::default());
    let text = screen_text(&render(&mut app, 140, 45));

    assert!(text.contains("Budget Overview"));
    assert!(text.contains("$24,000"));
    assert!(text.contains("Recent Transactions"));
    assert!(text.contains("March 21, 2024"));
    assert!(text.contains("Top Projects"));
    assert!(text.contains("Website Redesign"));
    assert!(text.contains("$125,000"));
    assert!(text.contains("Projects"));
}

#[test]
fn test_tree_page_renders_headers_and_affordances() {
    let mut app = App::new(&Config::default());
    app.set_page(Page::ProjectTree);
    let text = screen_text(&render(&mut app, 140, 40));

    assert!(text.contains("Наименование"));
    assert!(text.contains("Дата окончания"));
    assert!(text.contains("▾ P01. Проект 1"));
    assert!(text.contains("▸ P01.02. Направление 2"));
    assert!(!text.contains("Объект 2"));
    assert!(text.contains("id 0"));
}

#[test]
fn test_compact_layout_hides_sidebar() {
    let mut app = App::new(&Config::default());
    let text = screen_text(&render(&mut app, 80, 40));
    assert!(!text.contains("Menu"));
    assert!(text.contains("Sidebar hidden"));
}

#[test]
fn test_open_overlay_records_bounds() {
    let mut app = App::new(&Config::default());
    app.overlays.toggle(Overlay::Profile);
    let text = screen_text(&render(&mut app, 140, 40));

    assert!(text.contains("alex.morgan@example.com"));
    assert!(text.contains("Sign out"));
    let bounds = app.overlays.bounds().unwrap();
    assert_eq!(bounds.y, 3);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = App::new(&Config::default());
    render(&mut app, 20, 8);
    app.set_page(Page::ProjectTree);
    app.help_open = true;
    render(&mut app, 20, 8);
}
