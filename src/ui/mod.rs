use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod home;
pub mod layout;
pub mod tree;
pub mod widgets;

use crate::app::{App, Focus, InputMode, Page, StatusLevel};
use crate::data::menu::{HEADER_NAV, PROFILE, SIDEBAR_MENUS};
use crate::modules::header::{self, HeaderTarget, Overlay, MENU_BUTTON, PROFILE_BUTTON};
use crate::modules::sidebar::{SidebarEntry, SidebarMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();
    let areas = layout::areas(size, app.sidebar_width(size.width));
    let mode = app.sidebar_mode(size.width);
    app.sidebar.clamp_cursor(mode);

    draw_header(f, areas.header, app);
    if mode != SidebarMode::Hidden {
        draw_sidebar(f, areas.sidebar, app, mode);
    }
    match app.page {
        Page::Home => home::draw(f, areas.content, app),
        Page::ProjectTree => tree::draw(f, areas.content, app),
    }
    draw_status_line(f, areas.status_line, app, mode);
    draw_command_line(f, areas.command_line, app);

    if let Some(overlay) = app.overlays.open_key() {
        if let Some(rect) = header::overlay_rect(areas.header, size, overlay) {
            draw_overlay(f, rect, overlay);
            app.overlays.set_bounds(rect);
        }
    }
    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(Line::from(vec![
        Span::styled(
            " projdash ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", app.page.title()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    f.render_widget(block, area);

    let open = app.overlays.open_key();
    for (target, rect) in header::targets(area) {
        let (text, active) = match target {
            HeaderTarget::MenuToggle => (MENU_BUTTON.to_string(), app.sidebar.is_open()),
            HeaderTarget::Nav(idx) => (
                format!(" {} ", HEADER_NAV[idx].label),
                open == Some(Overlay::Nav(idx)),
            ),
            HeaderTarget::Profile => (PROFILE_BUTTON.to_string(), open == Some(Overlay::Profile)),
        };
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightCyan)
        } else {
            Style::default().fg(Color::White)
        };
        f.render_widget(Paragraph::new(Span::styled(text, style)), rect);
    }
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App, mode: SidebarMode) {
    let focused = app.focus == Focus::Sidebar;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let inner_width = rect_inner(area).width as usize;

    let items: Vec<ListItem> = app
        .sidebar
        .entries(mode)
        .into_iter()
        .map(|entry| match entry {
            SidebarEntry::Menu(idx) => {
                let menu = &SIDEBAR_MENUS[idx];
                let open = app.sidebar.active_menu() == Some(idx);
                if mode == SidebarMode::Rail {
                    return ListItem::new(Line::from(format!(" {}", menu.icon)));
                }
                let chevron = if open { "▴" } else { "▾" };
                let label = format!("{} {}", menu.icon, menu.label);
                let pad = inner_width.saturating_sub(label.chars().count() + 2);
                let style = if open {
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(label, style),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(chevron, Style::default().fg(Color::DarkGray)),
                ]))
            }
            SidebarEntry::Item { menu, item } => {
                let label = SIDEBAR_MENUS[menu].items[item];
                ListItem::new(Line::from(vec![
                    Span::styled("   • ", Style::default().fg(Color::DarkGray)),
                    Span::raw(label),
                ]))
            }
        })
        .collect();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if mode == SidebarMode::Full {
        block = block.title("Menu");
    }
    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    let mut state = ListState::default();
    state.select(Some(app.sidebar.cursor()));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_overlay(f: &mut Frame, area: Rect, overlay: Overlay) {
    f.render_widget(Clear, area);

    let inner_width = rect_inner(area).width as usize;
    let mut lines = Vec::new();
    let title = match overlay {
        Overlay::Nav(idx) => HEADER_NAV.get(idx).map(|nav| nav.label).unwrap_or_default(),
        Overlay::Profile => {
            lines.push(Line::from(Span::styled(
                PROFILE.name,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                PROFILE.role,
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                PROFILE.email,
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from("─".repeat(inner_width)));
            "Profile"
        }
    };
    for entry in header::overlay_entries(overlay) {
        let style = if entry == "Sign out" {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(format!(" {entry}"), style)));
    }

    let panel = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::LightCyan)),
    );
    f.render_widget(panel, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App, mode: SidebarMode) {
    let focus = match app.focus {
        Focus::Sidebar => "Sidebar",
        Focus::Content => "Content",
        Focus::Command => "Command",
    };
    let sidebar = match mode {
        SidebarMode::Hidden => "hidden",
        SidebarMode::Rail => "rail",
        SidebarMode::Full => "full",
    };
    let mut spans = vec![
        Span::styled("Page ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.page.title())),
        Span::styled("Focus ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", focus)),
        Span::styled("Sidebar ", Style::default().fg(Color::DarkGray)),
        Span::raw(sidebar),
    ];
    if app.page == Page::ProjectTree {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Expanded ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(app.tree.expanded().len().to_string()));
    }
    if let Some(last) = app.command.last.as_deref() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Last ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!(":{last}")));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("home", "Go to the home page"),
        ("tree", "Go to the project tree"),
        ("sidebar", "Toggle the sidebar"),
        ("expand-all", "Expand every tree row"),
        ("collapse-all", "Collapse the tree to its default"),
        ("toggle", "Toggle a node by id, e.g. toggle 0-1"),
        ("export", "Export: csv | json | projects"),
        ("help", "Show key bindings"),
        ("quit", "Quit"),
    ];

    commands
        .iter()
        .find(|(cmd, _)| cmd.starts_with(&input))
        .map(|(_, desc)| *desc)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input).unwrap_or("home | tree | toggle <id> | export");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(format!("  {}", hint), Style::default().fg(Color::DarkGray)),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match (app.focus, app.page) {
        (Focus::Sidebar, _) => &[("j/k", "move"), ("Enter", "open"), ("Tab", "content")],
        (_, Page::Home) => &[("j/k", "select"), ("y", "copy"), ("e", "export")],
        (_, Page::ProjectTree) => &[
            ("Enter", "toggle"),
            ("h/l", "fold"),
            ("a/c", "all/reset"),
            ("e/E", "csv/json"),
        ],
    };
    let mut spans = Vec::new();
    for (key, label) in hints
        .iter()
        .chain([("b", "sidebar"), (":", "cmd"), ("?", "help"), ("q", "quit")].iter())
    {
        spans.push(Span::styled(
            format!("{key} "),
            Style::default().fg(Color::LightCyan),
        ));
        spans.push(Span::styled(
            format!("{label}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Global"),
        Line::from("  1 / 2      Home / Project tree"),
        Line::from("  Tab        Sidebar <-> content"),
        Line::from("  b          Toggle sidebar"),
        Line::from("  :          Command bar"),
        Line::from("  Esc        Close popup / dropdown"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from("  Mouse      Click menus, rows, dropdowns"),
        Line::from(""),
        Line::from("Project tree"),
        Line::from("  j / k      Move selection"),
        Line::from("  Enter      Expand / collapse"),
        Line::from("  l / h      Expand / collapse or parent"),
        Line::from("  a / c      Expand all / reset"),
        Line::from("  y          Copy name"),
        Line::from("  e / E      Export rows CSV / tree JSON"),
        Line::from(""),
        Line::from("Home"),
        Line::from("  j / k      Select project"),
        Line::from("  y / e      Copy name / export CSV"),
        Line::from(""),
        Line::from("Commands: home tree sidebar expand-all collapse-all"),
        Line::from("          toggle <id> export [csv|json|projects] quit"),
        Line::from(""),
        Line::from(format!("Current page: {}", app.page.title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

fn focus_border(app: &App) -> Style {
    if app.focus == Focus::Content {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_hint() {
        assert_eq!(command_hint("tr"), Some("Go to the project tree"));
        assert_eq!(command_hint("exp"), Some("Expand every tree row"));
        assert_eq!(command_hint(""), None);
        assert_eq!(command_hint("zzz"), None);
    }

    #[test]
    fn test_rect_inner() {
        let inner = rect_inner(Rect::new(2, 3, 10, 5));
        assert_eq!(inner, Rect::new(3, 4, 8, 3));
        assert_eq!(rect_inner(Rect::new(0, 0, 1, 1)).width, 0);
    }
}
