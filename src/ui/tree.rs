use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::{focus_border, rect_inner};
use crate::app::App;
use crate::domain::tree::FlattenedRow;

pub const COLUMN_TITLES: [&str; 4] = ["Наименование", "Уровень", "Дата начала", "Дата окончания"];

const EXPANDED: &str = "▾ ";
const COLLAPSED: &str = "▸ ";
const LEAF: &str = "  ";

/// Table on top, one detail line below.
pub fn areas(content: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(content);
    (chunks[0], chunks[1])
}

/// Rows the table can show below its header.
pub fn visible_rows(table: Rect) -> usize {
    rect_inner(table).height.saturating_sub(1) as usize
}

/// Maps a click inside the table to an on-screen row index.
pub fn row_at(table: Rect, row: u16) -> Option<usize> {
    let inner = rect_inner(table);
    let first = inner.y.saturating_add(1);
    if row < first || row >= inner.y.saturating_add(inner.height) {
        return None;
    }
    Some((row - first) as usize)
}

pub fn draw(f: &mut Frame, area: Rect, app: &mut App) {
    let (table_area, detail_area) = areas(area);
    let offset = app.tree.ensure_visible(visible_rows(table_area));

    let page = &app.tree;
    let unit = page.indent_unit();
    let flattened = page.rows();
    let rows: Vec<Row> = flattened
        .iter()
        .map(|row| {
            let indent = page.indent_table().cells_for(row, unit) as usize;
            let name = Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(
                    affordance(row, page.is_expanded(&row.id)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(row.node.name.clone()),
            ]);
            Row::new(vec![
                Cell::from(name),
                Cell::from(row.node.level.clone()),
                Cell::from(row.node.start_date.clone()),
                Cell::from(row.node.end_date.clone()),
            ])
        })
        .collect();

    let header = Row::new(COLUMN_TITLES.to_vec()).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let widths = [
        Constraint::Min(30),
        Constraint::Length(13),
        Constraint::Length(12),
        Constraint::Length(15),
    ];
    let title = format!(
        "Project Tree ({} of {} rows)",
        flattened.len(),
        page.tree().size()
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(focus_border(app)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    *state.offset_mut() = offset;
    state.select(Some(page.selected()));
    f.render_stateful_widget(table, table_area, &mut state);

    let detail = Paragraph::new(detail_line(page.selected_row().as_ref()))
        .block(Block::default().borders(Borders::ALL).title("Selected"));
    f.render_widget(detail, detail_area);
}

fn affordance(row: &FlattenedRow<'_>, expanded: bool) -> &'static str {
    match (row.has_children, expanded) {
        (false, _) => LEAF,
        (true, true) => EXPANDED,
        (true, false) => COLLAPSED,
    }
}

fn detail_line(row: Option<&FlattenedRow<'_>>) -> Line<'static> {
    let Some(row) = row else {
        return Line::from(Span::styled("Nothing selected", Style::default().fg(Color::DarkGray)));
    };
    Line::from(vec![
        Span::styled("id ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", row.id)),
        Span::styled("depth ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", row.depth)),
        Span::styled("children ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", row.node.children.len())),
        Span::styled("level ", Style::default().fg(Color::DarkGray)),
        Span::raw(row.node.level.clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tree::{NodeId, TreeNode};

    #[test]
    fn test_row_at_skips_header() {
        let table = Rect::new(0, 3, 60, 10);
        assert_eq!(row_at(table, 3), None);
        assert_eq!(row_at(table, 4), None);
        assert_eq!(row_at(table, 5), Some(0));
        assert_eq!(row_at(table, 11), Some(6));
        assert_eq!(row_at(table, 12), None);
        assert_eq!(visible_rows(table), 7);
    }

    #[test]
    fn test_affordance() {
        let parent = TreeNode::new("p", "Объект", "", "")
            .with_children(vec![TreeNode::new("c", "Система", "", "")]);
        let row = FlattenedRow {
            node: &parent,
            id: NodeId::root(),
            depth: 0,
            has_children: true,
        };
        assert_eq!(affordance(&row, true), EXPANDED);
        assert_eq!(affordance(&row, false), COLLAPSED);
        let leaf = FlattenedRow {
            node: &parent.children[0],
            id: NodeId::root().child(0),
            depth: 1,
            has_children: false,
        };
        assert_eq!(affordance(&leaf, true), LEAF);
    }
}
