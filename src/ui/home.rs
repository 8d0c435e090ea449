use chrono::NaiveDate;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Dataset, Gauge, GraphType,
    Paragraph, Row, Table, TableState,
};
use ratatui::Frame;

use super::widgets::SeriesStrip;
use super::{focus_border, rect_inner};
use crate::app::App;
use crate::data::home::{
    format_cents, format_dollars, ProjectStatus, Series, BUDGET, EXPENSE_DISTRIBUTION,
    FINANCIAL_PERFORMANCE, MONTHS, PROJECTS, RECENT_TRANSACTIONS, WEEKLY, WEEK_DAYS,
};

const SERIES_COLORS: [Color; 3] = [Color::LightBlue, Color::LightGreen, Color::LightYellow];
const SHARE_COLORS: [Color; 4] = [Color::Blue, Color::Green, Color::Yellow, Color::Magenta];
const PROGRESS_CELLS: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct HomeAreas {
    pub budget: Rect,
    pub transactions: Rect,
    pub expenses: Rect,
    pub financial: Rect,
    pub weekly: Rect,
    pub projects: Rect,
}

pub fn areas(content: Rect) -> HomeAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(PROJECTS.len() as u16 + 3),
        ])
        .split(content);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(rows[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    HomeAreas {
        budget: cards[0],
        transactions: cards[1],
        expenses: cards[2],
        financial: charts[0],
        weekly: charts[1],
        projects: rows[2],
    }
}

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let areas = areas(area);
    draw_budget(f, areas.budget);
    draw_transactions(f, areas.transactions);
    draw_expenses(f, areas.expenses);
    draw_financial(f, areas.financial);
    draw_weekly(f, areas.weekly);
    draw_projects(f, areas.projects, app);
}

fn draw_budget(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Total    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_dollars(BUDGET.total),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Income   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_dollars(BUDGET.income),
                Style::default().fg(Color::LightGreen),
            ),
        ]),
        Line::from(vec![
            Span::styled("Expenses ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_dollars(BUDGET.expenses),
                Style::default().fg(Color::LightRed),
            ),
        ]),
    ];
    let card = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Budget Overview"),
    );
    f.render_widget(card, area);
}

fn draw_transactions(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = RECENT_TRANSACTIONS
        .iter()
        .map(|tx| {
            let date = NaiveDate::from_ymd_opt(2024, 3, tx.day)
                .map(|d| d.format("%B %-d, %Y").to_string())
                .unwrap_or_default();
            Line::from(vec![
                Span::raw(format!("Transaction #{} ", tx.number)),
                Span::styled(format!("{date} "), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format_cents(tx.amount_cents),
                    Style::default().fg(Color::LightGreen),
                ),
            ])
        })
        .collect();
    let card = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent Transactions"),
    );
    f.render_widget(card, area);
}

fn draw_expenses(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Expense Distribution");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); EXPENSE_DISTRIBUTION.len()])
        .split(inner);
    for ((share, color), row) in EXPENSE_DISTRIBUTION
        .iter()
        .zip(SHARE_COLORS)
        .zip(rows.iter())
    {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .percent(share.percent.min(100))
            .label(format!("{} {}%", share.label, share.percent));
        f.render_widget(gauge, *row);
    }
}

fn draw_financial(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(financial_title());

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(2)
        .bar_gap(0)
        .group_gap(2)
        .value_style(Style::default().fg(Color::Black));
    for (month_idx, month) in MONTHS.iter().enumerate() {
        let bars: Vec<Bar> = FINANCIAL_PERFORMANCE
            .iter()
            .zip(SERIES_COLORS)
            .filter_map(|(series, color)| {
                series.data.get(month_idx).map(|value| {
                    Bar::default()
                        .value(*value)
                        .style(Style::default().fg(color))
                        .text_value(String::new())
                })
            })
            .collect();
        chart = chart.data(BarGroup::default().label((*month).into()).bars(&bars));
    }
    f.render_widget(chart, area);
}

fn financial_title() -> Line<'static> {
    let mut spans = vec![Span::raw("Financial Performance ($k) ")];
    for (series, color) in FINANCIAL_PERFORMANCE.iter().zip(SERIES_COLORS) {
        spans.push(Span::styled("■ ", Style::default().fg(color)));
        spans.push(Span::styled(
            format!("{} ", series.name),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_weekly(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Weekly Revenue & Expenses");
    let inner = rect_inner(area);

    // axes and legend need roughly this much room
    if inner.height < 6 || inner.width < 24 {
        f.render_widget(block, area);
        f.render_widget(SeriesStrip::new(&WEEKLY, &SERIES_COLORS), inner);
        return;
    }

    let points: Vec<Vec<(f64, f64)>> = WEEKLY.iter().map(series_points).collect();
    let datasets: Vec<Dataset> = WEEKLY
        .iter()
        .zip(points.iter())
        .zip(SERIES_COLORS)
        .map(|((series, data), color)| {
            Dataset::default()
                .name(series.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(data)
        })
        .collect();

    let max = WEEKLY
        .iter()
        .flat_map(|s| s.data.iter().copied())
        .max()
        .unwrap_or(1);
    let y_top = (max.div_ceil(20) * 20) as f64;
    let last = WEEK_DAYS.len().saturating_sub(1);
    let x_labels: Vec<Span> = [0, last / 2, last]
        .iter()
        .filter_map(|idx| WEEK_DAYS.get(*idx))
        .map(|day| Span::styled(day_label(day), Style::default().fg(Color::DarkGray)))
        .collect();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{}", y_top as u64 / 2)),
        Span::raw(format!("{}", y_top as u64)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, last as f64])
                .labels(x_labels),
        )
        .y_axis(Axis::default().bounds([0.0, y_top]).labels(y_labels));
    f.render_widget(chart, area);
}

fn series_points(series: &Series) -> Vec<(f64, f64)> {
    series
        .data
        .iter()
        .enumerate()
        .map(|(idx, value)| (idx as f64, *value as f64))
        .collect()
}

/// `2024-03-01` -> `1 Mar`. Unparseable input is shown as is.
pub fn day_label(day: &str) -> String {
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|date| date.format("%-d %b").to_string())
        .unwrap_or_else(|_| day.to_string())
}

fn draw_projects(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["#", "Project", "Budget", "Spent", "Status", "Progress"])
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let rows: Vec<Row> = app
        .home
        .projects()
        .iter()
        .map(|project| {
            Row::new(vec![
                Cell::from(project.id.to_string()),
                Cell::from(project.name),
                Cell::from(format_dollars(project.budget)),
                Cell::from(format_dollars(project.spent)),
                Cell::from(Span::styled(
                    project.status.title(),
                    Style::default().fg(status_color(project.status)),
                )),
                Cell::from(progress_line(project.progress)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(13),
        Constraint::Length(PROGRESS_CELLS as u16 + 5),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Top Projects")
                .border_style(focus_border(app)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(app.home.selected()));
    f.render_stateful_widget(table, area, &mut state);
}

/// Maps a click inside the projects table to a project index.
pub fn project_row_at(area: Rect, selected: usize, row: u16) -> Option<usize> {
    let inner = rect_inner(area);
    // first inner line is the header
    let first = inner.y.saturating_add(1);
    if row < first || row >= inner.y.saturating_add(inner.height) {
        return None;
    }
    let visible = inner.height.saturating_sub(1).max(1) as usize;
    let offset = (selected + 1).saturating_sub(visible);
    let index = offset + (row - first) as usize;
    (index < PROJECTS.len()).then_some(index)
}

fn status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Completed => Color::LightGreen,
        ProjectStatus::InProgress => Color::LightBlue,
        ProjectStatus::EarlyStages => Color::LightYellow,
        ProjectStatus::FinalReview => Color::LightMagenta,
    }
}

pub fn progress_color(progress: u16) -> Color {
    if progress >= 90 {
        Color::Green
    } else if progress >= 50 {
        Color::Blue
    } else {
        Color::Yellow
    }
}

fn progress_line(progress: u16) -> Line<'static> {
    let progress = progress.min(100);
    let filled = (progress as usize * PROGRESS_CELLS + 50) / 100;
    Line::from(vec![
        Span::styled(
            "█".repeat(filled),
            Style::default().fg(progress_color(progress)),
        ),
        Span::styled(
            "░".repeat(PROGRESS_CELLS - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(" {progress:>3}%")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_label() {
        assert_eq!(day_label("2024-03-01"), "1 Mar");
        assert_eq!(day_label("2024-03-07"), "7 Mar");
        assert_eq!(day_label("soon"), "soon");
    }

    #[test]
    fn test_progress_color_thresholds() {
        assert_eq!(progress_color(100), Color::Green);
        assert_eq!(progress_color(90), Color::Green);
        assert_eq!(progress_color(89), Color::Blue);
        assert_eq!(progress_color(50), Color::Blue);
        assert_eq!(progress_color(49), Color::Yellow);
    }

    #[test]
    fn test_project_row_at() {
        // 10 visible rows: header at y=1, rows at y=2..
        let area = Rect::new(0, 0, 80, 13);
        assert_eq!(project_row_at(area, 0, 1), None);
        assert_eq!(project_row_at(area, 0, 2), Some(0));
        assert_eq!(project_row_at(area, 0, 11), Some(9));
        assert_eq!(project_row_at(area, 0, 12), None);
    }

    #[test]
    fn test_project_row_at_scrolled() {
        // three visible rows, selection on the last project
        let area = Rect::new(0, 0, 80, 6);
        assert_eq!(project_row_at(area, 9, 2), Some(7));
        assert_eq!(project_row_at(area, 9, 4), Some(9));
    }
}
