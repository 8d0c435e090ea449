//! One-line-per-series sparkline used when a chart has no room

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::data::home::Series;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Draws each series on its own row as `label bars`, scaled to a shared max
/// so rows stay comparable.
pub struct SeriesStrip<'a> {
    series: &'a [Series],
    colors: &'a [Color],
    label_width: u16,
}

impl<'a> SeriesStrip<'a> {
    pub fn new(series: &'a [Series], colors: &'a [Color]) -> Self {
        let label_width = series
            .iter()
            .map(|s| s.name.chars().count() as u16)
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            series,
            colors,
            label_width,
        }
    }
}

impl Widget for SeriesStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= self.label_width || area.height == 0 {
            return;
        }
        let max = shared_max(self.series);
        let bar_width = (area.width - self.label_width) as usize;

        for (row, series) in self.series.iter().enumerate().take(area.height as usize) {
            let y = area.y + row as u16;
            let color = self
                .colors
                .get(row)
                .copied()
                .unwrap_or(Color::Cyan);
            buf.set_string(area.x, y, series.name, Style::default().fg(Color::DarkGray));
            let bars = bars_text(series.data, max, bar_width);
            buf.set_string(
                area.x + self.label_width,
                y,
                bars,
                Style::default().fg(color),
            );
        }
    }
}

fn shared_max(series: &[Series]) -> u64 {
    series
        .iter()
        .flat_map(|s| s.data.iter().copied())
        .max()
        .unwrap_or(1)
        .max(1)
}

/// Scales the last `width` values of `data` against `max` into bar glyphs.
pub fn bars_text(data: &[u64], max: u64, width: usize) -> String {
    let max = max.max(1);
    let start = data.len().saturating_sub(width);
    data[start..]
        .iter()
        .map(|&value| {
            let level = (value.min(max) * 7 + max / 2) / max;
            BARS[level as usize]
        })
        .collect()
}
