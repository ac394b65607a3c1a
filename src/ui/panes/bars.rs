//! Array pane: one bar per element, colored by its role in the current step

use crate::algorithm::StepRecord;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Role of a single element in the displayed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Sorted,
    Swapping,
    Comparing,
    Current,
    Idle,
}

impl BarRole {
    pub fn color(self) -> Color {
        match self {
            BarRole::Sorted => DEFAULT_THEME.sorted,
            BarRole::Swapping => DEFAULT_THEME.swapping,
            BarRole::Comparing => DEFAULT_THEME.comparing,
            BarRole::Current => DEFAULT_THEME.current,
            BarRole::Idle => DEFAULT_THEME.bar,
        }
    }
}

fn pair_contains(pair: Option<(usize, usize)>, index: usize) -> bool {
    pair.is_some_and(|(a, b)| a == index || b == index)
}

/// Roles for every element. Sorted wins over the pair highlight, which wins
/// over the active index.
pub fn bar_roles(step: &StepRecord) -> Vec<BarRole> {
    let sorted: FxHashSet<usize> = step.sorted.iter().copied().collect();
    let comparing = step.comparing();
    let swapping = step.swapping();

    (0..step.array.len())
        .map(|index| {
            if sorted.contains(&index) {
                BarRole::Sorted
            } else if pair_contains(swapping, index) {
                BarRole::Swapping
            } else if pair_contains(comparing, index) {
                BarRole::Comparing
            } else if step.current == Some(index) {
                BarRole::Current
            } else {
                BarRole::Idle
            }
        })
        .collect()
}

/// Widest bar (and gap) that fits `count` bars into `width` columns
fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = count as u16;
    let gap = if width >= count.saturating_mul(3) { 1 } else { 0 };
    let bar_width = (width.saturating_sub(gap * count.saturating_sub(1)) / count).max(1);
    (bar_width, gap)
}

fn legend() -> Line<'static> {
    let entry = |role: BarRole, label: &'static str| {
        [
            Span::styled("■ ", Style::default().fg(role.color())),
            Span::styled(label, Style::default().fg(DEFAULT_THEME.comment)),
        ]
    };
    let mut spans = Vec::new();
    for (role, label) in [
        (BarRole::Idle, "unsorted  "),
        (BarRole::Comparing, "comparing  "),
        (BarRole::Swapping, "swapping  "),
        (BarRole::Current, "current  "),
        (BarRole::Sorted, "sorted"),
    ] {
        spans.extend(entry(role, label));
    }
    Line::from(spans)
}

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, step: &StepRecord, finished: bool) {
    let title = if finished {
        " Array  ✓ Sorting Complete! "
    } else {
        " Array "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if finished {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.border_normal
        }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    if step.array.is_empty() {
        let paragraph =
            Paragraph::new("(empty array)").style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, rows[0]);
        return;
    }

    let roles = bar_roles(step);
    let (bar_width, gap) = bar_geometry(rows[0].width, step.array.len());

    let bars: Vec<Bar> = step
        .array
        .iter()
        .zip(&roles)
        .enumerate()
        .map(|(index, (&value, &role))| {
            let style = Style::default().fg(role.color());
            let value_style = if matches!(role, BarRole::Comparing | BarRole::Swapping) {
                Style::default()
                    .fg(Color::Black)
                    .bg(role.color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Black).bg(role.color())
            };
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .label(Line::from(index.to_string()))
                .style(style)
                .value_style(value_style)
        })
        .collect();

    let max = step.array.iter().copied().max().unwrap_or(0).max(1) as u64;
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .max(max);

    frame.render_widget(chart, rows[0]);
    frame.render_widget(Paragraph::new(legend()), rows[1]);
}
