//! Info pane: how bubble sort works, plus counts for the loaded run

use crate::algorithm::RunStats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const ALGORITHM_STEPS: [&str; 5] = [
    "Start with the first element of the array",
    "Compare adjacent elements",
    "Swap if they are in the wrong order",
    "Continue through the array",
    "Repeat until no more swaps are needed",
];

const COMPLEXITY: [(&str, &str); 4] = [
    ("Time", "O(n²) in worst case"),
    ("Space", "O(1), in-place sorting"),
    ("Best case", "O(n) when already sorted"),
    ("Stable", "yes, equal elements keep their order"),
];

pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    stats: RunStats,
    is_focused: bool,
    scroll_offset: &mut u16,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" How Bubble Sort Works ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let heading = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (n, text) in ALGORITHM_STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", n + 1), Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(*text, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }
    lines.push(Line::from(""));
    for (name, text) in COMPLEXITY {
        lines.push(Line::from(vec![
            Span::styled(format!("{name}: "), heading),
            Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "This run: {} comparisons, {} swaps, {} passes",
            stats.comparisons, stats.swaps, stats.passes
        ),
        Style::default().fg(DEFAULT_THEME.secondary),
    )));

    // Keep the last line reachable but never scroll past it
    let max_scroll = (lines.len() as u16).saturating_sub(area.height.saturating_sub(2));
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((*scroll_offset, 0));
    frame.render_widget(paragraph, area);
}
