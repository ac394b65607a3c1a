//! Narration pane: headline and prose for the displayed step

use crate::algorithm::StepRecord;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_narration_pane(frame: &mut Frame, area: Rect, step: &StepRecord) {
    let block = Block::default()
        .title(" Current Step ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", step.label),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                step.title.as_str(),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(step.description.as_str()).style(Style::default().fg(DEFAULT_THEME.fg)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
