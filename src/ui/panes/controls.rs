//! Controls pane: playback keys, speed, array size and custom input

use crate::config::speed_label;
use crate::controller::ControlState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Data needed to render the controls pane
pub struct ControlsRenderData<'a> {
    pub controls: ControlState,
    pub speed_ms: u64,
    pub array_size: usize,
    /// Text typed so far while entering a custom array
    pub custom_input: Option<&'a str>,
}

fn key_line(key: &'static str, action: &'static str, enabled: bool) -> Line<'static> {
    let key_style = if enabled {
        Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black)
    } else {
        Style::default().bg(DEFAULT_THEME.disabled).fg(DEFAULT_THEME.comment)
    };
    let action_style = Style::default().fg(if enabled {
        DEFAULT_THEME.fg
    } else {
        DEFAULT_THEME.disabled
    });
    Line::from(vec![
        Span::styled(format!(" {key} "), key_style),
        Span::styled(format!(" {action}"), action_style),
    ])
}

pub fn render_controls_pane(
    frame: &mut Frame,
    area: Rect,
    data: ControlsRenderData,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let controls = data.controls;
    let play_line = if controls.can_pause {
        key_line("⎵", "pause", true)
    } else {
        key_line("⎵", "play", controls.can_play)
    };

    let mut lines = vec![
        key_line("←", "step back", controls.can_step_back),
        key_line("→", "step forward", controls.can_step_forward),
        play_line,
        key_line("r", "reset", true),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                format!("{} ({}ms)", speed_label(data.speed_ms), data.speed_ms),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::styled("  -/+", Style::default().fg(DEFAULT_THEME.comment)),
        ]),
        Line::from(vec![
            Span::styled("Size  ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                format!("{} elements", data.array_size),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::styled("  [/]", Style::default().fg(DEFAULT_THEME.comment)),
        ]),
        key_line("g", "random array", true),
        key_line("c", "custom array", true),
    ];

    if let Some(text) = data.custom_input {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter numbers (comma-separated):",
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.primary)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
