// Reusable UI components

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    pub fn dashboard() -> Self {
        let controls = [
            ("[Tab]", " Next"),
            ("[1-5]", " Jump"),
            ("[←/→]", " Switch"),
            ("[Q]", "uit"),
        ];

        let mut spans = vec![Span::raw("  ")];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

/// A bordered card with a title, a large value line, and a subtitle.
/// The tabs use these for single-number stats like "Focus Time / 4.2h".
pub fn stat_card(title: &str, value: &str, subtitle: &str, value_color: Color) -> Paragraph<'static> {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(value_color).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    )
}

/// One row of the data-sources panel: status dot, provider name, and the
/// connect label. The button is display-only; nothing handles a press.
pub fn connect_row(source: &str, connected: bool) -> Line<'static> {
    let (dot_color, action) = if connected {
        (Color::Green, "Connected")
    } else {
        (Color::DarkGray, "Connect")
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled("●", Style::default().fg(dot_color)),
        Span::raw(" "),
        Span::styled(source.to_string(), Style::default().bold()),
        Span::raw("  —  "),
        Span::styled(
            format!("[ {} ]", action),
            Style::default().fg(Color::Blue),
        ),
    ])
}

/// A placeholder connect panel with a provider name, a description, and
/// an inert button line.
pub fn connect_panel(title: &str, description: &str) -> Paragraph<'static> {
    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(format!("  {}", description))),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("[ Connect ]", Style::default().fg(Color::Blue).bold()),
        ]),
    ];

    Paragraph::new(lines)
        .wrap(ratatui::widgets::Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
}
