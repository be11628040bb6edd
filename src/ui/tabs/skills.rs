// Skills tab: per-skill practice cards and the add-skill placeholder

use crate::metrics::format_hours;
use crate::ui::state::AppState;
use crate::ui::widgets::MeterBar;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct SkillsTab;

impl SkillsTab {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Skill cards
                Constraint::Length(6), // Add-skill placeholder
                Constraint::Min(0),
            ])
            .split(area);

        Self::render_skill_cards(frame, rows[0], state);
        Self::render_add_skill(frame, rows[1]);
    }

    fn render_skill_cards(frame: &mut Frame, area: Rect, state: &AppState) {
        let skills = &state.metrics.skills;
        if skills.is_empty() {
            frame.render_widget(
                Paragraph::new("No skills tracked yet")
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }

        let percentage = (100 / skills.len().max(1)) as u16;
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                skills
                    .iter()
                    .map(|_| Constraint::Percentage(percentage))
                    .collect::<Vec<_>>(),
            )
            .split(area);

        for (skill, card_area) in skills.iter().zip(cards.iter()) {
            let block = Block::default()
                .title(Line::from(vec![
                    Span::raw(format!(" {} ", skill.name)),
                    Span::styled(
                        format!("[Level {}] ", skill.level),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White));
            let inner = block.inner(*card_area);
            frame.render_widget(block, *card_area);

            let hours_line = Line::from(vec![
                Span::raw(" This week  "),
                Span::styled(
                    format!(
                        "{} / {}",
                        format_hours(skill.hours_this_week),
                        format_hours(skill.target)
                    ),
                    Style::default().bold(),
                ),
            ]);

            frame.render_widget(
                Paragraph::new(hours_line),
                Rect::new(inner.x, inner.y + 1, inner.width, 1),
            );

            if inner.height > 3 {
                frame.render_widget(
                    MeterBar::new(skill.percent()).color(Color::Green),
                    Rect::new(
                        inner.x + 1,
                        inner.y + 3,
                        inner.width.saturating_sub(2),
                        1,
                    ),
                );
            }
        }
    }

    fn render_add_skill(frame: &mut Frame, area: Rect) {
        // Placeholder panel; the button has no handler
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  Track your learning progress across different skills "),
                Span::raw("and set weekly practice goals."),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("  "),
                Span::styled("[+ Add Skill]", Style::default().fg(Color::Blue).bold()),
            ]),
        ];

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(" Add New Skill ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(panel, area);
    }
}
