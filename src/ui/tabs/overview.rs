// Overview tab: domain cards, weekly gauges, data sources, 4-week chart

use crate::metrics::{display_percent, format_hours, percent_of_target};
use crate::ui::chart;
use crate::ui::components::{connect_row, stat_card};
use crate::ui::constants::{HABIT_CONSISTENCY_PERCENT, KEY_INSIGHTS};
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

// Weekly targets the overview gauges measure against. These are goals,
// not tracked state, so they live here rather than in the store.
const WEEKLY_PRODUCTIVE_TARGET: f64 = 40.0;

pub struct OverviewTab;

impl OverviewTab {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // Domain summary cards
                Constraint::Length(8),  // Weekly progress + data sources
                Constraint::Min(8),     // 4-week chart
                Constraint::Length(6),  // Key insights
            ])
            .split(area);

        Self::render_domain_cards(frame, rows[0], state);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        Self::render_weekly_progress(frame, middle[0], state);
        Self::render_data_sources(frame, middle[1], state);

        frame.render_widget(
            chart::weekly_bar_chart(&state.metrics.progress_over_time, "Progress Over 4 Weeks"),
            rows[2],
        );

        if state.show_insights {
            Self::render_insights(frame, rows[3]);
        }
    }

    fn render_domain_cards(frame: &mut Frame, area: Rect, state: &AppState) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let m = &state.metrics;

        let streak = m.best_habit_streak().map(|h| h.streak).unwrap_or(0);
        let active_streaks = m.habits.iter().filter(|h| h.streak > 0).count();

        frame.render_widget(
            stat_card(
                "Time Management",
                &format_hours(m.time_management.focus_time),
                "Focus time today",
                Color::Blue,
            ),
            cards[0],
        );
        frame.render_widget(
            stat_card(
                "Skills Development",
                &format!("{} days", streak),
                "Learning streak",
                Color::Green,
            ),
            cards[1],
        );
        frame.render_widget(
            stat_card(
                "Habits & Goals",
                &format!("{}/{}", active_streaks, m.habits.len()),
                "Active streaks",
                Color::Magenta,
            ),
            cards[2],
        );
        frame.render_widget(
            stat_card(
                "Digital Wellbeing",
                &format_hours(m.digital_wellbeing.screen_time),
                "Screen time today",
                Color::Yellow,
            ),
            cards[3],
        );
    }

    fn render_weekly_progress(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .title(" Weekly Progress ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let m = &state.metrics;
        let productive = m.time_management.productive_hours;
        let practiced = m.skill_hours_this_week();
        let practice_target = m.skill_target_total();

        let gauges = [
            (
                format!(
                    "Productive Hours  {} / {}",
                    format_hours(productive),
                    format_hours(WEEKLY_PRODUCTIVE_TARGET)
                ),
                display_percent(percent_of_target(productive, WEEKLY_PRODUCTIVE_TARGET)),
                Color::Blue,
            ),
            (
                format!(
                    "Skills Practice   {} / {}",
                    format_hours(practiced),
                    format_hours(practice_target)
                ),
                display_percent(percent_of_target(practiced, practice_target)),
                Color::Green,
            ),
            (
                "Habit Consistency".to_string(),
                HABIT_CONSISTENCY_PERCENT,
                Color::Magenta,
            ),
        ];

        for (i, (label, percent, color)) in gauges.iter().enumerate() {
            let y = inner.y + (i as u16) * 2;
            if y + 1 >= inner.y + inner.height {
                break;
            }
            frame.render_widget(
                Paragraph::new(Line::from(Span::raw(label.clone()))),
                Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1),
            );
            frame.render_widget(
                Gauge::default()
                    .percent(*percent)
                    .label(format!("{}%", percent))
                    .gauge_style(Style::default().fg(*color).bg(Color::Black))
                    .use_unicode(true),
                Rect::new(inner.x + 1, y + 1, inner.width.saturating_sub(2), 1),
            );
        }
    }

    fn render_data_sources(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .title(" Data Sources ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if !state.show_integrations {
            frame.render_widget(
                Paragraph::new("Hidden (display.show_integrations = false)")
                    .style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        let mut lines = vec![Line::from("")];
        for integration in &state.integrations.integrations {
            lines.push(connect_row(&integration.source, integration.connected));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_insights(frame: &mut Frame, area: Rect) {
        let mut lines = Vec::with_capacity(KEY_INSIGHTS.len());
        for insight in KEY_INSIGHTS {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(Color::Cyan)),
                Span::raw(*insight),
            ]));
        }

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(" Key Insights ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan).bold()),
        );

        frame.render_widget(panel, area);
    }
}
