// Analytics tab: the 4-week chart again, plus insights and recommendations

use crate::ui::chart;
use crate::ui::constants::{
    AVERAGE_PROGRESS_PER_WEEK, BEST_PERFORMING_AREA, FOCUS_AREA, GROWTH_INSIGHTS, RECOMMENDATIONS,
};
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct AnalyticsTab;

impl AnalyticsTab {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Detailed chart (same adapter as overview)
                Constraint::Length(1), // Legend
                Constraint::Length(7), // Growth insights + weekly trends
                Constraint::Length(6), // Recommendations
            ])
            .split(area);

        frame.render_widget(
            chart::weekly_bar_chart(
                &state.metrics.progress_over_time,
                "Detailed Progress Analysis",
            ),
            rows[0],
        );
        frame.render_widget(Paragraph::new(chart::week_legend()), rows[1]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        Self::render_growth_insights(frame, middle[0]);
        Self::render_weekly_trends(frame, middle[1]);
        Self::render_recommendations(frame, rows[3]);
    }

    fn render_growth_insights(frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from("")];
        for (area_name, note, growth) in GROWTH_INSIGHTS {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<16}", area_name), Style::default().bold()),
                Span::styled(format!("{:<26}", note), Style::default().fg(Color::DarkGray)),
                Span::styled(*growth, Style::default().fg(Color::Green).bold()),
            ]));
        }

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(" Growth Insights ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

        frame.render_widget(panel, area);
    }

    fn render_weekly_trends(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  Average Progress      "),
                Span::styled(AVERAGE_PROGRESS_PER_WEEK, Style::default().bold()),
            ]),
            Line::from(vec![
                Span::raw("  Best Performing Area  "),
                Span::styled(BEST_PERFORMING_AREA, Style::default().fg(Color::Green).bold()),
            ]),
            Line::from(vec![
                Span::raw("  Focus Area            "),
                Span::styled(FOCUS_AREA, Style::default().fg(Color::Yellow).bold()),
            ]),
        ];

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(" Weekly Trends ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );

        frame.render_widget(panel, area);
    }

    fn render_recommendations(frame: &mut Frame, area: Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        for (i, (title, body)) in RECOMMENDATIONS.iter().enumerate() {
            let panel = Paragraph::new(vec![Line::from(""), Line::from(format!("  {}", body))])
                .wrap(ratatui::widgets::Wrap { trim: false })
                .block(
                    Block::default()
                        .title(format!(" {} ", title))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan)),
                );
            frame.render_widget(panel, cards[i]);
        }
    }
}
