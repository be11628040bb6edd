// Digital wellbeing tab: screen time, app usage, and platform placeholders

use crate::metrics::{AppCategory, format_hours};
use crate::ui::components::{connect_panel, stat_card};
use crate::ui::constants::SCREEN_TIME_PROVIDERS;
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_piechart::{PieChart, PieSlice};

fn category_color(category: AppCategory) -> Color {
    match category {
        AppCategory::Productive => Color::Green,
        AppCategory::Social => Color::Blue,
        AppCategory::Entertainment => Color::Magenta,
    }
}

pub struct DigitalTab;

impl DigitalTab {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // Screen time card + app usage list
                Constraint::Min(8),     // Usage breakdown pie
                Constraint::Length(8),  // Integration placeholders
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[0]);

        frame.render_widget(
            stat_card(
                "Screen Time Today",
                &format_hours(state.metrics.digital_wellbeing.screen_time),
                "15% less than yesterday",
                Color::Yellow,
            ),
            top[0],
        );

        Self::render_app_usage(frame, top[1], state);
        Self::render_usage_chart(frame, rows[1], state);
        Self::render_integration_panels(frame, rows[2]);
    }

    fn render_app_usage(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .title(" App Usage ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        for app in &state.metrics.digital_wellbeing.app_usage {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled("■ ", Style::default().fg(category_color(app.category))),
                Span::raw(format!("{:<16}", app.name)),
                Span::styled(format_hours(app.hours), Style::default().bold()),
                Span::styled(
                    format!("  ({})", app.category.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_usage_chart(frame: &mut Frame, area: Rect, state: &AppState) {
        let apps = &state.metrics.digital_wellbeing.app_usage;

        if apps.is_empty() {
            let message = Paragraph::new("No usage data")
                .style(Style::default().fg(Color::DarkGray))
                .block(
                    Block::default()
                        .title(" Usage Breakdown ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                );
            frame.render_widget(message, area);
            return;
        }

        // Labels must live until the chart is rendered
        let labels: Vec<String> = apps
            .iter()
            .map(|app| format!("{} ({})", app.name, format_hours(app.hours)))
            .collect();

        let slices: Vec<PieSlice> = apps
            .iter()
            .zip(labels.iter())
            .map(|(app, label)| PieSlice::new(label, app.hours, category_color(app.category)))
            .collect();

        let chart = PieChart::new(slices)
            .show_legend(true)
            .show_percentages(true)
            .block(
                Block::default()
                    .title(" Usage Breakdown ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        frame.render_widget(chart, area);
    }

    fn render_integration_panels(frame: &mut Frame, area: Rect) {
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (i, (provider, description)) in SCREEN_TIME_PROVIDERS.iter().enumerate() {
            frame.render_widget(connect_panel(provider, description), panels[i]);
        }
    }
}
