// Time management tab: daily stat cards and calendar placeholders

use crate::metrics::format_hours;
use crate::ui::components::{connect_panel, stat_card};
use crate::ui::constants::CALENDAR_PROVIDERS;
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};

pub struct TimeTab;

impl TimeTab {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Stat cards
                Constraint::Min(6),    // Calendar integration placeholders
            ])
            .split(area);

        Self::render_stat_cards(frame, rows[0], state);
        Self::render_calendar_panels(frame, rows[1]);
    }

    fn render_stat_cards(frame: &mut Frame, area: Rect, state: &AppState) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        let tm = &state.metrics.time_management;

        frame.render_widget(
            stat_card("Focus Time", &format_hours(tm.focus_time), "Today", Color::Blue),
            cards[0],
        );
        frame.render_widget(
            stat_card("Break Time", &format_hours(tm.break_time), "Today", Color::Green),
            cards[1],
        );
        frame.render_widget(
            stat_card(
                "Distraction Time",
                &format_hours(tm.distraction_time),
                "Today",
                Color::Red,
            ),
            cards[2],
        );
    }

    fn render_calendar_panels(frame: &mut Frame, area: Rect) {
        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                CALENDAR_PROVIDERS
                    .iter()
                    .map(|_| Constraint::Length(6))
                    .chain(std::iter::once(Constraint::Min(0)))
                    .collect::<Vec<_>>(),
            )
            .split(area);

        for (i, (provider, description)) in CALENDAR_PROVIDERS.iter().enumerate() {
            frame.render_widget(connect_panel(provider, description), panels[i]);
        }
    }
}
