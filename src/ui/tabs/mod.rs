// Tabbed view rendering: root layout, tab bar, and per-tab dispatch

use crate::ui::components::Footer;
use crate::ui::state::{AppState, Tab};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

mod analytics;
mod digital;
mod overview;
mod skills;
mod time;

pub use analytics::AnalyticsTab;
pub use digital::DigitalTab;
pub use overview::OverviewTab;
pub use skills::SkillsTab;
pub use time::TimeTab;

/// Draw the whole frame: header, tab bar, the active view, and footer.
/// Renderers only read from the state; the tab bar area is recorded for
/// mouse hit testing by the event layer.
pub fn draw(frame: &mut Frame, state: &mut AppState, clock: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tab bar
            Constraint::Min(10),   // Active view
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &state.app_version, clock);
    render_tab_bar(frame, chunks[1], state.active_tab);
    state.tab_bar_area = Some(chunks[1]);

    render_active(frame, chunks[2], state);

    frame.render_widget(Footer::dashboard(), chunks[3]);
}

fn render_active(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.active_tab {
        Tab::Overview => OverviewTab::render(frame, area, state),
        Tab::Time => TimeTab::render(frame, area, state),
        Tab::Skills => SkillsTab::render(frame, area, state),
        Tab::Digital => DigitalTab::render(frame, area, state),
        Tab::Analytics => AnalyticsTab::render(frame, area, state),
    }
}

fn render_header(frame: &mut Frame, area: Rect, version: &str, clock: &str) {
    let title = Line::from(vec![
        Span::styled(
            "  PROGRESS TRACKER ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("v{}", version), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            "Time, skills, habits, and digital wellbeing",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(clock.to_string(), Style::default().fg(Color::Yellow)),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if *tab == active {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(tab.title(), style),
            ])
        })
        .collect();

    // No padding so the positions match tab_at_position
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(active.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .padding("", "")
        .divider(" │ ");

    frame.render_widget(tabs, area);
}

/// Map a click on the tab bar to the tab under the cursor. Titles are
/// laid out left to right with the same divider width `Tabs` uses.
pub fn tab_at_position(x: u16, area: Rect) -> Option<Tab> {
    // Inside the border, titles start one cell in
    let mut cursor = area.x + 1;
    let divider_width = 3; // " │ "

    for tab in Tab::all() {
        let prefix_width = 4; // "[n] "
        let width = prefix_width + tab.title().len() as u16;
        if x >= cursor && x < cursor + width {
            return Some(*tab);
        }
        cursor += width + divider_width;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_at_position_first_and_none() {
        let area = Rect::new(0, 0, 120, 3);
        assert_eq!(tab_at_position(2, area), Some(Tab::Overview));
        // Far beyond the last title
        assert_eq!(tab_at_position(119, area), None);
    }

    #[test]
    fn test_tab_at_position_second_tab() {
        let area = Rect::new(0, 0, 120, 3);
        // "[1] Overview" is 12 wide, divider 3, so x=16 lands in Time Management
        assert_eq!(tab_at_position(17, area), Some(Tab::Time));
    }
}
