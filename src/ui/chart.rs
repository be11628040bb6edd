// 4-week progress bar chart, shared by the Overview and Analytics tabs

use crate::metrics::WeeklyProgress;
use crate::ui::constants::{WEEK_COLORS, WEEK_LABELS};
use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

/// Pass-through adapter: one group per tracked area in insertion order,
/// four bars per group keyed by the week labels. No sorting, filtering,
/// or aggregation happens here.
pub fn chart_groups(rows: &[WeeklyProgress]) -> Vec<(&str, [u64; 4])> {
    rows.iter()
        .map(|row| {
            let mut values = [0u64; 4];
            for (slot, value) in values.iter_mut().zip(row.weeks.iter()) {
                *slot = value.round() as u64;
            }
            (row.area.as_str(), values)
        })
        .collect()
}

pub fn weekly_bar_chart<'a>(rows: &'a [WeeklyProgress], title: &str) -> BarChart<'a> {
    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .bar_width(3)
        .bar_gap(1)
        .group_gap(3)
        .max(100);

    for (area, values) in chart_groups(rows) {
        let bars: Vec<Bar> = values
            .iter()
            .enumerate()
            .map(|(week, &value)| {
                Bar::default()
                    .value(value)
                    .style(Style::default().fg(WEEK_COLORS[week]))
                    .value_style(Style::default().fg(Color::Black).bg(WEEK_COLORS[week]))
            })
            .collect();

        chart = chart.data(
            BarGroup::default()
                .label(Line::from(area.to_string()).centered())
                .bars(&bars),
        );
    }

    chart
}

/// Chart legend line mapping each week label to its series color.
pub fn week_legend() -> Line<'static> {
    let mut spans = vec![Span::raw(" Progress (%)  ")];
    for (label, color) in WEEK_LABELS.iter().zip(WEEK_COLORS.iter()) {
        spans.push(Span::styled("■ ", Style::default().fg(*color)));
        spans.push(Span::raw(*label));
        spans.push(Span::raw("  "));
    }
    Line::from(spans).bold()
}
