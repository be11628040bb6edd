// Horizontal meter bar for percentage-of-target display

use crate::metrics::display_percent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A one-row progress meter. Raw percentages may exceed 100 (targets can
/// be beaten); the drawn width is always clamped to the area.
pub struct MeterBar {
    percent: u16,
    over_target: bool,
    color: Color,
}

impl MeterBar {
    pub fn new(raw_percent: f64) -> Self {
        Self {
            percent: display_percent(raw_percent),
            over_target: raw_percent > 100.0,
            color: Color::Green,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for MeterBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let ratio = self.percent as f64 / 100.0;
        let filled_width = (area.width as f64 * ratio).round() as u16;

        let filled_fg = if self.over_target {
            // Target beaten: full bar in a brighter shade
            Color::LightGreen
        } else {
            self.color
        };

        for x in 0..area.width {
            let (symbol, fg) = if x < filled_width {
                ("█", filled_fg)
            } else {
                ("░", Color::DarkGray)
            };
            buf.set_string(area.x + x, area.y, symbol, Style::default().fg(fg));
        }
    }
}
