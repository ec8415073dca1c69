//! Custom widgets for the game UI

use crate::data::Tone;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Countdown to the next puzzle
pub struct CountdownBar {
    progress: f64,
    label: String,
    color: Color,
}

impl CountdownBar {
    pub fn new(label: &str, progress: f64) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            label: label.to_string(),
            color: Color::Cyan,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for CountdownBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = self.label.chars().count() as u16 + 1;
        if area.width < label_width + 3 || area.height < 1 {
            return;
        }

        buf.set_string(area.x, area.y, &self.label, Style::default().fg(self.color));

        let bar_x = area.x + label_width;
        let inner = area.width - label_width - 2;
        let filled = (self.progress * inner as f64).round() as u16;

        buf.set_string(bar_x, area.y, "[", Style::default());
        buf.set_string(bar_x + inner + 1, area.y, "]", Style::default());
        for x in 0..filled {
            buf.set_string(bar_x + 1 + x, area.y, "█", Style::default().fg(self.color));
        }
        for x in filled..inner {
            buf.set_string(bar_x + 1 + x, area.y, "░", Style::default().fg(Color::DarkGray));
        }
    }
}

/// A single feedback line, prefixed by its tone's symbol
pub struct FeedbackLine {
    message: String,
    tone: Tone,
}

impl FeedbackLine {
    pub fn new(message: &str, tone: Tone) -> Self {
        Self {
            message: message.to_string(),
            tone,
        }
    }
}

impl Widget for FeedbackLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.message.is_empty() || area.height < 1 {
            return;
        }
        let color = crate::tui::tone_color(&self.tone);
        let text = format!("{} {}", self.tone.symbol(), self.message);
        buf.set_stringn(
            area.x,
            area.y,
            &text,
            area.width as usize,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
    }
}

/// Double-line box announcing how a puzzle ended
pub struct ResultBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl ResultBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Green,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for ResultBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        let style = Style::default().fg(self.border_color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        // Top and bottom borders
        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(area.x, bottom, "╚", style);
        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(right, bottom, "╝", style);

        // Title
        let title = format!(" {} ", self.title);
        let title_width = title.chars().count() as u16;
        let title_start = area.width.saturating_sub(title_width) / 2;
        buf.set_stringn(
            area.x + title_start,
            area.y,
            &title,
            area.width as usize,
            style.add_modifier(Modifier::BOLD),
        );

        // Sides
        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }

        // Content
        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(
                area.x + 2,
                y,
                line,
                area.width.saturating_sub(4) as usize,
                Style::default().fg(Color::White),
            );
        }
    }
}
