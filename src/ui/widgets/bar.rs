//! Horizontal percentage bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::Percent;

pub const FILL: char = '█';
pub const TRACK: char = '░';

/// Single-line bar filled to `value` percent of its width
pub struct PercentBar {
    value: Percent,
    fill_style: Style,
    track_style: Style,
}

impl PercentBar {
    pub fn new(value: Percent) -> Self {
        Self {
            value,
            fill_style: Style::default().fg(Color::Cyan),
            track_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn fill_style(mut self, style: Style) -> Self {
        self.fill_style = style;
        self
    }
}

impl Widget for PercentBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let filled = self.value.fill_width(area.width);
        for i in 0..area.width {
            let (ch, style) = if i < filled {
                (FILL, self.fill_style)
            } else {
                (TRACK, self.track_style)
            };
            buf.get_mut(area.x + i, area.y).set_char(ch).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_row(value: u8, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        PercentBar::new(Percent::new(value).unwrap()).render(area, &mut buf);
        (0..width).map(|x| buf.get(x, 0).symbol().to_string()).collect()
    }

    #[test]
    fn test_bar_fill_count() {
        let row = render_row(93, 100);
        assert_eq!(row.chars().count(), 100);
        assert_eq!(row.chars().filter(|c| *c == FILL).count(), 93);
    }

    #[test]
    fn test_bar_empty_and_zero() {
        assert!(render_row(93, 0).is_empty());
        assert_eq!(render_row(0, 4), "░░░░");
        assert_eq!(render_row(100, 4), "████");
    }

    #[test]
    fn test_bar_widget_fills_prefix() {
        let row = render_row(93, 20);
        assert!(row.starts_with(&"█".repeat(18)));
        assert!(row.ends_with("░░"));
    }
}
