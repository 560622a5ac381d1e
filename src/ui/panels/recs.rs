use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::panel_block;
use crate::domain::ViolationRecord;
use crate::ui::assets::PICTURE_PLACEHOLDER;

pub const TITLE: &str = "Нарушения и рекомендации";
pub const VIOLATION_LABEL: &str = "Нарушение:";
pub const RECOMMENDATION_LABEL: &str = "Рекомендация:";

/// Violation entries, newest first as given
pub struct RecsPanel<'a> {
    violations: &'a [ViolationRecord],
}

impl<'a> RecsPanel<'a> {
    pub fn new(violations: &'a [ViolationRecord]) -> Self {
        Self { violations }
    }

    fn entry_lines(record: &'a ViolationRecord) -> [Line<'a>; 4] {
        let label = Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD);
        [
            Line::from(vec![
                Span::styled(PICTURE_PLACEHOLDER, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(record.display_time(), Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::styled(VIOLATION_LABEL, label),
                Span::raw(" "),
                Span::raw(record.violation.as_str()),
            ]),
            Line::from(vec![
                Span::styled(RECOMMENDATION_LABEL, label.fg(Color::LightGreen)),
                Span::raw(" "),
                Span::raw(record.recommendation.as_str()),
            ]),
            Line::from(""),
        ]
    }
}

impl Widget for RecsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .violations
            .iter()
            .flat_map(Self::entry_lines)
            .collect();

        Paragraph::new(Text::from(lines))
            .block(panel_block(TITLE))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf.get(x, y).symbol())
            .collect()
    }

    #[test]
    fn test_each_entry_starts_with_picture_placeholder() {
        let catalog = Catalog::builtin().unwrap();
        let area = Rect::new(0, 0, 200, 30);
        let mut buf = Buffer::empty(area);
        RecsPanel::new(&catalog.violations).render(area, &mut buf);

        let dated: Vec<String> = (area.top()..area.bottom())
            .map(|y| row(&buf, y))
            .filter(|line| line.contains("09-24-2025 22:04:15"))
            .collect();
        assert_eq!(dated.len(), 5);
        for line in dated {
            assert!(line.contains("▣ 09-24-2025 22:04:15"), "{line}");
        }
    }
}
