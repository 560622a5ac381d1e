use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use super::assets::{LOGO, WORDMARK};

/// Top banner with the logo
#[derive(Debug, Clone, Copy, Default)]
pub struct Header;

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo = Line::from(vec![
            Span::styled(LOGO.glyph, Style::default().fg(Color::LightCyan)),
            Span::raw(" "),
            Span::styled(
                WORDMARK,
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(logo)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}
