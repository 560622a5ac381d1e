use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use super::assets::AVATAR;
use crate::app::NAV_LINKS;
use crate::domain::Profile;

const NAV_HEADING: &str = "Статистика";

/// Sidebar: identity block and the static navigation links
pub struct Aside<'a> {
    profile: &'a Profile,
    highlighted: Option<usize>,
}

impl<'a> Aside<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            profile,
            highlighted: None,
        }
    }

    pub fn highlighted(mut self, index: Option<usize>) -> Self {
        self.highlighted = index;
        self
    }

    fn identity(&self) -> Text<'a> {
        Text::from(vec![
            Line::from(Span::styled(
                AVATAR.glyph,
                Style::default().fg(Color::LightCyan),
            )),
            Line::from(Span::styled(
                self.profile.name.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.profile.organization.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
    }

    fn links(&self) -> Text<'static> {
        let mut lines = vec![
            Line::from(Span::styled(
                NAV_HEADING,
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (idx, link) in NAV_LINKS.iter().enumerate() {
            let active = self.highlighted == Some(idx);
            let (marker, style) = if active {
                (
                    "› ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(link.label, style),
                Span::styled(format!("  {}", link.route), Style::default().fg(Color::DarkGray)),
            ]));
        }

        Text::from(lines)
    }
}

impl Widget for Aside<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        Paragraph::new(self.identity()).render(chunks[0], buf);
        Paragraph::new(self.links()).render(chunks[2], buf);
    }
}
