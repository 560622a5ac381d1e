use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use super::{heading_style, panel_block};
use crate::app::DownloadsLayout;
use crate::domain::Document;
use crate::ui::assets::{DELETE, DOCUMENT, UPLOAD};

pub const TITLE: &str = "Загрузка документов";
pub const UPLOAD_HINT: &str = "Здесь Вы можете повысить адаптивность системы под Ваше предприятие. \
     Загрузите - документы, схемы бизнес-процессов, стандарты, чек-листы";
pub const HISTORY_HEADING: &str = "История загрузок";

/// Upload hint and the document history
pub struct DownloadsPanel<'a> {
    documents: &'a [Document],
    layout: DownloadsLayout,
}

impl<'a> DownloadsPanel<'a> {
    pub fn new(documents: &'a [Document], layout: DownloadsLayout) -> Self {
        Self { documents, layout }
    }

    fn render_hint(&self, area: Rect, buf: &mut Buffer) {
        let text = match self.layout {
            DownloadsLayout::Listing => {
                let drop_zone = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan));
                let line = Line::from(vec![
                    Span::styled(UPLOAD.glyph, Style::default().fg(Color::Cyan)),
                    Span::raw(" "),
                    Span::raw(UPLOAD_HINT),
                ]);
                Paragraph::new(line).block(drop_zone)
            }
            DownloadsLayout::Hint => Paragraph::new(UPLOAD_HINT),
        };
        text.wrap(Wrap { trim: true }).render(area, buf);
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let name_style = Style::default().fg(Color::White);
        let dim = Style::default().fg(Color::DarkGray);
        let delete_style = Style::default().fg(Color::LightRed);

        if area.width < 8 || area.height == 0 {
            return;
        }

        for (row, document) in self.documents.iter().enumerate() {
            let Ok(offset) = u16::try_from(row) else {
                break;
            };
            let y = area.y.saturating_add(offset);
            if y >= area.bottom() {
                break;
            }

            let size = document.display_size();
            let size_width = size.chars().count() as u16;
            // "▤ " + name + gap + size + " ✕"
            let name_width = area.width.saturating_sub(size_width + 6);

            buf.set_string(area.x, y, DOCUMENT.glyph, Style::default().fg(Color::Cyan));
            buf.set_stringn(area.x + 2, y, &document.name, usize::from(name_width), name_style);

            let size_x = area.right().saturating_sub(size_width + 2);
            if size_x > area.x + 2 + name_width {
                buf.set_string(size_x, y, &size, dim);
            }
            if area.width >= 2 {
                buf.set_string(area.right() - 1, y, DELETE.glyph, delete_style);
            }
        }
    }
}

impl Widget for DownloadsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(TITLE);
        let inner = block.inner(area);
        block.render(area, buf);

        let hint_height = match self.layout {
            DownloadsLayout::Listing => 5,
            DownloadsLayout::Hint => 3,
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(hint_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        self.render_hint(chunks[0], buf);
        if !chunks[2].is_empty() {
            buf.set_stringn(
                chunks[2].x,
                chunks[2].y,
                HISTORY_HEADING,
                usize::from(chunks[2].width),
                heading_style(),
            );
        }

        if self.layout == DownloadsLayout::Listing {
            self.render_rows(chunks[4], buf);
        }
    }
}
