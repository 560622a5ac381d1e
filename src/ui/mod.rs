use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use ratatui::Frame;

pub mod aside;
pub mod assets;
pub mod header;
pub mod layout;
pub mod panels;
pub mod shell;
pub mod widgets;

pub use shell::PageShell;

use crate::app::{App, Page, PanelLayouts, StatusLevel};
use crate::domain::Catalog;

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();
    let (shell_area, status_area) = layout::screen_areas(size);

    let shell = PageShell::new(app.page, &app.catalog, app.layouts)
        .highlighted_link(Some(app.nav.selected()));
    f.render_widget(shell, shell_area);
    draw_status_line(f, status_area, app);

    if app.help_open {
        draw_help_popup(f, size);
    }
}

/// Draws a page shell into a fresh buffer of the given size
pub fn render_page(
    page: Page,
    catalog: &Catalog,
    layouts: PanelLayouts,
    width: u16,
    height: u16,
) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    PageShell::new(page, catalog, layouts).render(area, &mut buf);
    buf
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            app.page.route(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for page in Page::ALL {
        let style = if page == app.page {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{}:{} ", page.shortcut(), page.title()),
            style,
        ));
    }
    spans.push(Span::raw(" "));

    match app.status.as_ref() {
        Some(status) => {
            let color = match status.level {
                StatusLevel::Info => Color::LightGreen,
                StatusLevel::Warn => Color::LightYellow,
                StatusLevel::Error => Color::LightRed,
            };
            spans.push(Span::styled("msg: ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(status.text.as_str(), Style::default().fg(color)));
        }
        None => spans.push(Span::styled(
            "↑↓ ссылка  Enter перейти  ? помощь  q выход",
            Style::default().fg(Color::DarkGray),
        )),
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = layout::centered_rect(60, 50, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Навигация"),
        Line::from("  1 / 2 / 3      Загрузки / Рекомендации / Статистика"),
        Line::from("  Tab / S-Tab    Следующая / предыдущая страница"),
        Line::from("  ↑ ↓ / k j      Выбор ссылки в боковой панели"),
        Line::from("  Enter          Перейти по ссылке"),
        Line::from(""),
        Line::from("  ?              Справка"),
        Line::from("  q / Esc        Выход"),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Справка")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(popup, popup_area);
}
