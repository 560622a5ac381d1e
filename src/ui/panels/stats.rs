use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use super::{heading_style, panel_block};
use crate::app::StatsLayout;
use crate::domain::{weekday_label, Metric, StatsSummary};
use crate::ui::widgets::PercentBar;

pub const TITLE: &str = "Сводная статистика";
pub const DISTRIBUTION_HEADING: &str = "Распределение нарушений по дням недели";
const COLUMN_PLACEHOLDER: &str = "╎";

/// Compliance cards, weekly distribution and the per-violation breakdown
pub struct StatsPanel<'a> {
    summary: &'a StatsSummary,
    layout: StatsLayout,
}

fn card<'a>() -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

impl<'a> StatsPanel<'a> {
    pub fn new(summary: &'a StatsSummary, layout: StatsLayout) -> Self {
        Self { summary, layout }
    }

    fn render_top(&self, area: Rect, buf: &mut Buffer) {
        let mut constraints: Vec<Constraint> = self
            .summary
            .compliance
            .iter()
            .map(|_| Constraint::Percentage(20))
            .collect();
        constraints.push(Constraint::Percentage(14));
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        let count = self.summary.compliance.len();
        for (metric, chunk) in self.summary.compliance.iter().zip(chunks.iter()) {
            render_compliance_card(metric, *chunk, buf);
        }
        self.render_violation_types(chunks[count], buf);
        self.render_distribution(chunks[count + 1], buf);
    }

    fn render_violation_types(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from("Типы"),
            Line::from("нарушений"),
            Line::from(""),
            Line::from(Span::styled(
                self.summary.violation_types.to_string(),
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        Paragraph::new(Text::from(lines))
            .block(card())
            .render(area, buf);
    }

    fn render_distribution(&self, area: Rect, buf: &mut Buffer) {
        let block = card().title(Span::styled(DISTRIBUTION_HEADING, heading_style()));
        let inner = block.inner(area);
        block.render(area, buf);

        let days = self.summary.weekdays.len();
        if days == 0 || inner.is_empty() {
            return;
        }
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                self.summary
                    .weekdays
                    .iter()
                    .map(|_| Constraint::Ratio(1, days as u32)),
            )
            .split(inner);

        let placeholder = Style::default().fg(Color::DarkGray);
        for (day, column) in self.summary.weekdays.iter().zip(columns.iter()) {
            let mut lines: Vec<Line> = (1..column.height)
                .map(|_| Line::from(Span::styled(COLUMN_PLACEHOLDER, placeholder)))
                .collect();
            lines.push(Line::from(weekday_label(*day)));
            Paragraph::new(Text::from(lines))
                .alignment(Alignment::Center)
                .render(*column, buf);
        }
    }

    fn render_breakdown(&self, area: Rect, buf: &mut Buffer) {
        let columns = self.summary.breakdown.len();
        if columns == 0 {
            return;
        }
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                self.summary
                    .breakdown
                    .iter()
                    .map(|_| Constraint::Ratio(1, columns as u32)),
            )
            .split(area);

        for (metrics, chunk) in self.summary.breakdown.iter().zip(chunks.iter()) {
            let block = card();
            let inner = block.inner(*chunk);
            block.render(*chunk, buf);
            render_metric_rows(metrics, inner, buf);
        }
    }

    fn render_sections(&self, area: Rect, buf: &mut Buffer) {
        let count = self.summary.sections.len();
        if count == 0 {
            return;
        }
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                self.summary
                    .sections
                    .iter()
                    .map(|_| Constraint::Ratio(1, count as u32)),
            )
            .split(area);

        for (heading, chunk) in self.summary.sections.iter().zip(chunks.iter()) {
            card()
                .title(Span::styled(heading.as_str(), heading_style()))
                .render(*chunk, buf);
        }
    }
}

fn render_compliance_card(metric: &Metric, area: Rect, buf: &mut Buffer) {
    let block = card();
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height < 2 || inner.width == 0 {
        return;
    }

    buf.set_stringn(
        inner.x,
        inner.y,
        metric.value.to_string(),
        usize::from(inner.width),
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    );
    PercentBar::new(metric.value)
        .fill_style(Style::default().fg(Color::LightGreen))
        .render(Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);

    let label_area = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 2);
    Paragraph::new(metric.label.as_str())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .render(label_area, buf);
}

/// Label line followed by a bar line for each metric
fn render_metric_rows(metrics: &[Metric], area: Rect, buf: &mut Buffer) {
    if area.width == 0 {
        return;
    }
    let label_style = Style::default().fg(Color::Gray);
    for (row, metric) in metrics.iter().enumerate() {
        let Ok(offset) = u16::try_from(row * 2) else {
            break;
        };
        let y = area.y.saturating_add(offset);
        if y.saturating_add(1) >= area.bottom() {
            break;
        }
        buf.set_stringn(
            area.x,
            y,
            &metric.label,
            usize::from(area.width),
            label_style,
        );
        PercentBar::new(metric.value).render(Rect::new(area.x, y + 1, area.width, 1), buf);
    }
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(TITLE);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self
            .summary
            .breakdown
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        let breakdown_height = u16::try_from(rows * 2 + 2).unwrap_or(u16::MAX);

        let mut constraints = vec![
            Constraint::Length(7),
            Constraint::Length(breakdown_height),
        ];
        if self.layout == StatsLayout::Audit {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        self.render_top(chunks[0], buf);
        self.render_breakdown(chunks[1], buf);
        if self.layout == StatsLayout::Audit {
            self.render_sections(chunks[2], buf);
        }
    }
}
