use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use super::aside::Aside;
use super::header::Header;
use super::layout::shell_areas;
use super::panels::{DownloadsPanel, RecsPanel, StatsPanel};
use crate::app::{Page, PanelLayouts};
use crate::domain::Catalog;

/// One route's screen: header on top, sidebar and content panel below
pub struct PageShell<'a> {
    page: Page,
    catalog: &'a Catalog,
    layouts: PanelLayouts,
    highlighted_link: Option<usize>,
}

impl<'a> PageShell<'a> {
    pub fn new(page: Page, catalog: &'a Catalog, layouts: PanelLayouts) -> Self {
        Self {
            page,
            catalog,
            layouts,
            highlighted_link: None,
        }
    }

    pub fn highlighted_link(mut self, index: Option<usize>) -> Self {
        self.highlighted_link = index;
        self
    }
}

impl Widget for PageShell<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = shell_areas(area);

        Header.render(areas.header, buf);
        Aside::new(&self.catalog.profile)
            .highlighted(self.highlighted_link)
            .render(areas.sidebar, buf);

        match self.page {
            Page::Downloads => {
                DownloadsPanel::new(&self.catalog.documents, self.layouts.downloads)
                    .render(areas.content, buf);
            }
            Page::Recs => RecsPanel::new(&self.catalog.violations).render(areas.content, buf),
            Page::Stats => {
                StatsPanel::new(&self.catalog.stats, self.layouts.stats).render(areas.content, buf);
            }
        }
    }
}
