//! Export Module
//!
//! Draws one page headless and turns it into printable output.
//!
//! - `text`: the rendered terminal cells, one line per row
//! - `json`: the view model behind the page

mod json_export;
mod text_export;

pub use json_export::PageSnapshot;
pub use text_export::buffer_text;

use clap::ValueEnum;

use crate::app::{Page, PanelLayouts};
use crate::domain::Catalog;
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

pub fn render_text(
    page: Page,
    catalog: &Catalog,
    layouts: PanelLayouts,
    width: u16,
    height: u16,
) -> String {
    let buf = ui::render_page(page, catalog, layouts, width, height);
    buffer_text(&buf)
}

pub fn render_json(
    page: Page,
    catalog: &Catalog,
    layouts: PanelLayouts,
) -> Result<String, serde_json::Error> {
    let snapshot = PageSnapshot::new(page, catalog, layouts);
    serde_json::to_string_pretty(&snapshot)
}
