use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{Action, Module};
use crate::domain::Catalog;
use crate::modules::navigation::Navigation;

/// Dashboard pages, one per route
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[serde(alias = "docs")]
    #[value(alias = "docs")]
    Downloads,
    #[default]
    Recs,
    Stats,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Downloads, Page::Recs, Page::Stats];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Downloads => "Загрузки",
            Page::Recs => "Рекомендации",
            Page::Stats => "Статистика",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Page::Downloads => "/downloads",
            Page::Recs => "/recs",
            Page::Stats => "/stats",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Page::Downloads => '1',
            Page::Recs => '2',
            Page::Stats => '3',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.shortcut() == c)
    }

    /// Resolves a link target. `/docs` lands on the downloads page.
    pub fn from_route(route: &str) -> Option<Self> {
        match route.trim_end_matches('/') {
            "/downloads" | "/docs" => Some(Page::Downloads),
            "/recs" => Some(Page::Recs),
            "/stats" => Some(Page::Stats),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Page::Downloads => Page::Recs,
            Page::Recs => Page::Stats,
            Page::Stats => Page::Downloads,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Page::Downloads => Page::Stats,
            Page::Recs => Page::Downloads,
            Page::Stats => Page::Recs,
        }
    }
}

/// Static sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub route: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Рекомендации",
        route: "/recs",
    },
    NavLink {
        label: "Документы",
        route: "/docs",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadsLayout {
    /// Upload hint followed by one row per document
    #[default]
    Listing,
    /// Upload hint and an empty history
    Hint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsLayout {
    #[default]
    Summary,
    /// Summary plus the empty audit sections
    Audit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLayouts {
    pub downloads: DownloadsLayout,
    pub stats: StatsLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

pub struct App {
    pub page: Page,
    pub catalog: Catalog,
    pub layouts: PanelLayouts,
    pub nav: Navigation,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, layouts: PanelLayouts, page: Page) -> Self {
        Self {
            page,
            catalog,
            layouts,
            nav: Navigation::new(),
            status: None,
            help_open: false,
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    pub fn open(&mut self, page: Page) {
        if page != self.page {
            info!(from = self.page.route(), to = page.route(), "page changed");
            self.page = page;
            self.status = None;
        }
    }

    pub fn follow_route(&mut self, route: &str) {
        match Page::from_route(route) {
            Some(page) => self.open(page),
            None => {
                warn!(route, "no page for route");
                self.set_status(format!("Страница {route} не найдена"), StatusLevel::Warn);
            }
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(route) => self.follow_route(route),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.help_open {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.help_open = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.help_open = true,
            KeyCode::Tab => self.open(self.page.next()),
            KeyCode::BackTab => self.open(self.page.prev()),
            KeyCode::Char(c) => match Page::from_shortcut(c) {
                Some(page) => self.open(page),
                None => self.forward_to_nav(key),
            },
            _ => self.forward_to_nav(key),
        }
    }

    fn forward_to_nav(&mut self, key: KeyEvent) {
        let action = self.nav.handle_key(key);
        self.apply(action);
    }
}
