//! Navigation module - keyboard access to the sidebar links

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::NAV_LINKS;
use crate::core::{Action, Module};

#[derive(Debug, Clone, Default)]
pub struct Navigation {
    selected: usize,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next_link(&mut self) {
        self.selected = (self.selected + 1) % NAV_LINKS.len();
    }

    pub fn prev_link(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(NAV_LINKS.len() - 1);
    }
}

impl Module for Navigation {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next_link();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.prev_link();
                Action::None
            }
            KeyCode::Enter => NAV_LINKS
                .get(self.selected)
                .map(|link| Action::Navigate(link.route))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }
}
