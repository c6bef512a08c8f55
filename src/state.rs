//! Application state owned by the UI layer.
//!
//! The topic store and the note book never exchange data; they only share
//! an owner and the theme flag.

use tracing::debug;

use crate::config::Config;
use crate::models::sample_topics;
use crate::notes::{NoteBook, TopicFilter};
use crate::store::TopicStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: TopicStore,
    pub notes: NoteBook,
    pub note_topics: TopicFilter,
    pub theme: Theme,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let topics = if config.sample_topics {
            sample_topics()
        } else {
            Vec::new()
        };

        Self {
            store: TopicStore::new(topics, config.edit_policy),
            notes: NoteBook::new(),
            note_topics: TopicFilter::new(config.note_topics.clone()),
            theme: Theme::from_dark_mode(config.dark_mode),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.label(), "theme toggled");
    }
}
