use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Binding {
    #[default]
    Unbound,
    BoundTo(String),
}

impl Binding {
    pub fn topic(&self) -> Option<&str> {
        match self {
            Binding::Unbound => None,
            Binding::BoundTo(name) => Some(name),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("No topic selected.")]
    NoTopicSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedNote {
    pub topic: String,
}

impl SavedNote {
    pub fn message(&self) -> String {
        format!("Notes for {} saved!", self.topic)
    }
}

/// Free-text notes keyed by topic name, with one editable buffer.
///
/// Names are not unique: two topics sharing a display name share a note.
#[derive(Debug, Clone, Default)]
pub struct NoteBook {
    notes: HashMap<String, String>,
    buffer: String,
    binding: Binding,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    pub fn note(&self, topic: &str) -> Option<&str> {
        self.notes.get(topic).map(String::as_str)
    }

    pub fn load_topic(&mut self, topic: &str) {
        self.buffer = self.notes.get(topic).cloned().unwrap_or_default();
        self.binding = Binding::BoundTo(topic.to_string());
        debug!(topic, len = self.buffer.len(), "loaded note");
    }

    pub fn save_notes(&mut self) -> Result<SavedNote, NoteError> {
        let Binding::BoundTo(topic) = &self.binding else {
            info!("save refused: no topic bound");
            return Err(NoteError::NoTopicSelected);
        };

        self.notes.insert(topic.clone(), self.buffer.clone());
        info!(topic = %topic, len = self.buffer.len(), "saved note");
        Ok(SavedNote {
            topic: topic.clone(),
        })
    }
}

/// Visibility of each entry under a case-insensitive substring query.
pub fn search_topics<S: AsRef<str>>(entries: &[S], query: &str) -> Vec<bool> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .map(|entry| entry.as_ref().to_lowercase().contains(&needle))
        .collect()
}

/// A fixed list of topic entries and which of them the last query shows.
#[derive(Debug, Clone)]
pub struct TopicFilter {
    entries: Vec<String>,
    visible: Vec<bool>,
    query: String,
}

impl TopicFilter {
    pub fn new(entries: Vec<String>) -> Self {
        let visible = vec![true; entries.len()];
        Self {
            entries,
            visible,
            query: String::new(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn apply(&mut self, query: &str) {
        self.query = query.to_string();
        self.visible = search_topics(&self.entries, query);
        debug!(query, shown = self.visible_count(), "filtered topics");
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .zip(&self.visible)
            .filter(|(_, shown)| **shown)
            .map(|(entry, _)| entry.as_str())
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|shown| **shown).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<String> {
        ["Arrays", "Linked Lists", "Trees", "Graphs"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    mod note_tests {
        use super::*;

        #[test]
        fn new_notebook_is_unbound_and_empty() {
            let book = NoteBook::new();
            assert_eq!(book.binding(), &Binding::Unbound);
            assert_eq!(book.buffer(), "");
        }

        #[test]
        fn save_without_topic_fails_and_writes_nothing() {
            let mut book = NoteBook::new();
            book.buffer_mut().push_str("orphan text");
            assert_eq!(book.save_notes(), Err(NoteError::NoTopicSelected));
            assert!(book.note("").is_none());
            assert_eq!(book.binding(), &Binding::Unbound);
        }

        #[test]
        fn no_topic_message() {
            assert_eq!(NoteError::NoTopicSelected.to_string(), "No topic selected.");
        }

        #[test]
        fn load_edit_save_load_round_trip() {
            let mut book = NoteBook::new();
            book.load_topic("Arrays");
            *book.buffer_mut() = "foo".to_string();
            let saved = book.save_notes().unwrap();
            assert_eq!(saved.topic, "Arrays");
            assert_eq!(saved.message(), "Notes for Arrays saved!");
            assert_eq!(book.note("Arrays"), Some("foo"));

            book.load_topic("Trees");
            assert_eq!(book.buffer(), "");
            book.load_topic("Arrays");
            assert_eq!(book.buffer(), "foo");
        }

        #[test]
        fn load_unknown_topic_gives_empty_buffer() {
            let mut book = NoteBook::new();
            book.buffer_mut().push_str("leftover");
            book.load_topic("Graphs");
            assert_eq!(book.buffer(), "");
            assert_eq!(book.binding().topic(), Some("Graphs"));
        }

        #[test]
        fn unsaved_buffer_is_lost_on_load() {
            let mut book = NoteBook::new();
            book.load_topic("Arrays");
            book.buffer_mut().push_str("draft");
            book.load_topic("Trees");
            book.load_topic("Arrays");
            assert_eq!(book.buffer(), "");
            assert!(book.note("Arrays").is_none());
        }

        #[test]
        fn save_overwrites_previous_note() {
            let mut book = NoteBook::new();
            book.load_topic("Trees");
            *book.buffer_mut() = "first".to_string();
            book.save_notes().unwrap();
            *book.buffer_mut() = "second".to_string();
            book.save_notes().unwrap();
            assert_eq!(book.note("Trees"), Some("second"));
        }

        #[test]
        fn binding_survives_save() {
            let mut book = NoteBook::new();
            book.load_topic("Trees");
            book.save_notes().unwrap();
            assert_eq!(book.binding(), &Binding::BoundTo("Trees".to_string()));
        }

        #[test]
        fn notes_are_keyed_by_name() {
            let mut book = NoteBook::new();
            book.load_topic("Arrays");
            *book.buffer_mut() = "shared".to_string();
            book.save_notes().unwrap();
            book.load_topic("arrays");
            assert_eq!(book.buffer(), "");
        }
    }

    mod search_tests {
        use super::*;

        #[test]
        fn empty_query_shows_all() {
            assert_eq!(search_topics(&entries(), ""), vec![true; 4]);
        }

        #[test]
        fn unmatched_query_hides_all() {
            assert_eq!(search_topics(&entries(), "heap"), vec![false; 4]);
        }

        #[test]
        fn search_is_case_insensitive() {
            assert_eq!(
                search_topics(&entries(), "ARR"),
                vec![true, false, false, false]
            );
        }

        #[test]
        fn substring_anywhere_matches() {
            assert_eq!(
                search_topics(&entries(), "s"),
                vec![true, true, true, true]
            );
            assert_eq!(
                search_topics(&entries(), "ee"),
                vec![false, false, true, false]
            );
        }

        #[test]
        fn works_on_str_slices() {
            let names = ["Heaps", "Tries"];
            assert_eq!(search_topics(&names, "tri"), vec![false, true]);
        }

        #[test]
        fn search_leaves_notes_alone() {
            let mut book = NoteBook::new();
            book.load_topic("Arrays");
            *book.buffer_mut() = "kept".to_string();
            book.save_notes().unwrap();

            let mut filter = TopicFilter::new(entries());
            filter.apply("zzz");
            assert_eq!(book.note("Arrays"), Some("kept"));
        }
    }

    mod filter_tests {
        use super::*;

        #[test]
        fn new_filter_shows_everything() {
            let filter = TopicFilter::new(entries());
            assert_eq!(filter.visible_count(), 4);
            assert_eq!(filter.query(), "");
        }

        #[test]
        fn apply_narrows_visible_entries() {
            let mut filter = TopicFilter::new(entries());
            filter.apply("li");
            let shown: Vec<_> = filter.visible().collect();
            assert_eq!(shown, vec!["Linked Lists"]);
            assert!(filter.is_visible(1));
            assert!(!filter.is_visible(0));
            assert_eq!(filter.query(), "li");
        }

        #[test]
        fn clearing_query_restores_all() {
            let mut filter = TopicFilter::new(entries());
            filter.apply("graph");
            assert_eq!(filter.visible_count(), 1);
            filter.apply("");
            assert_eq!(filter.visible_count(), 4);
        }

        #[test]
        fn out_of_range_index_is_hidden() {
            let filter = TopicFilter::new(entries());
            assert!(!filter.is_visible(10));
        }
    }
}
