mod ui;
mod widgets;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::models::{QuestionId, TopicId};
use crate::state::AppState;
use crate::store::{EditField, EditSession, EditTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Topics,
    Notes,
}

impl View {
    fn next(&self) -> Self {
        match self {
            View::Topics => View::Notes,
            View::Notes => View::Topics,
        }
    }

    fn prev(&self) -> Self {
        // Two views: both directions land on the other one.
        self.next()
    }
}

/// One line of the topics view: a topic header or one of its questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Topic(TopicId),
    Question {
        topic_id: TopicId,
        question_id: QuestionId,
    },
}

impl Row {
    pub fn topic_id(&self) -> TopicId {
        match self {
            Row::Topic(id) => *id,
            Row::Question { topic_id, .. } => *topic_id,
        }
    }

    fn target(&self) -> EditTarget {
        match *self {
            Row::Topic(id) => EditTarget::Topic(id),
            Row::Question {
                topic_id,
                question_id,
            } => EditTarget::Question {
                topic_id,
                question_id,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteMode {
    Browse,
    Search,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

pub struct StatefulList<T> {
    pub items: Vec<T>,
    pub selected: Option<usize>,
}

impl<T> StatefulList<T> {
    fn with_items(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self { items, selected }
    }

    // Keeps the cursor position, clamped to the new length.
    fn replace_items(&mut self, items: Vec<T>) {
        self.selected = match (self.selected, items.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.items = items;
    }

    fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i >= self.items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    fn first(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(0);
        }
    }

    fn last(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(self.items.len() - 1);
        }
    }

    fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

impl<T: PartialEq> StatefulList<T> {
    fn select_item(&mut self, item: &T) {
        if let Some(i) = self.items.iter().position(|x| x == item) {
            self.selected = Some(i);
        }
    }
}

pub struct App {
    pub state: AppState,
    pub view: View,
    pub rows: StatefulList<Row>,
    pub edit_field: usize,
    // Indices into the note topic entries that the current query shows.
    pub note_entries: StatefulList<usize>,
    pub note_mode: NoteMode,
    pub search_input: String,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let rows = build_rows(&state);
        let note_entries = visible_entries(&state);

        Self {
            state,
            view: View::Topics,
            rows: StatefulList::with_items(rows),
            edit_field: 0,
            note_entries: StatefulList::with_items(note_entries),
            note_mode: NoteMode::Browse,
            search_input: String::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn refresh_rows(&mut self) {
        self.rows.replace_items(build_rows(&self.state));
    }

    fn refresh_note_entries(&mut self) {
        self.note_entries.replace_items(visible_entries(&self.state));
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self.state.store.editing(), EditSession::Idle)
    }

    pub fn current_field(&self) -> Option<EditField> {
        let fields = self.state.store.editing().target()?.fields();
        fields.get(self.edit_field % fields.len()).copied()
    }

    pub fn selected_note_topic(&self) -> Option<&str> {
        self.note_entries
            .selected_item()
            .and_then(|&i| self.state.note_topics.entries().get(i))
            .map(String::as_str)
    }

    fn begin_edit(&mut self, target: EditTarget) {
        match self.state.store.begin_edit(target) {
            Ok(()) => {
                self.edit_field = 0;
                self.status = None;
            }
            Err(e) => self.status = Some(Status::error(e.to_string())),
        }
    }

    fn add_topic(&mut self) {
        let id = self.state.store.add_topic();
        self.refresh_rows();
        self.rows.select_item(&Row::Topic(id));
        self.after_add(EditTarget::Topic(id));
    }

    fn add_question(&mut self) {
        let Some(topic_id) = self.rows.selected_item().map(Row::topic_id) else {
            return;
        };
        let Some(question_id) = self.state.store.add_question(topic_id) else {
            return;
        };
        self.refresh_rows();
        self.rows.select_item(&Row::Question {
            topic_id,
            question_id,
        });
        self.after_add(EditTarget::Question {
            topic_id,
            question_id,
        });
    }

    fn after_add(&mut self, target: EditTarget) {
        if self.state.store.is_editing(target) {
            self.edit_field = 0;
            self.status = None;
        } else {
            self.status = Some(Status::error(
                "Added, but another edit is still open: save or cancel it first",
            ));
        }
    }

    fn delete_selected(&mut self) {
        let Some(row) = self.rows.selected_item().copied() else {
            return;
        };
        match row {
            Row::Topic(id) => self.state.store.delete_topic(id),
            Row::Question {
                topic_id,
                question_id,
            } => self.state.store.delete_question(topic_id, question_id),
        }
        self.refresh_rows();
    }

    fn save_notes(&mut self) {
        self.status = Some(match self.state.notes.save_notes() {
            Ok(saved) => Status::info(saved.message()),
            Err(e) => Status::error(e.to_string()),
        });
    }

    fn load_selected_note(&mut self) {
        let Some(topic) = self.selected_note_topic().map(str::to_string) else {
            return;
        };
        self.state.notes.load_topic(&topic);
        self.status = None;
    }

    fn apply_search(&mut self) {
        self.state.note_topics.apply(&self.search_input);
        self.refresh_note_entries();
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.view {
            View::Topics if self.is_editing() => self.handle_edit_key(key, modifiers),
            View::Notes if self.note_mode == NoteMode::Search => self.handle_search_key(key),
            View::Notes if self.note_mode == NoteMode::Insert => {
                self.handle_insert_key(key, modifiers)
            }
            View::Topics => self.handle_topics_key(key, modifiers),
            View::Notes => self.handle_notes_key(key, modifiers),
        }
    }

    // Keys shared by both views in their normal mode.
    fn handle_common_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.state.toggle_theme(),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
                self.view = self.view.prev()
            }
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                self.view = self.view.prev()
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => self.view = self.view.next(),
            _ => {}
        }
    }

    fn handle_topics_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Char('j') | KeyCode::Down => self.rows.next(),
            KeyCode::Char('k') | KeyCode::Up => self.rows.previous(),
            KeyCode::Char('g') => self.rows.first(),
            KeyCode::Char('G') => self.rows.last(),
            KeyCode::Char('a') => self.add_topic(),
            KeyCode::Char('o') => self.add_question(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(row) = self.rows.selected_item().copied() {
                    self.begin_edit(row.target());
                }
            }
            _ => self.handle_common_key(key, modifiers),
        }
    }

    fn handle_edit_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Esc => {
                self.state.store.cancel_edit();
                self.refresh_rows();
            }
            KeyCode::Enter => {
                self.state.store.commit_edit();
                self.refresh_rows();
                self.status = Some(Status::info("Saved"));
            }
            // Rows stay reachable mid-edit so another item can take the session.
            KeyCode::Down => self.rows.next(),
            KeyCode::Up => self.rows.previous(),
            KeyCode::Char('e') if modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(row) = self.rows.selected_item().copied() {
                    self.begin_edit(row.target());
                }
            }
            KeyCode::Char('a') if modifiers.contains(KeyModifiers::CONTROL) => self.add_topic(),
            KeyCode::Char('o') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.add_question()
            }
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => self.prev_field(),
            KeyCode::BackTab => self.prev_field(),
            KeyCode::Tab => self.edit_field = self.edit_field.wrapping_add(1),
            KeyCode::Backspace => {
                if let Some(text) = self.current_field_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(text) = self.current_field_mut() {
                    text.push(c);
                }
            }
            _ => {}
        }
    }

    fn prev_field(&mut self) {
        let len = self
            .state
            .store
            .editing()
            .target()
            .map(|t| t.fields().len())
            .unwrap_or(1);
        self.edit_field = (self.edit_field % len + len - 1) % len;
    }

    fn current_field_mut(&mut self) -> Option<&mut String> {
        let field = self.current_field()?;
        self.state.store.staged_field_mut(field)
    }

    fn handle_notes_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => self.save_notes(),
            KeyCode::Char('s') => self.save_notes(),
            KeyCode::Char('j') | KeyCode::Down => self.note_entries.next(),
            KeyCode::Char('k') | KeyCode::Up => self.note_entries.previous(),
            KeyCode::Char('g') => self.note_entries.first(),
            KeyCode::Char('G') => self.note_entries.last(),
            KeyCode::Enter => self.load_selected_note(),
            KeyCode::Char('i') => self.note_mode = NoteMode::Insert,
            KeyCode::Char('/') => {
                self.search_input = self.state.note_topics.query().to_string();
                self.note_mode = NoteMode::Search;
            }
            KeyCode::Esc if !self.state.note_topics.query().is_empty() => {
                self.search_input.clear();
                self.apply_search();
            }
            _ => self.handle_common_key(key, modifiers),
        }
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.note_mode = NoteMode::Browse;
                self.search_input.clear();
                self.apply_search();
            }
            KeyCode::Enter => self.note_mode = NoteMode::Browse,
            KeyCode::Backspace => {
                self.search_input.pop();
                self.apply_search();
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.apply_search();
            }
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => self.save_notes(),
            KeyCode::Esc => self.note_mode = NoteMode::Browse,
            KeyCode::Enter => self.state.notes.buffer_mut().push('\n'),
            KeyCode::Backspace => {
                self.state.notes.buffer_mut().pop();
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.notes.buffer_mut().push(c)
            }
            _ => {}
        }
    }
}

fn build_rows(state: &AppState) -> Vec<Row> {
    state
        .store
        .topics()
        .iter()
        .flat_map(|topic| {
            std::iter::once(Row::Topic(topic.id)).chain(topic.questions.iter().map(|q| {
                Row::Question {
                    topic_id: topic.id,
                    question_id: q.id,
                }
            }))
        })
        .collect()
}

fn visible_entries(state: &AppState) -> Vec<usize> {
    (0..state.note_topics.entries().len())
        .filter(|&i| state.note_topics.is_visible(i))
        .collect()
}

pub fn run(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(state);
    info!("terminal UI started");

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("terminal UI stopped");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too.
                if key.kind == KeyEventKind::Press {
                    debug!(code = ?key.code, "key");
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
