use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::widgets::{notes, topics};
use super::{App, NoteMode, StatusKind, View};
use crate::state::Theme;

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub card: Color,
    pub highlight: Color,
    pub input: Color,
    pub bar: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                bg: Color::Black,
                fg: Color::White,
                muted: Color::Gray,
                accent: Color::Yellow,
                card: Color::Rgb(31, 41, 55),
                highlight: Color::Rgb(75, 85, 99),
                input: Color::Rgb(55, 65, 81),
                bar: Color::DarkGray,
            },
            Theme::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                card: Color::Rgb(249, 250, 251),
                highlight: Color::Rgb(229, 231, 235),
                input: Color::Rgb(243, 244, 246),
                bar: Color::Gray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.state.theme);
    f.render_widget(Block::default().style(palette.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    draw_tabs(f, app, &palette, chunks[0]);
    draw_content(f, app, &palette, chunks[1]);
    draw_status(f, app, &palette, chunks[2]);
    draw_help_bar(f, app, &palette, chunks[3]);
}

fn draw_tabs(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let tab_titles = vec!["Topics", "Notes"];
    let selected = match app.view {
        View::Topics => 0,
        View::Notes => 1,
    };

    let title = format!(" DSA Revision Companion ({}) ", app.state.theme.label());
    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .select(selected)
        .style(palette.base())
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn draw_content(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    match app.view {
        View::Topics => topics::draw(f, app, palette, area),
        View::Notes => notes::draw(f, app, palette, area),
    }
}

fn draw_status(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => Color::Green,
        StatusKind::Error => Color::Red,
    };
    let line = Paragraph::new(Span::styled(
        format!(" {}", status.text),
        Style::default().fg(color).bg(palette.bg),
    ));
    f.render_widget(line, area);
}

fn key(k: &str) -> Span<'_> {
    Span::styled(k, Style::default().fg(Color::Cyan))
}

fn draw_help_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let mut spans = Vec::new();

    match app.view {
        View::Topics if app.is_editing() => {
            let field = app.current_field().map(|f| f.label()).unwrap_or("");
            spans.extend(vec![
                Span::styled(format!("Editing {}  ", field), Style::default().fg(palette.accent)),
                key("<Tab>"),
                Span::raw(" Field  "),
                key("↑/↓ ^e"),
                Span::raw(" Switch  "),
                key("^a/^o"),
                Span::raw(" Add  "),
                key("<CR>"),
                Span::raw(" Save  "),
                key("<Esc>"),
                Span::raw(" Cancel"),
            ]);
        }
        View::Topics => {
            spans.extend(vec![
                key("j/k"),
                Span::raw(" Nav  "),
                key("a"),
                Span::raw(" Topic  "),
                key("o"),
                Span::raw(" Question  "),
                key("e/<CR>"),
                Span::raw(" Edit  "),
                key("d"),
                Span::raw(" Delete  "),
            ]);
        }
        View::Notes if app.note_mode == NoteMode::Search => {
            spans.extend(vec![
                Span::styled("/", Style::default().fg(Color::Yellow)),
                Span::raw(app.search_input.as_str()),
                Span::styled("█", Style::default().fg(Color::Yellow)),
                Span::raw(" | "),
                key("<CR>"),
                Span::raw(" Keep  "),
                key("<Esc>"),
                Span::raw(" Clear"),
            ]);
        }
        View::Notes if app.note_mode == NoteMode::Insert => {
            spans.extend(vec![
                Span::styled("-- INSERT --  ", Style::default().fg(palette.accent)),
                key("^s"),
                Span::raw(" Save  "),
                key("<Esc>"),
                Span::raw(" Done"),
            ]);
        }
        View::Notes => {
            spans.extend(vec![
                key("j/k"),
                Span::raw(" Nav  "),
                key("<CR>"),
                Span::raw(" Load  "),
                key("i"),
                Span::raw(" Write  "),
                key("s"),
                Span::raw(" Save  "),
                key("/"),
                Span::raw(" Search  "),
            ]);
        }
    }

    let typing = match app.view {
        View::Topics => app.is_editing(),
        View::Notes => app.note_mode != NoteMode::Browse,
    };
    if !typing {
        spans.extend(vec![
            key("h/l"),
            Span::raw(" Views  "),
            key("t"),
            Span::raw(" Theme  "),
            key("q"),
            Span::raw(" Quit"),
        ]);
    }

    let help =
        Paragraph::new(Line::from(spans)).style(Style::default().fg(palette.fg).bg(palette.bar));

    f.render_widget(help, area);
}
