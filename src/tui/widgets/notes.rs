use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::tui::ui::Palette;
use crate::tui::{App, NoteMode};

pub fn draw(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    draw_topic_list(f, app, palette, chunks[0]);
    draw_editor(f, app, palette, chunks[1]);
}

fn draw_topic_list(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let filter = &app.state.note_topics;
    let title = if filter.query().is_empty() {
        " Topics ".to_string()
    } else {
        format!(" Topics (search: {}) ", filter.query())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(palette.accent))
        .style(Style::default().fg(palette.fg).bg(palette.card));

    if app.note_entries.items.is_empty() {
        let paragraph = Paragraph::new("No matching topics")
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let bound = app.state.notes.binding().topic();
    let items: Vec<ListItem> = app
        .note_entries
        .items
        .iter()
        .filter_map(|&i| filter.entries().get(i))
        .map(|name| {
            let has_note = app.state.notes.note(name).is_some();
            let marker = if bound == Some(name.as_str()) {
                "● "
            } else if has_note {
                "· "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::raw(name.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.note_entries.selected);

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_editor(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let notes = &app.state.notes;
    let title = match notes.binding().topic() {
        Some(topic) => format!(" Notes: {} ", topic),
        None => " Notes (no topic selected) ".to_string(),
    };

    let inserting = app.note_mode == NoteMode::Insert;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(palette.accent))
        .border_style(Style::default().fg(if inserting {
            palette.accent
        } else {
            palette.muted
        }))
        .style(Style::default().fg(palette.fg).bg(palette.input));

    let mut lines: Vec<Line> = notes.buffer().split('\n').map(Line::from).collect();
    if inserting {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("█", Style::default().fg(palette.accent)));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
