use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{Difficulty, Question, Topic, TopicId};
use crate::store::{EditField, EditSession};
use crate::tui::ui::Palette;
use crate::tui::{App, Row};

pub fn draw(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let store = &app.state.store;
    let title = format!(" Topics ({}) ", store.topics().len());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(palette.accent))
        .style(Style::default().fg(palette.fg).bg(palette.card));

    if app.rows.items.is_empty() {
        let paragraph = Paragraph::new("No topics yet. Press a to add one.")
            .style(Style::default().fg(palette.muted))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .rows
        .items
        .iter()
        .filter_map(|row| match *row {
            Row::Topic(id) => store.topic(id).map(|t| topic_item(app, palette, t)),
            Row::Question {
                topic_id,
                question_id,
            } => store
                .question(topic_id, question_id)
                .map(|q| question_item(app, palette, topic_id, q)),
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
    state.select(app.rows.selected);

    f.render_stateful_widget(list, area, &mut state);
}

fn topic_item<'a>(app: &'a App, palette: &Palette, topic: &'a Topic) -> ListItem<'a> {
    let count = match topic.questions.len() {
        1 => "  (1 question)".to_string(),
        n => format!("  ({} questions)", n),
    };

    let name = match app.state.store.editing() {
        EditSession::Topic { id, category } if *id == topic.id => {
            input_span(category, true, palette)
        }
        _ => Span::styled(
            topic.category.as_str(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    };

    ListItem::new(Line::from(vec![
        name,
        Span::styled(count, Style::default().fg(palette.muted)),
    ]))
}

fn question_item<'a>(
    app: &'a App,
    palette: &Palette,
    topic_id: TopicId,
    question: &'a Question,
) -> ListItem<'a> {
    if let EditSession::Question {
        topic_id: editing_topic,
        staged,
    } = app.state.store.editing()
    {
        if *editing_topic == topic_id && staged.id == question.id {
            return staged_question_item(app, palette, staged);
        }
    }

    let difficulty = question.difficulty_level();
    let lines = vec![
        Line::from(vec![
            Span::raw("  • "),
            Span::styled(
                question.title.as_str(),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", question.difficulty),
                Style::default().fg(difficulty_color(difficulty, palette)),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "    Difficulty: {} | Time Complexity: {} | Space Complexity: {}",
                question.difficulty,
                question.time_complexity_label(),
                question.space_complexity_label()
            ),
            Style::default().fg(palette.muted),
        )),
        Line::from(vec![
            Span::styled("    Solution: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(question.solution_label()),
        ]),
    ];

    ListItem::new(lines)
}

fn staged_question_item<'a>(app: &'a App, palette: &Palette, staged: &'a Question) -> ListItem<'a> {
    let focused = app.current_field();
    let lines: Vec<Line> = EditField::QUESTION
        .iter()
        .filter_map(|field| {
            let value = field.question_value(staged)?;
            let is_focused = focused == Some(*field);
            Some(Line::from(vec![
                Span::styled(
                    format!("    {:<18}", format!("{}:", field.label())),
                    Style::default().fg(if is_focused {
                        palette.accent
                    } else {
                        palette.muted
                    }),
                ),
                input_span(value, is_focused, palette),
            ]))
        })
        .collect();

    ListItem::new(lines)
}

fn input_span<'a>(value: &'a str, focused: bool, palette: &Palette) -> Span<'a> {
    let style = Style::default().fg(palette.fg).bg(palette.input);
    if focused {
        Span::styled(format!("{}█", value), style)
    } else {
        Span::styled(value, style)
    }
}

fn difficulty_color(difficulty: Difficulty, palette: &Palette) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
        Difficulty::Other => palette.muted,
    }
}
