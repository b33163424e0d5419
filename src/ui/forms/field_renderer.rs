//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus an error line
pub const FIELD_HEIGHT: u16 = 4;

/// How a field is drawn
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Shown in place of an empty value when the field is not focused
    pub placeholder: &'a str,
    pub is_active: bool,
    pub read_only: bool,
    /// Error to display; `None` when valid or not yet touched
    pub error: Option<&'a str>,
}

/// Draw a single-line form field with its error underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_color = if field.error.is_some() {
        Color::Red
    } else if field.is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let value_style = if field.read_only {
        Style::default().fg(Color::Gray)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let (display, style) = if field.value.is_empty() && !field.is_active {
        (field.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        (field.value, value_style)
    };

    let cursor = if field.is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let title = if field.read_only {
        format!(" {} (derived) ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(error) = field.error {
        let line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, chunks[1]);
    }
}
