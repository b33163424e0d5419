//! Layout components (main area, status bar)

use crate::app::App;
use crate::platform::{CLEAR_FILE_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldName, StatusKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // Field-specific hints
    let hints = get_field_hints(app.state.active_field());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some((kind, message)) = &app.state.status_message {
        let color = match kind {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused field
fn get_field_hints(field: Option<FieldName>) -> String {
    let common = format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset");
    match field {
        Some(FieldName::Profession) => format!("←/→:choose  {common}"),
        Some(FieldName::AcceptTerms) => format!("Space:toggle  {common}"),
        Some(FieldName::Photo | FieldName::OtherDocuments) => {
            format!("type path  Enter:select  {CLEAR_FILE_SHORTCUT}:clear  {common}")
        }
        Some(_) => common,
        None => format!("←/→:button  Enter:press  {common}"),
    }
}
