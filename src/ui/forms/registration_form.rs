//! Registration form rendering

use super::field_renderer::{draw_field, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{is_valid, FieldName, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fields per column; the form is laid out in two columns
const FIELDS_PER_COLUMN: usize = 5;

/// Draw the registration form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.state.is_action_panel_focused() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (column, fields) in FieldName::ALL.chunks(FIELDS_PER_COLUMN).enumerate() {
        let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); fields.len()];
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .horizontal_margin(1)
            .split(columns[column]);

        for (row, field) in fields.iter().enumerate() {
            draw_form_field(frame, rows[row], app, *field);
        }
    }
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, field: FieldName) {
    let value = app
        .state
        .display_value(field, app.config.mask_passwords());
    let placeholder = if field.is_file() {
        "(no file)"
    } else {
        "(empty)"
    };

    draw_field(
        frame,
        area,
        &FieldView {
            label: field.label(),
            value: &value,
            placeholder,
            is_active: app.state.active_field() == Some(field),
            read_only: field == FieldName::Age,
            error: app.state.store.visible_error(field),
        },
    );
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.is_action_panel_focused();
    let selected = app.state.selected_button();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Length(1),             // spacer
            Constraint::Min(0),                // Help text
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        FormButton::Submit.label(),
        is_focused && selected == FormButton::Submit,
        Color::Green,
    );

    render_action_button(
        frame,
        button_chunks[1],
        FormButton::Reset.label(),
        is_focused && selected == FormButton::Reset,
        Color::Gray,
    );

    let store = &app.state.store;
    let progress = if is_valid(store.values()) {
        Span::styled("Ready to submit", Style::default().fg(Color::Green))
    } else if store.errors().is_empty() {
        Span::raw("")
    } else {
        Span::styled(
            format!("{} to fix", store.errors().len()),
            Style::default().fg(Color::Red),
        )
    };

    let help = Paragraph::new(vec![
        Line::from(format!(
            "Touched {}/{}",
            store.touched().len(),
            FieldName::ALL.len()
        )),
        Line::from(progress),
        Line::from(""),
        Line::from(Span::styled(
            format!("{SUBMIT_SHORTCUT} submit"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("{RESET_SHORTCUT} reset"),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(help, button_chunks[3]);
}
