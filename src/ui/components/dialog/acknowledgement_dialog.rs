//! Acknowledgement shown after a successful submit

use super::base::{render_dialog, DialogConfig};
use crate::platform::COPY_SHORTCUT;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the accepted submission's JSON in a centered overlay
pub fn render_acknowledgement_dialog(frame: &mut Frame, json: &str, copy_message: Option<&str>) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" to dismiss, "),
        Span::styled(COPY_SHORTCUT, key_style),
        Span::raw(" to copy"),
    ];
    if let Some(message) = copy_message {
        hint.push(Span::raw("  "));
        hint.push(Span::styled(message, Style::default().fg(Color::Green)));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Form is validated! Submitting the form",
            title_color: Color::Green,
            border_color: Color::Green,
            message: json,
            hint: Some(hint),
            max_width: 72,
        },
    );
}
