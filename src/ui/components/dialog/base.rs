//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Message content, rendered line by line without wrapping
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_width = config.max_width.min(area.width);
    let max_line_width = max_width.saturating_sub(padding + 2) as usize;

    let lines: Vec<String> = config
        .message
        .lines()
        .map(|line| truncate_line(line, max_line_width))
        .collect();

    // Height: title + blank + message lines + blank (if hint) + hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height = (2 + lines.len() as u16 + hint_lines + 2).max(5);
    let dialog_height = dialog_height.min(area.height);

    // Hint stays visible on short terminals; message lines give way
    let room = dialog_height.saturating_sub(4 + hint_lines) as usize;
    let lines = clip_lines(lines, room);

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.len()) as u16;
    let dialog_width = (content_width + padding + 2).min(max_width);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in lines {
        content.push(Line::from(line));
    }

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Cut `line` to `max_width` characters, marking the cut with an ellipsis
fn truncate_line(line: &str, max_width: usize) -> String {
    if line.chars().count() <= max_width {
        return line.to_string();
    }
    let mut truncated: String = line.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// Keep at most `room` lines. When some are dropped, the last kept line says how many.
fn clip_lines(mut lines: Vec<String>, room: usize) -> Vec<String> {
    if lines.len() <= room {
        return lines;
    }
    if room == 0 {
        return Vec::new();
    }
    let hidden = lines.len() - (room - 1);
    lines.truncate(room - 1);
    lines.push(format!("… {hidden} more lines"));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_short_line_is_untouched() {
        assert_eq!(truncate_line("\"age\": 36,", 20), "\"age\": 36,");
    }

    #[test]
    fn test_long_line_ends_with_ellipsis() {
        let line = truncate_line("\"name\": \"a-very-long-photo-name.png\"", 16);
        assert_eq!(line, "\"name\": \"a-very…");
        assert_eq!(line.chars().count(), 16);
    }

    #[test]
    fn test_lines_that_fit_are_kept() {
        let lines = owned(&["{", "}"]);
        assert_eq!(clip_lines(lines.clone(), 2), lines);
    }

    #[test]
    fn test_dropped_lines_are_counted() {
        let lines = owned(&["{", "  \"a\": 1,", "  \"b\": 2,", "  \"c\": 3", "}"]);
        assert_eq!(
            clip_lines(lines, 3),
            owned(&["{", "  \"a\": 1,", "… 3 more lines"])
        );
    }

    #[test]
    fn test_no_room_shows_nothing() {
        assert!(clip_lines(owned(&["{", "}"]), 0).is_empty());
    }

    #[test]
    fn test_short_terminal_marks_clipped_submission() {
        use ratatui::{backend::TestBackend, Terminal};

        let message = (0..30)
            .map(|i| format!("  \"line{i}\": {i},"))
            .collect::<Vec<_>>()
            .join("\n");
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| {
                render_dialog(
                    frame,
                    DialogConfig {
                        title: "Submitted",
                        title_color: Color::Green,
                        border_color: Color::Green,
                        message: &message,
                        hint: Some(vec![Span::raw("Press Enter")]),
                        max_width: 72,
                    },
                )
            })
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("more lines"));
        assert!(screen.contains("Press Enter"));
    }
}
