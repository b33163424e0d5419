//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    forms::draw_registration(frame, main_area, app);

    layout::draw_status_bar(frame, app);

    // Acknowledgement overlays everything else
    if let Some(json) = app.acknowledgement_json() {
        components::render_acknowledgement_dialog(frame, &json, app.copy_message.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{Clock, FieldName};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    struct FixedClock;

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        }
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn create_test_app() -> App {
        App::new(TuiConfig::default(), Box::new(FixedClock))
    }

    #[test]
    fn test_draws_every_field_label() {
        let screen = render(&create_test_app());
        assert!(screen.contains("Register"));
        assert!(screen.contains("Full Name"));
        assert!(screen.contains("Confirm Password"));
        assert!(screen.contains("Submit"));
        assert!(screen.contains("Reset"));
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut app = create_test_app();
        app.state.store.set_field(FieldName::Email, "ada").unwrap();
        let screen = render(&app);
        assert!(screen.contains("Invalid email"));
        assert!(!screen.contains("Full name is required"));
    }

    #[test]
    fn test_rejected_submit_shows_all_errors() {
        let mut app = create_test_app();
        app.state.store.submit();
        let screen = render(&app);
        assert!(screen.contains("Full name is required"));
        assert!(screen.contains("Please upload a photo"));
    }
}
