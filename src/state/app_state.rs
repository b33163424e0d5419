//! UI-facing application state for the registration screen

use super::forms::{FieldName, FormStore, Submission, PROFESSIONS};

/// Fields that take keyboard focus. Age is derived and skipped.
pub const FOCUSABLE_FIELDS: [FieldName; 9] = [
    FieldName::FullName,
    FieldName::Email,
    FieldName::Profession,
    FieldName::DateOfBirth,
    FieldName::Photo,
    FieldName::OtherDocuments,
    FieldName::Password,
    FieldName::ConfirmPassword,
    FieldName::AcceptTerms,
];

/// Index of the action panel in the focus cycle
pub const ACTIONS_FOCUS: usize = FOCUSABLE_FIELDS.len();

/// Buttons in the action panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Submit,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Submit, FormButton::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            FormButton::Submit => "Submit",
            FormButton::Reset => "Reset",
        }
    }
}

/// Severity of the status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Main application state
pub struct AppState {
    pub store: FormStore,
    /// Position in the focus cycle; `ACTIONS_FOCUS` is the action panel
    pub active_form_field: usize,
    pub form_selected_button: usize,
    /// Path typed into the focused file field, not yet selected
    pub file_path_input: String,
    pub status_message: Option<(StatusKind, String)>,
    /// Accepted submission awaiting acknowledgement
    pub acknowledgement: Option<Submission>,
}

impl AppState {
    pub fn new(store: FormStore) -> Self {
        Self {
            store,
            active_form_field: 0,
            form_selected_button: 0,
            file_path_input: String::new(),
            status_message: None,
            acknowledgement: None,
        }
    }

    /// Field holding focus, `None` while on the action panel
    pub fn active_field(&self) -> Option<FieldName> {
        FOCUSABLE_FIELDS.get(self.active_form_field).copied()
    }

    pub fn is_action_panel_focused(&self) -> bool {
        self.active_form_field == ACTIONS_FOCUS
    }

    pub fn selected_button(&self) -> FormButton {
        FormButton::ALL[self.form_selected_button % FormButton::ALL.len()]
    }

    /// Move focus forward, treating the field being left as blurred
    pub fn next_field(&mut self) {
        self.blur();
        self.active_form_field = (self.active_form_field + 1) % (ACTIONS_FOCUS + 1);
    }

    pub fn prev_field(&mut self) {
        self.blur();
        self.active_form_field = if self.active_form_field == 0 {
            ACTIONS_FOCUS
        } else {
            self.active_form_field - 1
        };
    }

    pub fn next_button(&mut self) {
        self.form_selected_button = (self.form_selected_button + 1) % FormButton::ALL.len();
    }

    pub fn prev_button(&mut self) {
        self.form_selected_button = if self.form_selected_button == 0 {
            FormButton::ALL.len() - 1
        } else {
            self.form_selected_button - 1
        };
    }

    fn blur(&mut self) {
        if let Some(field) = self.active_field() {
            self.store.mark_touched(field);
        }
        self.file_path_input.clear();
    }

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status_message = Some((kind, message.into()));
    }

    /// Text shown inside the input box for `field`
    pub fn display_value(&self, field: FieldName, mask_passwords: bool) -> String {
        let values = self.store.values();
        match field {
            FieldName::FullName | FieldName::Email | FieldName::DateOfBirth => {
                values.text(field).unwrap_or_default().to_string()
            }
            FieldName::Password | FieldName::ConfirmPassword => {
                let secret = values.text(field).unwrap_or_default();
                if mask_passwords {
                    "•".repeat(secret.chars().count())
                } else {
                    secret.to_string()
                }
            }
            FieldName::Age => values
                .age
                .map(|age| age.to_string())
                .unwrap_or_else(|| "-".to_string()),
            FieldName::Profession => format!("◀ {} ▶", values.profession),
            FieldName::AcceptTerms => {
                if values.accept_terms {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            FieldName::Photo | FieldName::OtherDocuments => {
                if self.active_field() == Some(field) && !self.file_path_input.is_empty() {
                    return self.file_path_input.clone();
                }
                let file = if field == FieldName::Photo {
                    &values.photo
                } else {
                    &values.other_documents
                };
                file.as_ref()
                    .map(|f| format!("{} ({})", f.name, f.display_size()))
                    .unwrap_or_default()
            }
        }
    }

    /// Profession `step` places away from the current one, wrapping around.
    /// An unknown current value restarts from the first profession.
    pub fn cycled_profession(&self, step: isize) -> &'static str {
        let len = PROFESSIONS.len() as isize;
        let next = match super::forms::profession_index(&self.store.values().profession) {
            Some(index) => (index as isize + step).rem_euclid(len),
            None => 0,
        };
        PROFESSIONS[next as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{Clock, FileHandle};
    use chrono::NaiveDate;

    struct FixedClock;

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        }
    }

    fn create_test_state() -> AppState {
        AppState::new(FormStore::new(Box::new(FixedClock)))
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_starts_on_first_field() {
            let state = create_test_state();
            assert_eq!(state.active_field(), Some(FieldName::FullName));
            assert!(!state.is_action_panel_focused());
        }

        #[test]
        fn test_age_is_never_focused() {
            let mut state = create_test_state();
            for _ in 0..=ACTIONS_FOCUS {
                assert_ne!(state.active_field(), Some(FieldName::Age));
                state.next_field();
            }
        }

        #[test]
        fn test_next_field_wraps_through_actions() {
            let mut state = create_test_state();
            for _ in 0..ACTIONS_FOCUS {
                state.next_field();
            }
            assert!(state.is_action_panel_focused());
            assert_eq!(state.active_field(), None);
            state.next_field();
            assert_eq!(state.active_form_field, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_actions() {
            let mut state = create_test_state();
            state.prev_field();
            assert!(state.is_action_panel_focused());
        }

        #[test]
        fn test_leaving_a_field_marks_it_touched() {
            let mut state = create_test_state();
            state.next_field();
            assert!(state.store.is_touched(FieldName::FullName));
            assert!(!state.store.is_touched(FieldName::Email));
        }

        #[test]
        fn test_leaving_a_file_field_drops_pending_path() {
            let mut state = create_test_state();
            state.active_form_field = 4;
            state.file_path_input.push_str("/tmp/me.png");
            state.next_field();
            assert!(state.file_path_input.is_empty());
        }

        #[test]
        fn test_buttons_wrap() {
            let mut state = create_test_state();
            assert_eq!(state.selected_button(), FormButton::Submit);
            state.prev_button();
            assert_eq!(state.selected_button(), FormButton::Reset);
            state.next_button();
            assert_eq!(state.selected_button(), FormButton::Submit);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn test_passwords_are_masked() {
            let mut state = create_test_state();
            state.store.set_field(FieldName::Password, "Secret1!").unwrap();
            assert_eq!(state.display_value(FieldName::Password, true), "••••••••");
            assert_eq!(state.display_value(FieldName::Password, false), "Secret1!");
        }

        #[test]
        fn test_age_and_terms() {
            let mut state = create_test_state();
            assert_eq!(state.display_value(FieldName::Age, true), "0");
            assert_eq!(state.display_value(FieldName::AcceptTerms, true), "[ ]");

            state.store.set_field(FieldName::DateOfBirth, "bad").unwrap();
            state.store.set_field(FieldName::AcceptTerms, true).unwrap();
            assert_eq!(state.display_value(FieldName::Age, true), "-");
            assert_eq!(state.display_value(FieldName::AcceptTerms, true), "[x]");
        }

        #[test]
        fn test_file_field_shows_pending_path_while_focused() {
            let mut state = create_test_state();
            state
                .store
                .set_field(FieldName::Photo, FileHandle::new("me.png", 2_000))
                .unwrap();
            assert_eq!(state.display_value(FieldName::Photo, true), "me.png (2.0 KB)");

            state.active_form_field = 4;
            state.file_path_input.push_str("/tmp/other.png");
            assert_eq!(state.display_value(FieldName::Photo, true), "/tmp/other.png");
        }

        #[test]
        fn test_profession_cycles() {
            let mut state = create_test_state();
            assert_eq!(state.cycled_profession(1), "Designer");
            assert_eq!(state.cycled_profession(-1), "Other");

            state.store.set_field(FieldName::Profession, "Astronaut").unwrap();
            assert_eq!(state.cycled_profession(1), "Developer");
        }
    }
}
