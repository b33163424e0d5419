//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, Clock, FieldName, FieldValue, FileHandle, FormButton, FormError, FormStore,
    StatusKind, SubmitOutcome, FOCUSABLE_FIELDS,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            state: AppState::new(FormStore::new(clock)),
            config,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// JSON shown in the acknowledgement dialog, passwords masked per config
    pub fn acknowledgement_json(&self) -> Option<String> {
        let submission = self.state.acknowledgement.as_ref()?;
        let shown = if self.config.mask_passwords() {
            submission.redacted()
        } else {
            submission.clone()
        };
        shown.to_pretty_json().ok()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }

        if self.state.acknowledgement.is_some() {
            self.handle_acknowledgement_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit()?,
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            _ => match self.state.active_field() {
                Some(field) => self.handle_field_key(field, key, ctrl),
                None => self.handle_actions_key(key)?,
            },
        }
        Ok(())
    }

    fn handle_field_key(&mut self, field: FieldName, key: KeyEvent, ctrl: bool) {
        match field {
            f if f.is_text() => match key.code {
                KeyCode::Char(c) if !ctrl => self.edit_text(f, |text| text.push(c)),
                KeyCode::Backspace => self.edit_text(f, |text| {
                    text.pop();
                }),
                KeyCode::Enter => self.state.next_field(),
                _ => {}
            },
            FieldName::Profession => match key.code {
                KeyCode::Left => self.cycle_profession(-1),
                KeyCode::Right | KeyCode::Char(' ') => self.cycle_profession(1),
                KeyCode::Enter => self.state.next_field(),
                _ => {}
            },
            FieldName::AcceptTerms => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    let accepted = !self.state.store.values().accept_terms;
                    let result = self.state.store.set_field(field, accepted);
                    self.apply(result);
                }
            }
            FieldName::Photo | FieldName::OtherDocuments => match key.code {
                KeyCode::Char(c) if !ctrl => self.state.file_path_input.push(c),
                KeyCode::Backspace => {
                    self.state.file_path_input.pop();
                }
                KeyCode::Enter => self.select_file(field),
                KeyCode::Delete => {
                    self.state.file_path_input.clear();
                    let result = self.state.store.clear_file(field);
                    self.apply(result);
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_actions_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Left => self.state.prev_button(),
            KeyCode::Right => self.state.next_button(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.selected_button() {
                FormButton::Submit => self.submit()?,
                FormButton::Reset => self.reset(),
            },
            _ => {}
        }
        Ok(())
    }

    fn handle_acknowledgement_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.state.acknowledgement = None;
                self.copy_message = None;
            }
            KeyCode::Char('y') => {
                if let Some(json) = self.acknowledgement_json() {
                    match self.copy_to_clipboard(&json) {
                        Ok(()) => self.copy_message = Some("Copied submission".to_string()),
                        Err(err) => {
                            tracing::warn!("Clipboard unavailable: {err}");
                            self.copy_message = Some("Copy failed".to_string());
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn edit_text(&mut self, field: FieldName, edit: impl FnOnce(&mut String)) {
        let mut text = self
            .state
            .store
            .values()
            .text(field)
            .unwrap_or_default()
            .to_string();
        edit(&mut text);
        let result = self.state.store.set_field(field, text);
        self.apply(result);
    }

    fn cycle_profession(&mut self, step: isize) {
        let profession = self.state.cycled_profession(step);
        let result = self
            .state
            .store
            .set_field(FieldName::Profession, profession);
        self.apply(result);
    }

    fn select_file(&mut self, field: FieldName) {
        let input = self.state.file_path_input.trim().to_string();
        if input.is_empty() {
            return;
        }

        match FileHandle::select(field, Path::new(&input)) {
            Ok(handle) => {
                tracing::debug!(%field, name = %handle.name, size = handle.size, "file selected");
                self.state.file_path_input.clear();
                let result = self
                    .state
                    .store
                    .set_field(field, FieldValue::File(Some(handle)));
                self.apply(result);
            }
            Err(err) => {
                tracing::warn!("File selection failed: {err}");
                self.state.set_status(StatusKind::Error, err.to_string());
            }
        }
    }

    fn apply(&mut self, result: Result<(), FormError>) {
        match result {
            Ok(()) => self.state.status_message = None,
            Err(err) => self.state.set_status(StatusKind::Error, err.to_string()),
        }
    }

    fn submit(&mut self) -> Result<()> {
        match self.state.store.submit() {
            SubmitOutcome::Accepted(submission) => {
                let json = submission.redacted().to_pretty_json()?;
                tracing::info!("Form values:\n{json}");

                self.state.acknowledgement = Some(submission);
                self.state.active_form_field = 0;
                self.state.file_path_input.clear();
                self.state
                    .set_status(StatusKind::Info, "Form is validated! Submitting the form");

                if self.config.copy_submission_to_clipboard() {
                    if let Some(shown) = self.acknowledgement_json() {
                        if let Err(err) = self.copy_to_clipboard(&shown) {
                            tracing::warn!("Clipboard unavailable: {err}");
                        } else {
                            self.copy_message = Some("Copied submission".to_string());
                        }
                    }
                }
            }
            SubmitOutcome::Rejected(errors) => {
                // Age is derived, so its errors are fixed through the date of birth
                let first = errors.keys().next().map(|field| match field {
                    FieldName::Age => FieldName::DateOfBirth,
                    other => *other,
                });
                if let Some(index) =
                    first.and_then(|field| FOCUSABLE_FIELDS.iter().position(|f| *f == field))
                {
                    self.state.active_form_field = index;
                }
                self.state.file_path_input.clear();
                let noun = if errors.len() == 1 { "field needs" } else { "fields need" };
                self.state.set_status(
                    StatusKind::Error,
                    format!("{} {noun} attention", errors.len()),
                );
            }
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.state.store.reset();
        self.state.active_form_field = 0;
        self.state.form_selected_button = 0;
        self.state.file_path_input.clear();
        self.state.set_status(StatusKind::Info, "Form reset");
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
