//! Form state store: values, touched fields and the current error map

use super::clock::Clock;
use super::error::FormError;
use super::field::{FieldName, FieldValue};
use super::validation::{validate, FieldErrorMap};
use super::values::FormValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Fields the user has interacted with
pub type TouchedSet = BTreeSet<FieldName>;

const MASK: &str = "********";

/// An accepted form snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
}

impl Submission {
    fn new(values: FormValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
        }
    }

    /// Copy with both password fields masked
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.values.password = MASK.to_string();
        copy.values.confirm_password = MASK.to_string();
        copy
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted(Submission),
    Rejected(FieldErrorMap),
}

/// Owns the registration form's state.
///
/// Every mutation finishes its value update, age recomputation and full
/// re-validation before returning.
pub struct FormStore {
    values: FormValues,
    touched: TouchedSet,
    errors: FieldErrorMap,
    clock: Box<dyn Clock>,
}

impl FormStore {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        let values = FormValues::defaults(clock.today());
        Self {
            values,
            touched: TouchedSet::new(),
            errors: FieldErrorMap::new(),
            clock,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn errors(&self) -> &FieldErrorMap {
        &self.errors
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Error to display for `field`: only once the field has been touched
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    /// Overwrite one field, recompute derived values, re-validate and mark
    /// the field touched
    pub fn set_field(
        &mut self,
        field: FieldName,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let value = value.into();
        let values = &mut self.values;
        match (field, value) {
            (FieldName::Age, _) => return Err(FormError::ReadOnlyField(field)),
            (FieldName::FullName, FieldValue::Text(text)) => values.full_name = text,
            (FieldName::Email, FieldValue::Text(text)) => values.email = text,
            (FieldName::Password, FieldValue::Text(text)) => values.password = text,
            (FieldName::ConfirmPassword, FieldValue::Text(text)) => values.confirm_password = text,
            (FieldName::Profession, FieldValue::Text(text)) => values.profession = text,
            (FieldName::DateOfBirth, FieldValue::Text(text)) => {
                values.date_of_birth = text;
                values.derive_age(self.clock.today());
            }
            (FieldName::AcceptTerms, FieldValue::Flag(flag)) => values.accept_terms = flag,
            (FieldName::Photo, FieldValue::File(file)) => values.photo = file,
            (FieldName::OtherDocuments, FieldValue::File(file)) => values.other_documents = file,
            (field, value) => {
                return Err(FormError::TypeMismatch {
                    field,
                    got: value.kind(),
                })
            }
        }

        self.touched.insert(field);
        self.revalidate();
        tracing::trace!(%field, errors = self.errors.len(), "field updated");
        Ok(())
    }

    /// Mark `field` touched without changing its value, as when focus leaves it
    pub fn mark_touched(&mut self, field: FieldName) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// Remove the file held by `field`
    pub fn clear_file(&mut self, field: FieldName) -> Result<(), FormError> {
        if !field.is_file() {
            return Err(FormError::NotAFileField(field));
        }
        self.set_field(field, FieldValue::File(None))
    }

    /// Validate once more and accept the snapshot when nothing fails.
    ///
    /// An accepted submission resets the store. A rejected one marks every
    /// field touched so all errors become visible.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.revalidate();

        if self.errors.is_empty() {
            let submission = Submission::new(self.values.clone());
            tracing::info!(id = %submission.id, "registration accepted");
            self.reset();
            SubmitOutcome::Accepted(submission)
        } else {
            self.touched.extend(FieldName::ALL);
            tracing::debug!(errors = self.errors.len(), "registration rejected");
            SubmitOutcome::Rejected(self.errors.clone())
        }
    }

    /// Restore the default snapshot and forget touched fields and errors
    pub fn reset(&mut self) {
        self.values = FormValues::defaults(self.clock.today());
        self.touched.clear();
        self.errors.clear();
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.values);
    }
}
