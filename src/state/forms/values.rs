//! The registration form's value snapshot

use super::field::{FieldName, FileHandle};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Selectable professions. The first entry is the default selection.
pub const PROFESSIONS: [&str; 7] = [
    "Developer",
    "Designer",
    "Engineer",
    "Doctor",
    "Teacher",
    "Artist",
    "Other",
];

/// Format the date of birth is typed in
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current value of every field on the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Derived from `date_of_birth`; `None` when no date could be parsed
    pub age: Option<i32>,
    pub profession: String,
    /// Raw date text as typed; empty means absent
    pub date_of_birth: String,
    pub accept_terms: bool,
    pub photo: Option<FileHandle>,
    pub other_documents: Option<FileHandle>,
}

impl FormValues {
    /// Snapshot the form starts from. The date of birth is pre-filled with
    /// `today`, so the derived age starts at zero.
    pub fn defaults(today: NaiveDate) -> Self {
        let date_of_birth = today.format(DATE_FORMAT).to_string();
        Self {
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            age: age_on(today, today),
            profession: PROFESSIONS[0].to_string(),
            date_of_birth,
            accept_terms: false,
            photo: None,
            other_documents: None,
        }
    }

    /// Current text of a free-text field, `None` for every other field
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FullName => Some(&self.full_name),
            FieldName::Email => Some(&self.email),
            FieldName::Password => Some(&self.password),
            FieldName::ConfirmPassword => Some(&self.confirm_password),
            FieldName::DateOfBirth => Some(&self.date_of_birth),
            _ => None,
        }
    }

    /// Recompute `age` from `date_of_birth` as of `today`
    pub fn derive_age(&mut self, today: NaiveDate) {
        let birth = parse_date_of_birth(&self.date_of_birth);
        self.age = birth.and_then(|birth| age_on(birth, today));
    }
}

/// Parse a typed date of birth. Empty or malformed input yields `None`.
pub fn parse_date_of_birth(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Whole years between `birth` and `today`.
///
/// The year difference, less one when today's month/day falls before the
/// birth month/day. A birth date after `today` has no age.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<i32> {
    today
        .years_since(birth)
        .and_then(|years| i32::try_from(years).ok())
}

/// Index of `profession` in [`PROFESSIONS`], if it is one
pub fn profession_index(profession: &str) -> Option<usize> {
    PROFESSIONS.iter().position(|p| *p == profession)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod age {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_birthday_today_counts_full_year() {
            assert_eq!(age_on(date(2008, 10, 16), date(2026, 10, 16)), Some(18));
        }

        #[test]
        fn test_day_before_birthday() {
            assert_eq!(age_on(date(2008, 10, 17), date(2026, 10, 16)), Some(17));
        }

        #[test]
        fn test_earlier_month_in_year() {
            assert_eq!(age_on(date(1990, 12, 1), date(2026, 3, 1)), Some(35));
        }

        #[test]
        fn test_leap_day_birth_in_common_year() {
            assert_eq!(age_on(date(2004, 2, 29), date(2026, 2, 28)), Some(21));
            assert_eq!(age_on(date(2004, 2, 29), date(2026, 3, 1)), Some(22));
        }

        #[test]
        fn test_future_birth_has_no_age() {
            assert_eq!(age_on(date(2027, 10, 16), date(2026, 10, 16)), None);
        }

        #[test]
        fn test_same_day_is_zero() {
            assert_eq!(age_on(date(2026, 10, 16), date(2026, 10, 16)), Some(0));
        }
    }

    mod parsing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parses_iso_date() {
            assert_eq!(parse_date_of_birth("1990-05-04"), Some(date(1990, 5, 4)));
        }

        #[test]
        fn test_trims_whitespace() {
            assert_eq!(parse_date_of_birth(" 1990-05-04 "), Some(date(1990, 5, 4)));
        }

        #[test]
        fn test_empty_is_none() {
            assert_eq!(parse_date_of_birth(""), None);
        }

        #[test]
        fn test_malformed_is_none() {
            assert_eq!(parse_date_of_birth("1990-13-01"), None);
            assert_eq!(parse_date_of_birth("04/05/1990"), None);
            assert_eq!(parse_date_of_birth("1990-05"), None);
        }
    }

    mod values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_defaults() {
            let values = FormValues::defaults(date(2026, 10, 16));
            assert_eq!(values.full_name, "");
            assert_eq!(values.profession, "Developer");
            assert_eq!(values.date_of_birth, "2026-10-16");
            assert_eq!(values.age, Some(0));
            assert!(!values.accept_terms);
            assert!(values.photo.is_none());
            assert!(values.other_documents.is_none());
        }

        #[test]
        fn test_derive_age_from_date() {
            let today = date(2026, 10, 16);
            let mut values = FormValues::defaults(today);
            values.date_of_birth = "1990-01-01".to_string();
            values.derive_age(today);
            assert_eq!(values.age, Some(36));
        }

        #[test]
        fn test_derive_age_from_malformed_date_clears_it() {
            let today = date(2026, 10, 16);
            let mut values = FormValues::defaults(today);
            values.date_of_birth = "not a date".to_string();
            values.derive_age(today);
            assert_eq!(values.age, None);
        }

        #[test]
        fn test_serializes_with_camel_case_keys() {
            let values = FormValues::defaults(date(2026, 10, 16));
            let json = serde_json::to_value(&values).unwrap();
            assert!(json.get("confirmPassword").is_some());
            assert!(json.get("dateOfBirth").is_some());
            assert!(json.get("otherDocuments").is_some());
            assert_eq!(json["acceptTerms"], serde_json::Value::Bool(false));
        }

        #[test]
        fn test_text_covers_exactly_the_text_fields() {
            let values = FormValues::defaults(date(2026, 10, 16));
            for field in FieldName::ALL {
                assert_eq!(values.text(field).is_some(), field.is_text(), "{field}");
            }
            assert_eq!(values.text(FieldName::DateOfBirth), Some("2026-10-16"));
        }

        #[test]
        fn test_profession_index() {
            assert_eq!(profession_index("Developer"), Some(0));
            assert_eq!(profession_index("Other"), Some(6));
            assert_eq!(profession_index("Astronaut"), None);
        }
    }
}
