//! Declarative validation schema for the registration form
//!
//! Each field owns an ordered list of rules. A rule pairs a check over the
//! whole value snapshot with the message reported when the check fails. For
//! every field only the first failing rule is reported, so rule order is
//! significant.

use super::field::FieldName;
use super::values::{parse_date_of_birth, profession_index, FormValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Field name to error message. A missing key means the field is valid.
pub type FieldErrorMap = BTreeMap<FieldName, String>;

pub type Check = fn(&FormValues) -> bool;

/// A single predicate and the message reported when it does not hold
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

/// The ordered rules bound to one field
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: FieldName,
    pub rules: &'static [Rule],
}

pub const FULL_NAME_MIN: usize = 5;
pub const FULL_NAME_MAX: usize = 20;
pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 20;
pub const AGE_MIN: i32 = 18;
pub const AGE_MAX: i32 = 65;
pub const PHOTO_MAX_BYTES: u64 = 300_000;
pub const OTHER_DOCUMENTS_MAX_BYTES: u64 = 500_000;

/// Punctuation accepted as a password's special character
pub const PASSWORD_SYMBOLS: &str = "`!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

fn char_len(s: &str) -> usize {
    s.chars().count()
}

const FULL_NAME_RULES: &[Rule] = &[
    Rule {
        check: |v| !v.full_name.is_empty(),
        message: "Full name is required",
    },
    Rule {
        check: |v| char_len(&v.full_name) >= FULL_NAME_MIN,
        message: "Must be minimum 5 characters",
    },
    Rule {
        check: |v| char_len(&v.full_name) <= FULL_NAME_MAX,
        message: "Character limit exceeded! Please enter within 20 characters",
    },
];

const EMAIL_RULES: &[Rule] = &[
    Rule {
        check: |v| !v.email.is_empty(),
        message: "Email is required",
    },
    Rule {
        check: |v| EMAIL_REGEX.is_match(&v.email),
        message: "Invalid email",
    },
];

const PASSWORD_RULES: &[Rule] = &[
    Rule {
        check: |v| !v.password.is_empty(),
        message: "Password is required",
    },
    Rule {
        check: |v| char_len(&v.password) >= PASSWORD_MIN,
        message: "Password must be 6 or more characters",
    },
    Rule {
        check: |v| char_len(&v.password) <= PASSWORD_MAX,
        message: "Password must not exceed 20 characters",
    },
    Rule {
        check: |v| {
            v.password.chars().any(|c| c.is_ascii_lowercase())
                && v.password.chars().any(|c| c.is_ascii_uppercase())
        },
        message: "Password should contain at least one uppercase and lowercase character",
    },
    Rule {
        check: |v| v.password.chars().any(|c| c.is_ascii_digit()),
        message: "Password should contain at least one number",
    },
    Rule {
        check: |v| v.password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
        message: "Password should contain at least one special character",
    },
];

const CONFIRM_PASSWORD_RULES: &[Rule] = &[
    Rule {
        check: |v| !v.confirm_password.is_empty(),
        message: "Re-enter password",
    },
    Rule {
        check: |v| v.confirm_password.as_bytes() == v.password.as_bytes(),
        message: "Password does not match",
    },
];

const PROFESSION_RULES: &[Rule] = &[Rule {
    check: |v| profession_index(&v.profession).is_some(),
    message: "The profession you chose does not exist",
}];

const ACCEPT_TERMS_RULES: &[Rule] = &[Rule {
    check: |v| v.accept_terms,
    message: "Please accept the terms and conditions",
}];

const AGE_RULES: &[Rule] = &[Rule {
    check: |v| v.age.is_some_and(|age| (AGE_MIN..=AGE_MAX).contains(&age)),
    message: "Invalid age",
}];

const DATE_OF_BIRTH_RULES: &[Rule] = &[Rule {
    check: |v| {
        v.date_of_birth.trim().is_empty() || parse_date_of_birth(&v.date_of_birth).is_some()
    },
    message: "Invalid date of birth",
}];

const PHOTO_RULES: &[Rule] = &[
    Rule {
        check: |v| v.photo.is_some(),
        message: "Please upload a photo",
    },
    Rule {
        check: |v| v.photo.as_ref().is_some_and(|f| f.size <= PHOTO_MAX_BYTES),
        message: "File too large! Below 300KB",
    },
];

const OTHER_DOCUMENTS_RULES: &[Rule] = &[Rule {
    check: |v| {
        v.other_documents
            .as_ref()
            .is_none_or(|f| f.size <= OTHER_DOCUMENTS_MAX_BYTES)
    },
    message: "File too large! Below 500KB",
}];

/// The registration schema, one entry per field in display order
pub const SCHEMA: &[FieldRules] = &[
    FieldRules {
        field: FieldName::FullName,
        rules: FULL_NAME_RULES,
    },
    FieldRules {
        field: FieldName::Email,
        rules: EMAIL_RULES,
    },
    FieldRules {
        field: FieldName::Profession,
        rules: PROFESSION_RULES,
    },
    FieldRules {
        field: FieldName::Age,
        rules: AGE_RULES,
    },
    FieldRules {
        field: FieldName::DateOfBirth,
        rules: DATE_OF_BIRTH_RULES,
    },
    FieldRules {
        field: FieldName::Photo,
        rules: PHOTO_RULES,
    },
    FieldRules {
        field: FieldName::OtherDocuments,
        rules: OTHER_DOCUMENTS_RULES,
    },
    FieldRules {
        field: FieldName::Password,
        rules: PASSWORD_RULES,
    },
    FieldRules {
        field: FieldName::ConfirmPassword,
        rules: CONFIRM_PASSWORD_RULES,
    },
    FieldRules {
        field: FieldName::AcceptTerms,
        rules: ACCEPT_TERMS_RULES,
    },
];

/// Rules bound to `field`
pub fn rules_for(field: FieldName) -> &'static [Rule] {
    SCHEMA
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| entry.rules)
        .unwrap_or(&[])
}

/// Message of the first rule `field` fails, if any
pub fn first_error(field: FieldName, values: &FormValues) -> Option<&'static str> {
    rules_for(field)
        .iter()
        .find(|rule| !(rule.check)(values))
        .map(|rule| rule.message)
}

/// Evaluate the whole schema against `values`
pub fn validate(values: &FormValues) -> FieldErrorMap {
    SCHEMA
        .iter()
        .filter_map(|entry| {
            first_error(entry.field, values).map(|message| (entry.field, message.to_string()))
        })
        .collect()
}

pub fn is_valid(values: &FormValues) -> bool {
    SCHEMA
        .iter()
        .all(|entry| first_error(entry.field, values).is_none())
}
