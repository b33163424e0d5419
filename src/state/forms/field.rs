//! Field identifiers and the values that flow into them

use super::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Identifies one of the registration form's fields.
///
/// Variants are declared in display order, which is also the order used by
/// the error map and the touched set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    Profession,
    Age,
    DateOfBirth,
    Photo,
    OtherDocuments,
    Password,
    ConfirmPassword,
    AcceptTerms,
}

impl FieldName {
    /// Every field, in display order
    pub const ALL: [FieldName; 10] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Profession,
        FieldName::Age,
        FieldName::DateOfBirth,
        FieldName::Photo,
        FieldName::OtherDocuments,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::AcceptTerms,
    ];

    /// Wire name, as used in serialized submissions
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::Profession => "profession",
            FieldName::Age => "age",
            FieldName::DateOfBirth => "dateOfBirth",
            FieldName::Photo => "photo",
            FieldName::OtherDocuments => "otherDocuments",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
            FieldName::AcceptTerms => "acceptTerms",
        }
    }

    /// Human-readable label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FullName => "Full Name",
            FieldName::Email => "Email",
            FieldName::Profession => "Profession",
            FieldName::Age => "Age",
            FieldName::DateOfBirth => "Date of Birth (YYYY-MM-DD)",
            FieldName::Photo => "Upload Photo",
            FieldName::OtherDocuments => "Additional Documents",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm Password",
            FieldName::AcceptTerms => "I have read and agree to the Terms",
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FieldName::Photo | FieldName::OtherDocuments)
    }

    /// Fields that take free text typed by the user
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FieldName::FullName
                | FieldName::Email
                | FieldName::DateOfBirth
                | FieldName::Password
                | FieldName::ConfirmPassword
        )
    }

    /// File extensions the picker accepts for this field (lowercase).
    /// Empty for non-file fields.
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        const IMAGES: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"];
        const DOCUMENTS: &[&str] = &[
            "png", "jpg", "jpeg", "gif", "bmp", "webp", "svg", "doc", "docx", "pdf", "txt",
        ];
        match self {
            FieldName::Photo => IMAGES,
            FieldName::OtherDocuments => DOCUMENTS,
            _ => &[],
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Metadata for a selected file. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    pub size: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Select a file from disk for `field`, applying the field's accept list
    pub fn select(field: FieldName, path: &Path) -> Result<Self, FormError> {
        if !field.is_file() {
            return Err(FormError::NotAFileField(field));
        }

        let metadata =
            fs::metadata(path).map_err(|_| FormError::FileNotFound(path.to_path_buf()))?;
        if !metadata.is_file() {
            return Err(FormError::NotAFile(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !field.accepted_extensions().contains(&extension.as_str()) {
            return Err(FormError::UnsupportedFileType { field, extension });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, metadata.len()))
    }

    /// Size formatted for display, e.g. "293.0 KB"
    pub fn display_size(&self) -> String {
        if self.size < 1000 {
            format!("{} B", self.size)
        } else {
            format!("{:.1} KB", self.size as f64 / 1000.0)
        }
    }
}

/// A value written into a field through the store
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    File(Option<FileHandle>),
}

impl FieldValue {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
            FieldValue::File(_) => "file",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<FileHandle> for FieldValue {
    fn from(value: FileHandle) -> Self {
        FieldValue::File(Some(value))
    }
}
