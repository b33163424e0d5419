//! Errors raised by the form store outside of field validation

use super::field::FieldName;
use std::path::PathBuf;
use thiserror::Error;

/// Misuse of the store API or a failed file selection.
///
/// Rule violations never show up here; they are reported through the
/// `FieldErrorMap`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{field} does not accept a {got} value")]
    TypeMismatch {
        field: FieldName,
        got: &'static str,
    },

    #[error("{0} is derived and cannot be set directly")]
    ReadOnlyField(FieldName),

    #[error("{0} is not a file field")]
    NotAFileField(FieldName),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("{field} does not accept .{extension} files")]
    UnsupportedFileType {
        field: FieldName,
        extension: String,
    },
}
