//! Form domain layer
//!
//! The registration form's values, its validation schema and the store that
//! ties them together. Nothing here knows about the terminal.

mod clock;
mod error;
mod field;
mod store;
mod validation;
mod values;

pub use clock::{Clock, SystemClock};
pub use error::FormError;
pub use field::{FieldName, FieldValue, FileHandle};
pub use store::{FormStore, Submission, SubmitOutcome};
pub use validation::is_valid;
pub use values::{profession_index, PROFESSIONS};
