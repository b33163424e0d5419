//! Dialog components for TUI

mod acknowledgement_dialog;
mod base;

pub use acknowledgement_dialog::render_acknowledgement_dialog;
