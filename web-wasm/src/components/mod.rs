//! UI components

pub mod bulk_entry;
pub mod suggest_input;
pub mod toast;
