//! Output formatting for network plans.
//!
//! - [`terminal`] - human-readable plan summary with colors

mod terminal;

pub use terminal::{format_field, format_plan, print_plan};
