//! Form validation
//!
//! - `rules.rs` - blank checks, numeric prefix parsing, range rules
//! - `guard.rs` - FormGuard: DOM validation and submit busy state

pub mod guard;
pub mod rules;

pub use guard::{validate_form, validate_form_element, validate_range, FormGuard};
pub use rules::{is_blank, NumberKind, RangeRule};
