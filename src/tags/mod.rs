//! Tag pickers for the skills and interests fields
//!
//! - `catalog.rs` - Fixed candidate lists and per-field labels
//! - `selection.rs` - TagSelection: owned selection + filter state
//! - `widget.rs` - TagSelector: DOM rendering and event wiring

pub mod catalog;
pub mod selection;
pub mod widget;

pub use catalog::{TagField, INTERESTS, SKILLS};
pub use selection::{HiddenField, SelectOutcome, TagSelection};
pub use widget::TagSelector;
