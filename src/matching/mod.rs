//! Matching actions
//!
//! - `button.rs` - ButtonState: Idle / Busy / Departed
//! - `outcome.rs` - bulk-match response interpretation and results routes
//! - `trigger.rs` - MatchingTrigger: DOM wiring and the fetch

pub mod button;
pub mod outcome;
pub mod trigger;

pub use button::{ButtonPhase, ButtonState};
pub use outcome::{results_path, BulkMatchResponse, BulkOutcome, Reaction};
pub use trigger::MatchingTrigger;
