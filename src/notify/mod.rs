//! Notifications
//!
//! - `model.rs` - Notification and Severity value types
//! - `center.rs` - NotificationCenter: banner rendering and auto-dismiss
//! - `flash.rs` - fade-out of server flash alerts present at load

pub mod center;
pub mod flash;
pub mod model;

pub use center::NotificationCenter;
pub use flash::schedule_flash_fade;
pub use model::{Notification, Severity};
