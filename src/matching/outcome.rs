//! Bulk-match response handling and results routes
//!
//! The server answers `GET /api/match-all` with
//! `{"success": true, "total_matches": 7}`. Anything else is a failure; a
//! body that is not JSON at all is reported like a transport error.

use serde::{Deserialize, Serialize};

use crate::config::Millis;
use crate::error::UiError;
use crate::notify::Notification;

pub const REJECTED_MESSAGE: &str = "Failed to run matching for all students.";
pub const FAILED_MESSAGE: &str = "An error occurred while matching students.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkMatchResponse {
    pub success: bool,
    pub total_matches: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    Succeeded { total: u64 },
    /// Readable JSON that does not report success
    Rejected,
    /// No usable answer: network error or non-JSON body
    Failed(String),
}

/// What the page should do about an outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub notification: Notification,
    pub reload_after_ms: Option<Millis>,
}

impl BulkOutcome {
    pub fn from_body(body: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => return Self::Failed(UiError::Payload(e.to_string()).to_string()),
        };
        match serde_json::from_value::<BulkMatchResponse>(value) {
            Ok(BulkMatchResponse {
                success: true,
                total_matches,
            }) => Self::Succeeded {
                total: total_matches,
            },
            _ => Self::Rejected,
        }
    }

    pub fn from_result(result: Result<String, UiError>) -> Self {
        match result {
            Ok(body) => Self::from_body(&body),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn reaction(&self, reload_delay_ms: Millis) -> Reaction {
        match self {
            Self::Succeeded { total } => Reaction {
                notification: Notification::success(
                    "Success",
                    format!("Matched {} students successfully!", total),
                ),
                reload_after_ms: Some(reload_delay_ms),
            },
            Self::Rejected => Reaction {
                notification: Notification::error("Error", REJECTED_MESSAGE),
                reload_after_ms: None,
            },
            Self::Failed(_) => Reaction {
                notification: Notification::error("Error", FAILED_MESSAGE),
                reload_after_ms: None,
            },
        }
    }
}

/// Results page for one subject. The id is encoded as a single path segment.
pub fn results_path(prefix: &str, subject_id: &str) -> String {
    format!("{}{}", prefix, urlencoding::encode(subject_id))
}
