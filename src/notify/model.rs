//! Notification value types

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Lenient parse of the `type` argument JS callers pass; unknown is `Info`
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" | "danger" => Self::Error,
            _ => Self::Info,
        }
    }

    /// Bootstrap contextual class suffix
    pub fn alert_variant(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Success)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Error)
    }

    /// Full class attribute of the banner
    pub fn class_name(&self) -> String {
        format!("alert alert-{} notification", self.severity.alert_variant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_renders_as_danger() {
        let n = Notification::error("Error", "boom");
        assert_eq!(n.class_name(), "alert alert-danger notification");
        assert_eq!(
            Notification::success("Success", "ok").class_name(),
            "alert alert-success notification"
        );
    }

    #[test]
    fn test_parse_defaults_to_info() {
        assert_eq!(Severity::parse("SUCCESS"), Severity::Success);
        assert_eq!(Severity::parse("danger"), Severity::Error);
        assert_eq!(Severity::parse(""), Severity::Info);
        assert_eq!(Severity::parse("warning"), Severity::Info);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Notification::error("t", "m")).unwrap();
        assert!(json.contains(r#""severity":"error""#));
    }
}
