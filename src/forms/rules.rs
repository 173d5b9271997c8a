//! Field validation rules
//!
//! Text with no numeric prefix is left to the field's own `required`/`type`
//! checks.

use crate::config::Bounds;
use crate::numbers::{parse_float_prefix, parse_int_prefix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Decimal,
    Integer,
}

/// Inclusive range check with the message shown when it fails
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRule {
    pub label: String,
    pub bounds: Bounds,
    pub kind: NumberKind,
}

impl RangeRule {
    /// Score / CGPA: decimal
    pub fn score(bounds: Bounds) -> Self {
        Self {
            label: "CGPA".to_string(),
            bounds,
            kind: NumberKind::Decimal,
        }
    }

    /// Applicant age: whole years
    pub fn age(bounds: Bounds) -> Self {
        Self {
            label: "Age".to_string(),
            bounds,
            kind: NumberKind::Integer,
        }
    }

    pub fn message(&self) -> String {
        format!(
            "{} must be between {} and {}",
            self.label, self.bounds.min, self.bounds.max
        )
    }

    /// Validity message for `raw`, `None` when it is acceptable
    pub fn check(&self, raw: &str) -> Option<String> {
        let value = match self.kind {
            NumberKind::Decimal => parse_float_prefix(raw),
            NumberKind::Integer => parse_int_prefix(raw),
        }?;
        if self.bounds.contains(value) {
            None
        } else {
            Some(self.message())
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
