//! Configuration types and defaults for Matchboard
//!
//! Every delay, endpoint and anchor id the components depend on lives here.
//! Sources, lowest precedence first:
//! 1. `UiConfig::default()`
//! 2. a `<script type="application/json" id="matchboard-config">` block
//! 3. the object handed to `mountPage(config)`

use serde::{Deserialize, Serialize};

/// Page element carrying JSON overrides
pub const CONFIG_SCRIPT_ID: &str = "matchboard-config";

/// Milliseconds, as taken by `setTimeout`
pub type Millis = i32;

// =============================================================================
// Anchors
// =============================================================================

/// Element ids the components attach to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Anchors {
    pub skills_container: String,
    pub interests_container: String,
    pub run_matching_button: String,
    pub match_all_button: String,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            skills_container: "skills-container".to_string(),
            interests_container: "interests-container".to_string(),
            run_matching_button: "run-matching-btn".to_string(),
            match_all_button: "match-all-btn".to_string(),
        }
    }
}

// =============================================================================
// Validation bounds
// =============================================================================

/// Inclusive numeric bounds for a range-checked field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before a blurred tag picker decides focus really left. Default: 150
    pub blur_grace_ms: Millis,
    /// How long a notification stays up. Default: 5000
    pub notification_ttl_ms: Millis,
    /// How long server flash alerts stay up after load. Default: 5000
    pub flash_ttl_ms: Millis,
    /// Fade-out before a banner is detached. Default: 300
    pub fade_ms: Millis,
    /// Pause between resetting a progress bar and growing it. Default: 100
    pub progress_start_delay_ms: Millis,
    /// CSS transition length for the progress fill. Default: 1500
    pub progress_duration_ms: Millis,
    /// Cosmetic pause before single-subject navigation. Default: 2000
    pub navigate_delay_ms: Millis,
    /// Pause between a bulk-match success and the reload. Default: 1500
    pub reload_delay_ms: Millis,
    /// Gap between a tooltip and its anchor, in px. Default: 8
    pub tooltip_gap_px: f64,
    /// Bulk matching endpoint. Default: `/api/match-all`
    pub bulk_match_endpoint: String,
    /// Prefix of the per-subject results page. Default: `/match/`
    pub match_path_prefix: String,
    pub anchors: Anchors,
    /// Accepted score (CGPA) range. Default: [0, 10]
    pub score_bounds: Bounds,
    /// Accepted applicant age range. Default: [18, 35]
    pub age_bounds: Bounds,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            blur_grace_ms: 150,
            notification_ttl_ms: 5000,
            flash_ttl_ms: 5000,
            fade_ms: 300,
            progress_start_delay_ms: 100,
            progress_duration_ms: 1500,
            navigate_delay_ms: 2000,
            reload_delay_ms: 1500,
            tooltip_gap_px: 8.0,
            bulk_match_endpoint: "/api/match-all".to_string(),
            match_path_prefix: "/match/".to_string(),
            anchors: Anchors::default(),
            score_bounds: Bounds::new(0.0, 10.0),
            age_bounds: Bounds::new(18.0, 35.0),
        }
    }
}

impl UiConfig {
    /// Every delay zeroed; used by browser tests
    pub fn instant() -> Self {
        Self {
            blur_grace_ms: 0,
            notification_ttl_ms: 0,
            flash_ttl_ms: 0,
            fade_ms: 0,
            progress_start_delay_ms: 0,
            progress_duration_ms: 0,
            navigate_delay_ms: 0,
            reload_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Parse a JSON override; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Layer a JSON object over this config, key by key
    pub fn merged_with_json(&self, json: &str) -> Result<Self, serde_json::Error> {
        let mut base = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        merge_values(&mut base, overrides);
        serde_json::from_value(base)
    }

    /// CSS `transition` value for the progress fill
    pub fn progress_transition(&self) -> String {
        format!(
            "width {}s ease-in-out",
            self.progress_duration_ms as f64 / 1000.0
        )
    }
}

fn merge_values(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_values(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
