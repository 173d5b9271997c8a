//! Matchboard: client-side behaviour for the internship matching portal
//!
//! A Rust/WASM crate loaded by the server-rendered pages. On page-ready it
//! binds every component whose anchors exist and skips the rest.
//!
//! # Architecture
//! - `config.rs` - UiConfig: delays, endpoint, anchor ids, validation bounds
//! - `tags/` - TagSelector: searchable multi-select for skills and interests
//! - `matching/` - MatchingTrigger: single-subject and bulk matching buttons
//! - `notify/` - NotificationCenter and server flash fade-out
//! - `progress.rs` - ProgressReveal: one-shot progress-bar animation
//! - `tooltip.rs` - TooltipController: hover labels
//! - `forms/` - FormGuard: required fields, numeric ranges, busy submit
//! - `numbers.rs` - parseFloat-style leading-number reads
//! - `scroll.rs` - AnchorScroller: smooth in-page links
//! - `page.rs` - Page: owns all of the above, mount and teardown
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { mountPage, showNotification } from 'matchboard';
//!
//! // init() runs the start hook, which mounts on DOMContentLoaded.
//! await init();
//!
//! // Remount with overrides (e.g. after swapping page content)
//! const summary = mountPage({ navigate_delay_ms: 0 });
//! console.log(summary.skills, summary.progressBars);
//!
//! showNotification('Saved', 'Profile updated', 'success');
//! ```

pub mod console;
pub mod config;
pub mod dom;
pub mod error;
pub mod forms;
pub mod matching;
pub mod notify;
pub mod numbers;
pub mod page;
pub mod progress;
pub mod scroll;
pub mod tags;
pub mod tooltip;

pub use config::UiConfig;
pub use error::{UiError, UiResult};
pub use page::{Page, PageSummary};

use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::forms::RangeRule;
use crate::notify::Severity;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Install the panic hook and mount once the document is parsed
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let document = dom::document()?;
    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?
        .as_string()
        .unwrap_or_default();

    if ready_state == "loading" {
        let on_ready = Closure::once_into_js(|| {
            if let Err(e) = mount_from_page(None) {
                crate::console_error!("[Page] mount failed: {}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else if let Err(e) = mount_from_page(None) {
        crate::console_error!("[Page] mount failed: {}", e);
    }
    Ok(())
}

fn mount_from_page(overrides: Option<&str>) -> UiResult<PageSummary> {
    let document = dom::document()?;
    let config = page::resolve_config(&document, overrides)?;
    // Tear down first so the new listeners never overlap the old ones.
    page::uninstall();
    let mounted = Page::mount(&document, config)?;
    Ok(page::install(mounted))
}

/// Mount (or remount) every component, optionally overriding config keys.
/// Returns `{ skills, interests, matching, progressBars, tooltips, forms, anchorLinks }`.
#[wasm_bindgen(js_name = mountPage)]
pub fn mount_page(config: JsValue) -> Result<JsValue, JsValue> {
    let overrides = if config.is_undefined() || config.is_null() {
        None
    } else {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(config)
            .map_err(|e| UiError::Config(e.to_string()))?;
        Some(value.to_string())
    };
    let summary = mount_from_page(overrides.as_deref())?;
    serde_wasm_bindgen::to_value(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Remove every listener the mounted page registered
#[wasm_bindgen(js_name = unmountPage)]
pub fn unmount_page() -> bool {
    page::uninstall()
}

/// Show a banner; `kind` is `info` (default), `success` or `error`
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(title: &str, message: &str, kind: Option<String>) -> Result<(), JsValue> {
    let severity = kind.as_deref().map(Severity::parse).unwrap_or_default();
    let document = dom::document()?;
    page::notification_center(&document)?.notify(title, message, severity)?;
    Ok(())
}

/// Mark blank required fields of the form with id `form_id`
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str) -> Result<bool, JsValue> {
    let document = dom::document()?;
    Ok(forms::validate_form(&document, form_id)?)
}

/// Range-check a score (CGPA) field; true when acceptable
#[wasm_bindgen(js_name = validateScore)]
pub fn validate_score(input: &HtmlInputElement) -> bool {
    let rule = RangeRule::score(page::current_config().score_bounds);
    forms::validate_range(input, &rule).is_none()
}

/// Range-check an age field; true when acceptable
#[wasm_bindgen(js_name = validateAge)]
pub fn validate_age(input: &HtmlInputElement) -> bool {
    let rule = RangeRule::age(page::current_config().age_bounds);
    forms::validate_range(input, &rule).is_none()
}

/// Values currently selected in the `skills` or `interests` picker
#[wasm_bindgen(js_name = selectedTags)]
pub fn selected_tags(field: &str) -> Result<JsValue, JsValue> {
    let selected = page::with_page(|p| p.picker(field).map(|picker| picker.selected()))
        .flatten()
        .unwrap_or_default();
    serde_wasm_bindgen::to_value(&selected).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("matchboard v{}", env!("CARGO_PKG_VERSION"))
}
