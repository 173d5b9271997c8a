//! Fades out the server-rendered flash alerts a page loads with

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::UiConfig;
use crate::dom;
use crate::error::UiResult;
use crate::notify::center::fade_out_later;

/// Alerts not created by the notification center
pub const FLASH_SELECTOR: &str = ".alert:not(.notification)";

/// Schedule the fade; alerts are collected when the timer fires
pub fn schedule_flash_fade(document: &Document, config: &UiConfig) -> UiResult<()> {
    let document = document.clone();
    let fade_ms = config.fade_ms;
    dom::set_timeout(config.flash_ttl_ms, move || {
        let alerts = match dom::query_all(&document, FLASH_SELECTOR) {
            Ok(alerts) => alerts,
            Err(e) => {
                crate::console_warn!("[Flash] query failed: {}", e);
                return;
            }
        };
        for alert in alerts {
            if let Ok(alert) = alert.dyn_into::<HtmlElement>() {
                let _ = fade_out_later(alert, 0, fade_ms);
            }
        }
    })
}
