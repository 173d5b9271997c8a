//! Error type shared by every component

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// A DOM call rejected with a JS exception
    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// The request never produced a readable body
    #[error("request failed: {0}")]
    Transport(String),

    /// The body arrived but is not the JSON we expect
    #[error("unreadable response: {0}")]
    Payload(String),
}

pub type UiResult<T> = Result<T, UiError>;

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Dom(describe_js(&value))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Config(err.to_string())
    }
}

/// Best-effort text for a thrown JS value
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
