//! Smooth scrolling for in-page `#fragment` links

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, Listener};
use crate::error::UiResult;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector for the element a `#fragment` href points at; `None` for a bare `#`
pub fn fragment_target(href: &str) -> Option<String> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(format!("#{}", css_escape(id)))
}

/// Escape an id for use in a CSS selector
fn css_escape(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for (i, ch) in id.chars().enumerate() {
        let plain = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii();
        if plain && !(i == 0 && ch.is_ascii_digit()) {
            out.push(ch);
        } else if ch.is_ascii_digit() {
            out.push_str(&format!("\\{:x} ", ch as u32));
        } else {
            out.push('\\');
            out.push(ch);
        }
    }
    out
}

pub struct AnchorScroller {
    _listeners: Vec<Listener>,
}

impl AnchorScroller {
    pub fn mount(document: &Document) -> UiResult<Option<Self>> {
        let anchors = dom::query_all(document, ANCHOR_SELECTOR)?;
        if anchors.is_empty() {
            return Ok(None);
        }

        let mut listeners = Vec::with_capacity(anchors.len());
        for anchor in &anchors {
            let (doc, el) = (document.clone(), anchor.clone());
            listeners.push(Listener::new(anchor, "click", move |event| {
                event.prevent_default();
                let Some(selector) = el.get_attribute("href").and_then(|h| fragment_target(&h)) else {
                    return;
                };
                if let Ok(Some(target)) = doc.query_selector(&selector) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            })?);
        }
        Ok(Some(Self { _listeners: listeners }))
    }
}
