//! NotificationCenter: transient banners in the top-right corner
//!
//! Each banner removes itself after the configured lifetime (fade, then
//! detach). Close buttons are handled by one delegated listener on the
//! document, owned by the center.

use std::cell::Cell;

use web_sys::{Document, HtmlElement};

use crate::config::{Millis, UiConfig};
use crate::dom::{self, Listener};
use crate::error::{UiError, UiResult};
use crate::notify::model::{Notification, Severity};

const BANNER_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("z-index", "1050"),
    ("min-width", "300px"),
    ("box-shadow", "var(--shadow-lg)"),
];

pub struct NotificationCenter {
    document: Document,
    ttl_ms: Millis,
    fade_ms: Millis,
    shown: Cell<u64>,
    _close: Listener,
}

impl NotificationCenter {
    pub fn new(document: &Document, config: &UiConfig) -> UiResult<Self> {
        let close = Listener::new(document, "click", move |event| {
            if dom::event_closest(&event, ".btn-close").is_none() {
                return;
            }
            if let Some(banner) = dom::event_closest(&event, ".notification") {
                banner.remove();
            }
        })?;

        Ok(Self {
            document: document.clone(),
            ttl_ms: config.notification_ttl_ms,
            fade_ms: config.fade_ms,
            shown: Cell::new(0),
            _close: close,
        })
    }

    /// Number of banners shown since mount
    pub fn shown(&self) -> u64 {
        self.shown.get()
    }

    pub fn notify(&self, title: &str, message: &str, severity: Severity) -> UiResult<HtmlElement> {
        self.show(&Notification::new(title, message, severity))
    }

    pub fn show(&self, notification: &Notification) -> UiResult<HtmlElement> {
        let banner = self.render(notification)?;
        let body = self.document.body().ok_or(UiError::NoDocument)?;
        body.append_child(&banner)?;
        self.shown.set(self.shown.get() + 1);

        fade_out_later(banner.clone(), self.ttl_ms, self.fade_ms)?;
        Ok(banner)
    }

    fn render(&self, notification: &Notification) -> UiResult<HtmlElement> {
        let doc = &self.document;
        let banner = dom::create(doc, "div", &notification.class_name())?;
        dom::set_styles(&banner, BANNER_STYLES)?;

        let row = dom::create(doc, "div", "d-flex justify-content-between align-items-start")?;
        let text = dom::create(doc, "div", "")?;
        let title = dom::create(doc, "strong", "")?;
        title.set_text_content(Some(notification.title.as_str()));
        text.append_child(&title)?;
        let br: web_sys::Element = doc.create_element("br")?;
        text.append_child(&br)?;
        text.append_child(&doc.create_text_node(&notification.message))?;

        let close = dom::create(doc, "button", "btn-close")?;
        close.set_attribute("type", "button")?;
        close.set_attribute("aria-label", "Close")?;

        row.append_child(&text)?;
        row.append_child(&close)?;
        banner.append_child(&row)?;
        Ok(banner)
    }
}

/// Fade `element` after `ttl_ms`, detach it `fade_ms` later.
/// Already-detached elements are left alone.
pub(crate) fn fade_out_later(element: HtmlElement, ttl_ms: Millis, fade_ms: Millis) -> UiResult<()> {
    dom::set_timeout(ttl_ms, move || {
        if element.parent_element().is_none() {
            return;
        }
        let _ = element.style().set_property("opacity", "0");
        let detach = element.clone();
        if dom::set_timeout(fade_ms, move || detach.remove()).is_err() {
            element.remove();
        }
    })
}
