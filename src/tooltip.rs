//! Tooltip Controller: floating labels for `[data-tooltip]` elements

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement};

use crate::config::UiConfig;
use crate::dom::{self, Listener};
use crate::error::{UiError, UiResult};

pub const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
pub const TOOLTIP_ATTR: &str = "data-tooltip";

const LABEL_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("background", "var(--bg-card)"),
    ("color", "var(--color-text)"),
    ("padding", "0.5rem 0.75rem"),
    ("border-radius", "6px"),
    ("font-size", "0.875rem"),
    ("box-shadow", "var(--shadow-lg)"),
    ("z-index", "1001"),
    ("pointer-events", "none"),
    ("white-space", "nowrap"),
    ("border", "1px solid var(--border-color)"),
];

// =============================================================================
// Placement
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Top-left corner for a `label_width` x `label_height` label sitting `gap`
/// px above `anchor`, centred horizontally on it
pub fn place_above(anchor: Rect, label_width: f64, label_height: f64, gap: f64) -> (f64, f64) {
    let left = anchor.left + anchor.width / 2.0 - label_width / 2.0;
    let top = anchor.top - label_height - gap;
    (left, top)
}

// =============================================================================
// TooltipController
// =============================================================================

pub struct TooltipController {
    live: Rc<RefCell<HashMap<usize, HtmlElement>>>,
    source_count: usize,
    _listeners: Vec<Listener>,
}

impl TooltipController {
    /// Bind every tooltip source; `None` when the page has none
    pub fn mount(document: &Document, config: &UiConfig) -> UiResult<Option<Self>> {
        let sources = dom::query_all(document, TOOLTIP_SELECTOR)?;
        if sources.is_empty() {
            return Ok(None);
        }

        let live: Rc<RefCell<HashMap<usize, HtmlElement>>> = Rc::new(RefCell::new(HashMap::new()));
        let mut listeners = Vec::with_capacity(sources.len() * 2);
        let gap = config.tooltip_gap_px;

        for (idx, source) in sources.iter().enumerate() {
            let (doc, el, tips) = (document.clone(), source.clone(), live.clone());
            listeners.push(Listener::new(source, "mouseenter", move |_| {
                if tips.borrow().contains_key(&idx) {
                    return;
                }
                match show(&doc, &el, gap) {
                    Ok(label) => {
                        tips.borrow_mut().insert(idx, label);
                    }
                    Err(e) => crate::console_warn!("[Tooltip] show failed: {}", e),
                }
            })?);

            let tips = live.clone();
            listeners.push(Listener::new(source, "mouseleave", move |_| {
                if let Some(label) = tips.borrow_mut().remove(&idx) {
                    label.remove();
                }
            })?);
        }

        Ok(Some(Self {
            live,
            source_count: sources.len(),
            _listeners: listeners,
        }))
    }

    pub fn source_count(&self) -> usize {
        self.source_count
    }

    /// Tooltips currently attached to the document
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl Drop for TooltipController {
    fn drop(&mut self) {
        for (_, label) in self.live.borrow_mut().drain() {
            label.remove();
        }
    }
}

fn show(document: &Document, source: &Element, gap: f64) -> UiResult<HtmlElement> {
    let text = source.get_attribute(TOOLTIP_ATTR).unwrap_or_default();
    let label = dom::create(document, "div", "custom-tooltip")?;
    label.set_text_content(Some(text.as_str()));
    dom::set_styles(&label, LABEL_STYLES)?;

    // Measure after attaching; offset sizes are zero while detached.
    document
        .body()
        .ok_or(UiError::NoDocument)?
        .append_child(&label)?;

    let rect = source.get_bounding_client_rect();
    let anchor = Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    };
    let (left, top) = place_above(
        anchor,
        label.offset_width() as f64,
        label.offset_height() as f64,
        gap,
    );
    let style = label.style();
    style.set_property("left", &format!("{}px", left))?;
    style.set_property("top", &format!("{}px", top))?;

    Ok(label)
}
