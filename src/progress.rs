//! Progress Reveal: grow `.progress-bar` fills the first time they scroll in
//!
//! The observer unobserves a bar as soon as it is seen; `RevealLedger` backs
//! that up so a bar animates at most once per page load even if the browser
//! delivers a late entry for it.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry};

use crate::config::{Millis, UiConfig};
use crate::dom;
use crate::error::UiResult;
use crate::numbers;

pub const PROGRESS_SELECTOR: &str = ".progress-bar";
pub const PROGRESS_ATTR: &str = "data-progress";

// =============================================================================
// Target width
// =============================================================================

/// Fill target in percent, clamped to [0, 100]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressTarget(f64);

impl ProgressTarget {
    /// Accepts `"75"`, `"75%"`, `" 62.5 % "`
    pub fn parse(raw: &str) -> Option<Self> {
        let value = numbers::parse_percent(raw)?;
        if !value.is_finite() {
            return None;
        }
        Some(Self(value.clamp(0.0, 100.0)))
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// CSS width value
    pub fn css(&self) -> String {
        format!("{}%", self.0)
    }
}

// =============================================================================
// RevealLedger
// =============================================================================

/// Remembers which bars have already animated
#[derive(Debug, Default)]
pub struct RevealLedger {
    revealed: HashSet<usize>,
}

impl RevealLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time `bar` is reported, false afterwards
    pub fn first_reveal(&mut self, bar: usize) -> bool {
        self.revealed.insert(bar)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

// =============================================================================
// ProgressReveal
// =============================================================================

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct ProgressReveal {
    observer: IntersectionObserver,
    ledger: Rc<RefCell<RevealLedger>>,
    bar_count: usize,
    _callback: ObserverCallback,
}

impl ProgressReveal {
    /// Observe every bar on the page; `None` when there are none
    pub fn mount(document: &Document, config: &UiConfig) -> UiResult<Option<Self>> {
        let bars: Vec<HtmlElement> = dom::query_all(document, PROGRESS_SELECTOR)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        if bars.is_empty() {
            return Ok(None);
        }

        let ledger = Rc::new(RefCell::new(RevealLedger::new()));
        let transition = config.progress_transition();
        let delay = config.progress_start_delay_ms;
        let bar_count = bars.len();
        let observed = bars.clone();

        let seen = ledger.clone();
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);

                let Some(idx) = bars.iter().position(|bar| target == **bar) else {
                    continue;
                };
                if !seen.borrow_mut().first_reveal(idx) {
                    continue;
                }
                if let Err(e) = animate(&bars[idx], &transition, delay) {
                    crate::console_warn!("[ProgressReveal] bar {} failed: {}", idx, e);
                }
            }
        });

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        for bar in &observed {
            observer.observe(bar);
        }

        Ok(Some(Self {
            observer,
            ledger,
            bar_count,
            _callback: callback,
        }))
    }

    pub fn bar_count(&self) -> usize {
        self.bar_count
    }

    pub fn revealed_count(&self) -> usize {
        self.ledger.borrow().revealed_count()
    }
}

impl Drop for ProgressReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Target for a bar: `data-progress`, else its inline width
fn target_of(bar: &HtmlElement) -> Option<ProgressTarget> {
    bar.get_attribute(PROGRESS_ATTR)
        .and_then(|raw| ProgressTarget::parse(&raw))
        .or_else(|| {
            bar.style()
                .get_property_value("width")
                .ok()
                .and_then(|raw| ProgressTarget::parse(&raw))
        })
}

fn animate(bar: &HtmlElement, transition: &str, delay: Millis) -> UiResult<()> {
    let Some(target) = target_of(bar) else {
        return Ok(());
    };
    let style = bar.style();
    style.set_property("width", "0%")?;
    style.set_property("transition", transition)?;

    let bar = bar.clone();
    dom::set_timeout(delay, move || {
        let _ = bar.style().set_property("width", &target.css());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_accepts_percent_forms() {
        for raw in ["75", "75%", " 75 % ", "75.0%"] {
            let target = ProgressTarget::parse(raw).unwrap();
            assert_eq!(target.css(), "75%", "{}", raw);
        }
        assert_eq!(ProgressTarget::parse("62.5%").unwrap().css(), "62.5%");
    }

    #[test]
    fn test_target_clamps_and_rejects() {
        assert_eq!(ProgressTarget::parse("140%").unwrap().percent(), 100.0);
        assert_eq!(ProgressTarget::parse("-3").unwrap().percent(), 0.0);
        assert!(ProgressTarget::parse("").is_none());
        assert!(ProgressTarget::parse("wide").is_none());
        assert!(ProgressTarget::parse("NaN%").is_none());
    }

    #[test]
    fn test_each_bar_reveals_once() {
        let mut ledger = RevealLedger::new();
        assert!(ledger.first_reveal(0));
        assert!(!ledger.first_reveal(0));
        assert!(!ledger.first_reveal(0));
        assert!(ledger.first_reveal(3));
        assert_eq!(ledger.revealed_count(), 2);
    }
}
