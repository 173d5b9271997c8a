//! MatchingTrigger: the "run matching" buttons
//!
//! - `#run-matching-btn[data-student-id]` goes busy, then navigates to the
//!   subject's results page after a fixed pause.
//! - `#match-all-btn` goes busy, calls the bulk endpoint, reports the outcome
//!   and always restores itself.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Response};

use crate::config::UiConfig;
use crate::dom::{self, Listener};
use crate::error::{describe_js, UiError, UiResult};
use crate::matching::button::ButtonState;
use crate::matching::outcome::{results_path, BulkOutcome};
use crate::notify::NotificationCenter;

pub const SUBJECT_ATTR: &str = "data-student-id";
pub const SINGLE_BUSY_LABEL: &str = "Finding Matches...";
pub const BULK_BUSY_LABEL: &str = "Matching All Students...";

pub struct MatchingTrigger {
    single: Option<Rc<RefCell<ButtonState>>>,
    bulk: Option<Rc<RefCell<ButtonState>>>,
    _listeners: Vec<Listener>,
}

impl MatchingTrigger {
    /// Bind whichever of the two buttons the page has; `None` if neither
    pub fn mount(
        document: &Document,
        config: &UiConfig,
        notifications: Rc<NotificationCenter>,
    ) -> UiResult<Option<Self>> {
        let mut listeners = Vec::new();

        let single = match button(document, &config.anchors.run_matching_button) {
            Some(btn) => {
                let state = Rc::new(RefCell::new(ButtonState::new()));
                listeners.push(bind_single(document, btn, state.clone(), config)?);
                Some(state)
            }
            None => None,
        };

        let bulk = match button(document, &config.anchors.match_all_button) {
            Some(btn) => {
                let state = Rc::new(RefCell::new(ButtonState::new()));
                listeners.push(bind_bulk(document, btn, state.clone(), config, notifications)?);
                Some(state)
            }
            None => None,
        };

        if listeners.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            single,
            bulk,
            _listeners: listeners,
        }))
    }

    pub fn single_state(&self) -> Option<ButtonState> {
        self.single.as_ref().map(|s| s.borrow().clone())
    }

    pub fn bulk_state(&self) -> Option<ButtonState> {
        self.bulk.as_ref().map(|s| s.borrow().clone())
    }
}

fn button(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn enter_busy(document: &Document, btn: &HtmlElement, state: &RefCell<ButtonState>, label: &str) -> UiResult<bool> {
    let current = btn.text_content().unwrap_or_default();
    if !state.borrow_mut().begin(current.trim()) {
        return Ok(false);
    }
    dom::set_disabled(btn, true)?;
    dom::show_busy_label(document, btn, label)?;
    Ok(true)
}

fn leave_busy(btn: &Element, state: &RefCell<ButtonState>) {
    if let Some(label) = state.borrow_mut().finish() {
        btn.set_text_content(Some(label.as_str()));
    }
    if let Err(e) = dom::set_disabled(btn, false) {
        crate::console_warn!("[MatchingTrigger] could not re-enable button: {}", e);
    }
}

fn bind_single(
    document: &Document,
    btn: HtmlElement,
    state: Rc<RefCell<ButtonState>>,
    config: &UiConfig,
) -> UiResult<Listener> {
    let doc = document.clone();
    let prefix = config.match_path_prefix.clone();
    let delay = config.navigate_delay_ms;
    let target = btn.clone();

    Listener::new(&target, "click", move |_| {
        let Some(subject) = btn.get_attribute(SUBJECT_ATTR).filter(|s| !s.is_empty()) else {
            return;
        };
        match enter_busy(&doc, &btn, &state, SINGLE_BUSY_LABEL) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                crate::console_warn!("[MatchingTrigger] busy state failed: {}", e);
                return;
            }
        }

        let path = results_path(&prefix, &subject);
        let timer_state = state.clone();
        let scheduled = dom::set_timeout(delay, move || {
            timer_state.borrow_mut().depart();
            let navigated = dom::window()
                .and_then(|w| w.location().set_href(&path).map_err(UiError::from));
            if let Err(e) = navigated {
                crate::console_error!("[MatchingTrigger] navigation to {} failed: {}", path, e);
            }
        });
        if let Err(e) = scheduled {
            crate::console_error!("[MatchingTrigger] could not schedule navigation: {}", e);
            leave_busy(&btn, &state);
        }
    })
}

fn bind_bulk(
    document: &Document,
    btn: HtmlElement,
    state: Rc<RefCell<ButtonState>>,
    config: &UiConfig,
    notifications: Rc<NotificationCenter>,
) -> UiResult<Listener> {
    let doc = document.clone();
    let endpoint = config.bulk_match_endpoint.clone();
    let reload_delay = config.reload_delay_ms;
    let target = btn.clone();

    Listener::new(&target, "click", move |_| {
        match enter_busy(&doc, &btn, &state, BULK_BUSY_LABEL) {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                crate::console_warn!("[MatchingTrigger] busy state failed: {}", e);
                return;
            }
        }

        let (btn, state, notifications, endpoint) =
            (btn.clone(), state.clone(), notifications.clone(), endpoint.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = BulkOutcome::from_result(request_text(&endpoint).await);
            if let BulkOutcome::Failed(reason) = &outcome {
                crate::console_error!("[MatchingTrigger] bulk match failed: {}", reason);
            } else {
                crate::console_log!("[MatchingTrigger] bulk match answered: {:?}", outcome);
            }

            let reaction = outcome.reaction(reload_delay);
            if let Err(e) = notifications.show(&reaction.notification) {
                crate::console_warn!("[MatchingTrigger] notification failed: {}", e);
            }
            if let Some(delay) = reaction.reload_after_ms {
                let scheduled = dom::set_timeout(delay, || {
                    let reloaded = dom::window().and_then(|w| w.location().reload().map_err(UiError::from));
                    if let Err(e) = reloaded {
                        crate::console_warn!("[MatchingTrigger] reload failed: {}", e);
                    }
                });
                if let Err(e) = scheduled {
                    crate::console_warn!("[MatchingTrigger] could not schedule reload: {}", e);
                }
            }
            leave_busy(&btn, &state);
        });
    })
}

/// GET `url` and return the body text
pub async fn request_text(url: &str) -> UiResult<String> {
    let window = dom::window()?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| UiError::Transport(describe_js(&e)))?
        .dyn_into::<Response>()
        .map_err(|_| UiError::Transport("fetch did not yield a Response".to_string()))?;
    let body = JsFuture::from(response.text()?)
        .await
        .map_err(|e| UiError::Transport(describe_js(&e)))?;
    body.as_string()
        .ok_or_else(|| UiError::Payload("body is not text".to_string()))
}
