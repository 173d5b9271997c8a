//! DOM plumbing shared by the components
//!
//! `Listener` ties an event callback to the component that registered it:
//! dropping the guard unregisters the callback. Timers are fire-and-forget.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::config::Millis;
use crate::error::{UiError, UiResult};

pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> UiResult<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

// =============================================================================
// Listener
// =============================================================================

/// Registered event callback, removed again on drop
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> UiResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

// =============================================================================
// Timers
// =============================================================================

/// Run `f` once after `delay` ms. Not cancellable.
pub fn set_timeout<F>(delay: Millis, f: F) -> UiResult<()>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay.max(0),
    )?;
    Ok(())
}

// =============================================================================
// Queries and construction
// =============================================================================

pub fn query_all(root: &Document, selector: &str) -> UiResult<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_all_in(root: &Element, selector: &str) -> UiResult<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// `document.createElement(tag)` with a class list
pub fn create(document: &Document, tag: &str, class: &str) -> UiResult<HtmlElement> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::Dom(format!("<{}> is not an HTML element", tag)))
}

/// Set several inline style properties at once
pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> UiResult<()> {
    let style = element.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Read a form control's `value` regardless of its concrete element type
pub fn field_value(element: &Element) -> String {
    js_sys::Reflect::get(element, &JsValue::from_str("value"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Closest ancestor-or-self of the event target matching `selector`
pub fn event_closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

/// Replace a button's content with a spinner and `label`
pub fn show_busy_label(document: &Document, button: &HtmlElement, label: &str) -> UiResult<()> {
    button.set_text_content(None);
    let spinner = create(document, "span", "spinner")?;
    button.append_child(&spinner)?;
    button.append_child(&document.create_text_node(&format!(" {}", label)))?;
    Ok(())
}

/// Toggle `disabled` on any element type
pub fn set_disabled(element: &Element, disabled: bool) -> UiResult<()> {
    if disabled {
        element.set_attribute("disabled", "")?;
    } else {
        element.remove_attribute("disabled")?;
    }
    Ok(())
}
