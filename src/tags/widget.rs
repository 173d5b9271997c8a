//! TagSelector: DOM rendering of a `TagSelection`
//!
//! Markup built inside the host container:
//! ```text
//! div.multi-select-wrapper
//!   div.selected-items#{field}-selected      chips, each holding its hidden input
//!   div.dropdown
//!     input.form-control.dropdown-input#{field}-input
//!     div.dropdown-menu#{field}-dropdown   one div.dropdown-item per option
//! ```
//! Clicks on items and chip remove buttons are delegated to their parent
//! lists, so the widget owns a fixed set of five listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::{Millis, UiConfig};
use crate::dom::{self, Listener};
use crate::error::{UiError, UiResult};
use crate::tags::catalog::TagField;
use crate::tags::selection::{HiddenField, SelectOutcome, TagSelection};

const ICON_UNSELECTED: &str = "fas fa-plus";
const ICON_SELECTED: &str = "fas fa-check";

// =============================================================================
// Rendered parts
// =============================================================================

struct Parts {
    document: Document,
    container: Element,
    input: HtmlInputElement,
    dropdown: HtmlElement,
    chips: HtmlElement,
    /// (option value, dropdown item), in option order
    items: Vec<(String, HtmlElement)>,
}

impl Parts {
    fn build(document: &Document, container: &Element, selection: &TagSelection, placeholder: &str) -> UiResult<Self> {
        let field = selection.field_name();
        container.set_text_content(None);

        let wrapper = dom::create(document, "div", "multi-select-wrapper")?;
        let chips = dom::create(document, "div", "selected-items")?;
        chips.set_id(&format!("{}-selected", field));

        let dropdown_box = dom::create(document, "div", "dropdown")?;
        let input = document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| UiError::Dom("input is not an HtmlInputElement".into()))?;
        input.set_class_name("form-control dropdown-input");
        input.set_type("text");
        input.set_placeholder(placeholder);
        input.set_id(&format!("{}-input", field));
        input.set_attribute("autocomplete", "off")?;

        let dropdown = dom::create(document, "div", "dropdown-menu")?;
        dropdown.set_id(&format!("{}-dropdown", field));
        dropdown.style().set_property("display", "none")?;

        let mut items = Vec::with_capacity(selection.options().len());
        for option in selection.options() {
            let item = dom::create(document, "div", "dropdown-item")?;
            item.set_attribute("data-value", option)?;
            let icon = document.create_element("i")?;
            icon.set_class_name(ICON_UNSELECTED);
            item.append_child(&icon)?;
            item.append_child(&document.create_text_node(&format!(" {}", option)))?;
            dropdown.append_child(&item)?;
            items.push((option.clone(), item));
        }

        dropdown_box.append_child(&input)?;
        dropdown_box.append_child(&dropdown)?;
        wrapper.append_child(&chips)?;
        wrapper.append_child(&dropdown_box)?;
        container.append_child(&wrapper)?;

        Ok(Self {
            document: document.clone(),
            container: container.clone(),
            input,
            dropdown,
            chips,
            items,
        })
    }

    fn open(&self) -> UiResult<()> {
        self.dropdown.style().set_property("display", "block")?;
        Ok(())
    }

    fn close(&self) -> UiResult<()> {
        self.dropdown.style().set_property("display", "none")?;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.dropdown
            .style()
            .get_property_value("display")
            .map(|d| d != "none")
            .unwrap_or(false)
    }

    fn focus_inside(&self) -> bool {
        let active = self.document.active_element();
        self.container.contains(active.as_deref())
    }

    fn apply_filter(&self, selection: &TagSelection) -> UiResult<()> {
        for ((_, item), visible) in self.items.iter().zip(selection.visibility()) {
            item.style()
                .set_property("display", if visible { "block" } else { "none" })?;
        }
        Ok(())
    }

    fn item(&self, value: &str) -> Option<&HtmlElement> {
        self.items.iter().find(|(v, _)| v == value).map(|(_, item)| item)
    }

    fn mark(&self, value: &str, selected: bool) -> UiResult<()> {
        if let Some(item) = self.item(value) {
            item.class_list().toggle_with_force("selected", selected)?;
            if let Some(icon) = item.query_selector("i")? {
                icon.set_class_name(if selected { ICON_SELECTED } else { ICON_UNSELECTED });
            }
        }
        Ok(())
    }

    fn add_chip(&self, field: &HiddenField) -> UiResult<()> {
        let value = field.value.as_str();
        let chip = dom::create(&self.document, "span", "selected-item")?;
        chip.set_attribute("data-value", value)?;
        chip.append_child(&self.document.create_text_node(value))?;

        let remove = dom::create(&self.document, "span", "remove-btn")?;
        remove.set_attribute("data-value", value)?;
        remove.set_text_content(Some("\u{00d7}"));
        chip.append_child(&remove)?;

        let hidden = self.document.create_element("input")?;
        hidden.set_attribute("type", "hidden")?;
        hidden.set_attribute("name", &field.name)?;
        hidden.set_attribute("value", value)?;
        chip.append_child(&hidden)?;

        self.chips.append_child(&chip)?;
        Ok(())
    }

    fn remove_chip(&self, value: &str) -> UiResult<()> {
        for chip in dom::query_all_in(&self.chips, ".selected-item")? {
            if chip.get_attribute("data-value").as_deref() == Some(value) {
                chip.remove();
            }
        }
        Ok(())
    }

    fn reset_input(&self) -> UiResult<()> {
        self.input.set_value("");
        self.input.focus()?;
        Ok(())
    }
}

// =============================================================================
// Operations
// =============================================================================

fn select_value(parts: &Parts, state: &RefCell<TagSelection>, value: &str) -> UiResult<SelectOutcome> {
    let outcome = state.borrow_mut().select(value);
    if outcome == SelectOutcome::Added {
        let field = state.borrow().hidden_field(value);
        if let Some(field) = field {
            parts.add_chip(&field)?;
        }
        parts.mark(value, true)?;
    }
    if outcome != SelectOutcome::Unknown {
        state.borrow_mut().clear_filter();
        parts.apply_filter(&state.borrow())?;
        parts.reset_input()?;
    }
    Ok(outcome)
}

fn remove_value(parts: &Parts, state: &RefCell<TagSelection>, value: &str) -> UiResult<bool> {
    if !state.borrow_mut().remove(value) {
        return Ok(false);
    }
    parts.remove_chip(value)?;
    parts.mark(value, false)?;
    Ok(true)
}

fn filter_to(parts: &Parts, state: &RefCell<TagSelection>, text: &str) -> UiResult<()> {
    state.borrow_mut().set_filter(text);
    parts.apply_filter(&state.borrow())
}

// =============================================================================
// TagSelector
// =============================================================================

/// A mounted tag picker; dropping it detaches its listeners
pub struct TagSelector {
    parts: Rc<Parts>,
    state: Rc<RefCell<TagSelection>>,
    _listeners: Vec<Listener>,
}

impl TagSelector {
    /// Mount one of the profile pickers into its container
    pub fn mount(document: &Document, container: &Element, field: TagField, config: &UiConfig) -> UiResult<Self> {
        Self::mount_with(
            document,
            container,
            TagSelection::new(field.field_name(), field.options()),
            field.placeholder(),
            config.blur_grace_ms,
        )
    }

    pub fn mount_with(
        document: &Document,
        container: &Element,
        selection: TagSelection,
        placeholder: &str,
        blur_grace_ms: Millis,
    ) -> UiResult<Self> {
        let parts = Rc::new(Parts::build(document, container, &selection, placeholder)?);
        let state = Rc::new(RefCell::new(selection));
        let mut listeners = Vec::with_capacity(5);

        let (p, s) = (parts.clone(), state.clone());
        listeners.push(Listener::new(&parts.input, "focus", move |_| {
            let result = p.open().and_then(|_| filter_to(&p, &s, ""));
            if let Err(e) = result {
                crate::console_warn!("[TagSelector] open failed: {}", e);
            }
        })?);

        let p = parts.clone();
        listeners.push(Listener::new(&parts.input, "blur", move |_| {
            let p = p.clone();
            let scheduled = dom::set_timeout(blur_grace_ms, move || {
                if !p.focus_inside() {
                    let _ = p.close();
                }
            });
            if let Err(e) = scheduled {
                crate::console_warn!("[TagSelector] blur timer failed: {}", e);
            }
        })?);

        let (p, s) = (parts.clone(), state.clone());
        listeners.push(Listener::new(&parts.input, "input", move |_| {
            let text = p.input.value();
            if let Err(e) = filter_to(&p, &s, &text) {
                crate::console_warn!("[TagSelector] filter failed: {}", e);
            }
        })?);

        let (p, s) = (parts.clone(), state.clone());
        listeners.push(Listener::new(&parts.dropdown, "click", move |event| {
            let Some(value) = dom::event_closest(&event, ".dropdown-item")
                .and_then(|item| item.get_attribute("data-value"))
            else {
                return;
            };
            if let Err(e) = select_value(&p, &s, &value) {
                crate::console_warn!("[TagSelector] select '{}' failed: {}", value, e);
            }
        })?);

        let (p, s) = (parts.clone(), state.clone());
        listeners.push(Listener::new(&parts.chips, "click", move |event| {
            let Some(value) = dom::event_closest(&event, ".remove-btn")
                .and_then(|btn| btn.get_attribute("data-value"))
            else {
                return;
            };
            if let Err(e) = remove_value(&p, &s, &value) {
                crate::console_warn!("[TagSelector] remove '{}' failed: {}", value, e);
            }
        })?);

        Ok(Self {
            parts,
            state,
            _listeners: listeners,
        })
    }

    pub fn field_name(&self) -> String {
        self.state.borrow().field_name().to_string()
    }

    /// Selected values, oldest first
    pub fn selected(&self) -> Vec<String> {
        self.state.borrow().selected().to_vec()
    }

    /// Hidden inputs the selection should have produced, oldest first
    pub fn hidden_fields(&self) -> Vec<HiddenField> {
        self.state.borrow().hidden_fields()
    }

    pub fn select(&self, value: &str) -> UiResult<SelectOutcome> {
        select_value(&self.parts, &self.state, value)
    }

    pub fn remove(&self, value: &str) -> UiResult<bool> {
        remove_value(&self.parts, &self.state, value)
    }

    pub fn set_filter(&self, text: &str) -> UiResult<()> {
        self.parts.input.set_value(text);
        filter_to(&self.parts, &self.state, text)
    }

    pub fn is_open(&self) -> bool {
        self.parts.is_open()
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.parts.input
    }
}
