//! FormGuard: required-field checks and busy submit buttons

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::UiConfig;
use crate::dom::{self, Listener};
use crate::error::UiResult;
use crate::forms::rules::{is_blank, RangeRule};

pub const REQUIRED_SELECTOR: &str = "[required]";
pub const INVALID_CLASS: &str = "is-invalid";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const RANGE_ATTR: &str = "data-range";
pub const SUBMIT_BUSY_LABEL: &str = "Processing...";

/// Mark every required field of `form`; true when none is blank
pub fn validate_form_element(form: &Element) -> UiResult<bool> {
    let mut valid = true;
    for field in dom::query_all_in(form, REQUIRED_SELECTOR)? {
        let blank = is_blank(&dom::field_value(&field));
        field.class_list().toggle_with_force(INVALID_CLASS, blank)?;
        valid &= !blank;
    }
    Ok(valid)
}

/// Validate the form with id `form_id`; a missing form passes
pub fn validate_form(document: &Document, form_id: &str) -> UiResult<bool> {
    match document.get_element_by_id(form_id) {
        Some(form) => validate_form_element(&form),
        None => Ok(true),
    }
}

/// Set or clear the field's custom validity message
pub fn validate_range(input: &HtmlInputElement, rule: &RangeRule) -> Option<String> {
    let message = rule.check(&input.value());
    input.set_custom_validity(message.as_deref().unwrap_or(""));
    message
}

/// Rule named by a `data-range` attribute
pub fn rule_for(kind: &str, config: &UiConfig) -> Option<RangeRule> {
    match kind {
        "score" | "cgpa" => Some(RangeRule::score(config.score_bounds)),
        "age" => Some(RangeRule::age(config.age_bounds)),
        _ => None,
    }
}

pub struct FormGuard {
    form_count: usize,
    _listeners: Vec<Listener>,
}

impl FormGuard {
    /// Guard every form and wire `[data-range]` fields; `None` if neither exists
    pub fn mount(document: &Document, config: &UiConfig) -> UiResult<Option<Self>> {
        let forms = dom::query_all(document, "form")?;
        let mut listeners = Vec::new();

        for form in &forms {
            let (doc, el) = (document.clone(), form.clone());
            listeners.push(Listener::new(form, "submit", move |event| {
                let valid = match validate_form_element(&el) {
                    Ok(valid) => valid,
                    Err(e) => {
                        crate::console_warn!("[FormGuard] validation failed: {}", e);
                        return;
                    }
                };
                if !valid {
                    event.prevent_default();
                    return;
                }
                let submit = el
                    .query_selector(SUBMIT_SELECTOR)
                    .ok()
                    .flatten()
                    .and_then(|b| b.dyn_into::<HtmlElement>().ok());
                if let Some(submit) = submit {
                    let busy = dom::set_disabled(&submit, true)
                        .and_then(|_| dom::show_busy_label(&doc, &submit, SUBMIT_BUSY_LABEL));
                    if let Err(e) = busy {
                        crate::console_warn!("[FormGuard] busy label failed: {}", e);
                    }
                }
            })?);
        }

        for field in dom::query_all(document, &format!("[{}]", RANGE_ATTR))? {
            let kind = field.get_attribute(RANGE_ATTR).unwrap_or_default();
            let Some(rule) = rule_for(&kind, config) else {
                crate::console_warn!("[FormGuard] unknown {} '{}'", RANGE_ATTR, kind);
                continue;
            };
            let Ok(input) = field.dyn_into::<HtmlInputElement>() else {
                continue;
            };
            let target = input.clone();
            listeners.push(Listener::new(&target, "input", move |_| {
                validate_range(&input, &rule);
            })?);
        }

        if listeners.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            form_count: forms.len(),
            _listeners: listeners,
        }))
    }

    pub fn form_count(&self) -> usize {
        self.form_count
    }
}
