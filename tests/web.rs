//! Browser tests for the DOM components
//!
//! Run with `wasm-pack test --headless --firefox` (or `--chrome`).

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use matchboard::config::UiConfig;
use matchboard::forms::{self, FormGuard, RangeRule};
use matchboard::matching::{ButtonPhase, MatchingTrigger};
use matchboard::notify::{NotificationCenter, Severity};
use matchboard::page::Page;
use matchboard::progress::ProgressReveal;
use matchboard::tags::{SelectOutcome, TagField, TagSelector};
use matchboard::tooltip::TooltipController;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Fixtures
// ============================================================================

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Attach `html` in a fresh wrapper; the caller removes it when done
fn fixture(html: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(html);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

fn find(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {}", selector))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn skills_picker(root: &Element) -> TagSelector {
    let container = root.query_selector("#skills-container").unwrap().unwrap();
    TagSelector::mount(&document(), &container, TagField::Skills, &UiConfig::instant()).unwrap()
}

// ============================================================================
// Tag selector
// ============================================================================

#[wasm_bindgen_test]
fn test_selecting_twice_yields_one_chip_and_field() {
    let root = fixture(r#"<div id="skills-container"></div>"#);
    let picker = skills_picker(&root);

    assert_eq!(picker.select("Python").unwrap(), SelectOutcome::Added);
    assert_eq!(picker.select("Python").unwrap(), SelectOutcome::AlreadySelected);

    assert_eq!(count(&root, ".selected-item"), 1);
    assert_eq!(count(&root, r#"input[type="hidden"][name="skills"]"#), 1);
    let hidden = root
        .query_selector(r#"input[type="hidden"][name="skills"]"#)
        .unwrap()
        .unwrap();
    assert_eq!(hidden.get_attribute("value").as_deref(), Some("Python"));

    let item = find(&root, r#".dropdown-item[data-value="Python"]"#);
    assert!(item.class_list().contains("selected"));
    assert_eq!(find(&item, "i").class_name(), "fas fa-check");
    assert_eq!(picker.input().value(), "");

    drop(picker);
    root.remove();
}

#[wasm_bindgen_test]
fn test_clicking_items_and_remove_buttons() {
    let root = fixture(r#"<div id="skills-container"></div>"#);
    let picker = skills_picker(&root);

    find(&root, r#".dropdown-item[data-value="SQL"]"#).click();
    find(&root, r#".dropdown-item[data-value="GIS"]"#).click();
    assert_eq!(picker.selected(), vec!["SQL".to_string(), "GIS".to_string()]);

    find(&root, r#".remove-btn[data-value="SQL"]"#).click();
    assert_eq!(picker.selected(), vec!["GIS".to_string()]);
    assert_eq!(count(&root, ".selected-item"), 1);
    assert_eq!(count(&root, r#"input[type="hidden"][value="SQL"]"#), 0);

    let item = find(&root, r#".dropdown-item[data-value="SQL"]"#);
    assert!(!item.class_list().contains("selected"));
    assert_eq!(find(&item, "i").class_name(), "fas fa-plus");

    item.click();
    assert_eq!(picker.selected(), vec!["GIS".to_string(), "SQL".to_string()]);

    drop(picker);
    root.remove();
}

#[wasm_bindgen_test]
fn test_filter_hides_non_matching_items() {
    let root = fixture(r#"<div id="skills-container"></div>"#);
    let picker = skills_picker(&root);

    picker.set_filter("ANALY").unwrap();
    let items = root.query_selector_all(".dropdown-item").unwrap();
    for i in 0..items.length() {
        let item = items.item(i).unwrap().dyn_into::<HtmlElement>().unwrap();
        let value = item.get_attribute("data-value").unwrap();
        let display = item.style().get_property_value("display").unwrap();
        let expected = if value.to_lowercase().contains("analy") { "block" } else { "none" };
        assert_eq!(display, expected, "{}", value);
    }
    assert_eq!(count(&root, ".dropdown-item"), 36);

    drop(picker);
    root.remove();
}

#[wasm_bindgen_test]
fn test_hidden_inputs_mirror_the_selection() {
    let root = fixture(r#"<div id="skills-container"></div>"#);
    let picker = skills_picker(&root);
    for value in ["Java", "SQL", "Java", "Statistics"] {
        picker.select(value).unwrap();
    }
    picker.remove("SQL").unwrap();

    let inputs = root.query_selector_all(r#"input[type="hidden"]"#).unwrap();
    let rendered: Vec<(String, String)> = (0..inputs.length())
        .map(|i| {
            let input = inputs.item(i).unwrap().dyn_into::<Element>().unwrap();
            (
                input.get_attribute("name").unwrap(),
                input.get_attribute("value").unwrap(),
            )
        })
        .collect();
    let expected: Vec<(String, String)> = picker
        .hidden_fields()
        .into_iter()
        .map(|f| (f.name, f.value))
        .collect();
    assert_eq!(rendered, expected);
    assert_eq!(
        expected,
        vec![
            ("skills".to_string(), "Java".to_string()),
            ("skills".to_string(), "Statistics".to_string()),
        ]
    );

    drop(picker);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_blur_closes_after_grace_unless_focus_stays_inside() {
    let root = fixture(r#"<div id="skills-container"></div>"#);
    let picker = skills_picker(&root);
    let input = picker.input().clone();

    // Focus still on the input: the grace timer leaves the dropdown open
    input.focus().unwrap();
    input.dispatch_event(&Event::new("focus").unwrap()).unwrap();
    assert!(picker.is_open());
    input.dispatch_event(&Event::new("blur").unwrap()).unwrap();
    sleep(20).await;
    assert!(picker.is_open());

    // Focus gone: the dropdown closes once the grace delay passes
    input.blur().unwrap();
    input.dispatch_event(&Event::new("blur").unwrap()).unwrap();
    sleep(20).await;
    assert!(!picker.is_open());

    drop(picker);
    root.remove();
}

#[wasm_bindgen_test]
fn test_focus_opens_dropdown() {
    let root = fixture(r#"<div id="skills-container"></div>"#);
    let picker = skills_picker(&root);
    assert!(!picker.is_open());

    picker.input().dispatch_event(&Event::new("focus").unwrap()).unwrap();
    assert!(picker.is_open());

    drop(picker);
    root.remove();
}

// ============================================================================
// Forms
// ============================================================================

#[wasm_bindgen_test]
fn test_validate_form_marks_blank_required_fields() {
    let root = fixture(
        r#"<form id="profile-form">
             <input name="name" required value="  ">
             <input name="email" required value="a@b.in">
             <input name="phone">
           </form>"#,
    );
    let doc = document();

    assert!(!forms::validate_form(&doc, "profile-form").unwrap());
    assert!(find(&root, r#"[name="name"]"#).class_list().contains("is-invalid"));
    assert!(!find(&root, r#"[name="email"]"#).class_list().contains("is-invalid"));

    find(&root, r#"[name="name"]"#)
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .set_value("Asha");
    assert!(forms::validate_form(&doc, "profile-form").unwrap());
    assert!(!find(&root, r#"[name="name"]"#).class_list().contains("is-invalid"));

    assert!(forms::validate_form(&doc, "no-such-form").unwrap());
    root.remove();
}

#[wasm_bindgen_test]
fn test_range_validators_set_custom_validity() {
    let root = fixture(r#"<input id="cgpa" type="text"><input id="age" type="text">"#);
    let config = UiConfig::default();
    let score = find(&root, "#cgpa").dyn_into::<HtmlInputElement>().unwrap();
    let age = find(&root, "#age").dyn_into::<HtmlInputElement>().unwrap();
    let score_rule = RangeRule::score(config.score_bounds);
    let age_rule = RangeRule::age(config.age_bounds);

    for (raw, ok) in [("0", true), ("10", true), ("-0.1", false), ("10.1", false)] {
        score.set_value(raw);
        assert_eq!(forms::validate_range(&score, &score_rule).is_none(), ok, "{}", raw);
        assert_eq!(score.check_validity(), ok, "{}", raw);
    }
    for (raw, ok) in [("18", true), ("35", true), ("17", false), ("36", false)] {
        age.set_value(raw);
        assert_eq!(forms::validate_range(&age, &age_rule).is_none(), ok, "{}", raw);
    }
    root.remove();
}

#[wasm_bindgen_test]
fn test_valid_submit_marks_button_busy() {
    let root = fixture(
        r#"<form id="guarded" action="javascript:void(0)">
             <input name="college" required value="IIT">
             <button type="submit">Save</button>
           </form>"#,
    );
    let page = Page::mount(&document(), UiConfig::instant()).unwrap();
    assert!(page.summary().forms >= 1);

    let form = find(&root, "#guarded");
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    let button = find(&root, r#"button[type="submit"]"#);
    assert!(button.has_attribute("disabled"));
    assert!(button.text_content().unwrap().contains("Processing..."));
    assert_eq!(count(&button, ".spinner"), 1);

    drop(page);
    root.remove();
}

#[wasm_bindgen_test]
fn test_invalid_submit_is_withheld() {
    let root = fixture(
        r#"<form id="incomplete" action="javascript:void(0)">
             <input name="college" required value="">
             <button type="submit">Save</button>
           </form>"#,
    );
    let guard = FormGuard::mount(&document(), &UiConfig::instant())
        .unwrap()
        .unwrap();

    let init = EventInit::new();
    init.set_cancelable(true);
    let submit = Event::new_with_event_init_dict("submit", &init).unwrap();
    let proceeded = find(&root, "#incomplete").dispatch_event(&submit).unwrap();

    assert!(!proceeded);
    assert!(submit.default_prevented());
    let button = find(&root, r#"button[type="submit"]"#);
    assert!(!button.has_attribute("disabled"));
    assert_eq!(button.text_content().unwrap(), "Save");
    assert!(find(&root, r#"[name="college"]"#).class_list().contains("is-invalid"));

    drop(guard);
    root.remove();
}

#[wasm_bindgen_test]
fn test_data_range_field_checks_on_input() {
    let root = fixture(r#"<form><input name="age" type="text" data-range="age"></form>"#);
    let guard = FormGuard::mount(&document(), &UiConfig::default())
        .unwrap()
        .unwrap();
    let age = find(&root, r#"[name="age"]"#).dyn_into::<HtmlInputElement>().unwrap();

    age.set_value("17");
    age.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert_eq!(age.validation_message().unwrap(), "Age must be between 18 and 35");
    assert!(!age.check_validity());

    age.set_value("24");
    age.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert_eq!(age.validation_message().unwrap(), "");
    assert!(age.check_validity());

    drop(guard);
    root.remove();
}

// ============================================================================
// Notifications, tooltips, progress
// ============================================================================

#[wasm_bindgen_test]
fn test_notification_renders_and_closes() {
    let doc = document();
    let center = NotificationCenter::new(&doc, &UiConfig::default()).unwrap();
    let banner = center
        .notify("Error", "Failed to run matching for all students.", Severity::Error)
        .unwrap();

    assert!(banner.class_list().contains("alert-danger"));
    assert_eq!(banner.style().get_property_value("position").unwrap(), "fixed");
    assert!(banner.text_content().unwrap().contains("Failed to run matching"));
    assert!(banner.parent_element().is_some());
    assert_eq!(center.shown(), 1);

    find(&banner, ".btn-close").click();
    assert!(banner.parent_element().is_none());
}

#[wasm_bindgen_test]
async fn test_notification_expires() {
    let doc = document();
    let center = NotificationCenter::new(&doc, &UiConfig::instant()).unwrap();
    let banner = center.notify("Success", "Matched 7 students successfully!", Severity::Success).unwrap();
    sleep(50).await;
    assert!(banner.parent_element().is_none());
}

#[wasm_bindgen_test]
fn test_tooltip_lives_for_the_hover() {
    let root = fixture(r#"<span data-tooltip="Rural applicants get priority">?</span>"#);
    let controller = TooltipController::mount(&document(), &UiConfig::default())
        .unwrap()
        .unwrap();
    let source = find(&root, "[data-tooltip]");

    source.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    source.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    assert_eq!(controller.live_count(), 1);
    assert_eq!(document().query_selector_all(".custom-tooltip").unwrap().length(), 1);

    source.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    assert_eq!(controller.live_count(), 0);
    assert_eq!(document().query_selector_all(".custom-tooltip").unwrap().length(), 0);

    drop(controller);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_progress_bar_grows_once() {
    let root = fixture(
        r#"<div class="progress" style="height: 12px"><div class="progress-bar" data-progress="75%" style="width: 75%; height: 12px"></div></div>"#,
    );
    let config = UiConfig {
        progress_start_delay_ms: 400,
        ..UiConfig::instant()
    };
    let reveal = ProgressReveal::mount(&document(), &config).unwrap().unwrap();
    let bar = find(&root, ".progress-bar");

    sleep(150).await;
    assert_eq!(reveal.revealed_count(), 1);
    assert_eq!(bar.style().get_property_value("width").unwrap(), "0%");
    assert!(bar
        .style()
        .get_property_value("transition")
        .unwrap()
        .contains("ease-in-out"));

    sleep(450).await;
    assert_eq!(bar.style().get_property_value("width").unwrap(), "75%");
    assert_eq!(reveal.revealed_count(), 1);

    window_scroll_and_back().await;
    assert_eq!(reveal.revealed_count(), 1);

    drop(reveal);
    root.remove();
}

async fn window_scroll_and_back() {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 10_000.0);
    sleep(50).await;
    window.scroll_to_with_x_and_y(0.0, 0.0);
    sleep(50).await;
}

// ============================================================================
// Matching trigger
// ============================================================================

#[wasm_bindgen_test]
async fn test_bulk_failure_reports_and_restores_button() {
    let root = fixture(r#"<button id="match-all-btn">Match All</button>"#);
    let doc = document();
    let config = UiConfig {
        bulk_match_endpoint: "/matchboard-missing-endpoint".to_string(),
        ..UiConfig::instant()
    };
    let center = Rc::new(NotificationCenter::new(&doc, &UiConfig::default()).unwrap());
    let trigger = MatchingTrigger::mount(&doc, &config, center.clone())
        .unwrap()
        .unwrap();
    assert!(trigger.single_state().is_none());

    let button = find(&root, "#match-all-btn");
    button.click();
    assert!(button.has_attribute("disabled"));
    assert!(button.text_content().unwrap().contains("Matching All Students..."));
    assert_eq!(trigger.bulk_state().unwrap().phase(), ButtonPhase::Busy);

    // A second click while busy is ignored
    button.click();

    sleep(500).await;
    assert_eq!(trigger.bulk_state().unwrap().phase(), ButtonPhase::Idle);
    assert_eq!(button.text_content().unwrap(), "Match All");
    assert!(!button.has_attribute("disabled"));
    assert_eq!(center.shown(), 1);

    let banners = doc.query_selector_all(".notification.alert-danger").unwrap();
    assert!(banners.length() >= 1);
    for i in 0..banners.length() {
        banners.item(i).unwrap().dyn_into::<Element>().unwrap().remove();
    }

    drop(trigger);
    root.remove();
}

#[wasm_bindgen_test]
fn test_single_trigger_without_subject_stays_idle() {
    let root = fixture(r#"<button id="run-matching-btn">Find Matches</button>"#);
    let doc = document();
    let center = Rc::new(NotificationCenter::new(&doc, &UiConfig::default()).unwrap());
    let trigger = MatchingTrigger::mount(&doc, &UiConfig::instant(), center)
        .unwrap()
        .unwrap();

    let button = find(&root, "#run-matching-btn");
    button.click();
    assert_eq!(trigger.single_state().unwrap().phase(), ButtonPhase::Idle);
    assert!(!button.has_attribute("disabled"));
    assert_eq!(button.text_content().unwrap(), "Find Matches");

    drop(trigger);
    root.remove();
}

// ============================================================================
// Page
// ============================================================================

#[wasm_bindgen_test]
fn test_page_mounts_only_present_components() {
    let root = fixture(
        r#"<div id="interests-container"></div>
           <button id="match-all-btn">Match All</button>"#,
    );
    let page = Page::mount(&document(), UiConfig::instant()).unwrap();
    let summary = page.summary();

    assert!(summary.interests);
    assert!(!summary.skills);
    assert!(summary.matching);
    assert!(page.picker("interests").is_some());
    assert_eq!(count(&root, "#interests-container .dropdown-item"), 18);

    drop(page);
    root.remove();
}
