//! Page: one instance of every component, mounted together
//!
//! Each component looks for its anchors and is skipped when they are absent
//! or fail to bind; only the notification center is required. Dropping the
//! page removes every listener it registered.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::config::{UiConfig, CONFIG_SCRIPT_ID};
use crate::error::UiResult;
use crate::forms::FormGuard;
use crate::matching::MatchingTrigger;
use crate::notify::{schedule_flash_fade, NotificationCenter};
use crate::progress::ProgressReveal;
use crate::scroll::AnchorScroller;
use crate::tags::{TagField, TagSelector};
use crate::tooltip::TooltipController;

/// What got mounted, reported back to the host page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub skills: bool,
    pub interests: bool,
    pub matching: bool,
    pub progress_bars: usize,
    pub tooltips: usize,
    pub forms: usize,
    pub anchor_links: bool,
}

pub struct Page {
    config: UiConfig,
    notifications: Rc<NotificationCenter>,
    skills: Option<TagSelector>,
    interests: Option<TagSelector>,
    matching: Option<MatchingTrigger>,
    progress: Option<ProgressReveal>,
    tooltips: Option<TooltipController>,
    forms: Option<FormGuard>,
    anchors: Option<AnchorScroller>,
}

impl Page {
    pub fn mount(document: &Document, config: UiConfig) -> UiResult<Self> {
        let notifications = Rc::new(NotificationCenter::new(document, &config)?);

        let skills = mount_picker(document, &config.anchors.skills_container, TagField::Skills, &config);
        let interests = mount_picker(document, &config.anchors.interests_container, TagField::Interests, &config);
        let matching = optional(
            "MatchingTrigger",
            MatchingTrigger::mount(document, &config, notifications.clone()),
        );
        let progress = optional("ProgressReveal", ProgressReveal::mount(document, &config));
        let tooltips = optional("Tooltip", TooltipController::mount(document, &config));
        let forms = optional("FormGuard", FormGuard::mount(document, &config));
        let anchors = optional("AnchorScroller", AnchorScroller::mount(document));

        if let Err(e) = schedule_flash_fade(document, &config) {
            crate::console_warn!("[Page] flash fade not scheduled: {}", e);
        }

        let page = Self {
            config,
            notifications,
            skills,
            interests,
            matching,
            progress,
            tooltips,
            forms,
            anchors,
        };
        crate::console_log!("[Page] mounted {:?}", page.summary());
        Ok(page)
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn notifications(&self) -> Rc<NotificationCenter> {
        self.notifications.clone()
    }

    pub fn picker(&self, field: &str) -> Option<&TagSelector> {
        match field {
            "skills" => self.skills.as_ref(),
            "interests" => self.interests.as_ref(),
            _ => None,
        }
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary {
            skills: self.skills.is_some(),
            interests: self.interests.is_some(),
            matching: self.matching.is_some(),
            progress_bars: self.progress.as_ref().map_or(0, |p| p.bar_count()),
            tooltips: self.tooltips.as_ref().map_or(0, |t| t.source_count()),
            forms: self.forms.as_ref().map_or(0, |f| f.form_count()),
            anchor_links: self.anchors.is_some(),
        }
    }
}

fn mount_picker(document: &Document, id: &str, field: TagField, config: &UiConfig) -> Option<TagSelector> {
    let container = document.get_element_by_id(id)?;
    optional(
        "TagSelector",
        TagSelector::mount(document, &container, field, config).map(Some),
    )
}

/// Keep a component that mounted, log and drop one that failed
fn optional<T>(name: &str, mounted: UiResult<Option<T>>) -> Option<T> {
    match mounted {
        Ok(component) => component,
        Err(e) => {
            crate::console_error!("[{}] not mounted: {}", name, e);
            None
        }
    }
}

/// Defaults, then the page's JSON config block, then `overrides`
pub fn resolve_config(document: &Document, overrides: Option<&str>) -> UiResult<UiConfig> {
    let mut config = UiConfig::default();
    if let Some(json) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
        .filter(|json| !json.trim().is_empty())
    {
        config = config.merged_with_json(&json)?;
    }
    if let Some(json) = overrides {
        config = config.merged_with_json(json)?;
    }
    Ok(config)
}

// =============================================================================
// Page slot
// =============================================================================

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    static STANDALONE: RefCell<Option<Rc<NotificationCenter>>> = const { RefCell::new(None) };
}

/// Mount a page into the slot, replacing (and tearing down) any previous one
pub fn install(page: Page) -> PageSummary {
    let summary = page.summary();
    let previous = PAGE.with(|slot| slot.borrow_mut().replace(page));
    drop(previous);
    summary
}

/// Tear down the mounted page; true if there was one
pub fn uninstall() -> bool {
    let previous = PAGE.with(|slot| slot.borrow_mut().take());
    previous.is_some()
}

pub fn with_page<R>(f: impl FnOnce(&Page) -> R) -> Option<R> {
    PAGE.with(|slot| slot.borrow().as_ref().map(f))
}

/// The mounted page's center, or a standalone one for pages never mounted
pub fn notification_center(document: &Document) -> UiResult<Rc<NotificationCenter>> {
    if let Some(center) = with_page(|page| page.notifications()) {
        return Ok(center);
    }
    STANDALONE.with(|slot| -> UiResult<Rc<NotificationCenter>> {
        if let Some(center) = slot.borrow().as_ref() {
            return Ok(center.clone());
        }
        let center = Rc::new(NotificationCenter::new(document, &UiConfig::default())?);
        *slot.borrow_mut() = Some(center.clone());
        Ok(center)
    })
}

/// Config of the mounted page, or defaults
pub fn current_config() -> UiConfig {
    with_page(|page| page.config().clone()).unwrap_or_default()
}
