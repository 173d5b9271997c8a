//! TagSelection: the state behind one tag picker
//!
//! Owns the immutable option list, the selected values in the order they were
//! picked, and the current filter text. The DOM widget renders from this and
//! never keeps a second copy of the selection.

// =============================================================================
// Types
// =============================================================================

/// Result of trying to select a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Newly selected; a chip and hidden field must be added
    Added,
    /// Already selected; nothing changes
    AlreadySelected,
    /// Not one of the candidates
    Unknown,
}

/// One `<input type="hidden">` the enclosing form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

// =============================================================================
// TagSelection
// =============================================================================

#[derive(Debug, Clone)]
pub struct TagSelection {
    field_name: String,
    options: Vec<String>,
    selected: Vec<String>,
    filter: String,
}

impl TagSelection {
    pub fn new<S: AsRef<str>>(field_name: &str, options: &[S]) -> Self {
        Self {
            field_name: field_name.to_string(),
            options: options.iter().map(|o| o.as_ref().to_string()).collect(),
            selected: Vec::new(),
            filter: String::new(),
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Selected values, oldest first
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|s| s == value)
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn select(&mut self, value: &str) -> SelectOutcome {
        if !self.options.iter().any(|o| o == value) {
            return SelectOutcome::Unknown;
        }
        if self.is_selected(value) {
            return SelectOutcome::AlreadySelected;
        }
        self.selected.push(value.to_string());
        SelectOutcome::Added
    }

    /// Returns true if the value was selected
    pub fn remove(&mut self, value: &str) -> bool {
        match self.selected.iter().position(|s| s == value) {
            Some(idx) => {
                self.selected.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Visibility of each option under the current filter, in option order
    pub fn visibility(&self) -> Vec<bool> {
        let needle = self.filter.to_lowercase();
        self.options
            .iter()
            .map(|option| option_matches(option, &needle))
            .collect()
    }

    /// Options shown under the current filter
    pub fn visible_options(&self) -> Vec<&str> {
        self.options
            .iter()
            .zip(self.visibility())
            .filter(|(_, visible)| *visible)
            .map(|(option, _)| option.as_str())
            .collect()
    }

    /// The hidden input submitted for `value`, if it is selected
    pub fn hidden_field(&self, value: &str) -> Option<HiddenField> {
        self.is_selected(value).then(|| HiddenField {
            name: self.field_name.clone(),
            value: value.to_string(),
        })
    }

    /// Hidden inputs mirroring the selection, one per value
    pub fn hidden_fields(&self) -> Vec<HiddenField> {
        self.selected
            .iter()
            .filter_map(|value| self.hidden_field(value))
            .collect()
    }
}

/// Case-insensitive substring test; `needle` must already be lowercase
fn option_matches(option: &str, needle: &str) -> bool {
    needle.is_empty() || option.to_lowercase().contains(needle)
}
