// Filler options - Timeouts, retry caps and control markers
//
// Defaults target Ant Design markup (the component library the control
// markers below come from). Every marker can be overridden, either in code or
// from a JSON document.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// CSS selectors identifying each control family and the overlays the
/// generators interact with.
///
/// Overlay selectors (options lists, popovers, panels, dialogs) are resolved
/// from the page root; control selectors are resolved inside the fill scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selectors {
    /// Editable `<input>` elements
    pub inputs: String,
    /// Editable `<textarea>` elements
    pub textareas: String,
    /// Date picker wrappers
    pub date_pickers: String,
    /// Input inside a date picker wrapper that opens its overlay
    pub date_picker_trigger: String,
    /// "Today" quick-select in an open date picker overlay
    pub date_picker_today: String,
    /// "Now" quick-select in an open date picker overlay
    pub date_picker_now: String,
    /// Color picker triggers
    pub color_pickers: String,
    /// Swatches inside an open color picker popover
    pub color_swatches: String,
    /// Select-type dropdowns inside form items
    pub dropdowns: String,
    /// Options of the open dropdown list
    pub dropdown_options: String,
    /// Dialog asking for a cancel reason after some dropdown selections
    pub cancel_reason_dialog: String,
    /// Autocomplete combos (grid-embedded combos excluded)
    pub combos: String,
    /// Icons inside a combo that open its results grid
    pub combo_triggers: String,
    /// Results panel of an open combo
    pub combo_panel: String,
    /// Search box of the results panel
    pub combo_search: String,
    /// Result rows of the results panel
    pub combo_rows: String,
    /// Icon confirming the selected row
    pub combo_confirm: String,
    /// Refresh icon of a grid-embedded combo's results
    pub combo_refresh: String,
    /// Loading overlay shown while a request is in flight
    pub loading_overlay: String,
    /// Active tab container, scrolled back when a click is intercepted
    pub active_tab: String,
    /// Generic confirmation dialog
    pub confirm_dialog: String,
    /// "No"/"Cancel" button of the generic confirmation dialog
    pub confirm_dialog_cancel: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            inputs: "input:not([readonly]):not([disabled]):not(.ant-checkbox-wrapper-disabled input)"
                .to_string(),
            textareas: "textarea:not([disabled])".to_string(),
            date_pickers: ".ant-picker:not(.ant-picker-disabled)".to_string(),
            date_picker_trigger: "input".to_string(),
            date_picker_today: ".ant-picker-dropdown:not(.ant-picker-dropdown-hidden) .ant-picker-today-btn"
                .to_string(),
            date_picker_now: ".ant-picker-dropdown:not(.ant-picker-dropdown-hidden) .ant-picker-now-btn"
                .to_string(),
            color_pickers: ".ant-color-picker-trigger".to_string(),
            color_swatches: ".ant-popover:not(.ant-popover-hidden) .ant-color-picker-presets-color"
                .to_string(),
            dropdowns: ".ant-form-item .ant-select:not(.ant-select-disabled):not(.combo-box)"
                .to_string(),
            dropdown_options: ".ant-select-dropdown:not(.ant-select-dropdown-hidden) .ant-select-item-option"
                .to_string(),
            cancel_reason_dialog: ".cancel-reason-modal".to_string(),
            combos: ".combo-box:not(.combo-box-in-grid)".to_string(),
            combo_triggers: ".combo-box-open-grid".to_string(),
            combo_panel: ".combo-grid-panel".to_string(),
            combo_search: ".combo-grid-panel .combo-grid-search input".to_string(),
            combo_rows: ".combo-grid-panel .ant-table-row".to_string(),
            combo_confirm: ".combo-grid-panel .combo-grid-confirm".to_string(),
            combo_refresh: ".combo-grid-panel .combo-grid-refresh".to_string(),
            loading_overlay: ".ant-spin-spinning".to_string(),
            active_tab: ".ant-tabs-tabpane-active".to_string(),
            confirm_dialog: ".ant-modal-confirm".to_string(),
            confirm_dialog_cancel: ".ant-modal-confirm-btns .ant-btn:not(.ant-btn-primary)"
                .to_string(),
        }
    }
}

impl Selectors {
    /// Parses selectors from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Options for [`FormFiller`](crate::FormFiller)
///
/// Use the builder to override individual values:
///
/// ```ignore
/// use playwright_formfill::FillerOptions;
/// use std::time::Duration;
///
/// let options = FillerOptions::builder()
///     .loading_timeout(Duration::from_secs(20))
///     .dropdown_attempts(3)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct FillerOptions {
    /// Control and overlay markers
    pub selectors: Selectors,
    /// Timeout for clicks on combo triggers (default 3000ms)
    pub click_timeout: Duration,
    /// Timeout for the loading overlay to detach (default 10s)
    pub loading_timeout: Duration,
    /// How long to wait for a confirmation dialog to appear (default 2s)
    pub dialog_timeout: Duration,
    /// Delay for a dropdown option list to render (default 300ms)
    pub dropdown_render_delay: Duration,
    /// Delay before clicking a dropdown option by title (default 500ms)
    pub dropdown_select_delay: Duration,
    /// Attempts for the open/enumerate/click dropdown sequence (default 5)
    pub dropdown_attempts: u32,
    /// Attempts per combo trigger click (default 2)
    pub combo_click_attempts: u32,
    /// Pause after scrolling back before retrying a combo click (default 200ms)
    pub combo_recover_delay: Duration,
    /// Delay for combo search results after pressing Enter (default 800ms)
    pub combo_search_delay: Duration,
    /// Pause before dismissing a combo confirmation dialog (default 1s)
    pub combo_dialog_delay: Duration,
    /// Attempts for opening a grid-embedded combo (default 2)
    pub grid_combo_attempts: u32,
    /// Delay for grid-embedded combo search results (default 500ms)
    pub grid_search_delay: Duration,
    /// Key pressed to move a range slider up one step
    pub increase_key: String,
}

impl Default for FillerOptions {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            click_timeout: Duration::from_millis(3000),
            loading_timeout: Duration::from_secs(10),
            dialog_timeout: Duration::from_secs(2),
            dropdown_render_delay: Duration::from_millis(300),
            dropdown_select_delay: Duration::from_millis(500),
            dropdown_attempts: 5,
            combo_click_attempts: 2,
            combo_recover_delay: Duration::from_millis(200),
            combo_search_delay: Duration::from_millis(800),
            combo_dialog_delay: Duration::from_secs(1),
            grid_combo_attempts: 2,
            grid_search_delay: Duration::from_millis(500),
            increase_key: "ArrowRight".to_string(),
        }
    }
}

impl FillerOptions {
    /// Create a new builder for FillerOptions
    pub fn builder() -> FillerOptionsBuilder {
        FillerOptionsBuilder::default()
    }

    /// Checks that the options can drive every generator
    pub fn validate(&self) -> Result<()> {
        let attempts = [
            ("dropdown_attempts", self.dropdown_attempts),
            ("combo_click_attempts", self.combo_click_attempts),
            ("grid_combo_attempts", self.grid_combo_attempts),
        ];
        for (name, value) in attempts {
            if value == 0 {
                return Err(Error::InvalidArgument(format!("{} must be at least 1", name)));
            }
        }
        if self.increase_key.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "increase_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for FillerOptions
#[derive(Debug, Clone, Default)]
pub struct FillerOptionsBuilder {
    selectors: Option<Selectors>,
    click_timeout: Option<Duration>,
    loading_timeout: Option<Duration>,
    dialog_timeout: Option<Duration>,
    dropdown_render_delay: Option<Duration>,
    dropdown_select_delay: Option<Duration>,
    dropdown_attempts: Option<u32>,
    combo_click_attempts: Option<u32>,
    combo_recover_delay: Option<Duration>,
    combo_search_delay: Option<Duration>,
    combo_dialog_delay: Option<Duration>,
    grid_combo_attempts: Option<u32>,
    grid_search_delay: Option<Duration>,
    increase_key: Option<String>,
}

impl FillerOptionsBuilder {
    /// Replace the control and overlay markers
    pub fn selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = Some(selectors);
        self
    }

    /// Set the combo trigger click timeout
    pub fn click_timeout(mut self, timeout: Duration) -> Self {
        self.click_timeout = Some(timeout);
        self
    }

    /// Set the loading overlay timeout
    pub fn loading_timeout(mut self, timeout: Duration) -> Self {
        self.loading_timeout = Some(timeout);
        self
    }

    /// Set how long to wait for a confirmation dialog
    pub fn dialog_timeout(mut self, timeout: Duration) -> Self {
        self.dialog_timeout = Some(timeout);
        self
    }

    /// Set the dropdown render delay
    pub fn dropdown_render_delay(mut self, delay: Duration) -> Self {
        self.dropdown_render_delay = Some(delay);
        self
    }

    /// Set the delay before a targeted dropdown pick
    pub fn dropdown_select_delay(mut self, delay: Duration) -> Self {
        self.dropdown_select_delay = Some(delay);
        self
    }

    /// Set the attempts for a random dropdown pick
    pub fn dropdown_attempts(mut self, attempts: u32) -> Self {
        self.dropdown_attempts = Some(attempts);
        self
    }

    /// Set the attempts per combo trigger click
    pub fn combo_click_attempts(mut self, attempts: u32) -> Self {
        self.combo_click_attempts = Some(attempts);
        self
    }

    /// Set the pause between combo click attempts
    pub fn combo_recover_delay(mut self, delay: Duration) -> Self {
        self.combo_recover_delay = Some(delay);
        self
    }

    /// Set the combo search delay
    pub fn combo_search_delay(mut self, delay: Duration) -> Self {
        self.combo_search_delay = Some(delay);
        self
    }

    /// Set the pause before dismissing a combo confirmation dialog
    pub fn combo_dialog_delay(mut self, delay: Duration) -> Self {
        self.combo_dialog_delay = Some(delay);
        self
    }

    /// Set the attempts for opening a grid-embedded combo
    pub fn grid_combo_attempts(mut self, attempts: u32) -> Self {
        self.grid_combo_attempts = Some(attempts);
        self
    }

    /// Set the grid-embedded combo search delay
    pub fn grid_search_delay(mut self, delay: Duration) -> Self {
        self.grid_search_delay = Some(delay);
        self
    }

    /// Set the key used to step range sliders
    pub fn increase_key(mut self, key: impl Into<String>) -> Self {
        self.increase_key = Some(key.into());
        self
    }

    /// Build the FillerOptions
    pub fn build(self) -> FillerOptions {
        let defaults = FillerOptions::default();
        FillerOptions {
            selectors: self.selectors.unwrap_or(defaults.selectors),
            click_timeout: self.click_timeout.unwrap_or(defaults.click_timeout),
            loading_timeout: self.loading_timeout.unwrap_or(defaults.loading_timeout),
            dialog_timeout: self.dialog_timeout.unwrap_or(defaults.dialog_timeout),
            dropdown_render_delay: self
                .dropdown_render_delay
                .unwrap_or(defaults.dropdown_render_delay),
            dropdown_select_delay: self
                .dropdown_select_delay
                .unwrap_or(defaults.dropdown_select_delay),
            dropdown_attempts: self.dropdown_attempts.unwrap_or(defaults.dropdown_attempts),
            combo_click_attempts: self
                .combo_click_attempts
                .unwrap_or(defaults.combo_click_attempts),
            combo_recover_delay: self
                .combo_recover_delay
                .unwrap_or(defaults.combo_recover_delay),
            combo_search_delay: self.combo_search_delay.unwrap_or(defaults.combo_search_delay),
            combo_dialog_delay: self.combo_dialog_delay.unwrap_or(defaults.combo_dialog_delay),
            grid_combo_attempts: self
                .grid_combo_attempts
                .unwrap_or(defaults.grid_combo_attempts),
            grid_search_delay: self.grid_search_delay.unwrap_or(defaults.grid_search_delay),
            increase_key: self.increase_key.unwrap_or(defaults.increase_key),
        }
    }
}

/// Quotes `value` for use inside a double-quoted selector string
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Narrows `selector` to elements whose attribute `name` equals `value`
pub fn with_attribute(selector: &str, name: &str, value: &str) -> String {
    format!("{}[{}={}]", selector, name, quote(value))
}

/// Narrows `selector` to elements containing `text`
///
/// Uses Playwright's `:has-text()` pseudo-class (case-insensitive substring).
pub fn has_text(selector: &str, text: &str) -> String {
    format!("{}:has-text({})", selector, quote(text))
}
