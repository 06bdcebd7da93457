// Control descriptor - Attribute snapshot and input classification
//
// Descriptors are read fresh for every control on every sweep pass: opening
// one control (a dropdown, a combo) can change what the next one looks like.

use crate::error::Result;
use crate::surface::Element;

/// Placeholder of the code search box, which must never be filled
pub const SEARCH_CODE_PLACEHOLDER: &str = "Search Code";

/// Name of file upload inputs rendered as `type="text"`
pub const UPLOAD_NAME: &str = "upload";

/// Input names holding a URL even when typed as text
pub const URL_NAMES: &[&str] = &["trackingURL", "website"];

/// Attribute snapshot of one `<input>` control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    /// `type` attribute, `"text"` when absent
    pub kind: String,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub inputmode: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub maxlength: Option<String>,
}

impl Default for ControlDescriptor {
    fn default() -> Self {
        Self {
            kind: "text".to_string(),
            name: None,
            placeholder: None,
            inputmode: None,
            min: None,
            max: None,
            maxlength: None,
        }
    }
}

impl ControlDescriptor {
    /// Creates a descriptor for an input of the given `type`
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Reads the descriptor from a live element
    pub async fn read<E: Element>(element: &E) -> Result<Self> {
        let kind = element
            .get_attribute("type")
            .await?
            .map(|kind| kind.trim().to_ascii_lowercase())
            .filter(|kind| !kind.is_empty())
            .unwrap_or_else(|| "text".to_string());

        Ok(Self {
            kind,
            name: element.get_attribute("name").await?,
            placeholder: element.get_attribute("placeholder").await?,
            inputmode: element.get_attribute("inputmode").await?,
            min: element.get_attribute("min").await?,
            max: element.get_attribute("max").await?,
            maxlength: element.get_attribute("maxlength").await?,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_inputmode(mut self, inputmode: impl Into<String>) -> Self {
        self.inputmode = Some(inputmode.into());
        self
    }

    pub fn with_range(mut self, min: Option<&str>, max: Option<&str>) -> Self {
        self.min = min.map(str::to_string);
        self.max = max.map(str::to_string);
        self
    }

    pub fn with_maxlength(mut self, maxlength: impl Into<String>) -> Self {
        self.maxlength = Some(maxlength.into());
        self
    }

    /// Whether the control expects a number rather than free text
    pub fn is_numeric(&self) -> bool {
        self.kind == "number"
            || matches!(self.inputmode.as_deref(), Some("numeric") | Some("decimal"))
    }

    /// `min` as an integer, rounded up when fractional
    pub fn min_value(&self) -> Option<i64> {
        parse_bound(self.min.as_deref()).map(|v| v.ceil() as i64)
    }

    /// `max` as an integer, rounded down when fractional
    pub fn max_value(&self) -> Option<i64> {
        parse_bound(self.max.as_deref()).map(|v| v.floor() as i64)
    }

    /// `maxlength` when it is a positive integer
    pub fn max_length(&self) -> Option<usize> {
        self.maxlength
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|len| *len > 0)
    }

    fn name_is(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

fn parse_bound(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Generation strategy for an `<input>` control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputStrategy {
    Textbox,
    Email,
    Password,
    Telephone,
    Url,
    Range,
    Checkbox,
}

/// Picks the generation strategy for an input, `None` when it is not filled.
///
/// Rules are checked in order; the first match wins:
///
/// 1. text (or number) inputs, except the code search box and upload fields
/// 2. `type="email"` or `inputmode="email"`
/// 3. `type="password"`
/// 4. `type="tel"`
/// 5. `type="url"` or a well-known URL field name
/// 6. `type="range"`
/// 7. `type="checkbox"`
pub fn classify(descriptor: &ControlDescriptor) -> Option<InputStrategy> {
    let kind = descriptor.kind.as_str();

    if matches!(kind, "text" | "number")
        && descriptor.placeholder.as_deref() != Some(SEARCH_CODE_PLACEHOLDER)
        && !descriptor.name_is(UPLOAD_NAME)
    {
        return Some(InputStrategy::Textbox);
    }
    if kind == "email" || descriptor.inputmode.as_deref() == Some("email") {
        return Some(InputStrategy::Email);
    }
    match kind {
        "password" => Some(InputStrategy::Password),
        "tel" => Some(InputStrategy::Telephone),
        "url" => Some(InputStrategy::Url),
        _ if URL_NAMES.iter().any(|name| descriptor.name_is(name)) => Some(InputStrategy::Url),
        "range" => Some(InputStrategy::Range),
        "checkbox" => Some(InputStrategy::Checkbox),
        _ => None,
    }
}
