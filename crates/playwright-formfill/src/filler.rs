// FormFiller - Entry points for filling a page or an element
//
// Both entry points resolve to one dispatch path:
// 1. narrow the root with the optional selector
// 2. fan out when the narrowed handle matches several elements
// 3. sweep the scope (Default) or run one explicit generator
//
// Everything runs sequentially: two fanned-out controls may open the same
// overlay, so their interactions must never interleave.

use crate::dialog::{ConfirmDialog, ModalConfirmDialog};
use crate::error::{Error, Result};
use crate::generators::{self, Ctx};
use crate::options::FillerOptions;
use crate::scope::Scope;
use crate::surface::{Element, Page};
use crate::sweep::{self, SweepReport};
use crate::values::{RandomValues, ValueSource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message of the error raised for explicit modes on a whole page
pub const PAGE_SCOPE_MESSAGE: &str =
    "cannot use this mode for a whole-page scope; call with a specific element or selector";

/// How a fill call treats its scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Sweep every supported control family under the scope
    #[default]
    Default,
    /// The scope is a dropdown; the value (if any) is the option title
    Dropdown,
    /// The scope is an autocomplete combo; the value (if any) filters rows
    Combo,
    /// The scope is a grid-embedded combo; the value (if any) filters rows
    ComboInGrid,
    /// The scope is a range slider
    RangeInput,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenerationMode::Default => "Default",
            GenerationMode::Dropdown => "Dropdown",
            GenerationMode::Combo => "Combo",
            GenerationMode::ComboInGrid => "ComboInGrid",
            GenerationMode::RangeInput => "RangeInput",
        };
        f.write_str(name)
    }
}

impl FromStr for GenerationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(GenerationMode::Default),
            "dropdown" => Ok(GenerationMode::Dropdown),
            "combo" => Ok(GenerationMode::Combo),
            "comboingrid" | "combo-in-grid" | "combo_in_grid" => Ok(GenerationMode::ComboInGrid),
            "rangeinput" | "range-input" | "range_input" | "range" => {
                Ok(GenerationMode::RangeInput)
            }
            other => Err(Error::InvalidArgument(format!(
                "unknown generation mode '{}'",
                other
            ))),
        }
    }
}

/// Fills forms with random, constraint-aware values.
///
/// # Example
///
/// ```ignore
/// use playwright_formfill::{FormFiller, GenerationMode};
///
/// let filler = FormFiller::new();
///
/// // Sweep the whole page
/// filler.fill_page(&page, None, None, GenerationMode::Default).await?;
///
/// // Pick "Active" in the status dropdown
/// filler
///     .fill_page(&page, Some("#status"), Some("Active"), GenerationMode::Dropdown)
///     .await?;
/// ```
pub struct FormFiller<V = RandomValues, D = ModalConfirmDialog> {
    options: FillerOptions,
    values: V,
    dialog: D,
}

impl FormFiller {
    /// Creates a filler with default options, OS-seeded values and the
    /// default modal dialog helper
    pub fn new() -> Self {
        Self {
            options: FillerOptions::default(),
            values: RandomValues::new(),
            dialog: ModalConfirmDialog::default(),
        }
    }
}

impl Default for FormFiller {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, D> fmt::Debug for FormFiller<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFiller")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<V: ValueSource, D> FormFiller<V, D> {
    /// Replaces the options after validating them
    pub fn with_options(mut self, options: FillerOptions) -> Result<Self> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    /// Replaces the value source
    pub fn with_values<V2: ValueSource>(self, values: V2) -> FormFiller<V2, D> {
        FormFiller {
            options: self.options,
            values,
            dialog: self.dialog,
        }
    }

    /// Replaces the confirmation dialog helper
    pub fn with_dialog<D2>(self, dialog: D2) -> FormFiller<V, D2> {
        FormFiller {
            options: self.options,
            values: self.values,
            dialog,
        }
    }

    /// Returns the options in use
    pub fn options(&self) -> &FillerOptions {
        &self.options
    }

    fn ctx<'a, P: Page>(&'a self, page: &'a P) -> Ctx<'a, P>
    where
        D: ConfirmDialog<P>,
    {
        Ctx {
            page,
            options: &self.options,
            values: &self.values,
            dialog: &self.dialog,
        }
    }

    /// Fills a page, or the controls matching `selector` in it.
    ///
    /// Without a selector only [`GenerationMode::Default`] is accepted;
    /// explicit modes fail with [`Error::UnsupportedOperation`].
    pub async fn fill_page<P: Page>(
        &self,
        page: &P,
        selector: Option<&str>,
        value: Option<&str>,
        mode: GenerationMode,
    ) -> Result<()>
    where
        D: ConfirmDialog<P>,
    {
        match selector {
            None if mode != GenerationMode::Default => {
                Err(Error::UnsupportedOperation(PAGE_SCOPE_MESSAGE.to_string()))
            }
            None => {
                self.sweep(&Scope::Page(page)).await;
                Ok(())
            }
            Some(selector) => {
                let target = page.locator(checked_selector(selector)?).await;
                self.dispatch(page, target, value, mode).await
            }
        }
    }

    /// Fills an element, or the controls matching `selector` inside it.
    ///
    /// `page` is the page owning `element`; overlays and dialogs are looked
    /// up there.
    pub async fn fill_element<P: Page>(
        &self,
        page: &P,
        element: &P::Element,
        selector: Option<&str>,
        value: Option<&str>,
        mode: GenerationMode,
    ) -> Result<()>
    where
        D: ConfirmDialog<P>,
    {
        let target = match selector {
            Some(selector) => element.locator(checked_selector(selector)?),
            None => element.clone(),
        };
        self.dispatch(page, target, value, mode).await
    }

    /// Sweeps a scope and reports what was filled.
    ///
    /// Never fails: per-control errors are logged and counted.
    pub async fn sweep<P: Page>(&self, scope: &Scope<'_, P>) -> SweepReport
    where
        D: ConfirmDialog<P>,
    {
        sweep::run(&self.ctx(scope.page()), scope).await
    }

    async fn dispatch<P: Page>(
        &self,
        page: &P,
        target: P::Element,
        value: Option<&str>,
        mode: GenerationMode,
    ) -> Result<()>
    where
        D: ConfirmDialog<P>,
    {
        let count = target.count().await?;
        if count <= 1 {
            return self.dispatch_one(page, target, value, mode).await;
        }

        tracing::debug!(
            "'{}' matches {} elements, filling each ({})",
            target.selector(),
            count,
            mode
        );
        for index in 0..count {
            self.dispatch_one(page, target.nth(index), value, mode)
                .await?;
        }
        Ok(())
    }

    async fn dispatch_one<P: Page>(
        &self,
        page: &P,
        element: P::Element,
        value: Option<&str>,
        mode: GenerationMode,
    ) -> Result<()>
    where
        D: ConfirmDialog<P>,
    {
        let ctx = self.ctx(page);
        tracing::debug!("Filling '{}' ({})", element.selector(), mode);
        match mode {
            GenerationMode::Default => {
                sweep::run(&ctx, &Scope::element(page, element)).await;
            }
            GenerationMode::Dropdown => {
                match value {
                    Some(value) => generators::dropdown::targeted(&ctx, &element, value).await?,
                    None => generators::dropdown::random(&ctx, &element).await?,
                };
            }
            GenerationMode::Combo => {
                generators::combo::combo(&ctx, &element, value).await?;
            }
            GenerationMode::ComboInGrid => {
                generators::combo::in_grid(&ctx, &element, value).await?;
            }
            GenerationMode::RangeInput => {
                generators::range::fill(&ctx, &element).await?;
            }
        }
        Ok(())
    }
}

fn checked_selector(selector: &str) -> Result<&str> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(
            "selector must not be blank".to_string(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_mode_from_str() {
        assert_eq!("Default".parse::<GenerationMode>().unwrap(), GenerationMode::Default);
        assert_eq!("dropdown".parse::<GenerationMode>().unwrap(), GenerationMode::Dropdown);
        assert_eq!(
            "combo-in-grid".parse::<GenerationMode>().unwrap(),
            GenerationMode::ComboInGrid
        );
        assert_eq!(
            " RangeInput ".parse::<GenerationMode>().unwrap(),
            GenerationMode::RangeInput
        );
        assert!(matches!(
            "slider".parse::<GenerationMode>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_generation_mode_display_round_trips() {
        for mode in [
            GenerationMode::Default,
            GenerationMode::Dropdown,
            GenerationMode::Combo,
            GenerationMode::ComboInGrid,
            GenerationMode::RangeInput,
        ] {
            assert_eq!(mode.to_string().parse::<GenerationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_generation_mode_serde_names() {
        let json = serde_json::to_string(&GenerationMode::ComboInGrid).unwrap();
        assert_eq!(json, "\"ComboInGrid\"");
        let mode: GenerationMode = serde_json::from_str("\"RangeInput\"").unwrap();
        assert_eq!(mode, GenerationMode::RangeInput);
    }

    #[test]
    fn test_checked_selector() {
        assert_eq!(checked_selector(" #form ").unwrap(), "#form");
        assert!(matches!(
            checked_selector("   "),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_with_options_validates() {
        let options = FillerOptions::builder().dropdown_attempts(0).build();
        assert!(matches!(
            FormFiller::new().with_options(options),
            Err(Error::InvalidArgument(_))
        ));
    }
}
