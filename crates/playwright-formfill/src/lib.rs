//! playwright-formfill: Random, constraint-aware form filling for end-to-end tests
//!
//! Populates every supported control of a page (or of one element subtree)
//! with plausible values, or drives one specific control in an explicit
//! mode. Inputs are classified from their attributes, so a numeric field
//! gets a number inside its `min`/`max`, a telephone field gets a digit string
//! that fits its `maxlength`, and so on.
//!
//! # Examples
//!
//! ## Sweep a whole page
//!
//! ```ignore
//! use playwright_formfill::{FormFiller, GenerationMode};
//! use playwright_rs::Playwright;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let playwright = Playwright::launch().await?;
//!     let browser = playwright.chromium().launch().await?;
//!     let page = browser.new_page().await?;
//!     page.goto("http://localhost:3000/orders/new", None).await?;
//!
//!     let filler = FormFiller::new();
//!     filler.fill_page(&page, None, None, GenerationMode::Default).await?;
//!
//!     browser.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Drive one control
//!
//! ```ignore
//! use playwright_formfill::{FormFiller, GenerationMode};
//!
//! # async fn run(page: playwright_rs::Page) -> playwright_formfill::Result<()> {
//! let filler = FormFiller::new();
//!
//! // Pick the option titled "Shipped"
//! filler
//!     .fill_page(&page, Some("#status"), Some("Shipped"), GenerationMode::Dropdown)
//!     .await?;
//!
//! // Search the customer combo for "ACME" and confirm the matching row
//! filler
//!     .fill_page(&page, Some("#customer"), Some("ACME"), GenerationMode::Combo)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom selectors
//!
//! Control and overlay selectors default to Ant Design class names. Other
//! component libraries supply their own, from code or from JSON:
//!
//! ```ignore
//! use playwright_formfill::{FillerOptions, FormFiller, Selectors};
//!
//! let selectors = Selectors::from_json(r#"{ "dropdowns": ".my-select" }"#)?;
//! let filler = FormFiller::new()
//!     .with_options(FillerOptions::builder().selectors(selectors).build())?;
//! ```
//!
//! # Automation surface
//!
//! The filler is written against the [`Page`] and [`Element`] traits. With
//! the `playwright` feature they are implemented for `playwright_rs::Page`
//! and `playwright_rs::Locator`.

mod descriptor;
mod dialog;
mod error;
mod filler;
mod generators;
mod options;
#[cfg(feature = "playwright")]
mod playwright;
mod retry;
mod scope;
mod surface;
mod sweep;
mod values;

pub use error::{Error, Result};

// Entry points
pub use filler::{FormFiller, GenerationMode, PAGE_SCOPE_MESSAGE};
pub use scope::Scope;
pub use sweep::{ControlFamily, PassReport, SweepReport};

// Configuration
pub use options::{FillerOptions, FillerOptionsBuilder, Selectors, has_text, with_attribute};

// Automation surface
pub use surface::{Element, ElementState, Page};

// Collaborators
pub use dialog::{ConfirmDialog, ModalConfirmDialog};
pub use values::{EMAIL_DOMAIN, RandomValues, ValueSource};

// Classification and value synthesis
pub use descriptor::{ControlDescriptor, InputStrategy, classify};
pub use generators::FillOutcome;
pub use generators::text::{
    input_value, number_bounds, password_value, telephone_value, textbox_value, url_value,
};

pub use retry::RetryPolicy;
