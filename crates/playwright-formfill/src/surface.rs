// Automation surface - The browser operations form filling is built on
//
// The filler never talks to a browser directly. It drives a page and its
// element handles through these two traits, which mirror the subset of the
// Playwright Page/Locator API the generators need.
//
// Contract notes:
// - Element handles are lazy selectors (like Playwright locators): creating
//   one never touches the DOM, every async call re-resolves it.
// - Single-target actions (click, fill, press, get_attribute) are strict:
//   they fail if the handle resolves to more than one element.
// - Implementations: `playwright_rs` (feature "playwright") and the
//   in-memory fake used by the integration tests.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;

/// Element state that [`Element::wait_for`] can wait for.
///
/// See: <https://playwright.dev/docs/api/class-locator#locator-wait-for>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    /// At least one matching element is attached and visible
    Visible,
    /// No matching element is visible (absent elements count as hidden)
    Hidden,
    /// At least one matching element is attached to the DOM
    Attached,
    /// No matching element is attached to the DOM
    Detached,
}

/// A lazily-resolved handle to zero or more DOM elements.
#[async_trait]
pub trait Element: Clone + Debug + Send + Sync {
    /// Human readable description of the handle, used in logs and errors
    fn selector(&self) -> String;

    /// Creates a handle for matches of `selector` inside this handle's subtree
    fn locator(&self, selector: &str) -> Self;

    /// Creates a handle for the nth match (0-indexed, document order)
    fn nth(&self, index: usize) -> Self;

    /// Creates a handle for the first match
    fn first(&self) -> Self {
        self.nth(0)
    }

    /// Returns the number of elements currently matching
    async fn count(&self) -> Result<usize>;

    /// Returns the value of an attribute, `None` when absent
    async fn get_attribute(&self, name: &str) -> Result<Option<String>>;

    /// Returns whether the element is visible (false when nothing matches)
    async fn is_visible(&self) -> Result<bool>;

    /// Clicks the element, using the surface default timeout when `None`
    async fn click(&self, timeout: Option<Duration>) -> Result<()>;

    /// Replaces the element's value with `value`
    async fn fill(&self, value: &str) -> Result<()>;

    /// Presses a single key (Playwright key names, e.g. `"Enter"`)
    async fn press(&self, key: &str) -> Result<()>;

    /// Waits until the handle reaches `state`
    ///
    /// Fails with [`Error::Timeout`] when the state is not reached in time.
    async fn wait_for(&self, state: ElementState, timeout: Option<Duration>) -> Result<()>;
}

/// A whole page: the root every element handle starts from.
#[async_trait]
pub trait Page: Send + Sync {
    /// Element handle type produced by this page
    type Element: Element;

    /// Creates a handle for matches of `selector` anywhere in the page
    async fn locator(&self, selector: &str) -> Self::Element;

    /// Waits for a fixed duration
    async fn wait_for_timeout(&self, duration: Duration);

    /// Scrolls the first element matching `selector` back to its origin
    ///
    /// Used to recover from clicks intercepted by a scrolled container.
    /// Surfaces without script evaluation can keep the default.
    async fn scroll_to_origin(&self, selector: &str) -> Result<()> {
        let _ = selector;
        Err(Error::NotImplemented("scroll_to_origin"))
    }
}
