// Scope - The page or element subtree a fill operation covers
//
// Every sweep pass and explicit generator locates controls relative to a
// scope. Writing them against this type keeps a single code path for both
// root kinds.

use crate::surface::{Element, Page};
use std::fmt;

/// Root of a fill operation: a whole page or one element subtree.
///
/// The element variant also carries its page, because overlays, popovers and
/// dialogs opened from a control render at page root, not inside the control.
pub enum Scope<'a, P: Page> {
    /// The whole page
    Page(&'a P),
    /// One element subtree of `page`
    Element { page: &'a P, element: P::Element },
}

impl<'a, P: Page> Scope<'a, P> {
    /// Creates an element scope
    pub fn element(page: &'a P, element: P::Element) -> Self {
        Scope::Element { page, element }
    }

    /// Returns the page owning this scope
    pub fn page(&self) -> &'a P {
        match self {
            Scope::Page(page) => page,
            Scope::Element { page, .. } => page,
        }
    }

    /// Returns true when the scope is the whole page
    pub fn is_page(&self) -> bool {
        matches!(self, Scope::Page(_))
    }

    /// Locates `selector` relative to the scope root
    pub async fn locate(&self, selector: &str) -> P::Element {
        match self {
            Scope::Page(page) => page.locator(selector).await,
            Scope::Element { element, .. } => element.locator(selector),
        }
    }
}

impl<P: Page> fmt::Debug for Scope<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Page(_) => f.write_str("Scope::Page"),
            Scope::Element { element, .. } => f
                .debug_struct("Scope::Element")
                .field("selector", &element.selector())
                .finish(),
        }
    }
}
