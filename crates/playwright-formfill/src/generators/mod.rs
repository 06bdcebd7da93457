// Generators - Per-control fill strategies
//
// Each generator commits one value into one control. Controls whose commit
// triggers a server round trip follow the same phases:
//
//   open -> wait for loading to clear -> act -> wait for loading to clear
//        -> handle a possible confirmation dialog
//
// Failure policy differs per generator and is stated on each entry point.

pub(crate) mod combo;
pub(crate) mod dropdown;
pub(crate) mod picker;
pub(crate) mod range;
pub(crate) mod text;

use crate::dialog::ConfirmDialog;
use crate::error::Result;
use crate::options::FillerOptions;
use crate::surface::{Element, ElementState, Page};
use crate::values::ValueSource;
use std::time::Duration;

/// What a generator did with its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// A value was committed
    Filled,
    /// Nothing to do (no options, unparsable range, no swatches...)
    Skipped,
}

/// Everything a generator needs besides the control itself.
pub(crate) struct Ctx<'a, P: Page> {
    pub page: &'a P,
    pub options: &'a FillerOptions,
    pub values: &'a dyn ValueSource,
    pub dialog: &'a dyn ConfirmDialog<P>,
}

impl<P: Page> Ctx<'_, P> {
    /// Locates an overlay (options list, panel, dialog) from the page root
    pub async fn overlay(&self, selector: &str) -> P::Element {
        self.page.locator(selector).await
    }

    /// Waits for the loading overlay to go away
    pub async fn wait_for_loading(&self, timeout: Option<Duration>) -> Result<()> {
        self.overlay(&self.options.selectors.loading_overlay)
            .await
            .first()
            .wait_for(ElementState::Detached, timeout)
            .await
    }

    pub async fn pause(&self, duration: Duration) {
        self.page.wait_for_timeout(duration).await;
    }
}
