// Confirmation dialogs - Dismissing modals raised by a selection
//
// Some selections (a status change, a replaced combo value) make the
// application ask for confirmation. Generators only decide *when* to dismiss;
// *how* is delegated to a `ConfirmDialog`.

use crate::error::Result;
use crate::surface::{Element, Page};
use async_trait::async_trait;

/// Dismisses a confirmation dialog.
#[async_trait]
pub trait ConfirmDialog<P: Page>: Send + Sync {
    /// Answers the dialog rendered under `section` (a selector resolved from
    /// the page root): confirms when `confirm` is true, cancels otherwise.
    async fn dismiss(&self, page: &P, section: &str, confirm: bool) -> Result<()>;
}

/// [`ConfirmDialog`] that clicks the modal's primary or secondary button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalConfirmDialog {
    confirm_button: String,
    cancel_button: String,
}

impl ModalConfirmDialog {
    /// Creates a dialog helper with custom button selectors
    pub fn new(confirm_button: impl Into<String>, cancel_button: impl Into<String>) -> Self {
        Self {
            confirm_button: confirm_button.into(),
            cancel_button: cancel_button.into(),
        }
    }
}

impl Default for ModalConfirmDialog {
    fn default() -> Self {
        Self::new(".ant-btn-primary", ".ant-btn:not(.ant-btn-primary)")
    }
}

#[async_trait]
impl<P: Page> ConfirmDialog<P> for ModalConfirmDialog {
    async fn dismiss(&self, page: &P, section: &str, confirm: bool) -> Result<()> {
        let button = if confirm {
            &self.confirm_button
        } else {
            &self.cancel_button
        };
        tracing::debug!(
            "Dismissing dialog '{}' (confirm: {}) via '{}'",
            section,
            confirm,
            button
        );
        page.locator(section)
            .await
            .first()
            .locator(button)
            .first()
            .click(None)
            .await
    }
}
