// Playwright surface - `Page`/`Element` for playwright-rs
//
// Maps the automation surface onto `playwright_rs::Page` and
// `playwright_rs::Locator`. Locators are already lazy selectors, so every
// method is a thin forward. Waiting is done by polling, the same way
// playwright-rs implements its own `expect()` assertions.

use crate::error::{Error, Result};
use crate::surface::{Element, ElementState, Page};
use async_trait::async_trait;
use playwright_rs::ClickOptions;
use std::time::Duration;
use tokio::time::{Instant, sleep};

/// Timeout used by `wait_for` when the caller gives none
const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Polling interval used by `wait_for`
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[async_trait]
impl Element for playwright_rs::Locator {
    fn selector(&self) -> String {
        playwright_rs::Locator::selector(self).to_string()
    }

    fn locator(&self, selector: &str) -> Self {
        playwright_rs::Locator::locator(self, selector)
    }

    fn nth(&self, index: usize) -> Self {
        let index = i32::try_from(index).unwrap_or(i32::MAX);
        playwright_rs::Locator::nth(self, index)
    }

    fn first(&self) -> Self {
        playwright_rs::Locator::first(self)
    }

    async fn count(&self) -> Result<usize> {
        Ok(playwright_rs::Locator::count(self).await?)
    }

    async fn get_attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(playwright_rs::Locator::get_attribute(self, name).await?)
    }

    async fn is_visible(&self) -> Result<bool> {
        Ok(playwright_rs::Locator::is_visible(self).await?)
    }

    async fn click(&self, timeout: Option<Duration>) -> Result<()> {
        let options = timeout.map(|timeout| {
            ClickOptions::builder()
                .timeout(timeout.as_millis() as f64)
                .build()
        });
        Ok(playwright_rs::Locator::click(self, options).await?)
    }

    async fn fill(&self, value: &str) -> Result<()> {
        Ok(playwright_rs::Locator::fill(self, value, None).await?)
    }

    async fn press(&self, key: &str) -> Result<()> {
        Ok(playwright_rs::Locator::press(self, key, None).await?)
    }

    async fn wait_for(&self, state: ElementState, timeout: Option<Duration>) -> Result<()> {
        let timeout = timeout.unwrap_or(DEFAULT_WAIT_TIMEOUT);
        let deadline = Instant::now() + timeout;

        loop {
            let reached = match state {
                ElementState::Visible => playwright_rs::Locator::is_visible(self).await?,
                ElementState::Hidden => !playwright_rs::Locator::is_visible(self).await?,
                ElementState::Attached => playwright_rs::Locator::count(self).await? > 0,
                ElementState::Detached => playwright_rs::Locator::count(self).await? == 0,
            };
            if reached {
                return Ok(());
            }

            if Instant::now() >= deadline {
                return Err(Error::Timeout(format!(
                    "'{}' not {:?} after {:?}",
                    playwright_rs::Locator::selector(self),
                    state,
                    timeout
                )));
            }
            sleep(POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl Page for playwright_rs::Page {
    type Element = playwright_rs::Locator;

    async fn locator(&self, selector: &str) -> Self::Element {
        playwright_rs::Page::locator(self, selector).await
    }

    async fn wait_for_timeout(&self, duration: Duration) {
        sleep(duration).await;
    }

    async fn scroll_to_origin(&self, selector: &str) -> Result<()> {
        let selector = serde_json::to_string(selector)?;
        let script = format!(
            "(() => {{ const el = document.querySelector({}); if (el) {{ el.scrollLeft = 0; el.scrollTop = 0; }} }})()",
            selector
        );
        Ok(self.evaluate_expression(&script).await?)
    }
}
