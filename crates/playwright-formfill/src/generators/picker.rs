// Picker generators - date and color pickers
//
// Both open an overlay rendered at page root and pick from it.

use super::{Ctx, FillOutcome};
use crate::error::Result;
use crate::surface::{Element, Page};

/// Opens the date picker and takes its "today" (or "now") shortcut.
///
/// Single attempt: a picker without either shortcut is left open unchanged.
pub(crate) async fn date<P: Page>(ctx: &Ctx<'_, P>, element: &P::Element) -> Result<FillOutcome> {
    let selectors = &ctx.options.selectors;
    element
        .locator(&selectors.date_picker_trigger)
        .first()
        .click(None)
        .await?;

    for shortcut in [&selectors.date_picker_today, &selectors.date_picker_now] {
        let button = ctx.overlay(shortcut).await.first();
        if button.is_visible().await? {
            button.click(None).await?;
            return Ok(FillOutcome::Filled);
        }
    }

    tracing::debug!("Date picker '{}' has no quick-select", element.selector());
    Ok(FillOutcome::Skipped)
}

/// Opens the color picker and clicks a random preset swatch.
pub(crate) async fn color<P: Page>(ctx: &Ctx<'_, P>, element: &P::Element) -> Result<FillOutcome> {
    element.click(None).await?;

    let swatches = ctx.overlay(&ctx.options.selectors.color_swatches).await;
    let count = swatches.count().await?;
    if count == 0 {
        return Ok(FillOutcome::Skipped);
    }

    let index = ctx.values.index(count);
    tracing::debug!("Picking swatch {}/{} for '{}'", index, count, element.selector());
    swatches.nth(index).click(None).await?;
    Ok(FillOutcome::Filled)
}
