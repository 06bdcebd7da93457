// Combo generators - Autocomplete controls backed by a results grid
//
// Both generators are best effort: a combo that cannot be filled is logged
// and left alone, never failing the caller.
//
// Combo:      one or more trigger icons each open a results panel; a row is
//             picked (by filter text or at random) and confirmed.
// Grid combo: the control itself opens its results; a row is only picked
//             when a filter is given.

use super::{Ctx, FillOutcome};
use crate::error::{Error, Result};
use crate::options::has_text;
use crate::retry::RetryPolicy;
use crate::surface::{Element, ElementState, Page};

/// Fills an autocomplete combo, optionally narrowing results by `filter`.
pub(crate) async fn combo<P: Page>(
    ctx: &Ctx<'_, P>,
    control: &P::Element,
    filter: Option<&str>,
) -> Result<FillOutcome> {
    match fill_combo(ctx, control, filter).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            tracing::warn!("Combo '{}' left unfilled: {}", control.selector(), e);
            Ok(FillOutcome::Skipped)
        }
    }
}

async fn fill_combo<P: Page>(
    ctx: &Ctx<'_, P>,
    control: &P::Element,
    filter: Option<&str>,
) -> Result<FillOutcome> {
    let selectors = &ctx.options.selectors;
    let triggers = control.locator(&selectors.combo_triggers);
    let count = triggers.count().await?;
    let mut outcome = FillOutcome::Skipped;

    for index in 0..count {
        let trigger = triggers.nth(index);
        if let Err(e) = open_trigger(ctx, &trigger).await {
            tracing::warn!("Skipping combo trigger '{}': {}", trigger.selector(), e);
            continue;
        }

        ctx.wait_for_loading(Some(ctx.options.loading_timeout)).await?;
        if !ctx.overlay(&selectors.combo_panel).await.first().is_visible().await? {
            // later triggers share the panel that just failed to render
            tracing::debug!("Combo panel did not open for '{}'", control.selector());
            break;
        }

        if let Some(filter) = filter {
            if pick_filtered_row(ctx, filter).await? {
                return Ok(FillOutcome::Filled);
            }
            tracing::debug!("No combo row matches '{}', picking at random", filter);
        }

        let rows = ctx.overlay(&selectors.combo_rows).await;
        let row_count = rows.count().await?;
        if row_count > 0 {
            rows.nth(ctx.values.index(row_count)).click(None).await?;
            outcome = FillOutcome::Filled;
        }
        let confirm = ctx.overlay(&selectors.combo_confirm).await.first();
        if confirm.is_visible().await? {
            confirm.click(None).await?;
        }

        ctx.wait_for_loading(Some(ctx.options.loading_timeout)).await?;
        if ctx.overlay(&selectors.confirm_dialog).await.first().is_visible().await? {
            ctx.pause(ctx.options.combo_dialog_delay).await;
            ctx.dialog
                .dismiss(ctx.page, &selectors.confirm_dialog, false)
                .await?;
        }
    }

    Ok(outcome)
}

/// Clicks a trigger, scrolling the active tab back between attempts.
async fn open_trigger<P: Page>(ctx: &Ctx<'_, P>, trigger: &P::Element) -> Result<()> {
    let page = ctx.page;
    let active_tab = ctx.options.selectors.active_tab.as_str();
    let recover_delay = ctx.options.combo_recover_delay;
    let click_timeout = ctx.options.click_timeout;

    RetryPolicy::new(ctx.options.combo_click_attempts)
        .run_with_recovery(
            "open combo grid",
            move |_| trigger.click(Some(click_timeout)),
            move || async move {
                if let Err(e) = page.scroll_to_origin(active_tab).await {
                    tracing::debug!("Could not scroll '{}' back: {}", active_tab, e);
                }
                page.wait_for_timeout(recover_delay).await;
            },
        )
        .await
}

/// Searches for `filter` and confirms the first row containing it.
///
/// Returns false when no row matches.
async fn pick_filtered_row<P: Page>(ctx: &Ctx<'_, P>, filter: &str) -> Result<bool> {
    let selectors = &ctx.options.selectors;
    let search = ctx.overlay(&selectors.combo_search).await.first();
    search.fill(filter).await?;
    search.press("Enter").await?;
    ctx.pause(ctx.options.combo_search_delay).await;

    let row = ctx
        .overlay(&has_text(&selectors.combo_rows, filter))
        .await
        .first();
    if row.count().await? == 0 {
        return Ok(false);
    }

    tracing::debug!("Picking combo row matching '{}'", filter);
    row.click(None).await?;
    ctx.overlay(&selectors.combo_confirm)
        .await
        .first()
        .click(None)
        .await?;
    Ok(true)
}

/// Fills a combo embedded in a data grid.
///
/// Without a filter the results are opened (and refreshed) but no row is
/// selected.
pub(crate) async fn in_grid<P: Page>(
    ctx: &Ctx<'_, P>,
    control: &P::Element,
    filter: Option<&str>,
) -> Result<FillOutcome> {
    match fill_in_grid(ctx, control, filter).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            tracing::error!("Grid combo '{}' failed: {}", control.selector(), e);
            Ok(FillOutcome::Skipped)
        }
    }
}

async fn fill_in_grid<P: Page>(
    ctx: &Ctx<'_, P>,
    control: &P::Element,
    filter: Option<&str>,
) -> Result<FillOutcome> {
    let selectors = &ctx.options.selectors;
    let panel = ctx.overlay(&selectors.combo_panel).await.first();

    let attempts = ctx.options.grid_combo_attempts;
    for attempt in 1..=attempts {
        match control.click(None).await {
            Ok(()) => {
                if panel.is_visible().await? {
                    break;
                }
                tracing::debug!(
                    "Grid combo results not shown after click {}/{}",
                    attempt,
                    attempts
                );
            }
            Err(e) if attempt < attempts => {
                tracing::debug!("Grid combo click {}/{} failed: {}", attempt, attempts, e)
            }
            Err(e) => {
                return Err(Error::RetryExhausted {
                    operation: "open grid combo".to_string(),
                    attempts,
                    last: Box::new(e),
                });
            }
        }
    }

    ctx.wait_for_loading(None).await?;
    let refresh = ctx.overlay(&selectors.combo_refresh).await.first();
    if refresh.is_visible().await? {
        refresh.click(None).await?;
        ctx.wait_for_loading(None).await?;
    }

    let Some(filter) = filter else {
        return Ok(FillOutcome::Skipped);
    };

    ctx.overlay(&selectors.combo_search)
        .await
        .first()
        .fill(filter)
        .await?;
    ctx.pause(ctx.options.grid_search_delay).await;

    let first_row = ctx.overlay(&selectors.combo_rows).await.first();
    if !first_row.is_visible().await? {
        return Ok(FillOutcome::Skipped);
    }
    first_row.click(None).await?;

    let dialog = ctx.overlay(&selectors.confirm_dialog).await.first();
    match dialog
        .wait_for(ElementState::Visible, Some(ctx.options.dialog_timeout))
        .await
    {
        Ok(()) => {
            let cancel = dialog.locator(&selectors.confirm_dialog_cancel).first();
            if cancel.count().await? > 0 {
                cancel.click(None).await?;
            }
        }
        Err(e) if e.is_timeout() => {}
        Err(e) => return Err(e),
    }

    Ok(FillOutcome::Filled)
}
