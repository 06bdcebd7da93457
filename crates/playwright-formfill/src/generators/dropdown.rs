// Dropdown generator - Select-type controls with a rendered option list
//
// Two contracts:
// - random pick: any option except the first (a placeholder/"none" entry),
//   retried from the top when the option list goes stale under the click
// - targeted pick: the option whose title equals the caller's value

use super::{Ctx, FillOutcome};
use crate::error::Result;
use crate::options::with_attribute;
use crate::retry::RetryPolicy;
use crate::surface::{Element, Page};

/// Selects a random option.
///
/// The open/enumerate/click sequence is retried up to
/// `dropdown_attempts` times, then fails with `RetryExhausted`.
pub(crate) async fn random<P: Page>(ctx: &Ctx<'_, P>, control: &P::Element) -> Result<FillOutcome> {
    let policy = RetryPolicy::new(ctx.options.dropdown_attempts);
    let outcome = policy
        .run("select a dropdown option", move |attempt| {
            pick_once(ctx, control, attempt)
        })
        .await?;

    if outcome == FillOutcome::Filled {
        dismiss_cancel_reason(ctx).await?;
    }
    Ok(outcome)
}

async fn pick_once<P: Page>(
    ctx: &Ctx<'_, P>,
    control: &P::Element,
    attempt: u32,
) -> Result<FillOutcome> {
    control.click(None).await?;
    ctx.pause(ctx.options.dropdown_render_delay).await;

    let options = ctx.overlay(&ctx.options.selectors.dropdown_options).await;
    let count = options.count().await?;
    if count <= 1 {
        tracing::debug!(
            "Dropdown '{}' has {} option(s), nothing to select",
            control.selector(),
            count
        );
        return Ok(FillOutcome::Skipped);
    }

    let index = 1 + ctx.values.index(count - 1);
    tracing::debug!(
        "Selecting option {}/{} of '{}' (attempt {})",
        index,
        count,
        control.selector(),
        attempt
    );
    options.nth(index).click(None).await?;
    Ok(FillOutcome::Filled)
}

/// Answers "no" to the cancel-reason dialog some selections raise.
async fn dismiss_cancel_reason<P: Page>(ctx: &Ctx<'_, P>) -> Result<()> {
    let section = &ctx.options.selectors.cancel_reason_dialog;
    if ctx.overlay(section).await.first().is_visible().await? {
        ctx.dialog.dismiss(ctx.page, section, false).await?;
    }
    Ok(())
}

/// Selects the option titled `value`. Errors propagate.
pub(crate) async fn targeted<P: Page>(
    ctx: &Ctx<'_, P>,
    control: &P::Element,
    value: &str,
) -> Result<FillOutcome> {
    control.click(None).await?;
    ctx.pause(ctx.options.dropdown_select_delay).await;

    let selector = with_attribute(&ctx.options.selectors.dropdown_options, "title", value);
    tracing::debug!("Selecting '{}' in '{}'", value, control.selector());
    ctx.overlay(&selector).await.first().click(None).await?;
    Ok(FillOutcome::Filled)
}
