// Range generator - Moves a slider with the keyboard
//
// Range inputs do not reliably accept programmatic value writes, so the
// slider is stepped with key presses like a user would.

use super::{Ctx, FillOutcome};
use crate::error::Result;
use crate::surface::{Element, Page};

fn parse_number(raw: Option<String>) -> Option<f64> {
    raw.and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Presses the increase key a random number of times in `[value, max]`.
///
/// A missing or unparsable `value`/`max` makes this a no-op.
pub(crate) async fn fill<P: Page>(ctx: &Ctx<'_, P>, element: &P::Element) -> Result<FillOutcome> {
    let current = parse_number(element.get_attribute("value").await?);
    let max = parse_number(element.get_attribute("max").await?);
    let (Some(current), Some(max)) = (current, max) else {
        tracing::debug!("Range '{}' has no usable value/max", element.selector());
        return Ok(FillOutcome::Skipped);
    };

    let (low, high) = (current.ceil() as i64, max.floor() as i64);
    if low > high {
        return Ok(FillOutcome::Skipped);
    }

    let steps = ctx.values.int_in_range(low, high).max(0);
    tracing::debug!("Stepping range '{}' {} time(s)", element.selector(), steps);
    for _ in 0..steps {
        element.press(&ctx.options.increase_key).await?;
    }
    Ok(FillOutcome::Filled)
}
