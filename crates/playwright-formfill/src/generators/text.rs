// Text-family generators - textbox, email, password, telephone, url,
// textarea and checkbox
//
// Value synthesis is kept separate from the DOM work so the constraints
// (numeric clamps, length caps, formats) can be checked without a browser.

use super::{Ctx, FillOutcome};
use crate::descriptor::{ControlDescriptor, InputStrategy};
use crate::error::Result;
use crate::surface::{Element, Page};
use crate::values::ValueSource;

/// Lowest number ever generated for a numeric textbox
pub const NUMBER_FLOOR: i64 = -100;
/// Highest number ever generated for a numeric textbox
pub const NUMBER_CEILING: i64 = 50;
/// Lower bound used when a numeric textbox has no `min`
pub const DEFAULT_NUMBER_MIN: i64 = 0;
/// Upper bound used when a numeric textbox has no `max`
pub const DEFAULT_NUMBER_MAX: i64 = 50;
/// Length of generated free text
pub const TEXTBOX_LENGTH: usize = 10;
/// Longest password ever generated; also the default length
pub const PASSWORD_MAX_LENGTH: usize = 15;
/// Telephone `maxlength` used when the attribute is missing
pub const DEFAULT_TELEPHONE_LENGTH: usize = 11;
/// Prefix of every generated telephone number
pub const TELEPHONE_PREFIX: &str = "09";
/// Most digits generated after the prefix, whatever `maxlength` allows
pub const TELEPHONE_MAX_DIGITS: usize = 18;
/// Length of the random host part of generated URLs
pub const URL_HOST_LENGTH: usize = 14;
/// Length parameter of generated textarea content
pub const TEXTAREA_LENGTH: usize = 14;

/// Closed range a numeric textbox value is drawn from.
pub fn number_bounds(descriptor: &ControlDescriptor) -> (i64, i64) {
    let min = descriptor
        .min_value()
        .unwrap_or(DEFAULT_NUMBER_MIN)
        .max(NUMBER_FLOOR);
    let max = descriptor
        .max_value()
        .unwrap_or(DEFAULT_NUMBER_MAX)
        .min(NUMBER_CEILING);
    // a min above the ceiling collapses onto max
    (min.min(max), max)
}

pub fn textbox_value(descriptor: &ControlDescriptor, values: &dyn ValueSource) -> String {
    if descriptor.is_numeric() {
        let (min, max) = number_bounds(descriptor);
        values.int_in_range(min, max).to_string()
    } else {
        values.string(TEXTBOX_LENGTH)
    }
}

pub fn password_value(descriptor: &ControlDescriptor, values: &dyn ValueSource) -> String {
    let len = descriptor
        .max_length()
        .unwrap_or(PASSWORD_MAX_LENGTH)
        .min(PASSWORD_MAX_LENGTH);
    values.string(len)
}

/// `"09"` followed by a random number filling the rest of `maxlength`,
/// up to [`TELEPHONE_MAX_DIGITS`] digits.
pub fn telephone_value(descriptor: &ControlDescriptor, values: &dyn ValueSource) -> String {
    let budget = descriptor
        .max_length()
        .unwrap_or(DEFAULT_TELEPHONE_LENGTH)
        .saturating_sub(TELEPHONE_PREFIX.len())
        .min(TELEPHONE_MAX_DIGITS);

    let mut number = String::with_capacity(TELEPHONE_PREFIX.len() + budget);
    number.push_str(TELEPHONE_PREFIX);
    for position in 0..budget {
        // no leading zero, so the digit count is exactly the budget
        let low = if position == 0 { 1 } else { 0 };
        let digit = values.int_in_range(low, 9);
        number.push_str(&digit.to_string());
    }
    number
}

pub fn url_value(values: &dyn ValueSource) -> String {
    format!("https://{}.com", values.string(URL_HOST_LENGTH))
}

/// Value for an input strategy; `None` for strategies that do not type text.
pub fn input_value(
    strategy: InputStrategy,
    descriptor: &ControlDescriptor,
    values: &dyn ValueSource,
) -> Option<String> {
    match strategy {
        InputStrategy::Textbox => Some(textbox_value(descriptor, values)),
        InputStrategy::Email => Some(values.email()),
        InputStrategy::Password => Some(password_value(descriptor, values)),
        InputStrategy::Telephone => Some(telephone_value(descriptor, values)),
        InputStrategy::Url => Some(url_value(values)),
        InputStrategy::Range | InputStrategy::Checkbox => None,
    }
}

/// Clears the control, focuses it and types `value`.
async fn replace_value<E: Element>(element: &E, value: &str) -> Result<()> {
    element.fill("").await?;
    element.click(None).await?;
    element.fill(value).await
}

/// Fills a typed text input.
///
/// Textboxes swallow their own failures (logged, reported as skipped) so a
/// broken field never interrupts the rest of the form. The other text
/// strategies report errors to the caller.
pub(crate) async fn fill_input<P: Page>(
    ctx: &Ctx<'_, P>,
    element: &P::Element,
    strategy: InputStrategy,
    descriptor: &ControlDescriptor,
) -> Result<FillOutcome> {
    match strategy {
        InputStrategy::Checkbox => checkbox(element).await,
        InputStrategy::Range => super::range::fill(ctx, element).await,
        InputStrategy::Textbox => {
            let value = textbox_value(descriptor, ctx.values);
            match replace_value(element, &value).await {
                Ok(()) => Ok(FillOutcome::Filled),
                Err(e) => {
                    tracing::warn!("Skipping textbox '{}': {}", element.selector(), e);
                    Ok(FillOutcome::Skipped)
                }
            }
        }
        _ => {
            let Some(value) = input_value(strategy, descriptor, ctx.values) else {
                return Ok(FillOutcome::Skipped);
            };
            tracing::debug!("Filling {:?} '{}'", strategy, element.selector());
            replace_value(element, &value).await?;
            Ok(FillOutcome::Filled)
        }
    }
}

pub(crate) async fn textarea<P: Page>(
    ctx: &Ctx<'_, P>,
    element: &P::Element,
) -> Result<FillOutcome> {
    let value = ctx.values.text(TEXTAREA_LENGTH);
    replace_value(element, &value).await?;
    Ok(FillOutcome::Filled)
}

/// Checkboxes are only cleared; their checked state is left alone.
// Playwright refuses to fill most checkbox inputs, hence debug level.
async fn checkbox<E: Element>(element: &E) -> Result<FillOutcome> {
    if let Err(e) = element.fill("").await {
        tracing::debug!("Checkbox '{}' not cleared: {}", element.selector(), e);
    }
    Ok(FillOutcome::Skipped)
}
