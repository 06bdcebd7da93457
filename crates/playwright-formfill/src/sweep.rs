// Sweep - Fills every supported control under a scope
//
// One pass per control family, in a fixed order. Each pass counts its
// matches once and visits them in document order. A failing control is
// logged and counted; it never stops the pass or the passes after it.

use crate::descriptor::{ControlDescriptor, classify};
use crate::error::Result;
use crate::generators::{self, Ctx, FillOutcome};
use crate::options::Selectors;
use crate::scope::Scope;
use crate::surface::{Element, Page};
use std::fmt;

/// Control families visited by a sweep, in visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlFamily {
    Input,
    Textarea,
    DatePicker,
    ColorPicker,
    Dropdown,
    Combo,
}

impl ControlFamily {
    /// All families in sweep order
    pub const ALL: [ControlFamily; 6] = [
        ControlFamily::Input,
        ControlFamily::Textarea,
        ControlFamily::DatePicker,
        ControlFamily::ColorPicker,
        ControlFamily::Dropdown,
        ControlFamily::Combo,
    ];

    /// Selector locating this family inside a scope
    pub fn selector(self, selectors: &Selectors) -> &str {
        match self {
            ControlFamily::Input => &selectors.inputs,
            ControlFamily::Textarea => &selectors.textareas,
            ControlFamily::DatePicker => &selectors.date_pickers,
            ControlFamily::ColorPicker => &selectors.color_pickers,
            ControlFamily::Dropdown => &selectors.dropdowns,
            ControlFamily::Combo => &selectors.combos,
        }
    }
}

impl fmt::Display for ControlFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControlFamily::Input => "input",
            ControlFamily::Textarea => "textarea",
            ControlFamily::DatePicker => "date picker",
            ControlFamily::ColorPicker => "color picker",
            ControlFamily::Dropdown => "dropdown",
            ControlFamily::Combo => "combo",
        };
        f.write_str(name)
    }
}

/// Tally of one sweep pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Controls matched by the family selector
    pub visited: usize,
    pub filled: usize,
    /// Controls left alone (unsupported type, nothing to pick, ...)
    pub skipped: usize,
    /// Controls whose generator failed
    pub failed: usize,
}

impl PassReport {
    fn record(&mut self, outcome: &Result<FillOutcome>) {
        match outcome {
            Ok(FillOutcome::Filled) => self.filled += 1,
            Ok(FillOutcome::Skipped) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
    }
}

/// Result of a sweep: one [`PassReport`] per family, in sweep order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub passes: Vec<(ControlFamily, PassReport)>,
}

impl SweepReport {
    /// Report for one family (empty when the pass did not run)
    pub fn pass(&self, family: ControlFamily) -> PassReport {
        self.passes
            .iter()
            .find(|(f, _)| *f == family)
            .map(|(_, report)| *report)
            .unwrap_or_default()
    }

    pub fn filled(&self) -> usize {
        self.passes.iter().map(|(_, r)| r.filled).sum()
    }

    pub fn failed(&self) -> usize {
        self.passes.iter().map(|(_, r)| r.failed).sum()
    }

    pub fn visited(&self) -> usize {
        self.passes.iter().map(|(_, r)| r.visited).sum()
    }
}

pub(crate) async fn run<P: Page>(ctx: &Ctx<'_, P>, scope: &Scope<'_, P>) -> SweepReport {
    let mut report = SweepReport::default();
    for family in ControlFamily::ALL {
        let pass = run_pass(ctx, scope, family).await;
        report.passes.push((family, pass));
    }

    tracing::info!(
        "Sweep of {:?} done: {} visited, {} filled, {} failed",
        scope,
        report.visited(),
        report.filled(),
        report.failed()
    );
    report
}

async fn run_pass<P: Page>(
    ctx: &Ctx<'_, P>,
    scope: &Scope<'_, P>,
    family: ControlFamily,
) -> PassReport {
    let mut pass = PassReport::default();
    let matches = scope.locate(family.selector(&ctx.options.selectors)).await;
    let count = match matches.count().await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!("Skipping {} pass: {}", family, e);
            return pass;
        }
    };
    tracing::debug!("{} pass: {} control(s)", family, count);

    for index in 0..count {
        let control = matches.nth(index);
        let outcome = fill_control(ctx, family, &control).await;
        if let Err(e) = &outcome {
            tracing::warn!("Failed to fill {} '{}': {}", family, control.selector(), e);
        }
        pass.visited += 1;
        pass.record(&outcome);
    }
    pass
}

async fn fill_control<P: Page>(
    ctx: &Ctx<'_, P>,
    family: ControlFamily,
    control: &P::Element,
) -> Result<FillOutcome> {
    match family {
        ControlFamily::Input => {
            // an unreadable input is skipped like one that refuses its value
            let descriptor = match ControlDescriptor::read(control).await {
                Ok(descriptor) => descriptor,
                Err(e) => {
                    tracing::warn!("Skipping input '{}': {}", control.selector(), e);
                    return Ok(FillOutcome::Skipped);
                }
            };
            match classify(&descriptor) {
                Some(strategy) => {
                    generators::text::fill_input(ctx, control, strategy, &descriptor).await
                }
                None => {
                    tracing::debug!(
                        "Skipping input '{}' of type '{}'",
                        control.selector(),
                        descriptor.kind
                    );
                    Ok(FillOutcome::Skipped)
                }
            }
        }
        ControlFamily::Textarea => generators::text::textarea(ctx, control).await,
        ControlFamily::DatePicker => generators::picker::date(ctx, control).await,
        ControlFamily::ColorPicker => generators::picker::color(ctx, control).await,
        ControlFamily::Dropdown => generators::dropdown::random(ctx, control).await,
        ControlFamily::Combo => generators::combo::combo(ctx, control, None).await,
    }
}
