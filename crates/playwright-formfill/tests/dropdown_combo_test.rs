// Integration tests for dropdowns, combos and confirmation dialogs
//
// Tests cover:
// - dropdowns with nothing to choose are left alone
// - the placeholder option is never picked
// - bounded retries for flaky dropdowns
// - cancel-reason dialog after a selection
// - combo: filter short-circuit, random row, trigger recovery, panel checks
// - grid combo: filter, refresh, dialog handling, no-filter asymmetry
// - ModalConfirmDialog button routing


use fake_page::{Call, FakePage, Node, NodeId, ROOT, filler, init_tracing};
use playwright_formfill::{
    ConfirmDialog, ControlFamily, Error, FormFiller, GenerationMode, ModalConfirmDialog,
    RandomValues, Scope,
};
use std::time::Duration;

fn add_options(page: &FakePage, count: usize) {
    for index in 0..count {
        page.add(ROOT, Node::new(&format!("option-{}", index)).tag("option"));
    }
}

/// Combo with one trigger per label and a hidden results panel the
/// triggers open
struct Combo {
    panel: NodeId,
}

fn add_combo(page: &FakePage, triggers: &[&str], rows: &[&str]) -> Combo {
    let panel = page.add(ROOT, Node::new("panel").tag("combo-panel").hidden());
    let combo = page.add(ROOT, Node::new("customer").tag("combo"));
    for label in triggers {
        page.add(
            combo,
            Node::new(label).tag("combo-trigger").reveals(panel),
        );
    }
    page.add(panel, Node::new("search").tag("combo-search"));
    for (index, text) in rows.iter().enumerate() {
        page.add(
            panel,
            Node::new(&format!("row-{}", index))
                .tag("combo-row")
                .text(text),
        );
    }
    page.add(panel, Node::new("confirm").tag("combo-confirm"));
    Combo { panel }
}

#[tokio::test]
async fn test_dropdown_without_choices_is_left_alone() {
    init_tracing();
    for options in [0, 1] {
        let page = FakePage::new();
        page.add(ROOT, Node::new("status").tag("dropdown"));
        add_options(&page, options);

        let report = filler().sweep(&Scope::Page(&page)).await;

        assert_eq!(page.clicks(), vec!["status"], "{} option(s)", options);
        assert_eq!(report.pass(ControlFamily::Dropdown).skipped, 1);
    }
}

#[tokio::test]
async fn test_dropdown_never_picks_the_placeholder() {
    for seed in 0..25 {
        let page = FakePage::new();
        page.add(ROOT, Node::new("status").tag("dropdown"));
        add_options(&page, 3);

        filler()
            .with_values(RandomValues::seeded(seed))
            .fill_page(&page, Some("dropdown"), None, GenerationMode::Dropdown)
            .await
            .unwrap();

        let clicks = page.clicks();
        assert_eq!(clicks.len(), 2);
        assert_ne!(clicks[1], "option-0", "seed {}", seed);
    }
}

#[tokio::test]
async fn test_dropdown_retries_flaky_clicks() {
    let page = FakePage::new();
    page.add(ROOT, Node::new("status").tag("dropdown").failing_clicks(2));
    add_options(&page, 2);

    filler()
        .fill_page(&page, Some("dropdown"), None, GenerationMode::Dropdown)
        .await
        .expect("third attempt should succeed");

    assert_eq!(page.clicks(), vec!["status", "option-1"]);
}

#[tokio::test]
async fn test_dropdown_gives_up_after_bounded_attempts() {
    let page = FakePage::new();
    page.add(ROOT, Node::new("status").tag("dropdown").failing_clicks(100));
    add_options(&page, 2);

    let result = filler()
        .fill_page(&page, Some("dropdown"), None, GenerationMode::Dropdown)
        .await;

    match result {
        Err(Error::RetryExhausted { attempts, last, .. }) => {
            assert_eq!(attempts, 5);
            assert!(matches!(*last, Error::Interaction { .. }));
        }
        other => panic!("expected RetryExhausted, got {:?}", other),
    }
    assert!(page.clicks().is_empty());
}

#[tokio::test]
async fn test_flaky_dropdown_counts_as_failed_in_sweep() {
    let page = FakePage::new();
    page.add(ROOT, Node::new("stuck").tag("dropdown").failing_clicks(100));
    page.add(ROOT, Node::new("status").tag("dropdown"));
    add_options(&page, 2);

    let report = filler().sweep(&Scope::Page(&page)).await;

    let dropdowns = report.pass(ControlFamily::Dropdown);
    assert_eq!(dropdowns.failed, 1);
    assert_eq!(dropdowns.filled, 1);
    assert_eq!(page.clicks(), vec!["status", "option-1"]);
}

#[tokio::test]
async fn test_cancel_reason_dialog_is_dismissed() {
    let page = FakePage::new();
    page.add(ROOT, Node::new("status").tag("dropdown"));
    add_options(&page, 2);
    page.add(ROOT, Node::new("reason").tag("cancel-reason"));

    filler()
        .fill_page(&page, Some("dropdown"), None, GenerationMode::Dropdown)
        .await
        .unwrap();

    assert_eq!(
        page.dismissals(),
        vec![("cancel-reason".to_string(), false)]
    );
}

#[tokio::test]
async fn test_combo_filter_picks_matching_row() {
    let page = FakePage::new();
    add_combo(&page, &["trigger"], &["Globex", "ACME Corp"]);

    filler()
        .fill_page(&page, Some("combo"), Some("acme"), GenerationMode::Combo)
        .await
        .unwrap();

    assert_eq!(page.value_of("search"), Some("acme".to_string()));
    assert_eq!(page.presses("search"), 1);
    assert_eq!(page.clicks(), vec!["trigger", "row-1", "confirm"]);
    // matched rows end the fill before any dialog handling
    assert!(page.dismissals().is_empty());
}

#[tokio::test]
async fn test_combo_filter_without_match_picks_random_row() {
    let page = FakePage::new();
    add_combo(&page, &["trigger"], &["Globex", "Initech"]);

    filler()
        .fill_page(&page, Some("combo"), Some("acme"), GenerationMode::Combo)
        .await
        .unwrap();

    let clicks = page.clicks();
    assert_eq!(clicks.len(), 3, "clicks: {:?}", clicks);
    assert_eq!(clicks[0], "trigger");
    assert!(clicks[1] == "row-0" || clicks[1] == "row-1");
    assert_eq!(clicks[2], "confirm");
}

#[tokio::test]
async fn test_combo_in_sweep_dismisses_confirmation() {
    let page = FakePage::new();
    add_combo(&page, &["trigger"], &["Globex"]);
    page.add(ROOT, Node::new("replace?").tag("confirm-dialog"));

    let report = filler().sweep(&Scope::Page(&page)).await;

    assert_eq!(page.clicks(), vec!["trigger", "row-0", "confirm"]);
    assert_eq!(
        page.dismissals(),
        vec![("confirm-dialog".to_string(), false)]
    );
    assert!(page.calls().contains(&Call::Wait(Duration::from_secs(1))));
    assert_eq!(report.pass(ControlFamily::Combo).filled, 1);
}

#[tokio::test]
async fn test_combo_skips_trigger_that_keeps_failing() {
    let page = FakePage::new();
    let panel = page.add(ROOT, Node::new("panel").tag("combo-panel").hidden());
    let combo = page.add(ROOT, Node::new("customer").tag("combo"));
    page.add(
        combo,
        Node::new("covered")
            .tag("combo-trigger")
            .failing_clicks(2)
            .reveals(panel),
    );
    page.add(combo, Node::new("working").tag("combo-trigger").reveals(panel));
    page.add(panel, Node::new("row-0").tag("combo-row"));

    filler()
        .fill_page(&page, Some("combo"), None, GenerationMode::Combo)
        .await
        .unwrap();

    // one recovery between the two attempts on the covered trigger
    let scrolls: Vec<_> = page
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::Scroll(_)))
        .collect();
    assert_eq!(scrolls, vec![Call::Scroll("active-tab".to_string())]);
    assert_eq!(page.clicks(), vec!["working", "row-0"]);
}

#[tokio::test]
async fn test_combo_stops_when_panel_does_not_open() {
    let page = FakePage::new();
    page.add(ROOT, Node::new("panel").tag("combo-panel").hidden());
    let combo = page.add(ROOT, Node::new("customer").tag("combo"));
    page.add(combo, Node::new("first").tag("combo-trigger"));
    page.add(combo, Node::new("second").tag("combo-trigger"));

    filler()
        .fill_page(&page, Some("combo"), None, GenerationMode::Combo)
        .await
        .unwrap();

    assert_eq!(page.clicks(), vec!["first"]);
}

#[tokio::test]
async fn test_combo_failure_is_swallowed() {
    let page = FakePage::new();
    add_combo(&page, &["trigger"], &["Globex"]);
    // loading never clears
    page.add(ROOT, Node::new("spinner").tag("spinner"));

    let result = filler()
        .fill_page(&page, Some("combo"), Some("acme"), GenerationMode::Combo)
        .await;

    assert!(result.is_ok(), "got {:?}", result);
    assert_eq!(page.clicks(), vec!["trigger"]);
}

fn add_grid_combo(page: &FakePage, rows: &[&str]) -> Combo {
    let panel = page.add(ROOT, Node::new("panel").tag("combo-panel").hidden());
    page.add(ROOT, Node::new("cell").tag("grid-cell").reveals(panel));
    page.add(panel, Node::new("search").tag("combo-search"));
    for (index, text) in rows.iter().enumerate() {
        page.add(
            panel,
            Node::new(&format!("row-{}", index))
                .tag("combo-row")
                .text(text),
        );
    }
    Combo { panel }
}

#[tokio::test]
async fn test_grid_combo_with_filter_selects_first_row() {
    let page = FakePage::new();
    let grid = add_grid_combo(&page, &["ACME Corp", "ACME Labs"]);
    page.add(grid.panel, Node::new("refresh").tag("combo-refresh"));
    let dialog = page.add(ROOT, Node::new("dialog").tag("confirm-dialog"));
    page.add(dialog, Node::new("dialog-no").tag("confirm-cancel"));

    filler()
        .fill_page(&page, Some("grid-cell"), Some("ACME"), GenerationMode::ComboInGrid)
        .await
        .unwrap();

    assert_eq!(page.value_of("search"), Some("ACME".to_string()));
    assert_eq!(page.clicks(), vec!["cell", "refresh", "row-0", "dialog-no"]);
}

#[tokio::test]
async fn test_grid_combo_without_dialog_still_succeeds() {
    let page = FakePage::new();
    add_grid_combo(&page, &["ACME Corp"]);

    filler()
        .fill_page(&page, Some("grid-cell"), Some("ACME"), GenerationMode::ComboInGrid)
        .await
        .unwrap();

    assert_eq!(page.clicks(), vec!["cell", "row-0"]);
}

#[tokio::test]
async fn test_grid_combo_without_filter_selects_nothing() {
    let page = FakePage::new();
    add_grid_combo(&page, &["ACME Corp"]);

    filler()
        .fill_page(&page, Some("grid-cell"), None, GenerationMode::ComboInGrid)
        .await
        .unwrap();

    assert_eq!(page.clicks(), vec!["cell"]);
    assert!(page.fills().is_empty());
}

#[tokio::test]
async fn test_grid_combo_retries_opening_then_gives_up_quietly() {
    let page = FakePage::new();
    let panel = page.add(ROOT, Node::new("panel").tag("combo-panel").hidden());
    page.add(
        ROOT,
        Node::new("cell")
            .tag("grid-cell")
            .failing_clicks(100)
            .reveals(panel),
    );

    let result = filler()
        .fill_page(&page, Some("grid-cell"), Some("ACME"), GenerationMode::ComboInGrid)
        .await;

    assert!(result.is_ok(), "grid combo errors are logged, got {:?}", result);
    assert!(page.calls().is_empty());
}

#[tokio::test]
async fn test_grid_combo_clicks_again_when_results_stay_hidden() {
    let page = FakePage::new();
    let panel = page.add(ROOT, Node::new("panel").tag("combo-panel").hidden());
    page.add(ROOT, Node::new("cell").tag("grid-cell"));
    page.add(panel, Node::new("search").tag("combo-search"));

    filler()
        .fill_page(&page, Some("grid-cell"), Some("ACME"), GenerationMode::ComboInGrid)
        .await
        .unwrap();

    // two attempts, then the fill goes on and finds no visible row
    assert_eq!(page.clicks(), vec!["cell", "cell"]);
}

#[tokio::test]
async fn test_modal_confirm_dialog_routes_buttons() -> anyhow::Result<()> {
    let page = FakePage::new();
    let modal = page.add(ROOT, Node::new("modal").tag("modal"));
    page.add(modal, Node::new("yes").tag("ok-btn"));
    page.add(modal, Node::new("no").tag("cancel-btn"));
    // same buttons outside the modal must not be touched
    page.add(ROOT, Node::new("other-no").tag("cancel-btn"));

    let dialog = ModalConfirmDialog::new("ok-btn", "cancel-btn");
    dialog.dismiss(&page, "modal", false).await?;
    dialog.dismiss(&page, "modal", true).await?;

    assert_eq!(page.clicks(), vec!["no", "yes"]);
    Ok(())
}

#[tokio::test]
async fn test_default_dialog_helper_drives_sweep() {
    let page = FakePage::new();
    page.add(ROOT, Node::new("status").tag("dropdown"));
    add_options(&page, 2);
    let reason = page.add(ROOT, Node::new("reason").tag("cancel-reason"));
    page.add(reason, Node::new("reason-no").tag("reason-cancel"));

    let filler = FormFiller::new()
        .with_options(fake_page::test_options())
        .unwrap()
        .with_values(RandomValues::seeded(1))
        .with_dialog(ModalConfirmDialog::new("reason-ok", "reason-cancel"));
    filler.sweep(&Scope::Page(&page)).await;

    assert_eq!(page.clicks(), vec!["status", "option-1", "reason-no"]);
}
