//! Behaviour-driven step definitions driving the pick and remove scenarios.

use super::helpers::{StubGeolocators, Workspace, line_of};
use super::*;
use placepicker_core::{EMPTY_SELECTION_FALLBACK_TEXT, SELECTED_PLACES_KEY, SelectionError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct PicksWorld {
    workspace: Workspace,
    stdout: RefCell<String>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PicksWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            stdout: RefCell::new(String::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, args: &[&str], answer: &str) {
        let (result, stdout) = self
            .workspace
            .run(args, &StubGeolocators::Denies, answer);
        self.result.replace(Some(result));
        self.stdout.replace(stdout);
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> PicksWorld {
    PicksWorld::new()
}

#[given("no places are picked")]
fn nothing_picked(#[from(world)] world: &PicksWorld) {
    assert!(!world.workspace.storage_dir.exists());
}

#[given("the far place is picked")]
fn far_is_picked(#[from(world)] world: &PicksWorld) {
    world.run(&["pick", "far"], "");
    world
        .result
        .borrow()
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect("pick should succeed");
}

#[given("storage still records a place missing from the catalog")]
fn stale_id_recorded(#[from(world)] world: &PicksWorld) {
    let storage_dir = &world.workspace.storage_dir;
    std::fs::create_dir_all(storage_dir).expect("create storage dir");
    std::fs::write(
        storage_dir.join(format!("{SELECTED_PLACES_KEY}.json")),
        r#"["gone","far"]"#,
    )
    .expect("seed stored selection");
}

#[when("I pick the far place")]
fn pick_far(#[from(world)] world: &PicksWorld) {
    world.run(&["pick", "far"], "");
}

#[when("I pick the near place")]
fn pick_near(#[from(world)] world: &PicksWorld) {
    world.run(&["pick", "near"], "");
}

#[when("I pick an unknown place")]
fn pick_unknown(#[from(world)] world: &PicksWorld) {
    world.run(&["pick", "atlantis"], "");
}

#[when("I show the picked places")]
fn show_picked(#[from(world)] world: &PicksWorld) {
    world.run(&["picked"], "");
}

#[when("I remove the far place answering no")]
fn remove_declined(#[from(world)] world: &PicksWorld) {
    world.run(&["remove", "far"], "n\n");
}

#[when("I remove the far place answering yes")]
fn remove_confirmed(#[from(world)] world: &PicksWorld) {
    world.run(&["remove", "far"], "y\n");
}

#[when("I remove the far place without a prompt")]
fn remove_unprompted(#[from(world)] world: &PicksWorld) {
    world.run(&["remove", "far", "--yes"], "");
}

#[when("I remove the missing place without a prompt")]
fn remove_stale(#[from(world)] world: &PicksWorld) {
    world.run(&["remove", "gone", "--yes"], "");
}

#[then("the selection command succeeds")]
fn selection_succeeds(#[from(world)] world: &PicksWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");
}

#[then("the near place is shown before the far place")]
fn near_shown_first(#[from(world)] world: &PicksWorld) {
    let stdout = world.stdout.borrow();
    assert!(line_of(&stdout, "near") < line_of(&stdout, "far"));
}

#[then("the output is the empty selection notice")]
fn empty_notice(#[from(world)] world: &PicksWorld) {
    assert_eq!(
        world.stdout.borrow().trim_end(),
        EMPTY_SELECTION_FALLBACK_TEXT
    );
}

#[then("the output ends with the empty selection notice")]
fn ends_with_empty_notice(#[from(world)] world: &PicksWorld) {
    assert_eq!(
        world.stdout.borrow().lines().last(),
        Some(EMPTY_SELECTION_FALLBACK_TEXT)
    );
}

#[then("the far place is still picked")]
fn far_still_picked(#[from(world)] world: &PicksWorld) {
    world.run(&["picked"], "");
    let stdout = world.stdout.borrow();
    line_of(&stdout, "far");
}

#[then("storage records only the far place")]
fn storage_records_far(#[from(world)] world: &PicksWorld) {
    let stored = std::fs::read_to_string(
        world
            .workspace
            .storage_dir
            .join(format!("{SELECTED_PLACES_KEY}.json")),
    )
    .expect("read stored selection");
    let ids: Vec<String> = serde_json::from_str(&stored).expect("stored ids are JSON");
    assert_eq!(ids, vec!["far".to_owned()]);
    assert!(world.stdout.borrow().starts_with("Removed gone"));
}

#[then("the command fails because the place is unknown")]
fn fails_unknown(#[from(world)] world: &PicksWorld) {
    match &*world.error() {
        CliError::Selection(SelectionError::UnknownPlace { id }) => {
            assert_eq!(id.as_str(), "atlantis");
        }
        other => panic!("expected UnknownPlace, found {other:?}"),
    }
}

#[then("the command fails because the place is not picked")]
fn fails_not_picked(#[from(world)] world: &PicksWorld) {
    match &*world.error() {
        CliError::NotPicked { id } => assert_eq!(id.as_str(), "far"),
        other => panic!("expected NotPicked, found {other:?}"),
    }
}

macro_rules! register_picks_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/picks_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PicksWorld) {
            let _ = world;
        }
    };
}

register_picks_scenario!(picks_newest_first, "picked places are listed newest first");
register_picks_scenario!(picks_empty_notice, "nothing picked shows the empty notice");
register_picks_scenario!(remove_declined_keeps, "declining the removal keeps the place");
register_picks_scenario!(remove_confirmed_drops, "confirming the removal drops the place");
register_picks_scenario!(remove_without_prompt, "removing without a prompt");
register_picks_scenario!(pick_unknown_fails, "picking an unknown place");
register_picks_scenario!(remove_not_picked_fails, "removing a place that is not picked");
register_picks_scenario!(
    remove_stale_id,
    "removing an identifier that left the catalog"
);
