//! Behavioural tests for `Either` pipelines.
//!
//! These scenarios exercise mapping, short-circuiting and folding against
//! the Gherkin descriptions in `tests/features/either.feature`.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::cell::Cell;

use app_either::{Either, left, right};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the value under test and what the pipeline observed.
#[derive(Default, ScenarioState)]
struct World {
    value: Slot<Either<String, i64>>,
    map_calls: Slot<usize>,
    folded: Slot<String>,
}

impl World {
    fn value(&self) -> Either<String, i64> {
        self.value.get().expect("value should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a success holding {value}")]
fn a_success_holding(world: &World, value: i64) {
    world.value.set(right(value));
}

#[given("a failure holding {message}")]
fn a_failure_holding(world: &World, message: String) {
    world.value.set(left(message));
}

// ============================================================================
// When steps
// ============================================================================

#[when("it is incremented and then tripled")]
fn it_is_incremented_and_then_tripled(world: &World) {
    let calls = Cell::new(0_usize);
    let mapped = world
        .value()
        .map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        })
        .map(|x| {
            calls.set(calls.get() + 1);
            x * 3
        });
    world.value.set(mapped);
    world.map_calls.set(calls.get());
}

#[when("the failure is upper-cased")]
fn the_failure_is_upper_cased(world: &World) {
    let calls = Cell::new(0_usize);
    let mapped = world.value().map_left(|message| {
        calls.set(calls.get() + 1);
        message.to_uppercase()
    });
    world.value.set(mapped);
    world.map_calls.set(calls.get());
}

#[when("the value is folded")]
fn the_value_is_folded(world: &World) {
    let folded = world.value().fold(|message| message, |n| n.to_string());
    world.folded.set(folded);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the result is a success holding {value}")]
fn the_result_is_a_success_holding(world: &World, value: i64) {
    assert_eq!(world.value(), right(value));
}

#[then("the result is a failure holding {message}")]
fn the_result_is_a_failure_holding(world: &World, message: String) {
    assert_eq!(world.value(), left(message));
}

#[then("no mapping function ran")]
fn no_mapping_function_ran(world: &World) {
    let calls = world.map_calls.get().expect("a mapping step should run");
    assert_eq!(calls, 0, "mapping closures must not run");
}

#[then("the folded value is {expected}")]
fn the_folded_value_is(world: &World, expected: String) {
    let folded = world.folded.get().expect("value should be folded");
    assert_eq!(folded, expected);
}

#[then("the value reports the same variant every time")]
fn the_value_reports_the_same_variant_every_time(world: &World) {
    let value = world.value();
    let first = (value.is_left(), value.is_right());
    for _ in 0..3 {
        assert_eq!((value.is_left(), value.is_right()), first);
    }
    assert!(first.0 ^ first.1, "exactly one variant must hold");
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/either.feature",
    name = "Mapping a success chains transformations"
)]
fn mapping_a_success_chains_transformations(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/either.feature",
    name = "A failure short-circuits the pipeline"
)]
fn a_failure_short_circuits_the_pipeline(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/either.feature",
    name = "Mapping the failure side transforms only failures"
)]
fn mapping_the_failure_side_transforms_only_failures(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/either.feature",
    name = "Mapping the failure side leaves successes alone"
)]
fn mapping_the_failure_side_leaves_successes_alone(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/either.feature",
    name = "Folding a success runs only the success branch"
)]
fn folding_a_success_runs_only_the_success_branch(world: World) {
    let _ = world;
}
