#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for end-to-end recommendation.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use sweetspot_engine::{CafeEntity, RawPreferences, ScoredCafe, TopK, recommend_cafes};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    catalog: RefCell<Vec<CafeEntity>>,
    ranked: RefCell<Option<Vec<ScoredCafe>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        catalog: RefCell::new(Vec::new()),
        ranked: RefCell::new(None),
    }
}

fn recommend_json(context: &TestContext, payload: &str) {
    let preferences: RawPreferences = serde_json::from_str(payload).expect("valid payload");
    let ranked = recommend_cafes(&context.catalog.borrow(), &preferences, TopK::DEFAULT);
    *context.ranked.borrow_mut() = Some(ranked);
}

fn ranked_ids(context: &TestContext) -> Vec<String> {
    context
        .ranked
        .borrow()
        .as_ref()
        .expect("recommendations should be recorded")
        .iter()
        .map(|hit| hit.cafe().id().to_owned())
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]
fn assert_near(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected approximately {expected}, got {actual}"
    );
}

#[given("a catalog with a quiet Gwangju cafe and a Naju cafe")]
fn quiet_gwangju_and_naju(context: &TestContext) {
    *context.catalog.borrow_mut() = vec![
        CafeEntity::new("gwangju-quiet", "Moonlight")
            .with_region("gwangju")
            .with_atmosphere("조용한")
            .with_coffee_score(4.0)
            .with_dessert_score(5.0)
            .with_popularity_score(10.0),
        CafeEntity::new("naju", "Pear Orchard")
            .with_region("naju")
            .with_atmosphere("조용한")
            .with_coffee_score(5.0),
    ];
}

#[given("a catalog with a salt bread cafe")]
fn salt_bread_cafe(context: &TestContext) {
    *context.catalog.borrow_mut() =
        vec![CafeEntity::new("salt", "Salt House").with_menu("소금빵, 아메리카노")];
}

#[given("a catalog with one cafe without parking and one with parking")]
fn parking_cafes(context: &TestContext) {
    *context.catalog.borrow_mut() = vec![
        CafeEntity::new("no-parking", "Alley").with_parking("불가"),
        CafeEntity::new("parking", "Drive-in").with_parking("가능"),
    ];
}

#[when("I ask for quiet cafes in gwangju")]
fn ask_quiet_gwangju(context: &TestContext) {
    recommend_json(context, r#"{"region": ["gwangju"], "atmosphere": ["조용한"]}"#);
}

#[when("I ask for salt bread and cake")]
fn ask_salt_bread_and_cake(context: &TestContext) {
    recommend_json(context, r#"{"menu": ["소금빵", "케이크"]}"#);
}

#[when("I ask for cafes with parking")]
fn ask_parking(context: &TestContext) {
    recommend_json(context, r#"{"required": ["주차 가능"]}"#);
}

#[when("I send an empty preference payload")]
fn ask_nothing(context: &TestContext) {
    recommend_json(context, "{}");
}

#[then("only the Gwangju cafe is recommended")]
fn only_gwangju(context: &TestContext) {
    assert_eq!(ranked_ids(context), ["gwangju-quiet"]);
}

#[then("its score is the base terms plus 2.0")]
fn base_plus_two(context: &TestContext) {
    let ranked = context.ranked.borrow();
    let top = ranked
        .as_ref()
        .and_then(|hits| hits.first())
        .expect("one recommendation");
    // 4 * 0.5 + 5 * 0.3 + 10 * 0.1 + 2.0
    assert_near(top.score(), 6.5);
}

#[then("no cafes are recommended")]
fn nothing(context: &TestContext) {
    assert!(ranked_ids(context).is_empty());
}

#[then("only the cafe with parking is recommended")]
fn only_parking(context: &TestContext) {
    assert_eq!(ranked_ids(context), ["parking"]);
}

#[scenario(path = "tests/features/recommendation.feature", index = 0)]
fn quiet_gwangju_cafe(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 1)]
fn menu_keywords_are_conjunctive(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 2)]
fn parking_requirement(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 3)]
fn empty_payload(context: TestContext) {
    let _ = context;
}
