//! Facade crate for the Sweetspot recommendation engine.
//!
//! This crate re-exports the core domain types and the default weighted
//! scorer, and offers [`recommend_cafes`] for callers that want the whole
//! pipeline in one call.
//!
//! # Examples
//!
//! ```
//! use sweetspot_engine::{CafeEntity, RawPreferences, TopK, recommend_cafes};
//!
//! let catalog = vec![
//!     CafeEntity::new("1", "Moonlight").with_region("gwangju").with_atmosphere("조용한"),
//!     CafeEntity::new("2", "Pear Orchard").with_region("naju"),
//! ];
//! let preferences: RawPreferences =
//!     serde_json::from_str(r#"{"region": ["gwangju"], "atmosphere": ["조용한"]}"#)
//!         .expect("valid payload");
//!
//! let ranked = recommend_cafes(&catalog, &preferences, TopK::DEFAULT);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].cafe().id(), "1");
//! ```

#![forbid(unsafe_code)]

pub use sweetspot_core::{
    CafeEntity, Category, Diagnostics, PreferenceQuery, PreferenceValue, RawPreferences,
    RecommendRequest, Recommendation, Recommender, ScoredCafe, Scorer, TagSet, TopK,
    normalize_preference_list, normalize_region_preferences, normalize_tag_token, to_tag_tokens,
    vocab,
};
pub use sweetspot_scorer::{
    ScoreBreakdown, ScoreTerm, ScoreWeights, ScoreWeightsError, WeightedScorer,
};

/// Rank `catalog` against raw `preferences` with the default weighted scorer.
///
/// Returns at most `top_k` cafes, best first. Preferences without any tokens,
/// or whose region, menu and requirement constraints exclude every cafe,
/// yield an empty list.
#[must_use]
pub fn recommend_cafes(
    catalog: &[CafeEntity],
    preferences: &RawPreferences,
    top_k: TopK,
) -> Vec<ScoredCafe> {
    let request = RecommendRequest::from_raw(preferences).with_top_k(top_k);
    Recommender::new(WeightedScorer::new())
        .recommend(catalog, &request)
        .results
}
