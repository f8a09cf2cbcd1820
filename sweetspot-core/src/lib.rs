//! Core domain types and pipeline for the Sweetspot engine.
//!
//! Catalog entries ([`CafeEntity`]) and preferences ([`PreferenceQuery`])
//! are normalised to canonical tag tokens at the boundary. The
//! [`Recommender`] then applies hard constraints, narrows by tag
//! preferences (falling back when that would leave nothing), scores the
//! survivors with a [`Scorer`] and ranks them.

#![forbid(unsafe_code)]

mod cafe;
mod category;
pub mod filter;
mod preference;
mod recommend;
pub mod region;
mod scorer;
mod tags;
pub mod vocab;

pub use cafe::CafeEntity;
pub use category::Category;
pub use preference::{PreferenceQuery, PreferenceValue, RawPreferences, normalize_preference_list};
pub use recommend::{
    Diagnostics, RecommendRequest, Recommendation, Recommender, ScoredCafe, TopK, rank,
};
pub use region::normalize_region_preferences;
pub use scorer::Scorer;
pub use tags::{TagSet, normalize_tag_token, to_tag_tokens};
