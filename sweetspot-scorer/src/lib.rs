//! Weighted scoring for Sweetspot cafe recommendations.
//!
//! [`WeightedScorer`] implements [`Scorer`](sweetspot_core::Scorer) as a
//! purely additive sum of terms: base quality and popularity components that
//! always apply, bonuses for overlapping atmosphere, taste and purpose tags,
//! synergies that reward a cafe's strength in what was asked for, and flat
//! bonuses for menu keywords and required conditions. All weights live in
//! [`ScoreWeights`]; [`WeightedScorer::breakdown`] reports how a score was
//! assembled.
//!
//! # Examples
//!
//! ```
//! use sweetspot_core::{CafeEntity, Category, PreferenceQuery, Scorer};
//! use sweetspot_scorer::{ScoreTerm, WeightedScorer};
//!
//! let cafe = CafeEntity::new("1", "Sunroom")
//!     .with_atmosphere("뷰 맛집; 사진 맛집")
//!     .with_photo_spot(true);
//! let query = PreferenceQuery::new().with(Category::Atmosphere, ["사진", "뷰"]);
//!
//! let scorer = WeightedScorer::new();
//! let breakdown = scorer.breakdown(&cafe, &query);
//! assert_eq!(breakdown.contribution(ScoreTerm::PhotoSynergy), Some(4.0));
//! assert_eq!(breakdown.contribution(ScoreTerm::ViewSynergy), Some(2.0));
//! assert_eq!(scorer.score(&cafe, &query), breakdown.total());
//! ```

#![forbid(unsafe_code)]

mod breakdown;
mod error;
mod weighted;
mod weights;

pub use breakdown::{ScoreBreakdown, ScoreTerm};
pub use error::ScoreWeightsError;
pub use weighted::WeightedScorer;
pub use weights::ScoreWeights;
