//! Fixed-weight additive scorer.
#![forbid(unsafe_code)]

use sweetspot_core::vocab::{BREAD, COFFEE, DATE, DESSERT, PHOTO, STUDY, VIEW, VISTA, WORK};
use sweetspot_core::{CafeEntity, Category, PreferenceQuery, Scorer, TagSet};

use crate::{ScoreBreakdown, ScoreTerm, ScoreWeights, ScoreWeightsError};

/// Scores cafes by summing weighted component scores and preference
/// bonuses.
///
/// Every term is non-negative, so a cafe never loses score for matching
/// more preferences.
///
/// # Examples
/// ```
/// use sweetspot_core::{CafeEntity, Category, PreferenceQuery, Scorer};
/// use sweetspot_scorer::WeightedScorer;
///
/// let cafe = CafeEntity::new("1", "a")
///     .with_atmosphere("조용한")
///     .with_coffee_score(2.0);
/// let query = PreferenceQuery::new().with(Category::Atmosphere, "조용한");
/// // 2.0 * 0.5 for coffee plus 2.0 for the overlapping atmosphere tag.
/// assert_eq!(WeightedScorer::new().score(&cafe, &query), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedScorer {
    weights: ScoreWeights,
}

impl WeightedScorer {
    /// Construct a scorer with [`ScoreWeights::DEFAULT`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weights: ScoreWeights::DEFAULT,
        }
    }

    /// Construct a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a weight is negative or not finite.
    pub fn with_weights(weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        let validated = weights.validate()?;
        log::debug!("weighted scorer configured with {validated:?}");
        Ok(Self { weights: validated })
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// List every applied term with its contribution.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "scoring multiplies component scores by their weights"
    )]
    pub fn breakdown(&self, cafe: &CafeEntity, query: &PreferenceQuery) -> ScoreBreakdown {
        let weights = &self.weights;
        let mut breakdown = ScoreBreakdown::new();

        breakdown.push(ScoreTerm::CoffeeBase, cafe.coffee_score() * weights.coffee_base);
        breakdown.push(
            ScoreTerm::DessertBase,
            cafe.dessert_score() * weights.dessert_base,
        );
        if cafe.photo_spot() {
            breakdown.push(ScoreTerm::PhotoSpot, weights.photo_spot);
        }
        breakdown.push(
            ScoreTerm::Popularity,
            cafe.popularity_score() * weights.popularity,
        );

        let atmosphere = query.tokens(Category::Atmosphere);
        if !atmosphere.is_empty() {
            breakdown.push(
                ScoreTerm::AtmosphereOverlap,
                overlap_count(cafe.atmosphere(), atmosphere) * weights.atmosphere_overlap,
            );
        }
        if cafe.photo_spot() && atmosphere.contains(PHOTO) {
            breakdown.push(ScoreTerm::PhotoSynergy, weights.photo_synergy);
        }
        if atmosphere.contains(VIEW) && cafe.atmosphere().contains_any(&[VIEW, VISTA]) {
            breakdown.push(ScoreTerm::ViewSynergy, weights.view_synergy);
        }

        let taste = query.tokens(Category::Taste);
        if !taste.is_empty() {
            breakdown.push(
                ScoreTerm::TasteOverlap,
                overlap_count(cafe.taste(), taste) * weights.taste_overlap,
            );
        }
        if taste.contains(COFFEE) {
            breakdown.push(
                ScoreTerm::CoffeeSynergy,
                cafe.coffee_score() * weights.coffee_synergy,
            );
        }
        if taste.contains_any(&[DESSERT, BREAD]) {
            breakdown.push(
                ScoreTerm::DessertSynergy,
                cafe.dessert_score() * weights.dessert_synergy,
            );
        }

        let purpose = query.tokens(Category::Purpose);
        if !purpose.is_empty() {
            breakdown.push(
                ScoreTerm::PurposeOverlap,
                overlap_count(cafe.purpose(), purpose) * weights.purpose_overlap,
            );
        }
        if purpose.contains(DATE) {
            breakdown.push(ScoreTerm::DateSynergy, cafe.date_score() * weights.date_synergy);
        }
        if purpose.contains_any(&[STUDY, WORK]) {
            breakdown.push(
                ScoreTerm::StudySynergy,
                cafe.study_score() * weights.study_synergy,
            );
        }

        if !query.tokens(Category::Menu).is_empty() {
            breakdown.push(ScoreTerm::MenuBonus, weights.menu_bonus);
        }
        if !query.tokens(Category::Required).is_empty() {
            breakdown.push(ScoreTerm::RequiredBonus, weights.required_bonus);
        }

        breakdown
    }
}

impl Default for WeightedScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, cafe: &CafeEntity, query: &PreferenceQuery) -> f64 {
        Self::sanitise(self.breakdown(cafe, query).total())
    }
}

fn overlap_count(cafe_tags: &TagSet, wanted: &TagSet) -> f64 {
    let shared = cafe_tags.overlap(wanted);
    f64::from(u32::try_from(shared).unwrap_or(u32::MAX))
}
