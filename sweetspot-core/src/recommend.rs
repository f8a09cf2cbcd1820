//! Ranking pipeline: hard filter, tag filter, score, sort, truncate.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::filter::{apply_hard_constraints, apply_tag_preferences};
use crate::{CafeEntity, PreferenceQuery, RawPreferences, Scorer};

/// Maximum number of ranked results to return.
///
/// # Examples
/// ```
/// use sweetspot_core::TopK;
///
/// assert_eq!(TopK::default().get(), 5);
/// assert_eq!(TopK::new(0).get(), 1);
/// assert_eq!(TopK::from_requested(3.9).get(), 3);
/// assert_eq!(TopK::from_requested(-2.0).get(), 1);
/// assert_eq!(TopK::from_requested(f64::NAN).get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopK(NonZeroUsize);

impl TopK {
    /// The result count used when the caller does not ask for one.
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(4));

    /// Build from an integer count; zero becomes one.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self(NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN))
    }

    /// Build from a loosely supplied number.
    ///
    /// Fractions are floored. Values that are not finite or that floor below
    /// one become one.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the value is finite and at least one; `as` saturates oversized requests"
    )]
    pub fn from_requested(requested: f64) -> Self {
        if !requested.is_finite() || requested < 1.0 {
            return Self(NonZeroUsize::MIN);
        }
        Self::new(requested.floor() as usize)
    }

    /// The count as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for TopK {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for TopK {
    fn from(count: usize) -> Self {
        Self::new(count)
    }
}

/// A recommendation request: normalised preferences plus a result limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendRequest {
    /// Canonical preferences.
    pub preferences: PreferenceQuery,
    /// Result limit.
    pub top_k: TopK,
}

impl RecommendRequest {
    /// Request the default number of results for `preferences`.
    #[must_use]
    pub fn new(preferences: PreferenceQuery) -> Self {
        Self {
            preferences,
            top_k: TopK::DEFAULT,
        }
    }

    /// Normalise a raw payload into a request.
    #[must_use]
    pub fn from_raw(raw: &RawPreferences) -> Self {
        Self::new(PreferenceQuery::from_raw(raw))
    }

    /// Replace the result limit.
    #[must_use]
    pub const fn with_top_k(mut self, top_k: TopK) -> Self {
        self.top_k = top_k;
        self
    }
}

/// A cafe together with the score it was ranked by.
///
/// Serialises as the cafe's own fields plus `score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCafe {
    #[serde(flatten)]
    cafe: CafeEntity,
    score: f64,
}

impl ScoredCafe {
    /// Pair a cafe with its score.
    #[must_use]
    pub const fn new(cafe: CafeEntity, score: f64) -> Self {
        Self { cafe, score }
    }

    /// The ranked cafe.
    #[must_use]
    pub const fn cafe(&self) -> &CafeEntity {
        &self.cafe
    }

    /// The score assigned by the scorer.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Split into the cafe and its score.
    #[must_use]
    pub fn into_parts(self) -> (CafeEntity, f64) {
        (self.cafe, self.score)
    }
}

/// Candidate counts observed while ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Number of cafes in the catalog.
    pub catalog_size: usize,
    /// Cafes left after region, menu and requirement checks.
    pub hard_filtered: usize,
    /// Cafes that matched every tag preference.
    pub tag_filtered: usize,
    /// Whether tag preferences were ignored because nothing matched them.
    pub tag_filter_relaxed: bool,
}

/// Ranked results plus the counts that produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recommendation {
    /// Cafes in descending score order.
    pub results: Vec<ScoredCafe>,
    /// Candidate counts per stage.
    pub diagnostics: Diagnostics,
}

/// Rank scored cafes in place: descending score, ties keep input order.
pub fn rank(scored: &mut [ScoredCafe]) {
    scored.sort_by(|lhs, rhs| rhs.score.total_cmp(&lhs.score));
}

/// Recommend cafes by filtering a catalog and ranking the survivors.
///
/// # Examples
/// ```
/// use sweetspot_core::{
///     CafeEntity, Category, PreferenceQuery, RecommendRequest, Recommender, Scorer,
/// };
///
/// struct Popularity;
///
/// impl Scorer for Popularity {
///     fn score(&self, cafe: &CafeEntity, _query: &PreferenceQuery) -> f64 {
///         cafe.popularity_score()
///     }
/// }
///
/// let catalog = vec![
///     CafeEntity::new("1", "A").with_region("gwangju").with_popularity_score(1.0),
///     CafeEntity::new("2", "B").with_region("gwangju").with_popularity_score(9.0),
///     CafeEntity::new("3", "C").with_region("naju").with_popularity_score(5.0),
/// ];
/// let request = RecommendRequest::new(PreferenceQuery::new().with(Category::Region, "광주"));
/// let outcome = Recommender::new(Popularity).recommend(&catalog, &request);
///
/// let ids: Vec<_> = outcome.results.iter().map(|hit| hit.cafe().id()).collect();
/// assert_eq!(ids, ["2", "1"]);
/// assert_eq!(outcome.diagnostics.hard_filtered, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recommender<C> {
    scorer: C,
}

impl<C: Scorer> Recommender<C> {
    /// Wrap a scorer.
    #[must_use]
    pub const fn new(scorer: C) -> Self {
        Self { scorer }
    }

    /// The scorer used for ranking.
    #[must_use]
    pub const fn scorer(&self) -> &C {
        &self.scorer
    }

    /// Filter, score and rank `catalog` against `request`.
    ///
    /// A query without any tokens, or one whose hard constraints eliminate
    /// every cafe, yields no results.
    #[must_use]
    pub fn recommend(&self, catalog: &[CafeEntity], request: &RecommendRequest) -> Recommendation {
        let query = &request.preferences;
        let mut diagnostics = Diagnostics {
            catalog_size: catalog.len(),
            ..Diagnostics::default()
        };

        if query.is_vacuous() {
            log::debug!("preference query is empty; returning no recommendations");
            return Recommendation {
                results: Vec::new(),
                diagnostics,
            };
        }

        let hard = apply_hard_constraints(catalog, query);
        diagnostics.hard_filtered = hard.len();
        log::debug!(
            "{} of {} cafes passed hard constraints",
            diagnostics.hard_filtered,
            diagnostics.catalog_size
        );
        if hard.is_empty() {
            return Recommendation {
                results: Vec::new(),
                diagnostics,
            };
        }

        let tagged = apply_tag_preferences(hard, query);
        diagnostics.tag_filtered = tagged.matched;
        diagnostics.tag_filter_relaxed = tagged.relaxed;
        if tagged.relaxed {
            log::info!(
                "no cafe matched every tag preference; ranking all {} hard-filtered candidates",
                diagnostics.hard_filtered
            );
        } else {
            log::debug!("{} cafes matched tag preferences", tagged.matched);
        }

        let mut results: Vec<ScoredCafe> = tagged
            .candidates
            .into_iter()
            .map(|cafe| {
                let score = C::sanitise(self.scorer.score(cafe, query));
                ScoredCafe::new(cafe.clone(), score)
            })
            .collect();
        rank(&mut results);
        results.truncate(request.top_k.get());

        Recommendation {
            results,
            diagnostics,
        }
    }
}
