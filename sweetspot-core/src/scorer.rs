//! Score cafes against a preference query.
//!
//! The `Scorer` trait assigns a desirability score to a
//! [`CafeEntity`](crate::CafeEntity) given a normalised
//! [`PreferenceQuery`](crate::PreferenceQuery).

use crate::{CafeEntity, PreferenceQuery};

/// Calculate a desirability score for a cafe.
///
/// Higher scores rank earlier. Each cafe is scored independently of the
/// others. Implementations must be thread-safe (`Send` + `Sync`) so a single
/// scorer can serve concurrent requests against a shared catalog.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
///
/// Scores have no upper bound. Use [`Scorer::sanitise`] to apply these
/// guards.
///
/// # Examples
///
/// ```rust
/// use sweetspot_core::{CafeEntity, PreferenceQuery, Scorer};
///
/// struct PopularityOnly;
///
/// impl Scorer for PopularityOnly {
///     fn score(&self, cafe: &CafeEntity, _query: &PreferenceQuery) -> f64 {
///         Self::sanitise(cafe.popularity_score())
///     }
/// }
///
/// let cafe = CafeEntity::new("1", "a").with_popularity_score(7.0);
/// assert_eq!(PopularityOnly.score(&cafe, &PreferenceQuery::new()), 7.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `cafe` according to `query`.
    fn score(&self, cafe: &CafeEntity, query: &PreferenceQuery) -> f64;

    /// Validate a raw score.
    ///
    /// Returns `0.0` for non-finite or negative values.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, cafe: &CafeEntity, query: &PreferenceQuery) -> f64 {
        (**self).score(cafe, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Fixed;

    impl Scorer for Fixed {
        fn score(&self, _cafe: &CafeEntity, _query: &PreferenceQuery) -> f64 {
            1.0
        }
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(f64::NEG_INFINITY, 0.0)]
    #[case(-0.1, 0.0)]
    #[case(12.5, 12.5)]
    fn sanitise_filters_invalid_scores(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(Fixed::sanitise(input), expected);
    }

    #[rstest]
    fn references_delegate() {
        let scorer = Fixed;
        let by_ref = &scorer;
        let cafe = CafeEntity::new("1", "a");
        assert_eq!(by_ref.score(&cafe, &PreferenceQuery::new()), 1.0);
    }
}
