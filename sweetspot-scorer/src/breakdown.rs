//! Per-term score contributions.
#![forbid(unsafe_code)]

use std::fmt;

use serde::Serialize;

/// One additive term of the weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTerm {
    /// Coffee quality, always applied.
    CoffeeBase,
    /// Dessert quality, always applied.
    DessertBase,
    /// Photo spot flag.
    PhotoSpot,
    /// Popularity, always applied.
    Popularity,
    /// Overlap with requested atmosphere tags.
    AtmosphereOverlap,
    /// Photo spot requested and flagged.
    PhotoSynergy,
    /// View requested and present.
    ViewSynergy,
    /// Overlap with requested taste tags.
    TasteOverlap,
    /// Coffee requested.
    CoffeeSynergy,
    /// Dessert or bread requested.
    DessertSynergy,
    /// Overlap with requested purpose tags.
    PurposeOverlap,
    /// Date requested.
    DateSynergy,
    /// Study or work requested.
    StudySynergy,
    /// Menu keywords requested.
    MenuBonus,
    /// Required conditions requested.
    RequiredBonus,
}

impl ScoreTerm {
    /// Stable snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CoffeeBase => "coffee_base",
            Self::DessertBase => "dessert_base",
            Self::PhotoSpot => "photo_spot",
            Self::Popularity => "popularity",
            Self::AtmosphereOverlap => "atmosphere_overlap",
            Self::PhotoSynergy => "photo_synergy",
            Self::ViewSynergy => "view_synergy",
            Self::TasteOverlap => "taste_overlap",
            Self::CoffeeSynergy => "coffee_synergy",
            Self::DessertSynergy => "dessert_synergy",
            Self::PurposeOverlap => "purpose_overlap",
            Self::DateSynergy => "date_synergy",
            Self::StudySynergy => "study_synergy",
            Self::MenuBonus => "menu_bonus",
            Self::RequiredBonus => "required_bonus",
        }
    }
}

impl fmt::Display for ScoreTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The terms that applied to one cafe, in evaluation order.
///
/// # Examples
/// ```
/// use sweetspot_core::{CafeEntity, PreferenceQuery};
/// use sweetspot_scorer::{ScoreTerm, WeightedScorer};
///
/// let cafe = CafeEntity::new("1", "a").with_coffee_score(4.0);
/// let breakdown = WeightedScorer::new().breakdown(&cafe, &PreferenceQuery::new());
/// assert_eq!(breakdown.contribution(ScoreTerm::CoffeeBase), Some(2.0));
/// assert_eq!(breakdown.contribution(ScoreTerm::PhotoSpot), None);
/// assert_eq!(breakdown.total(), 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    terms: Vec<(ScoreTerm, f64)>,
}

impl ScoreBreakdown {
    pub(crate) const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    pub(crate) fn push(&mut self, term: ScoreTerm, contribution: f64) {
        self.terms.push((term, contribution));
    }

    /// Iterate over applied terms and their contributions.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreTerm, f64)> + '_ {
        self.terms.iter().copied()
    }

    /// The contribution of `term`, or `None` when it did not apply.
    #[must_use]
    pub fn contribution(&self, term: ScoreTerm) -> Option<f64> {
        self.terms
            .iter()
            .find_map(|(applied, value)| (*applied == term).then_some(*value))
    }

    /// Sum of every contribution.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.terms.iter().map(|(_, value)| value).sum()
    }
}
