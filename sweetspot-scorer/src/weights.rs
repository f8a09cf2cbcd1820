//! Named weights for every scoring term.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::ScoreWeightsError;

/// Multipliers and flat bonuses applied by [`WeightedScorer`](crate::WeightedScorer).
///
/// Multipliers scale a component score of the cafe; bonuses are added as-is
/// when their condition holds.
///
/// # Examples
/// ```
/// use sweetspot_scorer::ScoreWeights;
///
/// let weights = ScoreWeights {
///     photo_synergy: 6.0,
///     ..ScoreWeights::DEFAULT
/// };
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Multiplier for the cafe's coffee score.
    pub coffee_base: f64,
    /// Multiplier for the cafe's dessert score.
    pub dessert_base: f64,
    /// Bonus for cafes flagged as photo spots.
    pub photo_spot: f64,
    /// Multiplier for the cafe's popularity score.
    pub popularity: f64,
    /// Bonus per requested atmosphere tag the cafe carries.
    pub atmosphere_overlap: f64,
    /// Bonus when a photo spot is asked for by atmosphere.
    pub photo_synergy: f64,
    /// Bonus when a view is asked for and the cafe has one.
    pub view_synergy: f64,
    /// Bonus per requested taste tag the cafe carries.
    pub taste_overlap: f64,
    /// Multiplier for the coffee score when coffee is asked for.
    pub coffee_synergy: f64,
    /// Multiplier for the dessert score when dessert or bread is asked for.
    pub dessert_synergy: f64,
    /// Bonus per requested purpose tag the cafe carries.
    pub purpose_overlap: f64,
    /// Multiplier for the date score when a date is the purpose.
    pub date_synergy: f64,
    /// Multiplier for the study score when study or work is the purpose.
    pub study_synergy: f64,
    /// Bonus when any menu keyword was requested.
    pub menu_bonus: f64,
    /// Bonus when any required condition was requested.
    pub required_bonus: f64,
}

impl ScoreWeights {
    /// Production weights.
    pub const DEFAULT: Self = Self {
        coffee_base: 0.5,
        dessert_base: 0.3,
        photo_spot: 1.0,
        popularity: 0.1,
        atmosphere_overlap: 2.0,
        photo_synergy: 4.0,
        view_synergy: 2.0,
        taste_overlap: 2.0,
        coffee_synergy: 1.5,
        dessert_synergy: 1.0,
        purpose_overlap: 2.0,
        date_synergy: 2.0,
        study_synergy: 1.5,
        menu_bonus: 2.5,
        required_bonus: 1.5,
    };

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError::NonFinite`] for NaN or infinite weights and
    /// [`ScoreWeightsError::Negative`] for weights below zero.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        for (name, value) in self.named() {
            if !value.is_finite() {
                return Err(ScoreWeightsError::NonFinite { name });
            }
            if value < 0.0 {
                return Err(ScoreWeightsError::Negative { name, value });
            }
        }
        Ok(self)
    }

    const fn named(self) -> [(&'static str, f64); 15] {
        [
            ("coffee_base", self.coffee_base),
            ("dessert_base", self.dessert_base),
            ("photo_spot", self.photo_spot),
            ("popularity", self.popularity),
            ("atmosphere_overlap", self.atmosphere_overlap),
            ("photo_synergy", self.photo_synergy),
            ("view_synergy", self.view_synergy),
            ("taste_overlap", self.taste_overlap),
            ("coffee_synergy", self.coffee_synergy),
            ("dessert_synergy", self.dessert_synergy),
            ("purpose_overlap", self.purpose_overlap),
            ("date_synergy", self.date_synergy),
            ("study_synergy", self.study_synergy),
            ("menu_bonus", self.menu_bonus),
            ("required_bonus", self.required_bonus),
        ]
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
