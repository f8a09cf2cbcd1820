//! Cafe catalog entries.
//!
//! A [`CafeEntity`] is read-only input to the engine. Catalog snapshots come
//! from spreadsheets and crawlers of uneven quality, so deserialisation is
//! lenient: missing or `null` text becomes an empty string, tag fields accept
//! a delimited string or an array, scores that are missing, negative or not
//! finite become `0.0`, and the photo-spot flag understands the usual
//! spreadsheet spellings.

use serde::{Deserialize, Serialize};

use crate::TagSet;

/// A dessert cafe as supplied by the catalog.
///
/// # Examples
/// ```
/// use sweetspot_core::CafeEntity;
///
/// let cafe = CafeEntity::new("c-1", "Salt Bakery")
///     .with_region("gwangju")
///     .with_atmosphere("조용한; 뷰 맛집")
///     .with_coffee_score(4.0)
///     .with_photo_spot(true);
///
/// assert_eq!(cafe.id(), "c-1");
/// assert!(cafe.atmosphere().contains("뷰"));
/// assert_eq!(cafe.coffee_score(), 4.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CafeEntity {
    #[serde(deserialize_with = "lenient::text")]
    id: String,
    #[serde(deserialize_with = "lenient::text")]
    name: String,
    #[serde(deserialize_with = "lenient::text")]
    region: String,
    #[serde(deserialize_with = "lenient::text")]
    address: String,
    #[serde(deserialize_with = "lenient::text")]
    menu: String,
    #[serde(deserialize_with = "lenient::text")]
    main_dessert: String,
    #[serde(deserialize_with = "lenient::text")]
    main_coffee: String,
    #[serde(alias = "taste_description", deserialize_with = "lenient::text")]
    taste_text: String,
    #[serde(deserialize_with = "lenient::text")]
    summary: String,
    #[serde(deserialize_with = "lenient::text")]
    parking: String,
    #[serde(alias = "atmosphere_norm")]
    atmosphere: TagSet,
    #[serde(alias = "taste_norm")]
    taste: TagSet,
    #[serde(alias = "purpose_norm")]
    purpose: TagSet,
    #[serde(alias = "companion_norm")]
    companion: TagSet,
    #[serde(deserialize_with = "lenient::score")]
    coffee_score: f64,
    #[serde(deserialize_with = "lenient::score")]
    dessert_score: f64,
    #[serde(deserialize_with = "lenient::score")]
    date_score: f64,
    #[serde(deserialize_with = "lenient::score")]
    study_score: f64,
    #[serde(deserialize_with = "lenient::score")]
    popularity_score: f64,
    #[serde(alias = "photo_spot_flag", deserialize_with = "lenient::flag")]
    photo_spot: bool,
}

/// Clamp a component score to a finite, non-negative value.
pub(crate) fn sanitise_score(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl CafeEntity {
    /// Construct a cafe with an id and a display name; everything else is
    /// empty or zero.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Opaque identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region code, e.g. `gwangju`.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Free-text menu list.
    #[must_use]
    pub fn menu(&self) -> &str {
        &self.menu
    }

    /// Signature dessert.
    #[must_use]
    pub fn main_dessert(&self) -> &str {
        &self.main_dessert
    }

    /// Signature drink.
    #[must_use]
    pub fn main_coffee(&self) -> &str {
        &self.main_coffee
    }

    /// Free-text taste description.
    #[must_use]
    pub fn taste_text(&self) -> &str {
        &self.taste_text
    }

    /// Review summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Parking descriptor, e.g. `가능` or `불가`.
    #[must_use]
    pub fn parking(&self) -> &str {
        &self.parking
    }

    /// Atmosphere tags.
    #[must_use]
    pub const fn atmosphere(&self) -> &TagSet {
        &self.atmosphere
    }

    /// Taste tags.
    #[must_use]
    pub const fn taste(&self) -> &TagSet {
        &self.taste
    }

    /// Purpose tags.
    #[must_use]
    pub const fn purpose(&self) -> &TagSet {
        &self.purpose
    }

    /// Companion tags (pets, kids, groups).
    #[must_use]
    pub const fn companion(&self) -> &TagSet {
        &self.companion
    }

    /// Coffee quality score.
    #[must_use]
    pub const fn coffee_score(&self) -> f64 {
        self.coffee_score
    }

    /// Dessert quality score.
    #[must_use]
    pub const fn dessert_score(&self) -> f64 {
        self.dessert_score
    }

    /// Suitability for dates.
    #[must_use]
    pub const fn date_score(&self) -> f64 {
        self.date_score
    }

    /// Suitability for studying or laptop work.
    #[must_use]
    pub const fn study_score(&self) -> f64 {
        self.study_score
    }

    /// Popularity score.
    #[must_use]
    pub const fn popularity_score(&self) -> f64 {
        self.popularity_score
    }

    /// Whether reviewers flag the cafe as a photo spot.
    #[must_use]
    pub const fn photo_spot(&self) -> bool {
        self.photo_spot
    }

    /// Set the region code.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the menu list.
    #[must_use]
    pub fn with_menu(mut self, menu: impl Into<String>) -> Self {
        self.menu = menu.into();
        self
    }

    /// Set the signature dessert.
    #[must_use]
    pub fn with_main_dessert(mut self, dessert: impl Into<String>) -> Self {
        self.main_dessert = dessert.into();
        self
    }

    /// Set the signature drink.
    #[must_use]
    pub fn with_main_coffee(mut self, coffee: impl Into<String>) -> Self {
        self.main_coffee = coffee.into();
        self
    }

    /// Set the taste description.
    #[must_use]
    pub fn with_taste_text(mut self, text: impl Into<String>) -> Self {
        self.taste_text = text.into();
        self
    }

    /// Set the review summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the parking descriptor.
    #[must_use]
    pub fn with_parking(mut self, parking: impl Into<String>) -> Self {
        self.parking = parking.into();
        self
    }

    /// Parse and set atmosphere tags from a delimited field.
    #[must_use]
    pub fn with_atmosphere(mut self, raw: &str) -> Self {
        self.atmosphere = TagSet::parse(raw);
        self
    }

    /// Parse and set taste tags from a delimited field.
    #[must_use]
    pub fn with_taste(mut self, raw: &str) -> Self {
        self.taste = TagSet::parse(raw);
        self
    }

    /// Parse and set purpose tags from a delimited field.
    #[must_use]
    pub fn with_purpose(mut self, raw: &str) -> Self {
        self.purpose = TagSet::parse(raw);
        self
    }

    /// Parse and set companion tags from a delimited field.
    #[must_use]
    pub fn with_companion(mut self, raw: &str) -> Self {
        self.companion = TagSet::parse(raw);
        self
    }

    /// Set the coffee score; invalid values become `0.0`.
    #[must_use]
    pub fn with_coffee_score(mut self, score: f64) -> Self {
        self.coffee_score = sanitise_score(score);
        self
    }

    /// Set the dessert score; invalid values become `0.0`.
    #[must_use]
    pub fn with_dessert_score(mut self, score: f64) -> Self {
        self.dessert_score = sanitise_score(score);
        self
    }

    /// Set the date score; invalid values become `0.0`.
    #[must_use]
    pub fn with_date_score(mut self, score: f64) -> Self {
        self.date_score = sanitise_score(score);
        self
    }

    /// Set the study score; invalid values become `0.0`.
    #[must_use]
    pub fn with_study_score(mut self, score: f64) -> Self {
        self.study_score = sanitise_score(score);
        self
    }

    /// Set the popularity score; invalid values become `0.0`.
    #[must_use]
    pub fn with_popularity_score(mut self, score: f64) -> Self {
        self.popularity_score = sanitise_score(score);
        self
    }

    /// Set the photo-spot flag.
    #[must_use]
    pub const fn with_photo_spot(mut self, photo_spot: bool) -> Self {
        self.photo_spot = photo_spot;
        self
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::sanitise_score;

    const TRUTHY: &[&str] = &["y", "yes", "true", "1", "o"];

    pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            _ => String::new(),
        })
    }

    pub(super) fn score<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Value::deserialize(deserializer)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        };
        Ok(raw.map_or(0.0, sanitise_score))
    }

    pub(super) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(flag) => flag,
            Value::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
            Value::String(text) => TRUTHY.contains(&text.trim().to_lowercase().as_str()),
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserialises_sparse_rows() {
        let cafe: CafeEntity = serde_json::from_str(
            r#"{
                "id": 17,
                "name": "Moonlight",
                "region": "gwangju",
                "parking": null,
                "atmosphere_norm": "조용한;아늑한",
                "taste_norm": ["커피", "빵 / 디저트"],
                "coffee_score": -2,
                "dessert_score": "4.5",
                "photo_spot_flag": "Y"
            }"#,
        )
        .expect("valid cafe row");

        assert_eq!(cafe.id(), "17");
        assert_eq!(cafe.parking(), "");
        assert_eq!(cafe.atmosphere().len(), 2);
        assert_eq!(cafe.taste().len(), 3);
        assert_eq!(cafe.coffee_score(), 0.0);
        assert_eq!(cafe.dessert_score(), 4.5);
        assert_eq!(cafe.popularity_score(), 0.0);
        assert!(cafe.photo_spot());
        assert!(cafe.companion().is_empty());
    }

    #[rstest]
    #[case("true", true)]
    #[case("1", true)]
    #[case("0", false)]
    #[case(r#""yes""#, true)]
    #[case(r#""N""#, false)]
    #[case("null", false)]
    fn photo_spot_spellings(#[case] json: &str, #[case] expected: bool) {
        let row = format!(r#"{{"photo_spot": {json}}}"#);
        let cafe: CafeEntity = serde_json::from_str(&row).expect("valid cafe row");
        assert_eq!(cafe.photo_spot(), expected);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(-0.5)]
    fn builder_sanitises_scores(#[case] score: f64) {
        let cafe = CafeEntity::new("c", "n").with_study_score(score);
        assert_eq!(cafe.study_score(), 0.0);
    }
}
