//! Preference payloads and their normalised query form.
//!
//! Upstream layers hand over loosely typed JSON: any category may be a single
//! string, an array of strings, or missing altogether, and a single string
//! may pack several delimited values. [`PreferenceValue`] captures that shape
//! once at the boundary; [`PreferenceQuery::from_raw`] turns a whole
//! [`RawPreferences`] payload into canonical [`TagSet`]s so nothing
//! downstream branches on input shape again.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::region::normalize_region_preferences;
use crate::{Category, TagSet};

const MIN_SENTIMENT_FLOOR: f64 = 0.0;
const MIN_SENTIMENT_CEILING: f64 = 100.0;

/// A single preference field as received from upstream.
///
/// Deserialising anything other than a string or an array yields
/// [`PreferenceValue::Absent`]; non-string array elements are dropped.
///
/// # Examples
/// ```
/// use sweetspot_core::PreferenceValue;
///
/// let value: PreferenceValue = serde_json::from_str(r#"["뷰", 3, "사진"]"#).unwrap();
/// assert_eq!(value, PreferenceValue::List(vec!["뷰".into(), "사진".into()]));
///
/// let odd: PreferenceValue = serde_json::from_str("42").unwrap();
/// assert!(odd.is_absent());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreferenceValue {
    /// No constraint.
    #[default]
    Absent,
    /// One string, possibly holding several delimited values.
    Single(String),
    /// Several strings, each possibly delimited.
    List(Vec<String>),
}

impl PreferenceValue {
    /// Borrow the raw strings carried by the value.
    #[must_use]
    pub fn items(&self) -> &[String] {
        match self {
            Self::Absent => &[],
            Self::Single(text) => std::slice::from_ref(text),
            Self::List(items) => items,
        }
    }

    /// Report whether the value is [`PreferenceValue::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Value> for PreferenceValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Single(text),
            Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(text) => Some(text),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => Self::Absent,
        }
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for PreferenceValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl<const N: usize> From<[&str; N]> for PreferenceValue {
    fn from(value: [&str; N]) -> Self {
        Self::List(value.iter().map(|item| (*item).to_owned()).collect())
    }
}

impl<'de> Deserialize<'de> for PreferenceValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for PreferenceValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Single(text) => serializer.serialize_str(text),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

/// Normalise a generic preference field into canonical tokens.
///
/// Absent or empty values produce an empty set, which means "no constraint".
///
/// # Examples
/// ```
/// use sweetspot_core::{PreferenceValue, normalize_preference_list};
///
/// let value = PreferenceValue::from(["사진 / 뷰맛집", "조용한"]);
/// let tokens = normalize_preference_list(&value);
/// assert_eq!(tokens.iter().collect::<Vec<_>>(), ["뷰", "사진", "조용한"]);
/// ```
#[must_use]
pub fn normalize_preference_list(value: &PreferenceValue) -> TagSet {
    TagSet::from(value)
}

/// The preference payload as sent by the HTTP and extraction layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPreferences {
    /// Region codes and/or Korean place names.
    #[serde(skip_serializing_if = "PreferenceValue::is_absent")]
    pub region: PreferenceValue,
    /// Desired atmosphere tags.
    #[serde(skip_serializing_if = "PreferenceValue::is_absent")]
    pub atmosphere: PreferenceValue,
    /// Desired taste tags.
    #[serde(skip_serializing_if = "PreferenceValue::is_absent")]
    pub taste: PreferenceValue,
    /// Desired purpose tags.
    #[serde(skip_serializing_if = "PreferenceValue::is_absent")]
    pub purpose: PreferenceValue,
    /// Menu keywords that must all appear.
    #[serde(skip_serializing_if = "PreferenceValue::is_absent")]
    pub menu: PreferenceValue,
    /// Hard requirements.
    #[serde(skip_serializing_if = "PreferenceValue::is_absent")]
    pub required: PreferenceValue,
    /// Minimum review sentiment on a `0..=100` scale. Advisory only.
    #[serde(
        alias = "min_sentiment",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_sentiment: Option<f64>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

/// Canonical preferences: one [`TagSet`] per [`Category`].
///
/// An empty set means "no constraint on this category", never "match
/// nothing".
///
/// # Examples
/// ```
/// use sweetspot_core::{Category, PreferenceQuery};
///
/// let query = PreferenceQuery::new()
///     .with(Category::Region, "광주")
///     .with(Category::Atmosphere, ["조용한"]);
/// assert!(query.tokens(Category::Region).contains("gwangju"));
/// assert!(!query.is_vacuous());
/// assert!(PreferenceQuery::new().is_vacuous());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceQuery {
    region: TagSet,
    atmosphere: TagSet,
    taste: TagSet,
    purpose: TagSet,
    menu: TagSet,
    required: TagSet,
    min_sentiment: Option<f64>,
}

impl PreferenceQuery {
    /// Construct a query with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalise a raw payload.
    #[must_use]
    pub fn from_raw(raw: &RawPreferences) -> Self {
        let mut query = Self::new();
        query.set(Category::Region, &raw.region);
        query.set(Category::Atmosphere, &raw.atmosphere);
        query.set(Category::Taste, &raw.taste);
        query.set(Category::Purpose, &raw.purpose);
        query.set(Category::Menu, &raw.menu);
        query.set(Category::Required, &raw.required);
        if let Some(threshold) = raw.min_sentiment {
            query.set_min_sentiment(threshold);
        }
        query
    }

    /// Replace the tokens of `category` with the normalised `value`.
    ///
    /// Region values additionally gain their code/place-name aliases.
    pub fn set(&mut self, category: Category, value: &PreferenceValue) {
        let tokens = match category {
            Category::Region => normalize_region_preferences(value),
            _ => normalize_preference_list(value),
        };
        *self.slot_mut(category) = tokens;
    }

    /// Replace the tokens of `category` while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, category: Category, value: impl Into<PreferenceValue>) -> Self {
        self.set(category, &value.into());
        self
    }

    /// Record the advisory sentiment threshold, clamped into `0..=100`.
    ///
    /// Non-finite thresholds clear the value.
    pub fn set_min_sentiment(&mut self, threshold: f64) {
        self.min_sentiment = threshold
            .is_finite()
            .then(|| threshold.clamp(MIN_SENTIMENT_FLOOR, MIN_SENTIMENT_CEILING));
    }

    /// Set the sentiment threshold while returning `self` for chaining.
    #[must_use]
    pub fn with_min_sentiment(mut self, threshold: f64) -> Self {
        self.set_min_sentiment(threshold);
        self
    }

    /// Tokens requested for `category`.
    #[must_use]
    pub const fn tokens(&self, category: Category) -> &TagSet {
        match category {
            Category::Region => &self.region,
            Category::Atmosphere => &self.atmosphere,
            Category::Taste => &self.taste,
            Category::Purpose => &self.purpose,
            Category::Menu => &self.menu,
            Category::Required => &self.required,
        }
    }

    const fn slot_mut(&mut self, category: Category) -> &mut TagSet {
        match category {
            Category::Region => &mut self.region,
            Category::Atmosphere => &mut self.atmosphere,
            Category::Taste => &mut self.taste,
            Category::Purpose => &mut self.purpose,
            Category::Menu => &mut self.menu,
            Category::Required => &mut self.required,
        }
    }

    /// The advisory sentiment threshold, if one was supplied.
    #[must_use]
    pub const fn min_sentiment(&self) -> Option<f64> {
        self.min_sentiment
    }

    /// Report whether no category carries any token.
    ///
    /// The sentiment threshold alone does not make a query meaningful.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        Category::ALL
            .iter()
            .all(|category| self.tokens(*category).is_empty())
    }
}

impl From<&RawPreferences> for PreferenceQuery {
    fn from(raw: &RawPreferences) -> Self {
        Self::from_raw(raw)
    }
}
