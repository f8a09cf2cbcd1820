//! Tag canonicalisation and the [`TagSet`] container.
//!
//! Raw tag fields are free text separated by whichever delimiter the source
//! happened to use: semicolons, commas, slashes or one of several middle-dot
//! characters. [`to_tag_tokens`] splits on all of them and runs every piece
//! through [`normalize_tag_token`].

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::preference::PreferenceValue;
use crate::vocab::SYNONYMS;

const DELIMITERS: &[char] = &[';', ',', '/', '·', 'ㆍ', '・', '•'];

/// Canonicalise a single tag token.
///
/// Whitespace is trimmed and collapsed, letters are lower-cased and the
/// synonym table in [`vocab`](crate::vocab) is applied. Empty or
/// whitespace-only input yields an empty string. The function is idempotent.
///
/// # Examples
/// ```
/// use sweetspot_core::normalize_tag_token;
///
/// assert_eq!(normalize_tag_token("  조용한  "), "조용한");
/// assert_eq!(normalize_tag_token("Photo  Spot"), "사진");
/// assert_eq!(normalize_tag_token("   "), "");
/// ```
#[must_use]
pub fn normalize_tag_token(raw: &str) -> String {
    let collapsed = raw
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    if collapsed.is_empty() {
        return collapsed;
    }
    let compact: String = collapsed.chars().filter(|c| !c.is_whitespace()).collect();
    SYNONYMS
        .iter()
        .find(|rule| rule.matches(&compact))
        .map_or(collapsed, |rule| rule.canonical.to_owned())
}

/// Split a delimited tag field into canonical tokens.
///
/// Repeated delimiters produce no empty tokens. Discovery order is kept and
/// duplicates are not removed; collect into a [`TagSet`] for set semantics.
///
/// # Examples
/// ```
/// use sweetspot_core::to_tag_tokens;
///
/// let tokens = to_tag_tokens("조용한;; 아늑한 / 사진 맛집·뷰");
/// assert_eq!(tokens, ["조용한", "아늑한", "사진", "뷰"]);
/// ```
#[must_use]
pub fn to_tag_tokens(raw: &str) -> Vec<String> {
    raw.split(DELIMITERS)
        .map(normalize_tag_token)
        .filter(|token| !token.is_empty())
        .collect()
}

/// An ordered set of canonical tag tokens.
///
/// Every constructor routes through [`to_tag_tokens`], so a `TagSet` never
/// holds raw delimiters or un-normalised spellings. Iteration order is
/// lexicographic, which keeps serialised output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Parse a delimited tag field.
    ///
    /// # Examples
    /// ```
    /// use sweetspot_core::TagSet;
    ///
    /// let tags = TagSet::parse("조용한, 조용함 / 뷰");
    /// assert_eq!(tags.len(), 2);
    /// assert!(tags.contains("조용한"));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::from_fields([raw])
    }

    /// Build a set from several fields, each of which may itself be delimited.
    #[must_use]
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            fields
                .into_iter()
                .flat_map(|field| to_tag_tokens(field.as_ref()))
                .collect(),
        )
    }

    /// Insert a token that is already canonical, such as a region alias.
    pub(crate) fn insert_canonical(&mut self, token: &str) {
        if !token.is_empty() {
            self.0.insert(token.to_owned());
        }
    }

    /// Report whether `token` is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Report whether any of `tokens` is present.
    #[must_use]
    pub fn contains_any(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|token| self.contains(token))
    }

    /// Report whether every token of `other` is present in `self`.
    ///
    /// An empty `other` is trivially contained.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Count the tokens shared with `other`.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether the set holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over tokens in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Join tokens with `separator`, mainly for free-text matching.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.iter().collect::<Vec<_>>().join(separator)
    }
}

impl From<&PreferenceValue> for TagSet {
    fn from(value: &PreferenceValue) -> Self {
        Self::from_fields(value.items())
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = PreferenceValue::deserialize(deserializer)?;
        Ok(Self::from(&value))
    }
}
