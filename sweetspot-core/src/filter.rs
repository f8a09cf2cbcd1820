//! Candidate filtering.
//!
//! Filtering runs in two passes:
//!
//! 1. **Hard constraints** ([`passes_hard_constraints`]) for region, menu
//!    keywords and required conditions. A failing cafe is dropped, and when
//!    every cafe fails the recommendation is empty.
//! 2. **Tag preferences** ([`apply_tag_preferences`]) requiring the cafe's
//!    atmosphere, taste and purpose tags to cover the requested ones. If this
//!    pass would leave nothing, it is skipped and the hard-filtered pool is
//!    kept.
//!
//! Each predicate treats an empty requested set as "no constraint".

use crate::region::{is_region_code, lookup_region};
use crate::{CafeEntity, Category, PreferenceQuery, TagSet};

const HAYSTACK_SEPARATOR: &str = "\n";
const CLAUSE_SEPARATORS: &[char] = &['\n', ',', '.', ';', '/', '·', '!', '?'];

// ASCII markers match whole words. Hangul markers match substrings.
const PARKING_MARKERS: &[&str] = &["주차", "parking"];
const PARKING_NEGATIVE_MARKERS: &[&str] = &[
    "없음",
    "불가",
    "안됨",
    "none",
    "unavailable",
    "not available",
];
const PET_MARKERS: &[&str] = &["반려", "애견", "pet", "pets"];
const PET_NEGATIVE_MARKERS: &[&str] = &["불가", "금지", "안됨", "아님", "없음", "no", "not"];
const NO_KIDS_MARKERS: &[&str] = &["노키즈", "no kids", "nokids"];
const NO_KIDS_NEGATIVE_MARKERS: &[&str] = &["아님", "아닌", "아니", "해제", "not"];

/// A required condition with its matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement<'a> {
    /// Parking must be available.
    Parking,
    /// Pets must be welcome.
    PetFriendly,
    /// The cafe must be adults-only.
    NoKids,
    /// Any other condition, matched as free text.
    Other(&'a str),
}

impl<'a> Requirement<'a> {
    /// Classify a canonical requirement token.
    ///
    /// # Examples
    /// ```
    /// use sweetspot_core::filter::Requirement;
    ///
    /// assert_eq!(Requirement::classify("주차 가능"), Requirement::Parking);
    /// assert_eq!(Requirement::classify("반려동물 동반"), Requirement::PetFriendly);
    /// assert_eq!(Requirement::classify("노키즈존"), Requirement::NoKids);
    /// assert_eq!(Requirement::classify("carpet"), Requirement::Other("carpet"));
    /// ```
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        if mentions_any(token, NO_KIDS_MARKERS) {
            Self::NoKids
        } else if mentions_any(token, PARKING_MARKERS) {
            Self::Parking
        } else if mentions_any(token, PET_MARKERS) {
            Self::PetFriendly
        } else {
            Self::Other(token)
        }
    }

    /// Report whether `cafe` satisfies the requirement.
    ///
    /// Pet and no-kids conditions need a clause that mentions them without
    /// negating them, so "반려동물 동반 불가" does not count as pet-friendly.
    #[must_use]
    pub fn is_met_by(self, cafe: &CafeEntity) -> bool {
        match self {
            Self::Parking => parking_available(cafe.parking()),
            Self::PetFriendly => affirmed(cafe, PET_MARKERS, PET_NEGATIVE_MARKERS),
            Self::NoKids => affirmed(cafe, NO_KIDS_MARKERS, NO_KIDS_NEGATIVE_MARKERS),
            Self::Other(token) => condition_haystack(cafe).contains(token),
        }
    }
}

fn ascii_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect()
}

fn mentions(text: &str, marker: &str) -> bool {
    if !marker.is_ascii() {
        return text.contains(marker);
    }
    let wanted = ascii_words(marker);
    if wanted.is_empty() {
        return false;
    }
    ascii_words(text)
        .windows(wanted.len())
        .any(|window| window == wanted.as_slice())
}

fn mentions_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| mentions(text, marker))
}

fn affirmed(cafe: &CafeEntity, markers: &[&str], negations: &[&str]) -> bool {
    condition_clauses(cafe)
        .iter()
        .any(|clause| mentions_any(clause, markers) && !mentions_any(clause, negations))
}

fn parking_available(parking: &str) -> bool {
    let descriptor = parking.trim().to_lowercase();
    !descriptor.is_empty() && !mentions_any(&descriptor, PARKING_NEGATIVE_MARKERS)
}

/// Lower-cased menu-related text: menu, signature dessert and drink, taste,
/// summary, name and address.
fn menu_haystack(cafe: &CafeEntity) -> String {
    let taste = cafe.taste().join(" ");
    [
        cafe.menu(),
        cafe.main_dessert(),
        cafe.main_coffee(),
        cafe.taste_text(),
        taste.as_str(),
        cafe.summary(),
        cafe.name(),
        cafe.address(),
    ]
    .join(HAYSTACK_SEPARATOR)
    .to_lowercase()
}

/// Lower-cased free text used for required conditions: parking, companion,
/// atmosphere, taste and purpose tags, menu and summary.
fn condition_haystack(cafe: &CafeEntity) -> String {
    let companion = cafe.companion().join(" ");
    let atmosphere = cafe.atmosphere().join(" ");
    let taste = cafe.taste().join(" ");
    let purpose = cafe.purpose().join(" ");
    [
        cafe.parking(),
        companion.as_str(),
        atmosphere.as_str(),
        taste.as_str(),
        purpose.as_str(),
        cafe.menu(),
        cafe.summary(),
    ]
    .join(HAYSTACK_SEPARATOR)
    .to_lowercase()
}

/// Lower-cased condition text split into clauses: each companion,
/// atmosphere, taste and purpose tag on its own, then the parking, menu and
/// summary text cut at punctuation.
fn condition_clauses(cafe: &CafeEntity) -> Vec<String> {
    let tags = cafe
        .companion()
        .iter()
        .chain(cafe.atmosphere().iter())
        .chain(cafe.taste().iter())
        .chain(cafe.purpose().iter())
        .map(str::to_lowercase);
    let free_text = [cafe.parking(), cafe.menu(), cafe.summary()]
        .into_iter()
        .flat_map(|text| text.split(CLAUSE_SEPARATORS))
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(str::to_lowercase);
    tags.chain(free_text).collect()
}

/// Report whether the cafe lies in one of the requested regions.
///
/// A token matches when it equals the cafe's region code (ignoring case),
/// when it is a place name whose alias code equals the region code, or when
/// it is a place name found in the cafe's address.
///
/// # Examples
/// ```
/// use sweetspot_core::{CafeEntity, TagSet, filter::region_matches};
///
/// let cafe = CafeEntity::new("1", "a")
///     .with_region("etc")
///     .with_address("광주광역시 동구 충장로 1");
/// assert!(region_matches(&cafe, &TagSet::parse("충장로")));
/// assert!(!region_matches(&cafe, &TagSet::parse("naju")));
/// assert!(region_matches(&cafe, &TagSet::new()));
/// ```
#[must_use]
pub fn region_matches(cafe: &CafeEntity, wanted: &TagSet) -> bool {
    if wanted.is_empty() {
        return true;
    }
    let region = cafe.region().trim().to_lowercase();
    let address = cafe.address().to_lowercase();
    wanted.iter().any(|token| {
        token == region
            || lookup_region(token).is_some_and(|alias| alias.code == region)
            || (!is_region_code(token) && address.contains(token))
    })
}

/// Report whether every requested keyword appears in the cafe's menu text.
///
/// # Examples
/// ```
/// use sweetspot_core::{CafeEntity, TagSet, filter::menu_matches};
///
/// let cafe = CafeEntity::new("1", "a").with_menu("소금빵, 아메리카노");
/// assert!(menu_matches(&cafe, &TagSet::parse("소금빵")));
/// assert!(!menu_matches(&cafe, &TagSet::parse("소금빵, 케이크")));
/// ```
#[must_use]
pub fn menu_matches(cafe: &CafeEntity, keywords: &TagSet) -> bool {
    if keywords.is_empty() {
        return true;
    }
    let haystack = menu_haystack(cafe);
    keywords.iter().all(|keyword| haystack.contains(keyword))
}

/// Report whether every requested condition is met.
#[must_use]
pub fn requirements_met(cafe: &CafeEntity, required: &TagSet) -> bool {
    required
        .iter()
        .all(|token| Requirement::classify(token).is_met_by(cafe))
}

/// Apply all hard constraints of `query` to one cafe.
#[must_use]
pub fn passes_hard_constraints(cafe: &CafeEntity, query: &PreferenceQuery) -> bool {
    region_matches(cafe, query.tokens(Category::Region))
        && menu_matches(cafe, query.tokens(Category::Menu))
        && requirements_met(cafe, query.tokens(Category::Required))
}

/// Report whether the cafe's tags cover the requested atmosphere, taste and
/// purpose tags.
#[must_use]
pub fn tag_sets_match(cafe: &CafeEntity, query: &PreferenceQuery) -> bool {
    cafe.atmosphere()
        .is_superset(query.tokens(Category::Atmosphere))
        && cafe.taste().is_superset(query.tokens(Category::Taste))
        && cafe.purpose().is_superset(query.tokens(Category::Purpose))
}

/// Keep the cafes that satisfy every hard constraint, in catalog order.
#[must_use]
pub fn apply_hard_constraints<'a>(
    catalog: &'a [CafeEntity],
    query: &PreferenceQuery,
) -> Vec<&'a CafeEntity> {
    catalog
        .iter()
        .filter(|cafe| passes_hard_constraints(cafe, query))
        .collect()
}

/// Result of the tag-preference pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TagFilterOutcome<'a> {
    /// Cafes that go on to scoring.
    pub candidates: Vec<&'a CafeEntity>,
    /// How many cafes matched every tag preference.
    pub matched: usize,
    /// Whether the pass was skipped because nothing matched.
    pub relaxed: bool,
}

/// Narrow hard-filtered candidates by tag preferences, keeping the input
/// pool when nothing would survive.
#[must_use]
pub fn apply_tag_preferences<'a>(
    candidates: Vec<&'a CafeEntity>,
    query: &PreferenceQuery,
) -> TagFilterOutcome<'a> {
    let narrowed: Vec<&'a CafeEntity> = candidates
        .iter()
        .copied()
        .filter(|cafe| tag_sets_match(cafe, query))
        .collect();
    let matched = narrowed.len();
    if narrowed.is_empty() && !candidates.is_empty() {
        return TagFilterOutcome {
            candidates,
            matched,
            relaxed: true,
        };
    }
    TagFilterOutcome {
        candidates: narrowed,
        matched,
        relaxed: false,
    }
}
