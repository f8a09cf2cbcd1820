//! Region codes and their Korean place-name aliases.
//!
//! Catalog rows carry a romanised region code (`gwangju`, `naju`, …) while
//! users and the extraction layer usually name places in Korean. The alias
//! table lets either form match the other.

use crate::preference::{PreferenceValue, normalize_preference_list};
use crate::tags::{TagSet, normalize_tag_token};

/// A region code with the Korean names that refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionAlias {
    /// Canonical lower-case region code.
    pub code: &'static str,
    /// Korean place names, already in canonical token form.
    pub names: &'static [&'static str],
}

/// Known regions.
pub static REGION_ALIASES: &[RegionAlias] = &[
    RegionAlias {
        code: "gwangju",
        names: &["광주", "광주광역시"],
    },
    RegionAlias {
        code: "naju",
        names: &["나주", "나주시"],
    },
    RegionAlias {
        code: "damyang",
        names: &["담양", "담양군"],
    },
    RegionAlias {
        code: "hwasun",
        names: &["화순", "화순군"],
    },
    RegionAlias {
        code: "jangseong",
        names: &["장성", "장성군"],
    },
    RegionAlias {
        code: "hampyeong",
        names: &["함평", "함평군"],
    },
    RegionAlias {
        code: "yeonggwang",
        names: &["영광", "영광군"],
    },
    RegionAlias {
        code: "muan",
        names: &["무안", "무안군"],
    },
    RegionAlias {
        code: "mokpo",
        names: &["목포", "목포시"],
    },
    RegionAlias {
        code: "suncheon",
        names: &["순천", "순천시"],
    },
    RegionAlias {
        code: "yeosu",
        names: &["여수", "여수시"],
    },
    RegionAlias {
        code: "gwangyang",
        names: &["광양", "광양시"],
    },
];

/// Look up the alias entry for a code or a place name.
///
/// The token is normalised first, so `"Gwangju "` and `"광주"` both resolve.
///
/// # Examples
/// ```
/// use sweetspot_core::region::lookup_region;
///
/// assert_eq!(lookup_region("광주광역시").map(|alias| alias.code), Some("gwangju"));
/// assert_eq!(lookup_region("NAJU").map(|alias| alias.code), Some("naju"));
/// assert!(lookup_region("부산").is_none());
/// ```
#[must_use]
pub fn lookup_region(token: &str) -> Option<&'static RegionAlias> {
    let canonical = normalize_tag_token(token);
    REGION_ALIASES
        .iter()
        .find(|alias| alias.code == canonical || alias.names.contains(&canonical.as_str()))
}

/// Report whether `token` is a known region code rather than a place name.
#[must_use]
pub fn is_region_code(token: &str) -> bool {
    REGION_ALIASES.iter().any(|alias| alias.code == token)
}

/// Normalise region preferences, adding code and place-name aliases.
///
/// The result is a superset of [`normalize_preference_list`]: each known
/// place name also contributes its code, and each known code contributes
/// its place names.
///
/// # Examples
/// ```
/// use sweetspot_core::{PreferenceValue, normalize_region_preferences};
///
/// let tokens = normalize_region_preferences(&PreferenceValue::from("나주"));
/// assert!(tokens.contains("나주"));
/// assert!(tokens.contains("naju"));
/// assert!(tokens.contains("나주시"));
/// ```
#[must_use]
pub fn normalize_region_preferences(value: &PreferenceValue) -> TagSet {
    let base = normalize_preference_list(value);
    let mut expanded = base.clone();
    for token in base.iter() {
        if let Some(alias) = lookup_region(token) {
            expanded.insert_canonical(alias.code);
            for name in alias.names {
                expanded.insert_canonical(name);
            }
        }
    }
    expanded
}
