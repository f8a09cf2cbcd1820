//! Canonical tag vocabulary and the synonym rewrites that feed it.
//!
//! Tags arrive from crawled reviews, hand-curated spreadsheets and an
//! upstream language model, so the same idea shows up under many spellings.
//! Each [`SynonymRule`] folds a family of spellings into one canonical token.
//! Rules are matched against the whitespace-free, lower-cased form of a token
//! and the first matching rule wins.
//!
//! # Examples
//! ```
//! use sweetspot_core::{normalize_tag_token, vocab};
//!
//! assert_eq!(normalize_tag_token("사진 맛집"), vocab::PHOTO);
//! assert_eq!(normalize_tag_token("View Restaurant"), vocab::VIEW);
//! assert_eq!(normalize_tag_token("study / work"), vocab::STUDY);
//! ```

/// Photogenic spot.
pub const PHOTO: &str = "사진";
/// Good view.
pub const VIEW: &str = "뷰";
/// Panoramic outlook; treated like [`VIEW`] when scoring.
pub const VISTA: &str = "전망";
/// Coffee-focused taste.
pub const COFFEE: &str = "커피";
/// Dessert-focused taste.
pub const DESSERT: &str = "디저트";
/// Bakery-focused taste.
pub const BREAD: &str = "빵";
/// Date purpose.
pub const DATE: &str = "데이트";
/// Study purpose.
pub const STUDY: &str = "공부";
/// Laptop work purpose.
pub const WORK: &str = "작업";
/// Quiet atmosphere.
pub const QUIET: &str = "조용한";

/// A family of spellings that collapse to a single canonical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynonymRule {
    /// Token emitted when the rule matches.
    pub canonical: &'static str,
    /// Whitespace-free, lower-case spellings rewritten to `canonical`.
    pub variants: &'static [&'static str],
}

impl SynonymRule {
    /// Report whether `compact` (whitespace removed, lower-cased) belongs to
    /// this rule. The canonical token always matches its own rule.
    #[must_use]
    pub fn matches(&self, compact: &str) -> bool {
        self.canonical == compact || self.variants.contains(&compact)
    }
}

/// Ordered synonym table applied by [`normalize_tag_token`](crate::normalize_tag_token).
pub static SYNONYMS: &[SynonymRule] = &[
    SynonymRule {
        canonical: PHOTO,
        variants: &[
            "사진맛집",
            "사진찍기좋은",
            "사진찍기좋은곳",
            "포토존",
            "포토스팟",
            "포토",
            "인생샷",
            "photo",
            "photospot",
            "photozone",
            "photogenic",
            "photogenicspot",
        ],
    },
    SynonymRule {
        canonical: VIEW,
        variants: &[
            "뷰맛집",
            "뷰좋은",
            "뷰가좋은",
            "뷰좋은곳",
            "view",
            "viewrestaurant",
            "goodview",
        ],
    },
    SynonymRule {
        canonical: VISTA,
        variants: &["전망좋은", "전망이좋은", "vista"],
    },
    SynonymRule {
        canonical: STUDY,
        variants: &[
            "공부/작업",
            "공부하기좋은",
            "카공",
            "study",
            "study/work",
            "studying",
        ],
    },
    SynonymRule {
        canonical: WORK,
        variants: &["작업하기좋은", "노트북작업", "work", "working"],
    },
    SynonymRule {
        canonical: COFFEE,
        variants: &["coffee", "커피맛집", "스페셜티", "스페셜티커피", "specialtycoffee"],
    },
    SynonymRule {
        canonical: DESSERT,
        variants: &["dessert", "desserts", "디저트맛집", "sweets"],
    },
    SynonymRule {
        canonical: BREAD,
        variants: &["bread", "bakery", "베이커리", "빵맛집"],
    },
    SynonymRule {
        canonical: DATE,
        variants: &["date", "데이트코스", "데이트하기좋은"],
    },
    SynonymRule {
        canonical: QUIET,
        variants: &["조용함", "조용", "조용한곳", "quiet"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize_tag_token;

    #[test]
    fn canonical_tokens_are_fixed_points() {
        for rule in SYNONYMS {
            assert_eq!(normalize_tag_token(rule.canonical), rule.canonical);
        }
    }

    #[test]
    fn variants_are_stored_compact_and_lowercase() {
        for rule in SYNONYMS {
            for variant in rule.variants {
                assert!(!variant.chars().any(char::is_whitespace), "{variant}");
                assert_eq!(variant.to_lowercase(), *variant);
            }
        }
    }
}
