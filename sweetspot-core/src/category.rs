//! Preference categories understood by the engine.
//!
//! # Examples
//! ```
//! use sweetspot_core::Category;
//!
//! assert_eq!(Category::Atmosphere.as_str(), "atmosphere");
//! assert_eq!("MENU".parse::<Category>(), Ok(Category::Menu));
//! ```

/// One preference category of a [`PreferenceQuery`](crate::PreferenceQuery).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Region codes and Korean place names.
    Region,
    /// Mood of the space.
    Atmosphere,
    /// Flavour focus.
    Taste,
    /// Reason for the visit.
    Purpose,
    /// Menu keywords that must all appear.
    Menu,
    /// Hard requirements such as parking.
    Required,
}

impl Category {
    /// Every category in a fixed order.
    pub const ALL: [Self; 6] = [
        Self::Region,
        Self::Atmosphere,
        Self::Taste,
        Self::Purpose,
        Self::Menu,
        Self::Required,
    ];

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Atmosphere => "atmosphere",
            Self::Taste => "taste",
            Self::Purpose => "purpose",
            Self::Menu => "menu",
            Self::Required => "required",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "region" => Ok(Self::Region),
            "atmosphere" => Ok(Self::Atmosphere),
            "taste" => Ok(Self::Taste),
            "purpose" => Ok(Self::Purpose),
            "menu" => Ok(Self::Menu),
            "required" => Ok(Self::Required),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}
