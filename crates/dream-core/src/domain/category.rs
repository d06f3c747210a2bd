//! Category Types
//!
//! The closed set of dream categories plus the view-only "all" selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DreamError;

/// What kind of dream a record is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Career,
    #[default]
    Personal,
    Travel,
    Health,
    Creative,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Career,
        Category::Personal,
        Category::Travel,
        Category::Health,
        Category::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Career => "career",
            Category::Personal => "personal",
            Category::Travel => "travel",
            Category::Health => "health",
            Category::Creative => "creative",
        }
    }

    /// Capitalized display name
    pub fn label(&self) -> &'static str {
        match self {
            Category::Career => "Career",
            Category::Personal => "Personal",
            Category::Travel => "Travel",
            Category::Health => "Health",
            Category::Creative => "Creative",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Career => "💼",
            Category::Personal => "💝",
            Category::Travel => "✈️",
            Category::Health => "🌱",
            Category::Creative => "🎨",
        }
    }

    /// Gradient classes used for the badge and the progress bar
    pub fn accent(&self) -> &'static str {
        match self {
            Category::Career => "from-blue-500 to-cyan-400",
            Category::Personal => "from-pink-500 to-rose-400",
            Category::Travel => "from-green-500 to-emerald-400",
            Category::Health => "from-orange-500 to-yellow-400",
            Category::Creative => "from-purple-500 to-violet-400",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| DreamError::UnknownCategory(s.to_string()))
    }
}

/// Which records the grid shows. `All` is never stored on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter selectors in display order
    pub const OPTIONS: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Career),
        CategoryFilter::Only(Category::Personal),
        CategoryFilter::Only(Category::Travel),
        CategoryFilter::Only(Category::Health),
        CategoryFilter::Only(Category::Creative),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "🌟 All".to_string(),
            CategoryFilter::Only(c) => format!("{} {}", c.emoji(), c.label()),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(c: Category) -> Self {
        CategoryFilter::Only(c)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = DreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| DreamError::UnknownFilter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("travel".parse::<Category>(), Ok(Category::Travel));
        assert_eq!(" Health ".parse::<Category>(), Ok(Category::Health));
        assert_eq!(
            "all".parse::<Category>(),
            Err(DreamError::UnknownCategory("all".to_string()))
        );
    }

    #[test]
    fn test_category_default_is_personal() {
        assert_eq!(Category::default(), Category::Personal);
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::Creative).unwrap();
        assert_eq!(json, "\"creative\"");
        let back: Category = serde_json::from_str("\"career\"").unwrap();
        assert_eq!(back, Category::Career);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "career".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Career))
        );
        assert!(matches!(
            "everything".parse::<CategoryFilter>(),
            Err(DreamError::UnknownFilter(_))
        ));
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(CategoryFilter::All.label(), "🌟 All");
        assert_eq!(CategoryFilter::Only(Category::Travel).label(), "✈️ Travel");
    }

    #[test]
    fn test_filter_options_cover_every_category() {
        assert_eq!(CategoryFilter::OPTIONS[0], CategoryFilter::All);
        for c in Category::ALL {
            assert!(CategoryFilter::OPTIONS.contains(&CategoryFilter::Only(c)));
        }
    }
}
