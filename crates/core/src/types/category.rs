//! Product category enumeration.

use serde::{Deserialize, Serialize};

/// The fixed set of catalog categories.
///
/// Serialized in kebab-case (`living-room`, …), the form used in catalog
/// data and in the `?category=` query filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    LivingRoom,
    Bedroom,
    DiningRoom,
    Outdoor,
}

impl Category {
    /// The serialized identifier for this category.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::LivingRoom => "living-room",
            Self::Bedroom => "bedroom",
            Self::DiningRoom => "dining-room",
            Self::Outdoor => "outdoor",
        }
    }

    /// Turkish display name, as shown in the category filter.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::LivingRoom => "Oturma Odası",
            Self::Bedroom => "Yatak Odası",
            Self::DiningRoom => "Yemek Odası",
            Self::Outdoor => "Bahçe Mobilyası",
        }
    }

    /// All categories, in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::LivingRoom, Self::Bedroom, Self::DiningRoom, Self::Outdoor]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_kebab_case() {
        let category: Category = serde_json::from_str("\"living-room\"").expect("deserialize");
        assert_eq!(category, Category::LivingRoom);
        assert_eq!(
            serde_json::to_string(&Category::DiningRoom).expect("serialize"),
            "\"dining-room\""
        );
    }

    #[test]
    fn test_category_unknown_rejected() {
        let result: Result<Category, _> = serde_json::from_str("\"garage\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_category_slug_matches_serde() {
        for category in Category::all() {
            let json = serde_json::to_string(&category).expect("serialize");
            assert_eq!(json, format!("\"{}\"", category.slug()));
        }
    }
}
