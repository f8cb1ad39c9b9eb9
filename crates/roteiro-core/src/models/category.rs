//! Activity type of a trip leg or catalog place.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of activity types.
///
/// The labels written into itinerary files are the Portuguese ones used by
/// the trip form (`Cultural`, `Desportiva`, `Gastronómica`, `Outro`). Parsing
/// also accepts the English names and the masculine labels used by the
/// attractions catalog, ignoring case and the acute accent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Cultural,
    Sporting,
    Gastronomic,
    Other,
}

impl Category {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cultural => "cultural",
            Category::Sporting => "sporting",
            Category::Gastronomic => "gastronomic",
            Category::Other => "other",
        }
    }

    /// Label used in rendered itinerary blocks.
    ///
    /// ```rust
    /// use roteiro_core::models::Category;
    ///
    /// assert_eq!(Category::Gastronomic.label(), "Gastronómica");
    /// assert_eq!(Category::Other.label(), "Outro");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cultural => "Cultural",
            Category::Sporting => "Desportiva",
            Category::Gastronomic => "Gastronómica",
            Category::Other => "Outro",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('ó', "o");
        match normalized.as_str() {
            "cultural" => Ok(Category::Cultural),
            "sporting" | "desportiva" | "desportivo" => Ok(Category::Sporting),
            "gastronomic" | "gastronomica" | "gastronomico" => Ok(Category::Gastronomic),
            "other" | "outro" | "outra" => Ok(Category::Other),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
