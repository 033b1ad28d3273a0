//! Product category enumeration.

use serde::{Deserialize, Serialize};

/// Product category.
///
/// The wire values are the Spanish slugs used by the stored catalog
/// (`lacteos`, `panaderia`, ...), so previously persisted data
/// deserializes unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "lacteos")]
    Dairy,
    #[serde(rename = "panaderia")]
    Bakery,
    #[serde(rename = "frutas")]
    Produce,
    #[serde(rename = "bebidas")]
    Beverages,
    #[serde(rename = "limpieza")]
    Cleaning,
    #[serde(rename = "abarrotes")]
    Groceries,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Dairy,
        Self::Bakery,
        Self::Produce,
        Self::Beverages,
        Self::Cleaning,
        Self::Groceries,
    ];

    /// The stored slug for this category.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Dairy => "lacteos",
            Self::Bakery => "panaderia",
            Self::Produce => "frutas",
            Self::Beverages => "bebidas",
            Self::Cleaning => "limpieza",
            Self::Groceries => "abarrotes",
        }
    }

    /// Human-readable category name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Dairy => "Lácteos",
            Self::Bakery => "Panadería",
            Self::Produce => "Frutas y Verduras",
            Self::Beverages => "Bebidas",
            Self::Cleaning => "Limpieza",
            Self::Groceries => "Abarrotes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lacteos" | "dairy" => Ok(Self::Dairy),
            "panaderia" | "bakery" => Ok(Self::Bakery),
            "frutas" | "produce" => Ok(Self::Produce),
            "bebidas" | "beverages" => Ok(Self::Beverages),
            "limpieza" | "cleaning" => Ok(Self::Cleaning),
            "abarrotes" | "groceries" => Ok(Self::Groceries),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_stored_slugs() {
        let json = serde_json::to_string(&Category::Dairy).expect("serialize");
        assert_eq!(json, "\"lacteos\"");
        let back: Category = serde_json::from_str("\"abarrotes\"").expect("deserialize");
        assert_eq!(back, Category::Groceries);
    }

    #[test]
    fn test_parse_accepts_slug_and_english() {
        assert_eq!("panaderia".parse::<Category>(), Ok(Category::Bakery));
        assert_eq!("bakery".parse::<Category>(), Ok(Category::Bakery));
        assert!("carniceria".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::Produce.display_name(), "Frutas y Verduras");
        assert_eq!(Category::Produce.slug(), "frutas");
    }
}
