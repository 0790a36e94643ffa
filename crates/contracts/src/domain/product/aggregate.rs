use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status of a catalog product
///
/// Serialized lowercase; the capitalized spellings found in older exports are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    #[serde(alias = "Active")]
    Active,
    #[serde(alias = "Draft")]
    Draft,
    #[serde(alias = "Archived")]
    Archived,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Active,
        ProductStatus::Draft,
        ProductStatus::Archived,
    ];

    /// Badge label shown in the listing table
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Draft => "Draft",
            ProductStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Inventory
// ============================================================================

/// Sentinel label for products whose stock is not counted
pub const INVENTORY_NOT_TRACKED: &str = "Inventory not tracked";

/// Inventory is either a counted quantity or a free label
///
/// The wire format carries a bare number or a bare string in the same field,
/// hence the untagged representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Inventory {
    Count(i64),
    Label(String),
}

impl Inventory {
    /// Parse a selector value: numeric input becomes a counted quantity,
    /// anything else stays a label.
    pub fn from_input(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(count) => Inventory::Count(count),
            Err(_) => Inventory::Label(value.trim().to_string()),
        }
    }

    /// String form used for the distinct-value facet index
    pub fn label(&self) -> String {
        match self {
            Inventory::Count(count) => count.to_string(),
            Inventory::Label(label) => label.clone(),
        }
    }

    pub fn is_not_tracked(&self) -> bool {
        matches!(self, Inventory::Label(label) if label == INVENTORY_NOT_TRACKED)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Inventory::Count(count) if *count < 0)
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ============================================================================
// Rating
// ============================================================================

/// Operator-entered rating; independent of any purchase activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

// ============================================================================
// Product
// ============================================================================

/// A catalog product
///
/// Identity is an epoch-millisecond id assigned at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,

    pub title: String,

    /// Sanitized description; markup is stripped before storage
    pub description: String,

    pub price: f64,

    pub category: String,

    /// Product type label (open set)
    #[serde(rename = "type")]
    pub product_type: String,

    pub vendor: String,

    pub inventory: Inventory,

    pub status: ProductStatus,

    /// Resolved image URLs in upload order; the first one is primary
    pub image: Vec<String>,

    pub rating: Rating,

    /// Optional sales-channel facet; absent on the core shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

impl Product {
    /// Collection invariants: non-empty title, positive price, at least one
    /// image URL.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Product title must not be empty".into());
        }
        if !(self.price > 0.0) {
            return Err(format!("Product price must be positive, got {}", self.price));
        }
        if self.image.is_empty() {
            return Err("Product must carry at least one image URL".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: 1717171717000,
            title: "Red Shirt".to_string(),
            description: "A classic red shirt".to_string(),
            price: 19.99,
            category: "Apparel".to_string(),
            product_type: "T-Shirt".to_string(),
            vendor: "Company 123".to_string(),
            inventory: Inventory::Count(20),
            status: ProductStatus::Active,
            image: vec!["http://localhost:3000/uploads/products/1_0_shirt.png".to_string()],
            rating: Rating { rate: 4.5, count: 12 },
            availability: None,
        }
    }

    #[test]
    fn status_accepts_both_spellings() {
        let lower: ProductStatus = serde_json::from_str("\"active\"").unwrap();
        let upper: ProductStatus = serde_json::from_str("\"Active\"").unwrap();
        assert_eq!(lower, ProductStatus::Active);
        assert_eq!(upper, ProductStatus::Active);
        assert_eq!(serde_json::to_string(&ProductStatus::Draft).unwrap(), "\"draft\"");
    }

    #[test]
    fn inventory_round_trips_untagged() {
        let count: Inventory = serde_json::from_str("20").unwrap();
        assert_eq!(count, Inventory::Count(20));
        let label: Inventory = serde_json::from_str("\"Inventory not tracked\"").unwrap();
        assert!(label.is_not_tracked());
        assert_eq!(serde_json::to_string(&Inventory::Count(5)).unwrap(), "5");
    }

    #[test]
    fn inventory_from_input_parses_numbers() {
        assert_eq!(Inventory::from_input("20"), Inventory::Count(20));
        assert_eq!(Inventory::from_input(" -3 "), Inventory::Count(-3));
        assert_eq!(
            Inventory::from_input(INVENTORY_NOT_TRACKED),
            Inventory::Label(INVENTORY_NOT_TRACKED.to_string())
        );
    }

    #[test]
    fn product_wire_shape_uses_type_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "T-Shirt");
        assert!(json.get("availability").is_none());
        assert_eq!(json["rating"]["count"], 12);
    }

    #[test]
    fn validate_rejects_missing_image() {
        let mut product = sample();
        product.image.clear();
        assert!(product.validate().is_err());
        assert!(sample().validate().is_ok());
    }
}
