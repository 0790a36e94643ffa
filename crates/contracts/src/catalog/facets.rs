use crate::domain::product::aggregate::Product;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Distinct facet values derived from the product collection. Recomputed by a
/// full scan on every store mutation, never patched incrementally, so it can
/// not drift from the items it summarizes. First-seen order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetIndex {
    pub categories: Vec<String>,
    pub vendors: Vec<String>,
    pub inventory: Vec<String>,
    pub types: Vec<String>,
}

impl FacetIndex {
    pub fn rebuild(products: &[Product]) -> Self {
        Self {
            categories: distinct(products.iter().map(|p| p.category.clone())),
            vendors: distinct(products.iter().map(|p| p.vendor.clone())),
            inventory: distinct(products.iter().map(|p| p.inventory.label())),
            types: distinct(products.iter().map(|p| p.product_type.clone())),
        }
    }
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(value.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::aggregate::{Inventory, ProductStatus, Rating};

    fn product(category: &str, vendor: &str, inventory: Inventory, product_type: &str) -> Product {
        Product {
            id: 1,
            title: "item".to_string(),
            description: String::new(),
            price: 1.0,
            category: category.to_string(),
            product_type: product_type.to_string(),
            vendor: vendor.to_string(),
            inventory,
            status: ProductStatus::Active,
            image: vec!["u".to_string()],
            rating: Rating { rate: 0.0, count: 0 },
            availability: None,
        }
    }

    #[test]
    fn rebuild_deduplicates_in_first_seen_order() {
        let products = vec![
            product("Apparel", "Acme", Inventory::Count(20), "T-Shirt"),
            product("Drinkware", "Acme", Inventory::Count(20), "Accessory"),
            product("Apparel", "Boring Rock", Inventory::Label("Inventory not tracked".into()), "T-Shirt"),
        ];
        let facets = FacetIndex::rebuild(&products);
        assert_eq!(facets.categories, vec!["Apparel", "Drinkware"]);
        assert_eq!(facets.vendors, vec!["Acme", "Boring Rock"]);
        assert_eq!(facets.inventory, vec!["20", "Inventory not tracked"]);
        assert_eq!(facets.types, vec!["T-Shirt", "Accessory"]);
    }

    #[test]
    fn rebuild_of_empty_collection_is_empty() {
        let facets = FacetIndex::rebuild(&[]);
        assert_eq!(facets, FacetIndex::default());
    }
}
