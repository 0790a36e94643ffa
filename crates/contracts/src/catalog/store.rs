use super::facets::FacetIndex;
use crate::domain::product::aggregate::Product;

/// Single source of truth for the product collection, shared between the
/// listing view and the creation form's selector inputs. Mutation goes
/// through exactly two entry points: a bulk replace at hydration time and an
/// append on successful creation. Facets are recomputed after each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    items: Vec<Product>,
    facets: FacetIndex,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn facets(&self) -> &FacetIndex {
        &self.facets
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the whole collection (initial load)
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.items = products;
        self.facets = FacetIndex::rebuild(&self.items);
    }

    /// Append one committed product (successful creation)
    pub fn add_product(&mut self, product: Product) {
        self.items.push(product);
        self.facets = FacetIndex::rebuild(&self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::aggregate::{Inventory, ProductStatus, Rating};

    fn product(id: i64, category: &str) -> Product {
        Product {
            id,
            title: format!("item {id}"),
            description: String::new(),
            price: 1.0,
            category: category.to_string(),
            product_type: "Accessory".to_string(),
            vendor: "Acme".to_string(),
            inventory: Inventory::Count(1),
            status: ProductStatus::Active,
            image: vec!["u".to_string()],
            rating: Rating { rate: 0.0, count: 0 },
            availability: None,
        }
    }

    #[test]
    fn set_products_rebuilds_facets() {
        let mut store = CatalogStore::new();
        store.set_products(vec![product(1, "Apparel"), product(2, "Drinkware")]);
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.facets().categories, vec!["Apparel", "Drinkware"]);
    }

    #[test]
    fn added_product_is_reachable_through_the_new_facet_value() {
        use crate::catalog::filter::{compute_visible, FilterState};

        let mut store = CatalogStore::new();
        store.set_products(vec![product(1, "Apparel")]);

        let mut outerwear = product(2, "Apparel");
        outerwear.product_type = "Outerwear".to_string();
        let types_before = store.facets().types.len();
        store.add_product(outerwear);
        assert_eq!(store.facets().types.len(), types_before + 1);

        let filter = FilterState {
            product_type: Some(vec!["Outerwear".to_string()]),
            ..Default::default()
        };
        let visible = compute_visible(store.items(), &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn add_product_grows_facets_by_new_values_only() {
        let mut store = CatalogStore::new();
        store.set_products(vec![product(1, "Apparel")]);
        assert_eq!(store.facets().categories.len(), 1);

        store.add_product(product(2, "Outerwear"));
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.facets().categories, vec!["Apparel", "Outerwear"]);

        store.add_product(product(3, "Apparel"));
        assert_eq!(store.facets().categories.len(), 2);
    }
}
