use contracts::domain::product::aggregate::{
    Inventory, Product, ProductStatus, Rating, INVENTORY_NOT_TRACKED,
};
use once_cell::sync::Lazy;

/// Demo catalog served to the admin SPA. Stands in for the remote product
/// API the page hydrates from.
static DEMO_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(build_demo_products);

pub fn demo_products() -> Vec<Product> {
    DEMO_PRODUCTS.clone()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i64,
    title: &str,
    description: &str,
    price: f64,
    category: &str,
    product_type: &str,
    vendor: &str,
    inventory: Inventory,
    status: ProductStatus,
    image: &str,
    rating: Rating,
    availability: Option<&str>,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        product_type: product_type.to_string(),
        vendor: vendor.to_string(),
        inventory,
        status,
        image: vec![image.to_string()],
        rating,
        availability: availability.map(str::to_string),
    }
}

fn build_demo_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Fjallraven Foldsack No. 1 Backpack",
            "Fits 15 inch laptops, perfect for everyday carry and forest walks.",
            109.95,
            "Men's clothing",
            "Accessory",
            "Company 123",
            Inventory::Count(120),
            ProductStatus::Active,
            "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            Rating { rate: 3.9, count: 120 },
            Some("Online Store"),
        ),
        product(
            2,
            "Mens Casual Premium Slim Fit T-Shirt",
            "Slim-fitting style, contrast raglan long sleeve.",
            22.3,
            "Men's clothing",
            "T-Shirt",
            "Boring Rock",
            Inventory::Count(259),
            ProductStatus::Active,
            "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
            Rating { rate: 4.1, count: 259 },
            Some("Online Store"),
        ),
        product(
            3,
            "Mens Cotton Jacket",
            "Great outerwear jacket for spring and autumn.",
            55.99,
            "Men's clothing",
            "T-Shirt",
            "Rustic LTD",
            Inventory::Count(-4),
            ProductStatus::Draft,
            "https://fakestoreapi.com/img/71li-ujtlUL._AC_UX679_.jpg",
            Rating { rate: 4.7, count: 500 },
            Some("Point of Sale"),
        ),
        product(
            4,
            "Womens Short Sleeve Moisture Tee",
            "Lightweight and breathable fabric with moisture wicking.",
            7.95,
            "Women's clothing",
            "T-Shirt",
            "partners-demo",
            Inventory::Label(INVENTORY_NOT_TRACKED.to_string()),
            ProductStatus::Active,
            "https://fakestoreapi.com/img/51eg55uWmdL._AC_UX679_.jpg",
            Rating { rate: 4.5, count: 146 },
            None,
        ),
        product(
            5,
            "John Hardy Legends Naga Bracelet",
            "Inspired by the mythical water dragon that protects the ocean pearl.",
            695.0,
            "Jewelery",
            "Accessory",
            "Rustic LTD",
            Inventory::Count(12),
            ProductStatus::Archived,
            "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
            Rating { rate: 4.6, count: 400 },
            Some("Buy Button"),
        ),
        product(
            6,
            "Solid Gold Petite Micropave",
            "Satisfaction guaranteed. Designed and sold by Hafeez Center.",
            168.0,
            "Jewelery",
            "Gift Card",
            "Company 123",
            Inventory::Count(51),
            ProductStatus::Draft,
            "https://fakestoreapi.com/img/61sbMiUnoGL._AC_UL640_QL65_ML3_.jpg",
            Rating { rate: 3.9, count: 70 },
            None,
        ),
        product(
            7,
            "WD 2TB Elements Portable External Hard Drive",
            "USB 3.0 compatibility, fast data transfers, high capacity.",
            64.0,
            "Electronics",
            "Accessory",
            "Boring Rock",
            Inventory::Count(203),
            ProductStatus::Active,
            "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg",
            Rating { rate: 3.3, count: 203 },
            Some("Online Store"),
        ),
        product(
            8,
            "Acer SB220Q 21.5 inch Full HD IPS Monitor",
            "Radeon free sync technology, ultra-thin frame.",
            599.0,
            "Electronics",
            "Gift Card",
            "partners-demo",
            Inventory::Label(INVENTORY_NOT_TRACKED.to_string()),
            ProductStatus::Archived,
            "https://fakestoreapi.com/img/81QpkIctqPL._AC_SX679_.jpg",
            Rating { rate: 2.9, count: 250 },
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_seeded_product_satisfies_collection_invariants() {
        for product in demo_products() {
            assert!(product.validate().is_ok(), "invalid seed: {}", product.title);
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let products = demo_products();
        let ids: HashSet<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn seed_covers_all_three_statuses() {
        let products = demo_products();
        for status in ProductStatus::ALL {
            assert!(products.iter().any(|p| p.status == status));
        }
    }
}
