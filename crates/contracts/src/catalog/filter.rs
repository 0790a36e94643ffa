use crate::domain::product::aggregate::{Product, ProductStatus};

// ============================================================================
// Filter state
// ============================================================================

/// Status tab above the listing table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTab {
    #[default]
    All,
    Active,
    Draft,
    Archived,
}

impl StatusTab {
    pub const ALL_TABS: [StatusTab; 4] = [
        StatusTab::All,
        StatusTab::Active,
        StatusTab::Draft,
        StatusTab::Archived,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusTab::All => "All",
            StatusTab::Active => "Active",
            StatusTab::Draft => "Draft",
            StatusTab::Archived => "Archived",
        }
    }

    pub fn matches(&self, status: ProductStatus) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Active => status == ProductStatus::Active,
            StatusTab::Draft => status == ProductStatus::Draft,
            StatusTab::Archived => status == ProductStatus::Archived,
        }
    }
}

/// Transient, UI-local filter selection. No persistence; facets are cleared
/// one at a time through `clear` or wholesale through `clear_all`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub tab: StatusTab,
    pub availability: Option<Vec<String>>,
    pub product_type: Option<Vec<String>>,
    pub vendor: Option<Vec<String>>,
    pub query: Option<String>,
}

/// Facet addressed by an applied-filter chip's clear action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Availability,
    ProductType,
    Vendor,
}

impl FilterState {
    /// Reset exactly one facet to "unselected", never the others
    pub fn clear(&mut self, key: FilterKey) {
        match key {
            FilterKey::Availability => self.availability = None,
            FilterKey::ProductType => self.product_type = None,
            FilterKey::Vendor => self.vendor = None,
        }
    }

    pub fn clear_query(&mut self) {
        self.query = None;
    }

    /// Clear every facet and the query; the selected tab stays
    pub fn clear_all(&mut self) {
        self.availability = None;
        self.product_type = None;
        self.vendor = None;
        self.query = None;
    }

    pub fn active_filter_count(&self) -> usize {
        [&self.availability, &self.product_type, &self.vendor]
            .iter()
            .filter(|selection| non_empty(selection).is_some())
            .count()
    }
}

// ============================================================================
// View model
// ============================================================================

/// Summary chip for one facet with a non-empty selection; the UI maps `key`
/// back to the clear action for exactly that facet.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedFilter {
    pub key: FilterKey,
    pub label: String,
}

/// Compute the visible subset. The pipeline order is tab, availability,
/// type, vendor, query; every stage is an independent predicate, so the
/// order does not change the result set.
pub fn compute_visible(products: &[Product], filter: &FilterState) -> Vec<Product> {
    let query = filter
        .query
        .as_deref()
        .map(str::to_lowercase)
        .filter(|q| !q.is_empty());

    products
        .iter()
        .filter(|p| filter.tab.matches(p.status))
        .filter(|p| in_selection(&filter.availability, p.availability.as_deref()))
        .filter(|p| in_selection(&filter.product_type, Some(&p.product_type)))
        .filter(|p| in_selection(&filter.vendor, Some(&p.vendor)))
        .filter(|p| match &query {
            Some(q) => p.title.to_lowercase().contains(q),
            None => true,
        })
        .cloned()
        .collect()
}

/// One descriptor per facet with a non-empty selection, in availability,
/// type, vendor order. Availability values read "Available on X"; the other
/// facets comma-join their raw values.
pub fn applied_filters(filter: &FilterState) -> Vec<AppliedFilter> {
    let mut applied = Vec::new();

    if let Some(values) = non_empty(&filter.availability) {
        let label = values
            .iter()
            .map(|value| format!("Available on {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        applied.push(AppliedFilter {
            key: FilterKey::Availability,
            label,
        });
    }
    if let Some(values) = non_empty(&filter.product_type) {
        applied.push(AppliedFilter {
            key: FilterKey::ProductType,
            label: values.join(", "),
        });
    }
    if let Some(values) = non_empty(&filter.vendor) {
        applied.push(AppliedFilter {
            key: FilterKey::Vendor,
            label: values.join(", "),
        });
    }

    applied
}

/// An empty or absent selection is a no-op; otherwise plain set membership.
/// Products lacking the facet value are excluded once a selection exists.
fn in_selection(selection: &Option<Vec<String>>, value: Option<&str>) -> bool {
    match non_empty(selection) {
        Some(values) => value.map_or(false, |v| values.iter().any(|s| s == v)),
        None => true,
    }
}

fn non_empty(selection: &Option<Vec<String>>) -> Option<&Vec<String>> {
    selection.as_ref().filter(|values| !values.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::aggregate::{Inventory, Rating};

    fn product(id: i64, title: &str, status: ProductStatus, product_type: &str, vendor: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            price: 1.0,
            category: "Apparel".to_string(),
            product_type: product_type.to_string(),
            vendor: vendor.to_string(),
            inventory: Inventory::Count(1),
            status,
            image: vec!["u".to_string()],
            rating: Rating { rate: 0.0, count: 0 },
            availability: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shirt", ProductStatus::Active, "T-Shirt", "Company 123"),
            product(2, "Blue Mug", ProductStatus::Draft, "Accessory", "Boring Rock"),
            product(3, "Gift Card", ProductStatus::Archived, "Gift Card", "Rustic LTD"),
            product(4, "Green Shirt", ProductStatus::Active, "T-Shirt", "Boring Rock"),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let products = catalog();
        let visible = compute_visible(&products, &FilterState::default());
        assert_eq!(visible, products);
    }

    #[test]
    fn compute_visible_is_pure() {
        let products = catalog();
        let filter = FilterState {
            tab: StatusTab::Active,
            vendor: Some(vec!["Boring Rock".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            compute_visible(&products, &filter),
            compute_visible(&products, &filter)
        );
    }

    #[test]
    fn tabs_partition_the_collection() {
        let products = catalog();
        let all = compute_visible(&products, &FilterState::default());
        let per_tab: usize = [StatusTab::Active, StatusTab::Draft, StatusTab::Archived]
            .into_iter()
            .map(|tab| {
                compute_visible(
                    &products,
                    &FilterState {
                        tab,
                        ..Default::default()
                    },
                )
                .len()
            })
            .sum();
        assert_eq!(per_tab, all.len());
    }

    #[test]
    fn query_is_case_insensitive_and_title_only() {
        let products = catalog();
        let upper = FilterState {
            query: Some("SHIRT".to_string()),
            ..Default::default()
        };
        let lower = FilterState {
            query: Some("shirt".to_string()),
            ..Default::default()
        };
        let matched = compute_visible(&products, &upper);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched, compute_visible(&products, &lower));

        // vendor text never matches the query
        let by_vendor_text = FilterState {
            query: Some("Boring".to_string()),
            ..Default::default()
        };
        assert!(compute_visible(&products, &by_vendor_text).is_empty());
    }

    #[test]
    fn facet_selection_matching_nothing_is_valid() {
        let products = catalog();
        let filter = FilterState {
            vendor: Some(vec!["Nobody".to_string()]),
            ..Default::default()
        };
        assert!(compute_visible(&products, &filter).is_empty());
    }

    #[test]
    fn availability_selection_excludes_products_without_the_facet() {
        let mut products = catalog();
        products[0].availability = Some("Online Store".to_string());
        let filter = FilterState {
            availability: Some(vec!["Online Store".to_string()]),
            ..Default::default()
        };
        let visible = compute_visible(&products, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn filters_compose() {
        let products = catalog();
        let filter = FilterState {
            tab: StatusTab::Active,
            product_type: Some(vec!["T-Shirt".to_string()]),
            vendor: Some(vec!["Boring Rock".to_string()]),
            query: Some("green".to_string()),
            ..Default::default()
        };
        let visible = compute_visible(&products, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 4);
    }

    #[test]
    fn applied_filter_labels() {
        let filter = FilterState {
            availability: Some(vec!["Online Store".to_string(), "Buy Button".to_string()]),
            product_type: Some(vec!["T-Shirt".to_string(), "Accessory".to_string()]),
            vendor: Some(vec![]),
            ..Default::default()
        };
        let applied = applied_filters(&filter);
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].key, FilterKey::Availability);
        assert_eq!(applied[0].label, "Available on Online Store, Available on Buy Button");
        assert_eq!(applied[1].label, "T-Shirt, Accessory");
    }

    #[test]
    fn clear_resets_exactly_one_facet() {
        let mut filter = FilterState {
            availability: Some(vec!["Online Store".to_string()]),
            product_type: Some(vec!["T-Shirt".to_string()]),
            vendor: Some(vec!["Acme".to_string()]),
            query: Some("shirt".to_string()),
            ..Default::default()
        };
        filter.clear(FilterKey::ProductType);
        assert!(filter.product_type.is_none());
        assert!(filter.availability.is_some());
        assert!(filter.vendor.is_some());
        assert!(filter.query.is_some());

        filter.clear_all();
        assert_eq!(filter.active_filter_count(), 0);
        assert!(filter.query.is_none());
    }
}
