use contracts::catalog::facets::FacetIndex;
use contracts::catalog::store::CatalogStore;
use contracts::domain::product::aggregate::Product;
use leptos::prelude::*;

use super::api;

/// Reactive wrapper around the shared catalog store. Provided once at the
/// app root so the listing view and the creation form's selector inputs read
/// the same snapshot; mutation stays funneled through the store's two entry
/// points.
#[derive(Clone, Copy)]
pub struct CatalogContext {
    store: RwSignal<CatalogStore>,
    is_loaded: RwSignal<bool>,
}

impl CatalogContext {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(CatalogStore::new()),
            is_loaded: RwSignal::new(false),
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.store.with(|s| s.items().to_vec())
    }

    pub fn facets(&self) -> FacetIndex {
        self.store.with(|s| s.facets().clone())
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded.get()
    }

    pub fn set_products(&self, products: Vec<Product>) {
        self.store.update(|s| s.set_products(products));
    }

    pub fn add_product(&self, product: Product) {
        self.store.update(|s| s.add_product(product));
    }

    /// One read of the remote product list at page load. A failed load
    /// renders the empty collection instead of propagating the error.
    pub fn hydrate(&self) {
        let store = self.store;
        let is_loaded = self.is_loaded;

        wasm_bindgen_futures::spawn_local(async move {
            let products = match api::fetch_products().await {
                Ok(products) => products,
                Err(e) => {
                    log::warn!("Product list load failed, rendering empty catalog: {e}");
                    Vec::new()
                }
            };
            store.update(|s| s.set_products(products));
            is_loaded.set(true);
        });
    }
}

impl Default for CatalogContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext not provided in context")
}
