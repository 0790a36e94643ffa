use contracts::catalog::filter::FilterState;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    // Tab, facet selections and the free-text query
    pub filter: FilterState,
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
