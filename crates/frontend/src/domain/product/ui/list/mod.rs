mod state;

use contracts::catalog::filter::{applied_filters, compute_visible, StatusTab};
use contracts::domain::product::aggregate::Product;
use leptos::prelude::*;

use crate::domain::product::store::use_catalog;
use crate::domain::product::ui::create::AddProductModal;
use crate::domain::product::ui::details::ProductDetails;
use crate::layout::Navbar;
use crate::shared::components::choice_list::ChoiceList;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::list_utils::{truncate_text, SearchInput};
use crate::shared::modal::Modal;

use state::create_state;

/// Fixed sales-channel choices for the availability facet
const AVAILABILITY_CHOICES: [&str; 3] = ["Online Store", "Point of Sale", "Buy Button"];

#[component]
#[allow(non_snake_case)]
pub fn ProductListPage() -> impl IntoView {
    let catalog = use_catalog();
    let state = create_state();

    let filters_expanded = RwSignal::new(false);
    let selected_product = RwSignal::new(Option::<Product>::None);
    let (show_create, set_show_create) = signal(false);

    catalog.hydrate();

    // Visible subset and applied-filter chips derived from the shared
    // collection and the current filter selection
    let get_visible = move || -> Vec<Product> {
        let filter = state.with(|s| s.filter.clone());
        compute_visible(&catalog.products(), &filter)
    };
    let get_applied = move || {
        let filter = state.with(|s| s.filter.clone());
        applied_filters(&filter)
    };

    let query_value = Signal::derive(move || {
        state.with(|s| s.filter.query.clone().unwrap_or_default())
    });
    let handle_query_change = Callback::new(move |value: String| {
        state.update(|s| {
            s.filter.query = if value.trim().is_empty() { None } else { Some(value) };
        });
    });

    let availability_choices = Signal::derive(move || {
        AVAILABILITY_CHOICES.iter().map(|s| s.to_string()).collect::<Vec<_>>()
    });
    let type_choices = Signal::derive(move || catalog.facets().types);
    let vendor_choices = Signal::derive(move || catalog.facets().vendors);

    view! {
        <div class="content">
            <Navbar on_add_product=Callback::new(move |_| set_show_create.set(true)) />

            <div class="tabs">
                {StatusTab::ALL_TABS.into_iter().map(|tab| {
                    view! {
                        <button
                            class=move || {
                                if state.with(|s| s.filter.tab) == tab {
                                    "tab tab--active"
                                } else {
                                    "tab"
                                }
                            }
                            on:click=move |_| state.update(|s| s.filter.tab = tab)
                        >
                            {tab.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="list-toolbar">
                <SearchInput
                    value=query_value
                    on_change=handle_query_change
                    placeholder="Search products...".to_string()
                />
            </div>

            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=Signal::derive(move || {
                    state.with(|s| s.filter.active_filter_count())
                })
            >
                <ChoiceList
                    title="Purchase Availability".to_string()
                    choices=availability_choices
                    selected=Signal::derive(move || {
                        state.with(|s| s.filter.availability.clone().unwrap_or_default())
                    })
                    on_change=Callback::new(move |values: Vec<String>| {
                        state.update(|s| s.filter.availability = Some(values));
                    })
                />
                <ChoiceList
                    title="Product Type".to_string()
                    choices=type_choices
                    selected=Signal::derive(move || {
                        state.with(|s| s.filter.product_type.clone().unwrap_or_default())
                    })
                    on_change=Callback::new(move |values: Vec<String>| {
                        state.update(|s| s.filter.product_type = Some(values));
                    })
                />
                <ChoiceList
                    title="Vendor".to_string()
                    choices=vendor_choices
                    selected=Signal::derive(move || {
                        state.with(|s| s.filter.vendor.clone().unwrap_or_default())
                    })
                    on_change=Callback::new(move |values: Vec<String>| {
                        state.update(|s| s.filter.vendor = Some(values));
                    })
                />
            </FilterPanel>

            {move || {
                let applied = get_applied();
                if applied.is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <div class="filter-tags">
                            {applied.into_iter().map(|filter| {
                                let key = filter.key;
                                view! {
                                    <FilterTag
                                        label=filter.label
                                        on_remove=Callback::new(move |_| {
                                            state.update(|s| s.filter.clear(key));
                                        })
                                    />
                                }
                            }).collect_view()}
                            <button
                                class="btn btn-plain filter-tags__clear"
                                on:click=move |_| state.update(|s| s.filter.clear_all())
                            >
                                "Clear all"
                            </button>
                        </div>
                    }.into_any()
                }
            }}

            {move || {
                if !catalog.is_loaded() {
                    view! { <InitialLoading /> }.into_any()
                } else {
                    let visible = get_visible();
                    if visible.is_empty() {
                        view! { <EmptyTable /> }.into_any()
                    } else {
                        view! {
                            <div class="table-container">
                                <table>
                                    <thead>
                                        <tr>
                                            <th></th>
                                            <th>{"Product"}</th>
                                            <th>{"Status"}</th>
                                            <th>{"Inventory"}</th>
                                            <th>{"Type"}</th>
                                            <th>{"Vendor"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible.into_iter().map(|product| {
                                            let row = product.clone();
                                            let primary_image = product.image.first().cloned().unwrap_or_default();
                                            let inventory_class = if product.inventory.is_negative() {
                                                "inventory inventory--negative"
                                            } else if product.inventory.is_not_tracked() {
                                                "inventory inventory--untracked"
                                            } else {
                                                "inventory"
                                            };
                                            view! {
                                                <tr on:click=move |_| selected_product.set(Some(row.clone()))>
                                                    <td>
                                                        <img
                                                            class="product-thumbnail"
                                                            src={primary_image}
                                                            alt={product.title.clone()}
                                                        />
                                                    </td>
                                                    <td class="product-title">
                                                        {truncate_text(&product.title, 10)}
                                                    </td>
                                                    <td>
                                                        <span class="badge badge--info">
                                                            {product.status.as_str()}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <span class={inventory_class}>
                                                            {product.inventory.label()}
                                                        </span>
                                                    </td>
                                                    <td>{product.product_type.clone()}</td>
                                                    <td>{product.vendor.clone()}</td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_any()
                    }
                }
            }}

            {move || selected_product.get().map(|product| {
                let body = product.clone();
                view! {
                    <Modal
                        title=product.title.clone()
                        on_close=Callback::new(move |_| selected_product.set(None))
                    >
                        <ProductDetails product=body.clone() />
                    </Modal>
                }
            })}

            {move || if show_create.get() {
                view! {
                    <AddProductModal on_close=Callback::new(move |_| set_show_create.set(false)) />
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Shown while the initial product load is still in flight
#[component]
#[allow(non_snake_case)]
fn InitialLoading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__bar"></div>
        </div>
    }
}

/// Explicit empty state instead of a bare table
#[component]
#[allow(non_snake_case)]
fn EmptyTable() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>{"No products found"}</h3>
            <p>{"Try changing the filters or add a new product."}</p>
        </div>
    }
}
