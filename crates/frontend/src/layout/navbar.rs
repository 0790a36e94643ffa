use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page header: title on the left, bulk actions and the primary
/// "Add Product" action on the right.
#[component]
pub fn Navbar(
    /// Invoked when the user asks to create a product
    on_add_product: Callback<()>,
) -> impl IntoView {
    let (more_options_open, set_more_options_open) = signal(false);

    view! {
        <div class="navbar">
            <h1 class="navbar__title">"Products"</h1>
            <div class="navbar__actions">
                <button class="btn btn-plain" on:click=move |_| log::info!("Export clicked")>
                    "Export"
                </button>
                <button class="btn btn-plain" on:click=move |_| log::info!("Import clicked")>
                    "Import"
                </button>
                <div class="navbar__popover">
                    <button
                        class="btn btn-plain"
                        on:click=move |_| set_more_options_open.update(|open| *open = !*open)
                    >
                        "More Options"
                        {icon("chevron-down")}
                    </button>
                    {move || if more_options_open.get() {
                        view! {
                            <div class="navbar__popover-list">
                                <button class="btn btn-plain" on:click=move |_| {
                                    log::info!("Option A clicked");
                                    set_more_options_open.set(false);
                                }>"Option A"</button>
                                <button class="btn btn-plain" on:click=move |_| {
                                    log::info!("Option B clicked");
                                    set_more_options_open.set(false);
                                }>"Option B"</button>
                            </div>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }}
                </div>
                <button class="btn btn-primary" on:click=move |_| on_add_product.run(())>
                    {icon("plus")}
                    "Add Product"
                </button>
            </div>
        </div>
    }
}
