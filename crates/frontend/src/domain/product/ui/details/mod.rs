use contracts::domain::product::aggregate::Product;
use leptos::prelude::*;

/// Read-only product view shown in the detail modal: image gallery,
/// description, rating.
#[component]
pub fn ProductDetails(product: Product) -> impl IntoView {
    let title = product.title.clone();

    view! {
        <div class="product-details">
            <section class="product-details__images">
                {product.image.iter().enumerate().map(|(index, url)| {
                    view! {
                        <img
                            class="product-details__image"
                            src={url.clone()}
                            alt={format!("{title}-image-{index}")}
                        />
                    }
                }).collect_view()}
            </section>
            <section class="product-details__section">
                <h3>{"Description"}</h3>
                <div class="product-details__description">{product.description.clone()}</div>
            </section>
            <section class="product-details__section product-details__rating">
                <h3>{"Rating"}</h3>
                <div>
                    <span class="product-details__rating-label">{"Rating: "}</span>
                    {product.rating.rate}
                </div>
                <div>
                    <span class="product-details__rating-label">{"Rated by: "}</span>
                    {format!("{} customers", product.rating.count)}
                </div>
            </section>
        </div>
    }
}
