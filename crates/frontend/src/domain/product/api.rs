use contracts::domain::product::aggregate::Product;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch the full product list (hydration at page load)
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&format!("{}/api/products", api_base()))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: {}", response.status()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}
