use axum::Json;
use contracts::domain::product::aggregate::Product;

use crate::shared::seed;

/// GET /api/products
pub async fn list_all() -> Json<Vec<Product>> {
    Json(seed::demo_products())
}
