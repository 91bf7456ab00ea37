//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mobilya_core::{Category, Product, ProductId, format_lira};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub price_display: String,
    pub category: Category,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            price_display: format_lira(product.price),
            category: product.category,
            image: product.image.clone(),
        }
    }
}

/// Product listing response.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductView>,
    pub count: usize,
}

/// Listing filter query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<Category>,
}

/// List the catalog, optionally filtered by category.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<ProductListResponse> {
    let products: Vec<ProductView> = match query.category {
        Some(category) => state
            .catalog()
            .by_category(category)
            .into_iter()
            .map(ProductView::from)
            .collect(),
        None => state.catalog().list().iter().map(ProductView::from).collect(),
    };

    let count = products.len();
    Json(ProductListResponse { products, count })
}

/// Product detail by id.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductView>> {
    let id = ProductId::new(id);

    state
        .catalog()
        .find_by_id(id)
        .map(|product| Json(ProductView::from(product)))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
