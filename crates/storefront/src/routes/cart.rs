//! Cart route handlers.
//!
//! All cart endpoints speak JSON. Mutation responses carry a `persisted`
//! flag so the caller can warn the user when a change only took effect in
//! memory (see the cart manager's weak-durability contract).

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mobilya_core::{Cart, CartLine, ProductId, format_lira};

use crate::cart::CartUpdate;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
    pub image: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id,
            name: line.product.name.clone(),
            price: line.product.price,
            quantity: line.quantity,
            line_total: line.line_total(),
            image: line.product.image.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    pub subtotal_display: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartLineView::from).collect(),
            subtotal: cart.total(),
            subtotal_display: format_lira(cart.total()),
            item_count: cart.item_count(),
        }
    }
}

/// Response for cart mutations.
#[derive(Debug, Serialize)]
pub struct CartMutationResponse {
    pub success: bool,
    /// False when the change is in-memory only (backend write failed).
    pub persisted: bool,
    pub cart: CartView,
}

impl From<CartUpdate> for CartMutationResponse {
    fn from(update: CartUpdate) -> Self {
        Self {
            success: true,
            persisted: update.persisted,
            cart: CartView::from(&update.cart),
        }
    }
}

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartBody {
    pub product_id: ProductId,
}

/// Quantity update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityBody {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Remove-from-cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartBody {
    pub product_id: ProductId,
}

/// Cart count badge response.
#[derive(Debug, Serialize)]
pub struct CartCountResponse {
    pub count: u32,
}

/// Current cart.
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::from(&state.cart().cart()))
}

/// Add one unit of a catalog product to the cart.
///
/// 404 if the product id is not in the catalog; the cart only ever holds
/// snapshots of real catalog records.
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddToCartBody>,
) -> Result<Json<CartMutationResponse>> {
    let product = state
        .catalog()
        .find_by_id(body.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", body.product_id)))?
        .clone();

    Ok(Json(state.cart().add(&product).into()))
}

/// Set a line's quantity; `quantity <= 0` removes the line, and a missing
/// line leaves the cart unchanged.
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<UpdateQuantityBody>,
) -> Json<CartMutationResponse> {
    Json(
        state
            .cart()
            .update_quantity(body.product_id, body.quantity)
            .into(),
    )
}

/// Remove a line. No-op (still a success) if the line is absent.
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<RemoveFromCartBody>,
) -> Json<CartMutationResponse> {
    Json(state.cart().remove(body.product_id).into())
}

/// Delete the persisted cart entirely.
pub async fn clear(State(state): State<AppState>) -> Json<CartMutationResponse> {
    Json(state.cart().clear().into())
}

/// Item count for the badge counter (units, not lines).
pub async fn count(State(state): State<AppState>) -> Json<CartCountResponse> {
    Json(CartCountResponse {
        count: state.cart().cart().item_count(),
    })
}
