//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Health check
//!
//! # Products
//! GET  /api/products            - Product listing (optional ?category=)
//! GET  /api/products/{id}       - Product detail
//!
//! # Cart
//! GET  /api/cart                - Current cart
//! POST /api/cart/add            - Add one unit of a product
//! POST /api/cart/update         - Set line quantity (<= 0 removes)
//! POST /api/cart/remove         - Remove a line
//! POST /api/cart/clear          - Delete the persisted cart
//! GET  /api/cart/count          - Item count badge
//!
//! # Checkout
//! POST /api/checkout            - Validate order and initiate payment
//! ```

pub mod cart;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        // Checkout accepts only POST; other methods get the 405 JSON body
        .route(
            "/api/checkout",
            post(checkout::submit).fallback(checkout::method_not_allowed),
        )
}
