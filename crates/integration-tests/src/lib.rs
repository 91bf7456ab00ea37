//! Shared helpers for storefront integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot` with an
//! in-memory cart store and a zero-delay mock payment gateway, so they run
//! without a listener, a filesystem, or a network.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::util::ServiceExt;

use mobilya_core::{Category, Product, ProductId};
use mobilya_storefront::cart::CartManager;
use mobilya_storefront::cart::store::MemoryStore;
use mobilya_storefront::catalog::Catalog;
use mobilya_storefront::config::{PaymentConfig, PaymentProvider, StorefrontConfig};
use mobilya_storefront::payment::PaymentGateway;
use mobilya_storefront::state::AppState;

/// A small fixed catalog used across tests.
#[must_use]
pub fn test_catalog() -> Catalog {
    Catalog::from_products(vec![
        Product {
            id: ProductId::new(1),
            name: "Modern Koltuk Takımı".to_string(),
            description: "Üç kişilik modern koltuk".to_string(),
            price: Decimal::from(1000),
            category: Category::LivingRoom,
            image: "/images/koltuk.jpg".to_string(),
        },
        Product {
            id: ProductId::new(2),
            name: "Ahşap Yatak".to_string(),
            description: "Masif ahşap karyola".to_string(),
            price: Decimal::from(500),
            category: Category::Bedroom,
            image: "/images/yatak.jpg".to_string(),
        },
        Product {
            id: ProductId::new(5),
            name: "Orta Sehpa".to_string(),
            description: "Yuvarlak orta sehpa".to_string(),
            price: Decimal::from(750),
            category: Category::LivingRoom,
            image: "/images/sehpa.jpg".to_string(),
        },
    ])
}

fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        catalog_path: PathBuf::from("unused"),
        cart_dir: PathBuf::from("unused"),
        payment: PaymentConfig {
            provider: PaymentProvider::Mock,
            api_url: "https://api.nasspay.iq".to_string(),
            api_key: None,
            mock_delay: Duration::ZERO,
        },
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Build the full router over fresh in-memory state.
#[must_use]
pub fn test_app() -> Router {
    let config = test_config();
    let gateway =
        PaymentGateway::from_config(&config.payment).expect("mock gateway always builds");
    let cart = CartManager::new(Arc::new(MemoryStore::new()));

    mobilya_storefront::app(AppState::from_parts(config, test_catalog(), cart, gateway))
}

/// Send a GET request and return status plus parsed JSON body.
///
/// # Panics
///
/// Panics if the request cannot be built or the response body read.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request");

    send(app, request).await
}

/// Send a JSON request and return status plus parsed JSON body.
///
/// # Panics
///
/// Panics if the request cannot be built or the response body read.
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");

    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router infallible");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
