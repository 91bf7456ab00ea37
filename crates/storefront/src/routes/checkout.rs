//! Checkout route handler.
//!
//! Validates the submitted order shape, delegates to the payment gateway
//! exactly once, and maps the outcome to the response contract:
//!
//! - 200 `{success, transaction_id, redirect_url, message}`
//! - 400 `{success: false, message}` (shape errors or provider decline)
//! - 405 `{success: false, message: "Method not allowed"}`
//! - 500 `{success: false, message: "Internal server error during checkout"}`
//!
//! Stateless per request; the orchestrator never retries a failed payment.

use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ErrorBody;
use crate::payment::{CustomerInfo, OrderItem, PaymentMetadata, PaymentRequest};
use crate::state::AppState;

/// Raw checkout submission. Every field is optional so that shape
/// validation produces this API's 400 bodies instead of extractor
/// rejections.
#[derive(Debug, Deserialize)]
pub struct CheckoutPayload {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub items: Option<Vec<OrderItem>>,
    #[serde(default)]
    pub customer: Option<CustomerInfo>,
}

/// Checkout response body, for both success and failure.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    pub message: String,
}

/// A checkout submission that passed shape validation.
#[derive(Debug)]
struct ValidOrder {
    amount: Decimal,
    items: Vec<OrderItem>,
    customer: CustomerInfo,
}

/// Validate the submission shape against the checkout contract.
fn validate(payload: CheckoutPayload) -> Result<ValidOrder, &'static str> {
    let (Some(amount), Some(items), Some(customer)) =
        (payload.amount, payload.items, payload.customer)
    else {
        return Err("Missing required fields: amount, items, or customer");
    };

    if items.is_empty() {
        return Err("Cart is empty");
    }

    if !customer.is_complete() {
        return Err("Incomplete customer information");
    }

    Ok(ValidOrder {
        amount,
        items,
        customer,
    })
}

fn reject(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

/// Handle a checkout submission.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutPayload>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return reject(StatusCode::BAD_REQUEST, "Invalid checkout request body");
    };

    let order = match validate(payload) {
        Ok(order) => order,
        Err(message) => return reject(StatusCode::BAD_REQUEST, message),
    };

    // The submitted amount is the authoritative charge (inherited contract);
    // a mismatch against the recomputed item total is flagged, not fixed.
    let recomputed = OrderItem::total(&order.items);
    if recomputed != order.amount {
        tracing::warn!(
            submitted = %order.amount,
            recomputed = %recomputed,
            "Checkout amount does not match submitted items"
        );
    }

    tracing::info!(
        amount = %order.amount,
        item_count = order.items.len(),
        customer = %order.customer.email,
        "Checkout request received"
    );

    let request = PaymentRequest {
        amount: order.amount,
        items: order.items,
        customer: order.customer,
        metadata: PaymentMetadata::now(),
    };

    match state.payments().initiate(&request).await {
        Ok(result) if result.success => (
            StatusCode::OK,
            Json(CheckoutResponse {
                success: true,
                transaction_id: result.transaction_id,
                redirect_url: result.redirect_url,
                message: "Payment initiated successfully".to_string(),
            }),
        )
            .into_response(),
        Ok(result) => {
            let message = if result.message.is_empty() {
                "Payment initiation failed".to_string()
            } else {
                result.message
            };
            reject(StatusCode::BAD_REQUEST, &message)
        }
        Err(e) => {
            let event_id = sentry::capture_error(&e);
            tracing::error!(
                error = %e,
                sentry_event_id = %event_id,
                "Checkout payment initiation failed"
            );
            reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error during checkout",
            )
        }
    }
}

/// 405 body for any non-POST invocation of the checkout endpoint.
pub async fn method_not_allowed() -> Response {
    reject(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
