//! Payment provider integration.
//!
//! The provider sits behind a narrow contract - initiate, verify, cancel -
//! so the checkout orchestrator never sees which implementation is running.
//! The implementation is selected from configuration at startup:
//!
//! - [`MockGateway`] - fixed-delay stand-in that always succeeds, for
//!   development and tests (the reference behavior).
//! - [`NasspayClient`] - the real Nasspay IQ HTTP integration.
//!
//! Swapping the mock for the real gateway changes nothing outside this
//! module; the request and result shapes are the stable contract.

pub mod mock;
pub mod nasspay;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use mobilya_core::ProductId;

use crate::config::{PaymentConfig, PaymentProvider};

pub use mock::MockGateway;
pub use nasspay::NasspayClient;

/// Errors from the payment provider integration.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to build the client or parse a response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Customer contact and address details submitted at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl CustomerInfo {
    /// Whether every required contact field is present and non-blank.
    /// `city` and `postal_code` are optional by contract.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        ![&self.full_name, &self.email, &self.phone, &self.address]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

/// One cart-line-shaped record in a checkout submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl OrderItem {
    /// Recomputed total over a list of submitted items.
    #[must_use]
    pub fn total(items: &[Self]) -> Decimal {
        items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }
}

/// Envelope attached by the orchestrator to every initiated payment.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentMetadata {
    /// RFC 3339 submission timestamp.
    pub timestamp: String,
    /// Origin tag identifying this storefront.
    pub source: &'static str,
}

impl PaymentMetadata {
    /// Metadata for a payment initiated now.
    #[must_use]
    pub fn now() -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: "mobilya-storefront",
        }
    }
}

/// A validated payment initiation request.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub items: Vec<OrderItem>,
    pub customer: CustomerInfo,
    pub metadata: PaymentMetadata,
}

/// Outcome of a payment initiation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Outcome of a transaction verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub success: bool,
    pub verified: bool,
    pub transaction_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Outcome of a transaction cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationResult {
    pub success: bool,
    pub cancelled: bool,
    pub transaction_id: String,
    #[serde(default)]
    pub message: String,
}

/// Configured payment gateway.
///
/// Concrete dispatch over the two implementations; handlers hold this by
/// value through `AppState` and never branch on the variant themselves.
#[derive(Clone)]
pub enum PaymentGateway {
    Mock(MockGateway),
    Nasspay(NasspayClient),
}

impl PaymentGateway {
    /// Build the gateway selected by configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] if the real client cannot be constructed
    /// (malformed key, missing key despite config validation).
    pub fn from_config(config: &PaymentConfig) -> Result<Self, PaymentError> {
        match config.provider {
            PaymentProvider::Mock => Ok(Self::Mock(MockGateway::new(config.mock_delay))),
            PaymentProvider::Nasspay => Ok(Self::Nasspay(NasspayClient::new(config)?)),
        }
    }

    /// Initiate a payment.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] only for transport or contract failures; a
    /// provider-side decline comes back as `Ok` with `success == false`.
    pub async fn initiate(&self, request: &PaymentRequest) -> Result<PaymentResult, PaymentError> {
        match self {
            Self::Mock(gateway) => Ok(gateway.initiate(request).await),
            Self::Nasspay(client) => client.initiate(request).await,
        }
    }

    /// Verify a previously initiated transaction.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] on transport or contract failures.
    pub async fn verify(&self, transaction_id: &str) -> Result<VerificationResult, PaymentError> {
        match self {
            Self::Mock(gateway) => Ok(gateway.verify(transaction_id).await),
            Self::Nasspay(client) => client.verify(transaction_id).await,
        }
    }

    /// Cancel a pending transaction.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] on transport or contract failures.
    pub async fn cancel(&self, transaction_id: &str) -> Result<CancellationResult, PaymentError> {
        match self {
            Self::Mock(gateway) => Ok(gateway.cancel(transaction_id).await),
            Self::Nasspay(client) => client.cancel(transaction_id).await,
        }
    }
}
