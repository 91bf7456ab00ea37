//! Mock payment gateway.
//!
//! Fabricates successful responses after a fixed simulated latency without
//! contacting any external service. This is the reference implementation of
//! the gateway contract; production deployments select the Nasspay client
//! through configuration instead.

use std::time::Duration;

use super::{CancellationResult, PaymentRequest, PaymentResult, VerificationResult};

/// Always-succeeding stand-in for the payment provider.
#[derive(Debug, Clone)]
pub struct MockGateway {
    delay: Duration,
}

impl MockGateway {
    /// Create a mock gateway with the given simulated latency.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Simulate a payment initiation: always succeeds after the delay.
    pub async fn initiate(&self, request: &PaymentRequest) -> PaymentResult {
        tokio::time::sleep(self.delay).await;

        tracing::info!(
            amount = %request.amount,
            item_count = request.items.len(),
            "Mock payment initiated"
        );

        PaymentResult {
            success: true,
            transaction_id: Some(format!("MOCK-{}", chrono::Utc::now().timestamp_millis())),
            redirect_url: Some("/success".to_string()),
            message: "Payment request processed successfully (mock)".to_string(),
        }
    }

    /// Simulate verification: always verified and completed.
    pub async fn verify(&self, transaction_id: &str) -> VerificationResult {
        tokio::time::sleep(self.delay).await;

        VerificationResult {
            success: true,
            verified: true,
            transaction_id: transaction_id.to_string(),
            status: "completed".to_string(),
            message: "Payment verified successfully (mock)".to_string(),
        }
    }

    /// Simulate cancellation: always succeeds.
    pub async fn cancel(&self, transaction_id: &str) -> CancellationResult {
        tokio::time::sleep(self.delay).await;

        CancellationResult {
            success: true,
            cancelled: true,
            transaction_id: transaction_id.to_string(),
            message: "Payment cancelled successfully (mock)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{CustomerInfo, PaymentMetadata};
    use super::*;
    use rust_decimal::Decimal;

    fn request() -> PaymentRequest {
        PaymentRequest {
            amount: Decimal::from(2500),
            items: Vec::new(),
            customer: CustomerInfo {
                full_name: "Test".to_string(),
                email: "test@example.com".to_string(),
                phone: "+90 555 000 0000".to_string(),
                address: "Adres".to_string(),
                city: None,
                postal_code: None,
            },
            metadata: PaymentMetadata::now(),
        }
    }

    #[tokio::test]
    async fn test_initiate_always_succeeds() {
        let gateway = MockGateway::new(Duration::ZERO);
        let result = gateway.initiate(&request()).await;

        assert!(result.success);
        let transaction_id = result.transaction_id.expect("transaction id present");
        assert!(transaction_id.starts_with("MOCK-"));
        assert_eq!(result.redirect_url.as_deref(), Some("/success"));
    }

    #[tokio::test]
    async fn test_verify_reports_completed() {
        let gateway = MockGateway::new(Duration::ZERO);
        let result = gateway.verify("MOCK-123").await;

        assert!(result.success);
        assert!(result.verified);
        assert_eq!(result.status, "completed");
        assert_eq!(result.transaction_id, "MOCK-123");
    }

    #[tokio::test]
    async fn test_cancel_reports_cancelled() {
        let gateway = MockGateway::new(Duration::ZERO);
        let result = gateway.cancel("MOCK-123").await;

        assert!(result.success);
        assert!(result.cancelled);
    }
}
