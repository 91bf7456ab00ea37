//! Nasspay IQ payment API client.
//!
//! Real HTTP implementation of the gateway contract. Requests carry bearer
//! authentication configured at construction; a provider timeout surfaces as
//! a failed [`PaymentResult`], never as a hang.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;

use crate::config::PaymentConfig;

use super::{CancellationResult, PaymentError, PaymentRequest, PaymentResult, VerificationResult};

/// Outbound request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Nasspay IQ API client.
#[derive(Debug, Clone)]
pub struct NasspayClient {
    client: reqwest::Client,
    base_url: String,
}

impl NasspayClient {
    /// Create a new Nasspay API client.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// fails to build.
    pub fn new(config: &PaymentConfig) -> Result<Self, PaymentError> {
        let api_key = config
            .api_key
            .as_ref()
            .ok_or_else(|| PaymentError::Parse("NASSPAY_API_KEY is not configured".to_string()))?;

        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", api_key.expose_secret());
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&auth_value)
                .map_err(|e| PaymentError::Parse(format!("Invalid API key format: {e}")))?,
        );
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Initiate a payment with the provider.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] for transport failures other than timeout
    /// and for unparseable responses. A timeout is a failed outcome, and a
    /// provider decline arrives as `success == false`, both as `Ok`.
    pub async fn initiate(&self, request: &PaymentRequest) -> Result<PaymentResult, PaymentError> {
        let url = format!("{}/payments", self.base_url);

        let response = match self.client.post(&url).json(request).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!("Payment initiation timed out");
                return Ok(PaymentResult {
                    success: false,
                    transaction_id: None,
                    redirect_url: None,
                    message: "Payment provider timed out".to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| PaymentError::Parse(e.to_string()))
    }

    /// Verify a payment transaction.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] if the request fails or the response cannot
    /// be parsed.
    pub async fn verify(&self, transaction_id: &str) -> Result<VerificationResult, PaymentError> {
        let url = format!("{}/payments/{transaction_id}", self.base_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| PaymentError::Parse(e.to_string()))
    }

    /// Cancel a pending payment transaction.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] if the request fails or the response cannot
    /// be parsed.
    pub async fn cancel(&self, transaction_id: &str) -> Result<CancellationResult, PaymentError> {
        let url = format!("{}/payments/{transaction_id}/cancel", self.base_url);

        let response = self.client.post(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| PaymentError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaymentProvider;
    use secrecy::SecretString;

    #[test]
    fn test_new_requires_api_key() {
        let config = PaymentConfig {
            provider: PaymentProvider::Nasspay,
            api_url: "https://api.nasspay.iq".to_string(),
            api_key: None,
            mock_delay: Duration::ZERO,
        };

        assert!(matches!(
            NasspayClient::new(&config),
            Err(PaymentError::Parse(_))
        ));
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = PaymentConfig {
            provider: PaymentProvider::Nasspay,
            api_url: "https://api.nasspay.iq/".to_string(),
            api_key: Some(SecretString::from("k9#Qw7!xZp4$Lm2v")),
            mock_delay: Duration::ZERO,
        };

        let client = NasspayClient::new(&config).expect("client builds");
        assert_eq!(client.base_url, "https://api.nasspay.iq");
    }
}
