//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_CATALOG_PATH` - Product catalog JSON file
//!   (default: crates/storefront/data/products.json)
//! - `STOREFRONT_CART_DIR` - Directory for persisted carts (default: data/carts)
//! - `PAYMENT_PROVIDER` - `mock` or `nasspay` (default: mock)
//! - `MOCK_PAYMENT_DELAY_MS` - Simulated provider latency (default: 1500)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//!
//! ## Required when `PAYMENT_PROVIDER=nasspay`
//! - `NASSPAY_API_URL` - Provider API base URL
//! - `NASSPAY_API_KEY` - Provider API key (placeholder values are rejected)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "mock_api_key",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Which payment gateway implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentProvider {
    /// Fixed-delay mock that always succeeds. Never contacts a network.
    #[default]
    Mock,
    /// Real Nasspay IQ HTTP integration.
    Nasspay,
}

impl std::str::FromStr for PaymentProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "nasspay" => Ok(Self::Nasspay),
            other => Err(format!("unknown payment provider '{other}' (expected mock or nasspay)")),
        }
    }
}

/// Payment gateway configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct PaymentConfig {
    /// Which gateway implementation to construct at startup.
    pub provider: PaymentProvider,
    /// Provider API base URL (nasspay only).
    pub api_url: String,
    /// Provider API key (nasspay only).
    pub api_key: Option<SecretString>,
    /// Simulated latency for the mock gateway.
    pub mock_delay: Duration,
}

impl std::fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("provider", &self.provider)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("mock_delay", &self.mock_delay)
            .finish()
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the product catalog JSON file
    pub catalog_path: PathBuf,
    /// Directory holding persisted cart files
    pub cart_dir: PathBuf,
    /// Payment gateway configuration
    pub payment: PaymentConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if variables are malformed, or if the nasspay
    /// provider is selected without a usable API key.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string()))?;
        let catalog_path = PathBuf::from(get_env_or_default(
            "STOREFRONT_CATALOG_PATH",
            "crates/storefront/data/products.json",
        ));
        let cart_dir = PathBuf::from(get_env_or_default("STOREFRONT_CART_DIR", "data/carts"));

        let payment = PaymentConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            catalog_path,
            cart_dir,
            payment,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl PaymentConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let provider = get_env_or_default("PAYMENT_PROVIDER", "mock")
            .parse::<PaymentProvider>()
            .map_err(|e| ConfigError::InvalidEnvVar("PAYMENT_PROVIDER".to_string(), e))?;

        let api_url = get_env_or_default("NASSPAY_API_URL", "https://api.nasspay.iq");

        // The key is only required (and only validated) for the real provider
        let api_key = match provider {
            PaymentProvider::Mock => get_optional_env("NASSPAY_API_KEY").map(SecretString::from),
            PaymentProvider::Nasspay => Some(get_validated_secret("NASSPAY_API_KEY")?),
        };

        let mock_delay_ms = get_env_or_default("MOCK_PAYMENT_DELAY_MS", "1500")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MOCK_PAYMENT_DELAY_MS".to_string(), e.to_string())
            })?;

        Ok(Self {
            provider,
            api_url,
            api_key,
            mock_delay: Duration::from_millis(mock_delay_ms),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a secret is not an obvious placeholder.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_provider_parse() {
        assert_eq!("mock".parse::<PaymentProvider>().unwrap(), PaymentProvider::Mock);
        assert_eq!("Nasspay".parse::<PaymentProvider>().unwrap(), PaymentProvider::Nasspay);
        assert!("stripe".parse::<PaymentProvider>().is_err());
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-api-key-here", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_mock_default_rejected() {
        // The original code shipped with this literal fallback key
        assert!(validate_secret_strength("mock_api_key", "TEST_VAR").is_err());
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            catalog_path: PathBuf::from("data/products.json"),
            cart_dir: PathBuf::from("data/carts"),
            payment: PaymentConfig {
                provider: PaymentProvider::Mock,
                api_url: "https://api.nasspay.iq".to_string(),
                api_key: None,
                mock_delay: Duration::from_millis(1500),
            },
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_payment_config_debug_redacts_key() {
        let config = PaymentConfig {
            provider: PaymentProvider::Nasspay,
            api_url: "https://api.nasspay.iq".to_string(),
            api_key: Some(SecretString::from("super_secret_provider_key")),
            mock_delay: Duration::from_millis(1500),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_provider_key"));
    }
}
