//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults point at the public demo APIs.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CATALOG_API_URL` - Product catalog base URL (default: <https://fakestoreapi.com/products>)
//! - `CATALOG_CACHE_TTL_SECS` - Cache product-by-id lookups for this many seconds (default: no cache)
//! - `POSTAL_API_URL` - Postal code lookup base URL (default: <https://viacep.com.br/ws>)
//! - `SHIPPING_FLAT_FEE` - Flat shipping fee (default: 15.00)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;
use vitrine_core::Price;

/// Default product catalog endpoint.
pub const DEFAULT_CATALOG_API_URL: &str = "https://fakestoreapi.com/products";
/// Default postal code lookup endpoint.
pub const DEFAULT_POSTAL_API_URL: &str = "https://viacep.com.br/ws";
/// Default flat shipping fee.
pub const DEFAULT_SHIPPING_FLAT_FEE: &str = "15.00";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Remote product catalog configuration
    pub catalog: CatalogConfig,
    /// Postal code lookup and shipping fee configuration
    pub shipping: ShippingConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g., "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// Remote product catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL; products live at `<base>` and `<base>/<id>`
    pub base_url: Url,
    /// TTL for cached product-by-id lookups, `None` disables caching
    pub cache_ttl: Option<Duration>,
}

/// Shipping configuration.
#[derive(Debug, Clone)]
pub struct ShippingConfig {
    /// Base URL; lookups go to `<base>/<code>/json/`
    pub postal_api_url: Url,
    /// Fee charged for every deliverable postal code
    pub flat_fee: Price,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let host = vars
            .or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| invalid("STOREFRONT_HOST", e))?;
        let port = vars
            .or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| invalid("STOREFRONT_PORT", e))?;

        let catalog = CatalogConfig::from_vars(&vars)?;
        let shipping = ShippingConfig::from_vars(&vars)?;

        let sentry_sample_rate = vars
            .or_default("SENTRY_SAMPLE_RATE", "1.0")
            .parse::<f32>()
            .map_err(|e| invalid("SENTRY_SAMPLE_RATE", e))?;
        let sentry_traces_sample_rate = vars
            .or_default("SENTRY_TRACES_SAMPLE_RATE", "0.0")
            .parse::<f32>()
            .map_err(|e| invalid("SENTRY_TRACES_SAMPLE_RATE", e))?;

        Ok(Self {
            host,
            port,
            catalog,
            shipping,
            sentry_dsn: vars.optional("SENTRY_DSN"),
            sentry_environment: vars.optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_vars<F: Fn(&str) -> Option<String>>(vars: &Vars<'_, F>) -> Result<Self, ConfigError> {
        let base_url = parse_http_url(
            "CATALOG_API_URL",
            &vars.or_default("CATALOG_API_URL", DEFAULT_CATALOG_API_URL),
        )?;

        let cache_ttl = vars
            .optional("CATALOG_CACHE_TTL_SECS")
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|e| invalid("CATALOG_CACHE_TTL_SECS", e))
            })
            .transpose()?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            base_url,
            cache_ttl,
        })
    }
}

impl ShippingConfig {
    fn from_vars<F: Fn(&str) -> Option<String>>(vars: &Vars<'_, F>) -> Result<Self, ConfigError> {
        let postal_api_url = parse_http_url(
            "POSTAL_API_URL",
            &vars.or_default("POSTAL_API_URL", DEFAULT_POSTAL_API_URL),
        )?;
        let flat_fee = vars
            .or_default("SHIPPING_FLAT_FEE", DEFAULT_SHIPPING_FLAT_FEE)
            .parse::<Price>()
            .map_err(|e| invalid("SHIPPING_FLAT_FEE", e))?;

        Ok(Self {
            postal_api_url,
            flat_fee,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable source with blank-as-unset semantics.
struct Vars<'a, F>(&'a F);

impl<F: Fn(&str) -> Option<String>> Vars<'_, F> {
    /// Get an optional variable, treating blank values as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }
}

fn invalid(key: &str, err: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), err.to_string())
}

/// Parse an absolute `http`/`https` URL and drop any trailing slash.
fn parse_http_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim().trim_end_matches('/')).map_err(|e| invalid(key, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(key, format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(ConfigError::MissingEnvVar(format!("{key} (host)")));
    }

    Ok(url)
}
