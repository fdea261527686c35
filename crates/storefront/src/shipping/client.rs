//! ViaCEP postal code lookup client.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use vitrine_core::PostalCode;

use super::ShippingError;
use crate::config::ShippingConfig;

/// Location data returned for a known postal code.
///
/// The storefront only uses it as a success signal and for logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub bairro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,
}

/// Result of a postal code lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalLookup {
    /// The service knows this code.
    Found(Address),
    /// The service answered with its error flag.
    NotFound,
}

/// Raw ViaCEP body: either an address or `{"erro": true}`.
///
/// Newer deployments send the flag as the string `"true"`.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: Option<serde_json::Value>,
    #[serde(flatten)]
    address: Address,
}

impl ViaCepResponse {
    fn is_error(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

/// Client for the ViaCEP postal code service.
#[derive(Clone)]
pub struct ViaCepClient {
    inner: Arc<ViaCepClientInner>,
}

struct ViaCepClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a new lookup client sharing `client`'s connection pool.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &ShippingConfig) -> Self {
        Self {
            inner: Arc::new(ViaCepClientInner {
                client,
                base_url: config
                    .postal_api_url
                    .as_str()
                    .trim_end_matches('/')
                    .to_string(),
            }),
        }
    }

    /// Look up a normalized postal code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the body is not JSON.
    #[instrument(skip(self), fields(postal_code = %code))]
    pub async fn lookup(&self, code: &PostalCode) -> Result<PostalLookup, ShippingError> {
        let url = format!("{}/{code}/json/", self.inner.base_url);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Postal code service returned non-success status"
            );
            return Err(ShippingError::Status {
                status: status.as_u16(),
            });
        }

        let parsed: ViaCepResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "Failed to parse postal code response"
            );
            ShippingError::Decode(e)
        })?;

        if parsed.is_error() {
            debug!("Postal code not found");
            return Ok(PostalLookup::NotFound);
        }

        debug!(city = ?parsed.address.localidade, state = ?parsed.address.uf, "Postal code found");
        Ok(PostalLookup::Found(parsed.address))
    }
}
