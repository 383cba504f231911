use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ServiceConfig;

use super::error::GeoError;
use super::service::GeoLookupService;
use super::types::{Municipality, Subdivision};

const USER_AGENT: &str = concat!("location-picker/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the IBGE localities API.
///
/// - `GET {base_url}/estados`
/// - `GET {base_url}/estados/{code}/municipios`
pub struct IbgeClient {
    client: Client,
    base_url: String,
}

impl IbgeClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .user_agent(USER_AGENT)
            .build()
            .map_err(GeoError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GeoError> {
        let endpoint = format!("{}{}", self.base_url, path);
        tracing::debug!(endpoint = %endpoint, "Geo request");

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|source| GeoError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| GeoError::Request {
            endpoint: endpoint.clone(),
            source,
        })?;
        tracing::debug!(endpoint = %endpoint, bytes = body.len(), "Geo response");

        serde_json::from_slice(&body).map_err(|source| GeoError::Decode { endpoint, source })
    }
}

#[async_trait]
impl GeoLookupService for IbgeClient {
    async fn list_subdivisions(&self) -> Result<Vec<Subdivision>, GeoError> {
        self.get_json("/estados").await
    }

    async fn list_municipalities(
        &self,
        subdivision_code: &str,
    ) -> Result<Vec<Municipality>, GeoError> {
        if !is_valid_code(subdivision_code) {
            return Err(GeoError::InvalidCode(subdivision_code.to_string()));
        }
        self.get_json(&format!("/estados/{}/municipios", subdivision_code))
            .await
    }
}

/// Codes go into the URL path unescaped, so only ASCII alphanumerics pass.
fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric())
}
