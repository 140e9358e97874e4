//! HTTP client for the nearby-care directory service.
//!
//! Wraps `reqwest` with directory-specific URL building, optional bearer
//! authentication, and typed decoding of the `{ "data": [...] }` envelope.
//! Requests are never retried; a failed lookup is reported to the caller
//! as-is.

use std::time::Duration;

use nearcare_core::{Coordinates, DirectoryService, ProfessionalKind, ProfessionalRecord};
use reqwest::{Client, Url};

use crate::error::DirectoryError;
use crate::types::DataEnvelope;

const PROFESSIONALS_PATH: &str = "professionals/nearby";
const AMBULANCES_PATH: &str = "ambulances/nearby";

/// Client for the directory service's nearby-lookup endpoints.
///
/// Use [`DirectoryClient::new`] with the configured base URL, or point it at
/// a mock server in tests.
pub struct DirectoryClient {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl DirectoryClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DirectoryError::InvalidBaseUrl`] if
    /// `base_url` does not parse or carries a query or fragment.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, DirectoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: normalise_base_url(base_url)?,
            api_token: None,
        })
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Looks up doctors or nurses within `radius_km` of `coordinates`.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Http`] on network failure.
    /// - [`DirectoryError::UnexpectedStatus`] on a non-2xx response.
    /// - [`DirectoryError::Deserialize`] if the body is not the expected envelope.
    pub async fn get_nearby_professionals(
        &self,
        kind: ProfessionalKind,
        coordinates: Coordinates,
        radius_km: f64,
    ) -> Result<Vec<ProfessionalRecord>, DirectoryError> {
        let mut params = vec![("category", kind.as_str().to_string())];
        params.extend(Self::location_params(coordinates, radius_km));
        let url = self.build_url(PROFESSIONALS_PATH, &params)?;
        self.request_data(url).await
    }

    /// Looks up ambulances within `radius_km` of `coordinates`.
    ///
    /// # Errors
    ///
    /// Same as [`DirectoryClient::get_nearby_professionals`].
    pub async fn get_nearby_ambulances(
        &self,
        coordinates: Coordinates,
        radius_km: f64,
    ) -> Result<Vec<ProfessionalRecord>, DirectoryError> {
        let params = Self::location_params(coordinates, radius_km);
        let url = self.build_url(AMBULANCES_PATH, &params)?;
        self.request_data(url).await
    }

    fn location_params(coordinates: Coordinates, radius_km: f64) -> [(&'static str, String); 3] {
        [
            ("lat", coordinates.latitude().to_string()),
            ("lon", coordinates.longitude().to_string()),
            ("radius", radius_km.to_string()),
        ]
    }

    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, DirectoryError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| DirectoryError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and decodes the data envelope.
    async fn request_data(&self, url: Url) -> Result<Vec<ProfessionalRecord>, DirectoryError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "directory lookup rejected");
            return Err(DirectoryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: DataEnvelope =
            serde_json::from_str(&body).map_err(|e| DirectoryError::Deserialize {
                context: url.path().to_string(),
                source: e,
            })?;

        tracing::debug!(url = %url, count = envelope.data.len(), "directory lookup succeeded");
        Ok(envelope.data)
    }
}

/// Parses `raw` and gives its path exactly one trailing slash, so relative
/// joins append to the base path instead of replacing its last segment.
///
/// A query or fragment would be dropped by every join, so both are rejected.
fn normalise_base_url(raw: &str) -> Result<Url, DirectoryError> {
    let invalid = |reason: String| DirectoryError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }
    if url.query().is_some() {
        return Err(invalid("query strings are not supported".to_string()));
    }
    if url.fragment().is_some() {
        return Err(invalid("fragments are not supported".to_string()));
    }

    let path = format!("{}/", url.path().trim_end_matches('/'));
    url.set_path(&path);
    Ok(url)
}

impl DirectoryService for DirectoryClient {
    type Error = DirectoryError;

    async fn nearby_professionals(
        &self,
        kind: ProfessionalKind,
        coordinates: Coordinates,
        radius_km: f64,
    ) -> Result<Vec<ProfessionalRecord>, DirectoryError> {
        self.get_nearby_professionals(kind, coordinates, radius_km)
            .await
    }

    async fn nearby_ambulances(
        &self,
        coordinates: Coordinates,
        radius_km: f64,
    ) -> Result<Vec<ProfessionalRecord>, DirectoryError> {
        self.get_nearby_ambulances(coordinates, radius_km).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
