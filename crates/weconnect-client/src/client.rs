//! WeConnect ID HTTP client implementation

use std::sync::Arc;

use reqwest::{header, Client, RequestBuilder};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Result, WeConnectError};
use crate::identity::TokenProvider;
use crate::types::*;

/// Production endpoint of the WeConnect ID mobile API
const BASE_URL: &str = "https://mobileapi.apps.emea.vwapps.io";

/// Substitute the vehicle id into a caller-supplied endpoint template.
///
/// The template may contain at most one `%s` placeholder; a template
/// without one is used verbatim.
fn resolve_endpoint(uri: &str, vin: &str) -> String {
    if uri.contains("%s") {
        uri.replacen("%s", vin, 1)
    } else {
        uri.to_string()
    }
}

/// WeConnect ID REST API client
///
/// Stateless apart from the identity reference; cheap to clone and safe for
/// concurrent use. The bearer token is read from the [`TokenProvider`] on
/// every request, never cached, so an externally refreshed token takes
/// effect without rebuilding the client.
#[derive(Clone)]
pub struct WeConnectClient {
    client: Client,
    base_url: String,
    identity: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for WeConnectClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeConnectClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WeConnectClient {
    /// Create a new client against the production API.
    ///
    /// # Arguments
    /// * `identity` - Source of the current bearer token
    pub fn new(identity: Arc<dyn TokenProvider>) -> Self {
        Self::with_http_client(Client::new(), identity)
    }

    /// Create a new client reusing a caller-owned HTTP client.
    ///
    /// Transport policy (timeouts, pooling, proxies) belongs to the caller;
    /// configure it on the `reqwest::Client` before handing it in.
    pub fn with_http_client(client: Client, identity: Arc<dyn TokenProvider>) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
            identity,
        }
    }

    /// Override the API base URL (test servers, regional endpoints).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Vehicle Discovery
    // =========================================================================

    /// List the VINs of all vehicles associated with the account.
    ///
    /// Order follows the backend response. Nicknames are decoded but not
    /// returned here; use [`any`](Self::any) for the raw payload.
    #[instrument(skip(self))]
    pub async fn list_vehicles(&self) -> Result<Vec<String>> {
        let url = Url::parse(&format!("{}/vehicles", self.base_url))?;
        debug!("Listing vehicles from {}", url);

        let response = self.get(url).send().await?;
        self.handle_response::<VehicleList>(response)
            .await
            .map(|list| list.data.into_iter().map(|v| v.vin).collect())
    }

    // =========================================================================
    // Status Telemetry
    // =========================================================================

    /// Fetch the full status snapshot for one vehicle.
    ///
    /// The VIN is interpolated into the URL as-is; an identifier the backend
    /// does not recognize surfaces as a server or decode error, not a local
    /// validation error. Sections the backend omits (commonly
    /// `climatisationStatus`) decode to their zero value.
    #[instrument(skip(self))]
    pub async fn status(&self, vin: &str) -> Result<VehicleStatus> {
        let url = Url::parse(&format!("{}/vehicles/{}/status", self.base_url, vin))?;
        debug!("Fetching status from {}", url);

        let response = self.get(url).send().await?;
        self.handle_response::<StatusResponse>(response)
            .await
            .map(|r| r.data)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Issue a start/stop command for a vehicle subsystem.
    ///
    /// Fire-and-forget: the backend queues the command and this method only
    /// reports the HTTP-level outcome. The response body is decoded to catch
    /// malformed JSON and then discarded; vendor-level success or failure
    /// fields inside it are not inspected. Callers wanting the body should
    /// go through [`any`](Self::any), and callers needing "status reflects
    /// the action" must poll [`status`](Self::status).
    #[instrument(skip(self))]
    pub async fn action(&self, vin: &str, action: Action, value: ActionValue) -> Result<()> {
        let url = Url::parse(&format!(
            "{}/vehicles/{}/{}/{}",
            self.base_url,
            vin,
            action.as_name(),
            value.as_name()
        ))?;
        debug!("Posting action to {}", url);

        let response = self.post(url).send().await?;
        let _body: serde_json::Value = self.handle_response(response).await?;
        Ok(())
    }

    /// Change the charging target state of charge.
    ///
    /// The vendor encodes this as `POST .../charging/settings` with a JSON
    /// body instead of a third path segment, breaking the uniform
    /// `(action, value)`-in-path pattern of [`action`](Self::action) — hence
    /// the separate, explicitly typed operation. Fire-and-forget like the
    /// path-segment actions.
    #[instrument(skip(self))]
    pub async fn set_charging_target(&self, vin: &str, target_soc_pct: u8) -> Result<()> {
        let url = Url::parse(&format!("{}/vehicles/{}/charging/settings", self.base_url, vin))?;
        debug!("Posting charging settings to {}", url);

        let body = ChargingSettingsRequest { target_soc_pct };
        let response = self.post(url).json(&body).send().await?;
        let _body: serde_json::Value = self.handle_response(response).await?;
        Ok(())
    }

    // =========================================================================
    // Generic Endpoint Access
    // =========================================================================

    /// Fetch an arbitrary endpoint and return the raw JSON value.
    ///
    /// Escape hatch for vendor endpoints this crate does not model. `uri`
    /// may contain a single `%s` placeholder for the vehicle id; without
    /// one it is requested verbatim. The shape of the result is unknown at
    /// compile time, so it comes back as a [`serde_json::Value`].
    #[instrument(skip(self))]
    pub async fn any(&self, uri: &str, vin: &str) -> Result<serde_json::Value> {
        let url = Url::parse(&resolve_endpoint(uri, vin))?;
        debug!("Fetching {}", url);

        let response = self.get(url).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Build an authenticated GET request. The token is read here, at call
    /// time, not at construction.
    fn get(&self, url: Url) -> RequestBuilder {
        self.client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(self.identity.token())
    }

    /// Build an authenticated POST request.
    fn post(&self, url: Url) -> RequestBuilder {
        self.client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(self.identity.token())
    }

    /// Handle response and deserialize JSON
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| WeConnectError::ParseError(e.to_string()))
        } else {
            let message = match response.text().await {
                Ok(body) if !body.is_empty() => body,
                _ => format!("HTTP {}", status),
            };
            Err(WeConnectError::server_error(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::StaticToken;

    fn test_client() -> WeConnectClient {
        WeConnectClient::new(Arc::new(StaticToken::new("token")))
    }

    #[test]
    fn test_client_defaults_to_production_base() {
        let client = test_client();
        assert_eq!(client.base_url(), "https://mobileapi.apps.emea.vwapps.io");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = test_client().with_base_url("http://127.0.0.1:9090/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9090");
    }

    #[test]
    fn test_resolve_endpoint_with_placeholder() {
        assert_eq!(resolve_endpoint("https://x/%s/y", "VIN1"), "https://x/VIN1/y");
    }

    #[test]
    fn test_resolve_endpoint_without_placeholder() {
        assert_eq!(resolve_endpoint("https://x/y", "VIN1"), "https://x/y");
    }

    #[test]
    fn test_resolve_endpoint_substitutes_once() {
        assert_eq!(resolve_endpoint("https://x/%s/%s", "VIN1"), "https://x/VIN1/%s");
    }

    #[tokio::test]
    async fn test_malformed_base_url_is_request_build_error() {
        let client = test_client().with_base_url("not a url");
        let result = client.list_vehicles().await;
        assert!(matches!(result, Err(WeConnectError::InvalidUrl(_))));
    }
}
