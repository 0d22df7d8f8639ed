//! API client for the GL.iNet router firmware.
//!
//! One `ApiClient` targets one router. Every method is a single request and
//! a single decode; there are no retries and no state beyond the base URL
//! and the optional session token.

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::models::{ClientListResponse, ModemInfoResponse, NetworkClient, PublicIp, Reachability};

use super::ApiError;

/// HTTP request timeout. The router answers on the local network; anything
/// slower than this is treated as unreachable.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Client for one router.
/// Clone is cheap - reqwest::Client uses Arc internally.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the router at `address` (bare host/IP, or a full
    /// URL which is used verbatim). No token is attached yet.
    pub fn new(address: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            // The firmware serves a self-signed certificate
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url_for(address),
            token: None,
        })
    }

    /// Attach a session token for authenticated requests.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Perform the single login round-trip and return the issued token.
    ///
    /// Does not persist anything and does not mutate `self`; storing the
    /// token is the caller's concern.
    pub async fn login(&self, password: &str) -> Result<String, ApiError> {
        let url = self.url("/api/router/login");
        debug!(url = %url, "sending login request");

        let response = self
            .client
            .post(&url)
            .form(&[("pwd", password)])
            .send()
            .await
            .map_err(ApiError::Unreachable)?;

        // Wrong password and friends: transport succeeded, no usable token
        if !response.status().is_success() {
            return Err(ApiError::AuthFailed);
        }

        let body: LoginResponse = response.json().await.map_err(|_| ApiError::AuthFailed)?;
        match body.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::AuthFailed),
        }
    }

    /// Public IP as seen by the router.
    pub async fn public_ip(&self) -> Result<PublicIp, ApiError> {
        self.get_json("/cgi-bin/api/internet/public_ip/get").await
    }

    /// Internet reachability as reported by the router.
    pub async fn internet_reachable(&self) -> Result<Reachability, ApiError> {
        self.get_json("/cgi-bin/api/internet/reachable").await
    }

    /// Connected LAN/WLAN clients.
    pub async fn clients(&self) -> Result<Vec<NetworkClient>, ApiError> {
        let response: ClientListResponse = self.get_json("/cgi-bin/api/client/list").await?;
        Ok(response.clients)
    }

    /// Cellular modem status.
    pub async fn modem_info(&self) -> Result<ModemInfoResponse, ApiError> {
        let response = self
            .authorized(self.client.post(self.url("/cgi-bin/api/modem/info")))
            .send()
            .await
            .map_err(ApiError::Unreachable)?;
        decode(response).await
    }

    /// Enable or disable the modem. The firmware models this as a `disable`
    /// form flag.
    pub async fn set_modem_enabled(&self, enabled: bool) -> Result<(), ApiError> {
        let disable = if enabled { "false" } else { "true" };
        self.post_form("/cgi-bin/api/modem/enable", &[("disable", disable)])
            .await
    }

    /// Trigger modem auto-dial for the given modem id and USB bus.
    pub async fn modem_auto_dial(&self, modem_id: &str, bus: &str) -> Result<(), ApiError> {
        self.post_form(
            "/cgi-bin/api/modem/auto",
            &[("modem_id", modem_id), ("bus", bus)],
        )
        .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Add the session token, verbatim, when one is attached. The firmware
    /// expects the raw token in `Authorization`, not a `Bearer` scheme.
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header(header::AUTHORIZATION, token.as_str()),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .map_err(ApiError::Unreachable)?;
        decode(response).await
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let response = self
            .authorized(self.client.post(&url))
            .form(form)
            .send()
            .await
            .map_err(ApiError::Unreachable)?;

        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status()));
        }
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(ApiError::UnexpectedStatus(response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Bare addresses get `https://` prepended (the firmware only serves TLS);
/// anything already carrying a scheme is used as-is.
fn base_url_for(address: &str) -> String {
    if address.contains("://") {
        address.trim_end_matches('/').to_string()
    } else {
        format!("https://{}", address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_prepends_https_for_bare_hosts() {
        assert_eq!(base_url_for("192.168.8.1"), "https://192.168.8.1");
        assert_eq!(base_url_for("router.lan"), "https://router.lan");
    }

    #[test]
    fn base_url_keeps_explicit_scheme() {
        assert_eq!(base_url_for("http://127.0.0.1:8080"), "http://127.0.0.1:8080");
        assert_eq!(base_url_for("https://10.0.0.1/"), "https://10.0.0.1");
    }

    #[test]
    fn login_response_requires_token_field() {
        let ok: LoginResponse = serde_json::from_str(r#"{"token": "abc123"}"#).unwrap();
        assert_eq!(ok.token.as_deref(), Some("abc123"));

        let missing: LoginResponse = serde_json::from_str(r#"{"code": 0}"#).unwrap();
        assert!(missing.token.is_none());
    }
}
