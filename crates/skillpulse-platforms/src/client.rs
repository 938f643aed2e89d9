//! Shared HTTP client for every platform adapter.
//!
//! Wraps one `reqwest::Client` together with the upstream base URLs and the
//! optional GitHub token. The client is cheap to clone and read-only once
//! built, so each adapter owns a copy.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use skillpulse_core::{AppConfig, Endpoints};

use crate::error::PlatformError;

/// HTTP client and endpoint configuration shared by the adapters.
///
/// Use [`PlatformClient::from_config`] in production or
/// [`PlatformClient::new`] with [`Endpoints::all`] to point every adapter at
/// a mock server in tests.
#[derive(Clone)]
pub struct PlatformClient {
    client: Client,
    endpoints: Endpoints,
    github_token: Option<String>,
}

impl PlatformClient {
    /// Creates a client with the given timeout, `User-Agent`, GitHub token
    /// and upstream base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        github_token: Option<String>,
        endpoints: Endpoints,
    ) -> Result<Self, PlatformError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoints,
            github_token,
        })
    }

    /// Creates a client from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, PlatformError> {
        Self::new(
            config.request_timeout_secs,
            &config.user_agent,
            config.github_token.clone(),
            config.endpoints.clone(),
        )
    }

    pub(crate) fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub(crate) fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.client.get(url)
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.client.post(url)
    }

    /// Sends `request`, asserts a 2xx status, and parses the body as `T`.
    ///
    /// `context` names the request in error messages.
    ///
    /// # Errors
    ///
    /// - [`PlatformError::Http`] on network failure.
    /// - [`PlatformError::UnexpectedStatus`] on a non-2xx status.
    /// - [`PlatformError::Deserialize`] if the body does not match `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, PlatformError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlatformError::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlatformError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Builds `base` + `/segment/...`, percent-encoding each segment.
///
/// # Errors
///
/// Returns [`PlatformError::InvalidBaseUrl`] if `base` is not an absolute
/// URL that can carry a path.
pub(crate) fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url, PlatformError> {
    let normalised = format!("{}/", base.trim_end_matches('/'));
    let mut url = Url::parse(&normalised).map_err(|e| PlatformError::InvalidBaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;
    url.path_segments_mut()
        .map_err(|()| PlatformError::InvalidBaseUrl {
            url: base.to_string(),
            reason: "URL cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Treat a non-2xx status on a secondary lookup as "no data".
///
/// Only the status case degrades; network and payload errors still fail the
/// whole fetch.
pub(crate) fn empty_on_status<T: Default>(
    result: Result<T, PlatformError>,
    context: &str,
) -> Result<T, PlatformError> {
    match result {
        Err(PlatformError::UnexpectedStatus { status, url }) => {
            tracing::debug!(status, url = %url, context, "secondary lookup failed, using empty result");
            Ok(T::default())
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
