//! Shared `reqwest` plumbing for the service clients.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::OsmError;

/// `reqwest` client with the shared timeouts and `User-Agent`, used by every
/// outbound caller in the workspace.
///
/// # Errors
///
/// Returns [`OsmError::Http`] if the TLS backend cannot be initialised.
pub fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, OsmError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses `base` and ensures it ends with exactly one slash, so relative
/// joins append to the path instead of replacing its last segment.
pub(crate) fn parse_base_url(base: &str) -> Result<Url, OsmError> {
    let normalised = format!("{}/", base.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| OsmError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

/// Asserts a 2xx status and parses the body as `T`.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: Response,
    context: &str,
) -> Result<T, OsmError> {
    let response = response.error_for_status()?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| OsmError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
