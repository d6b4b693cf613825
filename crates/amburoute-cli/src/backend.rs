//! HTTP client for the hospital-finder backend.

use amburoute_core::Coordinate;
use amburoute_osm::{build_client, OsmError};
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not build backend client: {0}")]
    Client(#[from] OsmError),

    #[error("invalid backend URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected backend response: {0}")]
    Deserialize(#[source] serde_json::Error),
}

pub struct BackendClient {
    client: Client,
    endpoint: Url,
}

impl BackendClient {
    /// `api_url` is the API root, e.g. `http://localhost:5000/api`.
    ///
    /// # Errors
    ///
    /// [`BackendError::Client`] if the client cannot be built,
    /// [`BackendError::InvalidUrl`] if `api_url` does not parse.
    pub fn new(api_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, BackendError> {
        let client = build_client(timeout_secs, user_agent)?;

        let raw = format!(
            "{}/emergency/nearby-hospitals",
            api_url.trim_end_matches('/')
        );
        let endpoint = Url::parse(&raw).map_err(|e| BackendError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, endpoint })
    }

    /// Raw hospital records near `origin`, in backend order.
    ///
    /// The records are returned untyped; validity filtering happens in
    /// ranking.
    ///
    /// # Errors
    ///
    /// - [`BackendError::Http`] on network failure.
    /// - [`BackendError::Status`] on a non-2xx answer, carrying the
    ///   backend's `error` message when present.
    /// - [`BackendError::Deserialize`] if the body is not a JSON array.
    pub async fn nearby_hospitals(&self, origin: Coordinate) -> Result<Vec<Value>, BackendError> {
        tracing::debug!(%origin, endpoint = %self.endpoint, "requesting nearby hospitals");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&origin)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(BackendError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn origin() -> Coordinate {
        Coordinate::new(13.0675, 80.2345).unwrap()
    }

    #[tokio::test]
    async fn posts_origin_with_shared_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/emergency/nearby-hospitals"))
            .and(header("user-agent", "amburoute-test/0.1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "A"}])))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            BackendClient::new(&format!("{}/api/", server.uri()), 5, "amburoute-test/0.1").unwrap();
        let rows = client.nearby_hospitals(origin()).await.unwrap();
        assert_eq!(rows, vec![json!({"name": "A"})]);
    }

    #[tokio::test]
    async fn error_status_carries_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"error": "Failed to calculate ETA"})),
            )
            .mount(&server)
            .await;

        let client = BackendClient::new(&format!("{}/api", server.uri()), 5, "test").unwrap();
        let err = client.nearby_hospitals(origin()).await.unwrap_err();
        assert!(
            matches!(err, BackendError::Status { status: 500, ref message } if message == "Failed to calculate ETA"),
            "got {err:?}"
        );
    }

    #[test]
    fn unparseable_api_url_is_rejected() {
        let err = BackendClient::new("not a url", 5, "test").err().unwrap();
        assert!(matches!(err, BackendError::InvalidUrl { .. }));
    }
}
