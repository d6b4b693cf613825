//! Overpass API client for hospital lookups.

use amburoute_core::Coordinate;
use reqwest::{header::CONTENT_TYPE, Client, Url};

use crate::error::OsmError;
use crate::http::{build_client, decode_json};
use crate::types::{OverpassElement, OverpassResponse};

/// Client for an Overpass `interpreter` endpoint.
///
/// Unlike the other clients this takes the full endpoint URL, since public
/// Overpass mirrors disagree on the path.
pub struct OverpassClient {
    client: Client,
    endpoint: Url,
}

impl OverpassClient {
    /// # Errors
    ///
    /// Returns [`OsmError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`OsmError::InvalidUrl`] if `endpoint` does not parse.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, OsmError> {
        let endpoint = Url::parse(endpoint).map_err(|e| OsmError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            endpoint,
        })
    }

    /// Hospital nodes within `radius_m` metres of `center`, in Overpass order.
    ///
    /// # Errors
    ///
    /// - [`OsmError::Http`] on network failure or non-2xx status.
    /// - [`OsmError::Deserialize`] if the body is not an Overpass JSON envelope.
    pub async fn hospitals_near(
        &self,
        center: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<OverpassElement>, OsmError> {
        let query = hospital_query(center, radius_m);
        tracing::debug!(%center, radius_m, "querying overpass for hospitals");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "text/plain")
            .body(query)
            .send()
            .await?;

        let envelope: OverpassResponse =
            decode_json(response, &format!("overpass(around:{radius_m},{center})")).await?;
        Ok(envelope.elements)
    }
}

/// Overpass QL selecting `amenity=hospital` nodes around a point.
#[must_use]
pub fn hospital_query(center: Coordinate, radius_m: u32) -> String {
    format!(
        "[out:json];node[\"amenity\"=\"hospital\"](around:{radius_m},{},{});out;",
        center.latitude, center.longitude
    )
}
