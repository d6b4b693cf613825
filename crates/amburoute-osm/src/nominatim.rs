//! Nominatim reverse-geocoding client.

use amburoute_core::Coordinate;
use reqwest::{Client, Url};

use crate::error::OsmError;
use crate::http::{build_client, decode_json, parse_base_url};
use crate::types::ReverseResponse;

pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// # Errors
    ///
    /// Returns [`OsmError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`OsmError::InvalidUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, OsmError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Human-readable place name for `at`, or `None` when Nominatim has no
    /// match for the position.
    ///
    /// # Errors
    ///
    /// - [`OsmError::Http`] on network failure or non-2xx status.
    /// - [`OsmError::Deserialize`] if the body is not a reverse response.
    pub async fn reverse(&self, at: Coordinate) -> Result<Option<String>, OsmError> {
        let url = self.reverse_url(at)?;
        tracing::debug!(%at, "reverse geocoding position");

        let response = self.client.get(url).send().await?;
        let body: ReverseResponse = decode_json(response, &format!("reverse({at})")).await?;

        if let Some(error) = body.error {
            tracing::debug!(%at, error = %error, "nominatim found no place");
            return Ok(None);
        }
        Ok(body.display_name.filter(|s| !s.trim().is_empty()))
    }

    fn reverse_url(&self, at: Coordinate) -> Result<Url, OsmError> {
        let mut url = self.base_url.join("reverse").map_err(|e| OsmError::InvalidUrl {
            url: format!("{}reverse", self.base_url),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("format", "jsonv2")
            .append_pair("lat", &at.latitude.to_string())
            .append_pair("lon", &at.longitude.to_string());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_url_carries_position() {
        let client = NominatimClient::new("https://nominatim.openstreetmap.org/", 5, "test").unwrap();
        let url = client
            .reverse_url(Coordinate::new(13.0675, 80.2345).unwrap())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/reverse?format=jsonv2&lat=13.0675&lon=80.2345"
        );
    }
}
