//! OSRM `route` service client.

use amburoute_core::Coordinate;
use reqwest::{Client, Url};

use crate::error::OsmError;
use crate::http::{build_client, decode_json, parse_base_url};
use crate::types::{OsrmRouteResponse, Route};

/// Client for an OSRM server's driving profile.
pub struct OsrmClient {
    client: Client,
    base_url: Url,
}

impl OsrmClient {
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

    /// Best driving route from `from` to `to`, with full GeoJSON geometry.
    ///
    /// # Errors
    ///
    /// - [`OsmError::Http`] on network failure or non-2xx status.
    /// - [`OsmError::Deserialize`] if the body is not an OSRM route response.
    /// - [`OsmError::Routing`] if OSRM reports a non-`Ok` code.
    /// - [`OsmError::NoRoute`] if the response holds no routes.
    pub async fn driving_route(&self, from: Coordinate, to: Coordinate) -> Result<Route, OsmError> {
        let url = self.route_url(from, to)?;
        tracing::debug!(%from, %to, "requesting osrm driving route");

        let response = self.client.get(url).send().await?;
        let body: OsrmRouteResponse =
            decode_json(response, &format!("osrm route {from} -> {to}")).await?;

        if body.code != "Ok" {
            return Err(OsmError::Routing {
                code: body.code,
                message: body.message.unwrap_or_default(),
            });
        }

        body.routes.into_iter().next().ok_or_else(|| OsmError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// OSRM expects `lng,lat` pairs separated by `;` in the path.
    fn route_url(&self, from: Coordinate, to: Coordinate) -> Result<Url, OsmError> {
        let path = format!(
            "route/v1/driving/{},{};{},{}",
            from.longitude, from.latitude, to.longitude, to.latitude
        );
        let mut url = self.base_url.join(&path).map_err(|e| OsmError::InvalidUrl {
            url: format!("{}{path}", self.base_url),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("overview", "full")
            .append_pair("geometries", "geojson");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_url_orders_longitude_first() {
        let client = OsrmClient::new("https://router.project-osrm.org", 5, "test").unwrap();
        let from = Coordinate::new(13.0675, 80.2345).unwrap();
        let to = Coordinate::new(13.0569, 80.2425).unwrap();
        let url = client.route_url(from, to).unwrap();
        assert_eq!(
            url.as_str(),
            "https://router.project-osrm.org/route/v1/driving/80.2345,13.0675;80.2425,13.0569\
             ?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn route_url_keeps_base_path_prefix() {
        let client = OsrmClient::new("http://localhost:5000/osrm", 5, "test").unwrap();
        let from = Coordinate::new(1.0, 2.0).unwrap();
        let to = Coordinate::new(3.0, 4.0).unwrap();
        let url = client.route_url(from, to).unwrap();
        assert!(
            url.as_str()
                .starts_with("http://localhost:5000/osrm/route/v1/driving/2,1;4,3?"),
            "unexpected url {url}"
        );
    }
}
