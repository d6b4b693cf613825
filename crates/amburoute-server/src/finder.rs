//! Nearby-hospital lookup with real driving ETAs.
//!
//! One Overpass query for candidates, then one OSRM request per candidate,
//! issued one after another. Any upstream failure aborts the whole lookup;
//! no partial list is ever returned.

use amburoute_core::{AppConfig, Coordinate};
use amburoute_osm::{OsmError, OsrmClient, OverpassClient, OverpassElement, Route};
use serde::Serialize;
use thiserror::Error;

const UNNAMED_HOSPITAL: &str = "Unnamed Hospital";

/// One row of the nearby-hospitals response.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyHospital {
    pub name: String,
    /// Driving distance, rounded to 2 decimals.
    pub distance_km: f64,
    /// Driving time, rounded to the nearest minute.
    pub time_min: u32,
    pub lat: f64,
    pub lng: f64,
    pub route_geojson: serde_json::Value,
}

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("hospital search failed: {0}")]
    Search(#[source] OsmError),

    #[error("routing to hospital {osm_id} failed: {source}")]
    Route {
        osm_id: i64,
        #[source]
        source: OsmError,
    },
}

pub struct HospitalFinder {
    overpass: OverpassClient,
    osrm: OsrmClient,
    radius_m: u32,
    max_results: usize,
}

impl HospitalFinder {
    #[must_use]
    pub fn new(
        overpass: OverpassClient,
        osrm: OsrmClient,
        radius_m: u32,
        max_results: usize,
    ) -> Self {
        Self {
            overpass,
            osrm,
            radius_m,
            max_results,
        }
    }

    /// Builds both upstream clients from the shared configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OsmError`] if either client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, OsmError> {
        let overpass = OverpassClient::new(
            &config.overpass_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        let osrm = OsrmClient::new(
            &config.osrm_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self::new(
            overpass,
            osrm,
            config.search_radius_m,
            config.max_hospitals,
        ))
    }

    /// Up to `max_results` hospitals around `origin`, fastest first.
    ///
    /// Candidates are the first `max_results` Overpass elements in upstream
    /// order; equal travel times keep that order.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Search`] if the Overpass query fails, or
    /// [`FinderError::Route`] for the first candidate whose route fails.
    pub async fn find_nearby(&self, origin: Coordinate) -> Result<Vec<NearbyHospital>, FinderError> {
        let elements = self
            .overpass
            .hospitals_near(origin, self.radius_m)
            .await
            .map_err(FinderError::Search)?;

        tracing::debug!(
            found = elements.len(),
            max_results = self.max_results,
            "overpass candidates"
        );

        let mut results = Vec::with_capacity(elements.len().min(self.max_results));
        for element in elements.into_iter().take(self.max_results) {
            let destination = Coordinate {
                latitude: element.lat,
                longitude: element.lon,
            };
            let route = self
                .osrm
                .driving_route(origin, destination)
                .await
                .map_err(|source| FinderError::Route {
                    osm_id: element.id,
                    source,
                })?;
            results.push(to_row(&element, route));
        }

        results.sort_by_key(|h| h.time_min);
        Ok(results)
    }
}

fn to_row(element: &OverpassElement, route: Route) -> NearbyHospital {
    // Route durations are small positive seconds; minutes fit a u32.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let time_min = (route.duration.max(0.0) / 60.0).round() as u32;

    NearbyHospital {
        name: element.name().unwrap_or(UNNAMED_HOSPITAL).to_string(),
        distance_km: (route.distance / 1000.0 * 100.0).round() / 100.0,
        time_min,
        lat: element.lat,
        lng: element.lon,
        route_geojson: route.geometry,
    }
}
