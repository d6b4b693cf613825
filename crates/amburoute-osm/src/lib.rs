//! Clients for the OpenStreetMap-based services the hospital finder relies on:
//! Overpass (points of interest), OSRM (driving routes) and Nominatim
//! (reverse geocoding).

pub mod error;
mod http;
pub mod nominatim;
pub mod osrm;
pub mod overpass;
pub mod types;

pub use error::OsmError;
pub use http::build_client;
pub use nominatim::NominatimClient;
pub use osrm::OsrmClient;
pub use overpass::{hospital_query, OverpassClient};
pub use types::{OverpassElement, Route};
