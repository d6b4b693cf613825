//! Bundled hospital list for offline use.
//!
//! Six hospitals around central Chennai, ranked locally when the finder API
//! is not used. Also provides the demo origin used when no device position
//! is available in offline mode.

use serde::Serialize;
use serde_json::Value;

use crate::geo::Coordinate;

/// Fallback origin for offline mode (central Chennai).
pub const DEMO_ORIGIN: Coordinate = Coordinate {
    latitude: 13.0675,
    longitude: 80.2345,
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SampleHospital {
    pub id: u32,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub phone: &'static str,
    pub services: &'static str,
}

pub const SAMPLE_HOSPITALS: &[SampleHospital] = &[
    SampleHospital {
        id: 1,
        name: "City General Hospital",
        lat: 13.0827,
        lng: 80.2707,
        phone: "+91-44-2345-6789",
        services: "Emergency, Trauma, ICU",
    },
    SampleHospital {
        id: 2,
        name: "Apollo Emergency Care",
        lat: 13.0569,
        lng: 80.2425,
        phone: "+91-44-2876-5432",
        services: "24/7 Emergency, Cardiac Care",
    },
    SampleHospital {
        id: 3,
        name: "St. Mary's Medical Center",
        lat: 13.0675,
        lng: 80.2345,
        phone: "+91-44-2654-3210",
        services: "Emergency, Pediatrics",
    },
    SampleHospital {
        id: 4,
        name: "Metro Healthcare",
        lat: 13.0912,
        lng: 80.2543,
        phone: "+91-44-2987-6543",
        services: "Multi-specialty Emergency",
    },
    SampleHospital {
        id: 5,
        name: "Lifeline Hospital",
        lat: 13.0445,
        lng: 80.2567,
        phone: "+91-44-2123-4567",
        services: "Emergency, Surgery",
    },
    SampleHospital {
        id: 6,
        name: "Sunrise Medical",
        lat: 13.0734,
        lng: 80.2189,
        phone: "+91-44-2456-7890",
        services: "24/7 Emergency Care",
    },
];

/// The sample list as raw records, in the same form the ranker accepts from
/// any other source.
#[must_use]
pub fn sample_records() -> Vec<Value> {
    SAMPLE_HOSPITALS
        .iter()
        .filter_map(|h| serde_json::to_value(h).ok())
        .collect()
}
