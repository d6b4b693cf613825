//! The `emergency` command: locate the ambulance, fetch or load hospitals,
//! rank them, and hand a [`EmergencyView`] to the renderer.

use amburoute_core::sample::{sample_records, DEMO_ORIGIN};
use amburoute_core::{new_case_id, rank_hospitals, Coordinate, RankedHospital, RankingProfile};
use amburoute_osm::NominatimClient;

use crate::backend::BackendClient;

/// Inputs of one emergency lookup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EmergencyRequest {
    /// Device position, `None` when the driver gave no fix.
    pub position: Option<Coordinate>,
    /// Rank the bundled sample list instead of calling the backend.
    pub offline: bool,
    /// Resolve a place name for the origin.
    pub describe_place: bool,
}

/// Outcome of an emergency lookup, ready to render.
#[derive(Debug, Clone)]
pub(crate) enum EmergencyView {
    /// Live mode without a device position.
    PermissionRequired,
    /// The backend could not be reached or rejected the request.
    FetchFailed,
    Ranked {
        origin: Coordinate,
        place: Option<String>,
        /// Only set for offline cases.
        case_id: Option<String>,
        hospitals: Vec<RankedHospital>,
    },
}

pub(crate) async fn run_emergency(
    request: EmergencyRequest,
    backend: &BackendClient,
    geocoder: Option<&NominatimClient>,
) -> EmergencyView {
    if request.offline {
        let origin = request.position.unwrap_or(DEMO_ORIGIN);
        if request.position.is_none() {
            tracing::info!(%origin, "no device position, using demo origin");
        }
        let hospitals = rank_hospitals(&sample_records(), origin, &RankingProfile::offline());
        let case_id = new_case_id();
        tracing::info!(%case_id, count = hospitals.len(), "offline emergency case opened");
        return EmergencyView::Ranked {
            origin,
            place: describe(request, geocoder, origin).await,
            case_id: Some(case_id),
            hospitals,
        };
    }

    let Some(origin) = request.position else {
        return EmergencyView::PermissionRequired;
    };

    let records = match backend.nearby_hospitals(origin).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(%origin, error = %e, "nearby hospital fetch failed");
            return EmergencyView::FetchFailed;
        }
    };

    let hospitals = rank_hospitals(&records, origin, &RankingProfile::live());
    tracing::info!(
        %origin,
        received = records.len(),
        ranked = hospitals.len(),
        "nearby hospitals ranked"
    );
    EmergencyView::Ranked {
        origin,
        place: describe(request, geocoder, origin).await,
        case_id: None,
        hospitals,
    }
}

/// Place name for the header. Lookup failures only cost the label.
async fn describe(
    request: EmergencyRequest,
    geocoder: Option<&NominatimClient>,
    origin: Coordinate,
) -> Option<String> {
    if !request.describe_place {
        return None;
    }
    let geocoder = geocoder?;
    match geocoder.reverse(origin).await {
        Ok(place) => place,
        Err(e) => {
            tracing::warn!(%origin, error = %e, "reverse geocoding failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend(server: &MockServer) -> BackendClient {
        BackendClient::new(&format!("{}/api", server.uri()), 5, "amburoute-test/0.1")
            .expect("backend client")
    }

    fn request(position: Option<Coordinate>, offline: bool) -> EmergencyRequest {
        EmergencyRequest {
            position,
            offline,
            describe_place: false,
        }
    }

    #[tokio::test]
    async fn live_mode_without_position_requires_permission() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let view = run_emergency(request(None, false), &backend(&server), None).await;
        assert!(matches!(view, EmergencyView::PermissionRequired));
    }

    #[tokio::test]
    async fn live_mode_ranks_backend_rows() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/emergency/nearby-hospitals"))
            .and(body_json(json!({"latitude": 13.0675, "longitude": 80.2345})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "Far Care", "lat": 13.10, "lng": 80.27, "distance_km": 6.1, "time_min": 14},
                {"name": "Near Care", "lat": 13.07, "lng": 80.24, "distance_km": 1.0, "time_min": 3},
                {"name": "Point B", "lat": 13.07, "lng": 80.24}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let origin = Coordinate::new(13.0675, 80.2345).unwrap();
        let view = run_emergency(request(Some(origin), false), &backend(&server), None).await;

        let EmergencyView::Ranked {
            hospitals, case_id, ..
        } = view
        else {
            panic!("expected ranked view, got {view:?}");
        };
        assert!(case_id.is_none());
        let names: Vec<&str> = hospitals.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Near Care", "Far Care"]);
        assert!(hospitals.iter().all(RankedHospital::can_navigate));
    }

    #[tokio::test]
    async fn backend_error_is_fetch_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"error": "Failed to calculate ETA"})),
            )
            .mount(&server)
            .await;

        let origin = Coordinate::new(13.0675, 80.2345).unwrap();
        let view = run_emergency(request(Some(origin), false), &backend(&server), None).await;
        assert!(matches!(view, EmergencyView::FetchFailed));
    }

    #[tokio::test]
    async fn offline_mode_uses_demo_origin_and_opens_case() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let view = run_emergency(request(None, true), &backend(&server), None).await;
        let EmergencyView::Ranked {
            origin,
            case_id,
            hospitals,
            ..
        } = view
        else {
            panic!("expected ranked view, got {view:?}");
        };
        assert_eq!(origin, DEMO_ORIGIN);
        assert!(case_id.is_some_and(|id| id.starts_with("EMG-")));
        assert_eq!(hospitals.len(), 6);
        assert_eq!(hospitals[0].eta_min, 1);
    }

    #[tokio::test]
    async fn place_lookup_failure_keeps_the_ranking() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let geocoder = NominatimClient::new(&server.uri(), 5, "amburoute-test/0.1").unwrap();
        let req = EmergencyRequest {
            position: None,
            offline: true,
            describe_place: true,
        };
        let view = run_emergency(req, &backend(&server), Some(&geocoder)).await;
        let EmergencyView::Ranked { place, hospitals, .. } = view else {
            panic!("expected ranked view, got {view:?}");
        };
        assert!(place.is_none());
        assert!(!hospitals.is_empty());
    }
}
