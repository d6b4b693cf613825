use amburoute_core::Coordinate;
use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};

use crate::finder::NearbyHospital;
use crate::middleware::RequestId;

use super::{ApiError, AppState};

const ETA_FAILURE_MESSAGE: &str = "Failed to calculate ETA";

/// `POST /api/emergency/nearby-hospitals`
///
/// Body `{latitude, longitude}`; answers a bare JSON array of
/// [`NearbyHospital`] rows, fastest first.
pub(super) async fn nearby_hospitals(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<Coordinate>, JsonRejection>,
) -> Result<Json<Vec<NearbyHospital>>, ApiError> {
    let Json(origin) = payload.map_err(|rejection| {
        tracing::debug!(request_id = %req_id.0, error = %rejection, "rejected request body");
        ApiError::bad_request("latitude and longitude are required")
    })?;

    origin.validate().map_err(|e| ApiError::bad_request(e.to_string()))?;

    tracing::info!(request_id = %req_id.0, %origin, "nearby hospital lookup");

    match state.finder.find_nearby(origin).await {
        Ok(hospitals) => {
            tracing::info!(
                request_id = %req_id.0,
                count = hospitals.len(),
                "nearby hospital lookup complete"
            );
            Ok(Json(hospitals))
        }
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "nearby hospital lookup failed");
            Err(ApiError::internal(ETA_FAILURE_MESSAGE))
        }
    }
}
