//! Driver-side hospital ranking.
//!
//! Takes hospital-like JSON records whose shape depends on where they came
//! from (the finder endpoint, raw Overpass elements, a places-style
//! `geometry.location` object, the bundled sample list) and turns them into a
//! deduplicated list ordered by estimated arrival time.
//!
//! Records that cannot be used are dropped silently: a placeholder or blank
//! name, no recognisable coordinates, out-of-range coordinates, or a position
//! beyond the profile's radius.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use crate::eta::EtaModel;
use crate::geo::{haversine_km, Coordinate};

/// Names upstream sources use for unnamed or synthetic points.
const PLACEHOLDER_NAMES: &[&str] = &["point b", "unknown"];

/// Parameters that differ between the live and offline ranking variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingProfile {
    pub eta: EtaModel,
    /// Records farther than this from the origin are dropped. `None` keeps all.
    pub max_radius_km: Option<f64>,
}

impl RankingProfile {
    /// City driving with a 25% traffic allowance, used for finder results.
    #[must_use]
    pub const fn live() -> Self {
        Self {
            eta: EtaModel::new(35.0, 1.25, 2),
            max_radius_km: Some(15.0),
        }
    }

    /// Emergency-lane speed with no allowance, used for the bundled sample list.
    #[must_use]
    pub const fn offline() -> Self {
        Self {
            eta: EtaModel::new(40.0, 1.0, 1),
            max_radius_km: Some(15.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HospitalStatus {
    #[serde(rename = "EMERGENCY AVAILABLE")]
    EmergencyAvailable,
    #[serde(rename = "NO EMERGENCY")]
    NoEmergency,
}

impl HospitalStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HospitalStatus::EmergencyAvailable => "EMERGENCY AVAILABLE",
            HospitalStatus::NoEmergency => "NO EMERGENCY",
        }
    }
}

impl std::fmt::Display for HospitalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A hospital ready for display, ordered by [`rank_hospitals`].
#[derive(Debug, Clone, Serialize)]
pub struct RankedHospital {
    /// Upstream id when the record carried one, otherwise a fresh UUID.
    pub id: String,
    pub name: String,
    pub position: Coordinate,
    /// Straight-line distance from the origin, rounded to 2 decimals.
    pub distance_km: f64,
    pub eta_min: u32,
    pub status: HospitalStatus,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub services: Option<String>,
}

impl RankedHospital {
    /// Navigation is only offered to hospitals accepting emergencies.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.status == HospitalStatus::EmergencyAvailable
    }
}

/// Rank raw hospital records by estimated arrival time from `origin`.
///
/// Order of operations: name validity, coordinate normalization, radius
/// cutoff, deduplication (first occurrence of name + position wins), then a
/// sort by ETA with distance as the tie-breaker.
#[must_use]
pub fn rank_hospitals(
    records: &[Value],
    origin: Coordinate,
    profile: &RankingProfile,
) -> Vec<RankedHospital> {
    let mut seen = HashSet::new();
    let mut ranked: Vec<RankedHospital> = records
        .iter()
        .filter_map(|record| {
            let name = hospital_name(record)?;
            let position = extract_coordinate(record)?;
            let distance = haversine_km(origin, position);
            if profile.max_radius_km.is_some_and(|max| distance > max) {
                return None;
            }
            Some((record, name, position, distance))
        })
        .filter(|(_, name, position, _)| seen.insert(dedup_key(name, *position)))
        .map(|(record, name, position, distance)| RankedHospital {
            id: record_id(record),
            name: name.to_string(),
            position,
            distance_km: round_2dp(distance),
            eta_min: profile.eta.minutes(distance),
            status: emergency_status(record),
            phone: text_field(record, &["phone"]),
            address: text_field(record, &["address", "vicinity"]),
            services: text_field(record, &["services"]),
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.eta_min
            .cmp(&b.eta_min)
            .then_with(|| a.distance_km.total_cmp(&b.distance_km))
    });

    tracing::debug!(
        input = records.len(),
        ranked = ranked.len(),
        "ranked hospital records"
    );
    ranked
}

/// Returns the record's display name, or `None` when it is blank or a
/// known placeholder.
///
/// Raw Overpass elements keep the name under `tags.name`.
#[must_use]
pub fn hospital_name(record: &Value) -> Option<&str> {
    let name = record
        .get("name")
        .and_then(Value::as_str)
        .or_else(|| {
            record
                .get("tags")
                .and_then(|t| t.get("name"))
                .and_then(Value::as_str)
        })?
        .trim();

    if name.is_empty() {
        return None;
    }
    let lowered = name.to_lowercase();
    if PLACEHOLDER_NAMES.contains(&lowered.as_str()) {
        return None;
    }
    Some(name)
}

/// Extracts a position from any of the supported record shapes.
///
/// Checked in order: `latitude`/`longitude`, `lat`/`lng`, `lat`/`lon`,
/// `geometry.location.lat`/`lng`. Numeric strings are accepted.
#[must_use]
pub fn extract_coordinate(record: &Value) -> Option<Coordinate> {
    let pair = |holder: &Value, lat_key: &str, lng_key: &str| -> Option<(f64, f64)> {
        Some((number_field(holder, lat_key)?, number_field(holder, lng_key)?))
    };

    let (latitude, longitude) = pair(record, "latitude", "longitude")
        .or_else(|| pair(record, "lat", "lng"))
        .or_else(|| pair(record, "lat", "lon"))
        .or_else(|| {
            let location = record.get("geometry")?.get("location")?;
            pair(location, "lat", "lng")
        })?;

    Coordinate::new(latitude, longitude).ok()
}

/// Stable dedup key: SHA-256 over the trimmed name and exact position.
///
/// Signed zeros are folded so `-0.0` and `0.0` share a key.
#[must_use]
pub fn dedup_key(name: &str, position: Coordinate) -> String {
    use sha2::{Digest, Sha256};
    let input = format!(
        "{}\x00{}\x00{}",
        name.trim(),
        position.latitude + 0.0,
        position.longitude + 0.0
    );
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

fn number_field(holder: &Value, key: &str) -> Option<f64> {
    let value = holder.get(key)?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        .filter(|v| v.is_finite())
}

fn text_field(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn record_id(record: &Value) -> String {
    match record.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => uuid::Uuid::new_v4().to_string(),
    }
}

/// Only an explicit "no" disables emergency intake; a missing flag does not.
fn emergency_status(record: &Value) -> HospitalStatus {
    let flag = record
        .get("emergency")
        .or_else(|| record.get("tags").and_then(|t| t.get("emergency")));
    match flag {
        Some(Value::Bool(false)) => HospitalStatus::NoEmergency,
        Some(Value::String(s)) if s.eq_ignore_ascii_case("no") => HospitalStatus::NoEmergency,
        _ => HospitalStatus::EmergencyAvailable,
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "ranking_test.rs"]
mod tests;
