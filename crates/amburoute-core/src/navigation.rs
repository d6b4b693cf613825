use crate::geo::Coordinate;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

/// Turn-by-turn driving directions link for the external maps application.
#[must_use]
pub fn directions_url(origin: Coordinate, destination: Coordinate) -> String {
    format!("{DIRECTIONS_BASE}?api=1&origin={origin}&destination={destination}&travelmode=driving")
}
