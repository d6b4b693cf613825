//! Straight-line ETA heuristic.

/// Linear-speed ETA model: `distance / speed`, scaled by a traffic buffer,
/// rounded to whole minutes and floored at `min_minutes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EtaModel {
    /// Assumed average driving speed in km/h. Must be positive.
    pub speed_kmh: f64,
    /// Multiplier applied to the raw travel time (`1.25` = 25% slack).
    pub traffic_buffer: f64,
    pub min_minutes: u32,
}

impl EtaModel {
    #[must_use]
    pub const fn new(speed_kmh: f64, traffic_buffer: f64, min_minutes: u32) -> Self {
        Self {
            speed_kmh,
            traffic_buffer,
            min_minutes,
        }
    }

    /// Estimated travel time in whole minutes for `distance_km`.
    #[must_use]
    pub fn minutes(&self, distance_km: f64) -> u32 {
        let raw = distance_km.max(0.0) / self.speed_kmh * 60.0 * self.traffic_buffer;
        // Non-negative and bounded by realistic road distances.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = raw.round().min(f64::from(u32::MAX)) as u32;
        rounded.max(self.min_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_speed_and_buffer() {
        let model = EtaModel::new(35.0, 1.25, 2);
        // 7 km at 35 km/h = 12 min, * 1.25 = 15 min.
        assert_eq!(model.minutes(7.0), 15);
    }

    #[test]
    fn rounds_to_nearest_minute() {
        let model = EtaModel::new(40.0, 1.0, 0);
        // 1.46 km at 40 km/h = 2.19 min.
        assert_eq!(model.minutes(1.46), 2);
        // 1.81 km at 40 km/h = 2.715 min.
        assert_eq!(model.minutes(1.81), 3);
    }

    #[test]
    fn floors_at_minimum() {
        let model = EtaModel::new(35.0, 1.25, 2);
        assert_eq!(model.minutes(0.0), 2);
        assert_eq!(model.minutes(0.1), 2);
    }

    #[test]
    fn is_monotonic_in_distance() {
        let model = EtaModel::new(35.0, 1.25, 2);
        let mut previous = 0;
        for step in 0..2_000 {
            let distance = f64::from(step) * 0.037;
            let eta = model.minutes(distance);
            assert!(eta >= previous, "eta dropped at {distance} km");
            previous = eta;
        }
    }

    #[test]
    fn negative_distance_is_treated_as_zero() {
        let model = EtaModel::new(40.0, 1.0, 1);
        assert_eq!(model.minutes(-3.0), 1);
    }
}
