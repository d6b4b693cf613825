pub mod app_config;
pub mod case;
pub mod config;
pub mod eta;
pub mod geo;
pub mod navigation;
pub mod ranking;
pub mod sample;
pub mod session;

pub use app_config::{AppConfig, Environment};
pub use case::new_case_id;
pub use config::{load_app_config, load_app_config_from_env};
pub use eta::EtaModel;
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use navigation::directions_url;
pub use ranking::{rank_hospitals, HospitalStatus, RankedHospital, RankingProfile};
pub use session::DriverSession;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("coordinate out of range: latitude={latitude}, longitude={longitude}")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },

    #[error("Please fill all fields (missing {0})")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
