use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide settings shared by the server and the driver console.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Overpass interpreter endpoint (full URL, not a base).
    pub overpass_url: String,
    /// OSRM base URL; `route/v1/driving/...` is appended.
    pub osrm_url: String,
    /// Nominatim base URL; `reverse` is appended.
    pub nominatim_url: String,
    pub search_radius_m: u32,
    pub max_hospitals: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Base URL of the hospital finder API as seen by the console.
    pub api_url: String,
    /// Directory backing the console's local key/value store.
    pub session_dir: PathBuf,
}
