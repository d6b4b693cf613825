use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a working
/// development config pointed at the public OSM services.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("AMBUROUTE_ENV", "development"))?;
    let bind_addr = parse_addr("AMBUROUTE_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("AMBUROUTE_LOG_LEVEL", "info");

    let overpass_url = or_default(
        "AMBUROUTE_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let osrm_url = or_default("AMBUROUTE_OSRM_URL", "https://router.project-osrm.org");
    let nominatim_url = or_default(
        "AMBUROUTE_NOMINATIM_URL",
        "https://nominatim.openstreetmap.org",
    );

    let search_radius_m = parse_u32("AMBUROUTE_SEARCH_RADIUS_M", "8000")?;
    let max_hospitals = parse_usize("AMBUROUTE_MAX_HOSPITALS", "5")?;
    if max_hospitals == 0 {
        return Err(invalid(
            "AMBUROUTE_MAX_HOSPITALS",
            "must be at least 1".to_string(),
        ));
    }
    let request_timeout_secs = parse_u64("AMBUROUTE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("AMBUROUTE_USER_AGENT", "amburoute/0.1 (emergency-routing)");

    let api_url = or_default("AMBUROUTE_API_URL", "http://localhost:5000/api");
    let session_dir = PathBuf::from(or_default("AMBUROUTE_SESSION_DIR", "./.amburoute"));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        overpass_url,
        osrm_url,
        nominatim_url,
        search_radius_m,
        max_hospitals,
        request_timeout_secs,
        user_agent,
        api_url,
        session_dir,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "AMBUROUTE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
