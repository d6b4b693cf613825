use thiserror::Error;

/// Errors returned by the OSM service clients.
#[derive(Debug, Error)]
pub enum OsmError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured base URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// OSRM answered with a non-`Ok` code.
    #[error("routing failed with code {code}: {message}")]
    Routing { code: String, message: String },

    /// OSRM answered `Ok` but without any route.
    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },
}
