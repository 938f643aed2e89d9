use thiserror::Error;

use crate::platform::Platform;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("invalid {platform} snapshot: {source}")]
    Snapshot {
        platform: Platform,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while loading configuration or the profile-links file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read profiles file {path}: {source}")]
    ProfilesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profiles file: {0}")]
    ProfilesFileParse(#[from] serde_yaml::Error),

    #[error("profiles validation error: {0}")]
    Validation(String),
}
