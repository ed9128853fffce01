//! CLI error types.

use std::path::PathBuf;

use stratos_core::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required setting has no value in any layer.
    #[error("'{field}' is not configured (set it in config.toml, STRATOS_{env} or --{flag})")]
    NotConfigured {
        field: &'static str,
        env: &'static str,
        flag: &'static str,
    },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A describe command found no resource with the given id.
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    #[error("failed to read {}: {source}", path.display())]
    ReadDefinition {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid definition in {}: {source}", path.display())]
    InvalidDefinition {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Turn a generic `NotFound` from the API into one naming the resource.
    pub fn not_found<'a>(
        what: &'static str,
        id: &'a str,
    ) -> impl FnOnce(ApiError) -> CliError + 'a {
        move |error| match error {
            ApiError::NotFound => CliError::NotFound {
                what,
                id: id.to_string(),
            },
            other => CliError::Api(other),
        }
    }
}
