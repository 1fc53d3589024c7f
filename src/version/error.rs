use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("network request failed")]
    Network(#[from] reqwest::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid version {value:?}")]
    InvalidVersion {
        value: String,
        source: semver::Error,
    },
}
