use std::fmt;

use thiserror::Error;

use crate::version::error::RegistryError;

/// Usage line printed when the registry URL is missing
pub const USAGE: &str = "Usage: oc-migrate https://your-registry-url.domain.com";

/// Remote endpoint a failed request was sent to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    PackageIndex,
    Registry,
    Component(String),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::PackageIndex => f.write_str("package index"),
            Endpoint::Registry => f.write_str("registry"),
            Endpoint::Component(url) => write!(f, "component {}", url),
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{0}")]
    Usage(String),

    #[error("Unable to connect to {endpoint}")]
    Connectivity {
        endpoint: Endpoint,
        source: RegistryError,
    },
}

impl CheckError {
    pub fn usage() -> Self {
        CheckError::Usage(USAGE.to_string())
    }

    pub fn connectivity(endpoint: Endpoint) -> impl FnOnce(RegistryError) -> Self {
        move |source| CheckError::Connectivity { endpoint, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_error_names_endpoint_and_keeps_cause() {
        let err = CheckError::connectivity(Endpoint::Component(
            "http://registry.local/header".to_string(),
        ))(RegistryError::NotFound("http://registry.local/header/~info".to_string()));

        assert_eq!(
            err.to_string(),
            "Unable to connect to component http://registry.local/header"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(
            source.to_string(),
            "not found: http://registry.local/header/~info"
        );
    }

    #[test]
    fn usage_error_displays_usage_line() {
        assert_eq!(
            CheckError::usage().to_string(),
            "Usage: oc-migrate https://your-registry-url.domain.com"
        );
    }
}
