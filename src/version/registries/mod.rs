//! HTTP implementations of the registry traits

pub mod npm;
pub mod oc;

pub use npm::NpmIndex;
pub use oc::OcRegistry;

use reqwest::Client;

use crate::config::USER_AGENT;
use crate::version::error::RegistryError;

/// Build the HTTP client shared by every registry implementation
pub fn build_client() -> Result<Client, RegistryError> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Check the response status, mapping 404 to `NotFound` and other failures to `InvalidResponse`
pub(crate) fn ensure_success(
    response: reqwest::Response,
    url: &str,
) -> Result<reqwest::Response, RegistryError> {
    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(RegistryError::NotFound(url.to_string()));
    }

    if !status.is_success() {
        tracing::warn!("{} returned status {}", url, status);
        return Err(RegistryError::InvalidResponse(format!(
            "Unexpected status: {}",
            status
        )));
    }

    Ok(response)
}
