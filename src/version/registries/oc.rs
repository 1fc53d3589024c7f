//! OpenComponents registry client

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::registries::ensure_success;
use crate::version::registry::ComponentRegistry;
use crate::version::semver::parse_version;
use crate::version::types::{ComponentInfo, RegistryInfo};

/// Path appended to a component URL to get its metadata
const INFO_SUFFIX: &str = "/~info";

/// Response from the registry root
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistryResponse {
    oc_version: String,
    #[serde(default)]
    components: Vec<String>,
}

/// HTTP client for one deployed registry
pub struct OcRegistry {
    client: Client,
    base_url: String,
}

impl OcRegistry {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    fn info_url(component_url: &str) -> String {
        format!("{}{}", component_url.trim_end_matches('/'), INFO_SUFFIX)
    }
}

#[async_trait::async_trait]
impl ComponentRegistry for OcRegistry {
    async fn fetch_info(&self) -> Result<RegistryInfo, RegistryError> {
        debug!("Fetching registry info: {}", self.base_url);

        let response = self.client.get(&self.base_url).send().await?;
        let response = ensure_success(response, &self.base_url)?;

        let body: RegistryResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse registry response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(RegistryInfo {
            oc_version: parse_version(&body.oc_version)?,
            components: body.components,
        })
    }

    async fn fetch_component(&self, component_url: &str) -> Result<ComponentInfo, RegistryError> {
        let url = Self::info_url(component_url);
        debug!("Fetching component info: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, &url)?;

        response.json().await.map_err(|e| {
            warn!("Failed to parse component info from {}: {}", url, e);
            RegistryError::InvalidResponse(e.to_string())
        })
    }
}
