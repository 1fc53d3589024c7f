//! npm package index lookup through the CouchDB `byField` view

use reqwest::Client;
use semver::Version;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::registries::ensure_success;
use crate::version::registry::PackageIndex;
use crate::version::semver::parse_version;

/// Path of the view that indexes package documents by name
const BY_FIELD_VIEW_PATH: &str = "/registry/_design/app/_view/byField";

/// Response from the `byField` view
#[derive(Debug, Deserialize)]
struct ViewResponse {
    rows: Vec<ViewRow>,
}

#[derive(Debug, Deserialize)]
struct ViewRow {
    value: ViewValue,
}

#[derive(Debug, Deserialize)]
struct ViewValue {
    version: String,
}

/// Package index backed by the npm replication database
pub struct NpmIndex {
    client: Client,
    base_url: String,
}

impl NpmIndex {
    /// Creates a new NpmIndex with a custom base URL
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The view is keyed by JSON strings, so the name is quoted before encoding
    fn view_url(&self, package_name: &str) -> String {
        let key = format!("\"{}\"", package_name);
        format!(
            "{}{}?key={}",
            self.base_url,
            BY_FIELD_VIEW_PATH,
            urlencoding::encode(&key)
        )
    }
}

#[async_trait::async_trait]
impl PackageIndex for NpmIndex {
    async fn fetch_published_version(
        &self,
        package_name: &str,
    ) -> Result<Version, RegistryError> {
        let url = self.view_url(package_name);
        debug!("Fetching published version: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, &url)?;

        let view: ViewResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse package index response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let Some(row) = view.rows.into_iter().next() else {
            return Err(RegistryError::NotFound(package_name.to_string()));
        };

        parse_version(&row.value.version)
    }
}
