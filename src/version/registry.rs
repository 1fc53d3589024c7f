//! Traits for the remote services the check talks to

#[cfg(test)]
use mockall::automock;
use semver::Version;

use crate::version::error::RegistryError;
use crate::version::types::{ComponentInfo, RegistryInfo};

/// Public package index that publishes releases of the registry software
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PackageIndex: Send + Sync {
    /// Fetches the latest published version of a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "oc")
    async fn fetch_published_version(&self, package_name: &str)
    -> Result<Version, RegistryError>;
}

/// A deployed component registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ComponentRegistry: Send + Sync {
    /// Fetches the registry's own version and its component listing
    async fn fetch_info(&self) -> Result<RegistryInfo, RegistryError>;

    /// Fetches the metadata of one component
    ///
    /// # Arguments
    /// * `component_url` - A URL taken from [`RegistryInfo::components`]
    async fn fetch_component(&self, component_url: &str) -> Result<ComponentInfo, RegistryError>;
}
