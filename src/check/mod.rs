//! Upgrade check workflow
//!
//! Fetches the latest published release and the registry's version
//! concurrently, assesses the upgrade, and scans for Handlebars 3 components
//! when the registry predates their removal.
//!
//! # Modules
//!
//! - [`scanner`]: Sequential scan of the registry's components
//! - [`report`]: Colored status lines for the result

pub mod report;
pub mod scanner;

use semver::Version;
use tracing::{debug, info};

use crate::config::CheckConfig;
use crate::error::{CheckError, Endpoint};
use crate::version::checker::{UpgradeAssessment, assess_upgrade};
use crate::version::registry::{ComponentRegistry, PackageIndex};
use crate::version::types::ComponentInfo;

pub use scanner::scan_legacy_components;

/// Outcome of the legacy template scan
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyScan {
    /// Registry is current, or already past the cutoff
    Skipped,
    /// Components that still need republishing, in registry order
    Completed(Vec<ComponentInfo>),
}

/// Result of a successful check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub latest: Version,
    pub current: Version,
    pub assessment: UpgradeAssessment,
    pub legacy_scan: LegacyScan,
}

/// Latest published version of `package_name`
pub async fn fetch_published_version<I: PackageIndex + ?Sized>(
    index: &I,
    package_name: &str,
) -> Result<Version, CheckError> {
    index
        .fetch_published_version(package_name)
        .await
        .map_err(CheckError::connectivity(Endpoint::PackageIndex))
}

/// Version the registry reports for itself
pub async fn fetch_registry_version<R: ComponentRegistry + ?Sized>(
    registry: &R,
) -> Result<Version, CheckError> {
    registry
        .fetch_info()
        .await
        .map(|info| info.oc_version)
        .map_err(CheckError::connectivity(Endpoint::Registry))
}

/// Fetch `(latest, current)` concurrently, failing on the first error
pub async fn fetch_versions<I, R>(
    index: &I,
    registry: &R,
    package_name: &str,
) -> Result<(Version, Version), CheckError>
where
    I: PackageIndex + ?Sized,
    R: ComponentRegistry + ?Sized,
{
    tokio::try_join!(
        fetch_published_version(index, package_name),
        fetch_registry_version(registry)
    )
}

/// Run the whole check against `index` and `registry`
pub async fn run_check<I, R>(
    index: &I,
    registry: &R,
    config: &CheckConfig,
) -> Result<CheckReport, CheckError>
where
    I: PackageIndex + ?Sized,
    R: ComponentRegistry + ?Sized,
{
    let (latest, current) = fetch_versions(index, registry, &config.package_name).await?;
    info!("Latest {} is {}, registry runs {}", config.package_name, latest, current);

    let assessment = assess_upgrade(&latest, &current);
    debug!("Upgrade assessment: {:?}", assessment);

    let upgrading = matches!(
        assessment,
        UpgradeAssessment::SafeUpgrade | UpgradeAssessment::RiskyUpgrade
    );
    let legacy_scan = if upgrading && config.needs_legacy_scan(&current) {
        LegacyScan::Completed(scan_legacy_components(registry, &config.cutoff).await?)
    } else {
        LegacyScan::Skipped
    };

    Ok(CheckReport {
        latest,
        current,
        assessment,
        legacy_scan,
    })
}
