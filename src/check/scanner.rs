//! Scan for components that still depend on the legacy template engine

use semver::Version;
use tracing::{debug, info};

use crate::error::{CheckError, Endpoint};
use crate::version::registry::ComponentRegistry;
use crate::version::types::ComponentInfo;

/// Fetch every component advertised by the registry and collect those that
/// still render with Handlebars 3.
///
/// Components are fetched one at a time, in the order the registry lists them,
/// and the first failing fetch aborts the scan. The returned list keeps the
/// registry's order.
pub async fn scan_legacy_components<R: ComponentRegistry + ?Sized>(
    registry: &R,
    cutoff: &Version,
) -> Result<Vec<ComponentInfo>, CheckError> {
    let listing = registry
        .fetch_info()
        .await
        .map_err(CheckError::connectivity(Endpoint::Registry))?;

    if listing.components.is_empty() {
        debug!("Registry has no components");
        return Ok(Vec::new());
    }

    info!("Scanning {} components", listing.components.len());

    let mut flagged = Vec::new();
    for component_url in listing.components {
        let component = registry
            .fetch_component(&component_url)
            .await
            .map_err(CheckError::connectivity(Endpoint::Component(
                component_url.clone(),
            )))?;

        if component.uses_legacy_template(cutoff) {
            debug!("{}@{} uses Handlebars 3", component.name, component.version);
            flagged.push(component);
        }
    }

    Ok(flagged)
}
