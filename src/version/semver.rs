use semver::Version;

use crate::version::error::RegistryError;

/// Most significant field in which two versions differ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionDiff {
    Major,
    Minor,
    Patch,
    Prerelease,
}

/// Parse a version string strictly (`major.minor.patch[-pre][+build]`).
///
/// Unlike package manifests, registries always report full versions, so
/// partial versions such as "1.2" are rejected. Surrounding whitespace is
/// rejected too, matching how `oc.version` is deserialized.
pub fn parse_version(value: &str) -> Result<Version, RegistryError> {
    Version::parse(value).map_err(|source| RegistryError::InvalidVersion {
        value: value.to_string(),
        source,
    })
}

/// Classify the difference between two versions.
///
/// Returns `None` when the versions have the same precedence (build metadata
/// is ignored). The comparison is symmetric.
///
/// Any difference involving a pre-release is `Prerelease`, like the
/// `premajor`/`preminor`/`prepatch` kinds of node-semver: moving onto or off a
/// pre-release is never graded as a plain release bump.
///
/// Examples:
/// - "1.2.3" vs "2.0.0" -> Major
/// - "1.2.3" vs "1.3.0" -> Minor
/// - "1.2.3" vs "1.2.4" -> Patch
/// - "1.2.3-beta.1" vs "1.2.3" -> Prerelease
/// - "1.2.3" vs "1.2.4-rc.1" -> Prerelease
pub fn diff_kind(a: &Version, b: &Version) -> Option<VersionDiff> {
    let release = if a.major != b.major {
        Some(VersionDiff::Major)
    } else if a.minor != b.minor {
        Some(VersionDiff::Minor)
    } else if a.patch != b.patch {
        Some(VersionDiff::Patch)
    } else {
        None
    };
    let has_prerelease = !a.pre.is_empty() || !b.pre.is_empty();

    match release {
        Some(_) if has_prerelease => Some(VersionDiff::Prerelease),
        Some(kind) => Some(kind),
        None if a.pre != b.pre => Some(VersionDiff::Prerelease),
        None => None,
    }
}
