//! Upgrade risk assessment between the registry's version and the latest release

use semver::Version;

use crate::version::semver::{VersionDiff, diff_kind};

/// How risky it is to move the registry from its current version to the latest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeAssessment {
    /// Registry already runs the latest version
    AlreadyCurrent,
    /// Registry runs a version newer than the latest published release
    AheadOfLatest,
    /// Patch upgrade, or minor upgrade past 1.0.0
    SafeUpgrade,
    /// Anything else; needs a manual changelog review
    RiskyUpgrade,
}

/// Assess the upgrade from `current` to `latest`.
///
/// Minor bumps before 1.0.0 are risky because pre-1.0 releases may break on
/// any change. Moves onto or off a pre-release are risky as well. A registry
/// newer than `latest` has nothing to upgrade to.
pub fn assess_upgrade(latest: &Version, current: &Version) -> UpgradeAssessment {
    match diff_kind(latest, current) {
        None => UpgradeAssessment::AlreadyCurrent,
        Some(_) if current > latest => UpgradeAssessment::AheadOfLatest,
        Some(VersionDiff::Patch) => UpgradeAssessment::SafeUpgrade,
        Some(VersionDiff::Minor) if latest.major > 0 => UpgradeAssessment::SafeUpgrade,
        Some(_) => UpgradeAssessment::RiskyUpgrade,
    }
}
