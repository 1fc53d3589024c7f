use semver::Version;

// =============================================================================
// Remote endpoints
// =============================================================================

/// Base URL of the npm replication database used to look up releases
pub const DEFAULT_INDEX_URL: &str = "https://skimdb.npmjs.com";

/// Package that ships the registry software
pub const REGISTRY_PACKAGE: &str = "oc";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("oc-migrate/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Migration thresholds
// =============================================================================

/// First registry version without Handlebars 3 support.
/// 0.32.x is the last line that renders both Handlebars 3 and 4.
pub const LEGACY_TEMPLATE_CUTOFF: Version = Version::new(0, 32, 0);

/// Template type reported by components built for Handlebars 3
pub const LEGACY_TEMPLATE_ENGINE: &str = "handlebars";

/// Settings for a single check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Root URL of the registry under inspection
    pub registry_url: String,
    /// Base URL of the package index
    pub index_url: String,
    /// Package whose latest release is compared against the registry
    pub package_name: String,
    /// Registries older than this are scanned for legacy components
    pub cutoff: Version,
}

impl CheckConfig {
    /// Config for `registry_url` with the public index and default thresholds
    pub fn new(registry_url: impl Into<String>) -> Self {
        Self {
            registry_url: registry_url.into(),
            index_url: DEFAULT_INDEX_URL.to_string(),
            package_name: REGISTRY_PACKAGE.to_string(),
            cutoff: LEGACY_TEMPLATE_CUTOFF,
        }
    }

    pub fn with_index_url(mut self, index_url: impl Into<String>) -> Self {
        self.index_url = index_url.into();
        self
    }

    /// Whether a registry at `current` predates the Handlebars 3 removal
    pub fn needs_legacy_scan(&self, current: &Version) -> bool {
        current < &self.cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn check_config_new_uses_public_defaults() {
        let config = CheckConfig::new("https://registry.example.com");

        assert_eq!(
            config,
            CheckConfig {
                registry_url: "https://registry.example.com".to_string(),
                index_url: "https://skimdb.npmjs.com".to_string(),
                package_name: "oc".to_string(),
                cutoff: Version::new(0, 32, 0),
            }
        );
    }

    #[test]
    fn legacy_template_engine_is_handlebars() {
        assert_eq!(LEGACY_TEMPLATE_ENGINE, "handlebars");
    }

    #[test]
    fn check_config_with_index_url_overrides_only_index() {
        let config =
            CheckConfig::new("https://registry.example.com").with_index_url("http://127.0.0.1:9");

        assert_eq!(config.index_url, "http://127.0.0.1:9");
        assert_eq!(config.registry_url, "https://registry.example.com");
    }

    #[rstest]
    #[case("0.31.9", true)]
    #[case("0.32.0-beta.1", true)]
    #[case("0.32.0", false)]
    #[case("1.0.0", false)]
    fn needs_legacy_scan_compares_against_cutoff(#[case] current: &str, #[case] expected: bool) {
        let config = CheckConfig::new("https://registry.example.com");

        assert_eq!(
            config.needs_legacy_scan(&Version::parse(current).unwrap()),
            expected
        );
    }
}
