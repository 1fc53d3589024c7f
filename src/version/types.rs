//! Response records for the registry and its components

use std::fmt;

use semver::Version;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::LEGACY_TEMPLATE_ENGINE;

/// Registry self-description returned by its root endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryInfo {
    /// Version of the `oc` package the registry runs
    pub oc_version: Version,
    /// URLs of the published components, in the registry's order
    pub components: Vec<String>,
}

/// Component metadata returned by `<component-url>/~info`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub author: Option<Attribution>,
    #[serde(default)]
    pub repository: Option<Attribution>,
    pub oc: OcMetadata,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OcMetadata {
    pub files: ComponentFiles,
    /// Version of `oc` the component was packaged with. Old packagers omit it.
    #[serde(default)]
    pub version: Option<Version>,
    #[serde(default)]
    pub state: LifecycleState,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentFiles {
    pub template: TemplateFile,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateFile {
    #[serde(rename = "type")]
    pub engine: TemplateEngine,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TemplateEngine {
    /// Handlebars 3, the legacy engine
    Handlebars,
    Other(String),
}

impl From<String> for TemplateEngine {
    fn from(value: String) -> Self {
        if value == LEGACY_TEMPLATE_ENGINE {
            TemplateEngine::Handlebars
        } else {
            TemplateEngine::Other(value)
        }
    }
}

/// Publishing state; a missing or `null` state means active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum LifecycleState {
    #[default]
    Active,
    Deprecated,
}

impl From<Option<String>> for LifecycleState {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("deprecated") => LifecycleState::Deprecated,
            _ => LifecycleState::Active,
        }
    }
}

/// `author` or `repository` as found in a component's package.json.
///
/// Both fields may be written either as a plain string or as an object
/// (`{ "name": ..., "email": ... }`, `{ "type": "git", "url": ... }`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Attribution {
    Plain(String),
    Structured(Map<String, Value>),
}

impl Attribution {
    /// Text form of the attribution; objects are rendered as compact JSON.
    pub fn render(&self) -> String {
        match self {
            Attribution::Plain(text) => text.clone(),
            Attribution::Structured(fields) => Value::Object(fields.clone()).to_string(),
        }
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl ComponentInfo {
    pub fn is_deprecated(&self) -> bool {
        self.oc.state == LifecycleState::Deprecated
    }

    /// Whether this component still needs to be republished with Handlebars 4
    /// before the registry can move to `cutoff` or later.
    ///
    /// A component is legacy when it uses the Handlebars template engine and
    /// was packaged by an `oc` older than `cutoff` (or by one too old to record
    /// its version). Deprecated components are ignored.
    pub fn uses_legacy_template(&self, cutoff: &Version) -> bool {
        let packaged_before_cutoff = match &self.oc.version {
            Some(version) => version < cutoff,
            None => true,
        };

        self.oc.files.template.engine == TemplateEngine::Handlebars
            && packaged_before_cutoff
            && !self.is_deprecated()
    }
}
