//! Mock registry and package index served by mockito

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{Value, json};

pub const VIEW_PATH: &str = "/registry/_design/app/_view/byField";

/// Body of the package index view for a single release
pub fn index_body(version: &str) -> String {
    json!({
        "total_rows": 1,
        "offset": 0,
        "rows": [ { "id": "oc", "key": "oc", "value": { "name": "oc", "version": version } } ]
    })
    .to_string()
}

/// Body of a registry root listing the given component paths
pub fn registry_body(server_url: &str, oc_version: &str, component_paths: &[&str]) -> String {
    let components: Vec<String> = component_paths
        .iter()
        .map(|path| format!("{server_url}{path}"))
        .collect();

    json!({
        "href": format!("{server_url}/"),
        "ocVersion": oc_version,
        "type": "oc-registry",
        "components": components
    })
    .to_string()
}

/// Builder for a component `~info` body
pub struct ComponentFixture {
    value: Value,
}

impl ComponentFixture {
    pub fn new(name: &str, version: &str, engine: &str) -> Self {
        Self {
            value: json!({
                "name": name,
                "version": version,
                "oc": { "files": { "template": { "type": engine } } }
            }),
        }
    }

    pub fn author(mut self, author: Value) -> Self {
        self.value["author"] = author;
        self
    }

    pub fn repository(mut self, repository: Value) -> Self {
        self.value["repository"] = repository;
        self
    }

    pub fn oc_version(mut self, version: &str) -> Self {
        self.value["oc"]["version"] = json!(version);
        self
    }

    pub fn state(mut self, state: &str) -> Self {
        self.value["oc"]["state"] = json!(state);
        self
    }

    pub fn body(&self) -> String {
        self.value.to_string()
    }
}

pub async fn mock_index(server: &mut ServerGuard, version: &str) -> Mock {
    server
        .mock("GET", VIEW_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "\"oc\"".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(index_body(version))
        .create_async()
        .await
}

pub async fn mock_registry(
    server: &mut ServerGuard,
    oc_version: &str,
    component_paths: &[&str],
) -> Mock {
    let body = registry_body(&server.url(), oc_version, component_paths);
    server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

pub async fn mock_component(
    server: &mut ServerGuard,
    path: &str,
    component: &ComponentFixture,
) -> Mock {
    server
        .mock("GET", format!("{path}/~info").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(component.body())
        .create_async()
        .await
}

/// Synchronous variants for tests that drive the binary
pub fn mock_index_sync(server: &mut ServerGuard, version: &str) -> Mock {
    server
        .mock("GET", VIEW_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "\"oc\"".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(index_body(version))
        .create()
}

pub fn mock_registry_sync(
    server: &mut ServerGuard,
    oc_version: &str,
    component_paths: &[&str],
) -> Mock {
    let body = registry_body(&server.url(), oc_version, component_paths);
    server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

pub fn mock_component_sync(
    server: &mut ServerGuard,
    path: &str,
    component: &ComponentFixture,
) -> Mock {
    server
        .mock("GET", format!("{path}/~info").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(component.body())
        .create()
}

pub fn new_server() -> ServerGuard {
    Server::new()
}
