//! The project manifest (`package.json`).
//!
//! The store contract is read-modify-write: fields Plinth does not know
//! about must survive a load/save cycle unchanged, so everything unknown is
//! captured in the flattened `extra` map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// File name of the manifest inside a project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Project metadata persisted in the manifest file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "packageManager", skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<String>,

    #[serde(rename = "domainName", skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    /// Pass-through fields (version, scripts, dependencies, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// A fresh manifest for a newly scaffolded project.
    pub fn for_project(name: impl Into<String>, package_manager: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            package_manager: Some(package_manager.into()),
            ..Self::default()
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_round_trip_unchanged() {
        let source = json!({
            "name": "my-project",
            "version": "1.2.3",
            "scripts": { "start": "node index.js" },
            "dependencies": { "left-pad": "^1.0.0" }
        });

        let mut manifest: Manifest = serde_json::from_value(source).unwrap();
        manifest.domain_name = Some("example.com".into());

        let back = serde_json::to_value(&manifest).unwrap();
        assert_eq!(back["version"], "1.2.3");
        assert_eq!(back["scripts"]["start"], "node index.js");
        assert_eq!(back["dependencies"]["left-pad"], "^1.0.0");
        assert_eq!(back["domainName"], "example.com");
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let manifest = Manifest::for_project("demo", "npm");
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["name"], "demo");
        assert_eq!(value["packageManager"], "npm");
        assert!(value.get("domainName").is_none());
    }

    #[test]
    fn package_manager_uses_camel_case_key() {
        let manifest: Manifest =
            serde_json::from_value(json!({ "packageManager": "yarn" })).unwrap();
        assert_eq!(manifest.package_manager.as_deref(), Some("yarn"));
    }
}
