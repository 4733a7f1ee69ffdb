//! Manifest persistence as pretty-printed JSON.

use std::path::Path;

use tracing::debug;

use plinth_core::application::error::{ApplicationError, CoreResult};
use plinth_core::application::ports::MetadataStore;
use plinth_core::domain::{MANIFEST_FILE, Manifest};

/// Reads and writes `package.json`. Unknown fields survive a load/save
/// cycle via the manifest's flattened pass-through map.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMetadataStore;

impl JsonMetadataStore {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataStore for JsonMetadataStore {
    fn load(&self, path: &Path) -> CoreResult<Manifest> {
        debug!(path = %path.display(), "loading manifest");
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::Deserialization {
                file: MANIFEST_FILE.into(),
                reason: e.to_string(),
            }
        })?;
        serde_json::from_str(&content).map_err(|e| ApplicationError::Deserialization {
            file: MANIFEST_FILE.into(),
            reason: e.to_string(),
        })
    }

    fn save(&self, path: &Path, manifest: &Manifest) -> CoreResult<()> {
        debug!(path = %path.display(), "saving manifest");
        let mut content =
            serde_json::to_string_pretty(manifest).map_err(|e| ApplicationError::Serialization {
                file: MANIFEST_FILE.into(),
                reason: e.to_string(),
            })?;
        content.push('\n');
        std::fs::write(path, content).map_err(|e| ApplicationError::Serialization {
            file: MANIFEST_FILE.into(),
            reason: e.to_string(),
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_preserves_unknown_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        std::fs::write(
            &path,
            r#"{ "name": "app", "version": "0.1.0", "scripts": { "start": "node ." } }"#,
        )
        .unwrap();

        let store = JsonMetadataStore::new();
        let mut manifest = store.load(&path).unwrap();
        manifest.name = Some("renamed".into());
        store.save(&path, &manifest).unwrap();

        let back: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back["name"], "renamed");
        assert_eq!(back["version"], "0.1.0");
        assert_eq!(back["scripts"]["start"], "node .");
    }

    #[test]
    fn missing_file_reports_a_read_problem() {
        let temp = TempDir::new().unwrap();
        let store = JsonMetadataStore::new();

        let err = store.load(&temp.path().join(MANIFEST_FILE)).unwrap_err();
        assert_eq!(err.to_string(), "Problem with reading package.json");
    }

    #[test]
    fn invalid_json_reports_a_read_problem() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonMetadataStore::new();
        let err = store.load(&path).unwrap_err();
        assert_eq!(err.to_string(), "Problem with reading package.json");
    }

    #[test]
    fn saved_file_ends_with_a_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);

        let store = JsonMetadataStore::new();
        store
            .save(&path, &Manifest::for_project("app", "npm"))
            .unwrap();

        assert!(std::fs::read_to_string(&path).unwrap().ends_with('\n'));
    }
}
