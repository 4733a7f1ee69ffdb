//! Source-content acquisition backends.
//!
//! [`StarterAcquirer`] dispatches on the product kind:
//!
//! - blank sentinel: create an empty project directory locally
//! - free starter (no backend id): clone the public starter repository
//! - paid product: authenticated tar.gz download + extraction
//!
//! The orchestrator erases the target directory before calling in; on
//! failure the partially written directory is left as-is.

pub mod archive;
pub mod git;

use std::path::Path;

use tracing::info;

use plinth_core::application::error::{ApplicationError, CoreResult};
use plinth_core::application::ports::Acquirer;
use plinth_core::domain::{Product, ProductKind};

/// Production [`Acquirer`].
pub struct StarterAcquirer {
    api_base_url: String,
    starters_git_base: String,
    auth_token: Option<String>,
}

impl StarterAcquirer {
    pub fn new(
        api_base_url: impl Into<String>,
        starters_git_base: impl Into<String>,
        auth_token: Option<String>,
    ) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            starters_git_base: starters_git_base.into(),
            auth_token,
        }
    }
}

impl Acquirer for StarterAcquirer {
    fn acquire(&self, product: &Product, project_root: &Path) -> CoreResult<()> {
        match product.kind() {
            ProductKind::Blank => {
                std::fs::create_dir_all(project_root).map_err(|e| {
                    ApplicationError::Filesystem {
                        path: project_root.to_path_buf(),
                        reason: format!("Failed to create directory: {e}"),
                    }
                })?;
                info!(root = %project_root.display(), "empty project directory created");
                Ok(())
            }
            ProductKind::Free => {
                let url = format!("{}/{}.git", self.starters_git_base, product.slug);
                git::clone_starter(&url, &product.slug, project_root)
            }
            ProductKind::Paid => archive::download_and_extract(
                &self.api_base_url,
                &product.slug,
                self.auth_token.as_deref(),
                project_root,
            ),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn blank_product_yields_an_empty_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-app");

        let acquirer = StarterAcquirer::new("http://unused", "http://unused", None);
        acquirer.acquire(&Product::blank(), &root).unwrap();

        assert!(root.is_dir());
        assert_eq!(std::fs::read_dir(&root).unwrap().count(), 0);
    }
}
