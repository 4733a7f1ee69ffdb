//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the workflows need from external systems.
//! The `plinth-adapters` crate provides the production implementations;
//! `plinth-cli` provides the dialoguer-backed [`Prompter`].

use std::path::Path;

use crate::application::error::CoreResult;
use crate::domain::{Manifest, Product};

/// Port for the remote product catalog.
///
/// Implemented by `plinth_adapters::http::HttpCatalogClient`.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogClient: Send + Sync {
    /// Fetch the raw catalog. Sorting is a pure domain concern
    /// ([`crate::domain::sort_catalog`]) and happens in the orchestrator.
    fn fetch(&self) -> CoreResult<Vec<Product>>;
}

/// Port for source-content acquisition.
///
/// Implemented by `plinth_adapters::acquisition::StarterAcquirer`, which
/// dispatches on [`crate::domain::ProductKind`]: local scaffold for the
/// blank sentinel, repository clone for free starters, authenticated
/// archive download for paid products.
///
/// The target directory is erased by the orchestrator before this runs.
/// On failure the partially acquired directory is left as-is; there is no
/// rollback.
#[cfg_attr(test, mockall::automock)]
pub trait Acquirer: Send + Sync {
    fn acquire(&self, product: &Product, project_root: &Path) -> CoreResult<()>;
}

/// Capability interface over one external package-management tool.
#[cfg_attr(test, mockall::automock)]
pub trait PackageManager: Send + Sync {
    /// Identifier persisted into the manifest (`npm`, `yarn`).
    fn name(&self) -> &str;

    /// Spawn the manager's `init` in `cwd` and wait for it.
    ///
    /// Returns the process exit code; a process that could not be started
    /// at all is `ApplicationError::ProcessSpawn`. Exactly one of the two
    /// happens per invocation.
    fn init_project(&self, cwd: &Path) -> CoreResult<i32>;

    /// The tool's own version string (`--version` output, trimmed).
    fn version(&self) -> CoreResult<String>;
}

impl std::fmt::Debug for dyn PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageManager")
            .field("name", &self.name())
            .finish()
    }
}

/// Selects a concrete [`PackageManager`].
///
/// Precedence: explicit CLI name, then the manifest's `packageManager`
/// hint, then the default manager.
#[cfg_attr(test, mockall::automock)]
pub trait PackageManagerRegistry: Send + Sync {
    fn detect<'a>(
        &self,
        explicit: Option<&'a str>,
        manifest_hint: Option<&'a str>,
    ) -> CoreResult<Box<dyn PackageManager>>;
}

/// Port for manifest persistence. Save is read-modify-write: unknown
/// fields already present in the file must survive unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait MetadataStore: Send + Sync {
    fn load(&self, path: &Path) -> CoreResult<Manifest>;
    fn save(&self, path: &Path, manifest: &Manifest) -> CoreResult<()>;
}

/// Fire-and-forget project-created notification.
///
/// The orchestrator logs and discards the error variant; failure here never
/// fails the workflow.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, project_name: &str) -> CoreResult<()>;
}

/// Port for the interactive prompt surface.
///
/// Implemented by the CLI's dialoguer adapter; tests use scripted fakes.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Single-select over catalog entries; returns the chosen slug.
    fn select_product(&self, products: &[Product]) -> CoreResult<String>;

    /// Yes/no confirmation.
    fn confirm(&self, message: &str) -> CoreResult<bool>;

    /// Free-text input, re-asked until non-empty.
    fn text(&self, message: &str) -> CoreResult<String>;

    /// One-way informational line (no input).
    fn notice(&self, message: &str);
}

/// Port for the handful of filesystem checks the workflows make directly.
/// File contents go through [`MetadataStore`]; acquisition backends manage
/// their own I/O.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Remove a directory tree. Idempotent: a missing directory is Ok.
    fn erase_dir(&self, path: &Path) -> CoreResult<()>;
}
