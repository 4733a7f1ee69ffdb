//! Domain layer: catalog products, the result log, and the project manifest.
//!
//! Everything in here is pure data and pure functions. I/O lives behind the
//! ports in `crate::application::ports`.

pub mod manifest;
pub mod product;
pub mod status;

pub use manifest::{MANIFEST_FILE, Manifest};
pub use product::{BLANK_SLUG, Product, ProductKind, sort_catalog};
pub use status::{ResultEntry, ResultLog};

/// Parsed invocation options for the init workflow.
///
/// Created once from the CLI arguments. The workflow records the resolved
/// package manager back into `package_manager` so later stages agree on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowArgs {
    /// Explicit project name; when absent the workflow prompts or falls back
    /// to the product slug.
    pub project_name: Option<String>,
    /// Force the empty local scaffold, skipping the catalog entirely.
    pub blank: bool,
    /// Explicit package manager name (`npm`, `yarn`).
    pub package_manager: Option<String>,
}
