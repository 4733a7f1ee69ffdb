//! Infrastructure adapters for Plinth.
//!
//! This crate implements the ports defined in `plinth_core::application::ports`.
//! It contains all external dependencies and I/O operations: the HTTP catalog
//! and notification clients, the acquisition backends (local scaffold, git
//! clone, archive download), manifest persistence, and package-manager
//! process control.

pub mod acquisition;
pub mod filesystem;
pub mod http;
pub mod metadata;
pub mod package_manager;

// Re-export commonly used adapters
pub use acquisition::StarterAcquirer;
pub use filesystem::LocalFilesystem;
pub use http::{HttpCatalogClient, HttpNotifier};
pub use metadata::JsonMetadataStore;
pub use package_manager::SystemPackageManagerRegistry;
