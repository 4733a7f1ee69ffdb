//! Plinth Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Plinth
//! project initializer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           plinth-cli (CLI)              │
//! │     (Prompts, output, assembly)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (InitService, MetadataService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Catalog, Acquirer, Store, Notifier)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     plinth-adapters (Infrastructure)    │
//! │  (HTTP catalog, git/archive backends)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │    (Product, Manifest, ResultLog)       │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plinth_core::prelude::*;
//!
//! // Assemble the pipeline with injected adapters, then run it.
//! let service = InitService::new(
//!     catalog, acquirer, managers, metadata, notifier, prompter, filesystem,
//!     "https://pages.example.com",
//! );
//! let report = service.run(WorkflowArgs::default(), std::env::current_dir()?);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::error::{ApplicationError, CoreResult, ErrorCategory};
    pub use crate::application::ports::{
        Acquirer, CatalogClient, Filesystem, MetadataStore, Notifier, PackageManager,
        PackageManagerRegistry, Prompter,
    };
    pub use crate::application::services::{
        CommandReport, InitReport, InitService, MAX_PROMPT_ATTEMPTS, MetadataService,
        NamingResolver, Outcome, Resolution, Stage,
    };
    pub use crate::domain::{
        BLANK_SLUG, MANIFEST_FILE, Manifest, Product, ProductKind, ResultEntry, ResultLog,
        WorkflowArgs, sort_catalog,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
