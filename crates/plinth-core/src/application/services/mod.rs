//! Use-case orchestration.
//!
//! - [`InitService`]: the project-initialization pipeline.
//! - [`NamingResolver`]: interactive collision negotiation.
//! - [`MetadataService`]: rename / set-domain read-check-write workflows.

pub mod init_service;
pub mod metadata_service;
pub mod naming_resolver;

pub use init_service::{InitReport, InitService, Outcome, Stage};
pub use metadata_service::{CommandReport, MetadataService};
pub use naming_resolver::{NamingResolver, Resolution};

/// Anti-loop guard: interactive prompts are reachable at most this many
/// times per invocation. Exceeding the bound ends the run with a
/// see-other notice and a success exit, not an error.
pub const MAX_PROMPT_ATTEMPTS: u8 = 10;

// ── shared test doubles ───────────────────────────────────────────────────────
