//! Application layer: errors, ports, and the workflow services.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, CoreResult, ErrorCategory};
pub use services::{
    CommandReport, InitReport, InitService, MAX_PROMPT_ATTEMPTS, MetadataService, NamingResolver,
    Outcome, Resolution, Stage,
};
