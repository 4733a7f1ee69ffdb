//! Command handlers.  Each submodule exposes one `execute` function that
//! assembles the adapters it needs and drives the matching core service.

pub mod completions;
pub mod init;
pub mod list;
pub mod rename;
pub mod set_domain;
pub mod version;
