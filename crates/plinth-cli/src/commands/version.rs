//! Implementation of the `plinth version` command.

use std::process::ExitCode;

use plinth_adapters::{JsonMetadataStore, SystemPackageManagerRegistry};
use plinth_core::application::ports::{MetadataStore, PackageManagerRegistry};
use plinth_core::domain::MANIFEST_FILE;

use crate::{error::CliResult, output::OutputManager};

/// Report the version of the package manager the current directory resolves
/// to: the manifest's `packageManager` hint when one is present, the default
/// manager otherwise.
pub fn execute(output: OutputManager) -> CliResult<ExitCode> {
    let cwd = std::env::current_dir()?;
    let hint = JsonMetadataStore::new()
        .load(&cwd.join(MANIFEST_FILE))
        .ok()
        .and_then(|manifest| manifest.package_manager);

    let manager = SystemPackageManagerRegistry::new().detect(None, hint.as_deref())?;
    let version = manager.version()?;
    output.print(&format!("{} {version}", manager.name()))?;

    Ok(ExitCode::SUCCESS)
}
