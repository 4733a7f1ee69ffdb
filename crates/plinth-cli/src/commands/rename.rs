//! Implementation of the `plinth rename` command.

use std::process::ExitCode;

use plinth_adapters::JsonMetadataStore;
use plinth_core::application::services::MetadataService;

use crate::{
    cli::RenameArgs, error::CliResult, output::OutputManager, prompts::DialoguerPrompter,
};

pub fn execute(args: RenameArgs, output: OutputManager) -> CliResult<ExitCode> {
    let service = MetadataService::new(
        Box::new(JsonMetadataStore::new()),
        Box::new(DialoguerPrompter::new()),
    );

    let report = service.set_name(&std::env::current_dir()?, args.name);
    output.result_log(&report.log)?;

    Ok(if report.failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
