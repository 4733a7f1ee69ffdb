//! Implementation of the `plinth init` command.
//!
//! This is the assembly point: every port gets its production adapter here
//! and nowhere else.  The pipeline itself never fails the process directly;
//! it hands back a report whose log is printed in order, and only the
//! `Failed` outcome maps to a non-zero exit.

use std::process::ExitCode;

use plinth_adapters::{
    HttpCatalogClient, HttpNotifier, JsonMetadataStore, StarterAcquirer,
    SystemPackageManagerRegistry, filesystem::LocalFilesystem,
};
use plinth_core::application::services::{InitService, Outcome};
use plinth_core::domain::WorkflowArgs;

use crate::{
    cli::InitArgs, config::AppConfig, error::CliResult, output::OutputManager,
    prompts::DialoguerPrompter,
};

pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<ExitCode> {
    let catalog = HttpCatalogClient::new(&config.api_base_url)?;
    let acquirer = StarterAcquirer::new(
        &config.api_base_url,
        &config.starters_git_base,
        config.auth_token.clone(),
    );
    let notifier = HttpNotifier::new(&config.api_base_url, config.auth_token.clone())?;

    let service = InitService::new(
        Box::new(catalog),
        Box::new(acquirer),
        Box::new(SystemPackageManagerRegistry::new()),
        Box::new(JsonMetadataStore::new()),
        Box::new(notifier),
        Box::new(DialoguerPrompter::new()),
        Box::new(LocalFilesystem::new()),
        config.pages_base_url.clone(),
    );

    let workflow_args = WorkflowArgs {
        project_name: args.name,
        blank: args.blank,
        package_manager: args.package_manager,
    };
    let report = service.run(workflow_args, std::env::current_dir()?);

    output.result_log(&report.log)?;

    Ok(match report.outcome {
        Outcome::Failed => ExitCode::from(1),
        // Declined and SeeOther are clean endings, not errors.
        Outcome::Completed | Outcome::Declined | Outcome::SeeOther => ExitCode::SUCCESS,
    })
}
