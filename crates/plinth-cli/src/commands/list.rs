//! Implementation of the `plinth list` command.

use std::process::ExitCode;

use plinth_adapters::HttpCatalogClient;
use plinth_core::application::ports::CatalogClient;
use plinth_core::domain::sort_catalog;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<ExitCode> {
    let catalog = HttpCatalogClient::new(&config.api_base_url)?;
    let products = sort_catalog(catalog.fetch()?);

    match args.format {
        ListFormat::Table => {
            if products.is_empty() {
                output.warning("No products found in the catalog.")?;
                return Ok(ExitCode::SUCCESS);
            }
            output.header("Available products:")?;
            for product in &products {
                let marker = if product.available {
                    ""
                } else {
                    "  (not available)"
                };
                output.print(&format!("  {} [{}]{}", product.title, product.slug, marker))?;
            }
        }
        ListFormat::List => {
            for product in &products {
                println!("{}", product.slug);
            }
        }
        ListFormat::Json => {
            // Serialise to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&products).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
