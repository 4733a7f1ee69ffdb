//! Dialoguer-backed implementation of the interactive prompt port.
//!
//! This is the only place the workflows touch a real terminal.  Every
//! dialoguer failure (no TTY, interrupted, closed stdin) maps to the core
//! prompt error so the workflows stay terminal-agnostic.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input};

use plinth_core::application::error::{ApplicationError, CoreResult};
use plinth_core::application::ports::Prompter;
use plinth_core::domain::Product;

pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_error(e: dialoguer::Error) -> ApplicationError {
    ApplicationError::Prompt {
        reason: e.to_string(),
    }
}

impl Prompter for DialoguerPrompter {
    fn select_product(&self, products: &[Product]) -> CoreResult<String> {
        let items: Vec<String> = products
            .iter()
            .map(|p| {
                if p.available {
                    p.title.clone()
                } else {
                    format!("{} (not available)", p.title)
                }
            })
            .collect();

        let index = FuzzySelect::with_theme(&self.theme)
            .with_prompt("Choose a product")
            .items(&items)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        Ok(products[index].slug.clone())
    }

    fn confirm(&self, message: &str) -> CoreResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(prompt_error)
    }

    fn text(&self, message: &str) -> CoreResult<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("value must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(|s| s.trim().to_string())
            .map_err(prompt_error)
    }

    fn notice(&self, message: &str) {
        // One-way line, no input; goes to stdout with the other prompts.
        println!("{message}");
    }
}
