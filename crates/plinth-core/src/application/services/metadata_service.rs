//! Rename and set-domain workflows.
//!
//! Both are the same read-check-write shape over the manifest in the
//! current directory: load, compare against the requested value, write back
//! only when it actually changes. The no-op path appends an informational
//! entry and performs zero writes, so repeating a command is always safe.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::application::error::CoreResult;
use crate::application::ports::{MetadataStore, Prompter};
use crate::domain::manifest::MANIFEST_FILE;
use crate::domain::status::code;
use crate::domain::ResultLog;

/// Result of a metadata command: the printable log plus the exit hint.
#[derive(Debug, Clone)]
pub struct CommandReport {
    pub log: ResultLog,
    pub failed: bool,
}

pub struct MetadataService {
    store: Box<dyn MetadataStore>,
    prompter: Box<dyn Prompter>,
}

impl MetadataService {
    pub fn new(store: Box<dyn MetadataStore>, prompter: Box<dyn Prompter>) -> Self {
        Self { store, prompter }
    }

    /// Change the project name in `cwd`'s manifest.
    #[instrument(skip(self))]
    pub fn set_name(&self, cwd: &Path, requested: Option<String>) -> CommandReport {
        self.apply(cwd, requested, "Enter new project name", |manifest, name| {
            let old = manifest.name.clone().unwrap_or_default();
            if old == name {
                return Transition::Unchanged("Project names are the same.".into());
            }
            manifest.name = Some(name.clone());
            Transition::Changed(format!(
                "Project name has been successfully changed from {old} to {name}."
            ))
        })
    }

    /// Change the domain name in `cwd`'s manifest.
    #[instrument(skip(self))]
    pub fn set_domain_name(&self, cwd: &Path, requested: Option<String>) -> CommandReport {
        self.apply(cwd, requested, "Enter domain name", |manifest, name| {
            if manifest.domain_name.as_deref() == Some(name.as_str()) {
                return Transition::Unchanged("Domain names are the same.".into());
            }
            manifest.domain_name = Some(name.clone());
            Transition::Changed(format!(
                "Domain name has been changed to {name} successfully"
            ))
        })
    }

    /// Shared read-check-write driver. `mutate` inspects the loaded
    /// manifest and either edits it in place or declares a no-op.
    fn apply(
        &self,
        cwd: &Path,
        requested: Option<String>,
        prompt: &str,
        mutate: impl FnOnce(&mut crate::domain::Manifest, String) -> Transition,
    ) -> CommandReport {
        let mut log = ResultLog::new();
        match self.run_once(cwd, requested, prompt, mutate, &mut log) {
            Ok(()) => CommandReport { log, failed: false },
            Err(e) => {
                warn!(error = %e, "metadata command failed");
                log.push(e.status_code(), e.to_string());
                CommandReport { log, failed: true }
            }
        }
    }

    fn run_once(
        &self,
        cwd: &Path,
        requested: Option<String>,
        prompt: &str,
        mutate: impl FnOnce(&mut crate::domain::Manifest, String) -> Transition,
        log: &mut ResultLog,
    ) -> CoreResult<()> {
        let value = match requested {
            Some(v) => v,
            None => self.prompter.text(prompt)?,
        };

        let path = cwd.join(MANIFEST_FILE);
        let mut manifest = self.store.load(&path)?;

        match mutate(&mut manifest, value) {
            Transition::Unchanged(message) => {
                log.push(code::SUCCESS, message);
            }
            Transition::Changed(message) => {
                self.store.save(&path, &manifest)?;
                info!("manifest updated");
                log.push(code::SUCCESS, message);
            }
        }
        Ok(())
    }
}

enum Transition {
    Unchanged(String),
    Changed(String),
}

// ── tests ─────────────────────────────────────────────────────────────────────
