//! Init orchestrator - the project-initialization pipeline.
//!
//! A strict sequence of stages, each suspending on user input, the
//! network, the filesystem, or a spawned process:
//!
//! `Idle → SelectingProduct → ResolvingName → Acquiring →
//! InitializingManifest → PersistingMetadata → Notifying → Done`
//!
//! Failure at any stage short-circuits the rest but preserves the result
//! log accumulated so far; the log is always handed back for printing.
//! Notification failures are the one exception: they are logged and
//! swallowed, since the project is already materialized on disk.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::application::error::CoreResult;
use crate::application::ports::{
    Acquirer, CatalogClient, Filesystem, MetadataStore, Notifier, PackageManagerRegistry, Prompter,
};
use crate::application::services::{MAX_PROMPT_ATTEMPTS, NamingResolver, Resolution};
use crate::domain::manifest::MANIFEST_FILE;
use crate::domain::status::code;
use crate::domain::{BLANK_SLUG, Manifest, Product, ResultLog, WorkflowArgs, sort_catalog};

/// Pipeline stages, in execution order. `Failed` is reachable from every
/// non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    SelectingProduct,
    ResolvingName,
    Acquiring,
    InitializingManifest,
    PersistingMetadata,
    Notifying,
    Done,
    Failed,
}

/// How the run ended. Only `Failed` maps to a non-zero process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The project was materialized and reported.
    Completed,
    /// The user declined to initialize into an existing directory. Not an
    /// error: the run ends with a single informational entry.
    Declined,
    /// The prompt circuit breaker tripped. The CLI exits 0 after printing
    /// the see-other notice.
    SeeOther,
    /// A stage failed; the log carries the partial progress.
    Failed,
}

/// Final report: outcome, the full result log, and the stage trace.
#[derive(Debug, Clone)]
pub struct InitReport {
    pub outcome: Outcome,
    pub log: ResultLog,
    pub visited: Vec<Stage>,
}

/// Mutable session state, owned exclusively by the orchestrator.
struct WorkflowState {
    args: WorkflowArgs,
    cwd: PathBuf,
    project_name: String,
    project_root: PathBuf,
    log: ResultLog,
    prompt_count: u8,
    visited: Vec<Stage>,
}

impl WorkflowState {
    fn new(args: WorkflowArgs, cwd: PathBuf) -> Self {
        Self {
            args,
            cwd,
            project_name: String::new(),
            project_root: PathBuf::new(),
            log: ResultLog::new(),
            prompt_count: 0,
            visited: vec![Stage::Idle],
        }
    }

    fn enter(&mut self, stage: Stage) {
        debug!(?stage, "stage transition");
        self.visited.push(stage);
    }

    /// `project_root` is always `cwd.join(project_name)`; recomputed on
    /// every name change.
    fn set_project_name(&mut self, name: String) {
        self.project_root = self.cwd.join(&name);
        self.project_name = name;
    }
}

enum Selection {
    Product(Product),
    CircuitBroken,
}

/// The pipeline controller. All collaborators are injected; the "default"
/// wiring lives at the CLI assembly point only.
pub struct InitService {
    catalog: Box<dyn CatalogClient>,
    acquirer: Box<dyn Acquirer>,
    managers: Box<dyn PackageManagerRegistry>,
    metadata: Box<dyn MetadataStore>,
    notifier: Box<dyn Notifier>,
    prompter: Box<dyn Prompter>,
    filesystem: Box<dyn Filesystem>,
    /// Base URL of the public product pages, for the "not available" notice.
    pages_base_url: String,
}

impl InitService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        catalog: Box<dyn CatalogClient>,
        acquirer: Box<dyn Acquirer>,
        managers: Box<dyn PackageManagerRegistry>,
        metadata: Box<dyn MetadataStore>,
        notifier: Box<dyn Notifier>,
        prompter: Box<dyn Prompter>,
        filesystem: Box<dyn Filesystem>,
        pages_base_url: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            acquirer,
            managers,
            metadata,
            notifier,
            prompter,
            filesystem,
            pages_base_url: pages_base_url.into(),
        }
    }

    /// Run the whole pipeline. Never panics, never leaks an error: every
    /// failure ends up as a result-log entry on a `Failed` report.
    #[instrument(skip_all, fields(blank = args.blank))]
    pub fn run(&self, args: WorkflowArgs, cwd: PathBuf) -> InitReport {
        let mut state = WorkflowState::new(args, cwd);

        let outcome = match self.drive(&mut state) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "init workflow failed");
                state.log.push(e.status_code(), e.to_string());
                state.enter(Stage::Failed);
                Outcome::Failed
            }
        };

        InitReport {
            outcome,
            log: state.log,
            visited: state.visited,
        }
    }

    /// Advance through the stages. Failures that already produced their own
    /// log entry return `Ok(Outcome::Failed)`; un-logged errors bubble up to
    /// [`Self::run`], which appends exactly one entry for them.
    fn drive(&self, state: &mut WorkflowState) -> CoreResult<Outcome> {
        state.enter(Stage::SelectingProduct);
        let product = match self.select_product(state)? {
            Selection::Product(p) => p,
            Selection::CircuitBroken => {
                state.log.push(
                    code::SEE_OTHER,
                    "Please run `plinth list` to see available products.",
                );
                return Ok(Outcome::SeeOther);
            }
        };
        info!(slug = %product.slug, "product selected");

        state.enter(Stage::ResolvingName);
        let requested = match state.args.project_name.clone() {
            Some(name) => name,
            None if product.is_blank() => self.prompter.text("Enter project name")?,
            None => product.slug.clone(),
        };
        let resolver = NamingResolver::new(&*self.filesystem, &*self.prompter);
        match resolver.resolve(&state.cwd, requested, &mut state.prompt_count)? {
            Resolution::Accepted { name, .. } => state.set_project_name(name),
            Resolution::CircuitBroken => {
                state.log.push(
                    code::SEE_OTHER,
                    "Please run `plinth list` to see available products.",
                );
                return Ok(Outcome::SeeOther);
            }
        }

        // The resolved root may still exist if the user declined to rename.
        // Ask once before touching anything; declining is a clean ending.
        if self.filesystem.exists(&state.project_root) {
            let proceed = self.prompter.confirm(&format!(
                "There is already a directory {}. Continue and erase its contents?",
                state.project_name
            ))?;
            if !proceed {
                state
                    .log
                    .push(code::SUCCESS, "OK, will not initialize project in this location.");
                state.enter(Stage::Done);
                return Ok(Outcome::Declined);
            }
        }

        state.enter(Stage::Acquiring);
        self.filesystem.erase_dir(&state.project_root)?;
        self.acquirer.acquire(&product, &state.project_root)?;
        info!(root = %state.project_root.display(), "source content acquired");

        state.enter(Stage::InitializingManifest);
        if !self.initialize_manifest(state)? {
            state.enter(Stage::Failed);
            return Ok(Outcome::Failed);
        }

        state.enter(Stage::PersistingMetadata);
        if !self.persist_metadata(state)? {
            state.enter(Stage::Failed);
            return Ok(Outcome::Failed);
        }

        state.enter(Stage::Notifying);
        // Best-effort telemetry side-channel: the error variant is logged
        // and discarded, never escalated.
        if let Err(e) = self.notifier.notify(&state.project_name) {
            warn!(error = %e, "project-created notification failed");
        }

        state.enter(Stage::Done);
        Ok(Outcome::Completed)
    }

    /// Fetch + sort the catalog and negotiate a selection, re-prompting on
    /// unavailable products up to the shared bound. `--blank` (or choosing
    /// the blank entry) short-circuits the fetch entirely.
    fn select_product(&self, state: &mut WorkflowState) -> CoreResult<Selection> {
        if state.args.blank {
            return Ok(Selection::Product(Product::blank()));
        }

        let mut options = sort_catalog(self.catalog.fetch()?);
        options.push(Product::blank());

        loop {
            if state.prompt_count >= MAX_PROMPT_ATTEMPTS {
                return Ok(Selection::CircuitBroken);
            }
            state.prompt_count += 1;

            let slug = self.prompter.select_product(&options)?;
            if slug == BLANK_SLUG {
                return Ok(Selection::Product(Product::blank()));
            }

            let Some(product) = options.iter().find(|p| p.slug == slug) else {
                warn!(%slug, "prompt returned an unknown slug");
                continue;
            };

            if !product.available {
                self.prompter.notice(&format!(
                    "You cannot create this project. Please visit {}/products/{}/ and make sure it is available for you.",
                    self.pages_base_url, product.slug
                ));
                continue;
            }

            return Ok(Selection::Product(product.clone()));
        }
    }

    /// Produce or validate the package manifest via the PMA.
    ///
    /// A manifest shipped by the acquired starter is taken as-is (no spawn).
    /// Otherwise the selected manager's `init` runs in the project root and
    /// its exit code decides the result entry. Returns `false` when the run
    /// must end in `Failed` (entry already appended).
    fn initialize_manifest(&self, state: &mut WorkflowState) -> CoreResult<bool> {
        let manifest_path = state.project_root.join(MANIFEST_FILE);

        let hint = if self.filesystem.exists(&manifest_path) {
            self.metadata
                .load(&manifest_path)
                .ok()
                .and_then(|m| m.package_manager)
        } else {
            None
        };
        let manager = self
            .managers
            .detect(state.args.package_manager.as_deref(), hint.as_deref())?;

        if !self.filesystem.exists(&manifest_path) {
            let exit = manager.init_project(&state.project_root)?;
            if exit != code::SUCCESS {
                state.log.push(exit, "Problem with project initialization");
                return Ok(false);
            }
        }

        state.log.push(
            code::SUCCESS,
            format!("Project {} successfully created", state.project_name),
        );
        // Remember the choice for persist_metadata.
        state.args.package_manager = Some(manager.name().to_string());
        Ok(true)
    }

    /// Merge `{name, packageManager}` into the manifest, read-modify-write.
    /// Unknown fields already present must survive unchanged.
    fn persist_metadata(&self, state: &mut WorkflowState) -> CoreResult<bool> {
        let manifest_path = state.project_root.join(MANIFEST_FILE);
        let manager = state
            .args
            .package_manager
            .clone()
            .unwrap_or_else(|| "npm".into());

        let saved = if self.filesystem.exists(&manifest_path) {
            self.metadata.load(&manifest_path).and_then(|mut manifest| {
                manifest.name = Some(state.project_name.clone());
                manifest.package_manager = Some(manager);
                self.metadata.save(&manifest_path, &manifest)
            })
        } else {
            let manifest = Manifest::for_project(state.project_name.clone(), manager);
            self.metadata.save(&manifest_path, &manifest)
        };

        match saved {
            Ok(()) => {
                state.log.push(code::SUCCESS, "Project metadata saved.");
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "metadata persistence failed");
                state
                    .log
                    .push(code::INTERNAL_SERVER_ERROR, "Project metadata not saved.");
                Ok(false)
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
