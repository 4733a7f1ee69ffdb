//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "plinth",
    bin_name = "plinth",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Project initialization from a product catalog",
    long_about = "Plinth scaffolds projects from a remote product catalog: \
                  free starters are cloned, paid products are downloaded, \
                  and a blank scaffold is always available offline.",
    after_help = "EXAMPLES:\n\
        \x20 plinth init my-app --blank\n\
        \x20 plinth init --package-manager yarn\n\
        \x20 plinth list\n\
        \x20 plinth rename new-name\n\
        \x20 plinth completions bash > /usr/share/bash-completion/completions/plinth",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new project from the catalog.
    #[command(
        visible_alias = "i",
        about = "Initialize a new project",
        after_help = "EXAMPLES:\n\
            \x20 plinth init                     # pick a product interactively\n\
            \x20 plinth init my-app --blank      # empty scaffold, no catalog\n\
            \x20 plinth init --package-manager yarn"
    )]
    Init(InitArgs),

    /// List the products available in the catalog.
    #[command(
        visible_alias = "ls",
        about = "List available products",
        after_help = "EXAMPLES:\n\
            \x20 plinth list\n\
            \x20 plinth list --format json"
    )]
    List(ListArgs),

    /// Rename the project in the current directory.
    #[command(
        about = "Rename the current project",
        after_help = "EXAMPLES:\n\
            \x20 plinth rename new-name\n\
            \x20 plinth rename             # prompts for the new name"
    )]
    Rename(RenameArgs),

    /// Set the domain name of the project in the current directory.
    #[command(
        name = "set-domain",
        about = "Set the project domain name",
        after_help = "EXAMPLES:\n\
            \x20 plinth set-domain example.com\n\
            \x20 plinth set-domain          # prompts for the domain"
    )]
    SetDomain(SetDomainArgs),

    /// Print the resolved package manager's version.
    #[command(
        about = "Print the package manager version",
        long_about = "Print the version of the package manager the current \
                      directory resolves to (the manifest's packageManager \
                      hint when present, npm otherwise)."
    )]
    Version,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 plinth completions bash > ~/.local/share/bash-completion/completions/plinth\n\
            \x20 plinth completions zsh  > ~/.zfunc/_plinth\n\
            \x20 plinth completions fish > ~/.config/fish/completions/plinth.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `plinth init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name.  When omitted, the name is prompted for (blank
    /// scaffold) or defaults to the selected product's slug.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Skip the catalog and create an empty project directory.
    #[arg(short = 'b', long = "blank", help = "Create an empty project")]
    pub blank: bool,

    /// Package manager used for project initialization.
    #[arg(
        short = 'p',
        long = "package-manager",
        value_name = "MANAGER",
        help = "Package manager to use (npm, yarn)"
    )]
    pub package_manager: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `plinth list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One slug per line.
    List,
    /// JSON array.
    Json,
}

// ── rename / set-domain ───────────────────────────────────────────────────────

/// Arguments for `plinth rename`.
#[derive(Debug, Args)]
pub struct RenameArgs {
    /// New project name.  Prompted for when omitted.
    #[arg(value_name = "NAME", help = "New project name")]
    pub name: Option<String>,
}

/// Arguments for `plinth set-domain`.
#[derive(Debug, Args)]
pub struct SetDomainArgs {
    /// Domain name.  Prompted for when omitted.
    #[arg(value_name = "DOMAIN", help = "Domain name")]
    pub domain: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `plinth completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
