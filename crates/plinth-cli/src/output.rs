//! Output management and formatting.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use plinth_core::domain::status::code;
use plinth_core::domain::{ResultEntry, ResultLog};

use crate::cli::global::GlobalArgs;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode — errors
    /// must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Print a workflow result log as an aligned `Status  Message` table,
    /// one row per entry in chronological order.  The status column carries
    /// the raw code — including pass-through process exit codes — so a
    /// failed init shows exactly what the child process returned.  Error
    /// rows bypass quiet mode like [`Self::error`].
    pub fn result_log(&self, log: &ResultLog) -> io::Result<()> {
        if log.is_empty() {
            return Ok(());
        }

        let width = status_width(log);
        self.header(&format!("{:<width$}  Message", "Status"))?;

        for entry in log {
            let ok = matches!(entry.status, code::SUCCESS | code::SEE_OTHER);
            if self.quiet && ok {
                continue;
            }
            let row = result_row(entry, width);
            let line = if self.no_color {
                row
            } else if ok {
                row.green().to_string()
            } else {
                row.red().to_string()
            };
            self.term.write_line(&line)?;
        }
        Ok(())
    }
}

/// Status column width: wide enough for the header and the longest code.
fn status_width(log: &ResultLog) -> usize {
    log.entries()
        .iter()
        .map(|entry| entry.status.to_string().len())
        .max()
        .unwrap_or(0)
        .max("Status".len())
}

fn result_row(entry: &ResultEntry, width: usize) -> String {
    format!("{:<width$}  {}", entry.status, entry.message)
}

// ── tests ─────────────────────────────────────────────────────────────────────
