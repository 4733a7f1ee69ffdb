//! Interactive negotiation of the final project name.
//!
//! The collision loop is deliberately a bounded iteration with an
//! accumulator for the candidate name rather than recursion: it terminates
//! on a free name, on an explicit user decline, or on the shared prompt
//! bound. No filesystem mutation happens here.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::error::CoreResult;
use crate::application::ports::{Filesystem, Prompter};
use crate::application::services::MAX_PROMPT_ATTEMPTS;

/// Outcome of the naming negotiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A name was settled on. `root` is `cwd.join(name)`; it may still
    /// exist on disk if the user declined to rename — the caller decides
    /// whether that is acceptable.
    Accepted { name: String, root: PathBuf },
    /// The shared prompt bound was exhausted.
    CircuitBroken,
}

pub struct NamingResolver<'a> {
    filesystem: &'a dyn Filesystem,
    prompter: &'a dyn Prompter,
}

impl<'a> NamingResolver<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, prompter: &'a dyn Prompter) -> Self {
        Self {
            filesystem,
            prompter,
        }
    }

    /// Negotiate a final project name starting from `requested`.
    ///
    /// `prompt_count` is the workflow-wide prompt counter shared with the
    /// catalog re-prompt guard.
    pub fn resolve(
        &self,
        cwd: &Path,
        requested: String,
        prompt_count: &mut u8,
    ) -> CoreResult<Resolution> {
        let mut candidate = requested;

        loop {
            let root = cwd.join(&candidate);
            if !self.filesystem.exists(&root) {
                debug!(name = %candidate, "project name accepted");
                return Ok(Resolution::Accepted {
                    name: candidate,
                    root,
                });
            }

            if *prompt_count >= MAX_PROMPT_ATTEMPTS {
                return Ok(Resolution::CircuitBroken);
            }
            *prompt_count += 1;

            let rename = self.prompter.confirm(&format!(
                "Project {candidate} already exists. Do you want to choose a different name?"
            ))?;
            if !rename {
                // Keep the colliding name; the acquiring stage will ask for
                // confirmation before touching the directory.
                return Ok(Resolution::Accepted {
                    name: candidate.clone(),
                    root,
                });
            }

            candidate = self.prompter.text("Enter new project name")?;
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::testing::{FakeFilesystem, ScriptedPrompter};

    #[test]
    fn free_name_is_accepted_verbatim_without_prompting() {
        let fs = FakeFilesystem::new();
        let prompter = ScriptedPrompter::default();
        let resolver = NamingResolver::new(&fs, &prompter);
        let mut count = 0;

        let resolution = resolver
            .resolve(Path::new("/work"), "my-app".into(), &mut count)
            .unwrap();

        assert_eq!(
            resolution,
            Resolution::Accepted {
                name: "my-app".into(),
                root: PathBuf::from("/work/my-app"),
            }
        );
        assert_eq!(count, 0);
        assert_eq!(prompter.prompts_shown(), 0);
    }

    #[test]
    fn collision_then_rename_accepts_the_new_name() {
        let fs = FakeFilesystem::with_existing(["/work/taken"]);
        let prompter = ScriptedPrompter::default()
            .confirms([true])
            .texts(["fresh"]);
        let resolver = NamingResolver::new(&fs, &prompter);
        let mut count = 0;

        let resolution = resolver
            .resolve(Path::new("/work"), "taken".into(), &mut count)
            .unwrap();

        assert_eq!(
            resolution,
            Resolution::Accepted {
                name: "fresh".into(),
                root: PathBuf::from("/work/fresh"),
            }
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn declining_keeps_the_colliding_name() {
        let fs = FakeFilesystem::with_existing(["/work/taken"]);
        let prompter = ScriptedPrompter::default().confirms([false]);
        let resolver = NamingResolver::new(&fs, &prompter);
        let mut count = 0;

        let resolution = resolver
            .resolve(Path::new("/work"), "taken".into(), &mut count)
            .unwrap();

        match resolution {
            Resolution::Accepted { name, root } => {
                assert_eq!(name, "taken");
                assert_eq!(root, PathBuf::from("/work/taken"));
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn pathological_environment_trips_the_circuit_breaker() {
        // Every candidate the user types collides.
        let fs = FakeFilesystem::always_exists();
        let prompter = ScriptedPrompter::default()
            .confirms([true; 16])
            .texts(["again"; 16]);
        let resolver = NamingResolver::new(&fs, &prompter);
        let mut count = 0;

        let resolution = resolver
            .resolve(Path::new("/work"), "taken".into(), &mut count)
            .unwrap();

        assert_eq!(resolution, Resolution::CircuitBroken);
        assert_eq!(count, MAX_PROMPT_ATTEMPTS);
    }

    #[test]
    fn counter_is_shared_not_reset() {
        let fs = FakeFilesystem::always_exists();
        let prompter = ScriptedPrompter::default()
            .confirms([true; 4])
            .texts(["again"; 4]);
        let resolver = NamingResolver::new(&fs, &prompter);

        // Pretend earlier catalog prompts already consumed most attempts.
        let mut count = MAX_PROMPT_ATTEMPTS - 2;
        let resolution = resolver
            .resolve(Path::new("/work"), "taken".into(), &mut count)
            .unwrap();

        assert_eq!(resolution, Resolution::CircuitBroken);
        assert_eq!(count, MAX_PROMPT_ATTEMPTS);
    }
}
