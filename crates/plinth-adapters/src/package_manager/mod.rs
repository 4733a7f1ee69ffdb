//! Package-manager process control.
//!
//! [`ProcessPackageManager`] wraps one external tool (`npm`, `yarn`) and
//! spawns its `init` as a child process, inheriting stdio so the tool's own
//! interactive prompts reach the user directly. The exit code is reported
//! as-is; only a process that cannot start at all is an error.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use plinth_core::application::error::{ApplicationError, CoreResult};
use plinth_core::application::ports::{PackageManager, PackageManagerRegistry};

const DEFAULT_MANAGER: &str = "npm";
const KNOWN_MANAGERS: &[&str] = &["npm", "yarn"];

/// A package manager invoked as a child process.
pub struct ProcessPackageManager {
    name: String,
}

impl ProcessPackageManager {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn command(&self) -> Command {
        // Windows ships npm/yarn as .cmd shims, reachable only through the
        // shell.
        #[cfg(windows)]
        {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.name);
            c
        }
        #[cfg(not(windows))]
        Command::new(&self.name)
    }

    fn spawn_error(&self, e: std::io::Error) -> ApplicationError {
        ApplicationError::ProcessSpawn {
            manager: self.name.clone(),
            reason: e.to_string(),
        }
    }
}

impl PackageManager for ProcessPackageManager {
    fn name(&self) -> &str {
        &self.name
    }

    fn init_project(&self, cwd: &Path) -> CoreResult<i32> {
        debug!(manager = %self.name, cwd = %cwd.display(), "spawning init");

        let status = self
            .command()
            .arg("init")
            .current_dir(cwd)
            .status()
            .map_err(|e| self.spawn_error(e))?;

        let code = status.code().unwrap_or(1);
        info!(manager = %self.name, code, "init finished");
        Ok(code)
    }

    fn version(&self) -> CoreResult<String> {
        let output = self
            .command()
            .arg("--version")
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(ApplicationError::ProcessSpawn {
                manager: self.name.clone(),
                reason: format!("`{} --version` exited with {}", self.name, output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Registry over the known process-backed managers.
///
/// Precedence: explicit CLI name, then the manifest hint, then npm. An
/// unrecognized manifest hint falls through to the default rather than
/// failing, since the manifest may come from an acquired starter we do not
/// control; an unrecognized explicit name is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPackageManagerRegistry;

impl SystemPackageManagerRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl PackageManagerRegistry for SystemPackageManagerRegistry {
    fn detect(
        &self,
        explicit: Option<&str>,
        manifest_hint: Option<&str>,
    ) -> CoreResult<Box<dyn PackageManager>> {
        if let Some(name) = explicit {
            if !KNOWN_MANAGERS.contains(&name) {
                return Err(ApplicationError::UnknownPackageManager { name: name.into() });
            }
            return Ok(Box::new(ProcessPackageManager::new(name)));
        }

        let name = manifest_hint
            .filter(|hint| KNOWN_MANAGERS.contains(hint))
            .unwrap_or(DEFAULT_MANAGER);
        Ok(Box::new(ProcessPackageManager::new(name)))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_name_wins_over_hint() {
        let registry = SystemPackageManagerRegistry::new();
        let manager = registry.detect(Some("yarn"), Some("npm")).unwrap();
        assert_eq!(manager.name(), "yarn");
    }

    #[test]
    fn hint_is_used_when_no_explicit_name() {
        let registry = SystemPackageManagerRegistry::new();
        let manager = registry.detect(None, Some("yarn")).unwrap();
        assert_eq!(manager.name(), "yarn");
    }

    #[test]
    fn unknown_hint_falls_back_to_npm() {
        let registry = SystemPackageManagerRegistry::new();
        let manager = registry.detect(None, Some("pnpm@9.0.0")).unwrap();
        assert_eq!(manager.name(), "npm");
    }

    #[test]
    fn unknown_explicit_name_is_rejected() {
        let registry = SystemPackageManagerRegistry::new();
        let err = registry.detect(Some("pnpm"), None).unwrap_err();
        match err {
            ApplicationError::UnknownPackageManager { name } => assert_eq!(name, "pnpm"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn default_is_npm() {
        let registry = SystemPackageManagerRegistry::new();
        let manager = registry.detect(None, None).unwrap();
        assert_eq!(manager.name(), "npm");
    }

    // On Windows the cmd shim absorbs the missing binary into an exit code.
    #[cfg(not(windows))]
    #[test]
    fn spawn_failure_names_the_manager() {
        // A manager binary that cannot exist on any test machine.
        let manager = ProcessPackageManager::new("plinth-test-no-such-binary");
        let err = manager.init_project(Path::new(".")).unwrap_err();
        match err {
            ApplicationError::ProcessSpawn { manager, .. } => {
                assert_eq!(manager, "plinth-test-no-such-binary");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn version_of_a_missing_binary_is_a_spawn_error() {
        let manager = ProcessPackageManager::new("plinth-test-no-such-binary");
        let err = manager.version().unwrap_err();
        match err {
            ApplicationError::ProcessSpawn { manager, .. } => {
                assert_eq!(manager, "plinth-test-no-such-binary");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // `echo --version` prints the flag back and exits 0, which is enough to
    // pin the capture-and-trim behaviour without requiring npm on the test
    // machine.
    #[cfg(not(windows))]
    #[test]
    fn version_captures_trimmed_stdout() {
        let manager = ProcessPackageManager::new("echo");
        assert_eq!(manager.version().unwrap(), "--version");
    }
}
