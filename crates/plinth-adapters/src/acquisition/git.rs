//! Free-starter acquisition by repository clone.
//!
//! Clones the public starter repository into the project root using the
//! git2 crate, then removes the `.git` directory so the result is a plain
//! source tree, not a checkout of the upstream starter.

use std::path::Path;

use git2::Repository;
use tracing::info;

use plinth_core::application::error::{ApplicationError, CoreResult};

pub fn clone_starter(url: &str, slug: &str, dest: &Path) -> CoreResult<()> {
    Repository::clone(url, dest).map_err(|e| ApplicationError::Acquisition {
        slug: slug.to_string(),
        reason: format!("clone of {url} failed: {}", e.message()),
    })?;

    // The history belongs to the starter, not to the new project.
    let git_dir = dest.join(".git");
    std::fs::remove_dir_all(&git_dir).map_err(|e| ApplicationError::Filesystem {
        path: git_dir,
        reason: format!("Failed to remove directory: {e}"),
    })?;

    info!(%url, dest = %dest.display(), "starter repository cloned");
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn clone_from_a_local_repository_strips_git_dir() {
        let temp = TempDir::new().unwrap();
        let upstream = temp.path().join("upstream");

        // Build a minimal local repository to clone from.
        let repo = Repository::init(&upstream).unwrap();
        std::fs::write(upstream.join("index.js"), "module.exports = {}\n").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("index.js")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("test", "test@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();

        let dest = temp.path().join("project");
        clone_starter(upstream.to_str().unwrap(), "starter", &dest).unwrap();

        assert!(dest.join("index.js").is_file());
        assert!(!dest.join(".git").exists());
    }

    #[test]
    fn unreachable_repository_maps_to_acquisition_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-upstream");
        let dest = temp.path().join("project");

        let err = clone_starter(missing.to_str().unwrap(), "ghost", &dest).unwrap_err();
        match err {
            ApplicationError::Acquisition { slug, .. } => assert_eq!(slug, "ghost"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
