//! Paid-product acquisition by authenticated archive download.
//!
//! `GET {api}/packages/download/{slug}` returns a gzipped tarball whose
//! single top-level directory wraps the starter files. Extraction strips
//! that wrapper so the files land directly in the project root.

use std::io::Read;
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use reqwest::StatusCode;
use tar::Archive;
use tracing::{debug, info};

use plinth_core::application::error::{ApplicationError, CoreResult};

use crate::http::{build_client, network_error};

pub fn download_and_extract(
    api_base_url: &str,
    slug: &str,
    auth_token: Option<&str>,
    dest: &Path,
) -> CoreResult<()> {
    let url = format!("{api_base_url}/packages/download/{slug}");
    debug!(%url, "downloading product archive");

    let client = build_client()?;
    let mut request = client.get(&url);
    if let Some(token) = auth_token {
        request = request.bearer_auth(token);
    }

    let response = request.send().map_err(network_error)?;
    match response.status() {
        status if status.is_success() => {}
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            return Err(ApplicationError::Unauthorized {
                reason: format!("download rejected with {}", response.status()),
            });
        }
        status => {
            return Err(ApplicationError::Acquisition {
                slug: slug.to_string(),
                reason: format!("download rejected with {status}"),
            });
        }
    }

    extract(response, slug, dest)?;
    info!(%slug, dest = %dest.display(), "product archive extracted");
    Ok(())
}

/// Unpack a gzipped tarball into `dest`, dropping the single top-level
/// directory every archive ships with.
pub(crate) fn extract(reader: impl Read, slug: &str, dest: &Path) -> CoreResult<()> {
    let acquisition_error = |reason: String| ApplicationError::Acquisition {
        slug: slug.to_string(),
        reason,
    };

    std::fs::create_dir_all(dest).map_err(|e| ApplicationError::Filesystem {
        path: dest.to_path_buf(),
        reason: format!("Failed to create directory: {e}"),
    })?;

    let mut archive = Archive::new(GzDecoder::new(reader));
    for entry in archive
        .entries()
        .map_err(|e| acquisition_error(format!("unreadable archive: {e}")))?
    {
        let mut entry = entry.map_err(|e| acquisition_error(format!("corrupt entry: {e}")))?;
        let path = entry
            .path()
            .map_err(|e| acquisition_error(format!("bad entry path: {e}")))?
            .into_owned();

        let Some(stripped) = strip_top_level(&path) else {
            continue;
        };
        entry
            .unpack(dest.join(stripped))
            .map_err(|e| acquisition_error(format!("could not unpack {}: {e}", path.display())))?;
    }
    Ok(())
}

/// Drop the leading directory component; also rejects any path that would
/// escape the destination.
fn strip_top_level(path: &Path) -> Option<PathBuf> {
    let mut components = path.components();
    components.next()?;

    let rest: PathBuf = components.as_path().to_path_buf();
    if rest.as_os_str().is_empty() {
        return None;
    }
    if rest
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(rest)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use tempfile::TempDir;

    fn tarball(entries: &[(&str, &str)]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (path, content) in entries {
            let mut header = tar::Header::new_gnu();
            // Write the name bytes directly: `append_data`/`set_path` refuse
            // `..` components, which the escape test needs in its fixture.
            header.as_old_mut().name[..path.len()].copy_from_slice(path.as_bytes());
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append(&header, content.as_bytes()).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn extraction_strips_the_wrapper_directory() {
        let bytes = tarball(&[
            ("starter-1.0/package.json", "{\"name\":\"starter\"}"),
            ("starter-1.0/src/index.js", "console.log('hi')"),
        ]);
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("project");

        extract(bytes.as_slice(), "starter", &dest).unwrap();

        assert!(dest.join("package.json").is_file());
        assert!(dest.join("src/index.js").is_file());
        assert!(!dest.join("starter-1.0").exists());
    }

    #[test]
    fn entries_escaping_the_destination_are_skipped() {
        let bytes = tarball(&[
            ("starter/../../outside.txt", "nope"),
            ("starter/inside.txt", "ok"),
        ]);
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("project");

        extract(bytes.as_slice(), "starter", &dest).unwrap();

        assert!(dest.join("inside.txt").is_file());
        assert!(!temp.path().join("outside.txt").exists());
    }

    #[test]
    fn garbage_bytes_map_to_acquisition_error() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("project");

        let err = extract(&b"not a tarball"[..], "starter", &dest).unwrap_err();
        match err {
            ApplicationError::Acquisition { slug, .. } => assert_eq!(slug, "starter"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
