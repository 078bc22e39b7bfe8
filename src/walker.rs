use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    ingestion::RawFile,
};

/// Expand command-line paths into a batch of raw files.
///
/// Files are taken as given. Directories are walked recursively, skipping
/// hidden entries, and contribute their files sorted by relative path.
/// Batch order follows the order of `paths`. Media types are declared here
/// but not filtered; see [`crate::ingestion::retain_pdfs`].
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<RawFile>> {
    let mut batch = Vec::new();

    for path in paths {
        if path.is_dir() {
            batch.extend(
                discover_files(path)?
                    .iter()
                    .map(|p| RawFile::from_path(p)),
            );
        } else if path.exists() {
            batch.push(RawFile::from_path(path));
        } else {
            return Err(Error::MissingPath(path.clone()));
        }
    }

    Ok(batch)
}

/// Recursively walk a directory and return every non-hidden file in it.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    let canonical_root = root.canonicalize()?;
    let mut results = Vec::new();
    walk_dir(&canonical_root, &mut results)?;
    results.sort();
    Ok(results)
}

fn walk_dir(current: &Path, results: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(current)?;

    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        // Skip hidden files and directories.
        if name.starts_with('.') {
            continue;
        }

        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            walk_dir(&entry.path(), results)?;
        } else if file_type.is_symlink() {
            let resolved = match entry.path().canonicalize() {
                Ok(p) => p,
                Err(_) => continue, // Skip broken symlinks
            };
            // Directory symlinks are not followed (cycle prevention).
            if resolved.is_file() {
                results.push(entry.path());
            }
        } else if file_type.is_file() {
            results.push(entry.path());
        }
    }

    Ok(())
}
