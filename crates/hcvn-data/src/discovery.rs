//! Discovery of per-parent data files.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DataError, Result};
use crate::paths::DATA_FILE_EXTENSION;

/// Lists all JSON files in a directory.
///
/// Returns files sorted by file name. Hidden files and directories are
/// skipped; a directory that does not exist yields an empty list rather than
/// an error.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            tracing::debug!(path = %dir.display(), "Data directory absent, nothing to list");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(DataError::DirectoryRead {
                path: dir.to_path_buf(),
                source: e,
            });
        }
    };

    let mut files = Vec::new();

    for entry_result in entries {
        let entry = entry_result.map_err(|e| DataError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Hidden files never name a parent code
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        // Skip directories, including symlinks that resolve to one. Anything
        // else is listed so an unreadable target surfaces when it is opened.
        let file_type = entry.file_type().map_err(|e| DataError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        if file_type.is_dir() || (file_type.is_symlink() && path.is_dir()) {
            continue;
        }

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DATA_FILE_EXTENSION));

        if is_json {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(path = %dir.display(), count = files.len(), "Listed data files");

    Ok(files)
}

/// Parent code encoded in a data file name: the name minus its extension.
pub fn parent_code(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
