use std::path::{Path, PathBuf};

use crate::error::Result;

/// List the regular files in `dir` whose filename contains `token`,
/// sorted lexicographically by filename.
///
/// The token is a plain case-sensitive substring, not a glob or regex,
/// and file contents are never inspected.
pub fn list_filtered(dir: &Path, token: &str) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().contains(token) {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
