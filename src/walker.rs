use std::{fs, io};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::debug;

use crate::error::{EditorError, Result};
use crate::types::FASTQ_EXTENSIONS;

pub(crate) fn is_fastq_name(file_name: &str) -> bool {
    FASTQ_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

/// Recursively list FASTQ files under `root`, sorted by name within each directory level.
///
/// Symlinks to files are followed; symlinked directories are not descended into.
pub(crate) fn list_fastq(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(root, &mut found)?;
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    debug!("scanning {}", dir.display());
    let entries = fs::read_dir(dir)
        .map_err(|err| EditorError::io(dir, err))?
        .collect::<io::Result<Vec<_>>>()
        .map_err(|err| EditorError::io(dir, err))?;

    for entry in entries.into_iter().sorted_by_key(|entry| entry.file_name()) {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|err| EditorError::io(&path, err))?;
        if file_type.is_dir() {
            walk(&path, found)?;
            continue;
        }

        let matches = entry.file_name().to_str().is_some_and(is_fastq_name);
        if matches && path.is_file() {
            found.push(path);
        }
    }
    Ok(())
}
