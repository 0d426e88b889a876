//! Finding weave documents on disk.
//!
//! Files named on the command line are taken as-is; directories are
//! scanned recursively for `*.weave.yaml` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::document::is_document;
use crate::error::{Result, WeaveError};

/// Collect weave documents from a list of files and directories.
///
/// Results from each directory are sorted; explicit files keep their
/// position. A path that does not exist is an error.
pub fn find_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        if path.is_dir() {
            found.extend(scan_dir(path)?);
        } else if path.is_file() {
            found.push(path.clone());
        } else {
            return Err(WeaveError::Io {
                path: path.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    Ok(found)
}

fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| WeaveError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to scan directory: {}", e),
        })?;

        if entry.file_type().is_file() && is_document(entry.path()) {
            documents.push(entry.into_path());
        }
    }

    documents.sort();
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_nested() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("drafts/old")).unwrap();
        fs::write(dir.path().join("b.weave.yaml"), "").unwrap();
        fs::write(dir.path().join("drafts/a.weave.yml"), "").unwrap();
        fs::write(dir.path().join("drafts/old/c.weave.yaml"), "").unwrap();
        fs::write(dir.path().join("drafts/notes.yaml"), "").unwrap();

        let found = find_documents(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["b.weave.yaml", "a.weave.yml", "c.weave.yaml"]);
    }

    #[test]
    fn test_explicit_files_kept() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("custom.yaml");
        fs::write(&file, "").unwrap();

        let found = find_documents(&[file.clone()]).unwrap();
        assert_eq!(found, vec![file]);
    }

    #[test]
    fn test_missing_path() {
        let dir = tempdir().unwrap();
        let result = find_documents(&[dir.path().join("nope")]);
        assert!(matches!(result, Err(WeaveError::Io { .. })));
    }
}
