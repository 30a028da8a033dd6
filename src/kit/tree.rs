//! Sample tree traversal
//!
//! Lists the sample folders below a root in depth-first post-order:
//! every subfolder comes before its parent, and siblings come in file name
//! order so instrument ids do not depend on the platform's listing order.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{KitError, Result};

/// A folder of the sample tree with the files it directly contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleDir {
    /// Path of the folder on disk
    pub path: PathBuf,
    /// Path relative to the scanned root (empty for the root itself)
    pub relative: PathBuf,
    /// Names of the regular files in the folder, in file name order
    pub files: Vec<String>,
}

impl SampleDir {
    pub fn new(path: impl Into<PathBuf>, relative: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            path: path.into(),
            relative: relative.into(),
            files,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Scan `root` and return all of its folders, root included, in post-order.
pub fn scan(root: &Path) -> Result<Vec<SampleDir>> {
    if !root.is_dir() {
        return Err(KitError::SourceNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut dirs = Vec::new();
    visit(root, Path::new(""), &mut dirs)?;
    debug!("Scanned {} folders under {}", dirs.len(), root.display());
    Ok(dirs)
}

fn visit(dir: &Path, relative: &Path, out: &mut Vec<SampleDir>) -> Result<()> {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry.map_err(|e| KitError::DirectoryReadError {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            subdirs.push(entry.file_name().to_os_string());
        } else if file_type.is_file() || entry.path().is_file() {
            // symlinks to files count as files, symlinked folders are not followed
            match entry.file_name().to_str() {
                Some(name) => files.push(name.to_string()),
                None => warn!("Skipping non UTF-8 file name: {}", entry.path().display()),
            }
        }
    }

    for name in subdirs {
        visit(&dir.join(&name), &relative.join(&name), out)?;
    }

    out.push(SampleDir::new(dir, relative, files));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_scan_post_order() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("Toms/Floor/1.wav"));
        touch(&root.join("Toms/High/1.wav"));
        touch(&root.join("Toms/notes.txt"));
        touch(&root.join("Kick/2.wav"));
        touch(&root.join("Kick/1.wav"));
        fs::create_dir_all(root.join("Empty")).unwrap();

        let dirs = scan(root).unwrap();
        let order: Vec<PathBuf> = dirs.iter().map(|d| d.relative.clone()).collect();

        assert_eq!(
            order,
            vec![
                PathBuf::from("Empty"),
                PathBuf::from("Kick"),
                PathBuf::from("Toms/Floor"),
                PathBuf::from("Toms/High"),
                PathBuf::from("Toms"),
                PathBuf::from(""),
            ]
        );

        assert!(dirs[0].is_empty());
        assert_eq!(dirs[1].files, vec!["1.wav".to_string(), "2.wav".to_string()]);
        assert_eq!(dirs[4].files, vec!["notes.txt".to_string()]);
        assert!(dirs[5].is_empty());
        assert_eq!(dirs[1].path, root.join("Kick"));
    }

    #[test]
    fn test_scan_missing_root() {
        let result = scan(Path::new("/nonexistent/samples/folder"));
        assert!(matches!(result, Err(KitError::SourceNotFound { .. })));
    }

    #[test]
    fn test_scan_root_files() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("hit.wav"));

        let dirs = scan(temp.path()).unwrap();
        assert_eq!(dirs.len(), 1);
        assert_eq!(dirs[0].relative, PathBuf::from(""));
        assert_eq!(dirs[0].files, vec!["hit.wav".to_string()]);
    }
}
