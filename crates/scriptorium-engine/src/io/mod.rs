//! Read-only access to the content directory.
//!
//! The rendering core never touches the filesystem itself; this module hands
//! it raw document text.

use crate::models::MarkdownFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a document relative to the content root.
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.is_file() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Every `.md` file under the content root, sorted by relative path.
/// Hidden files and directories are skipped.
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<MarkdownFile>, IoError> {
    validate_content_dir(content_root)?;

    let mut paths = Vec::new();
    scan_directory_recursive(content_root, &mut paths)?;

    let mut files: Vec<MarkdownFile> = paths
        .iter()
        .filter_map(|path| relative_to(content_root, path))
        .map(MarkdownFile::new)
        .collect();
    files.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
    log::debug!(
        "found {} markdown files under {}",
        files.len(),
        content_root.display()
    );
    Ok(files)
}

fn relative_to(root: &Path, path: &Path) -> Option<RelativePathBuf> {
    let stripped = path.strip_prefix(root).ok()?;
    RelativePathBuf::from_path(stripped).ok()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MarkdownFile::EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
