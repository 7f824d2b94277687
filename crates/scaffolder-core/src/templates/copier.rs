//! Template subtree copying

use super::registry::TemplateRegistry;
use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of materializing one template subtree
#[derive(Debug, Clone)]
pub struct CopiedSubtree {
    /// Absolute destination directory
    pub destination: PathBuf,
    /// Files written, relative to `destination`
    pub files: Vec<PathBuf>,
}

/// Copy the template subtree `name` to `project_dir/destination`.
///
/// Symbolic links are followed, so the destination holds the content of
/// link targets rather than links. Existing files at the destination are
/// overwritten. A missing source subtree is [`ScaffoldError::TemplateSubtreeMissing`].
pub fn copy_subtree(
    registry: &TemplateRegistry,
    name: &str,
    project_dir: &Path,
    destination: &str,
) -> Result<CopiedSubtree> {
    let source = match registry.subtree_path(name) {
        Some(path) if path.is_dir() => path,
        Some(path) => return Err(ScaffoldError::TemplateSubtreeMissing(path)),
        None => return Err(ScaffoldError::TemplateSubtreeMissing(registry.root().join(name))),
    };

    let destination = absolute(&project_dir.join(destination))?;
    let files = copy_dir_following_links(&source, &destination)?;

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        files = files.len(),
        "copied template subtree"
    );

    Ok(CopiedSubtree { destination, files })
}

fn copy_dir_following_links(src: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("symbolic link loop"));
            ScaffoldError::io(path, source)
        })?;

        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| ScaffoldError::io(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
            }
            // fs::copy reads through links
            fs::copy(entry.path(), &target).map_err(|e| ScaffoldError::io(&target, e))?;
            files.push(relative.to_path_buf());
        }
    }

    Ok(files)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|e| ScaffoldError::io(path, e))
}
