//! Template store lookup
//!
//! Layout of a template root:
//!
//! ```text
//! <root>/public/                  static assets copied into every project
//! <root>/<boilerplate>/           source tree copied into `src`
//! <root>/<boilerplate>/config.json
//! ```

use super::descriptor::TemplateDescriptor;
use crate::error::{Result, ScaffoldError};
use std::path::{Component, Path, PathBuf};

/// Descriptor file inside each boilerplate directory
pub const DESCRIPTOR_FILE: &str = "config.json";

/// Subtree holding the static assets shared by every boilerplate
pub const PUBLIC_DIR: &str = "public";

/// Read-only view over a template directory tree
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    root: PathBuf,
}

impl TemplateRegistry {
    /// Create a registry rooted at a local directory
    pub fn from_local(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a named subtree. Names that are not a single plain path
    /// segment never resolve.
    pub fn subtree_path(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.root.join(name)),
            _ => None,
        }
    }

    /// Load and parse `<root>/<boilerplate>/config.json`
    pub fn load_descriptor(&self, boilerplate: &str) -> Result<TemplateDescriptor> {
        let not_found = |path: PathBuf| ScaffoldError::TemplateNotFound {
            name: boilerplate.to_string(),
            path,
            available: self.available_boilerplates(),
        };

        let Some(dir) = self.subtree_path(boilerplate) else {
            return Err(not_found(self.root.join(boilerplate)));
        };
        let path = dir.join(DESCRIPTOR_FILE);

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found(path)),
            Err(e) => return Err(ScaffoldError::io(&path, e)),
        };

        tracing::debug!(path = %path.display(), "loaded template descriptor");
        TemplateDescriptor::from_json(&path, &text)
    }

    /// Names of every boilerplate in the store, sorted
    ///
    /// A boilerplate is a direct child directory holding a `config.json`.
    /// Unreadable roots yield an empty list.
    pub fn available_boilerplates(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().join(DESCRIPTOR_FILE).is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name != PUBLIC_DIR)
            .collect();
        names.sort();
        names
    }
}
