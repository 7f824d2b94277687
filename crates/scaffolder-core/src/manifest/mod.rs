//! Package manifest (`package.json`) handling
//!
//! This module provides:
//! - Reading and atomically rewriting a project's manifest
//! - The merge of a template descriptor into that manifest
//! - Rewriting of the tool's internal script invocations

pub mod merge;
pub mod scripts;

pub use merge::{merge_manifest, MergeSettings};
pub use scripts::rewrite_internal_invocation;

use crate::error::{Result, ScaffoldError};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the manifest at a project root
pub const MANIFEST_FILE: &str = "package.json";

/// A package manifest as an ordered JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Parse manifest text. `path` is only used for error messages.
    pub fn from_json(path: &Path, text: &str) -> Result<Self> {
        let invalid = |reason: String| ScaffoldError::InvalidManifest {
            path: path.to_path_buf(),
            reason,
        };

        match serde_json::from_str::<Value>(text).map_err(|e| invalid(e.to_string()))? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(invalid("expected a JSON object".to_string())),
        }
    }

    /// Read the manifest at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScaffoldError::ManifestMissing(path.to_path_buf()))
            }
            Err(e) => return Err(ScaffoldError::io(path, e)),
        };
        Self::from_json(path, &text)
    }

    /// Serialize with two-space indentation and a trailing newline
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(&self.fields).map_err(|e| {
            ScaffoldError::InvalidManifest {
                path: PathBuf::from(MANIFEST_FILE),
                reason: e.to_string(),
            }
        })?;
        text.push('\n');
        Ok(text)
    }

    /// Replace the file at `path` with this manifest.
    ///
    /// The text is fully serialized and written to a sibling file first, then
    /// renamed over `path`, so `path` is either untouched or fully rewritten.
    pub fn write_atomic(&self, path: &Path) -> Result<()> {
        let text = self.to_pretty_json()?;

        let mut staging = path.as_os_str().to_owned();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        fs::write(&staging, text).map_err(|e| ScaffoldError::io(&staging, e))?;
        if let Err(e) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(ScaffoldError::io(path, e));
        }

        tracing::debug!(path = %path.display(), "wrote manifest");
        Ok(())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.fields
    }

    /// String-valued entries of the `scripts` table, in order
    pub fn script_commands(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .get("scripts")
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .filter_map(|(name, command)| command.as_str().map(|c| (name.as_str(), c)))
    }
}
