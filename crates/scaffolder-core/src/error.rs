//! Error types for scaffolding operations
//!
//! Every failure is fatal to the run. The variants exist so the front end can
//! say exactly which precondition failed and on which path.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors that can occur while materializing a boilerplate
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Template '{name}' not found at {}. Available templates: {}", .path.display(), available_list(.available))]
    TemplateNotFound {
        name: String,
        path: PathBuf,
        available: Vec<String>,
    },

    #[error("Invalid template descriptor {}: {reason}", .path.display())]
    InvalidDescriptor { path: PathBuf, reason: String },

    #[error("The project should not contain src folder! ({})", .0.display())]
    SourceDirExists(PathBuf),

    #[error("Template directory {} does not exist.", .0.display())]
    TemplateSubtreeMissing(PathBuf),

    #[error("No package.json found at {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("Invalid manifest {}: {reason}", .path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }

    /// Missing template payload is reported as a warning, everything else as an error.
    /// Both abort the run.
    pub fn is_warning(&self) -> bool {
        matches!(self, ScaffoldError::TemplateSubtreeMissing(_))
    }
}

fn available_list(available: &[String]) -> String {
    if available.is_empty() {
        "(none)".to_string()
    } else {
        available.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_not_found_lists_available() {
        let err = ScaffoldError::TemplateNotFound {
            name: "vue".to_string(),
            path: PathBuf::from("/t/vue/config.json"),
            available: vec!["mvc-react".to_string(), "redux".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'vue'"));
        assert!(msg.contains("mvc-react, redux"));
    }

    #[test]
    fn test_only_missing_subtree_is_warning() {
        assert!(ScaffoldError::TemplateSubtreeMissing(PathBuf::from("/t/x")).is_warning());
        assert!(!ScaffoldError::SourceDirExists(PathBuf::from("/p/src")).is_warning());
    }
}
