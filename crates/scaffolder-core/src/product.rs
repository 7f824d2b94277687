//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface each scaffolding product implements to
//! plug its identity, template store and tool manifest into the shared core.

use crate::config::installed_template_root;
use crate::runtime::{PackageManagerDetector, SystemDetector};
use std::path::PathBuf;

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Where its template store lives
/// - The tool's own package manifest, merged into generated projects
/// - The namespace key of its configuration block
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Boilerplate used when none is requested
    fn default_boilerplate(&self) -> &'static str;

    /// Manifest key holding the tool configuration block
    fn config_namespace(&self) -> &'static str;

    /// Template store used when neither flag nor environment override it.
    /// Located relative to the running executable by default.
    fn default_template_root(&self) -> PathBuf {
        installed_template_root(self.name())
    }

    /// Environment variable name for overriding the template store
    fn template_root_env(&self) -> &'static str;

    /// The tool's own package manifest (JSON text)
    fn tool_manifest(&self) -> &'static str;

    /// Detector deciding the command prefix in printed instructions
    fn package_manager_detector(&self) -> Box<dyn PackageManagerDetector> {
        Box::new(SystemDetector)
    }
}
