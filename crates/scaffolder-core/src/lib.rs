//! Scaffolder Core - Shared library for boilerplate scaffolding CLIs
//!
//! This library materializes a named boilerplate from a template store into
//! an existing project directory: it copies the static and source subtrees,
//! merges the boilerplate's descriptor into the project's `package.json`, and
//! renders usage instructions. Product binaries supply their identity and
//! tool manifest through [`ProductConfig`].
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - descriptor loading, subtree copying,
//!   manifest merge and instruction rendering, all returning [`error::Result`]
//! - **Layer 2: Workflow Orchestration** - [`Scaffolder`] sequences the steps
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based front end (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{Scaffolder, TemplateRegistry, PackageManifest};
//!
//! let registry = TemplateRegistry::from_local("templates");
//! let tool = PackageManifest::from_json(path, TOOL_MANIFEST)?;
//! let scaffolder = Scaffolder::new(registry, "mvc-react", tool, "my-scripts")?;
//! let report = scaffolder.run(&std::env::current_dir()?)?;
//! ```

pub mod config;
pub mod error;
pub mod instructions;
pub mod manifest;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Result, ScaffoldError};
pub use manifest::{merge_manifest, rewrite_internal_invocation, PackageManifest};
pub use product::ProductConfig;
pub use runtime::{PackageManager, PackageManagerDetector};
pub use scaffold::{ScaffoldReport, ScaffoldStep, Scaffolder};
pub use templates::{TemplateDescriptor, TemplateRegistry};

#[cfg(feature = "tui")]
pub use tui::run;
