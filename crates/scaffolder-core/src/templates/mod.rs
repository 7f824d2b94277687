//! Template store access
//!
//! This module provides:
//! - Descriptor (`config.json`) parsing
//! - Lookup of boilerplates in a template root
//! - Copying of template subtrees into a project

pub mod copier;
pub mod descriptor;
pub mod registry;

pub use copier::{copy_subtree, CopiedSubtree};
pub use descriptor::{DescriptorField, ScriptSpec, TemplateDescriptor};
pub use registry::TemplateRegistry;
