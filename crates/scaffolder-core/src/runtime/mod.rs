//! Environment detection
//!
//! This module provides:
//! - Package manager detection (yarn vs. npm), used to pick the command
//!   prefix shown in the post-scaffold instructions

pub mod check;

pub use check::{
    check_npm, check_yarn, FixedDetector, PackageManager, PackageManagerDetector, SystemDetector,
    ToolInfo,
};
