//! Scaffold orchestration
//!
//! Steps run strictly in order:
//!
//! ```text
//! validate directory -> copy public -> copy boilerplate into src
//!   -> remove scripts.json -> move README to root -> merge package.json
//! ```
//!
//! The descriptor, the tool manifest and the project's manifest are all
//! loaded before the first copy, so a bad input aborts with nothing written.
//! A failure after copying has started leaves the copied files in place.

use crate::error::{Result, ScaffoldError};
use crate::manifest::{merge_manifest, MergeSettings, PackageManifest, MANIFEST_FILE};
use crate::product::ProductConfig;
use crate::templates::registry::PUBLIC_DIR;
use crate::templates::{copy_subtree, TemplateDescriptor, TemplateRegistry};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory the boilerplate is copied into
pub const SOURCE_DIR: &str = "src";

/// Template bookkeeping file removed from the copied source tree
pub const SCRIPTS_ARTIFACT: &str = "scripts.json";

/// Readme moved from the copied source tree to the project root
pub const README_FILE: &str = "README.md";

/// Observable steps of a scaffold run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStep {
    ValidateDirectory,
    CopyPublicAssets,
    CopySourceTemplate,
    RemoveScriptsArtifact,
    RelocateReadme,
    MergeManifest,
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScaffoldStep::ValidateDirectory => "Checking project directory",
            ScaffoldStep::CopyPublicAssets => "Copying public assets",
            ScaffoldStep::CopySourceTemplate => "Copying boilerplate sources",
            ScaffoldStep::RemoveScriptsArtifact => "Removing template bookkeeping",
            ScaffoldStep::RelocateReadme => "Moving README",
            ScaffoldStep::MergeManifest => "Updating package.json",
        };
        f.write_str(label)
    }
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub public_dir: PathBuf,
    pub src_dir: PathBuf,
    pub files_copied: usize,
    pub readme_relocated: bool,
    pub manifest_path: PathBuf,
}

/// One scaffold operation for a selected boilerplate
#[derive(Debug, Clone)]
pub struct Scaffolder {
    registry: TemplateRegistry,
    boilerplate: String,
    descriptor: TemplateDescriptor,
    tool_manifest: PackageManifest,
    namespace: String,
}

impl Scaffolder {
    /// Load the descriptor of `boilerplate`; fails before anything is touched
    /// when the boilerplate is unknown.
    pub fn new(
        registry: TemplateRegistry,
        boilerplate: &str,
        tool_manifest: PackageManifest,
        namespace: impl Into<String>,
    ) -> Result<Self> {
        let descriptor = registry.load_descriptor(boilerplate)?;
        Ok(Self {
            registry,
            boilerplate: boilerplate.to_string(),
            descriptor,
            tool_manifest,
            namespace: namespace.into(),
        })
    }

    /// Build a scaffolder from a product's tool manifest and namespace
    pub fn from_config<C: ProductConfig>(
        config: &C,
        registry: TemplateRegistry,
        boilerplate: &str,
    ) -> Result<Self> {
        let tool_manifest = PackageManifest::from_json(
            Path::new(&format!("<{} tool manifest>", config.name())),
            config.tool_manifest(),
        )?;
        Self::new(registry, boilerplate, tool_manifest, config.config_namespace())
    }

    pub fn boilerplate(&self) -> &str {
        &self.boilerplate
    }

    pub fn descriptor(&self) -> &TemplateDescriptor {
        &self.descriptor
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Scaffold into `project_dir`
    pub fn run(&self, project_dir: &Path) -> Result<ScaffoldReport> {
        self.run_with_progress(project_dir, |_| {})
    }

    /// Scaffold into `project_dir`, reporting each step before it starts
    pub fn run_with_progress(
        &self,
        project_dir: &Path,
        mut on_step: impl FnMut(ScaffoldStep),
    ) -> Result<ScaffoldReport> {
        let project_dir =
            fs::canonicalize(project_dir).map_err(|e| ScaffoldError::io(project_dir, e))?;

        on_step(ScaffoldStep::ValidateDirectory);
        validate_project_dir(&project_dir)?;
        let manifest_path = project_dir.join(MANIFEST_FILE);
        let existing = PackageManifest::load(&manifest_path)?;

        on_step(ScaffoldStep::CopyPublicAssets);
        let public = copy_subtree(&self.registry, PUBLIC_DIR, &project_dir, PUBLIC_DIR)?;

        on_step(ScaffoldStep::CopySourceTemplate);
        let src = copy_subtree(&self.registry, &self.boilerplate, &project_dir, SOURCE_DIR)?;

        on_step(ScaffoldStep::RemoveScriptsArtifact);
        remove_scripts_artifact(&src.destination)?;

        on_step(ScaffoldStep::RelocateReadme);
        let readme_relocated = relocate_readme(&src.destination, &project_dir)?;

        on_step(ScaffoldStep::MergeManifest);
        let merged = merge_manifest(
            existing,
            &self.descriptor,
            &self.tool_manifest,
            MergeSettings {
                namespace: &self.namespace,
            },
        );
        merged.write_atomic(&manifest_path)?;

        // scripts.json and README.md left the source tree after copying
        let moved = src
            .files
            .iter()
            .filter(|f| *f == Path::new(SCRIPTS_ARTIFACT) || *f == Path::new(README_FILE))
            .count();
        let files_copied = public.files.len() + src.files.len() - moved + usize::from(readme_relocated);

        tracing::info!(
            boilerplate = %self.boilerplate,
            project = %project_dir.display(),
            files = files_copied,
            "scaffold complete"
        );

        Ok(ScaffoldReport {
            project_dir,
            public_dir: public.destination,
            src_dir: src.destination,
            files_copied,
            readme_relocated,
            manifest_path,
        })
    }
}

/// Refuse directories that already have a `src` entry.
///
/// Any error while probing is fatal rather than treated as "absent".
pub fn validate_project_dir(project_dir: &Path) -> Result<()> {
    let src = project_dir.join(SOURCE_DIR);
    match fs::symlink_metadata(&src) {
        Ok(_) => Err(ScaffoldError::SourceDirExists(src)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ScaffoldError::io(src, e)),
    }
}

/// Delete `scripts.json` from the copied source tree; absent is fine
pub fn remove_scripts_artifact(src_dir: &Path) -> Result<()> {
    let path = src_dir.join(SCRIPTS_ARTIFACT);
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ScaffoldError::io(path, e)),
    }
}

/// Move `src/README.md` to the project root, replacing any root README.
/// Returns false when the template ships no README.
pub fn relocate_readme(src_dir: &Path, project_dir: &Path) -> Result<bool> {
    let from = src_dir.join(README_FILE);
    if !from.is_file() {
        tracing::warn!(path = %from.display(), "template has no README, skipping");
        return Ok(false);
    }

    let to = project_dir.join(README_FILE);
    if to.is_file() {
        fs::remove_file(&to).map_err(|e| ScaffoldError::io(&to, e))?;
    }
    fs::rename(&from, &to).map_err(|e| ScaffoldError::io(&from, e))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_accepts_fresh_dir() {
        let dir = TempDir::new().unwrap();
        assert!(validate_project_dir(dir.path()).is_ok());
    }

    #[test]
    fn test_validate_rejects_src_dir_and_src_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        assert!(matches!(
            validate_project_dir(dir.path()),
            Err(ScaffoldError::SourceDirExists(_))
        ));

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("src"), "").unwrap();
        assert!(validate_project_dir(dir.path()).is_err());
    }

    #[test]
    fn test_remove_scripts_artifact_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        assert!(remove_scripts_artifact(dir.path()).is_ok());

        fs::write(dir.path().join(SCRIPTS_ARTIFACT), "{}").unwrap();
        remove_scripts_artifact(dir.path()).unwrap();
        assert!(!dir.path().join(SCRIPTS_ARTIFACT).exists());
    }

    #[test]
    fn test_relocate_readme_overwrites_root_readme() {
        let project = TempDir::new().unwrap();
        let src = project.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join(README_FILE), "# template").unwrap();
        fs::write(project.path().join(README_FILE), "# old").unwrap();

        assert!(relocate_readme(&src, project.path()).unwrap());
        assert_eq!(
            fs::read_to_string(project.path().join(README_FILE)).unwrap(),
            "# template"
        );
        assert!(!src.join(README_FILE).exists());
    }

    #[test]
    fn test_relocate_readme_skips_when_missing() {
        let project = TempDir::new().unwrap();
        let src = project.path().join("src");
        fs::create_dir(&src).unwrap();

        assert!(!relocate_readme(&src, project.path()).unwrap());
        assert!(!project.path().join(README_FILE).exists());
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(ScaffoldStep::MergeManifest.to_string(), "Updating package.json");
    }
}
