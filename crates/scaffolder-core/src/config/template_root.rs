//! Template store location

use crate::product::ProductConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Directory name of a template store
pub const TEMPLATES_DIR: &str = "templates";

/// Pick the template root: explicit flag, then environment, then default.
/// An empty environment value counts as unset.
pub fn resolve_template_root(
    flag: Option<&Path>,
    env_value: Option<OsString>,
    default: PathBuf,
) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => default,
    }
}

/// Template root for a product, reading its override variable from the environment
pub fn template_root_for<C: ProductConfig>(config: &C, flag: Option<&Path>) -> PathBuf {
    let root = resolve_template_root(
        flag,
        std::env::var_os(config.template_root_env()),
        config.default_template_root(),
    );
    tracing::debug!(root = %root.display(), "resolved template root");
    root
}

/// Places a template store is looked for relative to an executable, in order:
///
/// - `<bin>/templates`, a self-contained bundle
/// - `<prefix>/share/<product>/templates`, a prefix install of `<prefix>/bin/<exe>`
/// - `<checkout>/templates`, for an executable under `<checkout>/target/`
pub fn template_root_candidates(exe: &Path, product: &str) -> Vec<PathBuf> {
    let Some(bin_dir) = exe.parent() else {
        return Vec::new();
    };

    let mut candidates = vec![bin_dir.join(TEMPLATES_DIR)];
    if let Some(prefix) = bin_dir.parent() {
        candidates.push(prefix.join("share").join(product).join(TEMPLATES_DIR));
    }
    if let Some(checkout) = exe
        .ancestors()
        .find(|dir| dir.file_name().is_some_and(|name| name == "target"))
        .and_then(Path::parent)
    {
        candidates.push(checkout.join(TEMPLATES_DIR));
    }
    candidates
}

/// First existing store among [`template_root_candidates`]. When none exists
/// the bundle location is returned, so the failure names where it was expected.
pub fn template_root_beside(exe: &Path, product: &str) -> PathBuf {
    let candidates = template_root_candidates(exe, product);
    match candidates.iter().find(|dir| dir.is_dir()) {
        Some(found) => found.clone(),
        None => candidates
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from(TEMPLATES_DIR)),
    }
}

/// Template store of the running executable, after resolving links to it
pub fn installed_template_root(product: &str) -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => {
            let exe = exe.canonicalize().unwrap_or(exe);
            template_root_beside(&exe, product)
        }
        Err(e) => {
            tracing::warn!(error = %e, "cannot locate the running executable");
            PathBuf::from(TEMPLATES_DIR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PRODUCT: &str = "react-boilerplate-scripts";

    #[test]
    fn test_flag_wins() {
        let root = resolve_template_root(
            Some(Path::new("/flag")),
            Some(OsString::from("/env")),
            PathBuf::from("/default"),
        );
        assert_eq!(root, PathBuf::from("/flag"));
    }

    #[test]
    fn test_env_beats_default() {
        let root = resolve_template_root(None, Some(OsString::from("/env")), PathBuf::from("/default"));
        assert_eq!(root, PathBuf::from("/env"));
    }

    #[test]
    fn test_empty_env_falls_back_to_default() {
        let root = resolve_template_root(None, Some(OsString::new()), PathBuf::from("/default"));
        assert_eq!(root, PathBuf::from("/default"));

        let root = resolve_template_root(None, None, PathBuf::from("/default"));
        assert_eq!(root, PathBuf::from("/default"));
    }

    #[test]
    fn test_bundle_beside_executable() {
        let install = TempDir::new().unwrap();
        let bin = install.path().join("bin");
        fs::create_dir_all(bin.join(TEMPLATES_DIR)).unwrap();
        fs::create_dir_all(install.path().join("share").join(PRODUCT).join(TEMPLATES_DIR)).unwrap();

        let root = template_root_beside(&bin.join(PRODUCT), PRODUCT);
        assert_eq!(root, bin.join(TEMPLATES_DIR));
    }

    #[test]
    fn test_prefix_install_uses_share_dir() {
        let prefix = TempDir::new().unwrap();
        let store = prefix.path().join("share").join(PRODUCT).join(TEMPLATES_DIR);
        fs::create_dir_all(&store).unwrap();

        let root = template_root_beside(&prefix.path().join("bin").join(PRODUCT), PRODUCT);
        assert_eq!(root, store);
    }

    #[test]
    fn test_source_checkout_build_uses_checkout_store() {
        let checkout = TempDir::new().unwrap();
        fs::create_dir_all(checkout.path().join(TEMPLATES_DIR)).unwrap();

        for exe in [
            checkout.path().join("target/debug").join(PRODUCT),
            checkout.path().join("target/release/deps/react_boilerplate_scripts-0a1b2c"),
        ] {
            assert_eq!(template_root_beside(&exe, PRODUCT), checkout.path().join(TEMPLATES_DIR));
        }
    }

    #[test]
    fn test_missing_store_points_beside_executable() {
        let install = TempDir::new().unwrap();
        let exe = install.path().join("bin").join(PRODUCT);

        assert_eq!(template_root_beside(&exe, PRODUCT), install.path().join("bin/templates"));
    }

    #[test]
    fn test_default_follows_running_executable() {
        let exe = std::env::current_exe().unwrap();
        let exe = exe.canonicalize().unwrap_or(exe);
        assert_eq!(installed_template_root(PRODUCT), template_root_beside(&exe, PRODUCT));
    }
}
