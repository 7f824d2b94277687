//! Package manager detection for yarn and npm

use std::fmt;
use std::process::Command;

/// Package managers a scaffolded project can be driven with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "Yarn",
        }
    }

    /// Prefix that runs a manifest script, e.g. `npm run build`
    pub fn command_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, binary: &str) -> ToolInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Yarn is available
pub fn check_yarn() -> ToolInfo {
    probe("Yarn", "yarnpkg")
}

/// Check if npm is available
pub fn check_npm() -> ToolInfo {
    probe("npm", "npm")
}

/// Decides which package manager the instructions are written for
pub trait PackageManagerDetector {
    fn detect(&self) -> PackageManager;
}

/// Probes the machine: Yarn when `yarnpkg --version` succeeds, npm otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDetector;

impl PackageManagerDetector for SystemDetector {
    fn detect(&self) -> PackageManager {
        let yarn = check_yarn();
        if yarn.available {
            tracing::debug!(version = ?yarn.version, "yarn detected");
            PackageManager::Yarn
        } else {
            if !check_npm().available {
                tracing::warn!("neither yarn nor npm found on PATH, assuming npm");
            }
            PackageManager::Npm
        }
    }
}

/// Always reports the same package manager
#[derive(Debug, Clone, Copy)]
pub struct FixedDetector(pub PackageManager);

impl PackageManagerDetector for FixedDetector {
    fn detect(&self) -> PackageManager {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_prefixes() {
        assert_eq!(PackageManager::Npm.command_prefix(), "npm run");
        assert_eq!(PackageManager::Yarn.command_prefix(), "yarn");
    }

    #[test]
    fn test_fixed_detector() {
        assert_eq!(FixedDetector(PackageManager::Yarn).detect(), PackageManager::Yarn);
        assert_eq!(FixedDetector(PackageManager::Npm).detect(), PackageManager::Npm);
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        let info = probe("Nothing", "definitely-not-a-package-manager-binary");
        assert!(!info.available);
        assert!(info.version.is_none());
    }
}
