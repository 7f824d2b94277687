//! Template descriptor (`config.json`) parsing
//!
//! A descriptor looks like a package.json fragment. The `scripts` field is
//! special: each entry carries a command plus the description shown in the
//! post-scaffold instructions. Every other field is copied over the project
//! manifest as-is.

use crate::error::{Result, ScaffoldError};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Name of the descriptor field merged additively into the manifest
pub const SCRIPTS_FIELD: &str = "scripts";

/// One entry of a descriptor's `scripts` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScriptSpec {
    /// Command written into the project manifest. Entries without one only
    /// contribute to the instructions.
    #[serde(default)]
    pub script: Option<String>,

    /// Text printed under the command in the instructions
    #[serde(default)]
    pub description: Option<String>,
}

/// A descriptor field, tagged by how it merges into the manifest
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorField {
    /// Merged into the manifest script table, template entries winning
    Scripts(Vec<(String, ScriptSpec)>),
    /// Replaces the manifest field of the same name outright
    Generic(Value),
}

/// Parsed `config.json` of one boilerplate, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateDescriptor {
    fields: Vec<(String, DescriptorField)>,
}

impl TemplateDescriptor {
    /// Parse descriptor text. `path` is only used for error messages.
    pub fn from_json(path: &Path, text: &str) -> Result<Self> {
        let invalid = |reason: String| ScaffoldError::InvalidDescriptor {
            path: path.to_path_buf(),
            reason,
        };

        let value: Value = serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
        let Value::Object(object) = value else {
            return Err(invalid("expected a JSON object".to_string()));
        };

        let mut fields = Vec::with_capacity(object.len());
        for (name, value) in object {
            let field = if name == SCRIPTS_FIELD {
                DescriptorField::Scripts(parse_scripts(value).map_err(invalid)?)
            } else {
                DescriptorField::Generic(value)
            };
            fields.push((name, field));
        }

        Ok(Self { fields })
    }

    /// All fields in descriptor order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &DescriptorField)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// The `scripts` entries, empty when the descriptor declares none
    pub fn scripts(&self) -> &[(String, ScriptSpec)] {
        self.fields
            .iter()
            .find_map(|(_, field)| match field {
                DescriptorField::Scripts(scripts) => Some(scripts.as_slice()),
                DescriptorField::Generic(_) => None,
            })
            .unwrap_or(&[])
    }
}

fn parse_scripts(value: Value) -> std::result::Result<Vec<(String, ScriptSpec)>, String> {
    let Value::Object(entries) = value else {
        return Err(format!("`{}` must be an object", SCRIPTS_FIELD));
    };

    entries
        .into_iter()
        .map(|(name, entry)| {
            serde_json::from_value::<ScriptSpec>(entry)
                .map(|spec| (name.clone(), spec))
                .map_err(|e| format!("script `{}`: {}", name, e))
        })
        .collect()
}
