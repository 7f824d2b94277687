//! Merge of a template descriptor into the project manifest
//!
//! Order of operations:
//!
//! 1. The project's `scripts` table is rebuilt from the tool's own scripts,
//!    minus the scaffolding trigger, with internal invocations collapsed.
//! 2. The tool configuration block is written under the product namespace.
//! 3. `babel` and `eslintConfig` are taken from the tool manifest.
//! 4. Descriptor fields are applied in order: `scripts` entries are merged
//!    into the table (descriptor wins on collision), every other field
//!    replaces the manifest field outright.

use super::scripts::rewrite_internal_invocation;
use super::PackageManifest;
use crate::templates::descriptor::{DescriptorField, TemplateDescriptor, SCRIPTS_FIELD};
use serde_json::{json, Map, Value};

/// Script that triggers scaffolding; meaningless once the project exists
pub const SCAFFOLD_TRIGGER_SCRIPT: &str = "init";

/// Fields inherited verbatim from the tool manifest
pub const INHERITED_FIELDS: [&str; 2] = ["babel", "eslintConfig"];

/// Product-specific merge inputs
#[derive(Debug, Clone, Copy)]
pub struct MergeSettings<'a> {
    /// Top-level key holding the tool configuration block
    pub namespace: &'a str,
}

/// Configuration block written under the product namespace
pub fn tool_config_block() -> Value {
    json!({
        "historyApiFallback": {
            "verbose": true
        }
    })
}

/// Merge `descriptor` and the tool manifest into `existing`.
///
/// Pure: the caller decides whether and where the result is written.
pub fn merge_manifest(
    existing: PackageManifest,
    descriptor: &TemplateDescriptor,
    tool: &PackageManifest,
    settings: MergeSettings<'_>,
) -> PackageManifest {
    let mut manifest = existing;
    let fields = manifest.fields_mut();

    let mut scripts = Map::new();
    for (name, command) in tool.script_commands() {
        if name == SCAFFOLD_TRIGGER_SCRIPT {
            continue;
        }
        let command = rewrite_internal_invocation(command);
        tracing::debug!(script = name, command = %command, "inherited tool script");
        scripts.insert(name.to_string(), Value::String(command.into_owned()));
    }

    // Reserve the slot now so a manifest without scripts gets them ahead of
    // the namespace block
    fields.insert(SCRIPTS_FIELD.to_string(), Value::Object(Map::new()));
    fields.insert(settings.namespace.to_string(), tool_config_block());

    for field in INHERITED_FIELDS {
        match tool.get(field) {
            Some(value) => {
                fields.insert(field.to_string(), value.clone());
            }
            None => fields.retain(|name, _| name != field),
        }
    }

    for (name, field) in descriptor.fields() {
        match field {
            DescriptorField::Scripts(entries) => {
                for (script, spec) in entries {
                    if script == SCAFFOLD_TRIGGER_SCRIPT {
                        continue;
                    }
                    if let Some(command) = &spec.script {
                        scripts.insert(script.clone(), Value::String(command.clone()));
                    }
                }
            }
            DescriptorField::Generic(value) => {
                fields.insert(name.to_string(), value.clone());
            }
        }
    }

    fields.insert(SCRIPTS_FIELD.to_string(), Value::Object(scripts));

    manifest
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const NAMESPACE: &str = "react-boilerplate-app-scripts";

    fn manifest(value: Value) -> PackageManifest {
        PackageManifest::from_json(Path::new("package.json"), &value.to_string()).unwrap()
    }

    fn descriptor(value: Value) -> TemplateDescriptor {
        TemplateDescriptor::from_json(Path::new("config.json"), &value.to_string()).unwrap()
    }

    fn tool() -> PackageManifest {
        manifest(json!({
            "name": "react-boilerplate-app-scripts",
            "scripts": {
                "init": "node ./bin/init.js",
                "start": "node ./bin/start.js",
                "build": "cross-env NODE_ENV=production node ./bin/build.js",
                "lint": "eslint src"
            },
            "babel": { "presets": ["react-app"] },
            "eslintConfig": { "extends": "react-app" }
        }))
    }

    fn settings() -> MergeSettings<'static> {
        MergeSettings {
            namespace: NAMESPACE,
        }
    }

    #[test]
    fn test_scalar_fields_overwrite_and_scripts_union() {
        let tool = manifest(json!({ "scripts": { "x": "old" } }));
        let merged = merge_manifest(
            manifest(json!({ "a": 1, "scripts": { "x": "old" } })),
            &descriptor(json!({
                "a": 2,
                "scripts": { "x": { "script": "new" }, "y": { "script": "add" } }
            })),
            &tool,
            settings(),
        );

        assert_eq!(merged.get("a"), Some(&json!(2)));
        assert_eq!(merged.get("scripts"), Some(&json!({ "x": "new", "y": "add" })));
    }

    #[test]
    fn test_scripts_rebuilt_from_tool_without_trigger() {
        let merged = merge_manifest(
            manifest(json!({ "name": "app", "scripts": { "test": "jest" } })),
            &descriptor(json!({})),
            &tool(),
            settings(),
        );

        assert_eq!(
            merged.get("scripts"),
            Some(&json!({
                "start": "start",
                "build": "cross-env NODE_ENV=production build",
                "lint": "eslint src"
            }))
        );
    }

    #[test]
    fn test_trigger_script_never_survives() {
        let merged = merge_manifest(
            manifest(json!({ "scripts": { "init": "whatever" } })),
            &descriptor(json!({ "scripts": { "init": { "script": "node ./bin/init.js" } } })),
            &tool(),
            settings(),
        );

        let scripts = merged.get("scripts").and_then(Value::as_object).unwrap();
        assert!(!scripts.contains_key("init"));
    }

    #[test]
    fn test_namespace_block_and_inherited_fields() {
        let merged = merge_manifest(
            manifest(json!({ "name": "app", "babel": { "presets": ["env"] } })),
            &descriptor(json!({})),
            &tool(),
            settings(),
        );

        assert_eq!(
            merged.get(NAMESPACE),
            Some(&json!({ "historyApiFallback": { "verbose": true } }))
        );
        assert_eq!(merged.get("babel"), Some(&json!({ "presets": ["react-app"] })));
        assert_eq!(merged.get("eslintConfig"), Some(&json!({ "extends": "react-app" })));
    }

    #[test]
    fn test_field_missing_from_tool_is_dropped() {
        let merged = merge_manifest(
            manifest(json!({ "name": "app", "eslintConfig": { "extends": "airbnb" } })),
            &descriptor(json!({})),
            &manifest(json!({ "scripts": {} })),
            settings(),
        );

        assert_eq!(merged.get("eslintConfig"), None);
        assert_eq!(merged.get("name"), Some(&json!("app")));
    }

    #[test]
    fn test_descriptor_fields_replace_without_deep_merge() {
        let merged = merge_manifest(
            manifest(json!({ "dependencies": { "lodash": "^4.0.0", "react": "^15.0.0" } })),
            &descriptor(json!({ "dependencies": { "react": "^16.0.0" } })),
            &tool(),
            settings(),
        );

        assert_eq!(merged.get("dependencies"), Some(&json!({ "react": "^16.0.0" })));
    }

    #[test]
    fn test_descriptor_can_override_inherited_fields() {
        let merged = merge_manifest(
            manifest(json!({})),
            &descriptor(json!({ "eslintConfig": { "extends": "custom" } })),
            &tool(),
            settings(),
        );

        assert_eq!(merged.get("eslintConfig"), Some(&json!({ "extends": "custom" })));
    }

    #[test]
    fn test_description_only_entries_leave_table_alone() {
        let merged = merge_manifest(
            manifest(json!({})),
            &descriptor(json!({ "scripts": { "start": { "description": "Start it." } } })),
            &tool(),
            settings(),
        );

        let scripts = merged.get("scripts").and_then(Value::as_object).unwrap();
        assert_eq!(scripts.get("start"), Some(&json!("start")));
    }

    #[test]
    fn test_existing_field_order_is_kept() {
        let merged = merge_manifest(
            manifest(json!({ "name": "app", "scripts": {}, "version": "1.0.0" })),
            &descriptor(json!({ "private": true })),
            &tool(),
            settings(),
        );

        let keys: Vec<&str> = merged.fields().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["name", "scripts", "version", NAMESPACE, "babel", "eslintConfig", "private"]
        );
    }

    #[test]
    fn test_scripts_added_ahead_of_namespace_when_absent() {
        let merged = merge_manifest(
            manifest(json!({ "name": "app" })),
            &descriptor(json!({})),
            &tool(),
            settings(),
        );

        let keys: Vec<&str> = merged.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "scripts", NAMESPACE, "babel", "eslintConfig"]);
    }
}
