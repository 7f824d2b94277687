//! Post-scaffold usage instructions
//!
//! Rendering never fails: write errors are dropped and a missing description
//! prints as an empty line.

use crate::runtime::PackageManagerDetector;
use crate::templates::descriptor::TemplateDescriptor;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Commands every scaffolded project supports
pub const DEFAULT_INSTRUCTIONS: [(&str, &str); 5] = [
    ("start", "Start the development server."),
    ("use <feature-name>", "Use a feature such as less,sass."),
    (
        "cover <file-name>",
        "Overwrite the configuration file, such as webpack.config.dev.js.",
    ),
    ("build", "Bundles the app into static files for production."),
    ("serve-build", "Serve the static files in the build folder."),
];

/// One command line of the instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub command: String,
    pub description: String,
}

/// Defaults overlaid with the descriptor's script entries.
///
/// A descriptor entry replaces the description of a same-named default and
/// appends new commands after the defaults. An entry without a description
/// keeps the default text, or renders empty when there is none.
pub fn collect_instructions(descriptor: &TemplateDescriptor) -> Vec<Instruction> {
    let mut instructions: Vec<Instruction> = DEFAULT_INSTRUCTIONS
        .iter()
        .map(|(command, description)| Instruction {
            command: command.to_string(),
            description: description.to_string(),
        })
        .collect();

    for (name, spec) in descriptor.scripts() {
        match instructions.iter_mut().find(|i| &i.command == name) {
            Some(existing) => {
                if let Some(description) = &spec.description {
                    existing.description = description.clone();
                }
            }
            None => instructions.push(Instruction {
                command: name.clone(),
                description: spec.description.clone().unwrap_or_default(),
            }),
        }
    }

    instructions
}

/// Write each instruction as a cyan command line plus its description
pub fn render_instructions<W: Write>(out: &mut W, instructions: &[Instruction], prefix: &str) {
    for instruction in instructions {
        let _ = writeln!(out, "{}", format!("  {} {}", prefix, instruction.command).cyan());
        let _ = writeln!(out, "     {}", instruction.description);
        let _ = writeln!(out);
    }
}

/// Success banner followed by the instructions for the detected package manager
pub fn render_success<W: Write>(
    out: &mut W,
    app_name: &str,
    project_dir: &Path,
    descriptor: &TemplateDescriptor,
    detector: &dyn PackageManagerDetector,
) {
    let package_manager = detector.detect();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Success!".green());
    let _ = writeln!(out, "Created {} at ", app_name.cyan());
    let _ = writeln!(out, "{}", project_dir.display());
    let _ = writeln!(out);
    let _ = writeln!(out, "Inside that directory, you can run several commands:");
    let _ = writeln!(out);
    let _ = writeln!(out);

    render_instructions(
        out,
        &collect_instructions(descriptor),
        package_manager.command_prefix(),
    );
}
