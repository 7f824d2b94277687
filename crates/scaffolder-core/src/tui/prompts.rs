//! Charm-style CLI prompts using cliclack

use crate::config::template_root_for;
use crate::instructions;
use crate::product::ProductConfig;
use crate::scaffold::{ScaffoldReport, Scaffolder};
use crate::templates::TemplateRegistry;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the bundled store
    pub template_dir: Option<PathBuf>,

    /// Boilerplate name to use
    pub boilerplate: Option<String>,

    /// Project directory to scaffold into
    pub directory: Option<PathBuf>,

    /// Name shown in the success banner
    pub app_name: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the scaffold with inline prompts and progress output
pub fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Locate the template store and load the descriptor
    let registry = setup_registry(config, args.template_dir.as_deref())?;
    let boilerplate = args
        .boilerplate
        .as_deref()
        .unwrap_or(config.default_boilerplate());
    let scaffolder = Scaffolder::from_config(config, registry, boilerplate)?;
    cliclack::log::info(format!("Boilerplate: {}", scaffolder.boilerplate()))?;

    // Step 2: Resolve and confirm the project directory
    let project_dir = select_directory(&args)?;
    if !args.yes {
        let confirm: bool = cliclack::confirm(format!(
            "Scaffold {} into {}?",
            scaffolder.boilerplate(),
            project_dir.display()
        ))
        .initial_value(true)
        .interact()?;

        if !confirm {
            anyhow::bail!("Setup cancelled.");
        }
    }

    // Step 3: Materialize and merge
    let report = create_project(&scaffolder, &project_dir)?;

    // Step 4: Show how to use the project
    let app_name = args
        .app_name
        .clone()
        .unwrap_or_else(|| default_app_name(&report.project_dir));
    print_instructions(config, &scaffolder, &app_name, &report);

    cliclack::outro("Happy coding!")?;

    Ok(())
}

/// Print the boilerplates available in the template store
pub fn list<C: ProductConfig>(config: &C, template_dir: Option<&Path>) -> Result<()> {
    let registry = TemplateRegistry::from_local(template_root_for(config, template_dir));
    let names = registry.available_boilerplates();

    if names.is_empty() {
        anyhow::bail!("No templates found in {}", registry.root().display());
    }

    println!();
    println!("  Available boilerplates");
    println!();
    for name in names {
        if name == config.default_boilerplate() {
            println!("  - {} (default)", name);
        } else {
            println!("  - {}", name);
        }
    }
    println!();

    Ok(())
}

fn setup_registry<C: ProductConfig>(
    config: &C,
    template_dir: Option<&Path>,
) -> Result<TemplateRegistry> {
    let root = template_root_for(config, template_dir);
    if template_dir.is_some() {
        cliclack::log::info(format!("Using local templates from {}", root.display()))?;
    }
    Ok(TemplateRegistry::from_local(root))
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }

    Ok(path)
}

fn create_project(scaffolder: &Scaffolder, project_dir: &Path) -> Result<ScaffoldReport> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match scaffolder.run_with_progress(project_dir, |step| spinner.set_message(step)) {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files in {}",
                report.files_copied,
                report.project_dir.display()
            ));
            Ok(report)
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            Err(e.into())
        }
    }
}

fn default_app_name(project_dir: &Path) -> String {
    project_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_dir.display().to_string())
}

fn print_instructions<C: ProductConfig>(
    config: &C,
    scaffolder: &Scaffolder,
    app_name: &str,
    report: &ScaffoldReport,
) {
    let detector = config.package_manager_detector();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    instructions::render_success(
        &mut out,
        app_name,
        &report.project_dir,
        scaffolder.descriptor(),
        detector.as_ref(),
    );
}
