//! react-boilerplate-scripts - Project scaffolding for React boilerplates

use clap::{Parser, Subcommand};
use colored::Colorize;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{ProductConfig, ScaffoldError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Package manifest of the scripts package itself. Its scripts, `babel` and
/// `eslintConfig` are merged into every generated project.
const TOOL_MANIFEST: &str = include_str!("../scripts-package.json");

/// react-boilerplate product configuration
#[derive(Clone)]
pub struct ReactBoilerplateConfig;

impl ProductConfig for ReactBoilerplateConfig {
    fn name(&self) -> &'static str {
        "react-boilerplate-scripts"
    }

    fn display_name(&self) -> &'static str {
        "React Boilerplate"
    }

    fn default_boilerplate(&self) -> &'static str {
        "mvc-react"
    }

    fn config_namespace(&self) -> &'static str {
        "react-boilerplate-app-scripts"
    }

    fn template_root_env(&self) -> &'static str {
        "REACT_BOILERPLATE_TEMPLATE_DIR"
    }

    fn tool_manifest(&self) -> &'static str {
        TOOL_MANIFEST
    }
}

#[derive(Parser, Debug)]
#[command(name = "react-boilerplate-scripts")]
#[command(about = "CLI for scaffolding React boilerplate projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a boilerplate into an existing project
    Init(InitArgs),
    /// List the boilerplates in the template directory
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Boilerplate name to use
    #[arg(short, long)]
    pub boilerplate: Option<String>,

    /// Project directory containing package.json (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Name shown in the success message (defaults to the directory name)
    #[arg(long = "app-name")]
    pub app_name: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<InitArgs> for CreateArgs {
    fn from(args: InitArgs) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            boilerplate: args.boilerplate,
            directory: args.directory,
            app_name: args.app_name,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Local directory containing templates (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ReactBoilerplateConfig;

    let result = match args.command {
        Some(Command::Init(init_args)) => scaffolder_core::run(&config, init_args.into()),
        Some(Command::List(list_args)) => {
            scaffolder_core::tui::list(&config, list_args.template_dir.as_deref())
        }
        // No subcommand provided, default to init with defaults
        None => scaffolder_core::run(&config, CreateArgs::default()),
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    exit_code(result, &mut std::io::stderr())
}

/// How a failed run is shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Warning,
    Error,
}

impl Severity {
    fn of(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ScaffoldError>() {
            Some(scaffold_err) if scaffold_err.is_warning() => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// The one place a run's outcome is reported. Any failure exits non-zero.
fn exit_code<W: Write>(result: anyhow::Result<()>, out: &mut W) -> ExitCode {
    let Err(err) = result else {
        return ExitCode::SUCCESS;
    };
    tracing::debug!(error = ?err, "scaffold failed");

    let message = format!("{:#}", err);
    let _ = match Severity::of(&err) {
        Severity::Warning => writeln!(out, "{}", message.yellow()),
        Severity::Error => writeln!(out, "{}", message.red()),
    };
    ExitCode::FAILURE
}
