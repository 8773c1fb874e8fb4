//! Command-line interface implementation for create-wp-theme.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::{DEFAULT_PACKAGE_MANAGER, TEMPLATE_DIR};
use crate::metadata::MetadataInput;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for create-wp-theme.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Create a new WordPress theme powered by React, TypeScript, and Vite",
    long_about = None
)]
pub struct Args {
    /// Name of the project; letters, numbers, dashes, and underscores only
    #[arg(value_name = "PROJECT_NAME", required_unless_present = "stdin")]
    pub project_name: Option<String>,

    /// WordPress theme name (defaults to the title-cased project name)
    #[arg(long)]
    pub theme_name: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Template directory (defaults to the template bundled with the executable)
    #[arg(short, long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// Overwrite an existing project directory without asking
    #[arg(short, long)]
    pub force: bool,

    /// Read project metadata as a JSON object from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Skip git initialization
    #[arg(long)]
    pub skip_git: bool,

    /// Skip dependency installation
    #[arg(long)]
    pub skip_install: bool,

    /// Package manager used to install dependencies
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_PACKAGE_MANAGER)]
    pub package_manager: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Metadata given through flags.
    pub fn metadata_input(&self) -> MetadataInput {
        MetadataInput {
            project_name: self.project_name.clone(),
            theme_name: self.theme_name.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
        }
    }

    /// The explicit template, else `template/` next to the executable, else
    /// `./template`.
    pub fn template_dir(&self) -> PathBuf {
        if let Some(template) = &self.template {
            return template.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATE_DIR)))
            .filter(|dir| dir.is_dir())
            .unwrap_or_else(|| PathBuf::from(TEMPLATE_DIR))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
