//! create-wp-theme's entry point.
//! Parses arguments, materializes the project and runs the post steps.

use std::path::Path;

use create_wp_theme::{
    cli::{get_args, Args},
    customize::CustomizationTargets,
    error::{default_error_handler, Result},
    ignore::ExclusionRules,
    logger::init_logger,
    metadata::MetadataInput,
    processor::{Materializer, Outcome},
    prompt::DialoguerPrompter,
    runner::{PostStep, PostSteps, StepReport, StepStatus, SystemRunner},
};
use log::debug;

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn print_next_steps(project_name: &str, steps: &PostSteps, reports: &[StepReport]) {
    let pm = &steps.package_manager;
    let installed = reports
        .iter()
        .any(|r| r.step == PostStep::Install && r.status == StepStatus::Succeeded);

    println!("\nProject created successfully!\n");
    println!("Next steps:\n");
    println!("  cd {project_name}");
    if !installed {
        println!("  {pm} install");
    }
    println!("  {pm} run dev         # Start development server");
    println!("  {pm} run build:prod  # Build for production\n");
    println!("The production build creates a WordPress theme zip file in the dist/ folder.");
    println!("Upload it via WordPress Admin > Appearance > Themes > Add New > Upload Theme\n");
}

fn report_steps(destination: &Path, steps: &PostSteps, reports: &[StepReport]) {
    for report in reports {
        match report.status {
            StepStatus::Succeeded => println!("Done: {}", report.step),
            StepStatus::Skipped => {}
            StepStatus::Failed => {
                eprintln!("Failed: {} in '{}'", report.step, destination.display());
                if report.step == PostStep::Install {
                    eprintln!(
                        "You can install dependencies manually by running: {} install",
                        steps.package_manager
                    );
                }
            }
        }
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Gathers and validates project metadata
/// 2. Materializes the template into `<output_dir>/<project_name>`
/// 3. Reports customization problems, if any
/// 4. Runs git init and dependency installation
fn run(args: Args) -> Result<()> {
    let stdin_input = if args.stdin {
        MetadataInput::from_reader(std::io::stdin().lock())?
    } else {
        MetadataInput::default()
    };
    let metadata = stdin_input.merge(args.metadata_input()).resolve()?;
    debug!("Project metadata: {}", serde_json::to_string(&metadata).unwrap_or_default());

    let destination = args.output_dir.join(metadata.project_name());
    let prompt = DialoguerPrompter::new();
    let materializer = Materializer::new(
        &prompt,
        args.template_dir(),
        ExclusionRules::with_defaults()?,
        CustomizationTargets::default(),
        args.force,
    );

    println!(
        "Creating '{}' from {}",
        metadata.theme_name(),
        materializer.template_root().display()
    );

    match materializer.materialize(&metadata, &destination)? {
        Outcome::Cancelled => {
            println!("Operation cancelled.");
            return Ok(());
        }
        Outcome::Degraded(failures) => {
            eprintln!("Some project files could not be customized:");
            for failure in &failures {
                eprintln!("  - {failure}");
            }
        }
        Outcome::Success => {}
    }

    let steps = PostSteps {
        git: !args.skip_git,
        install: !args.skip_install,
        package_manager: args.package_manager.clone(),
    };
    let reports = steps.run(&SystemRunner, &destination);
    report_steps(&destination, &steps, &reports);
    print_next_steps(metadata.project_name(), &steps, &reports);

    Ok(())
}
