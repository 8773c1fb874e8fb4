//! Project materialization.
//! Sequences the destination check, the optional removal of an existing
//! directory, the filtered template copy and the customization passes.

use crate::copier::{copy_tree, ensure_source_dir, paths_overlap};
use crate::customize::{
    customize_header, customize_html, customize_manifest, CustomizationTargets, FieldFailure,
};
use crate::error::{Error, Result};
use crate::ignore::ExclusionRules;
use crate::metadata::ProjectMetadata;
use crate::prompt::Prompter;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// How a materialization finished. Fatal failures are returned as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Tree copied and every field customized
    Success,
    /// Tree copied, but the listed fields could not be customized
    Degraded(Vec<FieldFailure>),
    /// The destination existed and overwriting was declined; nothing was touched
    Cancelled,
}

impl Outcome {
    /// Whether the template tree was written to the destination.
    pub fn is_copied(&self) -> bool {
        !matches!(self, Outcome::Cancelled)
    }
}

/// Turns the template tree into a personalized project.
pub struct Materializer<'a> {
    prompt: &'a dyn Prompter,
    template_root: PathBuf,
    rules: ExclusionRules,
    targets: CustomizationTargets,
    force: bool,
}

impl<'a> Materializer<'a> {
    /// Creates a materializer.
    ///
    /// # Arguments
    /// * `prompt` - Asked before an existing destination is removed
    /// * `template_root` - Template tree, never modified
    /// * `rules` - Entries left out of the copy
    /// * `targets` - Files and markers to customize
    /// * `force` - Overwrite an existing destination without asking
    pub fn new<P: Into<PathBuf>>(
        prompt: &'a dyn Prompter,
        template_root: P,
        rules: ExclusionRules,
        targets: CustomizationTargets,
        force: bool,
    ) -> Self {
        Self { prompt, template_root: template_root.into(), rules, targets, force }
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    /// Refuses a destination that is, contains or lies inside the template.
    ///
    /// Clearing such a destination would destroy the template, and copying
    /// into it would feed the copy back into itself.
    fn check_separate_from_template(&self, destination: &Path) -> Result<()> {
        if paths_overlap(&self.template_root, destination)? {
            return Err(Error::ValidationError(format!(
                "destination '{}' overlaps the template directory '{}'",
                destination.display(),
                self.template_root.display()
            )));
        }
        Ok(())
    }

    fn clear_destination(destination: &Path) -> Result<()> {
        debug!("Removing '{}'", destination.display());
        if destination.is_dir() {
            fs::remove_dir_all(destination).map_err(Error::IoError)
        } else {
            fs::remove_file(destination).map_err(Error::IoError)
        }
    }

    /// Materializes the project for `metadata` at `destination`.
    ///
    /// # Returns
    /// * `Outcome::Cancelled` if `destination` exists and overwriting was declined
    /// * `Outcome::Degraded` if the copy succeeded but some fields were not customized
    /// * `Outcome::Success` otherwise
    ///
    /// # Errors
    /// * `Error::IoError` if the template is missing or checking, removing or
    ///   copying fails; a partially copied tree is left in place
    /// * `Error::ValidationError` if `destination` and the template overlap
    /// * `Error::PromptError` if the overwrite question could not be asked
    pub fn materialize(&self, metadata: &ProjectMetadata, destination: &Path) -> Result<Outcome> {
        ensure_source_dir(&self.template_root)?;
        self.check_separate_from_template(destination)?;

        if destination.exists() {
            let overwrite = self.prompt.confirm(
                self.force,
                format!("Directory '{}' already exists. Overwrite?", destination.display()),
            )?;
            if !overwrite {
                info!("Operation cancelled, '{}' left untouched", destination.display());
                return Ok(Outcome::Cancelled);
            }
            Self::clear_destination(destination)?;
        }

        let copied = copy_tree(&self.template_root, destination, |name| {
            self.rules.should_include(name)
        })?;
        info!("Project structure created ({copied} files)");

        let mut failures = customize_manifest(destination, &self.targets, metadata);
        failures.extend(customize_header(destination, &self.targets, metadata));
        failures.extend(customize_html(destination, &self.targets, metadata));

        if failures.is_empty() {
            info!("Project files customized");
            Ok(Outcome::Success)
        } else {
            info!("Project files customized with {} problem(s)", failures.len());
            Ok(Outcome::Degraded(failures))
        }
    }
}
