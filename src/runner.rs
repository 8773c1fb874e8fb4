//! External commands run after a project has been materialized:
//! version-control initialization and dependency installation.

use crate::constants::DEFAULT_PACKAGE_MANAGER;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs a program to completion.
pub trait ProcessRunner {
    /// Runs `program` with `args` inside `workdir`.
    ///
    /// # Returns
    /// * `Result<bool>` - Whether the process exited successfully
    ///
    /// # Errors
    /// * `Error::ProcessError` if the process could not be started
    fn run(&self, program: &str, args: &[&str], workdir: &Path) -> Result<bool>;
}

/// Spawns real processes with their output discarded.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], workdir: &Path) -> Result<bool> {
        debug!("Running '{} {}' in '{}'", program, args.join(" "), workdir.display());
        let status = Command::new(program)
            .args(args)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Error::ProcessError(format!("failed to run '{program}': {e}")))?;
        Ok(status.success())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStep {
    GitInit,
    Install,
}

impl fmt::Display for PostStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStep::GitInit => write!(f, "git repository initialization"),
            PostStep::Install => write!(f, "dependency installation"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub step: PostStep,
    pub status: StepStatus,
}

/// Which post-materialization steps to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSteps {
    pub git: bool,
    pub install: bool,
    pub package_manager: String,
}

impl Default for PostSteps {
    fn default() -> Self {
        Self { git: true, install: true, package_manager: DEFAULT_PACKAGE_MANAGER.to_string() }
    }
}

fn run_step(
    runner: &dyn ProcessRunner,
    step: PostStep,
    enabled: bool,
    program: &str,
    args: &[&str],
    workdir: &Path,
) -> StepReport {
    if !enabled {
        debug!("Skipping {step}");
        return StepReport { step, status: StepStatus::Skipped };
    }

    let status = match runner.run(program, args, workdir) {
        Ok(true) => StepStatus::Succeeded,
        Ok(false) => {
            warn!("{step} exited with a failure status");
            StepStatus::Failed
        }
        Err(e) => {
            warn!("{step} failed: {e}");
            StepStatus::Failed
        }
    };
    StepReport { step, status }
}

impl PostSteps {
    /// Runs `git init` and then `<package manager> install` in `workdir`.
    ///
    /// A failing step never prevents the next one.
    pub fn run(&self, runner: &dyn ProcessRunner, workdir: &Path) -> Vec<StepReport> {
        vec![
            run_step(runner, PostStep::GitInit, self.git, "git", &["init"], workdir),
            run_step(
                runner,
                PostStep::Install,
                self.install,
                &self.package_manager,
                &["install"],
                workdir,
            ),
        ]
    }
}
