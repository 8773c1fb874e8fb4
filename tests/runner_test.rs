use create_wp_theme::error::{Error, Result};
use create_wp_theme::runner::{PostStep, PostSteps, ProcessRunner, StepReport, StepStatus};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Records invocations and answers from a queue of results.
struct RecordingRunner {
    calls: RefCell<Vec<(String, Vec<String>, PathBuf)>>,
    results: RefCell<Vec<Result<bool>>>,
}

impl RecordingRunner {
    fn new(results: Vec<Result<bool>>) -> Self {
        Self { calls: RefCell::new(Vec::new()), results: RefCell::new(results) }
    }

    fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(program, args, _)| format!("{} {}", program, args.join(" ")))
            .collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], workdir: &Path) -> Result<bool> {
        self.calls.borrow_mut().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
            workdir.to_path_buf(),
        ));
        self.results.borrow_mut().remove(0)
    }
}

#[test]
fn test_runs_git_then_install() {
    let runner = RecordingRunner::new(vec![Ok(true), Ok(true)]);
    let reports = PostSteps::default().run(&runner, Path::new("/tmp/site"));

    assert_eq!(runner.commands(), vec!["git init", "npm install"]);
    assert!(runner.calls.borrow().iter().all(|(_, _, dir)| dir == Path::new("/tmp/site")));
    assert_eq!(
        reports,
        vec![
            StepReport { step: PostStep::GitInit, status: StepStatus::Succeeded },
            StepReport { step: PostStep::Install, status: StepStatus::Succeeded },
        ]
    );
}

#[test]
fn test_skipped_steps_are_not_run() {
    let runner = RecordingRunner::new(vec![Ok(true)]);
    let steps = PostSteps { git: false, install: true, package_manager: "pnpm".to_string() };
    let reports = steps.run(&runner, Path::new("."));

    assert_eq!(runner.commands(), vec!["pnpm install"]);
    assert_eq!(reports[0].status, StepStatus::Skipped);
    assert_eq!(reports[1].status, StepStatus::Succeeded);
}

#[test]
fn test_failure_does_not_stop_next_step() {
    let runner = RecordingRunner::new(vec![
        Err(Error::ProcessError("git not found".to_string())),
        Ok(false),
    ]);
    let reports = PostSteps::default().run(&runner, Path::new("."));

    assert_eq!(runner.commands().len(), 2);
    assert!(reports.iter().all(|r| r.status == StepStatus::Failed));
}

#[test]
fn test_nothing_runs_when_all_skipped() {
    let runner = RecordingRunner::new(Vec::new());
    let steps = PostSteps { git: false, install: false, ..Default::default() };
    let reports = steps.run(&runner, Path::new("."));

    assert!(runner.commands().is_empty());
    assert!(reports.iter().all(|r| r.status == StepStatus::Skipped));
}
