use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use msgbox::app::commands::prompt::execute;
use msgbox::{
    AppContext, AppError, CancellationToken, Decision, DecisionPolicy, LaunchRequest, LaunchResult,
    ProcessLauncher, ProcessSpawner, PromptMode, PromptOptions, PromptOutcome, PromptPresenter,
    PromptSpec, Timer, TimerState,
};

/// User who clicks after a delay, or never.
struct User {
    answer: Option<(PromptOutcome, Duration)>,
}

impl PromptPresenter for User {
    fn present(&self, _spec: &PromptSpec, cancel: &CancellationToken) -> PromptOutcome {
        match &self.answer {
            Some((outcome, after)) => {
                thread::sleep(*after);
                outcome.clone()
            }
            None => {
                cancel.wait();
                PromptOutcome::TimedOut
            }
        }
    }
}

/// Counts how often the prompt is shown; always answers Yes.
struct Counting(Arc<AtomicUsize>);

impl PromptPresenter for Counting {
    fn present(&self, _spec: &PromptSpec, _cancel: &CancellationToken) -> PromptOutcome {
        self.0.fetch_add(1, Ordering::SeqCst);
        PromptOutcome::Yes
    }
}

#[derive(Clone, Default)]
struct Spawns(Arc<Mutex<Vec<PathBuf>>>);

impl Spawns {
    fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl ProcessSpawner for Spawns {
    fn spawn_detached(&self, executable: &Path) -> io::Result<()> {
        self.0.lock().unwrap().push(executable.to_path_buf());
        Ok(())
    }
}

fn run(user: User, timeout: Duration, auto_yes: bool, exe: &str) -> (Decision, usize) {
    let spawns = Spawns::default();
    let ctx = AppContext::new(Arc::new(user), spawns.clone());
    let options = PromptOptions {
        spec: PromptSpec::new("Run backup?", "Backup", PromptMode::YesNo, timeout),
        policy: DecisionPolicy::new(auto_yes),
        launch: Some(LaunchRequest::new(exe)),
    };
    let report = execute(&ctx, &options).unwrap();
    (report.decision, spawns.count())
}

#[test]
fn early_yes_proceeds_and_launches_once() {
    let user = User { answer: Some((PromptOutcome::Yes, Duration::from_millis(10))) };
    let (decision, spawns) = run(user, Duration::from_millis(500), false, "/usr/bin/backup");
    assert_eq!(decision, Decision::Proceed);
    assert_eq!(spawns, 1);
}

#[test]
fn silence_with_auto_yes_launches_once() {
    let (decision, spawns) =
        run(User { answer: None }, Duration::from_millis(30), true, "/usr/bin/backup");
    assert_eq!(decision, Decision::Proceed);
    assert_eq!(spawns, 1);
}

#[test]
fn silence_without_auto_yes_never_launches() {
    let (decision, spawns) =
        run(User { answer: None }, Duration::from_millis(30), false, "/usr/bin/backup");
    assert_eq!(decision, Decision::Skip);
    assert_eq!(spawns, 0);
}

#[test]
fn late_answer_is_discarded() {
    let user = User { answer: Some((PromptOutcome::Yes, Duration::from_millis(300))) };
    let (decision, spawns) = run(user, Duration::from_millis(20), false, "/usr/bin/backup");
    assert_eq!(decision, Decision::Skip);
    assert_eq!(spawns, 0);
}

#[test]
fn yes_no_without_executable_is_rejected_before_prompting() {
    let shown = Arc::new(AtomicUsize::new(0));
    let ctx = AppContext::new(Arc::new(Counting(Arc::clone(&shown))), Spawns::default());
    let options = PromptOptions {
        spec: PromptSpec::new("Run backup?", "Backup", PromptMode::YesNo, Duration::from_secs(5)),
        policy: DecisionPolicy::new(true),
        launch: None,
    };

    assert!(matches!(execute(&ctx, &options), Err(AppError::MissingExecutable)));
    assert_eq!(shown.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_path_fails_without_spawning() {
    let spawns = Spawns::default();
    let launcher = ProcessLauncher::new(spawns.clone());
    assert_eq!(
        launcher.launch(&LaunchRequest::new("")),
        LaunchResult::Failed("missing executable path".to_string())
    );
    assert_eq!(spawns.count(), 0);
}

#[test]
fn timer_is_safe_to_cancel_repeatedly() {
    let handle = Timer::start(Duration::ZERO, |_| {});
    handle.cancel();
    handle.cancel();
    assert_eq!(handle.state(), TimerState::Elapsed);
}
