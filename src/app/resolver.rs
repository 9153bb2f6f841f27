//! Race between the prompt and its timeout.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, info, warn};

use crate::app::timer::{Timer, TimerSignal};
use crate::domain::{Decision, DecisionPolicy, PromptOutcome, PromptSpec};
use crate::ports::{CancellationToken, PromptPresenter};

/// A resolved prompt: what happened and what to do about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: PromptOutcome,
    pub decision: Decision,
}

/// Signals the two racers send to the coordinator.
#[derive(Debug)]
enum RaceSignal {
    Presented(PromptOutcome),
    Elapsed,
}

#[derive(Debug)]
enum Winner {
    Presenter(PromptOutcome),
    Timer,
    Nobody,
}

/// Wait for the first signal.
///
/// If the timer arrives first but an answer is already queued behind it, the answer
/// wins: a click in the same instant as the timeout is still a click.
fn first_signal(rx: &mpsc::Receiver<RaceSignal>) -> Winner {
    match rx.recv() {
        Ok(RaceSignal::Presented(outcome)) => Winner::Presenter(outcome),
        Ok(RaceSignal::Elapsed) => match rx.try_recv() {
            Ok(RaceSignal::Presented(outcome)) => {
                debug!(%outcome, "prompt answered as the timer elapsed; keeping the answer");
                Winner::Presenter(outcome)
            }
            _ => Winner::Timer,
        },
        Err(_) => Winner::Nobody,
    }
}

/// Runs a prompt against its timeout and turns the result into a decision.
pub struct DecisionResolver<P: PromptPresenter + ?Sized> {
    presenter: Arc<P>,
}

impl<P: PromptPresenter + ?Sized + 'static> DecisionResolver<P> {
    pub fn new(presenter: Arc<P>) -> Self {
        Self { presenter }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Race the prompt and apply `policy` to its outcome.
    pub fn resolve(&self, spec: &PromptSpec, policy: DecisionPolicy) -> Resolution {
        let outcome = self.race(spec);
        let decision = Decision::from_outcome(&outcome, policy);
        info!(%outcome, %decision, "prompt resolved");
        Resolution { outcome, decision }
    }

    /// Show the prompt and wait for either the answer or the timeout, whichever
    /// is observed first.
    ///
    /// When both are already available the answer wins. A losing prompt is asked to
    /// cancel but is not waited for; whatever it reports later is dropped.
    pub fn race(&self, spec: &PromptSpec) -> PromptOutcome {
        let (tx, rx) = mpsc::channel();
        let cancel = CancellationToken::new();

        debug!(
            timeout = ?spec.timeout(),
            mode = ?spec.mode(),
            "starting prompt race"
        );

        let presenter = Arc::clone(&self.presenter);
        let presenter_spec = spec.clone();
        let presenter_cancel = cancel.clone();
        let presenter_tx = tx.clone();
        thread::spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                presenter.present(&presenter_spec, &presenter_cancel)
            }))
            .unwrap_or_else(|_| {
                PromptOutcome::PresentationFailed("prompt presenter panicked".to_string())
            });
            let _ = presenter_tx.send(RaceSignal::Presented(outcome));
        });

        let timer = Timer::start(spec.timeout(), move |signal| {
            if signal == TimerSignal::Elapsed {
                let _ = tx.send(RaceSignal::Elapsed);
            }
        });

        let outcome = match first_signal(&rx) {
            Winner::Presenter(outcome) => {
                timer.cancel();
                debug!(%outcome, "prompt answered before timeout");
                outcome
            }
            Winner::Timer => {
                cancel.cancel();
                debug!("prompt timed out");
                PromptOutcome::TimedOut
            }
            Winner::Nobody => {
                warn!("prompt race ended without a signal");
                cancel.cancel();
                timer.cancel();
                PromptOutcome::PresentationFailed("prompt ended without a result".to_string())
            }
        };

        outcome.for_mode(spec.mode())
    }
}
