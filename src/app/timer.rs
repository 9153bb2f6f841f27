//! Single-shot cancellable timer.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

/// The one signal a timer delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    Elapsed,
    Cancelled,
}

/// Observable timer state. Leaves `Pending` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Pending,
    Elapsed,
    Cancelled,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<TimerState>,
    wake: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, TimerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait for cancellation until `deadline`, then settle the state.
    ///
    /// A `None` deadline never elapses.
    fn settle_at(&self, deadline: Option<Instant>) -> TimerSignal {
        let mut state = self.lock();
        loop {
            match *state {
                TimerState::Cancelled => return TimerSignal::Cancelled,
                TimerState::Elapsed => return TimerSignal::Elapsed,
                TimerState::Pending => {}
            }
            state = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        *state = TimerState::Elapsed;
                        return TimerSignal::Elapsed;
                    }
                    self.wake
                        .wait_timeout(state, deadline - now)
                        .map(|(guard, _)| guard)
                        .unwrap_or_else(|poisoned| poisoned.into_inner().0)
                }
                None => self.wake.wait(state).unwrap_or_else(PoisonError::into_inner),
            };
        }
    }
}

/// Starts timers.
pub struct Timer;

impl Timer {
    /// Start a timer that calls `on_signal` exactly once.
    ///
    /// The signal is `Elapsed` after `duration`, or `Cancelled` if [`TimerHandle::cancel`]
    /// wins first. A zero duration elapses immediately, on the calling thread, before
    /// this function returns.
    pub fn start<F>(duration: Duration, on_signal: F) -> TimerHandle
    where
        F: FnOnce(TimerSignal) + Send + 'static,
    {
        let shared =
            Arc::new(Shared { state: Mutex::new(TimerState::Pending), wake: Condvar::new() });
        let handle = TimerHandle { shared: Arc::clone(&shared) };

        if duration.is_zero() {
            *shared.lock() = TimerState::Elapsed;
            debug!("timer elapsed immediately");
            on_signal(TimerSignal::Elapsed);
            return handle;
        }

        let deadline = Instant::now().checked_add(duration);
        thread::spawn(move || {
            let signal = shared.settle_at(deadline);
            debug!(?signal, "timer settled");
            on_signal(signal);
        });

        handle
    }
}

/// Handle to a running timer.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    shared: Arc<Shared>,
}

impl TimerHandle {
    /// Cancel the timer. No-op once it has elapsed or was already cancelled.
    pub fn cancel(&self) {
        let mut state = self.shared.lock();
        if *state == TimerState::Pending {
            *state = TimerState::Cancelled;
            self.shared.wake.notify_all();
        }
    }

    pub fn state(&self) -> TimerState {
        *self.shared.lock()
    }
}
