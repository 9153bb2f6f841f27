//! Interactive terminal prompt.
//!
//! Keys are read in raw mode with `crossterm`, polling so that a cancelled prompt gives up
//! within one poll interval. Raw mode is always left again before `present` returns.

use std::io::{self, Write};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use dialoguer::theme::{SimpleTheme, Theme};
use tracing::{debug, warn};

use crate::domain::{PromptMode, PromptOutcome, PromptSpec};
use crate::ports::{CancellationToken, PromptPresenter};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Minimal terminal surface the prompt loop needs.
trait Terminal {
    fn show(&mut self, text: &str) -> io::Result<()>;
    fn enter_raw(&mut self) -> io::Result<()>;
    /// Next key press, or `None` if nothing arrived within `timeout`.
    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>>;
    fn leave_raw(&mut self) -> io::Result<()>;
}

/// The process's own terminal, drawn on stderr.
struct Crossterm;

impl Terminal for Crossterm {
    fn show(&mut self, text: &str) -> io::Result<()> {
        let mut err = io::stderr();
        err.write_all(text.as_bytes())?;
        err.flush()
    }

    fn enter_raw(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    fn leave_raw(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        let mut err = io::stderr();
        execute!(err, cursor::Show)
    }
}

/// Keeps the terminal in raw mode while alive.
struct RawMode<'a, T: Terminal> {
    terminal: &'a mut T,
}

impl<'a, T: Terminal> RawMode<'a, T> {
    fn enter(terminal: &'a mut T) -> io::Result<Self> {
        terminal.enter_raw()?;
        Ok(Self { terminal })
    }
}

impl<T: Terminal> Drop for RawMode<'_, T> {
    fn drop(&mut self) {
        if let Err(err) = self.terminal.leave_raw() {
            warn!(error = %err, "failed to restore terminal mode");
        }
    }
}

/// Number of prompts that may still be touching the terminal.
#[derive(Debug, Default)]
struct Sessions {
    open: Mutex<usize>,
    closed: Condvar,
}

impl Sessions {
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.open.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn open(&self) -> SessionGuard<'_> {
        *self.lock() += 1;
        SessionGuard { sessions: self }
    }

    fn wait_until_closed(&self, timeout: Duration) -> bool {
        let deadline = Instant::now().checked_add(timeout);
        let mut open = self.lock();
        while *open > 0 {
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => Duration::MAX,
            };
            if remaining.is_zero() {
                return false;
            }
            open = self
                .closed
                .wait_timeout(open, remaining)
                .map(|(guard, _)| guard)
                .unwrap_or_else(|poisoned| poisoned.into_inner().0);
        }
        true
    }
}

struct SessionGuard<'a> {
    sessions: &'a Sessions,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        let mut open = self.sessions.lock();
        *open = open.saturating_sub(1);
        self.sessions.closed.notify_all();
    }
}

/// Modal prompt drawn on the controlling terminal.
///
/// A cancelled prompt returns within one poll interval, but the caller does not wait for
/// it. Call [`TerminalPresenter::wait_until_restored`] before writing to the terminal or
/// exiting so the terminal is back in its normal mode.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    sessions: Sessions,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no prompt holds the terminal. Returns `false` if `timeout` passed first.
    pub fn wait_until_restored(&self, timeout: Duration) -> bool {
        self.sessions.wait_until_closed(timeout)
    }
}

impl PromptPresenter for TerminalPresenter {
    fn present(&self, spec: &PromptSpec, cancel: &CancellationToken) -> PromptOutcome {
        let _session = self.sessions.open();
        ask(&mut Crossterm, spec, cancel)
            .unwrap_or_else(|err| PromptOutcome::PresentationFailed(err.to_string()))
    }
}

fn render(spec: &PromptSpec) -> String {
    let prompt = format!("[{}] {}", spec.caption(), spec.message());
    let mut text = String::new();
    let rendered = match spec.mode() {
        PromptMode::YesNo => SimpleTheme.format_confirm_prompt(&mut text, &prompt, Some(false)),
        PromptMode::Acknowledge => SimpleTheme.format_prompt(&mut text, &prompt),
    };
    if rendered.is_err() {
        text = prompt;
    }
    if spec.mode() == PromptMode::Acknowledge {
        text.push_str(" [press Enter]");
    }
    if !text.ends_with(' ') {
        text.push(' ');
    }
    text
}

fn ask<T: Terminal>(
    terminal: &mut T,
    spec: &PromptSpec,
    cancel: &CancellationToken,
) -> io::Result<PromptOutcome> {
    if cancel.is_cancelled() {
        return Ok(PromptOutcome::TimedOut);
    }
    terminal.show(&render(spec))?;

    let outcome = {
        let mut raw = RawMode::enter(terminal)?;
        wait_for_answer(&mut *raw.terminal, spec.mode(), cancel)?
    };

    let echo = match (&outcome, spec.mode()) {
        (PromptOutcome::Yes, PromptMode::YesNo) => "yes",
        (PromptOutcome::No, PromptMode::YesNo) => "no",
        _ => "",
    };
    terminal.show(&format!("{}\n", echo))?;
    Ok(outcome)
}

fn wait_for_answer<T: Terminal>(
    terminal: &mut T,
    mode: PromptMode,
    cancel: &CancellationToken,
) -> io::Result<PromptOutcome> {
    loop {
        if cancel.is_cancelled() {
            debug!("terminal prompt cancelled");
            return Ok(PromptOutcome::TimedOut);
        }
        if let Some(key) = terminal.read_key(POLL_INTERVAL)? {
            if let Some(outcome) = answer_for_key(mode, &key) {
                return Ok(outcome);
            }
        }
    }
}

/// Map a key press to an answer. Dismissal (`Esc`, `q`, Ctrl-C) is `No` in Yes/No mode
/// and acknowledges an OK prompt.
fn answer_for_key(mode: PromptMode, key: &KeyEvent) -> Option<PromptOutcome> {
    let interrupted =
        key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    match mode {
        PromptMode::Acknowledge => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
                Some(PromptOutcome::Yes)
            }
            _ if interrupted => Some(PromptOutcome::Yes),
            _ => None,
        },
        PromptMode::YesNo => match key.code {
            _ if interrupted => Some(PromptOutcome::No),
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(PromptOutcome::Yes),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(PromptOutcome::No),
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Some(PromptOutcome::No),
            _ => None,
        },
    }
}
