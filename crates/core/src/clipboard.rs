//! "Click to copy" with a transient copied indicator.
//!
//! [`ClipboardService::copy`] hands the text to the host clipboard and returns
//! immediately. When the host reports success the identity of the copied item
//! becomes the indicator, which clears itself after the feedback window.
//!
//! Two counters keep overlapping copies apart. The request generation is
//! bumped by every call and drops completions of superseded writes. The
//! indicator generation is bumped only when a write succeeds, so a timer
//! clears its own indicator unless a newer successful copy replaced it, even
//! while a later write is still waiting on the host.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::timer::{Scheduler, TimerGuard};

/// Result of a host clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CopyOutcome {
    /// The text is on the clipboard.
    Ok,
    /// The host refused (permission denied, document not focused, ...).
    Denied,
    /// No clipboard API is available.
    Unsupported,
}

/// Completion callback for an asynchronous clipboard write.
pub type CopyCallback = Box<dyn FnOnce(CopyOutcome)>;

/// Asynchronous "write text to system clipboard" primitive.
pub trait ClipboardHost {
    /// Starts writing `text`. `done` must be called exactly once, possibly
    /// before this method returns.
    fn write_text(&self, text: &str, done: CopyCallback);
}

/// Clipboard feedback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardOptions {
    /// How long the copied indicator stays up, in milliseconds.
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,
}

fn default_feedback_ms() -> u64 {
    2000
}

impl Default for ClipboardOptions {
    fn default() -> Self {
        Self {
            feedback_ms: default_feedback_ms(),
        }
    }
}

impl ClipboardOptions {
    pub fn feedback(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }
}

/// Called after the copied indicator changes.
pub type ChangeListener = Rc<dyn Fn()>;

struct State<K> {
    copied: Option<K>,
    generation: u64,
    shown: u64,
    timer: Option<TimerGuard>,
    last_outcome: Option<CopyOutcome>,
    listener: Option<ChangeListener>,
}

impl<K> State<K> {
    /// Updates the indicator and returns the listener to notify, if the
    /// indicator actually changed. The caller invokes it after releasing the
    /// borrow so the listener may read the service.
    fn set_copied(&mut self, copied: Option<K>) -> Option<ChangeListener>
    where
        K: PartialEq,
    {
        if self.copied == copied {
            return None;
        }
        self.copied = copied;
        self.listener.clone()
    }
}

/// Copy service owned by one UI component.
///
/// Dropping the service cancels its pending indicator timer; host completions
/// that arrive afterwards are ignored.
pub struct ClipboardService<K> {
    state: Rc<RefCell<State<K>>>,
    host: Rc<dyn ClipboardHost>,
    scheduler: Rc<dyn Scheduler>,
    options: ClipboardOptions,
}

impl<K: Clone + PartialEq + std::fmt::Debug + 'static> ClipboardService<K> {
    pub fn new(
        host: Rc<dyn ClipboardHost>,
        scheduler: Rc<dyn Scheduler>,
        options: ClipboardOptions,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                copied: None,
                generation: 0,
                shown: 0,
                timer: None,
                last_outcome: None,
                listener: None,
            })),
            host,
            scheduler,
            options,
        }
    }

    /// Copies `text` and, on success, shows `identity` as copied.
    ///
    /// Fire-and-forget: failures are absorbed and only visible through
    /// [`ClipboardService::last_outcome`].
    pub fn copy(&self, text: &str, identity: K) {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.generation
        };

        let weak = Rc::downgrade(&self.state);
        let scheduler = Rc::clone(&self.scheduler);
        let feedback = self.options.feedback();
        self.host.write_text(
            text,
            Box::new(move |outcome| {
                complete(weak, scheduler, feedback, generation, identity, outcome)
            }),
        );
    }

    /// Registers a callback run whenever the indicator is set or cleared,
    /// including the automatic clear when the feedback window ends.
    pub fn on_change(&self, listener: impl Fn() + 'static) {
        self.state.borrow_mut().listener = Some(Rc::new(listener));
    }

    /// Identity of the most recently copied item, while its indicator is up.
    pub fn copied(&self) -> Option<K> {
        self.state.borrow().copied.clone()
    }

    /// Returns true if `identity` is currently shown as copied.
    pub fn is_copied(&self, identity: &K) -> bool {
        self.state.borrow().copied.as_ref() == Some(identity)
    }

    /// Outcome of the most recent completed write.
    pub fn last_outcome(&self) -> Option<CopyOutcome> {
        self.state.borrow().last_outcome
    }
}

fn complete<K: Clone + PartialEq + std::fmt::Debug + 'static>(
    state: Weak<RefCell<State<K>>>,
    scheduler: Rc<dyn Scheduler>,
    feedback: Duration,
    generation: u64,
    identity: K,
    outcome: CopyOutcome,
) {
    let Some(state) = state.upgrade() else {
        log::debug!("Clipboard write finished after its owner was dropped");
        return;
    };

    // Take the stale timer out before dropping it so the scheduler is never
    // called while the state is borrowed by a re-entrant callback.
    let stale_timer = {
        let mut guard = state.borrow_mut();
        if guard.generation != generation {
            log::debug!("Ignoring superseded clipboard completion for {:?}", identity);
            return;
        }
        guard.last_outcome = Some(outcome);
        guard.timer.take()
    };
    drop(stale_timer);

    match outcome {
        CopyOutcome::Ok => {
            log::debug!("Copied {:?}", identity);
            let shown = {
                let mut guard = state.borrow_mut();
                guard.shown += 1;
                guard.shown
            };
            let weak = Rc::downgrade(&state);
            let timer = TimerGuard::schedule(&scheduler, feedback, move || {
                let Some(state) = weak.upgrade() else { return };
                let (notify, fired) = {
                    let mut guard = state.borrow_mut();
                    if guard.shown != shown {
                        return;
                    }
                    (guard.set_copied(None), guard.timer.take())
                };
                drop(fired);
                if let Some(listener) = notify {
                    listener();
                }
            });
            let notify = {
                let mut guard = state.borrow_mut();
                guard.timer = Some(timer);
                guard.set_copied(Some(identity))
            };
            if let Some(listener) = notify {
                listener();
            }
        }
        CopyOutcome::Denied | CopyOutcome::Unsupported => {
            log::warn!("Clipboard write for {:?} failed: {:?}", identity, outcome);
            let notify = state.borrow_mut().set_copied(None);
            if let Some(listener) = notify {
                listener();
            }
        }
    }
}

/// In-memory clipboard that records writes.
///
/// By default writes complete synchronously with the configured outcome.
/// With [`RecordingClipboard::deferred`] completions are held until
/// [`RecordingClipboard::resolve_next`] is called, which models a slow
/// permission prompt.
#[derive(Default)]
pub struct RecordingClipboard {
    writes: RefCell<Vec<String>>,
    outcome: RefCell<Option<CopyOutcome>>,
    deferred: bool,
    queue: RefCell<Vec<CopyCallback>>,
}

impl RecordingClipboard {
    /// Clipboard that accepts every write immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard whose completions wait for [`RecordingClipboard::resolve_next`].
    pub fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::default()
        }
    }

    /// Makes subsequent immediate writes complete with `outcome`.
    pub fn fail_with(&self, outcome: CopyOutcome) {
        *self.outcome.borrow_mut() = Some(outcome);
    }

    /// Completes the oldest deferred write. Returns false if none is waiting.
    pub fn resolve_next(&self, outcome: CopyOutcome) -> bool {
        let next = {
            let mut queue = self.queue.borrow_mut();
            if queue.is_empty() {
                None
            } else {
                Some(queue.remove(0))
            }
        };
        match next {
            Some(done) => {
                done(outcome);
                true
            }
            None => false,
        }
    }

    /// Every text written so far, in order. Failed writes are included.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// The most recent write.
    pub fn last_write(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl ClipboardHost for RecordingClipboard {
    fn write_text(&self, text: &str, done: CopyCallback) {
        self.writes.borrow_mut().push(text.to_string());
        if self.deferred {
            self.queue.borrow_mut().push(done);
            return;
        }
        let outcome = self.outcome.borrow().unwrap_or(CopyOutcome::Ok);
        done(outcome);
    }
}
