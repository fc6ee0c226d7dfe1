//! Host timer seam and scoped timer handles.
//!
//! Everything that schedules work (the copy indicator, auto-cycling demos)
//! holds its timer through a [`TimerGuard`], which clears the timer when the
//! guard is dropped. Dropping the owner is therefore enough to tear down every
//! pending callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Identifier of a scheduled timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Single-threaded timeout scheduler supplied by the host (e.g. `setTimeout`).
pub trait Scheduler {
    /// Schedules `callback` to run once after `delay`.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Cancels a pending timeout. Clearing an unknown or already fired id is a no-op.
    fn clear_timeout(&self, id: TimerId);
}

/// Owns a scheduled timeout and clears it on drop.
pub struct TimerGuard {
    scheduler: Rc<dyn Scheduler>,
    id: TimerId,
}

impl TimerGuard {
    /// Schedules `callback` and ties its lifetime to the returned guard.
    pub fn schedule(
        scheduler: &Rc<dyn Scheduler>,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Self {
        let id = scheduler.set_timeout(delay, Box::new(callback));
        Self {
            scheduler: Rc::clone(scheduler),
            id,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.scheduler.clear_timeout(self.id);
    }
}

impl std::fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerGuard").field("id", &self.id).finish()
    }
}

struct PendingTimer {
    id: TimerId,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Used for server-side rendering hosts and tests. Callbacks run inside
/// [`ManualScheduler::advance`] in due order; callbacks may schedule or clear
/// other timers while running.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<PendingTimer>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of timeouts that have not fired or been cleared.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Moves the clock forward, firing every timeout that becomes due.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let earliest = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| (timer.due, timer.id.0))
                    .map(|(index, _)| index);
                earliest.map(|index| pending.remove(index))
            };
            let Some(timer) = next else { break };
            self.now.set(timer.due);
            (timer.callback)();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.pending.borrow_mut().push(PendingTimer {
            id,
            due: self.now.get() + delay,
            callback,
        });
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.pending.borrow_mut().retain(|timer| timer.id != id);
    }
}
