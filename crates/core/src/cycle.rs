//! Auto-advancing demos that cycle through a fixed set of frames.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::clipboard::ChangeListener;
use crate::timer::{Scheduler, TimerGuard};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleOptions {
    /// Time each frame stays on screen, in milliseconds. Values below 1 are
    /// treated as 1.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    2000
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

/// A zero interval would reschedule at the current instant forever.
const MIN_INTERVAL_MS: u64 = 1;

struct CycleState {
    frames: usize,
    index: usize,
    timer: Option<TimerGuard>,
    listener: Option<ChangeListener>,
}

/// Repeating frame counter owned by one mounted demo.
///
/// The only timer it holds lives inside its own state, so dropping the cycle
/// (unmounting the demo) cancels the pending tick.
pub struct AutoCycle {
    state: Rc<RefCell<CycleState>>,
    scheduler: Rc<dyn Scheduler>,
    interval: Duration,
}

impl AutoCycle {
    /// Starts cycling over `frames` frames. A cycle over zero or one frame
    /// never schedules a timer.
    pub fn start(frames: usize, scheduler: Rc<dyn Scheduler>, options: &CycleOptions) -> Self {
        let cycle = Self {
            state: Rc::new(RefCell::new(CycleState {
                frames,
                index: 0,
                timer: None,
                listener: None,
            })),
            scheduler,
            interval: Duration::from_millis(options.interval_ms.max(MIN_INTERVAL_MS)),
        };
        cycle.resume();
        cycle
    }

    /// Registers a callback run after every automatic advance.
    pub fn on_tick(&self, listener: impl Fn() + 'static) {
        self.state.borrow_mut().listener = Some(Rc::new(listener));
    }

    /// Index of the frame currently shown.
    pub fn current(&self) -> usize {
        self.state.borrow().index
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().timer.is_some()
    }

    /// Stops advancing, keeping the current frame.
    pub fn pause(&self) {
        let timer = self.state.borrow_mut().timer.take();
        if timer.is_some() {
            log::debug!("Auto-cycle paused at frame {}", self.current());
        }
    }

    /// Continues advancing from the current frame.
    pub fn resume(&self) {
        if self.state.borrow().frames < 2 || self.is_running() {
            return;
        }
        schedule_tick(
            Rc::downgrade(&self.state),
            Rc::clone(&self.scheduler),
            self.interval,
        );
    }

    /// Shows `index` immediately; the next tick advances from there.
    pub fn jump_to(&self, index: usize) {
        let mut state = self.state.borrow_mut();
        if state.frames > 0 {
            state.index = index % state.frames;
        }
    }
}

fn schedule_tick(state: Weak<RefCell<CycleState>>, scheduler: Rc<dyn Scheduler>, interval: Duration) {
    let Some(strong) = state.upgrade() else { return };
    let next_scheduler = Rc::clone(&scheduler);
    let weak = state.clone();
    let timer = TimerGuard::schedule(&scheduler, interval, move || {
        let Some(strong) = weak.upgrade() else { return };
        let (fired, listener) = {
            let mut guard = strong.borrow_mut();
            guard.index = (guard.index + 1) % guard.frames;
            (guard.timer.take(), guard.listener.clone())
        };
        drop(fired);
        schedule_tick(weak, next_scheduler, interval);
        if let Some(listener) = listener {
            listener();
        }
    });
    strong.borrow_mut().timer = Some(timer);
}
