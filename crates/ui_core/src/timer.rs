//! Deferred-callback timer contracts and adapters.
//!
//! The toast manager consumes timers exclusively through [`TimerService`] so tests can
//! substitute a manually advanced clock for real delays. The browser `setTimeout`
//! adapter lives in `ui_host_web`.

use std::cell::RefCell;
use std::rc::Rc;

/// Opaque handle for a scheduled timer, used to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// One-shot deferred-callback scheduling facility.
pub trait TimerService {
    /// Schedules `callback` to run once after `delay_ms` milliseconds.
    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;

    /// Cancels a pending timer. Canceling an already-fired or unknown handle is a
    /// no-op.
    fn cancel(&self, handle: TimerHandle);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op timer service for unsupported targets; scheduled callbacks never fire.
pub struct NoopTimerService;

impl TimerService for NoopTimerService {
    fn start(&self, _delay_ms: u32, _callback: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle(0)
    }

    fn cancel(&self, _handle: TimerHandle) {}
}

/// Manually advanced timer service for deterministic tests.
///
/// Callbacks fire when [`ManualTimerService::advance`] moves the simulated clock past
/// their deadline, in due-time order; ties fire in scheduling order.
#[derive(Clone, Default)]
pub struct ManualTimerService {
    inner: Rc<RefCell<ManualTimerState>>,
}

#[derive(Default)]
struct ManualTimerState {
    now_ms: u64,
    next_handle: i32,
    pending: Vec<PendingTimer>,
}

struct PendingTimer {
    handle: TimerHandle,
    due_ms: u64,
    callback: Box<dyn FnOnce()>,
}

impl ManualTimerService {
    /// Returns the current simulated clock in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Returns the number of timers still pending.
    pub fn pending_len(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Advances the simulated clock by `delta_ms`, firing every timer that comes due.
    ///
    /// Callbacks run outside the internal borrow, so a firing timer may schedule or
    /// cancel further timers; newly scheduled timers that fall due before the target
    /// time fire within the same advance.
    pub fn advance(&self, delta_ms: u64) {
        let target_ms = self.inner.borrow().now_ms + delta_ms;
        loop {
            let due = {
                let mut state = self.inner.borrow_mut();
                let due_index = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due_ms <= target_ms)
                    .min_by_key(|(index, timer)| (timer.due_ms, *index))
                    .map(|(index, _)| index);
                match due_index {
                    Some(index) => {
                        let timer = state.pending.remove(index);
                        state.now_ms = timer.due_ms;
                        Some(timer.callback)
                    }
                    None => {
                        state.now_ms = target_ms;
                        None
                    }
                }
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
    }
}

impl TimerService for ManualTimerService {
    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let mut state = self.inner.borrow_mut();
        state.next_handle += 1;
        let handle = TimerHandle(state.next_handle);
        let due_ms = state.now_ms + u64::from(delay_ms);
        state.pending.push(PendingTimer {
            handle,
            due_ms,
            callback,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|timer| timer.handle != handle);
    }
}
