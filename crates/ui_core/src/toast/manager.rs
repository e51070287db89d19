//! Process-wide toast queue manager: serialized dispatch, subscriptions, and timer
//! bookkeeping.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::timer::{TimerHandle, TimerService};

use super::model::{next_toast_id, ToastConfig, ToastEntry, ToastFields, ToastId, ToastRequest};
use super::reducer::{reduce_toasts, ToastAction, ToastTimerEffect};

/// Handle identifying one registered queue observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type SubscriberCallback = Rc<dyn Fn(&[ToastEntry])>;

/// Pending timer handles for one queued entry.
#[derive(Default)]
struct EntryTimers {
    auto_dismiss: Option<TimerHandle>,
    removal: Option<TimerHandle>,
}

struct ManagerState {
    toasts: Vec<ToastEntry>,
    subscribers: Vec<(SubscriberId, SubscriberCallback)>,
    timers: HashMap<ToastId, EntryTimers>,
    queue: VecDeque<ToastAction>,
    draining: bool,
    next_subscriber: u64,
}

/// Shared toast queue with a single serialized writer path and snapshot broadcast.
///
/// One manager instance serves the whole process; clones share the same queue. Every
/// mutation flows through [`reduce_toasts`] in call order, and after each transition
/// every subscriber synchronously receives a complete snapshot of the queue. The
/// injected [`TimerService`] drives auto-dismiss and delayed removal; explicit
/// dismiss/remove cancels the matching pending timers, so a stale callback can never
/// act on a removed or re-added id.
#[derive(Clone)]
pub struct ToastManager {
    config: ToastConfig,
    timer_service: Rc<dyn TimerService>,
    state: Rc<RefCell<ManagerState>>,
}

impl ToastManager {
    /// Creates a manager with the supplied timer facility and queue policy.
    pub fn new(timer_service: Rc<dyn TimerService>, config: ToastConfig) -> Self {
        Self {
            config,
            timer_service,
            state: Rc::new(RefCell::new(ManagerState {
                toasts: Vec::new(),
                subscribers: Vec::new(),
                timers: HashMap::new(),
                queue: VecDeque::new(),
                draining: false,
                next_subscriber: 0,
            })),
        }
    }

    /// Returns the queue policy this manager was built with.
    pub const fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Queues a toast and returns its assigned id.
    ///
    /// Never fails: a caller-supplied id colliding with a queued entry converts the
    /// add into an update of that entry.
    pub fn add(&self, mut request: ToastRequest) -> ToastId {
        let id = request.id.take().unwrap_or_else(next_toast_id);
        request.id = Some(id.clone());
        self.dispatch(ToastAction::Add(request));
        id
    }

    /// Merges partial fields into the entry with `id`; unknown ids are a no-op.
    pub fn update(&self, id: impl Into<ToastId>, fields: ToastFields) {
        self.dispatch(ToastAction::Update {
            id: id.into(),
            fields,
        });
    }

    /// Closes the matching entry, or every open entry when `id` is `None`.
    pub fn dismiss(&self, id: Option<ToastId>) {
        self.dispatch(ToastAction::Dismiss { id });
    }

    /// Deletes the matching entry, or clears the queue when `id` is `None`.
    pub fn remove(&self, id: Option<ToastId>) {
        self.dispatch(ToastAction::Remove { id });
    }

    /// Returns a snapshot clone of the current queue, newest first.
    pub fn snapshot(&self) -> Vec<ToastEntry> {
        self.state.borrow().toasts.clone()
    }

    /// Registers an observer invoked with a full snapshot after every transition,
    /// until [`ToastManager::unsubscribe`] is called with the returned id.
    pub fn subscribe(&self, callback: impl Fn(&[ToastEntry]) + 'static) -> SubscriberId {
        let mut state = self.state.borrow_mut();
        state.next_subscriber += 1;
        let id = SubscriberId(state.next_subscriber);
        state.subscribers.push((id, Rc::new(callback)));
        id
    }

    /// Unregisters an observer; unknown ids are a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.state
            .borrow_mut()
            .subscribers
            .retain(|(subscriber, _)| *subscriber != id);
    }

    /// Applies an action through the serialized dispatch path.
    ///
    /// Reentrant dispatches (from a subscriber callback or a firing timer) enqueue
    /// behind the in-flight action, so subscribers observe snapshots in application
    /// order.
    pub fn dispatch(&self, action: ToastAction) {
        {
            let mut state = self.state.borrow_mut();
            state.queue.push_back(action);
            if state.draining {
                return;
            }
            state.draining = true;
        }
        self.drain();
    }

    fn drain(&self) {
        loop {
            let action = {
                let mut state = self.state.borrow_mut();
                match state.queue.pop_front() {
                    Some(action) => action,
                    None => {
                        state.draining = false;
                        return;
                    }
                }
            };

            let (effects, snapshot, subscribers) = {
                let mut state = self.state.borrow_mut();
                let effects = reduce_toasts(&mut state.toasts, &self.config, action);
                (effects, state.toasts.clone(), state.subscribers.clone())
            };

            for effect in effects {
                self.run_timer_effect(effect);
            }
            for (_, callback) in subscribers {
                callback(&snapshot);
            }
        }
    }

    fn run_timer_effect(&self, effect: ToastTimerEffect) {
        match effect {
            ToastTimerEffect::ScheduleAutoDismiss(id) => {
                let handle = {
                    let manager = self.clone();
                    let target = id.clone();
                    self.timer_service.start(
                        self.config.auto_dismiss_ms,
                        Box::new(move || manager.dismiss(Some(target))),
                    )
                };
                self.state
                    .borrow_mut()
                    .timers
                    .entry(id)
                    .or_default()
                    .auto_dismiss = Some(handle);
            }
            ToastTimerEffect::ScheduleRemoval(id) => {
                let handle = {
                    let manager = self.clone();
                    let target = id.clone();
                    self.timer_service.start(
                        self.config.removal_delay_ms,
                        Box::new(move || manager.remove(Some(target))),
                    )
                };
                self.state.borrow_mut().timers.entry(id).or_default().removal = Some(handle);
            }
            ToastTimerEffect::CancelTimers(id) => {
                let entry_timers = self.state.borrow_mut().timers.remove(&id);
                if let Some(entry_timers) = entry_timers {
                    if let Some(handle) = entry_timers.auto_dismiss {
                        self.timer_service.cancel(handle);
                    }
                    if let Some(handle) = entry_timers.removal {
                        self.timer_service.cancel(handle);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::model::{
        ToastVariant, DEFAULT_AUTO_DISMISS_MS, DEFAULT_REMOVAL_DELAY_MS,
    };
    use super::*;
    use crate::timer::ManualTimerService;

    fn manager_with(max_toasts: usize) -> (ToastManager, ManualTimerService) {
        let timers = ManualTimerService::default();
        let config = ToastConfig {
            max_toasts,
            ..ToastConfig::default()
        };
        let manager = ToastManager::new(Rc::new(timers.clone()), config);
        (manager, timers)
    }

    fn titles(snapshot: &[ToastEntry]) -> Vec<&str> {
        snapshot
            .iter()
            .map(|entry| entry.title.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn auto_dismiss_closes_an_open_toast_after_the_display_delay() {
        let (manager, timers) = manager_with(4);
        manager.add(ToastRequest::titled("Saved"));

        timers.advance(u64::from(DEFAULT_AUTO_DISMISS_MS) - 1);
        assert!(manager.snapshot()[0].open);

        timers.advance(1);
        assert!(!manager.snapshot()[0].open);
    }

    #[test]
    fn dismissed_toasts_are_removed_after_the_removal_delay() {
        let (manager, timers) = manager_with(4);
        let id = manager.add(ToastRequest::titled("Saved"));
        manager.dismiss(Some(id));

        timers.advance(u64::from(DEFAULT_REMOVAL_DELAY_MS) - 1);
        assert_eq!(manager.snapshot().len(), 1);

        timers.advance(1);
        assert_eq!(manager.snapshot(), Vec::new());
        assert_eq!(timers.pending_len(), 0);
    }

    #[test]
    fn a_full_unattended_lifecycle_runs_on_timers_alone() {
        let (manager, timers) = manager_with(4);
        manager.add(ToastRequest::titled("Saved"));

        timers.advance(u64::from(DEFAULT_AUTO_DISMISS_MS));
        assert!(!manager.snapshot()[0].open);

        timers.advance(u64::from(DEFAULT_REMOVAL_DELAY_MS));
        assert_eq!(manager.snapshot(), Vec::new());
    }

    #[test]
    fn explicit_dismiss_cancels_the_pending_auto_dismiss_timer() {
        let (manager, timers) = manager_with(4);
        let id = manager.add(ToastRequest::titled("Saved"));

        timers.advance(1_000);
        manager.dismiss(Some(id));
        // Only the removal timer may remain.
        assert_eq!(timers.pending_len(), 1);

        timers.advance(u64::from(DEFAULT_AUTO_DISMISS_MS));
        assert_eq!(manager.snapshot(), Vec::new());
        assert_eq!(timers.pending_len(), 0);
    }

    #[test]
    fn readding_a_removed_id_is_unaffected_by_stale_timers() {
        let (manager, timers) = manager_with(4);
        let request = ToastRequest {
            id: Some(ToastId::from("sync")),
            ..ToastRequest::titled("Syncing")
        };
        manager.add(request.clone());

        timers.advance(2_000);
        manager.remove(Some(ToastId::from("sync")));
        manager.add(request);

        // The first instance's auto-dismiss would have fired here.
        timers.advance(u64::from(DEFAULT_AUTO_DISMISS_MS) - 2_000);
        assert!(manager.snapshot()[0].open);

        timers.advance(2_000);
        assert!(!manager.snapshot()[0].open);
    }

    #[test]
    fn eviction_cancels_timers_of_the_evicted_entry() {
        let (manager, timers) = manager_with(1);
        manager.add(ToastRequest::titled("A"));
        manager.add(ToastRequest::titled("B"));

        assert_eq!(titles(&manager.snapshot()), vec!["B"]);
        // One auto-dismiss timer for the surviving entry.
        assert_eq!(timers.pending_len(), 1);
    }

    #[test]
    fn add_with_a_queued_id_updates_in_place() {
        let (manager, _timers) = manager_with(4);
        let id = manager.add(ToastRequest {
            id: Some(ToastId::from("upload")),
            ..ToastRequest::titled("Uploading")
        });

        let returned = manager.add(ToastRequest {
            id: Some(ToastId::from("upload")),
            title: Some("Upload failed".to_string()),
            variant: Some(ToastVariant::Destructive),
            ..ToastRequest::default()
        });

        assert_eq!(returned, id);
        let snapshot = manager.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title.as_deref(), Some("Upload failed"));
        assert_eq!(snapshot[0].variant, ToastVariant::Destructive);
    }

    #[test]
    fn update_merges_fields_into_the_live_entry() {
        let (manager, _timers) = manager_with(4);
        let id = manager.add(ToastRequest::titled("Working"));

        manager.update(
            id,
            ToastFields {
                description: Some("Almost done".to_string()),
                ..ToastFields::default()
            },
        );

        let snapshot = manager.snapshot();
        assert_eq!(snapshot[0].title.as_deref(), Some("Working"));
        assert_eq!(snapshot[0].description.as_deref(), Some("Almost done"));
    }

    #[test]
    fn dismiss_without_an_id_closes_every_entry() {
        let (manager, _timers) = manager_with(4);
        manager.add(ToastRequest::titled("A"));
        manager.add(ToastRequest::titled("B"));

        manager.dismiss(None);

        assert!(manager.snapshot().iter().all(|entry| !entry.open));
    }

    #[test]
    fn remove_without_an_id_clears_the_queue_and_timers() {
        let (manager, timers) = manager_with(4);
        manager.add(ToastRequest::titled("A"));
        manager.add(ToastRequest::titled("B"));

        manager.remove(None);

        assert_eq!(manager.snapshot(), Vec::new());
        assert_eq!(timers.pending_len(), 0);
    }

    #[test]
    fn subscribers_observe_every_snapshot_in_transition_order() {
        let (manager, _timers) = manager_with(4);
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = manager.subscribe(move |snapshot| {
            sink.borrow_mut().push(
                snapshot
                    .iter()
                    .map(|entry| entry.title.clone().unwrap_or_default())
                    .collect(),
            );
        });

        manager.add(ToastRequest::titled("A"));
        let b = manager.add(ToastRequest::titled("B"));
        manager.dismiss(Some(b.clone()));
        manager.remove(Some(b));

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["A".to_string()],
                vec!["B".to_string(), "A".to_string()],
                vec!["B".to_string(), "A".to_string()],
                vec!["A".to_string()],
            ]
        );

        manager.unsubscribe(subscription);
        manager.add(ToastRequest::titled("C"));
        assert_eq!(seen.borrow().len(), 4);
    }

    #[test]
    fn reentrant_dispatch_from_a_subscriber_preserves_snapshot_order() {
        let (manager, _timers) = manager_with(4);
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));

        let chained = manager.clone();
        let sink = Rc::clone(&seen);
        manager.subscribe(move |snapshot| {
            sink.borrow_mut().push(
                snapshot
                    .iter()
                    .map(|entry| entry.title.clone().unwrap_or_default())
                    .collect(),
            );
            if snapshot.len() == 1 {
                chained.add(ToastRequest::titled("Follow-up"));
            }
        });

        manager.add(ToastRequest::titled("First"));

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["First".to_string()],
                vec!["Follow-up".to_string(), "First".to_string()],
            ]
        );
    }
}
