//! Reducer actions, timer effects, and transition logic for the toast queue.

use super::model::{ToastConfig, ToastEntry, ToastFields, ToastId, ToastRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Operations accepted by [`reduce_toasts`] to mutate the toast queue.
pub enum ToastAction {
    /// Queue a new toast (or update an existing one on id collision).
    Add(ToastRequest),
    /// Merge partial fields into the entry with a matching id.
    Update {
        /// Target entry id.
        id: ToastId,
        /// Fields to merge.
        fields: ToastFields,
    },
    /// Close the matching entry, or every open entry when no id is given.
    Dismiss {
        /// Target entry id; `None` dismisses all open entries.
        id: Option<ToastId>,
    },
    /// Delete the matching entry, or clear the queue when no id is given.
    Remove {
        /// Target entry id; `None` clears the queue.
        id: Option<ToastId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Timer-bookkeeping effects emitted by [`reduce_toasts`] for the manager to execute.
pub enum ToastTimerEffect {
    /// Start the auto-dismiss timer for a newly opened entry.
    ScheduleAutoDismiss(ToastId),
    /// Start the removal timer for a freshly dismissed entry.
    ScheduleRemoval(ToastId),
    /// Cancel any pending timers for an entry leaving the queue ahead of schedule.
    CancelTimers(ToastId),
}

/// Applies a [`ToastAction`] to the queue and collects the resulting timer effects.
///
/// This function is the single state-transition path for the toast queue. Operations
/// referencing unknown ids are silent no-ops, and a dismissed entry never reopens;
/// callers add a new toast instead. Display order is newest first, and the entries
/// evicted past `config.max_toasts` are the oldest.
pub fn reduce_toasts(
    toasts: &mut Vec<ToastEntry>,
    config: &ToastConfig,
    action: ToastAction,
) -> Vec<ToastTimerEffect> {
    let mut effects = Vec::new();
    match action {
        ToastAction::Add(request) => {
            if let Some(id) = request.id.clone() {
                if toasts.iter().any(|entry| entry.id == id) {
                    return reduce_toasts(
                        toasts,
                        config,
                        ToastAction::Update {
                            id,
                            fields: request.into_fields(),
                        },
                    );
                }
            }
            let entry = request.into_entry();
            effects.push(ToastTimerEffect::ScheduleAutoDismiss(entry.id.clone()));
            toasts.insert(0, entry);
            while toasts.len() > config.max_toasts {
                if let Some(evicted) = toasts.pop() {
                    effects.push(ToastTimerEffect::CancelTimers(evicted.id));
                }
            }
        }
        ToastAction::Update { id, fields } => {
            if let Some(entry) = toasts.iter_mut().find(|entry| entry.id == id) {
                merge_fields(entry, fields);
            }
        }
        ToastAction::Dismiss { id } => {
            for entry in toasts.iter_mut() {
                let targeted = id.as_ref().map_or(true, |id| entry.id == *id);
                if targeted && entry.open {
                    entry.open = false;
                    effects.push(ToastTimerEffect::CancelTimers(entry.id.clone()));
                    effects.push(ToastTimerEffect::ScheduleRemoval(entry.id.clone()));
                }
            }
        }
        ToastAction::Remove { id } => match id {
            Some(id) => {
                let before_len = toasts.len();
                toasts.retain(|entry| entry.id != id);
                if toasts.len() != before_len {
                    effects.push(ToastTimerEffect::CancelTimers(id));
                }
            }
            None => {
                for entry in toasts.drain(..) {
                    effects.push(ToastTimerEffect::CancelTimers(entry.id));
                }
            }
        },
    }
    effects
}

fn merge_fields(entry: &mut ToastEntry, fields: ToastFields) {
    if let Some(title) = fields.title {
        entry.title = Some(title);
    }
    if let Some(description) = fields.description {
        entry.description = Some(description);
    }
    if let Some(variant) = fields.variant {
        entry.variant = variant;
    }
}
