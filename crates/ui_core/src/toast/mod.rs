//! Toast queue state machine, manager, and model types.
//!
//! State mutation follows the reducer discipline: the four queue operations are
//! expressed as [`ToastAction`] values applied by [`reduce_toasts`], which returns the
//! timer-bookkeeping effects the [`ToastManager`] executes. Rendering surfaces observe
//! the queue only through immutable snapshots broadcast after each transition.

mod manager;
mod model;
mod reducer;

pub use manager::{SubscriberId, ToastManager};
pub use model::{
    next_toast_id, ToastConfig, ToastEntry, ToastFields, ToastId, ToastRequest, ToastVariant,
    DEFAULT_AUTO_DISMISS_MS, DEFAULT_MAX_TOASTS, DEFAULT_REMOVAL_DELAY_MS,
};
pub use reducer::{reduce_toasts, ToastAction, ToastTimerEffect};
