//! Framework-agnostic core for the yems-ui component library.
//!
//! This crate owns the two stateful/algorithmic subsystems — the pagination range
//! calculator and the toast queue manager — plus the host-service contracts they
//! consume (deferred timers, theme-preference storage). Concrete browser adapters
//! live in `ui_host_web`, and the Leptos rendering surfaces in `ui_components`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod pagination;
pub mod theme;
pub mod time;
pub mod timer;
pub mod toast;

pub use host::HostServices;
pub use pagination::{compute_page_range, PageRange, PageToken};
pub use theme::{
    load_theme_with, save_theme_with, MemoryThemeStore, NoopThemeStore, ParseThemeError,
    ThemePreference, ThemeStore, THEME_STORAGE_KEY,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
pub use timer::{ManualTimerService, NoopTimerService, TimerHandle, TimerService};
pub use toast::{
    next_toast_id, reduce_toasts, SubscriberId, ToastAction, ToastConfig, ToastEntry, ToastFields,
    ToastId, ToastManager, ToastRequest, ToastTimerEffect, ToastVariant, DEFAULT_AUTO_DISMISS_MS,
    DEFAULT_MAX_TOASTS, DEFAULT_REMOVAL_DELAY_MS,
};
