//! Toast entry, request, and queue-policy model types.

use std::cell::Cell;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::next_monotonic_timestamp_ms;

/// Default maximum number of concurrently queued toasts.
pub const DEFAULT_MAX_TOASTS: usize = 1;

/// Default open-state duration before a toast dismisses itself, in milliseconds.
pub const DEFAULT_AUTO_DISMISS_MS: u32 = 5_000;

/// Default delay between dismissal and removal from the queue, in milliseconds.
///
/// Long enough for an exit animation; independent of the display duration.
pub const DEFAULT_REMOVAL_DELAY_MS: u32 = 1_000;

thread_local! {
    static NEXT_TOAST_ID: Cell<u64> = const { Cell::new(0) };
}

/// Returns a fresh process-unique toast id.
pub fn next_toast_id() -> ToastId {
    NEXT_TOAST_ID.with(|counter| {
        let next = counter.get().wrapping_add(1);
        counter.set(next);
        ToastId(format!("toast-{next}"))
    })
}

/// Identity of one logical toast; two entries are the same toast iff their ids match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(pub String);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for ToastId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Semantic tone of a toast surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastVariant {
    /// Standard informational toast.
    Default,
    /// Destructive/error toast.
    Destructive,
}

impl Default for ToastVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ToastVariant {
    /// Returns a stable string token for DOM contracts and diagnostics.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }
}

/// One queued notification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastEntry {
    /// Unique id; caller-supplied or generated on add.
    pub id: ToastId,
    /// Optional heading line.
    pub title: Option<String>,
    /// Optional body line.
    pub description: Option<String>,
    /// Semantic tone.
    pub variant: ToastVariant,
    /// Creation timestamp in unix milliseconds.
    pub created_at_ms: u64,
    /// Whether the toast is visible. Dismissed entries stay queued (closed) until the
    /// removal delay elapses, so exit animations have something to render.
    pub open: bool,
}

/// Partial field set merged into an existing entry by an update operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastFields {
    /// Replacement heading, when present.
    pub title: Option<String>,
    /// Replacement body, when present.
    pub description: Option<String>,
    /// Replacement tone, when present.
    pub variant: Option<ToastVariant>,
}

/// Add-operation payload; absent fields fall back to defaults and a generated id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastRequest {
    /// Caller-supplied id; a collision with a queued entry converts the add into an
    /// update of that entry.
    pub id: Option<ToastId>,
    /// Optional heading line.
    pub title: Option<String>,
    /// Optional body line.
    pub description: Option<String>,
    /// Semantic tone.
    pub variant: Option<ToastVariant>,
}

impl ToastRequest {
    /// Request with only a heading set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Materializes the request into an open queue entry, generating an id when
    /// absent.
    pub(crate) fn into_entry(self) -> ToastEntry {
        ToastEntry {
            id: self.id.unwrap_or_else(next_toast_id),
            title: self.title,
            description: self.description,
            variant: self.variant.unwrap_or_default(),
            created_at_ms: next_monotonic_timestamp_ms(),
            open: true,
        }
    }

    /// Reinterprets the request as a partial update on id collision.
    pub(crate) fn into_fields(self) -> ToastFields {
        ToastFields {
            title: self.title,
            description: self.description,
            variant: self.variant,
        }
    }
}

/// Queue policy knobs: bound, display duration, and removal delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Maximum number of queued entries; the oldest entries beyond the bound are
    /// evicted.
    pub max_toasts: usize,
    /// Open-state duration before automatic dismissal, in milliseconds.
    pub auto_dismiss_ms: u32,
    /// Delay between dismissal and removal, in milliseconds.
    pub removal_delay_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_toasts: DEFAULT_MAX_TOASTS,
            auto_dismiss_ms: DEFAULT_AUTO_DISMISS_MS,
            removal_delay_ms: DEFAULT_REMOVAL_DELAY_MS,
        }
    }
}
