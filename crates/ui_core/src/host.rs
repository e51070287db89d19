//! Shared host-bundle model for browser and test composition.

use std::rc::Rc;

use crate::{NoopThemeStore, NoopTimerService, ThemeStore, TimerService};

/// Host service bundle injected into the component provider.
///
/// Environment-specific service selection happens before this bundle crosses into
/// `ui_components`, which keeps the component crate decoupled from browser adapter
/// details.
#[derive(Clone)]
pub struct HostServices {
    /// Deferred-callback timer facility consumed by the toast manager.
    pub timers: Rc<dyn TimerService>,
    /// Theme-preference storage facility.
    pub theme: Rc<dyn ThemeStore>,
}

impl HostServices {
    /// Bundle of no-op services for unsupported targets and baseline tests.
    pub fn noop() -> Self {
        Self {
            timers: Rc::new(NoopTimerService),
            theme: Rc::new(NoopThemeStore),
        }
    }
}
