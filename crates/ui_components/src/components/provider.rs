//! Provider and context wiring for the component layer.
//!
//! This module owns the long-lived toast manager and the injected host-service
//! bundle. UI composition stays in the sibling component modules.

use std::rc::Rc;

use leptos::*;
use ui_core::{HostServices, ToastConfig, ToastManager};

#[derive(Clone, Copy)]
/// Leptos context for reaching the shared toast manager and host services.
pub struct UiContext {
    /// Host service bundle selected by the entry layer.
    pub host: StoredValue<HostServices>,
    /// Process-wide toast queue manager.
    pub toasts: StoredValue<ToastManager>,
}

#[component]
/// Provides [`UiContext`] to descendant components.
///
/// Constructs the single toast manager for the process from the injected timer
/// facility; every [`super::Toaster`] and toast-dispatching call site below this
/// provider shares that one queue.
pub fn UiProvider(
    /// Injected browser or test host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Queue policy for the shared toast manager; defaults mirror the library policy.
    #[prop(optional)] toast_config: Option<ToastConfig>,
    children: Children,
) -> impl IntoView {
    let manager = ToastManager::new(
        Rc::clone(&host_services.timers),
        toast_config.unwrap_or_default(),
    );
    let context = UiContext {
        host: store_value(host_services),
        toasts: store_value(manager),
    };
    provide_context(context);

    children().into_view()
}

/// Returns the shared toast manager.
///
/// # Panics
///
/// Panics if called outside [`UiProvider`].
pub fn use_toast_manager() -> ToastManager {
    use_context::<UiContext>()
        .expect("UiContext not provided")
        .toasts
        .get_value()
}

/// Returns the injected host service bundle.
///
/// # Panics
///
/// Panics if called outside [`UiProvider`].
pub fn use_host_services() -> HostServices {
    use_context::<UiContext>()
        .expect("UiContext not provided")
        .host
        .get_value()
}
