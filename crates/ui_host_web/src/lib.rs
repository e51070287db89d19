//! Browser (`wasm32`) implementations of the `ui_core` host-service contracts.
//!
//! This crate is the concrete browser-side wiring layer for deferred timers and
//! theme-preference storage. Non-wasm builds compile the same API surface with inert
//! fallbacks so shared crates can link on native targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod theme_store;
mod timers;

pub use theme_store::WebThemeStore;
pub use timers::WebTimerService;

use std::rc::Rc;

use ui_core::HostServices;

/// Assembles the browser host-service bundle for the component provider.
pub fn browser_host_services() -> HostServices {
    HostServices {
        timers: Rc::new(WebTimerService),
        theme: Rc::new(WebThemeStore),
    }
}
