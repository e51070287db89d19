//! Shared UI component library built on the framework-agnostic `ui_core` state layer.
//!
//! The crate owns the Leptos rendering surfaces for the pagination and toast
//! subsystems, the provider wiring that injects host services, and the stable
//! `data-ui-*` DOM contract consumed by the styling layers. Applications compose these
//! components instead of reaching into the state layer directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;

pub use components::{
    use_host_services, use_toast_manager, Button, ButtonSize, ButtonVariant, Pagination,
    ThemeToggle, ToastItem, Toaster, UiContext, UiProvider,
};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        use_host_services, use_toast_manager, Button, ButtonSize, ButtonVariant, Pagination,
        ThemeToggle, ToastItem, Toaster, UiProvider,
    };
}
