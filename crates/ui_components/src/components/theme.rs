use super::*;
use ui_core::{load_theme_with, save_theme_with, ThemePreference};

#[component]
/// Toggle button persisting the light/dark preference through the host theme store.
///
/// The stored preference wins on first render; an absent or unparseable value falls
/// back to dark, the library default. The active preference is reflected on the
/// document root for the styling layers.
pub fn ThemeToggle(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let host = use_host_services();
    let theme =
        create_rw_signal(load_theme_with(host.theme.as_ref()).unwrap_or(ThemePreference::Dark));

    create_effect(move |_| apply_document_theme(theme.get()));

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        theme.set(next);
        if let Err(err) = save_theme_with(host.theme.as_ref(), next) {
            logging::warn!("theme preference save failed: {err}");
        }
    };

    view! {
        <Button
            variant=ButtonVariant::Ghost
            layout_class=layout_class.unwrap_or("")
            ui_slot="theme-toggle"
            aria_label="Toggle color scheme".to_string()
            on_click=Callback::new(toggle)
        >
            {move || match theme.get() {
                ThemePreference::Light => "Switch to dark mode",
                ThemePreference::Dark => "Switch to light mode",
            }}
        </Button>
    }
}

fn apply_document_theme(theme: ThemePreference) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(root) = document.document_element() else {
            return;
        };
        let _ = root.set_attribute("data-theme", theme.as_str());
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}
