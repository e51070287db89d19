use super::*;
use ui_core::ToastEntry;

#[component]
/// Notification region rendering the shared toast queue.
///
/// Subscribes to the toast manager for the lifetime of the component and mirrors
/// every broadcast snapshot into the rendered list, newest first. The subscription is
/// released on cleanup.
pub fn Toaster(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let manager = use_toast_manager();
    let toasts = create_rw_signal(manager.snapshot());

    let subscription = manager.subscribe(move |snapshot| toasts.set(snapshot.to_vec()));
    {
        let manager = manager.clone();
        on_cleanup(move || manager.unsubscribe(subscription));
    }

    view! {
        <ol
            class=merge_layout_class("ui-toaster", layout_class)
            aria-label="Notifications"
            data-ui-primitive="true"
            data-ui-kind="toaster"
        >
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|entry| view! { <ToastItem entry /> })
                    .collect_view()
            }}
        </ol>
    }
}

#[component]
/// One rendered toast surface with copy lines and a close affordance.
///
/// Dismissed entries stay rendered with `data-ui-state="closed"` until the manager's
/// removal delay elapses, giving the styling layer its exit-animation window.
pub fn ToastItem(entry: ToastEntry) -> impl IntoView {
    let manager = use_toast_manager();
    let id = entry.id.clone();
    let dismiss = Callback::new(move |_| manager.dismiss(Some(id.clone())));

    view! {
        <li
            class="ui-toast"
            role="status"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-variant=entry.variant.token()
            data-ui-state=if entry.open { "open" } else { "closed" }
        >
            <div data-ui-slot="copy">
                {entry
                    .title
                    .map(|title| view! { <div data-ui-slot="title">{title}</div> })}
                {entry
                    .description
                    .map(|description| view! { <div data-ui-slot="description">{description}</div> })}
            </div>
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                ui_slot="close"
                aria_label="Dismiss notification".to_string()
                on_click=dismiss
            >
                <span aria-hidden="true">"×"</span>
            </Button>
        </li>
    }
}
