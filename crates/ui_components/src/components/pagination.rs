use super::*;
use ui_core::{PageRange, PageToken};

#[component]
/// Windowed pagination control.
///
/// The rendered cells come from [`PageRange::compute`]: the first and last page stay
/// anchored, up to `sibling_count` neighbors flank the current page, and collapsed
/// spans render as inert ellipsis cells. The previous/next affordances are disabled at
/// the respective boundary and never invoke `on_page_change` while disabled.
pub fn Pagination(
    #[prop(into)] current_page: MaybeSignal<u32>,
    #[prop(into)] total_pages: MaybeSignal<u32>,
    /// Page numbers kept on each side of the current page before collapsing.
    #[prop(default = 1)] sibling_count: u32,
    /// Invoked once per accepted navigation action with the target page.
    on_page_change: Callback<u32>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let range = create_memo(move |_| {
        PageRange::compute(current_page.get(), total_pages.get(), sibling_count)
    });

    let go_previous = move |_| {
        if !range.get_untracked().is_first_page {
            on_page_change.call(current_page.get_untracked().saturating_sub(1));
        }
    };
    let go_next = move |_| {
        if !range.get_untracked().is_last_page {
            on_page_change.call(current_page.get_untracked().saturating_add(1));
        }
    };

    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            role="navigation"
            aria-label="pagination"
            data-ui-primitive="true"
            data-ui-kind="pagination"
        >
            <ul data-ui-slot="list">
                <li>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        ui_slot="previous"
                        aria_label="Go to previous page".to_string()
                        disabled=Signal::derive(move || range.get().is_first_page)
                        on_click=Callback::new(go_previous)
                    >
                        <span aria-hidden="true">"‹"</span>
                    </Button>
                </li>
                {move || {
                    let current = current_page.get();
                    range
                        .get()
                        .tokens
                        .into_iter()
                        .map(|token| page_cell(token, current, on_page_change))
                        .collect_view()
                }}
                <li>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        ui_slot="next"
                        aria_label="Go to next page".to_string()
                        disabled=Signal::derive(move || range.get().is_last_page)
                        on_click=Callback::new(go_next)
                    >
                        <span aria-hidden="true">"›"</span>
                    </Button>
                </li>
            </ul>
        </nav>
    }
}

fn page_cell(token: PageToken, current_page: u32, on_page_change: Callback<u32>) -> View {
    match token {
        PageToken::Ellipsis => view! {
            <li>
                <span data-ui-slot="ellipsis" aria-hidden="true">"…"</span>
            </li>
        }
        .into_view(),
        PageToken::Page(page) => {
            let selected = page == current_page;
            view! {
                <li>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        ui_slot="page"
                        selected=selected
                        aria_label=format!("Go to page {page}")
                        aria_current=if selected { "page".to_string() } else { String::new() }
                        on_click=Callback::new(move |_| on_page_change.call(page))
                    >
                        {page.to_string()}
                    </Button>
                </li>
            }
            .into_view()
        }
    }
}
