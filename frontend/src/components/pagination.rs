use leptos::*;

#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<i64>,
    #[prop(into)] pages: Signal<i64>,
    on_page: Callback<i64>,
) -> impl IntoView {
    let go_previous = on_page;
    let go_next = on_page;
    view! {
        <Show when=move || { pages.get() > 1 }>
            <div class="flex items-center justify-between px-4 py-3 border-t border-border">
                <p class="text-sm text-fg-muted">
                    {move || format!("Page {} of {}", current.get(), pages.get())}
                </p>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium border border-border text-fg hover:bg-surface-muted disabled:opacity-50"
                        disabled=move || current.get() <= 1
                        on:click=move |_| go_previous.call(current.get_untracked() - 1)
                    >
                        "Previous"
                    </button>
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-medium border border-border text-fg hover:bg-surface-muted disabled:opacity-50"
                        disabled=move || current.get() >= pages.get()
                        on:click=move |_| go_next.call(current.get_untracked() + 1)
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn pagination_shows_position_between_pages() {
        let html = render_to_string(move || {
            view! {
                <Pagination
                    current=Signal::derive(|| 2)
                    pages=Signal::derive(|| 5)
                    on_page=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Page 2 of 5"));
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
    }

    #[test]
    fn pagination_hidden_for_a_single_page() {
        let html = render_to_string(move || {
            view! {
                <Pagination
                    current=Signal::derive(|| 1)
                    pages=Signal::derive(|| 1)
                    on_page=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("Page 1 of 1"));
    }
}
