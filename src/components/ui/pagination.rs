//! Prev/next pagination controls. "Prev" is disabled on the first page and
//! "Next" whenever the current page was not full, mirroring the has-next
//! heuristic the fetch state derives.

use leptos::prelude::*;

const PAGE_BUTTON: &str = "rounded-lg bg-blue-700 px-3 py-1.5 text-sm font-medium text-white hover:bg-blue-800 disabled:cursor-not-allowed disabled:opacity-50 dark:bg-blue-600 dark:hover:bg-blue-700";

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] has_next: Signal<bool>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-3 py-4">
            <button
                type="button"
                class=PAGE_BUTTON
                disabled=move || page.get() < 2
                on:click=move |_| on_prev.run(())
            >
                "Prev"
            </button>
            <span class="text-sm text-gray-700 dark:text-gray-300">
                {move || format!("Page {}", page.get())}
            </span>
            <button
                type="button"
                class=PAGE_BUTTON
                disabled=move || !has_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
