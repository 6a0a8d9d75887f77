//! Free-text search form. The term is committed on submit, not on keystroke;
//! the parent decides what a commit means (reset to page 1 and refetch).

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn SearchBox(
    #[prop(optional)] placeholder: Option<&'static str>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let (value, set_value) = signal(String::new());
    let placeholder = placeholder.unwrap_or("Search");

    let submit = move |event: SubmitEvent| {
        event.prevent_default();
        on_submit.run(value.get_untracked());
    };

    view! {
        <form class="flex items-center gap-2" on:submit=submit>
            <input
                type="search"
                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-48 p-2 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                placeholder=placeholder
                on:input=move |event| set_value.set(event_target_value(&event))
            />
            <button
                type="submit"
                class="rounded-lg bg-blue-700 px-3 py-2 text-sm font-medium text-white hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
            >
                "Search"
            </button>
        </form>
    }
}
