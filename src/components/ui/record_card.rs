//! Directory record card shared by the users and trusts screens. Fields are
//! opaque display strings; only the id is meaningful (removal target).

use leptos::prelude::*;

#[component]
pub fn RecordCard(
    id: String,
    name: String,
    email: String,
    address: String,
    phone: String,
    role: String,
    image: String,
    on_remove: Callback<String>,
) -> impl IntoView {
    let remove_id = id;
    let avatar = (!image.is_empty()).then(|| {
        view! {
            <img
                src=image
                alt=name.clone()
                class="mb-3 h-16 w-16 rounded-full object-cover"
            />
        }
    });

    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm dark:border-gray-700 dark:bg-gray-800">
            {avatar}
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{name}</h3>
            <p class="text-sm text-gray-500 dark:text-gray-400">{role}</p>
            <div class="mt-3 space-y-1 text-sm text-gray-700 dark:text-gray-300">
                <p>{email}</p>
                <p>{address}</p>
                <p>{phone}</p>
            </div>
            <button
                type="button"
                class="mt-4 text-sm font-medium text-red-600 hover:text-red-800 dark:text-red-400 dark:hover:text-red-300"
                on:click=move |_| on_remove.run(remove_id.clone())
            >
                "Remove"
            </button>
        </div>
    }
}
