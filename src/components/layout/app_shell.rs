//! Shared layout wrapper with header navigation and the content container. It
//! centralizes the sign-out control so routes can focus on content.
//! Navigation remains client-side; the backend must enforce access control.

use crate::app_lib::build_info;
use crate::features::auth::{client, state::use_session};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated;

    let sign_out = move |_| {
        let token = session.token_untracked();
        spawn_local(async move {
            // Local invalidation happens regardless of the server outcome.
            let _ = client::logout(token).await;
        });
        session.clear();
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/users"
                        {..}
                        class="font-semibold whitespace-nowrap text-gray-900 dark:text-white"
                    >
                        "Trustbridge Admin"
                    </A>
                    <nav class="flex items-center gap-6 font-medium">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <A href="/login" {..} class=NAV_LINK>
                                        "Sign In"
                                    </A>
                                }
                            }
                        >
                            <A href="/users" {..} class=NAV_LINK>
                                "Users"
                            </A>
                            <A href="/trusts" {..} class=NAV_LINK>
                                "Trusts"
                            </A>
                            <button type="button" class=NAV_LINK on:click=sign_out>
                                "Sign Out"
                            </button>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400 dark:text-gray-600">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
