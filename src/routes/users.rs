//! Users screen: paged listing, committed search, and a removable card grid,
//! guarded by the session gate. All fetch reconciliation lives in the shared
//! list controller; this module wires UI events to it.

use crate::components::{
    Alert, AlertKind, AppShell, Pagination, RecordCard, SearchBox, Spinner,
};
use crate::features::auth::{RequireSession, state::use_session};
use crate::features::listing::controller::ListController;
use crate::features::listing::debounce::{Debounce, REFETCH_DEBOUNCE_MS};
use crate::features::users::{client, types::UserRecord};
use leptos::prelude::*;

#[component]
pub fn UsersListPage() -> impl IntoView {
    let session = use_session();
    let list: ListController<UserRecord> = ListController::new("users");
    let debounce = StoredValue::new_local(Debounce::new(REFETCH_DEBOUNCE_MS));

    let refetch = move || {
        // Without a token the request is doomed; show the sign-in hint and
        // let the session guard redirect.
        let Some(token) = session.token_untracked() else {
            list.reject("No token found. Please log in.");
            return;
        };
        let query = list.query();
        list.run(client::fetch_users(Some(token), query));
    };

    // Initial fetch on mount. Every read inside is untracked, so this effect
    // never re-runs on its own; refetches are explicit.
    Effect::new(move |_| refetch());

    let on_prev = Callback::new(move |_: ()| {
        debounce.with_value(|debounce| {
            debounce.run(move || {
                if list.retreat() {
                    refetch();
                }
            });
        });
    });

    let on_next = Callback::new(move |_: ()| {
        debounce.with_value(|debounce| {
            debounce.run(move || {
                if list.advance() {
                    refetch();
                }
            });
        });
    });

    let on_search = Callback::new(move |term: String| {
        debounce.with_value(|debounce| {
            debounce.run(move || {
                list.submit_search(&term);
                refetch();
            });
        });
    });

    let on_remove = Callback::new(move |id: String| {
        list.remove(move |record: &UserRecord| record.id == id);
    });

    let records = list.records();
    let loading = list.loading();
    let message = list.message();
    let page = list.page();
    let has_next = list.has_next();

    view! {
        <AppShell>
            <RequireSession>
                <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "All Users"
                    </h1>
                    <SearchBox placeholder="Search users" on_submit=on_search />
                </div>
                {move || {
                    loading
                        .get()
                        .then_some(view! { <div class="flex justify-center py-12"><Spinner /></div> })
                }}
                {move || {
                    (!loading.get())
                        .then(|| message.get())
                        .flatten()
                        .map(|message| view! { <Alert kind=AlertKind::Info message=message /> })
                }}
                <Show when=move || !loading.get() && message.get().is_none()>
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        <For
                            each=move || records.get()
                            key=|user| user.id.clone()
                            children=move |user| {
                                view! {
                                    <RecordCard
                                        id=user.id
                                        name=user.name
                                        email=user.email
                                        address=user.address
                                        phone=user.phone
                                        role=user.role
                                        image=user.image
                                        on_remove=on_remove
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
                <Pagination page=page has_next=has_next on_prev=on_prev on_next=on_next />
            </RequireSession>
        </AppShell>
    }
}
