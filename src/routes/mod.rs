mod login;
mod not_found;
mod trusts;
mod users;

pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use trusts::TrustsListPage;
pub(crate) use users::UsersListPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/users") view=UsersListPage />
            <Route path=path!("/trusts") view=TrustsListPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
