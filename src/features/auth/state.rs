//! Session state and context for the frontend. The provider hydrates the
//! token once on app start from the cookie jar and exposes it to screens as an
//! injected dependency, so routes never re-read ambient storage themselves.

use crate::features::auth::session;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub(crate) struct SessionContext {
    token: RwSignal<Option<String>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    /// Builds a context around the provided token signal.
    fn new(token: RwSignal<Option<String>>) -> Self {
        let is_authenticated = Signal::derive(move || token.get().is_some());
        Self {
            token,
            is_authenticated,
        }
    }

    /// Stores the token issued at login. The cookie is only written when the
    /// server did not already set it via `Set-Cookie`.
    pub fn establish(&self, token: String) {
        if session::read_token().is_none() {
            session::store_token(&token);
        }
        self.token.set(Some(token));
    }

    /// Invalidates the session locally, typically on logout.
    pub fn clear(&self) {
        session::clear_token();
        self.token.set(None);
    }

    /// Current token without subscribing the caller to changes.
    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }
}

/// Provides the session context, hydrated once from the cookie jar.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let token = RwSignal::new(session::read_token());
    let session = SessionContext::new(token);
    provide_context(session);

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(RwSignal::new(None)))
}
