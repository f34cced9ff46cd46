//! Reactive auth state shared through Leptos context. The provider seeds the
//! signal from the persisted credential on mount; the session store stays the
//! source of truth for request headers, this signal only mirrors presence so
//! the shell and guards re-render. Call `refresh()` after anything that
//! touches the store.

use crate::features::auth::session;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth context shared through Leptos.
pub struct AuthContext {
    authenticated: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(authenticated: RwSignal<bool>) -> Self {
        let is_authenticated = Signal::derive(move || authenticated.get());
        Self {
            authenticated,
            is_authenticated,
        }
    }

    /// Re-reads credential presence from the session store.
    pub fn refresh(&self) {
        self.authenticated.set(session::has_credential());
    }
}

/// Provides the auth context, hydrated from the persisted credential.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let authenticated = RwSignal::new(session::has_credential());
    let auth = AuthContext::new(authenticated);
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a detached fallback context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let authenticated = RwSignal::new(session::has_credential());
        AuthContext::new(authenticated)
    })
}
