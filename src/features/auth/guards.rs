//! Navigation guard for protected routes. The decision is a pure predicate
//! over the route table and credential presence; the `RequireAuth` component
//! applies it once per navigation, before protected content is committed.
//! The guard never re-checks after mount; a credential cleared mid-session
//! takes effect on the next navigation.

use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Outcome of evaluating one attempted navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    Redirect(&'static str),
}

/// Resolves a navigation attempt: public routes always pass; everything
/// else requires a credential and otherwise redirects to the login route.
pub fn resolve_navigation(path: &str, authenticated: bool) -> NavigationDecision {
    if paths::is_public(path) || authenticated {
        NavigationDecision::Allow
    } else {
        NavigationDecision::Redirect(paths::LOGIN)
    }
}

/// Wraps protected content; unauthenticated visitors are sent to the login
/// route and the children are not rendered. UX-only guard; real access
/// control lives on the API.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        if let NavigationDecision::Redirect(target) =
            resolve_navigation(&path, auth.is_authenticated.get())
        {
            navigate(target, Default::default());
        }
    });

    view! {
        <Show when=move || auth.is_authenticated.get()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_navigation, NavigationDecision};
    use crate::features::auth::session;
    use crate::routes::paths;

    #[test]
    fn public_routes_never_redirect() {
        for route in paths::ROUTES.iter().filter(|route| route.public) {
            assert_eq!(
                resolve_navigation(route.path, false),
                NavigationDecision::Allow,
                "{} should be reachable signed out",
                route.path
            );
            assert_eq!(resolve_navigation(route.path, true), NavigationDecision::Allow);
        }
    }

    #[test]
    fn protected_routes_require_a_credential() {
        for route in paths::ROUTES.iter().filter(|route| !route.public) {
            assert_eq!(
                resolve_navigation(route.path, false),
                NavigationDecision::Redirect(paths::LOGIN),
                "{} should redirect signed out",
                route.path
            );
            assert_eq!(resolve_navigation(route.path, true), NavigationDecision::Allow);
        }
    }

    #[test]
    fn unknown_paths_are_treated_as_protected() {
        assert_eq!(
            resolve_navigation("/no-such-page", false),
            NavigationDecision::Redirect(paths::LOGIN)
        );
        assert_eq!(
            resolve_navigation("/no-such-page", true),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn sign_in_unlocks_a_previously_redirected_navigation() {
        session::clear_credential();
        assert_eq!(
            resolve_navigation(paths::CLIENTS, session::has_credential()),
            NavigationDecision::Redirect(paths::LOGIN)
        );

        session::set_credential("issued-after-login");
        assert_eq!(
            resolve_navigation(paths::CLIENTS, session::has_credential()),
            NavigationDecision::Allow
        );
        session::clear_credential();
    }
}
