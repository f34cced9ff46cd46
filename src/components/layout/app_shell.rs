//! Shared layout wrapper with the section navigation. It centralizes header
//! markup so routes can focus on content. Navigation is client-side only;
//! the backend still enforces access control on every request.

use crate::features::auth::{client, state::use_auth};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINK_CLASS: &str =
    "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 md:hover:text-blue-700";

/// Section links shown once the user is signed in.
const SECTIONS: &[(&str, &str)] = &[
    (paths::ROOMS, "Rooms"),
    (paths::CLIENTS, "Clients"),
    (paths::EMPLOYEES, "Employees"),
    (paths::CLEANING, "Cleaning"),
    (paths::REPORT, "Report"),
    (paths::STATS, "Stats"),
];

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let account = LocalResource::new(move || {
        let signed_in = is_authenticated.get();
        async move {
            if signed_in {
                client::fetch_me().await.ok()
            } else {
                None
            }
        }
    });

    // the route guard redirects once the signal flips
    let sign_out = move |_| {
        client::logout();
        auth.refresh();
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href={paths::HOME} {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap">"Front Desk"</span>
                    </A>
                    <nav>
                        <ul class="font-medium flex flex-col p-4 md:p-0 md:flex-row md:space-x-6">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <A href={paths::LOGIN} {..} class=NAV_LINK_CLASS>
                                                "Sign In"
                                            </A>
                                        </li>
                                        <li>
                                            <A href={paths::REGISTER} {..} class=NAV_LINK_CLASS>
                                                "Sign Up"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                {SECTIONS
                                    .iter()
                                    .map(|(href, label)| {
                                        view! {
                                            <li>
                                                <A href={*href} {..} class=NAV_LINK_CLASS>
                                                    {*label}
                                                </A>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                                <li class="text-gray-500 py-2 px-3 md:p-0">
                                    {move || {
                                        account
                                            .get()
                                            .flatten()
                                            .map(|me| me.username)
                                            .unwrap_or_default()
                                    }}
                                </li>
                                <li>
                                    <button type="button" class=NAV_LINK_CLASS on:click=sign_out.clone()>
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
