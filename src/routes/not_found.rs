//! Minimal 404 page for unknown routes.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the not-found page with the shared shell.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-9xl font-black text-gray-100 select-none">"404"</h1>
                <p class="text-2xl font-bold text-gray-900">"Page not found"</p>
                <div class="mt-6 flex items-center justify-center gap-4">
                    <A
                        href={paths::HOME}
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                    >
                        "Go Home"
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100"
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Ok(history) = window.history() {
                                    let _ = history.back();
                                }
                            }
                        }
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
