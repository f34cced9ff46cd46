use crate::app_lib::build_info;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block max-w-[38rem] rounded-lg border border-neutral-200 bg-white">
                    <div class="border-b px-6 py-3 text-neutral-600 font-semibold">
                        "Build Version"
                    </div>
                    <div class="p-6">
                        <pre class="text-center text-base text-black">{commit}</pre>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
