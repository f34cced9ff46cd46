//! Cleaning rota plus the "who cleaned this client's room" query.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::cleaning::{
    client,
    types::{CleaningSlot, DAY_CODES},
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct WhoCleanedQuery {
    client_id: String,
    day: String,
}

#[component]
pub fn CleaningPage() -> impl IntoView {
    let rota = LocalResource::new(move || async move { client::list_schedule().await });

    let who_cleaned = Action::new_local(move |query: &WhoCleanedQuery| {
        let query = query.clone();
        async move { client::who_cleaned_client_room(&query.client_id, &query.day).await }
    });

    let (client_id, set_client_id) = signal(String::new());
    let (day, set_day) = signal("mon".to_string());
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        who_cleaned.dispatch(WhoCleanedQuery {
            client_id: client_id.get_untracked(),
            day: day.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-8">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900">"Cleaning"</h1>
                    </div>

                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match rota.get() {
                            Some(Ok(slots)) => view! { <RotaTable slots=slots /> }.into_any(),
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                            None => view! { <Spinner /> }.into_any(),
                        }}
                    </Suspense>

                    <section class="space-y-3">
                        <h2 class="text-lg font-semibold text-gray-900">
                            "Who cleaned a client's room"
                        </h2>
                        <form class="flex flex-wrap items-end gap-3" on:submit=on_submit>
                            <label class="text-sm text-gray-700">
                                "Client id"
                                <input
                                    type="number"
                                    class="block border border-gray-300 rounded-lg p-2 text-sm"
                                    required
                                    on:input=move |event| set_client_id.set(event_target_value(&event))
                                />
                            </label>
                            <label class="text-sm text-gray-700">
                                "Weekday"
                                <select
                                    class="block border border-gray-300 rounded-lg p-2 text-sm"
                                    on:change=move |event| set_day.set(event_target_value(&event))
                                >
                                    {DAY_CODES
                                        .iter()
                                        .map(|code| view! { <option value=*code>{*code}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <button
                                type="submit"
                                class="text-white bg-blue-700 hover:bg-blue-800 rounded-lg text-sm px-4 py-2"
                            >
                                "Search"
                            </button>
                        </form>
                        {move || {
                            who_cleaned.value().get().map(|result| match result {
                                Ok(records) if records.is_empty() => {
                                    view! {
                                        <p class="text-sm text-gray-500">
                                            "Nobody was scheduled for that floor and day."
                                        </p>
                                    }
                                        .into_any()
                                }
                                Ok(records) => {
                                    view! {
                                        <ul class="space-y-1 text-sm text-gray-700">
                                            <For
                                                each=move || records.clone()
                                                key=|record| record.employee_id
                                                children=|record| {
                                                    view! {
                                                        <li>
                                                            {format!(
                                                                "{} cleaned floor {} on {} (room {})",
                                                                record.employee_name,
                                                                record.floor,
                                                                record.day_of_week,
                                                                record.client.room_number,
                                                            )}
                                                        </li>
                                                    }
                                                }
                                            />
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                        .into_any()
                                }
                            })
                        }}
                    </section>
                </div>
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn RotaTable(slots: Vec<CleaningSlot>) -> impl IntoView {
    if slots.is_empty() {
        return view! { <p class="text-sm text-gray-500">"The rota is empty."</p> }.into_any();
    }

    view! {
        <table class="min-w-full divide-y divide-gray-200 text-sm">
            <thead class="bg-gray-50 text-left text-xs uppercase text-gray-500">
                <tr>
                    <th class="px-4 py-2">"Employee"</th>
                    <th class="px-4 py-2">"Floor"</th>
                    <th class="px-4 py-2">"Day"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-200">
                <For each=move || slots.clone() key=|slot| slot.id children=|slot| {
                    view! {
                        <tr>
                            <td class="px-4 py-2 font-medium text-gray-900">{slot.employee_name}</td>
                            <td class="px-4 py-2">{slot.floor}</td>
                            <td class="px-4 py-2">{slot.day_of_week}</td>
                        </tr>
                    }
                } />
            </tbody>
        </table>
    }
    .into_any()
}
