//! Clients overview plus the two period queries: stays in a room over a
//! period, and stays overlapping a given client's.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::clients::{
    client,
    types::{HotelClient, StayOverlap},
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone)]
struct PeriodQuery {
    id: String,
    start_date: String,
    end_date: String,
}

impl PeriodQuery {
    /// Parses the id field, rejecting blanks and non-numbers up front.
    fn parse_id(&self, label: &str) -> Result<i64, AppError> {
        self.id
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{label} must be a number.")))
    }
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let clients = LocalResource::new(move || async move { client::list_clients().await });

    let in_period = Action::new_local(move |query: &PeriodQuery| {
        let query = query.clone();
        async move {
            let room_id = query.parse_id("Room id")?;
            client::clients_in_period(room_id, &query.start_date, &query.end_date).await
        }
    });

    let same_period = Action::new_local(move |query: &PeriodQuery| {
        let query = query.clone();
        async move {
            let client_id = query.parse_id("Client id")?;
            client::same_period_clients(client_id, &query.start_date, &query.end_date).await
        }
    });

    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-8">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900">"Clients"</h1>
                    </div>

                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match clients.get() {
                            Some(Ok(list)) => view! { <ClientsTable clients=list /> }.into_any(),
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                            None => view! { <Spinner /> }.into_any(),
                        }}
                    </Suspense>

                    <section class="space-y-3">
                        <h2 class="text-lg font-semibold text-gray-900">"Stays in a room"</h2>
                        <PeriodForm
                            id_label="Room id"
                            on_search=Callback::new(move |query| {
                                in_period.dispatch(query);
                            })
                        />
                        {move || {
                            in_period.value().get().map(|result| match result {
                                Ok(list) => view! { <ClientsTable clients=list /> }.into_any(),
                                Err(err) => {
                                    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                        .into_any()
                                }
                            })
                        }}
                    </section>

                    <section class="space-y-3">
                        <h2 class="text-lg font-semibold text-gray-900">"Overlapping stays"</h2>
                        <PeriodForm
                            id_label="Client id"
                            on_search=Callback::new(move |query| {
                                same_period.dispatch(query);
                            })
                        />
                        {move || {
                            same_period.value().get().map(|result| match result {
                                Ok(list) => view! { <OverlapList overlaps=list /> }.into_any(),
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

/// Small id + date-range form reused by both period queries.
#[component]
fn PeriodForm(id_label: &'static str, on_search: Callback<PeriodQuery>) -> impl IntoView {
    let (id, set_id) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        on_search.run(PeriodQuery {
            id: id.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
        });
    };

    view! {
        <form class="flex flex-wrap items-end gap-3" on:submit=on_submit>
            <label class="text-sm text-gray-700">
                {id_label}
                <input
                    type="number"
                    class="block border border-gray-300 rounded-lg p-2 text-sm"
                    required
                    on:input=move |event| set_id.set(event_target_value(&event))
                />
            </label>
            <label class="text-sm text-gray-700">
                "From"
                <input
                    type="date"
                    class="block border border-gray-300 rounded-lg p-2 text-sm"
                    required
                    on:input=move |event| set_start_date.set(event_target_value(&event))
                />
            </label>
            <label class="text-sm text-gray-700">
                "To"
                <input
                    type="date"
                    class="block border border-gray-300 rounded-lg p-2 text-sm"
                    required
                    on:input=move |event| set_end_date.set(event_target_value(&event))
                />
            </label>
            <button
                type="submit"
                class="text-white bg-blue-700 hover:bg-blue-800 rounded-lg text-sm px-4 py-2"
            >
                "Search"
            </button>
        </form>
    }
}

#[component]
fn ClientsTable(clients: Vec<HotelClient>) -> impl IntoView {
    if clients.is_empty() {
        return view! { <p class="text-sm text-gray-500">"No clients found."</p> }.into_any();
    }

    view! {
        <table class="min-w-full divide-y divide-gray-200 text-sm">
            <thead class="bg-gray-50 text-left text-xs uppercase text-gray-500">
                <tr>
                    <th class="px-4 py-2">"Name"</th>
                    <th class="px-4 py-2">"Passport"</th>
                    <th class="px-4 py-2">"City"</th>
                    <th class="px-4 py-2">"Check-in"</th>
                    <th class="px-4 py-2">"Check-out"</th>
                    <th class="px-4 py-2">"Room"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-200">
                <For each=move || clients.clone() key=|client| client.id children=|client| {
                    let check_out = client.check_out_date.clone().unwrap_or_else(|| "-".to_string());
                    view! {
                        <tr>
                            <td class="px-4 py-2 font-medium text-gray-900">{client.full_name()}</td>
                            <td class="px-4 py-2">{client.passport}</td>
                            <td class="px-4 py-2">{client.city}</td>
                            <td class="px-4 py-2">{client.check_in_date}</td>
                            <td class="px-4 py-2">{check_out}</td>
                            <td class="px-4 py-2">{client.room_number}</td>
                        </tr>
                    }
                } />
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn OverlapList(overlaps: Vec<StayOverlap>) -> impl IntoView {
    if overlaps.is_empty() {
        return view! { <p class="text-sm text-gray-500">"No overlapping stays."</p> }.into_any();
    }

    view! {
        <ul class="space-y-1 text-sm text-gray-700">
            <For each=move || overlaps.clone() key=|overlap| overlap.id children=|overlap| {
                let check_out = overlap.check_out.clone().unwrap_or_else(|| "now".to_string());
                view! {
                    <li>
                        {format!(
                            "{} ({}), room {}, {} to {}",
                            overlap.full_name, overlap.city, overlap.room, overlap.check_in, check_out,
                        )}
                    </li>
                }
            } />
        </ul>
    }
    .into_any()
}
