//! Statistics page: hotel occupancy totals and the client breakdowns.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::stats::{
    client,
    types::{ClientStatistics, HotelStatistics},
};
use leptos::prelude::*;

#[component]
pub fn StatsPage() -> impl IntoView {
    let hotel = LocalResource::new(move || async move { client::hotel_statistics().await });
    let clients = LocalResource::new(move || async move { client::client_statistics().await });

    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-8">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900">"Statistics"</h1>
                    </div>

                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match hotel.get() {
                            Some(Ok(stats)) => view! { <HotelSection stats=stats /> }.into_any(),
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                            None => view! { <Spinner /> }.into_any(),
                        }}
                    </Suspense>

                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match clients.get() {
                            Some(Ok(stats)) => view! { <ClientsSection stats=stats /> }.into_any(),
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                            None => view! { <Spinner /> }.into_any(),
                        }}
                    </Suspense>
                </div>
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn HotelSection(stats: HotelStatistics) -> impl IntoView {
    view! {
        <section class="space-y-2 text-sm text-gray-700">
            <h2 class="text-lg font-semibold text-gray-900">"Hotel"</h2>
            <ul class="list-disc pl-5">
                <li>
                    {format!(
                        "Rooms: {} total, {} free, {} occupied ({})",
                        stats.rooms.total,
                        stats.rooms.available,
                        stats.rooms.occupied,
                        stats.rooms.occupancy_rate,
                    )}
                </li>
                <li>
                    {format!(
                        "Clients: {} total, {} staying now, {} checked out",
                        stats.clients.total, stats.clients.current, stats.clients.checked_out,
                    )}
                </li>
                <li>
                    {format!(
                        "Employees: {} total, {} active, {} inactive",
                        stats.employees.total, stats.employees.active, stats.employees.inactive,
                    )}
                </li>
            </ul>
            <p class="text-xs text-gray-500">{format!("As of {}", stats.timestamp)}</p>
        </section>
    }
}

#[component]
fn ClientsSection(stats: ClientStatistics) -> impl IntoView {
    let summary = format!(
        "Average stay {:.1} days, {} clients staying now",
        stats.average_stay_days, stats.current_clients,
    );
    let by_city = stats.by_city;
    let by_room_type = stats.by_room_type;

    view! {
        <section class="space-y-2 text-sm text-gray-700">
            <h2 class="text-lg font-semibold text-gray-900">"Clients"</h2>
            <p>{summary}</p>
            <div class="grid gap-6 md:grid-cols-2">
                <div>
                    <h3 class="font-medium text-gray-900">"By city"</h3>
                    <ul class="list-disc pl-5">
                        <For
                            each=move || by_city.clone()
                            key=|row| row.city.clone()
                            children=|row| {
                                view! { <li>{format!("{}: {}", row.city, row.count)}</li> }
                            }
                        />
                    </ul>
                </div>
                <div>
                    <h3 class="font-medium text-gray-900">"By room type"</h3>
                    <ul class="list-disc pl-5">
                        <For
                            each=move || by_room_type.clone()
                            key=|row| row.room_type.clone()
                            children=|row| {
                                view! { <li>{format!("{}: {}", row.room_type, row.count)}</li> }
                            }
                        />
                    </ul>
                </div>
            </div>
        </section>
    }
}
