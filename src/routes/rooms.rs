//! Rooms overview: every room plus the current availability count.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::rooms::{client, types::Room};
use leptos::prelude::*;

#[component]
pub fn RoomsPage() -> impl IntoView {
    let rooms = LocalResource::new(move || async move { client::list_rooms().await });
    let available = LocalResource::new(move || async move { client::available_rooms().await });

    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900">"Rooms"</h1>
                        <p class="text-sm text-gray-500">
                            {move || match available.get() {
                                Some(Ok(free)) => format!("{} rooms currently free", free.count),
                                _ => String::new(),
                            }}
                        </p>
                    </div>

                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match rooms.get() {
                            Some(Ok(list)) => view! { <RoomsTable rooms=list /> }.into_any(),
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
fn RoomsTable(rooms: Vec<Room>) -> impl IntoView {
    if rooms.is_empty() {
        return view! { <p class="text-sm text-gray-500">"No rooms yet."</p> }.into_any();
    }

    view! {
        <table class="min-w-full divide-y divide-gray-200 text-sm">
            <thead class="bg-gray-50 text-left text-xs uppercase text-gray-500">
                <tr>
                    <th class="px-4 py-2">"Number"</th>
                    <th class="px-4 py-2">"Floor"</th>
                    <th class="px-4 py-2">"Type"</th>
                    <th class="px-4 py-2">"Price per day"</th>
                    <th class="px-4 py-2">"Phone"</th>
                    <th class="px-4 py-2">"Free"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-200">
                <For each=move || rooms.clone() key=|room| room.id children=|room| {
                    view! {
                        <tr>
                            <td class="px-4 py-2 font-medium text-gray-900">{room.number}</td>
                            <td class="px-4 py-2">{room.floor}</td>
                            <td class="px-4 py-2">{room.room_type}</td>
                            <td class="px-4 py-2">{room.price_per_day}</td>
                            <td class="px-4 py-2">{room.phone}</td>
                            <td class="px-4 py-2">{if room.is_available { "yes" } else { "no" }}</td>
                        </tr>
                    }
                } />
            </tbody>
        </table>
    }
    .into_any()
}
