//! Quarterly report page. The backend fixes the reported period; this page
//! only renders the aggregates it returns.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::stats::{client, types::QuarterlyReport};
use leptos::prelude::*;

#[component]
pub fn ReportPage() -> impl IntoView {
    let report = LocalResource::new(move || async move { client::quarterly_report().await });

    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900">"Quarterly report"</h1>
                    </div>

                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match report.get() {
                            Some(Ok(report)) => view! { <ReportBody report=report /> }.into_any(),
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
fn ReportBody(report: QuarterlyReport) -> impl IntoView {
    let heading = format!(
        "{} ({} to {})",
        report.period, report.start_date, report.end_date
    );
    let total = format!("Total income: {:.2}", report.total_income);
    let generated = format!("Generated at {}", report.generated_at);
    let clients_by_room = report.clients_by_room;
    let rooms_by_floor = report.rooms_by_floor;
    let income_by_room = report.income_by_room;

    view! {
        <div class="space-y-6 text-sm text-gray-700">
            <p class="text-gray-900 font-medium">{heading}</p>

            <section class="space-y-2">
                <h2 class="text-lg font-semibold text-gray-900">"Clients per room"</h2>
                <ul class="list-disc pl-5">
                    <For
                        each=move || clients_by_room.clone()
                        key=|row| row.room_number.clone()
                        children=|row| {
                            view! {
                                <li>
                                    {format!(
                                        "Room {} ({}): {} clients",
                                        row.room_number, row.room_type, row.client_count,
                                    )}
                                </li>
                            }
                        }
                    />
                </ul>
            </section>

            <section class="space-y-2">
                <h2 class="text-lg font-semibold text-gray-900">"Rooms per floor"</h2>
                <ul class="list-disc pl-5">
                    <For
                        each=move || rooms_by_floor.clone()
                        key=|row| row.floor
                        children=|row| {
                            view! {
                                <li>{format!("Floor {}: {} rooms", row.floor, row.room_count)}</li>
                            }
                        }
                    />
                </ul>
            </section>

            <section class="space-y-2">
                <h2 class="text-lg font-semibold text-gray-900">"Income per room"</h2>
                <ul class="list-disc pl-5">
                    <For
                        each=move || income_by_room.clone()
                        key=|row| row.room_number.clone()
                        children=|row| {
                            view! {
                                <li>
                                    {format!(
                                        "Room {} (floor {}): {:.2}",
                                        row.room_number, row.floor, row.income,
                                    )}
                                </li>
                            }
                        }
                    />
                </ul>
            </section>

            <p class="text-gray-900 font-medium">{total}</p>
            <p class="text-xs text-gray-500">{generated}</p>
        </div>
    }
}
