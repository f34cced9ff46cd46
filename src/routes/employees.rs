//! Employees overview: the full roster, the split by cleaning assignment,
//! and a per-employee rota lookup.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::employees::{client, types::Employee};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let employees = LocalResource::new(move || async move { client::list_employees().await });

    let unjob = Action::new_local(move |_: &()| async move { client::unjob_employees().await });
    let getjob = Action::new_local(move |_: &()| async move { client::getjob_employees().await });

    let schedule = Action::new_local(move |employee_id: &String| {
        let employee_id = employee_id.clone();
        async move { client::employee_schedule(&employee_id).await }
    });
    let (schedule_id, set_schedule_id) = signal(String::new());
    let on_lookup = move |event: SubmitEvent| {
        event.prevent_default();
        schedule.dispatch(schedule_id.get_untracked());
    };

    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-8">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900">"Employees"</h1>
                    </div>

                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match employees.get() {
                            Some(Ok(list)) => view! { <EmployeesTable employees=list /> }.into_any(),
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                            None => view! { <Spinner /> }.into_any(),
                        }}
                    </Suspense>

                    <section class="space-y-3">
                        <h2 class="text-lg font-semibold text-gray-900">"By cleaning assignment"</h2>
                        <div class="flex gap-3">
                            <button
                                type="button"
                                class="text-white bg-blue-700 hover:bg-blue-800 rounded-lg text-sm px-4 py-2"
                                on:click=move |_| {
                                    unjob.dispatch(());
                                }
                            >
                                "Without assignment"
                            </button>
                            <button
                                type="button"
                                class="text-white bg-blue-700 hover:bg-blue-800 rounded-lg text-sm px-4 py-2"
                                on:click=move |_| {
                                    getjob.dispatch(());
                                }
                            >
                                "With assignment"
                            </button>
                        </div>
                        {move || {
                            unjob.value().get().map(|result| match result {
                                Ok(list) => view! { <EmployeesTable employees=list /> }.into_any(),
                                Err(err) => {
                                    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                        .into_any()
                                }
                            })
                        }}
                        {move || {
                            getjob.value().get().map(|result| match result {
                                Ok(list) => view! { <EmployeesTable employees=list /> }.into_any(),
                                Err(err) => {
                                    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                        .into_any()
                                }
                            })
                        }}
                    </section>

                    <section class="space-y-3">
                        <h2 class="text-lg font-semibold text-gray-900">"Cleaning rota lookup"</h2>
                        <form class="flex items-end gap-3" on:submit=on_lookup>
                            <label class="text-sm text-gray-700">
                                "Employee id"
                                <input
                                    type="number"
                                    class="block border border-gray-300 rounded-lg p-2 text-sm"
                                    required
                                    on:input=move |event| set_schedule_id.set(event_target_value(&event))
                                />
                            </label>
                            <button
                                type="submit"
                                class="text-white bg-blue-700 hover:bg-blue-800 rounded-lg text-sm px-4 py-2"
                            >
                                "Show rota"
                            </button>
                        </form>
                        {move || {
                            schedule.value().get().map(|result| match result {
                                Ok(rota) => {
                                    let title = format!(
                                        "{} ({})",
                                        rota.employee.name,
                                        if rota.employee.is_active { "active" } else { "inactive" },
                                    );
                                    view! {
                                        <div class="space-y-1 text-sm text-gray-700">
                                            <p class="font-medium text-gray-900">{title}</p>
                                            <ul class="list-disc pl-5">
                                                <For
                                                    each=move || rota.schedules.clone()
                                                    key=|entry| entry.id
                                                    children=|entry| {
                                                        view! {
                                                            <li>
                                                                {format!("{}, floor {}", entry.day_of_week, entry.floor)}
                                                            </li>
                                                        }
                                                    }
                                                />
                                            </ul>
                                        </div>
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
fn EmployeesTable(employees: Vec<Employee>) -> impl IntoView {
    if employees.is_empty() {
        return view! { <p class="text-sm text-gray-500">"No employees found."</p> }.into_any();
    }

    view! {
        <table class="min-w-full divide-y divide-gray-200 text-sm">
            <thead class="bg-gray-50 text-left text-xs uppercase text-gray-500">
                <tr>
                    <th class="px-4 py-2">"Name"</th>
                    <th class="px-4 py-2">"Account"</th>
                    <th class="px-4 py-2">"Working"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-200">
                <For each=move || employees.clone() key=|employee| employee.id children=|employee| {
                    let account = employee.username.clone().unwrap_or_else(|| "-".to_string());
                    view! {
                        <tr>
                            <td class="px-4 py-2 font-medium text-gray-900">{employee.full_name()}</td>
                            <td class="px-4 py-2">{account}</td>
                            <td class="px-4 py-2">{if employee.is_active { "yes" } else { "no" }}</td>
                        </tr>
                    }
                } />
            </tbody>
        </table>
    }
    .into_any()
}
