//! Registration route. Validates inputs locally, posts the new account, and
//! prompts the user to sign in; registration never signs anyone in by
//! itself. An empty email is dropped from the payload rather than sent
//! blank.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone)]
/// Captures form input for the async action without borrowing signals.
struct RegisterInput {
    username: String,
    password: String,
    re_password: String,
    email: String,
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (re_password, set_re_password) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (created, set_created) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |input: &RegisterInput| {
        let input = input.clone();
        async move {
            client::register(
                &input.username,
                &input.password,
                &input.re_password,
                &input.email,
            )
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(account) => set_created.set(Some(account.username)),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_created.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let re_password_value = re_password.get_untracked();

        if username_value.is_empty()
            || password_value.trim().is_empty()
            || re_password_value.trim().is_empty()
        {
            set_error.set(Some(AppError::Config(
                "Username and both password fields are required.".to_string(),
            )));
            return;
        }

        if password_value != re_password_value {
            set_error.set(Some(AppError::Config(
                "Passwords do not match.".to_string(),
            )));
            return;
        }

        register_action.dispatch(RegisterInput {
            username: username_value,
            password: password_value,
            re_password: re_password_value,
            email: email.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        autocomplete="username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="re-password">
                        "Repeat password"
                    </label>
                    <input
                        id="re-password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_re_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="email">
                        "Email (optional)"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        autocomplete="email"
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=register_action.pending()>
                    "Create account"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    created
                        .get()
                        .map(|name| {
                            view! {
                                <div class="mt-4 space-y-3">
                                    <Alert
                                        kind=AlertKind::Success
                                        message=format!("Account {name} created.")
                                    />
                                    <A href={paths::LOGIN} {..} class="text-blue-700 text-sm">
                                        "Continue to sign in"
                                    </A>
                                </div>
                            }
                        })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
