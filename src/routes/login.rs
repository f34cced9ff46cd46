//! Login route. Submits credentials to the token endpoint; a success
//! persists the returned token and lands on the rooms overview. A failure
//! leaves the form up with the error and nothing stored.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{client, state::use_auth};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct LoginInput {
    username: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move { client::login(&input.username, &input.password).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    auth.refresh();
                    navigate(paths::HOME, Default::default());
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Username and password are required.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginInput {
            username: username_value,
            password: password_value,
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
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
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
