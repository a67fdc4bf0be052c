//! Account signup page. Validation runs fully on the client before the
//! request is sent, and a successful signup shows a confirmation banner
//! before redirecting to the root path after a short pause.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::types::SignupRequest;
use crate::features::auth::validate::validate;
use crate::routes::paths;
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Pause between the success banner appearing and the redirect to the root
/// path, so the user actually sees the confirmation.
const SIGNUP_REDIRECT_DELAY_MS: u32 = 1_500;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-indigo-500 dark:focus:border-indigo-500";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(SignupRequest::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (succeeded, set_succeeded) = signal(false);

    let signup_action = Action::new_local(move |request: &SignupRequest| {
        let request = request.clone();
        async move { client::signup(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(()) => {
                    set_succeeded.set(true);
                    let navigate = navigate.clone();
                    Timeout::new(SIGNUP_REDIRECT_DELAY_MS, move || {
                        navigate(
                            paths::ROOT,
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    })
                    .forget();
                }
                Err(err) => set_error.set(Some(failure_message(&err))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if succeeded.get_untracked() || signup_action.pending().get_untracked() {
            return;
        }
        set_error.set(None);

        let request = form.get_untracked();
        if let Err(message) = validate(&request) {
            set_error.set(Some(message.to_string()));
            return;
        }
        signup_action.dispatch(request);
    };

    let disabled = Signal::derive(move || signup_action.pending().get() || succeeded.get());

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white mb-6">
                    "Create your account"
                </h1>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="name">"Full name"</label>
                    <input
                        id="name"
                        type="text"
                        class=INPUT_CLASS
                        autocomplete="name"
                        required
                        on:input=move |event| {
                            form.update(|form| form.name = event_target_value(&event))
                        }
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT_CLASS
                        autocomplete="email"
                        placeholder="name@campus.edu"
                        required
                        on:input=move |event| {
                            form.update(|form| form.email = event_target_value(&event))
                        }
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="new-password"
                        required
                        on:input=move |event| {
                            form.update(|form| form.password = event_target_value(&event))
                        }
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="confirm_password">"Confirm password"</label>
                    <input
                        id="confirm_password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="new-password"
                        required
                        on:input=move |event| {
                            form.update(|form| form.confirm_password = event_target_value(&event))
                        }
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="phone">"Phone"</label>
                    <input
                        id="phone"
                        type="tel"
                        inputmode="numeric"
                        class=INPUT_CLASS
                        autocomplete="tel"
                        placeholder="5551234567"
                        maxlength="10"
                        required
                        prop:value=move || form.with(|form| form.phone.clone())
                        on:input=move |event| {
                            // Digits only, capped at ten, even when pasted.
                            let digits: String = event_target_value(&event)
                                .chars()
                                .filter(|c| c.is_ascii_digit())
                                .take(10)
                                .collect();
                            form.update(|form| form.phone = digits)
                        }
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="address">"Address"</label>
                    <input
                        id="address"
                        type="text"
                        class=INPUT_CLASS
                        autocomplete="street-address"
                        required
                        on:input=move |event| {
                            form.update(|form| form.address = event_target_value(&event))
                        }
                    />
                </div>
                <Button button_type="submit" disabled=disabled>
                    "Sign up"
                </Button>
                {move || {
                    signup_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    succeeded.get().then_some(view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Success
                                message="Account created. Taking you to sign in.".to_string()
                            />
                        </div>
                    })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}

/// Prefers the backend's error detail; falls back to a generic message.
fn failure_message(err: &AppError) -> String {
    err.backend_detail()
        .unwrap_or_else(|| "Signup failed. Please try again.".to_string())
}
