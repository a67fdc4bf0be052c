//! Two-step login page: credentials first, then the emailed OTP. All state
//! transitions live in [`LoginFlow`]; this page wires the flow to the auth
//! client, the one-second resend countdown, and navigation on success.

use crate::app_lib::config::AppConfig;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::flow::{LoginFlow, LoginStep};
use crate::features::auth::session::use_session;
use crate::features::auth::types::{LoginRequest, ResendOtpRequest, Role, VerifyOtpRequest};
use gloo_timers::callback::Interval;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let flow = RwSignal::new(LoginFlow::new());

    let login_action = Action::new_local(move |input: &(u64, LoginRequest)| {
        let (generation, request) = input.clone();
        async move { (generation, client::login(&request).await) }
    });
    let verify_action = Action::new_local(move |input: &(u64, VerifyOtpRequest)| {
        let (generation, request) = input.clone();
        async move { (generation, client::verify_otp(&request).await) }
    });
    let resend_action = Action::new_local(move |input: &(u64, ResendOtpRequest)| {
        let (generation, request) = input.clone();
        async move { (generation, client::resend_otp(&request).await) }
    });

    Effect::new(move |_| {
        if let Some((generation, result)) = login_action.value().get() {
            let result = result.map_err(|err| err.backend_detail());
            flow.update(|flow| flow.apply_credentials_result(generation, result));
        }
    });

    Effect::new(move |_| {
        if let Some((generation, result)) = verify_action.value().get() {
            let result = result.map_err(|err| err.backend_detail());
            let mut verified = None;
            flow.update(|flow| verified = flow.apply_verify_result(generation, result));
            if let Some(outcome) = verified {
                session.establish(outcome.token);
                navigate(
                    outcome.redirect_to,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    Effect::new(move |_| {
        if let Some((generation, result)) = resend_action.value().get() {
            let result = result.map_err(|err| err.backend_detail());
            flow.update(|flow| flow.apply_resend_result(generation, result));
        }
    });

    // Single one-second ticker for the resend countdown; LoginFlow::tick is a
    // no-op outside the OTP step. Dropped with the page so no tick can land
    // after the view is gone.
    let ticker = StoredValue::new_local(Some(Interval::new(1_000, move || {
        flow.update(LoginFlow::tick);
    })));
    on_cleanup(move || {
        ticker.update_value(|interval| {
            interval.take();
        });
    });

    let on_submit_credentials = move |event: SubmitEvent| {
        event.prevent_default();
        let mut input = None;
        flow.update(|flow| input = flow.begin_credentials());
        if let Some(input) = input {
            login_action.dispatch(input);
        }
    };

    let on_submit_otp = move |event: SubmitEvent| {
        event.prevent_default();
        let mut input = None;
        flow.update(|flow| input = flow.begin_verify());
        if let Some(input) = input {
            verify_action.dispatch(input);
        }
    };

    let on_resend = move |_| {
        let mut input = None;
        flow.update(|flow| input = flow.begin_resend());
        if let Some(input) = input {
            resend_action.dispatch(input);
        }
    };

    let on_back = move |_| flow.update(LoginFlow::back_to_credentials);

    let in_flight = Signal::derive(move || flow.with(|flow| flow.in_flight));
    let error = Signal::derive(move || flow.with(|flow| flow.error.clone()));
    let otp_step = Signal::derive(move || flow.with(|flow| flow.step == LoginStep::OtpPending));

    let oauth_url = AppConfig::load().oauth_authorize_url;

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white mb-6">
                    "Sign in"
                </h1>
                <Show
                    when=move || otp_step.get()
                    fallback=move || {
                        view! {
                            <CredentialsForm
                                flow=flow
                                in_flight=in_flight
                                oauth_url=oauth_url.clone()
                                on_submit=on_submit_credentials
                            />
                        }
                    }
                >
                    <OtpForm
                        flow=flow
                        in_flight=in_flight
                        on_submit=on_submit_otp
                        on_resend=on_resend
                        on_back=on_back
                    />
                </Show>
                {move || {
                    in_flight
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
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
            </div>
        </AppShell>
    }
}

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-indigo-500 dark:focus:border-indigo-500";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
const LINK_BUTTON_CLASS: &str =
    "text-sm font-medium text-indigo-600 hover:underline dark:text-indigo-400";

#[component]
fn CredentialsForm(
    flow: RwSignal<LoginFlow>,
    in_flight: Signal<bool>,
    oauth_url: String,
    on_submit: impl Fn(SubmitEvent) + 'static,
) -> impl IntoView {
    let email = Signal::derive(move || flow.with(|flow| flow.email.clone()));
    let password = Signal::derive(move || flow.with(|flow| flow.password.clone()));
    let login_as = Signal::derive(move || flow.with(|flow| flow.login_as));
    let show_signup = Signal::derive(move || login_as.get() == Role::Student);
    let oauth_href = oauth_url.clone();

    view! {
        <form on:submit=on_submit>
            <div class="mb-5">
                <label class=LABEL_CLASS for="email">"Your email"</label>
                <input
                    id="email"
                    type="email"
                    class=INPUT_CLASS
                    autocomplete="email"
                    placeholder="name@campus.edu"
                    required
                    prop:value=move || email.get()
                    on:input=move |event| {
                        flow.update(|flow| flow.set_email(event_target_value(&event)))
                    }
                />
            </div>
            <div class="mb-5">
                <label class=LABEL_CLASS for="password">"Your password"</label>
                <input
                    id="password"
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="current-password"
                    required
                    prop:value=move || password.get()
                    on:input=move |event| {
                        flow.update(|flow| flow.set_password(event_target_value(&event)))
                    }
                />
            </div>
            <div class="mb-5">
                <label class=LABEL_CLASS for="login_as">"Sign in as"</label>
                <select
                    id="login_as"
                    class=INPUT_CLASS
                    prop:value=move || login_as.get().as_str()
                    on:change=move |event| {
                        if let Some(role) = Role::parse(&event_target_value(&event)) {
                            flow.update(|flow| flow.set_login_as(role));
                        }
                    }
                >
                    <option value="STUDENT">"Student"</option>
                    <option value="ADMIN">"Administrator"</option>
                </select>
            </div>
            <Button button_type="submit" disabled=in_flight>
                "Continue"
            </Button>
            <Show when=move || !oauth_href.is_empty()>
                {
                    let oauth_href = oauth_url.clone();
                    view! {
                        <div class="mt-4">
                            <a
                                href=oauth_href.clone()
                                class="block w-full rounded-lg border border-gray-300 px-5 py-2.5 text-center text-sm font-medium text-gray-900 hover:bg-gray-100 dark:border-gray-600 dark:text-white dark:hover:bg-gray-700"
                            >
                                "Continue with Google"
                            </a>
                        </div>
                    }
                }
            </Show>
            <Show when=move || show_signup.get()>
                <p class="mt-4 text-sm text-gray-600 dark:text-gray-300">
                    "New here? "
                    <A href="/signup" {..} class=LINK_BUTTON_CLASS>
                        "Create an account"
                    </A>
                </p>
            </Show>
        </form>
    }
}

#[component]
fn OtpForm(
    flow: RwSignal<LoginFlow>,
    in_flight: Signal<bool>,
    on_submit: impl Fn(SubmitEvent) + 'static,
    on_resend: impl Fn(leptos::ev::MouseEvent) + 'static,
    on_back: impl Fn(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    let otp = Signal::derive(move || flow.with(|flow| flow.otp.clone()));
    let countdown = Signal::derive(move || flow.with(|flow| flow.countdown));
    let can_resend = Signal::derive(move || flow.with(LoginFlow::can_resend));
    let otp_ready = Signal::derive(move || flow.with(LoginFlow::otp_ready));
    let submit_disabled = Signal::derive(move || in_flight.get() || !otp_ready.get());
    let email = Signal::derive(move || flow.with(|flow| flow.email.clone()));

    view! {
        <form on:submit=on_submit>
            <p class="mb-5 text-sm text-gray-600 dark:text-gray-300">
                "We emailed a 6-digit code to " <span class="font-medium">{move || email.get()}</span> "."
            </p>
            <div class="mb-5">
                <label class=LABEL_CLASS for="otp">"One-time code"</label>
                <input
                    id="otp"
                    type="text"
                    inputmode="numeric"
                    class=INPUT_CLASS
                    autocomplete="one-time-code"
                    placeholder="123456"
                    prop:value=move || otp.get()
                    on:input=move |event| {
                        flow.update(|flow| flow.set_otp(&event_target_value(&event)))
                    }
                />
            </div>
            <Button button_type="submit" disabled=submit_disabled>
                "Verify"
            </Button>
            <div class="mt-4 flex items-center justify-between">
                <button
                    type="button"
                    class=LINK_BUTTON_CLASS
                    class:opacity-50=move || !can_resend.get()
                    disabled=move || !can_resend.get()
                    on:click=on_resend
                >
                    {move || {
                        let remaining = countdown.get();
                        if remaining > 0 {
                            format!("Resend code in {remaining}s")
                        } else {
                            "Resend code".to_string()
                        }
                    }}
                </button>
                <button type="button" class=LINK_BUTTON_CLASS on:click=on_back>
                    "Use a different account"
                </button>
            </div>
        </form>
    }
}
