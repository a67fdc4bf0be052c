//! OAuth completion landing. The backend redirects here with the session
//! token in the `token` query parameter; this page persists it exactly as the
//! OTP verify success path does and forwards to the matching dashboard. The
//! token is scrubbed from the URL either way so it never lingers in history.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::guard::{Completion, complete_oauth};
use crate::features::auth::session::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};
use wasm_bindgen::JsValue;
use web_sys::{UrlSearchParams, window};

#[derive(Clone, Debug, PartialEq)]
enum CompletionStatus {
    Pending,
    Failed(String),
}

#[component]
pub fn OAuthSuccessPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (status, set_status) = signal(CompletionStatus::Pending);
    let (ran, set_ran) = signal(false);

    Effect::new(move |_| {
        if ran.get() {
            return;
        }
        set_ran.set(true);

        let token = extract_token_from_query();
        clear_token_from_url();

        let replace = NavigateOptions {
            replace: true,
            ..Default::default()
        };
        match complete_oauth(token) {
            Completion::MissingToken => navigate(paths::LOGIN, replace),
            Completion::Established { token, redirect_to } => {
                session.establish(token);
                navigate(redirect_to, replace);
            }
            Completion::Invalid => {
                // An unusable token must not leave a half-established
                // session behind.
                session.teardown();
                set_status.set(CompletionStatus::Failed(
                    "Sign-in could not be completed. Please try again.".to_string(),
                ));
            }
        }
    });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                {move || match status.get() {
                    CompletionStatus::Pending => view! {
                        <div class="mt-4 flex items-center gap-3">
                            <Spinner />
                            <span class="text-sm text-gray-600 dark:text-gray-300">
                                "Signing you in..."
                            </span>
                        </div>
                    }
                    .into_any(),
                    CompletionStatus::Failed(message) => view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=message />
                            <p class="mt-4 text-sm text-gray-600 dark:text-gray-300">
                                <A
                                    href="/login"
                                    {..}
                                    class="font-medium text-indigo-600 hover:underline dark:text-indigo-400"
                                >
                                    "Back to sign in"
                                </A>
                            </p>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}

fn extract_token_from_query() -> Option<String> {
    let search = window()?.location().search().ok()?;
    let trimmed = search.trim_start_matches('?');
    if trimmed.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(trimmed).ok()?;
    params.get("token")
}

fn clear_token_from_url() {
    let Some(window) = window() else {
        return;
    };
    let history = match window.history() {
        Ok(history) => history,
        Err(_) => return,
    };
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(paths::OAUTH_SUCCESS));
}
