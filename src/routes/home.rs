//! Root landing redirect. The root path never renders content of its own: it
//! forwards to the dashboard matching the stored token, or to login when no
//! usable token exists. Unmatched paths funnel back to the root first.

use crate::features::auth::guard::landing_route;
use crate::features::auth::session::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let target = landing_route(session.token.get().as_deref());
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! { <div></div> }
}

/// Fallback for unmatched paths.
#[component]
pub fn RedirectToRoot() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move |_| {
        navigate(
            paths::ROOT,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! { <div></div> }
}
