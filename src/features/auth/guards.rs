use crate::features::auth::guard::{Access, authorize};
use crate::features::auth::session::use_session;
use crate::features::auth::types::Role;
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Renders its children only while the stored token decodes to `role`.
/// Re-evaluates on every token change and redirects on denial.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let access = Signal::derive(move || authorize(session.token.get().as_deref(), role));

    Effect::new(move |_| {
        if let Access::Deny { redirect_to } = access.get() {
            // UX-only guard; real access control must live on the API.
            navigate(
                redirect_to,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || matches!(access.get(), Access::Allow)>{children()}</Show>
    }
}
