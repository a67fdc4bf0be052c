//! Administrator landing page behind the admin role gate.

use crate::components::AppShell;
use crate::features::auth::RequireRole;
use crate::features::auth::types::Role;
use leptos::prelude::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Admin>
            <AppShell>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Admin dashboard"
                </h1>
                <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                    "You are signed in as an administrator."
                </p>
            </AppShell>
        </RequireRole>
    }
}
