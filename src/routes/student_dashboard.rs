//! Student landing page. Content is intentionally minimal; the interesting
//! part is the role gate wrapping it.

use crate::components::AppShell;
use crate::features::auth::RequireRole;
use crate::features::auth::types::Role;
use leptos::prelude::*;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Student>
            <AppShell>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Student dashboard"
                </h1>
                <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                    "You are signed in as a student."
                </p>
            </AppShell>
        </RequireRole>
    }
}
