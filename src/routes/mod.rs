/// Route paths referenced by guards, redirects, and navigation.
pub(crate) mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const OAUTH_SUCCESS: &str = "/oauth-success";
    pub const STUDENT_DASHBOARD: &str = "/student-dashboard";
    pub const ADMIN_DASHBOARD: &str = "/admin-dashboard";
}

#[cfg(target_arch = "wasm32")]
mod admin_dashboard;
#[cfg(target_arch = "wasm32")]
mod home;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod oauth_success;
#[cfg(target_arch = "wasm32")]
mod signup;
#[cfg(target_arch = "wasm32")]
mod student_dashboard;

#[cfg(target_arch = "wasm32")]
pub(crate) use admin_dashboard::AdminDashboardPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use home::HomePage;
#[cfg(target_arch = "wasm32")]
pub(crate) use login::LoginPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use oauth_success::OAuthSuccessPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use signup::SignUpPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use student_dashboard::StudentDashboardPage;

#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos_router::components::{Route, Routes};
#[cfg(target_arch = "wasm32")]
use leptos_router::path;

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <home::RedirectToRoot /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/oauth-success") view=OAuthSuccessPage />
            <Route path=path!("/student-dashboard") view=StudentDashboardPage />
            <Route path=path!("/admin-dashboard") view=AdminDashboardPage />
        </Routes>
    }
}
