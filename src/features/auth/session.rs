//! Session token state and context for the frontend. The provider hydrates
//! the token once from browser storage on mount and exposes a single handle
//! for establishing and tearing down a session, so no route touches storage
//! directly.

use leptos::prelude::*;

pub const TOKEN_STORAGE_KEY: &str = "aula_token";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok()).flatten()
}

fn persist_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

fn read_token() -> Option<String> {
    storage().and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
}

fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

#[derive(Clone, Copy)]
/// Session context shared through Leptos. Holds the bearer token, mirrored to
/// browser storage so the session survives a page reload.
pub struct SessionContext {
    pub token: RwSignal<Option<String>>,
}

impl SessionContext {
    fn new(token: RwSignal<Option<String>>) -> Self {
        Self { token }
    }

    /// Persists the token and makes it the active session.
    pub fn establish(&self, token: String) {
        persist_token(&token);
        self.token.set(Some(token));
    }

    /// Drops the active session and its stored token, typically on logout.
    pub fn teardown(&self) {
        clear_token();
        self.token.set(None);
    }
}

/// Provides the session context and hydrates the token once on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let token = RwSignal::new(read_token());
    provide_context(SessionContext::new(token));

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(RwSignal::new(None)))
}
