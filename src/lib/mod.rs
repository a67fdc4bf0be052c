//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flows
//!
//! ### Login (two-step)
//!
//! 1. **Credentials:** The client POSTs `{email, password, loginAs}` to
//!    `/auth/login`; a 2xx response means the backend has emailed an OTP.
//! 2. **Verification:** The client POSTs `{email, otp, loginAs}` to
//!    `/auth/verify-otp`; the 2xx response body is the session token string.
//!    The decoded role claim decides which dashboard the user lands on, never
//!    the requested `loginAs`.
//!
//! ### OAuth
//!
//! The login page links out to the backend's OAuth authorization endpoint.
//! Completion arrives back at `/oauth-success?token=...`, where the token is
//! persisted exactly as the OTP success path does.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging token material.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{post_json, post_json_text_response};
#[cfg(target_arch = "wasm32")]
pub(crate) use errors::AppError;
