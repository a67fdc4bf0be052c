//! Auth feature module covering the two-step login flow, signup validation,
//! token decoding, and session storage. It keeps authentication logic out of
//! the UI and must stay aligned with backend protocol expectations. This
//! module touches security boundaries and must avoid logging token material.
//!
//! Flow Overview: Login submits credentials, then verifies the emailed OTP;
//! the verify response body is the session token. The decoded role claim
//! decides the landing dashboard. OAuth completion persists its token through
//! the same path. Role decoding here is a UX gate only, with no signature
//! check; real authorization lives on the backend.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod flow;
pub(crate) mod guard;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod session;
pub(crate) mod token;
pub(crate) mod types;
pub(crate) mod validate;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireRole;
