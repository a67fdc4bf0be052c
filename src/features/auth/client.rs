//! Client wrappers for the auth API endpoints. These helpers centralize the
//! request plumbing so route code never builds URLs or inspects raw responses,
//! and credentials and OTP codes stay out of log output.

use crate::{
    app_lib::{AppError, post_json, post_json_text_response},
    features::auth::types::{LoginRequest, ResendOtpRequest, SignupRequest, VerifyOtpRequest},
};

/// Submits credentials to start the two-step login. A 2xx response means an
/// OTP was emailed; the body carries nothing useful.
pub async fn login(request: &LoginRequest) -> Result<(), AppError> {
    post_json("/auth/login", request).await
}

/// Verifies the emailed OTP. The 2xx response body is the session token.
pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<String, AppError> {
    post_json_text_response("/auth/verify-otp", request).await
}

/// Asks the backend to email a fresh OTP for a pending login.
pub async fn resend_otp(request: &ResendOtpRequest) -> Result<(), AppError> {
    post_json("/auth/resend-otp", request).await
}

/// Registers a new account. No OTP step follows signup.
pub async fn signup(request: &SignupRequest) -> Result<(), AppError> {
    post_json("/auth/signup", request).await
}
