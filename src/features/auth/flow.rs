//! Two-step login state machine: credentials, then OTP verification.
//!
//! The flow itself is pure state. Network calls happen outside; callers ask
//! the flow to begin a transition, perform the request, and feed the result
//! back. Every begin handed out carries the flow's current generation, and a
//! result whose generation no longer matches is discarded. Returning to the
//! credentials step bumps the generation, so a verification that was still in
//! flight when the user backed out can never establish a session afterwards.

use crate::features::auth::token::decode_role;
use crate::features::auth::types::{LoginRequest, ResendOtpRequest, Role, VerifyOtpRequest};

pub const RESEND_COOLDOWN_SECS: u32 = 60;
pub const OTP_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginStep {
    Credentials,
    OtpPending,
}

/// Outcome of a successful OTP verification: the session token to persist and
/// the dashboard the decoded role claim points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedSession {
    pub token: String,
    pub redirect_to: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginFlow {
    pub step: LoginStep,
    pub email: String,
    pub password: String,
    pub login_as: Role,
    pub otp: String,
    pub error: Option<String>,
    pub in_flight: bool,
    pub countdown: u32,
    generation: u64,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            step: LoginStep::Credentials,
            email: String::new(),
            password: String::new(),
            login_as: Role::Student,
            otp: String::new(),
            error: None,
            in_flight: false,
            countdown: 0,
            generation: 0,
        }
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn set_login_as(&mut self, role: Role) {
        self.login_as = role;
    }

    /// Accepts raw OTP input, keeping only ASCII digits and at most
    /// [`OTP_LENGTH`] of them. Pasting "12a34-56" stores "123456".
    pub fn set_otp(&mut self, value: &str) {
        self.otp = value
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(OTP_LENGTH)
            .collect();
    }

    pub fn otp_ready(&self) -> bool {
        self.otp.len() == OTP_LENGTH
    }

    pub fn can_resend(&self) -> bool {
        self.step == LoginStep::OtpPending && self.countdown == 0 && !self.in_flight
    }

    /// Starts the credentials submission. Returns the request to send tagged
    /// with the current generation, or `None` when the submission is refused
    /// (already in flight, wrong step, or empty fields).
    pub fn begin_credentials(&mut self) -> Option<(u64, LoginRequest)> {
        if self.in_flight || self.step != LoginStep::Credentials {
            return None;
        }
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some("Email and password are required.".to_string());
            return None;
        }
        self.error = None;
        self.in_flight = true;
        Some((
            self.generation,
            LoginRequest {
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                login_as: self.login_as,
            },
        ))
    }

    /// Feeds back the login request's outcome. `Err` carries the backend's
    /// error detail when the response had one.
    pub fn apply_credentials_result(&mut self, generation: u64, result: Result<(), Option<String>>) {
        if generation != self.generation {
            return;
        }
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.step = LoginStep::OtpPending;
                self.otp.clear();
                self.error = None;
                self.countdown = RESEND_COOLDOWN_SECS;
            }
            Err(detail) => {
                self.error =
                    Some(detail.unwrap_or_else(|| "Invalid email or password.".to_string()));
            }
        }
    }

    pub fn begin_verify(&mut self) -> Option<(u64, VerifyOtpRequest)> {
        if self.in_flight || self.step != LoginStep::OtpPending {
            return None;
        }
        if !self.otp_ready() {
            self.error = Some("Enter the 6-digit code from your email.".to_string());
            return None;
        }
        self.error = None;
        self.in_flight = true;
        Some((
            self.generation,
            VerifyOtpRequest {
                email: self.email.trim().to_string(),
                otp: self.otp.clone(),
                login_as: self.login_as,
            },
        ))
    }

    /// Feeds back the verification outcome. The response body on success is
    /// the session token; the dashboard is picked from its decoded role claim,
    /// never from `login_as`. A token whose role claim cannot be decoded is
    /// treated as a failed verification.
    pub fn apply_verify_result(
        &mut self,
        generation: u64,
        result: Result<String, Option<String>>,
    ) -> Option<VerifiedSession> {
        if generation != self.generation {
            return None;
        }
        self.in_flight = false;
        match result {
            Ok(token) => match decode_role(&token) {
                Ok(role) => Some(VerifiedSession {
                    token,
                    redirect_to: role.dashboard_path(),
                }),
                Err(_) => {
                    self.error =
                        Some("Sign-in failed: the server returned an unusable session.".to_string());
                    None
                }
            },
            Err(detail) => {
                self.error = Some(detail.unwrap_or_else(|| "Invalid or expired OTP.".to_string()));
                None
            }
        }
    }

    pub fn begin_resend(&mut self) -> Option<(u64, ResendOtpRequest)> {
        if !self.can_resend() {
            return None;
        }
        self.error = None;
        self.in_flight = true;
        Some((
            self.generation,
            ResendOtpRequest {
                email: self.email.trim().to_string(),
                login_as: self.login_as,
            },
        ))
    }

    pub fn apply_resend_result(&mut self, generation: u64, result: Result<(), Option<String>>) {
        if generation != self.generation {
            return;
        }
        self.in_flight = false;
        match result {
            Ok(()) => self.countdown = RESEND_COOLDOWN_SECS,
            Err(detail) => {
                self.error = Some(detail.unwrap_or_else(|| "Failed to resend OTP.".to_string()));
            }
        }
    }

    /// Abandons the OTP step. Bumping the generation invalidates any request
    /// still in flight, so a late verification success cannot navigate away.
    pub fn back_to_credentials(&mut self) {
        self.step = LoginStep::Credentials;
        self.otp.clear();
        self.error = None;
        self.in_flight = false;
        self.countdown = 0;
        self.generation += 1;
    }

    /// One-second countdown tick. Stops at zero, only runs on the OTP step.
    pub fn tick(&mut self) {
        if self.step == LoginStep::OtpPending && self.countdown > 0 {
            self.countdown -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginFlow, LoginStep, RESEND_COOLDOWN_SECS};
    use crate::features::auth::token::test_tokens;
    use crate::features::auth::types::Role;
    use crate::routes::paths;

    fn flow_with_credentials() -> LoginFlow {
        let mut flow = LoginFlow::new();
        flow.set_email("amina@campus.test".into());
        flow.set_password("hunter2hunter2".into());
        flow
    }

    fn flow_at_otp_step() -> LoginFlow {
        let mut flow = flow_with_credentials();
        let (generation, _) = flow.begin_credentials().unwrap();
        flow.apply_credentials_result(generation, Ok(()));
        flow
    }

    #[test]
    fn empty_credentials_are_refused_locally() {
        let mut flow = LoginFlow::new();
        flow.set_email("  ".into());
        assert!(flow.begin_credentials().is_none());
        assert_eq!(flow.error.as_deref(), Some("Email and password are required."));
        assert!(!flow.in_flight);
    }

    #[test]
    fn successful_credentials_enter_otp_step_with_full_countdown() {
        let mut flow = flow_with_credentials();
        let (generation, request) = flow.begin_credentials().unwrap();
        assert!(flow.in_flight);
        assert_eq!(request.email, "amina@campus.test");

        flow.apply_credentials_result(generation, Ok(()));
        assert_eq!(flow.step, LoginStep::OtpPending);
        assert_eq!(flow.countdown, RESEND_COOLDOWN_SECS);
        assert!(!flow.in_flight);
        assert!(flow.error.is_none());
    }

    #[test]
    fn credentials_failure_surfaces_backend_detail_or_generic() {
        let mut flow = flow_with_credentials();
        let (generation, _) = flow.begin_credentials().unwrap();
        flow.apply_credentials_result(generation, Err(Some("Account locked".into())));
        assert_eq!(flow.step, LoginStep::Credentials);
        assert_eq!(flow.error.as_deref(), Some("Account locked"));

        let (generation, _) = flow.begin_credentials().unwrap();
        flow.apply_credentials_result(generation, Err(None));
        assert_eq!(flow.error.as_deref(), Some("Invalid email or password."));
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut flow = flow_with_credentials();
        assert!(flow.begin_credentials().is_some());
        assert!(flow.begin_credentials().is_none());
    }

    #[test]
    fn otp_input_keeps_only_six_digits() {
        let mut flow = flow_at_otp_step();
        flow.set_otp("12a34-56 789");
        assert_eq!(flow.otp, "123456");
        assert!(flow.otp_ready());

        flow.set_otp("12 34");
        assert_eq!(flow.otp, "1234");
        assert!(!flow.otp_ready());
    }

    #[test]
    fn short_otp_is_refused_locally() {
        let mut flow = flow_at_otp_step();
        flow.set_otp("123");
        assert!(flow.begin_verify().is_none());
        assert!(!flow.in_flight);
        assert!(flow.error.is_some());
    }

    #[test]
    fn admin_role_claim_routes_to_admin_even_when_student_was_requested() {
        let mut flow = flow_at_otp_step();
        assert_eq!(flow.login_as, Role::Student);
        flow.set_otp("123456");

        let (generation, _) = flow.begin_verify().unwrap();
        let token = test_tokens::with_role("ADMIN");
        let session = flow
            .apply_verify_result(generation, Ok(token.clone()))
            .unwrap();
        assert_eq!(session.token, token);
        assert_eq!(session.redirect_to, paths::ADMIN_DASHBOARD);
    }

    #[test]
    fn undecodable_token_fails_the_verification() {
        let mut flow = flow_at_otp_step();
        flow.set_otp("123456");
        let (generation, _) = flow.begin_verify().unwrap();
        let outcome = flow.apply_verify_result(generation, Ok("not.a.token".into()));
        assert!(outcome.is_none());
        assert_eq!(flow.step, LoginStep::OtpPending);
        assert!(flow.error.is_some());
        assert!(!flow.in_flight);
    }

    #[test]
    fn verify_failure_keeps_otp_step_and_shows_detail() {
        let mut flow = flow_at_otp_step();
        flow.set_otp("000000");
        let (generation, _) = flow.begin_verify().unwrap();
        assert!(flow
            .apply_verify_result(generation, Err(Some("OTP expired".into())))
            .is_none());
        assert_eq!(flow.step, LoginStep::OtpPending);
        assert_eq!(flow.error.as_deref(), Some("OTP expired"));
    }

    #[test]
    fn resend_is_a_noop_until_countdown_reaches_zero() {
        let mut flow = flow_at_otp_step();
        assert!(!flow.can_resend());
        assert!(flow.begin_resend().is_none());

        for _ in 0..RESEND_COOLDOWN_SECS {
            flow.tick();
        }
        assert_eq!(flow.countdown, 0);
        flow.tick();
        assert_eq!(flow.countdown, 0);

        assert!(flow.can_resend());
        let (generation, _) = flow.begin_resend().unwrap();
        flow.apply_resend_result(generation, Ok(()));
        assert_eq!(flow.countdown, RESEND_COOLDOWN_SECS);
    }

    #[test]
    fn resend_failure_leaves_countdown_unchanged() {
        let mut flow = flow_at_otp_step();
        flow.countdown = 0;
        let (generation, _) = flow.begin_resend().unwrap();
        flow.apply_resend_result(generation, Err(None));
        assert_eq!(flow.countdown, 0);
        assert_eq!(flow.error.as_deref(), Some("Failed to resend OTP."));
    }

    #[test]
    fn countdown_only_ticks_on_the_otp_step() {
        let mut flow = flow_with_credentials();
        flow.countdown = 5;
        flow.tick();
        assert_eq!(flow.countdown, 5);
    }

    #[test]
    fn stale_verification_is_discarded_after_backing_out() {
        let mut flow = flow_at_otp_step();
        flow.set_otp("123456");
        let (generation, _) = flow.begin_verify().unwrap();

        flow.back_to_credentials();
        assert_eq!(flow.step, LoginStep::Credentials);
        assert!(flow.otp.is_empty());
        assert!(!flow.in_flight);

        let outcome = flow.apply_verify_result(generation, Ok(test_tokens::with_role("STUDENT")));
        assert!(outcome.is_none());
        assert_eq!(flow.step, LoginStep::Credentials);
        assert!(flow.error.is_none());
    }

    #[test]
    fn reentering_otp_step_restarts_the_countdown() {
        let mut flow = flow_at_otp_step();
        for _ in 0..10 {
            flow.tick();
        }
        flow.back_to_credentials();
        let (generation, _) = flow.begin_credentials().unwrap();
        flow.apply_credentials_result(generation, Ok(()));
        assert_eq!(flow.countdown, RESEND_COOLDOWN_SECS);
    }

    #[test]
    fn student_login_end_to_end() {
        let mut flow = flow_with_credentials();
        let (generation, _) = flow.begin_credentials().unwrap();
        flow.apply_credentials_result(generation, Ok(()));
        assert_eq!(flow.step, LoginStep::OtpPending);

        flow.set_otp("481516");
        let (generation, _) = flow.begin_verify().unwrap();
        let token = test_tokens::with_role("STUDENT");
        let session = flow
            .apply_verify_result(generation, Ok(token.clone()))
            .unwrap();
        assert_eq!(session.redirect_to, paths::STUDENT_DASHBOARD);
        assert_eq!(session.token, token);
    }
}
