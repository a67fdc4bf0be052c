//! Request payloads for auth API calls and the role claim shared across the
//! flow, the guard, and routing. Payloads carry credentials and OTP codes, so
//! they must never be logged.

use crate::routes::paths;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role claim carried by the session token and requested at login.
///
/// The wire format is the backend's uppercase spelling. The dashboard a user
/// lands on is always derived from the token's decoded role, never from the
/// role requested at login time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "STUDENT")]
    Student,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl Role {
    /// Parses the backend's uppercase role spelling. Anything else is
    /// unrecognized and callers fail closed.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "STUDENT" => Some(Role::Student),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Admin => "ADMIN",
        }
    }

    /// Dashboard path for this role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Student => paths::STUDENT_DASHBOARD,
            Role::Admin => paths::ADMIN_DASHBOARD,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "loginAs")]
    pub login_as: Role,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
    #[serde(rename = "loginAs")]
    pub login_as: Role,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
    #[serde(rename = "loginAs")]
    pub login_as: Role,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
}
