//! Role gate for dashboard routes and the root landing redirect.
//!
//! This gate is a UX convenience only. The role comes out of an unverified
//! token, so a tampered token can pass it; every sensitive operation is
//! re-authorized by the backend.

use crate::features::auth::token::decode_role;
use crate::features::auth::types::Role;
use crate::routes::paths;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny { redirect_to: &'static str },
}

/// Strict equality gate: the stored token must decode to exactly the required
/// role. Absent, undecodable, or mismatched tokens all redirect to login, not
/// to the user's own dashboard.
pub fn authorize(token: Option<&str>, required: Role) -> Access {
    let denied = Access::Deny {
        redirect_to: paths::LOGIN,
    };
    match token {
        Some(token) => match decode_role(token) {
            Ok(role) if role == required => Access::Allow,
            _ => denied,
        },
        None => denied,
    }
}

/// Where the root path should land: the role's dashboard when a usable token
/// is stored, the login page otherwise.
pub fn landing_route(token: Option<&str>) -> &'static str {
    match token.map(decode_role) {
        Some(Ok(role)) => role.dashboard_path(),
        _ => paths::LOGIN,
    }
}

/// Decision for an OAuth completion redirect carrying an optional token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// No token arrived; go back to login without touching the store.
    MissingToken,
    /// Token decoded; persist it and land on the role's dashboard.
    Established {
        token: String,
        redirect_to: &'static str,
    },
    /// Token arrived but is unusable; any stored token must be cleared.
    Invalid,
}

pub fn complete_oauth(token: Option<String>) -> Completion {
    match token {
        None => Completion::MissingToken,
        Some(token) => match decode_role(&token) {
            Ok(role) => Completion::Established {
                redirect_to: role.dashboard_path(),
                token,
            },
            Err(_) => Completion::Invalid,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{Access, authorize, landing_route};
    use crate::features::auth::token::test_tokens;
    use crate::features::auth::types::Role;
    use crate::routes::paths;

    const DENY_TO_LOGIN: Access = Access::Deny {
        redirect_to: paths::LOGIN,
    };

    #[test]
    fn no_token_is_denied() {
        assert_eq!(authorize(None, Role::Admin), DENY_TO_LOGIN);
        assert_eq!(authorize(None, Role::Student), DENY_TO_LOGIN);
    }

    #[test]
    fn role_mismatch_is_denied_to_login_not_own_dashboard() {
        let student = test_tokens::with_role("STUDENT");
        assert_eq!(authorize(Some(&student), Role::Admin), DENY_TO_LOGIN);
    }

    #[test]
    fn matching_role_is_allowed() {
        let admin = test_tokens::with_role("ADMIN");
        assert_eq!(authorize(Some(&admin), Role::Admin), Access::Allow);
        let student = test_tokens::with_role("STUDENT");
        assert_eq!(authorize(Some(&student), Role::Student), Access::Allow);
    }

    #[test]
    fn malformed_and_unknown_role_tokens_are_denied() {
        assert_eq!(authorize(Some("garbage"), Role::Student), DENY_TO_LOGIN);
        let unknown = test_tokens::with_role("SUPERUSER");
        assert_eq!(authorize(Some(&unknown), Role::Admin), DENY_TO_LOGIN);
    }

    #[test]
    fn oauth_completion_without_token_never_establishes_a_session() {
        assert_eq!(super::complete_oauth(None), super::Completion::MissingToken);
    }

    #[test]
    fn oauth_completion_routes_by_the_decoded_role() {
        let token = test_tokens::with_role("ADMIN");
        assert_eq!(
            super::complete_oauth(Some(token.clone())),
            super::Completion::Established {
                token,
                redirect_to: paths::ADMIN_DASHBOARD,
            }
        );
    }

    #[test]
    fn oauth_completion_rejects_an_undecodable_token() {
        assert_eq!(
            super::complete_oauth(Some("not.a.token".to_string())),
            super::Completion::Invalid
        );
    }

    #[test]
    fn landing_route_follows_the_decoded_role() {
        assert_eq!(landing_route(None), paths::LOGIN);
        assert_eq!(landing_route(Some("garbage")), paths::LOGIN);
        let admin = test_tokens::with_role("ADMIN");
        assert_eq!(landing_route(Some(&admin)), paths::ADMIN_DASHBOARD);
        let student = test_tokens::with_role("STUDENT");
        assert_eq!(landing_route(Some(&student)), paths::STUDENT_DASHBOARD);
    }
}
