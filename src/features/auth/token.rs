//! Structural decoding of the session token's role claim.
//!
//! The token is a JWT issued by the backend. The client only needs the claims
//! segment; it performs no signature verification and never checks expiry.
//! Anything decoded here is therefore a display hint, not an access-control
//! decision; the backend re-validates the token on every request.

use crate::features::auth::types::Role;
use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token format")]
    TokenFormat,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid claims json")]
    Json(#[from] serde_json::Error),
    #[error("unrecognized role claim: {0}")]
    UnknownRole(String),
}

#[derive(Debug, Deserialize)]
struct Claims {
    role: String,
}

/// Extracts the role claim from a session token.
///
/// Fails on any structural problem: wrong number of segments, bad base64url,
/// claims that are not JSON, a missing `role` field, or a role value outside
/// the known set. Callers treat every failure as "not authenticated".
pub fn decode_role(token: &str) -> Result<Role, TokenError> {
    let mut parts = token.split('.');
    let _header = parts.next().ok_or(TokenError::TokenFormat)?;
    let claims_b64 = parts.next().ok_or(TokenError::TokenFormat)?;
    let _signature = parts.next().ok_or(TokenError::TokenFormat)?;
    if parts.next().is_some() {
        return Err(TokenError::TokenFormat);
    }

    let bytes = Base64UrlUnpadded::decode_vec(claims_b64).map_err(|_| TokenError::Base64)?;
    let claims: Claims = serde_json::from_slice(&bytes)?;

    Role::parse(&claims.role).ok_or(TokenError::UnknownRole(claims.role))
}

#[cfg(test)]
pub(crate) mod test_tokens {
    use base64ct::{Base64UrlUnpadded, Encoding};

    /// Builds a structurally valid token with the given claims JSON. The
    /// signature segment is garbage, which is fine: the client never checks it.
    pub fn with_claims(claims_json: &str) -> String {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
        let claims = Base64UrlUnpadded::encode_string(claims_json.as_bytes());
        format!("{header}.{claims}.c2lnbmF0dXJl")
    }

    pub fn with_role(role: &str) -> String {
        with_claims(&format!(
            r#"{{"sub":"user-1","role":"{role}","exp":1700000600}}"#
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{TokenError, decode_role, test_tokens};
    use crate::features::auth::types::Role;

    #[test]
    fn decodes_known_roles() {
        assert_eq!(
            decode_role(&test_tokens::with_role("STUDENT")).unwrap(),
            Role::Student
        );
        assert_eq!(
            decode_role(&test_tokens::with_role("ADMIN")).unwrap(),
            Role::Admin
        );
    }

    #[test]
    fn rejects_wrong_segment_counts() {
        assert!(matches!(
            decode_role("just-one-segment"),
            Err(TokenError::TokenFormat)
        ));
        assert!(matches!(
            decode_role("a.b"),
            Err(TokenError::TokenFormat)
        ));
        assert!(matches!(
            decode_role("a.b.c.d"),
            Err(TokenError::TokenFormat)
        ));
    }

    #[test]
    fn rejects_bad_base64_and_bad_json() {
        assert!(matches!(
            decode_role("aGVhZGVy.!!!not-base64!!!.c2ln"),
            Err(TokenError::Base64)
        ));

        let token = test_tokens::with_claims("not json at all");
        assert!(matches!(decode_role(&token), Err(TokenError::Json(_))));

        let token = test_tokens::with_claims(r#"{"sub":"user-1"}"#);
        assert!(matches!(decode_role(&token), Err(TokenError::Json(_))));
    }

    #[test]
    fn unknown_role_fails_closed() {
        let token = test_tokens::with_role("SUPERUSER");
        match decode_role(&token) {
            Err(TokenError::UnknownRole(value)) => assert_eq!(value, "SUPERUSER"),
            other => panic!("expected UnknownRole, got {other:?}"),
        }
    }
}
