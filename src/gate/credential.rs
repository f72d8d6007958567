//! Caller credential state as seen by the gate.
//!
//! Flow Overview: the authentication service sets two cookies after login, an
//! opaque token and a role label. The gate only reads them: token presence
//! decides authentication and the role label decides authorization.
//!
//! Security boundaries: the token value is never inspected or logged, only its
//! presence matters here. Verification belongs to the authentication service.

use super::role::Role;
use axum::http::{header::COOKIE, HeaderMap};
use secrecy::SecretString;

pub const DEFAULT_TOKEN_COOKIE: &str = "access_token";
pub const DEFAULT_ROLE_COOKIE: &str = "user_role";

/// Names of the cookies carrying the credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialCookies {
    pub token: String,
    pub role: String,
}

impl Default for CredentialCookies {
    fn default() -> Self {
        Self {
            token: DEFAULT_TOKEN_COOKIE.to_string(),
            role: DEFAULT_ROLE_COOKIE.to_string(),
        }
    }
}

/// Token presence plus role label, both optional.
#[derive(Clone, Debug, Default)]
pub struct CredentialState {
    token: Option<SecretString>,
    role: Option<Role>,
}

impl CredentialState {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(token: Option<SecretString>, role: Option<Role>) -> Self {
        Self { token, role }
    }

    /// Shorthand for a signed-in caller holding `role`.
    #[must_use]
    pub fn signed_in(role: Option<Role>) -> Self {
        Self {
            token: Some(SecretString::from("opaque")),
            role,
        }
    }

    /// Read both cookies from the request headers.
    ///
    /// A token cookie counts as present even when empty. An unrecognized role
    /// label becomes `None`.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap, cookies: &CredentialCookies) -> Self {
        let token = cookie_value(headers, &cookies.token).map(SecretString::from);
        let role = cookie_value(headers, &cookies.role)
            .as_deref()
            .and_then(Role::from_label);

        Self { token, role }
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// The role label as stored, regardless of token presence.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// The role that counts for authorization: only set when a token is present.
    #[must_use]
    pub fn effective_role(&self) -> Option<Role> {
        self.token.as_ref().and(self.role)
    }
}

/// Find a cookie value by name across all `Cookie` headers.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let mut parts = pair.trim().splitn(2, '=');
            let key = parts.next()?.trim();
            let val = parts.next()?.trim();
            (key == name).then(|| val.to_string())
        })
}
