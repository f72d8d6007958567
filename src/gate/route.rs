//! Request-time route gate.
//!
//! Flow Overview:
//! 1. Bypass paths (landing page, login, API, internal assets, static files) pass untouched.
//! 2. Callers without a token are sent to login, carrying the original path as `from`.
//! 3. Every role rule whose prefix matches the path must admit the caller's role,
//!    otherwise the caller is sent to the dashboard home.
//!
//! `decide` is total: every input maps to a [`Decision`], nothing here fails.

use super::{credential::CredentialState, role::Role};
use std::fmt;
use url::form_urlencoded;

pub const LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";
pub const FROM_PARAM: &str = "from";

/// Prefixes that never go through authentication or authorization.
const BYPASS_PREFIXES: [&str; 4] = [LOGIN_PATH, "/api", "/_next", "/favicon"];

/// A path prefix and the roles allowed beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub path_prefix: &'static str,
    pub allowed_roles: &'static [Role],
}

impl RouteRule {
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(self.path_prefix)
    }

    #[must_use]
    pub fn admits(&self, role: Option<Role>) -> bool {
        role.is_some_and(|role| self.allowed_roles.contains(&role))
    }
}

/// Role-protected sections, in declaration order.
pub const ROUTE_RULES: [RouteRule; 3] = [
    RouteRule {
        path_prefix: "/users",
        allowed_roles: &[Role::SuperUser, Role::Admin],
    },
    RouteRule {
        path_prefix: "/tasks",
        allowed_roles: &[Role::SuperUser, Role::Admin],
    },
    RouteRule {
        path_prefix: "/settings",
        allowed_roles: &[Role::SuperUser],
    },
];

/// Where a rejected request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    pub from: Option<String>,
}

impl Redirect {
    /// Login redirect that remembers the requested path.
    #[must_use]
    pub fn login(from: &str) -> Self {
        Self {
            path: LOGIN_PATH,
            from: Some(from.to_string()),
        }
    }

    /// Generic fallback for forbidden sections; the original path is dropped.
    #[must_use]
    pub fn home() -> Self {
        Self {
            path: HOME_PATH,
            from: None,
        }
    }

    /// `Location` header value, with the carried path form-urlencoded.
    #[must_use]
    pub fn location(&self) -> String {
        match &self.from {
            Some(from) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(FROM_PARAM, from)
                    .finish();
                format!("{}?{query}", self.path)
            }
            None => self.path.to_string(),
        }
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from {
            Some(from) => write!(f, "{}?{FROM_PARAM}={from}", self.path),
            None => f.write_str(self.path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(Redirect),
}

impl Decision {
    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Public, infrastructure, and static-file paths.
///
/// Any `.` in the path is taken as a static file.
#[must_use]
pub fn is_bypassed(path: &str) -> bool {
    path == LANDING_PATH
        || BYPASS_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
        || path.contains('.')
}

/// Decide whether `path` may be served to the caller.
#[must_use]
pub fn decide(path: &str, credential: &CredentialState) -> Decision {
    if is_bypassed(path) {
        return Decision::Allow;
    }

    if !credential.has_token() && path != LOGIN_PATH {
        return Decision::RedirectTo(Redirect::login(path));
    }

    // Rules are conjunctive: every matching prefix must admit the role.
    let role = credential.effective_role();
    if ROUTE_RULES
        .iter()
        .filter(|rule| rule.matches(path))
        .any(|rule| !rule.admits(role))
    {
        return Decision::RedirectTo(Redirect::home());
    }

    Decision::Allow
}
