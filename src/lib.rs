//! # Dashgate (Dashboard Access Gate)
//!
//! `dashgate` sits in front of the administrative dashboard and decides, on
//! every navigation, whether a page may be served. It also tells the
//! presentation layer which navigation entries the caller may see.
//!
//! ## Credential Model
//!
//! The authentication service sets two cookies after login: an opaque token
//! (`access_token`) and a role label (`user_role`). Dashgate never verifies
//! or issues either; token presence means "signed in" and the role label is
//! used for authorization only while a token is present.
//!
//! ## Route Gate
//!
//! 1. **Bypass:** `/`, `/login`, `/api`, internal assets and anything with a `.`
//!    in its path pass untouched.
//! 2. **Authentication:** callers without a token are redirected to
//!    `/login?from=<path>`.
//! 3. **Authorization:** `/users` and `/tasks` need `SuperUser` or `Admin`,
//!    `/settings` needs `SuperUser`. Every matching rule must pass; a failure
//!    redirects to `/dashboard` without remembering the original path.
//!
//! ## Navigation
//!
//! The side menu is a static, ordered table. Each role sees the entries that
//! list it, in table order; a caller without a role sees none.
//!
//! ## Fault Boundary
//!
//! Page contexts are produced inside a two-state boundary
//! (`Healthy` / `Faulted`). A fault is logged, suppressed, and replaced by a
//! fallback view whose single action resets the boundary.

pub mod api;
pub mod cli;
pub mod gate;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
