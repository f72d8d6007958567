//! Access-control core: credential state, route gate, menu projection and the
//! fault boundary. Everything here is synchronous and free of I/O; the HTTP
//! layer in [`crate::api`] only feeds it request data.

pub mod boundary;
pub mod credential;
pub mod menu;
pub mod role;
pub mod route;

pub use self::boundary::{FallbackView, FaultBoundary, RenderFault, Rendered};
pub use self::credential::{CredentialCookies, CredentialState};
pub use self::menu::{project, NavEntry, NavItem};
pub use self::role::Role;
pub use self::route::{decide, Decision, Redirect};
