//! Gate middleware: runs the route gate before any handler.
//!
//! Allowed requests carry the parsed [`CredentialState`] in their extensions so
//! handlers never re-read cookies.

use crate::gate::{decide, CredentialCookies, CredentialState, Decision};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::{debug, trace};

pub async fn gate(
    State(cookies): State<Arc<CredentialCookies>>,
    mut request: Request,
    next: Next,
) -> Response {
    let credential = CredentialState::from_headers(request.headers(), &cookies);

    match decide(request.uri().path(), &credential) {
        Decision::Allow => {
            trace!(path = request.uri().path(), "gate allow");
            request.extensions_mut().insert(credential);
            next.run(request).await
        }
        Decision::RedirectTo(target) => {
            debug!(
                path = request.uri().path(),
                target = %target,
                role = ?credential.effective_role(),
                "gate redirect"
            );
            Redirect::temporary(&target.location()).into_response()
        }
    }
}
