//! Login screen context.
//!
//! The login form itself belongs to the presentation layer and credentials are
//! verified by the authentication service. This handler only decides whether the
//! screen is needed and hands back the destination carried in `from`.

use crate::gate::{route::HOME_PATH, CredentialState};
use axum::{
    extract::{Extension, Query},
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Deserialize, Debug, Default)]
pub struct LoginQuery {
    from: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct LoginContext {
    pub from: Option<String>,
}

/// Only local absolute paths may be carried back after login.
fn local_path(from: &str) -> bool {
    from.starts_with('/') && !from.starts_with("//") && !from.contains('\\')
}

#[instrument(skip(credential))]
pub async fn login(
    Extension(credential): Extension<CredentialState>,
    Query(query): Query<LoginQuery>,
) -> Response {
    if credential.has_token() {
        debug!("already signed in, sending to {HOME_PATH}");
        return Redirect::temporary(HOME_PATH).into_response();
    }

    let from = query.from.filter(|from| local_path(from));

    Json(LoginContext { from }).into_response()
}
