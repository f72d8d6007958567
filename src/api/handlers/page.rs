//! Page context for every gated page.
//!
//! The gate has already admitted the request when this runs. The context is
//! built inside a [`FaultBoundary`], so a render fault answers with the
//! fallback view instead of tearing down the connection.

use crate::gate::{project, CredentialState, FallbackView, FaultBoundary, NavEntry, Rendered, Role};
use axum::{
    extract::Extension,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PageNavEntry {
    #[serde(flatten)]
    pub entry: NavEntry,
    pub active: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub path: String,
    pub authenticated: bool,
    pub role: Option<Role>,
    pub navigation: Vec<PageNavEntry>,
}

impl PageContext {
    #[must_use]
    pub fn new(path: &str, credential: &CredentialState) -> Self {
        let role = credential.effective_role();
        let navigation = project(role)
            .map(|item| PageNavEntry {
                entry: item.entry(),
                active: item.target == path,
            })
            .collect();

        Self {
            path: path.to_string(),
            authenticated: credential.has_token(),
            role,
            navigation,
        }
    }
}

/// Answer a boundary result: content as `200`, fallback as `500`.
pub(crate) fn respond(rendered: Rendered<Value>) -> Response {
    match rendered {
        Rendered::Content(body) => (StatusCode::OK, Json(body)).into_response(),
        Rendered::Fallback(view) => fallback(view),
    }
}

fn fallback(view: FallbackView) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(view)).into_response()
}

#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn page(Extension(credential): Extension<CredentialState>, uri: Uri) -> Response {
    let mut boundary: FaultBoundary = FaultBoundary::default();

    let rendered = boundary.render(|| {
        let context = PageContext::new(uri.path(), &credential);
        Ok(serde_json::to_value(context)?)
    });

    respond(rendered)
}
