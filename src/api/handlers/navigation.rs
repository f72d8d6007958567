use crate::gate::{project, CredentialState, NavEntry, NavItem};
use axum::{extract::Extension, Json};
use tracing::{debug, instrument};

#[utoipa::path(
    get,
    path= "/api/navigation",
    responses (
        (status = 200, description = "Menu entries visible to the caller, in display order", body = [NavEntry]),
    ),
    tag = "access",
)]
#[instrument(skip(credential))]
pub async fn navigation(Extension(credential): Extension<CredentialState>) -> Json<Vec<NavEntry>> {
    let role = credential.effective_role();
    let entries: Vec<NavEntry> = project(role).map(NavItem::entry).collect();

    debug!(role = ?role, entries = entries.len(), "navigation projected");

    Json(entries)
}
