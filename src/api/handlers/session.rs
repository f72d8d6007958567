use crate::gate::{CredentialState, Role};
use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

/// What the presentation layer needs to know about the caller.
#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl From<&CredentialState> for Session {
    fn from(credential: &CredentialState) -> Self {
        Self {
            authenticated: credential.has_token(),
            role: credential.effective_role(),
        }
    }
}

#[utoipa::path(
    get,
    path= "/api/session",
    responses (
        (status = 200, description = "Caller authentication state", body = Session),
    ),
    tag = "access",
)]
#[instrument(skip(credential))]
pub async fn session(Extension(credential): Extension<CredentialState>) -> Json<Session> {
    Json(Session::from(&credential))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn anonymous_session() {
        let Json(body) = session(Extension(CredentialState::anonymous())).await;
        assert_eq!(
            body,
            Session {
                authenticated: false,
                role: None,
            }
        );
    }

    #[tokio::test]
    async fn role_is_hidden_without_token() {
        let credential = CredentialState::new(None, Some(Role::Admin));
        let Json(body) = session(Extension(credential)).await;
        assert_eq!(body.role, None);
    }

    #[tokio::test]
    async fn signed_in_session() {
        let Json(body) = session(Extension(CredentialState::signed_in(Some(Role::Itra)))).await;
        assert!(body.authenticated);
        assert_eq!(body.role, Some(Role::Itra));
    }
}
