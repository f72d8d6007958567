//! End-to-end checks of the assembled router.
//!
//! Requests go through the full layer stack (request id, trace, gate) with
//! `tower::ServiceExt::oneshot`, so no socket is bound.

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{
        header::{COOKIE, LOCATION},
        Method, Request, StatusCode,
    },
    response::Response,
    Router,
};
use dashgate::{api, gate::CredentialCookies};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    api::app(CredentialCookies::default())
}

async fn send(method: Method, path: &str, cookie: Option<&str>) -> Result<Response> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    Ok(app().oneshot(builder.body(Body::empty())?).await?)
}

async fn get(path: &str, cookie: Option<&str>) -> Result<Response> {
    send(Method::GET, path, cookie).await
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

async fn json(response: Response) -> Result<Value> {
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&body)?)
}

#[tokio::test]
async fn anonymous_dashboard_redirects_to_login() -> Result<()> {
    let response = get("/dashboard", None).await?;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/login?from=%2Fdashboard"));
    Ok(())
}

#[tokio::test]
async fn user_on_tasks_redirects_home() -> Result<()> {
    let response = get("/tasks", Some("access_token=t; user_role=User")).await?;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/dashboard"));
    Ok(())
}

#[tokio::test]
async fn admin_reaches_users_page() -> Result<()> {
    let response = get("/users", Some("access_token=t; user_role=Admin")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json(response).await?;
    assert_eq!(body["path"], "/users");
    assert_eq!(body["role"], "Admin");
    assert_eq!(body["authenticated"], true);
    let active: Vec<_> = body["navigation"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter(|entry| entry["active"] == true)
                .map(|entry| entry["label"].clone())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(active, [Value::from("Users")]);
    Ok(())
}

#[tokio::test]
async fn settings_is_superuser_only() -> Result<()> {
    let admin = get("/settings", Some("access_token=t; user_role=Admin")).await?;
    assert_eq!(location(&admin), Some("/dashboard"));

    let superuser = get("/settings", Some("access_token=t; user_role=SuperUser")).await?;
    assert_eq!(superuser.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn unknown_role_is_treated_as_no_role() -> Result<()> {
    let response = get("/users", Some("access_token=t; user_role=Root")).await?;
    assert_eq!(location(&response), Some("/dashboard"));

    let response = get("/reports", Some("access_token=t; user_role=Root")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await?;
    assert_eq!(body["role"], Value::Null);
    assert_eq!(body["navigation"], Value::Array(Vec::new()));
    Ok(())
}

#[tokio::test]
async fn bypass_paths_skip_the_gate() -> Result<()> {
    for path in ["/", "/api/health", "/favicon.ico", "/_next/static/app.js", "/users/avatar.png"] {
        let response = get(path, None).await?;
        assert_ne!(
            response.status(),
            StatusCode::TEMPORARY_REDIRECT,
            "{path} should not redirect"
        );
    }
    Ok(())
}

#[tokio::test]
async fn health_answers_get_and_options() -> Result<()> {
    let response = get("/api/health", None).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("X-App"));
    assert_eq!(json(response).await?["name"], env!("CARGO_PKG_NAME"));

    let response = send(Method::OPTIONS, "/api/health", None).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("X-App"));
    Ok(())
}

#[tokio::test]
async fn navigation_follows_role() -> Result<()> {
    let anonymous = json(get("/api/navigation", None).await?).await?;
    assert_eq!(anonymous, Value::Array(Vec::new()));

    let guest = json(get("/api/navigation", Some("access_token=t; user_role=Guest")).await?).await?;
    let labels: Vec<_> = guest
        .as_array()
        .map(|entries| entries.iter().map(|entry| entry["label"].clone()).collect())
        .unwrap_or_default();
    assert_eq!(labels, ["Dashboard", "Shortcuts", "Profile", "Help"].map(Value::from));

    let superuser =
        json(get("/api/navigation", Some("access_token=t; user_role=SuperUser")).await?).await?;
    assert_eq!(superuser.as_array().map(Vec::len), Some(13));
    Ok(())
}

#[tokio::test]
async fn session_reports_effective_role() -> Result<()> {
    let body = json(get("/api/session", Some("user_role=Admin")).await?).await?;
    assert_eq!(body["authenticated"], false);
    assert_eq!(body["role"], Value::Null);

    let body = json(get("/api/session", Some("access_token=t; user_role=ITRA")).await?).await?;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["role"], "ITRA");
    Ok(())
}

#[tokio::test]
async fn login_screen_and_signed_in_bounce() -> Result<()> {
    let response = get("/login?from=%2Freports", None).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json(response).await?["from"], "/reports");

    let response = get("/login", Some("access_token=t; user_role=Guest")).await?;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/dashboard"));
    Ok(())
}

#[tokio::test]
async fn request_id_is_generated_and_propagated() -> Result<()> {
    let response = get("/api/health", None).await?;
    let generated = response
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    assert!(generated.is_some_and(|id| id.len() == 26));

    let request = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "fixed-id")
        .body(Body::empty())?;
    let response = app().oneshot(request).await?;
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok()),
        Some("fixed-id")
    );
    Ok(())
}

#[tokio::test]
async fn custom_cookie_names() -> Result<()> {
    let app = api::app(CredentialCookies {
        token: "sid".to_string(),
        role: "r".to_string(),
    });
    let request = Request::builder()
        .uri("/tasks")
        .header(COOKIE, "sid=1; r=SuperUser")
        .body(Body::empty())?;
    let response = app.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}
