//! HTTP routes.

use std::path::Path;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use cubepuzzle::CubeState;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::services::ServeDir;

use crate::SessionStore;

/// Error returned to clients for a bad request.
///
/// Every variant is reported as `400 Bad Request` with an empty body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request is missing a field or is not valid JSON
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("{self}");
        StatusCode::BAD_REQUEST.into_response()
    }
}

/// Query string of `/getstate`.
#[derive(Deserialize, Debug)]
pub struct GetStateQuery {
    /// User whose cube to return.
    pub user: Option<String>,
}

/// Body of `/maketurn`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MakeTurnRequest {
    /// User whose cube to turn.
    pub user: String,
    /// Move token, such as `R'`.
    #[serde(rename = "move")]
    pub mv: String,
}

/// Whether a move was applied.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TurnStatus {
    /// Move was applied.
    Ok,
    /// Move was rejected and the cube is unchanged.
    Error,
}

/// Response of `/maketurn`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MakeTurnResponse {
    /// State of the cube after the move.
    #[serde(flatten)]
    pub state: CubeState,
    /// Whether the move was applied.
    pub status: TurnStatus,
}

/// Builds the application router.
///
/// Any path other than the API routes is served from `static_dir`.
pub fn router(sessions: SessionStore, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/getstate", get(get_state))
        .route("/maketurn", post(make_turn))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(sessions)
}

fn require_user(user: Option<String>) -> Result<String, ApiError> {
    user.filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::MalformedRequest("missing user".to_owned()))
}

async fn get_state(
    State(sessions): State<SessionStore>,
    query: Result<Query<GetStateQuery>, QueryRejection>,
) -> Result<Json<CubeState>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;
    let user = require_user(query.user)?;

    let cube = sessions.cube(&user);
    let state = cube.lock().state();
    Ok(Json(state))
}

async fn make_turn(
    State(sessions): State<SessionStore>,
    body: Bytes,
) -> Result<Json<MakeTurnResponse>, ApiError> {
    let request: MakeTurnRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::MalformedRequest(e.to_string()))?;
    let user = require_user(Some(request.user))?;

    let cube = sessions.cube(&user);
    let mut cube = cube.lock();
    let status = if cube.rotate(&request.mv) {
        TurnStatus::Ok
    } else {
        TurnStatus::Error
    };
    log::debug!("user {user:?} turned {:?}: {status:?}", request.mv);
    Ok(Json(MakeTurnResponse {
        state: cube.state(),
        status,
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use cubepuzzle::Cube;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn app(sessions: &SessionStore) -> Router {
        router(sessions.clone(), "static-dir-that-does-not-exist")
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_request(body: impl Into<Body>) -> Request<Body> {
        Request::post("/maketurn")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_state() {
        let sessions = SessionStore::new(Cube::new(3).unwrap());
        let response = app(&sessions)
            .oneshot(get_request("/getstate?user=alice"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let state: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(state["pieces"].as_array().map(Vec::len), Some(27));
        assert_eq!(
            state["pieces"][0],
            json!({"position": [0.0, 0.0, 0.0], "orientation": [0.0, 0.0, 0.0, 1.0]}),
        );
        assert_eq!(sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_get_state_without_user() {
        let sessions = SessionStore::new(Cube::new(3).unwrap());
        for uri in ["/getstate", "/getstate?user="] {
            let (status, body) = send(app(&sessions), get_request(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body.is_empty());
        }
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn test_make_turn() {
        let sessions = SessionStore::new(Cube::new(3).unwrap());

        let request = json!({"user": "alice", "move": "R"}).to_string();
        let (status, body) = send(app(&sessions), post_request(request)).await;
        assert_eq!(status, StatusCode::OK);
        let response: MakeTurnResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.status, TurnStatus::Ok);

        let mut expected = Cube::new(3).unwrap();
        expected.rotate("R");
        assert_eq!(response.state, expected.state());
        assert_eq!(*sessions.cube("alice").lock(), expected);

        let request = json!({"user": "alice", "move": "R3"}).to_string();
        let (status, body) = send(app(&sessions), post_request(request)).await;
        assert_eq!(status, StatusCode::OK);
        let response: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response["status"], "error");
        assert_eq!(*sessions.cube("alice").lock(), expected);
    }

    #[tokio::test]
    async fn test_make_turn_creates_cube() {
        let sessions = SessionStore::new(Cube::new(2).unwrap());
        let request = json!({"user": "bob", "move": "M"}).to_string();
        let (status, body) = send(app(&sessions), post_request(request)).await;
        assert_eq!(status, StatusCode::OK);
        let response: MakeTurnResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.status, TurnStatus::Error);
        assert_eq!(response.state.pieces.len(), 8);
        assert_eq!(sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_make_turn_malformed() {
        let sessions = SessionStore::new(Cube::new(3).unwrap());
        for body in [
            "not json",
            r#"{"user": "alice"}"#,
            r#"{"move": "R"}"#,
            r#"{"user": "", "move": "R"}"#,
        ] {
            let (status, body) = send(app(&sessions), post_request(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body.is_empty());
        }
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn test_static_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>cube</h1>").unwrap();
        let sessions = SessionStore::new(Cube::new(3).unwrap());

        let app = router(sessions, dir.path());
        let (status, body) = send(app.clone(), get_request("/index.html")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"<h1>cube</h1>");

        let (status, _) = send(app, get_request("/missing.js")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
