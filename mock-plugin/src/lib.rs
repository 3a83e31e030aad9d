use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Manifest summary served by `/manifest`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub package: String,
    pub version_name: String,
    pub min_sdk: u32,
    pub activities: Vec<String>,
}

#[derive(Deserialize)]
pub struct ClassQuery {
    pub class_name: String,
}

#[derive(Clone, Debug)]
pub struct PluginState {
    pub manifest: Manifest,
    pub classes: BTreeMap<String, String>,
    pub auth_token: Option<String>,
}

impl Default for PluginState {
    fn default() -> Self {
        let mut classes = BTreeMap::new();
        classes.insert(
            "com.example.app.MainActivity".to_string(),
            "package com.example.app;\n\npublic class MainActivity extends Activity {\n}\n"
                .to_string(),
        );
        classes.insert(
            "com.example.app.Util".to_string(),
            "package com.example.app;\n\nfinal class Util {\n}\n".to_string(),
        );
        Self {
            manifest: Manifest {
                package: "com.example.app".to_string(),
                version_name: "1.0".to_string(),
                min_sdk: 24,
                activities: vec!["com.example.app.MainActivity".to_string()],
            },
            classes,
            auth_token: None,
        }
    }
}

pub type SharedState = Arc<PluginState>;

/// Router with the default fixture and no authentication.
pub fn app() -> Router {
    app_with_state(PluginState::default())
}

/// Router that rejects requests lacking `Authorization: Bearer <token>`.
pub fn app_with_token(token: &str) -> Router {
    app_with_state(PluginState {
        auth_token: Some(token.to_string()),
        ..PluginState::default()
    })
}

pub fn app_with_state(state: PluginState) -> Router {
    let state: SharedState = Arc::new(state);
    Router::new()
        .route("/health", get(health))
        .route("/manifest", get(manifest))
        .route("/classes", get(list_classes))
        .route("/class-source", get(class_source))
        .layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, PluginState::default()).await
}

pub async fn run_with_state(listener: TcpListener, state: PluginState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn require_token(State(state): State<SharedState>, request: Request, next: Next) -> Response {
    let Some(expected) = state.auth_token.as_deref() else {
        return next.run(request).await;
    };
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    if presented == Some(expected) {
        next.run(request).await
    } else {
        tracing::warn!(path = %request.uri().path(), "rejected request without valid token");
        (StatusCode::UNAUTHORIZED, "missing or invalid token").into_response()
    }
}

async fn health() -> &'static str {
    "JADX AI MCP plugin is running"
}

async fn manifest(State(state): State<SharedState>) -> Json<Manifest> {
    Json(state.manifest.clone())
}

async fn list_classes(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(state.classes.keys().cloned().collect())
}

async fn class_source(
    State(state): State<SharedState>,
    Query(query): Query<ClassQuery>,
) -> Result<String, (StatusCode, String)> {
    state.classes.get(&query.class_name).cloned().ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            format!("class not found: {}", query.class_name),
        )
    })
}
