use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::client::Client;
use crate::config::AppConfig;
use crate::retriever::ChatListRetriever;
use crate::types::ChatList;
use crate::ui::PresentationShell;

/// Build the shell router around an injected retriever.
pub fn router(retriever: Arc<dyn ChatListRetriever>, title: impl Into<String>) -> Router {
    let state = AppState {
        shell: PresentationShell::new(Arc::clone(&retriever), title),
        retriever,
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/chats", get(api_chats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the shell server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let client = Client::from_config(&config.backend)?;

    info!(
        name: "backend.config.loaded",
        endpoint = %client.endpoint(),
        timeout_secs = ?config.backend.timeout_secs,
        "Backend configuration loaded"
    );

    let app = router(Arc::new(client), config.shell.title.clone());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %format!("http://{addr}"),
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Mount the shell and render it.
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(state.shell.mount().await.render())
}

/// GET /api/chats - One retrieval, passed through as JSON.
async fn api_chats(
    State(state): State<AppState>,
) -> Result<Json<ChatList>, (StatusCode, Json<serde_json::Value>)> {
    state.retriever.fetch_chat_list().await.map(Json).map_err(|e| {
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": e.to_string() })),
        )
    })
}
