use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::adapters::gemini::GeminiClient;
use crate::core::engine::VocabEngine;
use crate::utils::error::Result;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Vocabulary Generator</title>
  <style>
    body { font-family: sans-serif; max-width: 42rem; margin: 3rem auto; padding: 0 1rem; }
    #output { margin-top: 1.5rem; line-height: 1.5; }
    button { font-size: 1rem; padding: 0.5rem 1.25rem; cursor: pointer; }
  </style>
</head>
<body>
  <h1>Vocabulary Generator</h1>
  <p>Click the button to generate 5 random advanced vocabulary words with definitions and example sentences.</p>
  <button id="generate">Generate</button>
  <div id="output"></div>
  <script>
    const button = document.getElementById('generate');
    const output = document.getElementById('output');
    button.addEventListener('click', async () => {
      button.disabled = true;
      output.innerHTML = 'Generating…';
      try {
        const res = await fetch('/api/generate', { method: 'POST' });
        output.innerHTML = await res.text();
      } catch (e) {
        output.innerHTML = 'Request failed: ' + e;
      } finally {
        button.disabled = false;
      }
    });
  </script>
</body>
</html>
"#;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<VocabEngine<GeminiClient>>,
}

impl AppState {
    pub fn new(engine: Arc<VocabEngine<GeminiClient>>) -> Self {
        Self { engine }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/generate", post(generate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "service": "lexigen", "status": "ok" }))
}

/// The single UI action: runs the whole pipeline synchronously and replaces
/// the output region. Always 200; failures are the body text.
async fn generate(State(state): State<AppState>) -> Html<String> {
    Html(state.engine.run().await)
}

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
