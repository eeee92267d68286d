//! fstop-api - HTTP API server for the fstop query interpreter.
//!
//! Thin transport glue around [`fstop_parse::QueryParser`]: it feeds raw
//! user text into the core and forwards the encoded filter payload toward
//! the downstream photo search service.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fstop_core::defaults;
use fstop_ner::SidecarRecognizer;
use fstop_parse::QueryParser;

/// Shared per-process state: the parser (with its injected recognizer)
/// and the downstream search service address.
#[derive(Clone)]
struct AppState {
    parser: QueryParser,
    search_host: String,
    search_port: String,
}

impl AppState {
    fn search_url(&self, encoded_query: &str) -> String {
        format!(
            "http://{}:{}/search?query={}",
            self.search_host, self.search_port, encoded_query
        )
    }
}

#[derive(Deserialize)]
struct ParseRequest {
    #[serde(default)]
    query: String,
}

#[derive(Serialize)]
struct ParseResponse {
    query: String,
}

/// Interpret raw user text and return the percent-encoded filter payload.
async fn parse_query(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, (axum::http::StatusCode, String)> {
    let parsed = state
        .parser
        .parse(&req.query)
        .await
        .map_err(|e| (axum::http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    info!(
        query = %req.query,
        search_url = %state.search_url(&parsed.encoded),
        "query parsed"
    );

    Ok(Json(ParseResponse {
        query: parsed.encoded,
    }))
}

/// Quick health check endpoint.
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Minimal search form posting to `/parse`.
async fn search_form() -> Html<&'static str> {
    const PAGE: &str = r#"<html>
  <head>
    <title>fstop Smart Search</title>
  </head>
  <body>
    <h1>fstop Smart Search</h1>
    <form id="searchForm" onsubmit="event.preventDefault(); submitQuery(); return false;">
      <input type="text" id="query" name="query" placeholder="Enter your search query" size="80"/>
      <button type="button" onclick="submitQuery()">Search</button>
    </form>
    <p id="resultLink"></p>
    <script>
      async function submitQuery() {
        const query = document.getElementById('query').value;
        const response = await fetch('/parse', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ query: query })
        });
        const data = await response.json();
        const url = new URL(window.location.origin + '/searchRedirect');
        url.searchParams.append('query', data.query);
        document.getElementById('resultLink').innerHTML =
          '<a href="' + url.toString() + '">Click here to view results</a>';
      }
    </script>
  </body>
</html>"#;
    Html(PAGE)
}

#[derive(Deserialize)]
struct RedirectParams {
    query: String,
}

/// Meta-refresh redirect to the downstream search service with the encoded
/// filter payload embedded.
async fn search_redirect(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RedirectParams>,
) -> Html<String> {
    let url = state.search_url(&params.query);
    Html(format!(
        r#"<html>
  <head>
    <meta http-equiv="refresh" content="0; url={url}" />
  </head>
  <body>
    <p>Redirecting to <a href="{url}">{url}</a></p>
  </body>
</html>"#
    ))
}

fn init_tracing() {
    // LOG_FORMAT - "json" for structured output, anything else for text
    // RUST_LOG   - standard env filter (default: "fstop_api=debug,tower_http=debug")
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fstop_api=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    // The service must not accept requests without its recognition model
    // reachable: startup is the only fatal failure point.
    let recognizer = SidecarRecognizer::from_env()
        .ok_or_else(|| anyhow::anyhow!("{} is set to empty; refusing to start without a recognizer", defaults::ENV_NER_BASE_URL))?;
    let parser = QueryParser::new(Arc::new(recognizer));

    if !parser.health_check().await? {
        anyhow::bail!("NER sidecar failed its startup health check");
    }
    info!("NER sidecar healthy");

    let state = Arc::new(AppState {
        parser,
        search_host: std::env::var(defaults::ENV_SEARCH_HOST)
            .unwrap_or_else(|_| defaults::SEARCH_HOST.to_string()),
        search_port: std::env::var(defaults::ENV_SEARCH_PORT)
            .unwrap_or_else(|_| defaults::SEARCH_PORT.to_string()),
    });

    let app = Router::new()
        .route("/", get(search_form))
        .route("/health", get(health_check))
        .route("/parse", post(parse_query))
        .route("/searchRedirect", get(search_redirect))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_addr =
        std::env::var(defaults::ENV_BIND_ADDR).unwrap_or_else(|_| defaults::BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(%bind_addr, "fstop-api listening");

    axum::serve(listener, app).await?;
    Ok(())
}
