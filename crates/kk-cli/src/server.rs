//! HTTP front door: `GET /kai` and `GET /health`.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use kk_core::{ClockState, HarmonicClock, ParseError, Seals};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Clock state plus its seals, as served and as printed by `kk now --json`.
#[derive(Debug, Serialize)]
pub struct KaiReport {
    #[serde(flatten)]
    pub state: ClockState,
    pub seals: Seals,
}

impl KaiReport {
    pub fn new(state: ClockState) -> Self {
        let seals = Seals::from_state(&state);
        Self { state, seals }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct KaiParams {
    pub override_time: Option<String>,
}

struct ApiError(ParseError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.0.to_string() });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub fn router(clock: Arc<HarmonicClock>) -> Router {
    Router::new()
        .route("/kai", get(kai))
        .route("/health", get(health))
        .with_state(clock)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn kai(
    State(clock): State<Arc<HarmonicClock>>,
    Query(params): Query<KaiParams>,
) -> std::result::Result<Json<KaiReport>, ApiError> {
    let state = clock
        .compute_at(params.override_time.as_deref())
        .map_err(|e| {
            tracing::debug!("rejected override_time: {e}");
            ApiError(e)
        })?;
    Ok(Json(KaiReport::new(state)))
}

async fn health() -> impl IntoResponse {
    "ok"
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    clock: HarmonicClock,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    axum::serve(listener, router(Arc::new(clock)))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

/// Bind, announce the address on stdout, and serve until Ctrl-C or SIGTERM.
pub async fn run(clock: HarmonicClock, bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let addr = listener.local_addr().context("failed to read bound address")?;
    // Signal handlers must exist before the banner goes out.
    let signals = ShutdownSignals::install()?;
    println!("listening on http://{addr}");
    tracing::info!("kk server listening on http://{addr}");

    serve(listener, clock, signals.recv()).await?;
    tracing::info!("kk server stopped");
    Ok(())
}

/// Registered Ctrl-C and SIGTERM handlers. Signals delivered after
/// `install` are queued until `recv` is awaited.
pub struct ShutdownSignals {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
    #[cfg(windows)]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl ShutdownSignals {
    #[cfg(unix)]
    pub fn install() -> Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};
        Ok(Self {
            interrupt: signal(SignalKind::interrupt()).context("failed to listen for SIGINT")?,
            terminate: signal(SignalKind::terminate()).context("failed to listen for SIGTERM")?,
        })
    }

    #[cfg(windows)]
    pub fn install() -> Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c().context("failed to listen for Ctrl-C")?,
        })
    }

    #[cfg(unix)]
    pub async fn recv(mut self) {
        tokio::select! {
            _ = self.interrupt.recv() => tracing::info!("received Ctrl-C, shutting down"),
            _ = self.terminate.recv() => tracing::info!("received SIGTERM, shutting down"),
        }
    }

    #[cfg(windows)]
    pub async fn recv(mut self) {
        self.ctrl_c.recv().await;
        tracing::info!("received Ctrl-C, shutting down");
    }
}
