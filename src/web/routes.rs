use std::net::SocketAddr;

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    response::Html,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::scoring::{RiskScorer, ScoreError};

use super::form::PredictForm;
use super::pages::{self, ResultView};

/// Shared router state; cloning only bumps the classifier `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub scorer: RiskScorer,
}

/// Build the application router.
pub fn router(scorer: RiskScorer) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/analysis", get(analysis))
        .route("/education", get(education))
        .route("/predict", post(predict))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { scorer })
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, scorer: RiskScorer) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(scorer))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn dashboard() -> Html<String> {
    Html(pages::dashboard())
}

async fn analysis() -> Html<String> {
    Html(pages::analysis(None))
}

async fn education() -> Html<String> {
    Html(pages::education())
}

async fn health() -> &'static str {
    "ok"
}

/// Every submission renders the analysis page; body decoding failures
/// become an ERROR verdict instead of the extractor's plain-text rejection.
async fn predict(
    State(state): State<AppState>,
    form: Result<Form<PredictForm>, FormRejection>,
) -> Html<String> {
    let patient = match form {
        Ok(Form(form)) => form.into_patient(),
        Err(rejection) => Err(ScoreError::MalformedForm(rejection.body_text())),
    };
    let name = patient
        .as_ref()
        .ok()
        .and_then(|input| input.name.clone());
    let verdict = state.scorer.score_or_error_verdict(patient);
    Html(pages::analysis(Some(&ResultView {
        patient_name: name.as_deref(),
        verdict: &verdict,
    })))
}
