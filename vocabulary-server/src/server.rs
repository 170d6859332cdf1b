use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use dictionary::{Dictionary, DictionaryError, Suggestion, Word};
use serde::Serialize;
use tracing::Instrument;

use crate::config::ServerConfig;

#[derive(Clone)]
struct AppState {
    dict: Dictionary,
}

/// Raw query pairs, so a repeated `word` is not a deserialization error.
type QueryPairs = Query<Vec<(String, String)>>;

/// The first `word` value, if any.
fn word_param(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "word")
        .map(|(_, value)| value)
}

/// `/` answers like `/get`.
pub fn router(dict: Dictionary) -> Router {
    let state = AppState { dict };
    Router::new()
        .route("/", get(get_definition))
        .route("/get", get(get_definition))
        .route("/fetch", get(fetch_suggestions))
        .with_state(state)
}

pub async fn serve(config: &ServerConfig, dict: Dictionary) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, base_url = %config.base_url, "listening");

    axum::serve(listener, router(dict))
        .await
        .context("server stopped unexpectedly")
}

async fn get_definition(State(state): State<AppState>, Query(pairs): QueryPairs) -> Response {
    let Some(word) = word_param(pairs) else {
        return StatusCode::OK.into_response();
    };
    let span = tracing::info_span!("definition", %word);
    async move {
        let result = state.dict.get_definition(&word).await;
        respond(result, Word::default)
    }
    .instrument(span)
    .await
}

async fn fetch_suggestions(State(state): State<AppState>, Query(pairs): QueryPairs) -> Response {
    let Some(word) = word_param(pairs) else {
        return StatusCode::OK.into_response();
    };
    let span = tracing::info_span!("suggestions", %word);
    async move {
        let result = state.dict.get_suggestions(&word).await;
        respond(result, Vec::<Suggestion>::new)
    }
    .instrument(span)
    .await
}

/// Fetch failures answer with the empty record, anything else is a 500.
fn respond<T: Serialize>(
    result: Result<T, DictionaryError>,
    empty: impl FnOnce() -> T,
) -> Response {
    match result {
        Ok(value) => json_response(&value),
        Err(error) if error.is_fetch() => {
            tracing::warn!(%error, "page unavailable, answering with empty record");
            json_response(&empty())
        }
        Err(error) => {
            tracing::error!(%error, "failed to extract page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn json_response<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
