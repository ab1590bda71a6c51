use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json,
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    engine::{IndexStats, SearchEngine},
    error::{Error, Result},
    output::SearchReport,
    query::{self, QueryOutcome},
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DocParams {
    pub id: usize,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

fn bad_query(rejection: &QueryRejection) -> Response {
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

/// Routes: `/` (stats), `/search?q=&limit=`, `/doc?id=`.
pub fn router(engine: Arc<SearchEngine>) -> Router {
    Router::new()
        .route("/", get(handle_stats))
        .route("/search", get(handle_search))
        .route("/doc", get(handle_doc))
        .with_state(engine)
}

/// Listen on `addr` until the process is stopped.
pub async fn serve(engine: Arc<SearchEngine>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(engine)).await?;
    Ok(())
}

async fn handle_stats(
    State(engine): State<Arc<SearchEngine>>,
) -> Json<IndexStats> {
    Json(engine.stats())
}

async fn handle_search(
    State(engine): State<Arc<SearchEngine>>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_query(&rejection),
    };

    let outcome = match query::execute(&engine, &params.q) {
        Ok(QueryOutcome::EmptyQuery) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "no query provided",
            );
        }
        Ok(outcome) => outcome,
        Err(Error::Pattern(e)) => {
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "search failed");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                e.to_string(),
            );
        }
    };

    let report = SearchReport::new(&params.q, &outcome, params.limit);
    tracing::debug!(hits = report.total_count, "served search");
    Json(report).into_response()
}

async fn handle_doc(
    State(engine): State<Arc<SearchEngine>>,
    params: std::result::Result<Query<DocParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_query(&rejection),
    };

    match engine.document(params.id) {
        Some(doc) => Json(doc).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            Error::NotFound {
                kind: "document",
                name: params.id.to_string(),
            }
            .to_string(),
        ),
    }
}
