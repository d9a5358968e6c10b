//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::info;

use crate::planner::find_shortest_path;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stops/search", get(search_stops))
        .route("/api/routes/plan", get(plan_route))
        .route("/api/routes/contribute", post(contribute_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stops by id or display name.
async fn search_stops(
    State(state): State<AppState>,
    Query(req): Query<StopSearchRequest>,
) -> Json<StopSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);

    let network = state.network.read().await;
    let stops = network
        .resolver
        .search(&req.q, limit)
        .into_iter()
        .map(|m| StopSearchResult {
            id: m.id.as_str().to_string(),
            name: m.name,
        })
        .collect();

    Json(StopSearchResponse { stops })
}

/// Plan the cheapest route between two stops.
///
/// `from` and `to` may be canonical ids or display names; they are resolved
/// here before the engine sees them. "No route available" is a 404, not a
/// server error.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let network = state.network.read().await;

    let start = network
        .resolver
        .resolve(&req.from)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown stop: {}", req.from),
        })?;
    let end = network
        .resolver
        .resolve(&req.to)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown stop: {}", req.to),
        })?;

    // Cached outcomes stay valid until the next merge.
    let outcome = match state.cache.get(&start, &end).await {
        Some(cached) => cached.as_ref().clone(),
        None => {
            let computed = find_shortest_path(&network.graph, &start, &end, &state.config);
            state
                .cache
                .insert(start.clone(), end.clone(), computed.clone())
                .await;
            computed
        }
    };

    match outcome {
        Some(result) => Ok(Json(PlanResponse::from(&result))),
        None => Err(AppError::NotFound {
            message: format!("no route available from {} to {}", start, end),
        }),
    }
}

/// Merge contributed routes into the graph.
async fn contribute_routes(
    State(state): State<AppState>,
    Json(req): Json<ContributeRequest>,
) -> Result<Json<ContributeResponse>, AppError> {
    let routes = req.into_routes();

    let mut network = state.network.write().await;

    if network.graph.edge_count() >= state.config.max_graph_edges {
        return Err(AppError::BadRequest {
            message: "graph is at capacity; contribution refused".to_string(),
        });
    }

    network.graph.merge_routes(&routes);
    network.refresh_resolver();

    let stops = network.graph.stop_count();
    let edges = network.graph.edge_count();
    drop(network);

    // Any cached plan may have been undercut by a new edge.
    state.cache.invalidate_all();

    info!(merged = routes.len(), stops, edges, "contribution merged");

    Ok(Json(ContributeResponse {
        merged: routes.len(),
        stops,
        edges,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
