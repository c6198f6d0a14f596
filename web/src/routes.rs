//! Router configuration for the todo gateway.

use crate::state::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the axum router.
///
/// - `POST /graphql` — the single query/mutation endpoint
/// - `GET /graphql` — GraphiQL explorer
/// - `GET /health` — liveness probe
///
/// CORS is permissive because the UI is a browser app served from another
/// origin.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Executes a GraphQL request against the schema.
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphiQL explorer page.
#[allow(clippy::unused_async)]
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Simple liveness probe. Does not check dependencies; the store is
/// process-local memory and cannot be "down" while the process is up.
#[allow(clippy::unused_async)]
async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
