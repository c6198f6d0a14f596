//! GraphQL gateway and HTTP server for the todoql service.
//!
//! This crate is the query gateway in front of [`todoql_core::TodoStore`]:
//! it defines the GraphQL schema (two read fields, three mutating fields,
//! each mapping 1:1 onto a store operation), the axum router that serves it,
//! and the server configuration. It performs no business logic of its own —
//! request parsing, id coercion, and result serialization only.
//!
//! # Request flow
//!
//! 1. **HTTP request** arrives at the `/graphql` endpoint
//! 2. **Parse** the query/mutation document against the schema
//! 3. **Resolve** each field by calling the shared `TodoStore`
//! 4. **Serialize** the resulting records (or error) back to the caller
//!
//! The gateway holds no cross-request state; all state lives in the store.

pub mod config;
pub mod error;
pub mod routes;
pub mod schema;
pub mod state;

pub use config::Config;
pub use error::GatewayError;
pub use routes::build_router;
pub use schema::{build_schema, TodoSchema};
pub use state::AppState;
