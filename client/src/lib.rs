//! Client-side plumbing for the todoql service.
//!
//! What a UI needs to talk to the gateway: issue the five documented
//! operations over HTTP ([`GatewayClient`]) and keep a locally cached
//! mirror of the todo list that is updated optimistically after each
//! mutation response instead of re-querying ([`TodoCache`]).
//!
//! The cache update rules are explicit so client and server cannot silently
//! diverge; [`TodoCache::replace_all`] reconciles with a full refetch when
//! they do (for example after a failed request).

pub mod cache;
pub mod gateway;

pub use cache::TodoCache;
pub use gateway::{ClientError, GatewayClient};
