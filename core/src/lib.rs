//! # todoql-core
//!
//! The in-memory todo store behind the todoql GraphQL service.
//!
//! This crate owns the authoritative collection of [`Todo`] records and the
//! operations that read and mutate it. It knows nothing about GraphQL or
//! HTTP; the `todoql-web` crate translates schema fields into calls on
//! [`TodoStore`].
//!
//! # Design
//!
//! - The store is an explicitly owned object, constructed once at process
//!   start and shared by `Arc`. There is no global state, so tests can
//!   build isolated instances.
//! - All state lives behind a single `tokio::sync::RwLock`; each operation
//!   runs to completion under the guard, so every caller observes a
//!   consistent snapshot even when the store is served from a concurrent
//!   network server.
//! - Ids come from a monotonic counter that is incremented once per
//!   creation and never reused, so a delete can never cause a later
//!   creation to collide with a surviving record.

pub mod error;
pub mod store;
pub mod todo;

pub use error::TodoError;
pub use store::TodoStore;
pub use todo::Todo;
