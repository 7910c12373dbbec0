//! Middleware for request processing.
//!
//! - [`pagination`]: Resolves pagination query parameters before the handler runs
//!
//! Request validation lives in [`crate::validator`] as extractors rather than
//! layers, because it needs the handler's DTO type.

pub mod pagination;

pub use pagination::pagination_middleware;
