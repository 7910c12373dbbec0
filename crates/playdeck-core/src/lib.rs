//! # Playdeck Core
//!
//! Core types, errors, and utilities for the Playdeck API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`events`]: Game event names and the notification envelope
//! - [`pagination`]: Pagination parameters, metadata, and extractor
//! - [`password`]: Peppered bcrypt credential hashing
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use playdeck_core::{AppError, CredentialHasher, Pagination};
//!
//! let hasher = CredentialHasher::new(pepper, 12)?;
//! let stored = hasher.hash("secure_password").await?;
//!
//! let meta = Pagination::default().meta(total);
//! ```

pub mod errors;
pub mod events;
pub mod pagination;
pub mod password;
pub mod serde;

pub use errors::AppError;
pub use events::{GameEvent, GameNotification};
pub use pagination::{Pagination, PaginationMeta, PaginationParams};
pub use password::{CredentialHasher, PasswordError, generate_temporary_password};
