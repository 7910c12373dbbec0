//! Feature modules.
//!
//! Each module follows the same layout:
//!
//! - `model.rs`: DTOs and response types
//! - `service.rs`: Business logic
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: Axum router for the feature
//!
//! # Modules
//!
//! - [`credentials`]: Password hashing, verification, and temporary passwords
//! - [`games`]: Game event catalog and the notification stream
//! - [`tags`]: Tag usage recording and the popular tags listing

pub mod credentials;
pub mod games;
pub mod tags;
