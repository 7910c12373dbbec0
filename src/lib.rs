//! # Playdeck API
//!
//! Web support utilities for the Playdeck game platform, built with Axum.
//!
//! ## Overview
//!
//! - **Credentials**: peppered bcrypt hashing, verification with rehash
//!   detection, and temporary password issuance
//! - **Pagination**: middleware that resolves `limit`/`offset`/`page` once
//!   per request
//! - **Validation**: `ValidatedJson` and `ValidatedQuery` extractors over
//!   `validator` DTOs
//! - **Tags**: tag usage recording and the popular tags listing
//! - **Games**: game event names and a Server-Sent Events notification stream
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Credential tooling used by playdeck-cli
//! ├── middleware/       # Pagination middleware
//! ├── modules/          # Feature modules
//! │   ├── credentials/ # Hashing as a service for login flows
//! │   ├── games/       # Event catalog, publish, notification stream
//! │   └── tags/        # Popular tags
//! └── validator.rs      # Validating extractors
//! crates/
//! ├── playdeck-core/    # Errors, pagination, password hashing, event names
//! └── playdeck-config/  # Environment configuration
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! APP_ENV=development
//! PASSWORD_PEPPER=change-me
//! PASSWORD_HASH_COST=12
//! cargo run --bin playdeck
//! ```
//!
//! In production (`APP_ENV=production`) the server refuses to start without
//! `PASSWORD_PEPPER`.
//!
//! ## Modules
//!
//! - [`cli`]: Command-line credential tooling
//! - [`docs`]: OpenAPI document
//! - [`logging`]: Request logging and subscriber setup
//! - [`metrics`]: Prometheus metrics
//! - [`middleware`]: Pagination middleware
//! - [`modules`]: Feature modules
//! - [`router`]: Main application router
//! - [`state`]: Shared application state
//! - [`validator`]: Request validation extractors

pub mod cli;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use playdeck_config;
pub use playdeck_core;
