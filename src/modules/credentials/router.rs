use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{hash_password, issue_temporary_password, verify_password};

pub fn init_credentials_router() -> Router<AppState> {
    Router::new()
        .route("/hash", post(hash_password))
        .route("/verify", post(verify_password))
        .route("/temporary", post(issue_temporary_password))
}
