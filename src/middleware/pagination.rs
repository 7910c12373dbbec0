//! Pagination middleware.
//!
//! Parses `limit`, `offset`, and `page` from the query string once, stores the
//! resolved [`Pagination`] in the request extensions, and hands the request on.
//! Handlers behind it take [`Pagination`] as an extractor.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

use playdeck_core::{AppError, Pagination};

/// Resolves pagination parameters for every request passing through.
///
/// Requests with non-integer parameters are answered with `400 Bad Request`
/// and never reach the handler.
///
/// ```ignore
/// Router::new()
///     .route("/popular", get(get_popular_tags))
///     .route_layer(axum::middleware::from_fn(pagination_middleware));
/// ```
pub async fn pagination_middleware(mut req: Request, next: Next) -> Result<Response, AppError> {
    let pagination = Pagination::from_uri(req.uri())?;

    debug!(
        limit = pagination.limit,
        offset = pagination.offset,
        page = ?pagination.page,
        "Resolved pagination"
    );

    req.extensions_mut().insert(pagination);

    Ok(next.run(req).await)
}
