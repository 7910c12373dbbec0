use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::pagination_middleware;
use crate::state::AppState;

use super::controller::{get_popular_tags, record_tags};

pub fn init_tags_router() -> Router<AppState> {
    Router::new().route("/", post(record_tags)).route(
        "/popular",
        get(get_popular_tags).route_layer(middleware::from_fn(pagination_middleware)),
    )
}
