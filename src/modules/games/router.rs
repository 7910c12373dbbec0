use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_event_catalog, publish_game_event, subscribe_notifications};

pub fn init_games_router() -> Router<AppState> {
    Router::new()
        .route("/events", get(get_event_catalog))
        .route("/notifications", get(subscribe_notifications))
        .route("/{game_id}/events", post(publish_game_event))
}
