use std::convert::Infallible;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream, wrappers::errors::BroadcastStreamRecvError};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use playdeck_core::GameNotification;

use crate::modules::games::model::{EventCatalogEntry, NotificationFilter, PublishGameEventDto};
use crate::modules::games::service::GameService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/api/games/events",
    responses(
        (status = 200, description = "Every game event name clients can subscribe to", body = [EventCatalogEntry])
    ),
    tag = "Games"
)]
pub async fn get_event_catalog() -> Json<Vec<EventCatalogEntry>> {
    Json(GameService::event_catalog())
}

#[utoipa::path(
    post,
    path = "/api/games/{game_id}/events",
    params(("game_id" = Uuid, Path, description = "Game the event belongs to")),
    request_body = PublishGameEventDto,
    responses(
        (status = 202, description = "Notification published", body = GameNotification),
        (status = 400, description = "Unknown event name or malformed body"),
        (status = 422, description = "Payload is not a JSON object")
    ),
    tag = "Games"
)]
#[instrument(skip(state))]
pub async fn publish_game_event(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<PublishGameEventDto>,
) -> (StatusCode, Json<GameNotification>) {
    let notification = GameService::publish_event(&state.notifications, game_id, dto);

    (StatusCode::ACCEPTED, Json(notification))
}

#[utoipa::path(
    get,
    path = "/api/games/notifications",
    params(NotificationFilter),
    responses(
        (status = 200, description = "Server-Sent Events stream; each event is named after its game event", body = String, content_type = "text/event-stream")
    ),
    tag = "Games"
)]
#[instrument(skip(state))]
pub async fn subscribe_notifications(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<NotificationFilter>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!(
        subscribers = state.notifications.subscriber_count() + 1,
        "Notification subscriber connected"
    );

    let stream = BroadcastStream::new(state.notifications.subscribe()).filter_map(move |message| {
        match message {
            Ok(notification) if filter.matches(&notification) => {
                to_sse_event(&notification).map(Ok)
            }
            Ok(_) => None,
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                warn!(skipped, "Notification subscriber lagged; notifications dropped");
                None
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn to_sse_event(notification: &GameNotification) -> Option<Event> {
    match Event::default()
        .event(notification.event.as_str())
        .id(notification.id.to_string())
        .json_data(notification)
    {
        Ok(event) => Some(event),
        Err(e) => {
            warn!(error = %e, "Failed to encode game notification");
            None
        }
    }
}
