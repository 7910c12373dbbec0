use tracing::{debug, instrument};
use uuid::Uuid;

use playdeck_core::{GameEvent, GameNotification};

use crate::metrics::track_game_event_published;
use crate::modules::games::hub::NotificationHub;
use crate::modules::games::model::{EventCatalogEntry, PublishGameEventDto};

pub struct GameService;

impl GameService {
    pub fn event_catalog() -> Vec<EventCatalogEntry> {
        GameEvent::ALL.into_iter().map(EventCatalogEntry::from).collect()
    }

    #[instrument(skip(hub))]
    pub fn publish_event(
        hub: &NotificationHub,
        game_id: Uuid,
        dto: PublishGameEventDto,
    ) -> GameNotification {
        let payload = if dto.payload.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            dto.payload
        };

        let notification = GameNotification::new(dto.event, game_id, payload);
        let delivered = hub.publish(notification.clone());
        track_game_event_published(dto.event);

        debug!(
            event = %dto.event,
            %game_id,
            delivered,
            "Published game notification"
        );

        notification
    }
}
