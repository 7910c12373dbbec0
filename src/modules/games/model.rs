use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use playdeck_core::{GameEvent, GameNotification};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventCatalogEntry {
    pub name: String,
    pub description: String,
    pub terminal: bool,
}

impl From<GameEvent> for EventCatalogEntry {
    fn from(event: GameEvent) -> Self {
        Self {
            name: event.as_str().to_string(),
            description: event.description().to_string(),
            terminal: event.is_terminal(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PublishGameEventDto {
    pub event: GameEvent,
    /// Event-specific data. Must be a JSON object when present.
    #[serde(default)]
    #[validate(custom(function = "validate_payload"))]
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotificationFilter {
    /// Only stream notifications for this game
    pub game_id: Option<Uuid>,
}

impl NotificationFilter {
    pub fn matches(&self, notification: &GameNotification) -> bool {
        self.game_id
            .is_none_or(|game_id| game_id == notification.game_id)
    }
}

fn validate_payload(payload: &serde_json::Value) -> Result<(), ValidationError> {
    if payload.is_object() || payload.is_null() {
        return Ok(());
    }

    Err(ValidationError::new("payload_type")
        .with_message(Cow::from("payload must be a JSON object")))
}
