//! Event names for the game feature.
//!
//! Clients subscribe to these names on the notification stream, so the wire
//! strings are part of the public API and must not change.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const GAME_CREATED: &str = "game:created";
pub const GAME_PLAYER_JOINED: &str = "game:player_joined";
pub const GAME_PLAYER_LEFT: &str = "game:player_left";
pub const GAME_STARTED: &str = "game:started";
pub const GAME_MOVE_MADE: &str = "game:move_made";
pub const GAME_TURN_CHANGED: &str = "game:turn_changed";
pub const GAME_FINISHED: &str = "game:finished";
pub const GAME_CANCELLED: &str = "game:cancelled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum GameEvent {
    #[serde(rename = "game:created")]
    Created,
    #[serde(rename = "game:player_joined")]
    PlayerJoined,
    #[serde(rename = "game:player_left")]
    PlayerLeft,
    #[serde(rename = "game:started")]
    Started,
    #[serde(rename = "game:move_made")]
    MoveMade,
    #[serde(rename = "game:turn_changed")]
    TurnChanged,
    #[serde(rename = "game:finished")]
    Finished,
    #[serde(rename = "game:cancelled")]
    Cancelled,
}

impl GameEvent {
    pub const ALL: [GameEvent; 8] = [
        GameEvent::Created,
        GameEvent::PlayerJoined,
        GameEvent::PlayerLeft,
        GameEvent::Started,
        GameEvent::MoveMade,
        GameEvent::TurnChanged,
        GameEvent::Finished,
        GameEvent::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameEvent::Created => GAME_CREATED,
            GameEvent::PlayerJoined => GAME_PLAYER_JOINED,
            GameEvent::PlayerLeft => GAME_PLAYER_LEFT,
            GameEvent::Started => GAME_STARTED,
            GameEvent::MoveMade => GAME_MOVE_MADE,
            GameEvent::TurnChanged => GAME_TURN_CHANGED,
            GameEvent::Finished => GAME_FINISHED,
            GameEvent::Cancelled => GAME_CANCELLED,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            GameEvent::Created => "A new game was created",
            GameEvent::PlayerJoined => "A player joined the game lobby",
            GameEvent::PlayerLeft => "A player left the game",
            GameEvent::Started => "The game started",
            GameEvent::MoveMade => "A player made a move",
            GameEvent::TurnChanged => "The active player changed",
            GameEvent::Finished => "The game ended with a result",
            GameEvent::Cancelled => "The game was cancelled before finishing",
        }
    }

    /// Whether no further events follow for the same game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameEvent::Finished | GameEvent::Cancelled)
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game event `{0}`")]
pub struct UnknownGameEvent(pub String);

impl FromStr for GameEvent {
    type Err = UnknownGameEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownGameEvent(s.to_string()))
    }
}

/// Envelope delivered to notification subscribers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameNotification {
    pub id: Uuid,
    pub event: GameEvent,
    pub game_id: Uuid,
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
}

impl GameNotification {
    #[must_use]
    pub fn new(event: GameEvent, game_id: Uuid, payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            event,
            game_id,
            payload,
            occurred_at: Utc::now(),
        }
    }
}
