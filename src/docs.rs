use axum::Json;
use utoipa::OpenApi;

use playdeck_core::{GameEvent, GameNotification, PaginationMeta, PaginationParams};

use crate::modules::credentials::model::{
    HashPasswordDto, HashPasswordResponse, TemporaryPasswordDto, TemporaryPasswordResponse,
    VerifyPasswordDto, VerifyPasswordResponse,
};
use crate::modules::games::model::{EventCatalogEntry, PublishGameEventDto};
use crate::modules::tags::model::{
    PopularTagsResponse, RecordTagsDto, RecordTagsResponse, TagCount,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::credentials::controller::hash_password,
        crate::modules::credentials::controller::verify_password,
        crate::modules::credentials::controller::issue_temporary_password,
        crate::modules::games::controller::get_event_catalog,
        crate::modules::games::controller::publish_game_event,
        crate::modules::games::controller::subscribe_notifications,
        crate::modules::tags::controller::record_tags,
        crate::modules::tags::controller::get_popular_tags,
    ),
    components(
        schemas(
            HashPasswordDto,
            HashPasswordResponse,
            VerifyPasswordDto,
            VerifyPasswordResponse,
            TemporaryPasswordDto,
            TemporaryPasswordResponse,
            GameEvent,
            GameNotification,
            EventCatalogEntry,
            PublishGameEventDto,
            TagCount,
            RecordTagsDto,
            RecordTagsResponse,
            PopularTagsResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    tags(
        (name = "Credentials", description = "Password hashing and temporary password issuance"),
        (name = "Games", description = "Game event names and the notification stream"),
        (name = "Tags", description = "Tag usage and popular tags")
    ),
    info(
        title = "Playdeck API",
        description = "Web support utilities for the Playdeck game platform"
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
