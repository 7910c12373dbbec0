use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use playdeck_core::{Pagination, PaginationParams};

use crate::modules::tags::model::{PopularTagsResponse, RecordTagsDto, RecordTagsResponse};
use crate::modules::tags::service::TagService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/tags",
    request_body = RecordTagsDto,
    responses(
        (status = 201, description = "Tag uses recorded", body = RecordTagsResponse),
        (status = 400, description = "Malformed request body"),
        (status = 422, description = "Tag list failed validation")
    ),
    tag = "Tags"
)]
#[instrument(skip(state))]
pub async fn record_tags(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RecordTagsDto>,
) -> (StatusCode, Json<RecordTagsResponse>) {
    let response = TagService::record_tags(&state.tags, dto).await;

    (StatusCode::CREATED, Json(response))
}

#[utoipa::path(
    get,
    path = "/api/tags/popular",
    params(PaginationParams),
    responses(
        (status = 200, description = "Tags ordered by number of uses", body = PopularTagsResponse),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "Tags"
)]
#[instrument(skip(state))]
pub async fn get_popular_tags(
    State(state): State<AppState>,
    pagination: Pagination,
) -> Json<PopularTagsResponse> {
    Json(TagService::get_popular_tags(&state.tags, pagination).await)
}
