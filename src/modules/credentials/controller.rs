use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use playdeck_core::AppError;

use crate::modules::credentials::model::{
    HashPasswordDto, HashPasswordResponse, TemporaryPasswordDto, TemporaryPasswordResponse,
    VerifyPasswordDto, VerifyPasswordResponse,
};
use crate::modules::credentials::service::CredentialService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/credentials/hash",
    request_body = HashPasswordDto,
    responses(
        (status = 201, description = "Password hashed", body = HashPasswordResponse),
        (status = 400, description = "Malformed request body"),
        (status = 422, description = "Password failed validation")
    ),
    tag = "Credentials"
)]
#[instrument(skip_all)]
pub async fn hash_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<HashPasswordDto>,
) -> Result<(StatusCode, Json<HashPasswordResponse>), AppError> {
    let response = CredentialService::hash_password(&state.hasher, dto).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/credentials/verify",
    request_body = VerifyPasswordDto,
    responses(
        (status = 200, description = "Verification result", body = VerifyPasswordResponse),
        (status = 400, description = "Malformed request body or hash"),
        (status = 422, description = "Request failed validation")
    ),
    tag = "Credentials"
)]
#[instrument(skip_all)]
pub async fn verify_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<VerifyPasswordDto>,
) -> Result<Json<VerifyPasswordResponse>, AppError> {
    let response = CredentialService::verify_password(&state.hasher, dto).await?;

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/credentials/temporary",
    request_body = TemporaryPasswordDto,
    responses(
        (status = 201, description = "Temporary password issued", body = TemporaryPasswordResponse),
        (status = 422, description = "Length out of range")
    ),
    tag = "Credentials"
)]
#[instrument(skip_all)]
pub async fn issue_temporary_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TemporaryPasswordDto>,
) -> Result<(StatusCode, Json<TemporaryPasswordResponse>), AppError> {
    let response = CredentialService::issue_temporary_password(&state.hasher, dto).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
