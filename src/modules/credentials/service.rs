use anyhow::anyhow;
use tracing::instrument;

use playdeck_core::password::{CredentialHasher, PasswordError, generate_temporary_password};
use playdeck_core::AppError;

use crate::metrics::{track_password_hashed, track_password_verified};
use crate::modules::credentials::model::{
    HashPasswordDto, HashPasswordResponse, TemporaryPasswordDto, TemporaryPasswordResponse,
    VerifyPasswordDto, VerifyPasswordResponse,
};

pub struct CredentialService;

impl CredentialService {
    #[instrument(skip_all)]
    pub async fn hash_password(
        hasher: &CredentialHasher,
        dto: HashPasswordDto,
    ) -> Result<HashPasswordResponse, AppError> {
        let hash = hasher
            .hash(&dto.password)
            .await
            .map_err(rejected_input_is_client_error)?;
        track_password_hashed();

        Ok(HashPasswordResponse { hash })
    }

    #[instrument(skip_all)]
    pub async fn verify_password(
        hasher: &CredentialHasher,
        dto: VerifyPasswordDto,
    ) -> Result<VerifyPasswordResponse, AppError> {
        let valid = hasher
            .verify(&dto.password, &dto.hash)
            .await
            .map_err(rejected_input_is_client_error)?;
        let needs_rehash = hasher
            .needs_rehash(&dto.hash)
            .map_err(rejected_input_is_client_error)?;
        track_password_verified(valid);

        Ok(VerifyPasswordResponse {
            valid,
            needs_rehash,
        })
    }

    #[instrument(skip_all)]
    pub async fn issue_temporary_password(
        hasher: &CredentialHasher,
        dto: TemporaryPasswordDto,
    ) -> Result<TemporaryPasswordResponse, AppError> {
        let password = generate_temporary_password(dto.length());
        let hash = hasher.hash(&password).await?;
        track_password_hashed();

        Ok(TemporaryPasswordResponse { password, hash })
    }
}

fn rejected_input_is_client_error(err: PasswordError) -> AppError {
    match err {
        PasswordError::MalformedHash(_) => AppError::bad_request(anyhow!("{}", err)),
        PasswordError::PasswordTooLong(_) => AppError::unprocessable(anyhow!("{}", err)),
        other => AppError::internal(other),
    }
}
