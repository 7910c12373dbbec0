use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use playdeck_core::password::{DEFAULT_TEMPORARY_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH};

/// Character cap for submitted passwords. Multi-byte input can still exceed
/// the hasher's byte limit, which the service reports as 422.
const MAX_PASSWORD_CHARS: u64 = MAX_PASSWORD_LENGTH as u64;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct HashPasswordDto {
    #[validate(length(
        min = 1,
        max = MAX_PASSWORD_CHARS,
        message = "password must be between 1 and 39 characters"
    ))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HashPasswordResponse {
    pub hash: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VerifyPasswordDto {
    #[validate(length(
        min = 1,
        max = MAX_PASSWORD_CHARS,
        message = "password must be between 1 and 39 characters"
    ))]
    pub password: String,
    #[validate(length(min = 1, message = "hash is required"))]
    pub hash: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyPasswordResponse {
    pub valid: bool,
    /// The hash was produced with a lower cost than the current one and
    /// should be replaced after a successful login.
    pub needs_rehash: bool,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct TemporaryPasswordDto {
    #[validate(range(
        min = 1,
        max = MAX_PASSWORD_LENGTH,
        message = "length must be between 1 and 39"
    ))]
    pub length: Option<usize>,
}

impl TemporaryPasswordDto {
    pub fn length(&self) -> usize {
        self.length.unwrap_or(DEFAULT_TEMPORARY_PASSWORD_LENGTH)
    }
}

/// A freshly issued one-time password.
///
/// `password` is shown to the user once; only `hash` should be stored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TemporaryPasswordResponse {
    pub password: String,
    pub hash: String,
}
