use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use playdeck_core::PaginationMeta;

pub const MAX_TAGS_PER_REQUEST: usize = 20;
pub const MAX_TAG_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TagCount {
    pub name: String,
    pub uses: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordTagsDto {
    #[validate(
        length(min = 1, max = 20, message = "tags must contain between 1 and 20 entries"),
        custom(function = "validate_tag_names")
    )]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordTagsResponse {
    pub recorded: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PopularTagsResponse {
    pub data: Vec<TagCount>,
    pub meta: PaginationMeta,
}

/// Canonical form of a tag name: trimmed and lowercased.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn validate_tag_names(tags: &[String]) -> Result<(), ValidationError> {
    for tag in tags {
        let tag = tag.trim();

        if tag.is_empty() || tag.chars().count() > MAX_TAG_LENGTH {
            return Err(ValidationError::new("tag_length").with_message(Cow::from(format!(
                "each tag must be between 1 and {} characters",
                MAX_TAG_LENGTH
            ))));
        }

        if !tag
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::new("tag_charset").with_message(Cow::from(format!(
                "tag `{}` may only contain letters, digits, '-' and '_'",
                tag
            ))));
        }
    }

    Ok(())
}
