//! Pagination utilities for API responses.
//!
//! This module provides types and utilities for implementing pagination
//! in API endpoints. It supports both offset-based and page-based pagination.
//!
//! # Pagination Strategies
//!
//! ## Offset-based pagination
//!
//! Uses `limit` and `offset` parameters:
//! - `limit`: Maximum number of items to return (1-100, default: 10)
//! - `offset`: Number of items to skip from the beginning
//!
//! ## Page-based pagination
//!
//! Uses `limit` and `page` parameters:
//! - `limit`: Items per page (1-100, default: 10)
//! - `page`: Page number (1-indexed)
//!
//! When `page` is provided, it takes precedence over `offset`.
//!
//! # Example
//!
//! ```ignore
//! use playdeck_core::pagination::Pagination;
//!
//! // Installed by the pagination middleware, or parsed from the query
//! async fn list_tags(pagination: Pagination) -> Result<Json<Response>, AppError> {
//!     let tags = fetch_tags().await?;
//!     let total = tags.len() as i64;
//!     let page = tags[pagination.window(tags.len())].to_vec();
//!
//!     Ok(Json(Response { data: page, meta: pagination.meta(total) }))
//! }
//! ```

use std::ops::Range;

use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, Uri, request::Parts},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::AppError;
use crate::serde::deserialize_optional_i64;

/// Items per page when the request does not say.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound for `limit`.
pub const MAX_LIMIT: i64 = 100;

/// Metadata about a paginated response.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "data": [...],
///   "meta": {
///     "total": 100,
///     "limit": 10,
///     "offset": 20,
///     "page": 3,
///     "has_more": true
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// Total number of items across all pages
    pub total: i64,
    /// Maximum items per page (the limit that was applied)
    pub limit: i64,
    /// Number of items skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Current page number (only present if page-based pagination was used)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Whether there are more items after this page
    pub has_more: bool,
}

/// Query parameters for pagination.
///
/// # Limits
///
/// - `limit` is clamped to the range [1, 100]
/// - `offset` is clamped to a minimum of 0
/// - `page` is clamped to a minimum of 1
///
/// # Example
///
/// ```ignore
/// // GET /api/tags/popular?limit=20&page=3
/// let params = PaginationParams {
///     limit: Some(20),
///     offset: None,
///     page: Some(3),
/// };
///
/// assert_eq!(params.limit(), 20);
/// assert_eq!(params.offset(), 40); // (page - 1) * limit
/// ```
#[derive(Debug, Clone, Hash, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Maximum number of items to return (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0, ignored if `page` is set)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub offset: Option<i64>,
    /// Page number (1-indexed)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_LIMIT),
            offset: Some(0),
            page: None,
        }
    }
}

impl PaginationParams {
    /// Returns the effective limit, clamped to [1, 100].
    ///
    /// Defaults to 10 if not specified.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Returns the effective offset.
    ///
    /// If `page` is set, calculates the offset from the page number.
    /// Otherwise, returns the explicit offset or 0.
    #[must_use]
    pub fn offset(&self) -> i64 {
        match self.page() {
            Some(page) => (page - 1).saturating_mul(self.limit()),
            None => self.offset.unwrap_or(0).max(0),
        }
    }

    /// Returns the page number if provided, clamped to a minimum of 1.
    #[must_use]
    pub fn page(&self) -> Option<i64> {
        self.page.map(|p| p.max(1))
    }

    /// Resolves the raw parameters into a concrete window.
    #[must_use]
    pub fn resolve(&self) -> Pagination {
        Pagination {
            limit: self.limit(),
            offset: self.offset(),
            page: self.page(),
        }
    }
}

/// A resolved pagination window.
///
/// The pagination middleware stores one of these in the request extensions.
/// Handlers take it as an extractor; when the middleware is not installed the
/// extractor parses the query string itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
    pub page: Option<i64>,
}

impl Default for Pagination {
    fn default() -> Self {
        PaginationParams::default().resolve()
    }
}

impl Pagination {
    /// Parses pagination parameters from a request URI.
    ///
    /// # Errors
    ///
    /// Returns a `400 Bad Request` error if any parameter is not an integer.
    pub fn from_uri(uri: &Uri) -> Result<Self, AppError> {
        let Query(params) = Query::<PaginationParams>::try_from_uri(uri).map_err(|rejection| {
            AppError::new(
                StatusCode::BAD_REQUEST,
                anyhow::anyhow!("Invalid pagination parameters: {}", rejection.body_text()),
            )
        })?;

        Ok(params.resolve())
    }

    /// Builds response metadata for a collection of `total` items.
    #[must_use]
    pub fn meta(&self, total: i64) -> PaginationMeta {
        PaginationMeta {
            total,
            limit: self.limit,
            offset: Some(self.offset),
            page: self.page,
            has_more: self.offset.saturating_add(self.limit) < total,
        }
    }

    /// Index range of a slice of length `len` covered by this window.
    #[must_use]
    pub fn window(&self, len: usize) -> Range<usize> {
        let offset = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(0);

        let start = offset.min(len);
        let end = start.saturating_add(limit).min(len);
        start..end
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(pagination) = parts.extensions.get::<Pagination>() {
            return Ok(*pagination);
        }

        Pagination::from_uri(&parts.uri)
    }
}
