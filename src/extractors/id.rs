//! Extract and validate the integer `{id}` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

pub const INVALID_ID: &str = "Invalid id";

/// Record id parsed from the path. Non-integer segments are rejected with 400 before any handler runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MobileId(pub i64);

impl std::str::FromStr for MobileId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(MobileId)
            .map_err(|_| AppError::BadRequest(INVALID_ID.into()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MobileId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_ID.into()))?;
        segment.parse()
    }
}
