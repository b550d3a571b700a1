//! Custom Axum extractors
//!
//! Both reject with `ApiError` so malformed requests get the same JSON error
//! body as everything else instead of axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use grapevine_core::{PostId, PostInput, PostPayload};

use super::error::ApiError;

/// Extract and parse a post id from the path
pub struct PostIdParam(pub PostId);

impl<S> FromRequestParts<S> for PostIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId { raw: String::new() })?;

        let id = raw
            .trim()
            .parse::<PostId>()
            .map_err(|_| ApiError::InvalidId { raw })?;

        Ok(Self(id))
    }
}

/// Extract a post body (flat or `{"post": {...}}`)
pub struct PostBody(pub PostInput);

impl<S> FromRequest<S> for PostBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<PostPayload>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody {
                reason: rejection.body_text(),
            })?;

        Ok(Self(payload.into()))
    }
}
