//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body decoded whatever the `Content-Type` says.
///
/// Browsers posting `JSON.stringify(..)` without a header send
/// `text/plain`; only the bytes decide. Failures use the API error shape
/// instead of axum's plain-text rejections.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| malformed(rejection.body_text()))?;

        let Json(value) =
            Json::<T>::from_bytes(&bytes).map_err(|rejection| malformed(rejection.body_text()))?;

        Ok(Self(value))
    }
}

fn malformed(reason: String) -> ApiError {
    ApiError::Validation(ValidationError::MalformedBody { reason })
}
