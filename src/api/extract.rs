use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body binding where an empty body yields `T::default()`.
///
/// A non-empty body must be declared as JSON and decode into `T`.
#[derive(Debug)]
pub struct BindJson<T>(pub T);

impl<S, T> FromRequest<S> for BindJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if bytes.is_empty() {
            return Ok(BindJson(T::default()));
        }
        if !is_json {
            return Err(AppError::BadRequest(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        let Json(value) =
            Json::<T>::from_bytes(&bytes).map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(BindJson(value))
    }
}
