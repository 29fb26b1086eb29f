//! Caller identity extraction for axum.
//!
//! Session handling lives in front of this service; by the time a request
//! arrives, the upstream layer has resolved the caller and forwarded their
//! id in the `x-user-id` header. `RequireUser` reads it and rejects requests
//! that carry none.
//!
//! # Example
//!
//! ```ignore
//! async fn my_handler(RequireUser(user_id): RequireUser) -> impl IntoResponse {
//!     format!("Hello, {}!", user_id)
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::UserId;

/// Header carrying the resolved caller id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor that requires a caller id.
#[derive(Debug, Clone)]
pub struct RequireUser(pub UserId);

impl<S> axum::extract::FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .headers
                .get(USER_ID_HEADER)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| UserId::new(s.trim()).ok())
                .map(RequireUser)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for identity failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No usable caller id was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
        };

        (
            status,
            Json(serde_json::json!({
                "code": "UNAUTHENTICATED",
                "message": message
            })),
        )
            .into_response()
    }
}
