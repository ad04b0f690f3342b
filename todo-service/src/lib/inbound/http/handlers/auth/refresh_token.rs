use auth::AccessClaims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::Utc;

use super::TokenResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Issue a fresh token for an already-authenticated caller.
///
/// The presented token must still be valid (the authentication middleware
/// resolved it); the previous token is not invalidated and expires on its
/// own schedule.
pub async fn refresh_token(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let now = Utc::now();
    let claims = AccessClaims::for_subject(&auth_user.username, now);

    let access_token = state
        .authenticator
        .generate_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenResponseData::bearer(access_token),
    ))
}
