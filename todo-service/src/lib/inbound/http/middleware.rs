use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::Utc;

use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiErrorBody;
use crate::inbound::http::router::AppState;

/// Extension type storing the resolved principal in request extensions.
///
/// Lives for exactly one request; never persisted.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Identity-resolution middleware applied to every protected route.
///
/// Turns the bearer token into an [`AuthenticatedUser`] or rejects the
/// request. Every failure mode - missing or malformed header, bad
/// structure, bad signature, expiry, missing subject, unknown user -
/// produces the identical response, so a caller cannot probe which check
/// failed or whether a username exists.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).ok_or_else(credentials_rejection)?;

    // One clock read covers every comparison in this resolution
    let now = Utc::now();

    let claims = state.authenticator.validate_token(token, now).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        credentials_rejection()
    })?;

    let subject = claims.subject().ok_or_else(|| {
        tracing::warn!("Token carries no subject");
        credentials_rejection()
    })?;

    let username = Username::new(subject.to_string()).map_err(|_| credentials_rejection())?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|_| credentials_rejection())?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username.as_str().to_string(),
    });

    Ok(next.run(req).await)
}

/// Uniform 401 used for every identity-resolution failure.
fn credentials_rejection() -> Response {
    let mut response = (
        StatusCode::UNAUTHORIZED,
        Json(ApiErrorBody {
            detail: "Could not validate credentials".to_string(),
        }),
    )
        .into_response();

    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));

    response
}

fn extract_token_from_header(req: &Request) -> Option<&str> {
    let auth_str = req
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    auth_str.strip_prefix("Bearer ")
}
