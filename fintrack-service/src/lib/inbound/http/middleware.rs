use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

/// Extension type carrying the resolved identity of the caller
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
    pub name: String,
}

/// Middleware gating every mutation route.
///
/// Verifies the bearer token, then re-fetches the user behind the subject:
/// a structurally valid token whose account has vanished is rejected the
/// same way as a bad signature. The resolved identity is stored in request
/// extensions for downstream handlers.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    // Validate signature, expiry, and subject presence
    let subject = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Bearer token rejected");
        unauthorized()
    })?;

    // Confirm the subject still resolves to a registered user
    let user = state
        .user_service
        .resolve_subject(&subject)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Token subject no longer resolves");
            unauthorized()
        })?;

    req.extensions_mut().insert(AuthenticatedUser {
        email: user.email.as_str().to_string(),
        name: user.name,
    });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Could not validate credentials".to_string()).into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
