use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

/// Authenticate a credential pair and issue a bearer token.
///
/// Takes the OAuth2-style form fields (`username` carries the email).
/// Both failure modes — unknown email and wrong password — surface as the
/// same generic 401.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate(&form.username, &form.password)
        .await
        .map_err(ApiError::from)?;

    let access_token = state
        .authenticator
        .issue_token(user.email.as_str())
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Form-encoded login request (`username` carries the email)
#[derive(Clone, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
