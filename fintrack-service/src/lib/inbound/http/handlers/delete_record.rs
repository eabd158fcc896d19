use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::record::models::RecordKind;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::record::ports::RecordServicePort;

pub async fn delete_record(
    State(state): State<AppState>,
    Path(kind): Path<RecordKind>,
    Query(query): Query<DeleteRecordQuery>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let owner_email =
        EmailAddress::new(query.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .record_service
        .delete_record(kind, &owner_email)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: format!("{} deleted successfully!", kind.display_name()),
        },
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRecordQuery {
    email: String,
}
