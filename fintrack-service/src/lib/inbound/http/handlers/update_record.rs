use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::record::models::RecordKind;
use crate::domain::record::models::RecordPatch;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::record::ports::RecordServicePort;

pub async fn update_record(
    State(state): State<AppState>,
    Path(kind): Path<RecordKind>,
    Query(query): Query<UpdateRecordQuery>,
    Json(body): Json<UpdateRecordRequest>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let owner_email =
        EmailAddress::new(query.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let patch = RecordPatch {
        category: body.item_type,
        amount: body.value,
        note: body.annotation,
        date: body.date,
    };

    state
        .record_service
        .update_record(kind, &owner_email, patch)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: format!("{} updated successfully!", kind.display_name()),
        },
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecordQuery {
    email: String,
}

/// Partial update body; absent fields are left untouched.
///
/// Amount and date pass through as given — the full validators run on add
/// only.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecordRequest {
    item_type: Option<String>,
    value: Option<Decimal>,
    annotation: Option<String>,
    date: Option<String>,
}
