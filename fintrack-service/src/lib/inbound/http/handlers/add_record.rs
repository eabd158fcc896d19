use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::record::models::AddRecordCommand;
use crate::domain::record::models::Amount;
use crate::domain::record::models::EntryDate;
use crate::domain::record::models::RecordKind;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::record::errors::AmountError;
use crate::record::errors::DateError;
use crate::record::ports::RecordServicePort;
use crate::user::errors::EmailError;

pub async fn add_record(
    State(state): State<AppState>,
    Path(kind): Path<RecordKind>,
    Json(body): Json<AddRecordRequest>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let command = body.try_into_command(kind)?;

    state
        .record_service
        .add_record(command)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData {
            message: format!("{} added successfully!", kind.display_name()),
        },
    ))
}

/// HTTP request body for adding a record (raw JSON, original wire names)
#[derive(Debug, Clone, Deserialize)]
pub struct AddRecordRequest {
    email_id: String,
    item_type: String,
    value: Option<Decimal>,
    annotation: Option<String>,
    date: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseAddRecordError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("The value must be provided.")]
    MissingValue,

    #[error("Invalid value: {0}")]
    Amount(#[from] AmountError),

    #[error("Invalid date: {0}")]
    Date(#[from] DateError),
}

impl AddRecordRequest {
    /// Validation order follows the gate: owner email shape first, then the
    /// add-only value and date checks.
    fn try_into_command(self, kind: RecordKind) -> Result<AddRecordCommand, ParseAddRecordError> {
        let owner_email = EmailAddress::new(self.email_id)?;
        let value = self.value.ok_or(ParseAddRecordError::MissingValue)?;
        let amount = Amount::new(value)?;
        let date = EntryDate::new(self.date.unwrap_or_default())?;

        Ok(AddRecordCommand {
            kind,
            owner_email,
            category: self.item_type,
            amount,
            note: self.annotation.unwrap_or_default(),
            date,
        })
    }
}

impl From<ParseAddRecordError> for ApiError {
    fn from(err: ParseAddRecordError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
