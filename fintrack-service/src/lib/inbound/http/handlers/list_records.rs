use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::record::models::Record;
use crate::domain::record::models::RecordKind;
use crate::inbound::http::router::AppState;
use crate::record::ports::RecordServicePort;

pub async fn list_records(
    State(state): State<AppState>,
    Path(kind): Path<RecordKind>,
    Query(query): Query<ListRecordsQuery>,
) -> Result<ApiSuccess<Vec<RecordData>>, ApiError> {
    let records = state
        .record_service
        .list_records(kind, query.email.as_deref())
        .await
        .map_err(ApiError::from)?;

    let data = records.iter().map(RecordData::from).collect();

    Ok(ApiSuccess::new(StatusCode::OK, data))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListRecordsQuery {
    email: Option<String>,
}

/// Listed record in the original wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordData {
    pub email_id: String,
    pub item_type: String,
    pub value: Decimal,
    pub annotation: String,
    pub date: String,
}

impl From<&Record> for RecordData {
    fn from(record: &Record) -> Self {
        Self {
            email_id: record.owner_email.clone(),
            item_type: record.category.clone(),
            value: record.amount,
            annotation: record.note.clone(),
            date: record.date.clone(),
        }
    }
}
