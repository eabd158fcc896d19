use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::record::models::AddRecordCommand;
use crate::domain::record::models::Record;
use crate::domain::record::models::RecordKind;
use crate::domain::record::models::RecordPatch;
use crate::domain::user::models::EmailAddress;
use crate::record::errors::RecordError;
use crate::record::ports::RecordRepository;
use crate::record::ports::RecordServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for record operations.
///
/// Orchestrates the mutation gate: format validation happened at the
/// boundary, so what remains here is the owner existence check followed by
/// delegation. Each step short-circuits; storage is never touched after a
/// failed check.
pub struct RecordService<RR, UR>
where
    RR: RecordRepository,
    UR: UserRepository,
{
    records: Arc<RR>,
    users: Arc<UR>,
}

impl<RR, UR> RecordService<RR, UR>
where
    RR: RecordRepository,
    UR: UserRepository,
{
    /// Create a new record service with injected dependencies.
    ///
    /// # Arguments
    /// * `records` - Record persistence implementation
    /// * `users` - User persistence implementation (owner existence checks)
    pub fn new(records: Arc<RR>, users: Arc<UR>) -> Self {
        Self { records, users }
    }

    async fn ensure_owner_exists(&self, email: &str) -> Result<(), RecordError> {
        let exists = self.users.exists_by_email(email).await?;
        if exists {
            Ok(())
        } else {
            Err(RecordError::OwnerNotFound(email.to_string()))
        }
    }
}

#[async_trait]
impl<RR, UR> RecordServicePort for RecordService<RR, UR>
where
    RR: RecordRepository,
    UR: UserRepository,
{
    async fn add_record(&self, command: AddRecordCommand) -> Result<(), RecordError> {
        self.ensure_owner_exists(command.owner_email.as_str())
            .await?;

        let record = Record {
            owner_email: command.owner_email.as_str().to_string(),
            category: command.category,
            amount: command.amount.value(),
            note: command.note,
            date: command.date.into_string(),
        };

        self.records.insert(command.kind, record).await?;

        tracing::info!(kind = %command.kind, "Record added");

        Ok(())
    }

    async fn update_record(
        &self,
        kind: RecordKind,
        owner_email: &EmailAddress,
        patch: RecordPatch,
    ) -> Result<(), RecordError> {
        if patch.is_empty() {
            return Err(RecordError::EmptyUpdate);
        }

        self.ensure_owner_exists(owner_email.as_str()).await?;

        self.records
            .update(kind, owner_email.as_str(), &patch)
            .await
    }

    async fn delete_record(
        &self,
        kind: RecordKind,
        owner_email: &EmailAddress,
    ) -> Result<(), RecordError> {
        self.ensure_owner_exists(owner_email.as_str()).await?;

        self.records.delete(kind, owner_email.as_str()).await
    }

    async fn list_records(
        &self,
        kind: RecordKind,
        owner_email: Option<&str>,
    ) -> Result<Vec<Record>, RecordError> {
        self.records.list(kind, owner_email).await
    }
}
