use async_trait::async_trait;

use crate::domain::record::models::AddRecordCommand;
use crate::domain::record::models::Record;
use crate::domain::record::models::RecordKind;
use crate::domain::record::models::RecordPatch;
use crate::domain::user::models::EmailAddress;
use crate::record::errors::RecordError;

/// Port for record domain service operations.
///
/// Every mutation runs the same gate: the owner email must belong to a
/// registered user before anything is delegated to storage. Validation of
/// field formats happens earlier, at the HTTP boundary.
#[async_trait]
pub trait RecordServicePort: Send + Sync + 'static {
    /// Add a new record of the given kind.
    ///
    /// # Errors
    /// * `OwnerNotFound` - Owner email has no registered account
    /// * `DatabaseError` - Database operation failed
    async fn add_record(&self, command: AddRecordCommand) -> Result<(), RecordError>;

    /// Apply a partial update to the owner's records of the given kind.
    ///
    /// # Errors
    /// * `EmptyUpdate` - Patch carries no fields
    /// * `OwnerNotFound` - Owner email has no registered account
    /// * `DatabaseError` - Database operation failed
    async fn update_record(
        &self,
        kind: RecordKind,
        owner_email: &EmailAddress,
        patch: RecordPatch,
    ) -> Result<(), RecordError>;

    /// Delete the owner's records of the given kind.
    ///
    /// # Errors
    /// * `OwnerNotFound` - Owner email has no registered account
    /// * `DatabaseError` - Database operation failed
    async fn delete_record(
        &self,
        kind: RecordKind,
        owner_email: &EmailAddress,
    ) -> Result<(), RecordError>;

    /// List records of the given kind, optionally filtered by owner email.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_records(
        &self,
        kind: RecordKind,
        owner_email: Option<&str>,
    ) -> Result<Vec<Record>, RecordError>;
}

/// Persistence operations for financial records.
///
/// Pure pass-through CRUD; all validation and existence checking happens
/// before these are called.
#[async_trait]
pub trait RecordRepository: Send + Sync + 'static {
    /// Insert a record into the kind's table.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, kind: RecordKind, record: Record) -> Result<(), RecordError>;

    /// Update the owner's records in the kind's table.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        kind: RecordKind,
        owner_email: &str,
        patch: &RecordPatch,
    ) -> Result<(), RecordError>;

    /// Delete the owner's records from the kind's table.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, kind: RecordKind, owner_email: &str) -> Result<(), RecordError>;

    /// List records from the kind's table, optionally filtered by owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list<'a>(
        &'a self,
        kind: RecordKind,
        owner_email: Option<&'a str>,
    ) -> Result<Vec<Record>, RecordError>;
}
