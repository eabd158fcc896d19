use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::record::models::Record;
use crate::domain::record::models::RecordKind;
use crate::domain::record::models::RecordPatch;
use crate::domain::record::ports::RecordRepository;
use crate::record::errors::RecordError;

/// Pass-through CRUD against the four record tables.
///
/// The table name comes from `RecordKind::table_name`, a closed enum, so
/// interpolating it into the statement text is safe; all user-supplied
/// values go through bind parameters.
pub struct PostgresRecordRepository {
    pool: PgPool,
}

impl PostgresRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &PgRow) -> Result<Record, RecordError> {
        let get = |e: sqlx::Error| RecordError::DatabaseError(e.to_string());

        Ok(Record {
            owner_email: row.try_get("email_id").map_err(get)?,
            category: row.try_get("category").map_err(get)?,
            amount: row.try_get("amount").map_err(get)?,
            note: row.try_get("note").map_err(get)?,
            date: row.try_get("date").map_err(get)?,
        })
    }
}

#[async_trait]
impl RecordRepository for PostgresRecordRepository {
    async fn insert(&self, kind: RecordKind, record: Record) -> Result<(), RecordError> {
        let query = format!(
            r#"
            INSERT INTO {} (email_id, category, amount, note, date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
            kind.table_name()
        );

        sqlx::query(&query)
            .bind(&record.owner_email)
            .bind(&record.category)
            .bind(record.amount)
            .bind(&record.note)
            .bind(&record.date)
            .execute(&self.pool)
            .await
            .map_err(|e| RecordError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update(
        &self,
        kind: RecordKind,
        owner_email: &str,
        patch: &RecordPatch,
    ) -> Result<(), RecordError> {
        let query = format!(
            r#"
            UPDATE {}
            SET category = COALESCE($2, category),
                amount = COALESCE($3, amount),
                note = COALESCE($4, note),
                date = COALESCE($5, date)
            WHERE email_id = $1
            "#,
            kind.table_name()
        );

        sqlx::query(&query)
            .bind(owner_email)
            .bind(&patch.category)
            .bind(patch.amount)
            .bind(&patch.note)
            .bind(&patch.date)
            .execute(&self.pool)
            .await
            .map_err(|e| RecordError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, kind: RecordKind, owner_email: &str) -> Result<(), RecordError> {
        let query = format!("DELETE FROM {} WHERE email_id = $1", kind.table_name());

        sqlx::query(&query)
            .bind(owner_email)
            .execute(&self.pool)
            .await
            .map_err(|e| RecordError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list<'a>(
        &'a self,
        kind: RecordKind,
        owner_email: Option<&'a str>,
    ) -> Result<Vec<Record>, RecordError> {
        let rows = match owner_email {
            Some(email) => {
                let query = format!(
                    r#"
                    SELECT email_id, category, amount, note, date
                    FROM {}
                    WHERE email_id = $1
                    ORDER BY id
                    "#,
                    kind.table_name()
                );
                sqlx::query(&query).bind(email).fetch_all(&self.pool).await
            }
            None => {
                let query = format!(
                    r#"
                    SELECT email_id, category, amount, note, date
                    FROM {}
                    ORDER BY id
                    "#,
                    kind.table_name()
                );
                sqlx::query(&query).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| RecordError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_record).collect()
    }
}
