use chrono::{DateTime, Utc};

use sqlx::PgExecutor;

use uuid::Uuid;

use crate::domain::{ContactStatus, NewContact};

/// Stored contact message row
#[derive(Debug, sqlx::FromRow)]
pub struct ContactRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub status: String,
}

/// Repository for interfacing with the contacts table
pub struct ContactsRepo;

impl ContactsRepo {
    /// Insert one row per submission. `submitted_at` is stamped here, and
    /// the status always starts out as `new`.
    #[tracing::instrument(name = "Insert contact message", skip(executor, contact))]
    pub async fn insert<'con>(
        executor: impl PgExecutor<'con>,
        contact: &NewContact,
    ) -> sqlx::Result<Uuid> {
        let id = Uuid::new_v4();
        let submitted_at = Utc::now();

        sqlx::query(
            "insert into contacts(id, name, email, subject, message, submitted_at, status) \
             values ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.subject)
        .bind(&contact.message)
        .bind(submitted_at)
        .bind(ContactStatus::New.as_str())
        .execute(executor)
        .await?;

        Ok(id)
    }
}
