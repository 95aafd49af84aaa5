//! `SQLite` implementation of the `ConfigurationRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use campmon_core::domain::{ConfigurationPatch, ConfigurationRow};
use campmon_core::ports::{ConfigurationRepository, RepositoryError};

const SELECT_COLUMNS: &str = "id, name, access_token, refresh_token, expires_on, client_id, client_name, list_id, list_name, setup_error, sync_duplicate_emails, sync_fields, sync_view_id, sync_view_name, subscriber_email, bulk_sync_in_progress, bulk_sync_data";

/// `SQLite` implementation of the `ConfigurationRepository` trait.
///
/// Patches are applied in memory to the stored row and the full row is
/// written back.
pub struct SqliteConfigurationRepository {
    pool: SqlitePool,
}

impl SqliteConfigurationRepository {
    /// Create a new `SQLite` configuration repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<ConfigurationRow>, RepositoryError> {
        let record = sqlx::query_as::<_, ConfigurationRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM campmon_configuration WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        record.map(ConfigurationRecord::into_row).transpose()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Row types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(sqlx::FromRow)]
struct ConfigurationRecord {
    id: String,
    name: Option<String>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_on: Option<DateTime<Utc>>,
    client_id: Option<String>,
    client_name: Option<String>,
    list_id: Option<String>,
    list_name: Option<String>,
    setup_error: Option<String>,
    sync_duplicate_emails: Option<bool>,
    sync_fields: Option<String>,
    sync_view_id: Option<String>,
    sync_view_name: Option<String>,
    subscriber_email: Option<i32>,
    bulk_sync_in_progress: Option<bool>,
    bulk_sync_data: Option<String>,
}

impl ConfigurationRecord {
    fn into_row(self) -> Result<ConfigurationRow, RepositoryError> {
        let id = Uuid::parse_str(&self.id).map_err(|e| {
            RepositoryError::Serialization(format!("invalid configuration id '{}': {e}", self.id))
        })?;

        Ok(ConfigurationRow {
            id,
            name: self.name,
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_on: self.expires_on,
            client_id: self.client_id,
            client_name: self.client_name,
            list_id: self.list_id,
            list_name: self.list_name,
            setup_error: self.setup_error,
            sync_duplicate_emails: self.sync_duplicate_emails,
            sync_fields: self.sync_fields,
            sync_view_id: self.sync_view_id,
            sync_view_name: self.sync_view_name,
            subscriber_email: self.subscriber_email,
            bulk_sync_in_progress: self.bulk_sync_in_progress,
            bulk_sync_data: self.bulk_sync_data,
        })
    }
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") {
        return RepositoryError::Constraint(msg);
    }
    RepositoryError::Storage(msg)
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ConfigurationRepository for SqliteConfigurationRepository {
    async fn first_id(&self) -> Result<Option<Uuid>, RepositoryError> {
        let id: Option<String> =
            sqlx::query_scalar("SELECT id FROM campmon_configuration ORDER BY created_at LIMIT 1")
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        id.map(|id| {
            Uuid::parse_str(&id).map_err(|e| {
                RepositoryError::Serialization(format!("invalid configuration id '{id}': {e}"))
            })
        })
        .transpose()
    }

    async fn load_first(&self) -> Result<Option<ConfigurationRow>, RepositoryError> {
        let record = sqlx::query_as::<_, ConfigurationRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM campmon_configuration ORDER BY created_at LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        record.map(ConfigurationRecord::into_row).transpose()
    }

    async fn create(&self, patch: &ConfigurationPatch) -> Result<Uuid, RepositoryError> {
        if self.first_id().await?.is_some() {
            return Err(RepositoryError::Constraint(
                "a configuration record already exists".to_string(),
            ));
        }

        let mut row = ConfigurationRow {
            id: Uuid::new_v4(),
            ..Default::default()
        };
        patch.apply_to(&mut row);

        sqlx::query(&format!(
            "INSERT INTO campmon_configuration ({SELECT_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        ))
        .bind(row.id.to_string())
        .bind(&row.name)
        .bind(&row.access_token)
        .bind(&row.refresh_token)
        .bind(row.expires_on)
        .bind(&row.client_id)
        .bind(&row.client_name)
        .bind(&row.list_id)
        .bind(&row.list_name)
        .bind(&row.setup_error)
        .bind(row.sync_duplicate_emails)
        .bind(&row.sync_fields)
        .bind(&row.sync_view_id)
        .bind(&row.sync_view_name)
        .bind(row.subscriber_email)
        .bind(row.bulk_sync_in_progress)
        .bind(&row.bulk_sync_data)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(id = %row.id, "Inserted configuration record");
        Ok(row.id)
    }

    async fn update(&self, id: Uuid, patch: &ConfigurationPatch) -> Result<(), RepositoryError> {
        let Some(mut row) = self.fetch(id).await? else {
            return Err(RepositoryError::NotFound(format!("configuration {id}")));
        };
        if patch.is_empty() {
            return Ok(());
        }
        patch.apply_to(&mut row);

        sqlx::query(
            r#"
            UPDATE campmon_configuration
            SET name = ?, access_token = ?, refresh_token = ?, expires_on = ?,
                client_id = ?, client_name = ?, list_id = ?, list_name = ?, setup_error = ?,
                sync_duplicate_emails = ?, sync_fields = ?, sync_view_id = ?, sync_view_name = ?,
                subscriber_email = ?, bulk_sync_in_progress = ?, bulk_sync_data = ?,
                updated_at = datetime('now')
            WHERE id = ?
            "#,
        )
        .bind(&row.name)
        .bind(&row.access_token)
        .bind(&row.refresh_token)
        .bind(row.expires_on)
        .bind(&row.client_id)
        .bind(&row.client_name)
        .bind(&row.list_id)
        .bind(&row.list_name)
        .bind(&row.setup_error)
        .bind(row.sync_duplicate_emails)
        .bind(&row.sync_fields)
        .bind(&row.sync_view_id)
        .bind(&row.sync_view_name)
        .bind(row.subscriber_email)
        .bind(row.bulk_sync_in_progress)
        .bind(&row.bulk_sync_data)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(%id, "Updated configuration record");
        Ok(())
    }
}
