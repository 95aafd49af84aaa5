//! Port trait implementations for `CrmClient`.
//!
//! Converts between Web API wire types and core DTOs and maps `CrmError` to
//! the core port errors.

use async_trait::async_trait;
use campmon_core::domain::{
    AttributeMetadata, ConfigurationPatch, ConfigurationRow, SavedView, SavedViewFilter,
};
use campmon_core::ports::{
    ConfigurationRepository, CrmMetadataPort, CrmPortError, CrmPortResult, RepositoryError,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::client::CrmClient;
use crate::error::CrmError;
use crate::http::HttpBackend;
use crate::models::{AttributeDefinition, ConfigurationRecord, SavedQueryRecord};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `CrmError` to `RepositoryError`.
fn map_repository_error(err: CrmError) -> RepositoryError {
    match err {
        CrmError::ApiRequestFailed { status: 404, .. } => RepositoryError::NotFound(err.to_string()),
        CrmError::JsonParse(e) => RepositoryError::Serialization(e.to_string()),
        CrmError::InvalidResponse { message } => RepositoryError::Serialization(message),
        other => RepositoryError::Storage(other.to_string()),
    }
}

/// Convert internal `CrmError` to `CrmPortError`.
fn map_metadata_error(err: CrmError, entity: &str) -> CrmPortError {
    match err {
        CrmError::ApiRequestFailed { status: 404, .. } => CrmPortError::EntityNotFound {
            entity: entity.to_string(),
        },
        CrmError::ApiRequestFailed {
            status: 401 | 403, ..
        } => CrmPortError::Unauthorized {
            message: err.to_string(),
        },
        CrmError::ApiRequestFailed { .. } | CrmError::Network(_) | CrmError::ClientBuild(_) => {
            CrmPortError::Network {
                message: err.to_string(),
            }
        }
        CrmError::InvalidResponse { message } => CrmPortError::InvalidResponse { message },
        CrmError::InvalidUrl(e) => CrmPortError::InvalidResponse {
            message: format!("invalid request URL: {e}"),
        },
        CrmError::JsonParse(e) => CrmPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

fn parse_record_id(id: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(id).map_err(|e| {
        RepositoryError::Serialization(format!("invalid configuration id '{id}': {e}"))
    })
}

fn to_row(record: ConfigurationRecord) -> Result<ConfigurationRow, RepositoryError> {
    Ok(ConfigurationRow {
        id: parse_record_id(&record.id)?,
        name: record.name,
        access_token: record.access_token,
        refresh_token: record.refresh_token,
        expires_on: record.expires_on,
        client_id: record.client_id,
        client_name: record.client_name,
        list_id: record.list_id,
        list_name: record.list_name,
        setup_error: record.setup_error,
        sync_duplicate_emails: record.sync_duplicate_emails,
        sync_fields: record.sync_fields,
        sync_view_id: record.sync_view_id,
        sync_view_name: record.sync_view_name,
        subscriber_email: record.subscriber_email,
        bulk_sync_in_progress: record.bulk_sync_in_progress,
        bulk_sync_data: record.bulk_sync_data,
    })
}

/// Build the JSON body of a patch. Untouched columns are omitted.
fn patch_body(patch: &ConfigurationPatch) -> Result<Map<String, Value>, RepositoryError> {
    fn put<T: Serialize>(
        body: &mut Map<String, Value>,
        column: &str,
        value: Option<&Option<T>>,
    ) -> Result<(), RepositoryError> {
        if let Some(value) = value {
            let json = serde_json::to_value(value)
                .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
            body.insert(column.to_string(), json);
        }
        Ok(())
    }

    let mut body = Map::new();
    put(&mut body, "campmon_name", patch.name.as_ref())?;
    put(&mut body, "campmon_accesstoken", patch.access_token.as_ref())?;
    put(&mut body, "campmon_refreshtoken", patch.refresh_token.as_ref())?;
    put(&mut body, "campmon_expireson", patch.expires_on.as_ref())?;
    put(&mut body, "campmon_clientid", patch.client_id.as_ref())?;
    put(&mut body, "campmon_clientname", patch.client_name.as_ref())?;
    put(&mut body, "campmon_listid", patch.list_id.as_ref())?;
    put(&mut body, "campmon_listname", patch.list_name.as_ref())?;
    put(&mut body, "campmon_setuperror", patch.setup_error.as_ref())?;
    put(
        &mut body,
        "campmon_syncduplicateemails",
        patch.sync_duplicate_emails.as_ref(),
    )?;
    put(&mut body, "campmon_syncfields", patch.sync_fields.as_ref())?;
    put(&mut body, "campmon_syncviewid", patch.sync_view_id.as_ref())?;
    put(&mut body, "campmon_syncviewname", patch.sync_view_name.as_ref())?;
    put(
        &mut body,
        "campmon_subscriberemail",
        patch.subscriber_email.as_ref(),
    )?;
    put(
        &mut body,
        "campmon_bulksyncinprogress",
        patch.bulk_sync_in_progress.as_ref(),
    )?;
    put(&mut body, "campmon_bulksyncdata", patch.bulk_sync_data.as_ref())?;
    Ok(body)
}

fn to_attribute(definition: AttributeDefinition) -> AttributeMetadata {
    AttributeMetadata {
        display_name: definition.label().map(str::to_string),
        is_valid_for_advanced_find: definition.valid_for_advanced_find(),
        logical_name: definition.logical_name,
    }
}

fn to_saved_view(record: SavedQueryRecord) -> CrmPortResult<SavedView> {
    let id = Uuid::parse_str(&record.savedqueryid).map_err(|e| CrmPortError::InvalidResponse {
        message: format!("invalid savedqueryid '{}': {e}", record.savedqueryid),
    })?;
    Ok(SavedView {
        id,
        name: record.name,
    })
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ConfigurationRepository for CrmClient<B> {
    async fn first_id(&self) -> Result<Option<Uuid>, RepositoryError> {
        self.first_configuration_id()
            .await
            .map_err(map_repository_error)?
            .map(|id| parse_record_id(&id))
            .transpose()
    }

    async fn load_first(&self) -> Result<Option<ConfigurationRow>, RepositoryError> {
        self.first_configuration()
            .await
            .map_err(map_repository_error)?
            .map(to_row)
            .transpose()
    }

    async fn create(&self, patch: &ConfigurationPatch) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        let mut body = patch_body(patch)?;
        body.insert(
            "campmon_configurationid".to_string(),
            Value::String(id.to_string()),
        );

        self.create_configuration(&Value::Object(body))
            .await
            .map_err(map_repository_error)?;
        info!(%id, "Created CRM configuration record");
        Ok(id)
    }

    async fn update(&self, id: Uuid, patch: &ConfigurationPatch) -> Result<(), RepositoryError> {
        let body = patch_body(patch)?;
        if body.is_empty() {
            return Ok(());
        }
        self.update_configuration(&id.to_string(), &Value::Object(body))
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<B: HttpBackend + Send + Sync> CrmMetadataPort for CrmClient<B> {
    async fn entity_attributes(&self, entity: &str) -> CrmPortResult<Vec<AttributeMetadata>> {
        let definitions = self
            .attribute_definitions(entity)
            .await
            .map_err(|e| map_metadata_error(e, entity))?;
        Ok(definitions.into_iter().map(to_attribute).collect())
    }

    async fn saved_views(&self, filter: &SavedViewFilter) -> CrmPortResult<Vec<SavedView>> {
        self.saved_queries(filter)
            .await
            .map_err(|e| map_metadata_error(e, &filter.entity))?
            .into_iter()
            .map(to_saved_view)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::fake_client;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    const ID: &str = "6f9619ff-8b86-d011-b42d-00c04fc964ff";

    #[test]
    fn test_patch_body_omits_untouched_columns() {
        let expires = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let patch = ConfigurationPatch::tokens(Some("a".to_string()), None, Some(expires));

        let body = patch_body(&patch).unwrap();
        assert_eq!(body.len(), 3);
        assert_eq!(body["campmon_accesstoken"], "a");
        assert!(body["campmon_refreshtoken"].is_null());
        assert_eq!(body["campmon_expireson"], "2030-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn test_load_first_maps_record() {
        let client = fake_client(FakeBackend::new().with_response(
            "campmon_configurations",
            CannedResponse::ok(json!({"value": [{
                "campmon_configurationid": ID,
                "campmon_accesstoken": "token",
                "campmon_syncfields": "firstname,lastname",
                "campmon_subscriberemail": 3,
                "campmon_bulksyncinprogress": false
            }]})),
        ));

        let row = client.load_first().await.unwrap().unwrap();
        assert_eq!(row.id.to_string(), ID);
        assert_eq!(row.access_token.as_deref(), Some("token"));
        assert_eq!(row.sync_fields.as_deref(), Some("firstname,lastname"));
        assert_eq!(row.subscriber_email, Some(3));
        assert_eq!(row.bulk_sync_in_progress, Some(false));
    }

    #[tokio::test]
    async fn test_malformed_record_id_is_serialization_error() {
        let client = fake_client(FakeBackend::new().with_response(
            "campmon_configurations",
            CannedResponse::ok(json!({"value": [{"campmon_configurationid": "nope"}]})),
        ));

        let err = client.first_id().await.unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_create_posts_generated_id() {
        let client = fake_client(FakeBackend::new());
        let patch = ConfigurationPatch {
            name: Some(Some("Configuration".to_string())),
            ..Default::default()
        };

        let id = client.create(&patch).await.unwrap();

        let writes = client.backend.writes.lock().unwrap();
        assert_eq!(writes[0].method, "POST");
        assert_eq!(writes[0].body["campmon_configurationid"], id.to_string());
        assert_eq!(writes[0].body["campmon_name"], "Configuration");
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let client = fake_client(FakeBackend::new().with_response(
            &format!("campmon_configurations({ID})"),
            CannedResponse::status(404),
        ));

        let err = client
            .update(
                Uuid::parse_str(ID).unwrap(),
                &ConfigurationPatch::tokens(None, None, None),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_patch_sends_nothing() {
        let client = fake_client(FakeBackend::new());
        client
            .update(Uuid::new_v4(), &ConfigurationPatch::default())
            .await
            .unwrap();
        assert!(client.backend.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_entity_attributes_maps_labels() {
        let client = fake_client(FakeBackend::new().with_response(
            "EntityDefinitions",
            CannedResponse::ok(json!({"value": [
                {"LogicalName": "jobtitle", "DisplayName": {"UserLocalizedLabel": {"Label": "Job Title"}}, "IsValidForAdvancedFind": {"Value": true}},
                {"LogicalName": "yomifullname", "DisplayName": {"UserLocalizedLabel": {"Label": "Yomi Full Name"}}, "IsValidForAdvancedFind": {"Value": false}}
            ]})),
        ));

        let attributes = client.entity_attributes("contact").await.unwrap();
        assert_eq!(
            attributes[0],
            AttributeMetadata {
                logical_name: "jobtitle".to_string(),
                display_name: Some("Job Title".to_string()),
                is_valid_for_advanced_find: true,
            }
        );
        assert!(!attributes[1].is_valid_for_advanced_find);
    }

    #[tokio::test]
    async fn test_metadata_error_mapping() {
        let client = fake_client(
            FakeBackend::new()
                .with_response("EntityDefinitions", CannedResponse::status(404))
                .with_response("savedqueries", CannedResponse::status(401)),
        );

        let err = client.entity_attributes("contact").await.unwrap_err();
        assert!(matches!(err, CrmPortError::EntityNotFound { ref entity } if entity == "contact"));

        let err = client
            .saved_views(&SavedViewFilter::contact_views())
            .await
            .unwrap_err();
        assert!(matches!(err, CrmPortError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_saved_views_reject_bad_ids() {
        let client = fake_client(FakeBackend::new().with_response(
            "savedqueries",
            CannedResponse::ok(json!({"value": [{"savedqueryid": "x", "name": "Broken"}]})),
        ));

        let err = client
            .saved_views(&SavedViewFilter::contact_views())
            .await
            .unwrap_err();
        assert!(matches!(err, CrmPortError::InvalidResponse { .. }));
    }
}
