//! `campmon_configuration` record access.

use tracing::debug;

use super::CrmClient;
use crate::error::CrmResult;
use crate::http::HttpBackend;
use crate::models::{ConfigurationRecord, ODataCollection};
use crate::url::{
    configuration_collection_url, configuration_record_url, first_configuration_id_url,
    first_configuration_url,
};

#[derive(serde::Deserialize)]
struct IdOnly {
    campmon_configurationid: String,
}

impl<B: HttpBackend> CrmClient<B> {
    /// Id of the first configuration record.
    pub async fn first_configuration_id(&self) -> CrmResult<Option<String>> {
        let url = first_configuration_id_url(&self.config)?;
        let page: ODataCollection<IdOnly> = self.backend.get_json(&url).await?;
        Ok(page
            .value
            .into_iter()
            .next()
            .map(|r| r.campmon_configurationid))
    }

    /// First configuration record with all mapped columns.
    pub async fn first_configuration(&self) -> CrmResult<Option<ConfigurationRecord>> {
        let url = first_configuration_url(&self.config)?;
        debug!(%url, "Querying configuration record");
        let page: ODataCollection<ConfigurationRecord> = self.backend.get_json(&url).await?;
        Ok(page.value.into_iter().next())
    }

    /// Insert a configuration record. The body must carry the record id.
    pub async fn create_configuration(&self, body: &serde_json::Value) -> CrmResult<()> {
        let url = configuration_collection_url(&self.config)?;
        self.backend.post_json(&url, body).await
    }

    /// Update columns of an existing configuration record.
    pub async fn update_configuration(&self, id: &str, body: &serde_json::Value) -> CrmResult<()> {
        let url = configuration_record_url(&self.config, id)?;
        self.backend.patch_json(&url, body).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::fake_client;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[tokio::test]
    async fn test_first_configuration_empty_collection() {
        let client = fake_client(
            FakeBackend::new()
                .with_response("campmon_configurations", CannedResponse::ok(json!({"value": []}))),
        );
        assert!(client.first_configuration().await.unwrap().is_none());
        assert!(client.first_configuration_id().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_first_configuration_takes_first_record() {
        let client = fake_client(FakeBackend::new().with_response(
            "campmon_configurations",
            CannedResponse::ok(json!({"value": [
                {"campmon_configurationid": "6f9619ff-8b86-d011-b42d-00c04fc964ff", "campmon_listid": "l1"}
            ]})),
        ));

        let record = client.first_configuration().await.unwrap().unwrap();
        assert_eq!(record.id, "6f9619ff-8b86-d011-b42d-00c04fc964ff");
        assert_eq!(record.list_id.as_deref(), Some("l1"));
    }

    #[tokio::test]
    async fn test_update_targets_record_url() {
        let client = fake_client(FakeBackend::new());
        client
            .update_configuration("abc", &json!({"campmon_accesstoken": null}))
            .await
            .unwrap();

        let writes = client.backend.writes.lock().unwrap();
        assert_eq!(writes[0].method, "PATCH");
        assert!(writes[0].url.ends_with("campmon_configurations(abc)"));
    }
}
