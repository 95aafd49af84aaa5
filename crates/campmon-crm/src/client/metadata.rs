//! Entity metadata and saved view queries.

use campmon_core::domain::SavedViewFilter;
use tracing::debug;

use super::CrmClient;
use crate::error::CrmResult;
use crate::http::HttpBackend;
use crate::models::{AttributeDefinition, ODataCollection, SavedQueryRecord};
use crate::url::{entity_attributes_url, saved_queries_url};

impl<B: HttpBackend> CrmClient<B> {
    /// Attribute definitions of an entity.
    pub async fn attribute_definitions(&self, entity: &str) -> CrmResult<Vec<AttributeDefinition>> {
        let url = entity_attributes_url(&self.config, entity)?;
        let page: ODataCollection<AttributeDefinition> = self.backend.get_json(&url).await?;
        debug!(entity, count = page.value.len(), "Retrieved attribute metadata");
        Ok(page.value)
    }

    /// Saved queries matching the filter, ordered by name.
    pub async fn saved_queries(&self, filter: &SavedViewFilter) -> CrmResult<Vec<SavedQueryRecord>> {
        let url = saved_queries_url(&self.config, filter)?;
        let page: ODataCollection<SavedQueryRecord> = self.backend.get_json(&url).await?;
        debug!(count = page.value.len(), "Retrieved saved views");
        Ok(page.value)
    }
}
