//! URL construction helpers for the Dynamics Web API.

use campmon_core::domain::SavedViewFilter;
use url::Url;

use crate::error::CrmResult;
use crate::models::{CONFIGURATION_COLUMNS, CONFIGURATION_ENTITY_SET, CrmConfig};

/// Resolve the Web API root for an organization URL.
pub fn api_root(org_url: &str, api_version: &str) -> CrmResult<Url> {
    let base = Url::parse(org_url.trim_end_matches('/'))?;
    Ok(base.join(&format!("/api/data/{api_version}/"))?)
}

/// First configuration record with every mapped column.
pub fn first_configuration_url(config: &CrmConfig) -> CrmResult<Url> {
    let mut url = config.api_root.join(CONFIGURATION_ENTITY_SET)?;
    url.query_pairs_mut()
        .append_pair("$select", &CONFIGURATION_COLUMNS.join(","))
        .append_pair("$top", "1");
    Ok(url)
}

/// Id of the first configuration record.
pub fn first_configuration_id_url(config: &CrmConfig) -> CrmResult<Url> {
    let mut url = config.api_root.join(CONFIGURATION_ENTITY_SET)?;
    url.query_pairs_mut()
        .append_pair("$select", "campmon_configurationid")
        .append_pair("$top", "1");
    Ok(url)
}

/// The configuration entity set, target of inserts.
pub fn configuration_collection_url(config: &CrmConfig) -> CrmResult<Url> {
    Ok(config.api_root.join(CONFIGURATION_ENTITY_SET)?)
}

/// A single configuration record by id.
pub fn configuration_record_url(config: &CrmConfig, id: &str) -> CrmResult<Url> {
    Ok(config
        .api_root
        .join(&format!("{CONFIGURATION_ENTITY_SET}({id})"))?)
}

/// Attribute metadata of an entity.
pub fn entity_attributes_url(config: &CrmConfig, entity: &str) -> CrmResult<Url> {
    let mut url = config.api_root.join(&format!(
        "EntityDefinitions(LogicalName='{}')/Attributes",
        urlencoding::encode(entity)
    ))?;
    url.query_pairs_mut().append_pair(
        "$select",
        "LogicalName,DisplayName,IsValidForAdvancedFind",
    );
    Ok(url)
}

/// Saved views matching a filter, ordered by name.
pub fn saved_queries_url(config: &CrmConfig, filter: &SavedViewFilter) -> CrmResult<Url> {
    let mut url = config.api_root.join("savedqueries")?;
    let odata_filter = format!(
        "returnedtypecode eq '{}' and statecode eq {} and querytype eq {}",
        filter.entity.replace('\'', "''"),
        filter.state_code,
        filter.query_type
    );
    url.query_pairs_mut()
        .append_pair("$select", "savedqueryid,name")
        .append_pair("$filter", &odata_filter)
        .append_pair("$orderby", "name asc");
    Ok(url)
}
