//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Configuration store (`SQLite` via campmon-db, or the CRM entity)
//! - CRM metadata client (via campmon-crm)
//! - Campaign Monitor client (via campmon-createsend)
//!
//! Command handlers receive the composed `CliContext`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use campmon_core::database_path;
use campmon_core::ports::{ConfigurationRepository, CrmMetadataPort, MarketingClientPort};
use campmon_core::services::{ConfigurationService, OperationContext, OperationRegistry};
use campmon_createsend::{CreatesendClientConfig, DefaultCreatesendClient};
use campmon_crm::{CrmClientConfig, DefaultCrmClient};
use campmon_db::{CoreFactory, setup_database};
use tracing::debug;

use crate::error::CliError;
use crate::parser::{Cli, StoreKind};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Configuration store.
    pub store: StoreKind,
    /// `SQLite` database path; the platform data directory when `None`.
    pub database_path: Option<PathBuf>,
    /// CRM organization URL.
    pub crm_url: Option<String>,
    /// Bearer token for the CRM Web API.
    pub crm_token: Option<String>,
    /// Campaign Monitor API base URL override.
    pub createsend_url: Option<String>,
}

impl CliConfig {
    /// Collect the global options of a parsed command line.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            store: cli.store,
            database_path: cli.database.clone(),
            crm_url: non_blank(cli.crm_url.as_deref()),
            crm_token: non_blank(cli.crm_token.as_deref()),
            createsend_url: non_blank(cli.createsend_url.as_deref()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    configuration: Arc<ConfigurationService>,
    crm: Option<Arc<dyn CrmMetadataPort>>,
    marketing: Arc<dyn MarketingClientPort>,
    registry: OperationRegistry,
}

impl CliContext {
    /// Access the configuration service.
    pub fn configuration(&self) -> &ConfigurationService {
        &self.configuration
    }

    /// Access the operation registry.
    pub const fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// Build a fresh request context for one operation call.
    ///
    /// Fails when no CRM organization is configured.
    pub fn operation_context(&self) -> Result<OperationContext, CliError> {
        let crm = self.crm.clone().ok_or_else(|| {
            CliError::Config(
                "operations need a CRM organization URL (--crm-url or CAMPMON_CRM_URL)"
                    .to_string(),
            )
        })?;
        Ok(OperationContext::new(
            self.configuration.clone(),
            crm,
            self.marketing.clone(),
        ))
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Creates the CRM client when an organization URL is configured
/// 2. Opens the configuration store selected by `config.store`
/// 3. Creates the Campaign Monitor client
/// 4. Registers the default operations
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    // 1. CRM client, shared by the metadata port and the crm store
    let crm = match config.crm_url.as_deref() {
        Some(url) => {
            let crm_config =
                CrmClientConfig::new(url).with_optional_token(config.crm_token.clone());
            Some(Arc::new(DefaultCrmClient::new(&crm_config)?))
        }
        None => None,
    };

    // 2. Configuration store
    let repo: Arc<dyn ConfigurationRepository> = match config.store {
        StoreKind::Sqlite => {
            let path = match config.database_path {
                Some(path) => path,
                None => database_path()?,
            };
            debug!(path = %path.display(), "Using SQLite configuration store");
            CoreFactory::configuration_repository(setup_database(&path).await?)
        }
        StoreKind::Crm => {
            let client = crm.clone().ok_or_else(|| {
                CliError::Config(
                    "the crm store needs a CRM organization URL (--crm-url or CAMPMON_CRM_URL)"
                        .to_string(),
                )
            })?;
            debug!("Using CRM configuration store");
            client as Arc<dyn ConfigurationRepository>
        }
    };

    // 3. Campaign Monitor client
    let mut createsend_config = CreatesendClientConfig::new();
    if let Some(url) = config.createsend_url {
        createsend_config = createsend_config.with_base_url(url);
    }
    let marketing: Arc<dyn MarketingClientPort> =
        Arc::new(DefaultCreatesendClient::new(&createsend_config)?);

    let crm = crm.map(|client| client as Arc<dyn CrmMetadataPort>);
    Ok(bootstrap_with(repo, crm, marketing))
}

/// Bootstrap with custom ports (for testing).
pub fn bootstrap_with(
    repo: Arc<dyn ConfigurationRepository>,
    crm: Option<Arc<dyn CrmMetadataPort>>,
    marketing: Arc<dyn MarketingClientPort>,
) -> CliContext {
    CliContext {
        configuration: Arc::new(ConfigurationService::new(repo)),
        crm,
        marketing,
        registry: OperationRegistry::with_defaults(),
    }
}
