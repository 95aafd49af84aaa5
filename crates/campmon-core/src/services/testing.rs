//! In-memory port fakes shared by the service unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    AttributeMetadata, ConfigurationPatch, ConfigurationRow, MailingList, MarketingAuth,
    MarketingClient, OAuthTokens, SavedView, SavedViewFilter,
};
use crate::ports::{
    ConfigurationRepository, CrmMetadataPort, CrmPortError, CrmPortResult, MarketingClientPort,
    MarketingPortError, MarketingPortResult, RepositoryError,
};

/// Configuration repository holding at most one row in memory.
#[derive(Default)]
pub struct InMemoryConfigurationRepo {
    pub row: Mutex<Option<ConfigurationRow>>,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
}

impl InMemoryConfigurationRepo {
    pub fn with_row(row: ConfigurationRow) -> Self {
        Self {
            row: Mutex::new(Some(row)),
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> Option<ConfigurationRow> {
        self.row.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfigurationRepository for InMemoryConfigurationRepo {
    async fn first_id(&self) -> Result<Option<Uuid>, RepositoryError> {
        Ok(self.row.lock().unwrap().as_ref().map(|r| r.id))
    }

    async fn load_first(&self) -> Result<Option<ConfigurationRow>, RepositoryError> {
        Ok(self.snapshot())
    }

    async fn create(&self, patch: &ConfigurationPatch) -> Result<Uuid, RepositoryError> {
        let mut guard = self.row.lock().unwrap();
        if guard.is_some() {
            return Err(RepositoryError::Constraint(
                "configuration row already exists".to_string(),
            ));
        }
        let mut row = ConfigurationRow {
            id: Uuid::new_v4(),
            ..Default::default()
        };
        patch.apply_to(&mut row);
        let id = row.id;
        *guard = Some(row);
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(id)
    }

    async fn update(&self, id: Uuid, patch: &ConfigurationPatch) -> Result<(), RepositoryError> {
        let mut guard = self.row.lock().unwrap();
        match guard.as_mut() {
            Some(row) if row.id == id => {
                patch.apply_to(row);
                self.updates.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound(id.to_string())),
        }
    }
}

/// CRM metadata fake returning canned attributes and views.
#[derive(Default)]
pub struct FakeCrm {
    pub attributes: Vec<AttributeMetadata>,
    pub views: Vec<SavedView>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl CrmMetadataPort for FakeCrm {
    async fn entity_attributes(&self, _entity: &str) -> CrmPortResult<Vec<AttributeMetadata>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CrmPortError::Network {
                message: "connection refused".to_string(),
            });
        }
        Ok(self.attributes.clone())
    }

    async fn saved_views(&self, _filter: &SavedViewFilter) -> CrmPortResult<Vec<SavedView>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CrmPortError::Network {
                message: "connection refused".to_string(),
            });
        }
        Ok(self.views.clone())
    }
}

/// Marketing-API fake with per-client lists and call recording.
#[derive(Default)]
pub struct FakeMarketing {
    pub clients: Vec<MarketingClient>,
    pub lists: Vec<(String, Vec<MailingList>)>,
    pub refreshed: Option<OAuthTokens>,
    pub unreachable: bool,
    pub list_requests: Mutex<Vec<String>>,
    pub seen_auth: Mutex<Vec<MarketingAuth>>,
    pub refresh_calls: AtomicUsize,
}

impl FakeMarketing {
    fn check(&self) -> MarketingPortResult<()> {
        if self.unreachable {
            return Err(MarketingPortError::Network {
                message: "api.createsend.com unreachable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MarketingClientPort for FakeMarketing {
    async fn clients(&self, auth: &MarketingAuth) -> MarketingPortResult<Vec<MarketingClient>> {
        self.check()?;
        self.seen_auth.lock().unwrap().push(auth.clone());
        Ok(self.clients.clone())
    }

    async fn lists(
        &self,
        _auth: &MarketingAuth,
        client_id: &str,
    ) -> MarketingPortResult<Vec<MailingList>> {
        self.check()?;
        self.list_requests
            .lock()
            .unwrap()
            .push(client_id.to_string());
        self.lists
            .iter()
            .find(|(id, _)| id == client_id)
            .map(|(_, lists)| lists.clone())
            .ok_or_else(|| MarketingPortError::ClientNotFound {
                client_id: client_id.to_string(),
            })
    }

    async fn refresh_token(&self, _refresh_token: &str) -> MarketingPortResult<OAuthTokens> {
        self.check()?;
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        self.refreshed
            .clone()
            .ok_or_else(|| MarketingPortError::Unauthorized {
                message: "refresh token revoked".to_string(),
            })
    }
}

pub fn client(id: &str, name: &str) -> MarketingClient {
    MarketingClient {
        client_id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn list(id: &str, name: &str) -> MailingList {
    MailingList {
        list_id: id.to_string(),
        name: name.to_string(),
    }
}

/// Stored row with a usable access token.
pub fn configured_row() -> ConfigurationRow {
    ConfigurationRow {
        id: Uuid::new_v4(),
        name: Some("Configuration".to_string()),
        access_token: Some("access-token".to_string()),
        refresh_token: Some("refresh-token".to_string()),
        ..Default::default()
    }
}
