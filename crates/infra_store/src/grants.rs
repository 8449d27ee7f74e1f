//! Funding programme store

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, GrantId, PortError};
use domain_grants::{Grant, GrantRepository};

/// Grants in registration order
#[derive(Debug, Default)]
pub struct InMemoryGrantStore {
    grants: RwLock<Vec<Grant>>,
}

impl InMemoryGrantStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryGrantStore {}

#[async_trait]
impl GrantRepository for InMemoryGrantStore {
    #[instrument(skip(self, grant), fields(grant_id = %grant.id, title = %grant.title))]
    async fn save(&self, grant: &Grant) -> Result<(), PortError> {
        debug!("Saving grant");

        let mut grants = self.grants.write().await;
        if grants.iter().any(|stored| stored.id == grant.id) {
            return Err(PortError::conflict(format!("grant {} already exists", grant.id)));
        }
        grants.push(grant.clone());
        Ok(())
    }

    #[instrument(skip(self), fields(grant_id = %id))]
    async fn find_by_id(&self, id: GrantId) -> Result<Option<Grant>, PortError> {
        Ok(self.grants.read().await.iter().find(|grant| grant.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Grant>, PortError> {
        Ok(self.grants.read().await.clone())
    }
}
