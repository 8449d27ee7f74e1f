//! Expert and founder store
//!
//! Experts are kept in registration order because selection strategies
//! depend on it.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, ExpertId, FounderId, PortError};
use domain_grants::{Expert, Founder, WorkerRepository};

#[derive(Debug, Default)]
pub struct InMemoryWorkerStore {
    experts: RwLock<Vec<Expert>>,
    founders: RwLock<HashMap<FounderId, Founder>>,
}

impl InMemoryWorkerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryWorkerStore {}

#[async_trait]
impl WorkerRepository for InMemoryWorkerStore {
    #[instrument(skip(self, expert), fields(expert_id = %expert.id))]
    async fn save_expert(&self, expert: &Expert) -> Result<(), PortError> {
        debug!("Saving expert");

        let mut experts = self.experts.write().await;
        if experts.iter().any(|stored| stored.id == expert.id) {
            return Err(PortError::conflict(format!("expert {} already exists", expert.id)));
        }
        experts.push(expert.clone());
        Ok(())
    }

    #[instrument(skip(self, founder), fields(founder_id = %founder.id))]
    async fn save_founder(&self, founder: &Founder) -> Result<(), PortError> {
        debug!("Saving founder");

        let mut founders = self.founders.write().await;
        if founders.contains_key(&founder.id) {
            return Err(PortError::conflict(format!("founder {} already exists", founder.id)));
        }
        founders.insert(founder.id, founder.clone());
        Ok(())
    }

    #[instrument(skip(self), fields(expert_id = %id))]
    async fn find_expert_by_id(&self, id: ExpertId) -> Result<Option<Expert>, PortError> {
        debug!("Fetching expert by ID");
        Ok(self
            .experts
            .read()
            .await
            .iter()
            .find(|expert| expert.id == id)
            .cloned())
    }

    #[instrument(skip(self), fields(founder_id = %id))]
    async fn find_founder_by_id(&self, id: FounderId) -> Result<Option<Founder>, PortError> {
        debug!("Fetching founder by ID");
        Ok(self.founders.read().await.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_experts(&self) -> Result<Vec<Expert>, PortError> {
        let experts = self.experts.read().await.clone();
        debug!(count = experts.len(), "Listing experts");
        Ok(experts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_grants::{DegreeExpertFactory, ExpertFactory};

    #[tokio::test]
    async fn test_experts_listed_in_registration_order() {
        let store = InMemoryWorkerStore::new();
        let factory = DegreeExpertFactory;
        let names = ["Walter", "Jesse", "Gustavo"];

        for name in names {
            store.save_expert(&factory.create_expert(name, "bio", "PhD")).await.unwrap();
        }

        let listed: Vec<String> = store
            .list_experts()
            .await
            .unwrap()
            .into_iter()
            .map(|expert| expert.name)
            .collect();
        assert_eq!(listed, names);
    }

    #[tokio::test]
    async fn test_duplicate_expert_conflicts() {
        let store = InMemoryWorkerStore::new();
        let expert = DegreeExpertFactory.create_expert("Walter", "chemistry", "PhD");

        store.save_expert(&expert).await.unwrap();
        assert!(matches!(
            store.save_expert(&expert).await,
            Err(PortError::Conflict { .. })
        ));
    }

    #[tokio::test]
    async fn test_founder_lookup() {
        let store = InMemoryWorkerStore::new();
        let founder = Founder::new("House").unwrap();
        store.save_founder(&founder).await.unwrap();

        assert_eq!(store.find_founder_by_id(founder.id).await.unwrap(), Some(founder));
        assert!(store.find_founder_by_id(FounderId::new()).await.unwrap().is_none());
        assert!(store.find_expert_by_id(ExpertId::new()).await.unwrap().is_none());
    }
}
