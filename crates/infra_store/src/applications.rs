//! Application store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{ApplicationId, DomainPort, PortError};
use domain_grants::{Application, ApplicationRepository, ApplicationStatus};

/// Applications keyed by id
#[derive(Debug, Default)]
pub struct InMemoryApplicationStore {
    applications: RwLock<HashMap<ApplicationId, Application>>,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.applications.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.applications.read().await.is_empty()
    }
}

impl DomainPort for InMemoryApplicationStore {}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationStore {
    #[instrument(skip(self, application), fields(application_id = %application.id()))]
    async fn save(&self, application: &Application) -> Result<(), PortError> {
        debug!("Saving application");

        let mut applications = self.applications.write().await;
        if applications.contains_key(&application.id()) {
            return Err(PortError::conflict(format!(
                "application {} already exists",
                application.id()
            )));
        }
        applications.insert(application.id(), application.clone());
        Ok(())
    }

    #[instrument(
        skip(self, application),
        fields(application_id = %application.id(), status = %application.status())
    )]
    async fn update(&self, application: &Application) -> Result<(), PortError> {
        debug!("Updating application");

        let mut applications = self.applications.write().await;
        match applications.get_mut(&application.id()) {
            Some(stored) => {
                *stored = application.clone();
                Ok(())
            }
            None => Err(PortError::not_found("Application", application.id())),
        }
    }

    #[instrument(skip(self), fields(application_id = %id))]
    async fn delete(&self, id: ApplicationId) -> Result<(), PortError> {
        debug!("Deleting application");

        self.applications
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Application", id))
    }

    #[instrument(skip(self), fields(application_id = %id))]
    async fn find_by_id(&self, id: ApplicationId) -> Result<Option<Application>, PortError> {
        debug!("Fetching application by ID");
        Ok(self.applications.read().await.get(&id).cloned())
    }

    #[instrument(skip(self), fields(status = %status))]
    async fn find_by_status(&self, status: ApplicationStatus) -> Result<Vec<Application>, PortError> {
        let mut matching: Vec<Application> = self
            .applications
            .read()
            .await
            .values()
            .filter(|application| application.status() == status)
            .cloned()
            .collect();
        // v7 ids sort by creation time
        matching.sort_by_key(|application| application.id());

        debug!(count = matching.len(), "Found applications by status");
        Ok(matching)
    }
}
