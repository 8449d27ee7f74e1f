//! Applicant store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{ApplicantId, DomainPort, PortError};
use domain_grants::{Applicant, ApplicantRepository};

/// Applicants keyed by id
#[derive(Debug, Default)]
pub struct InMemoryApplicantStore {
    applicants: RwLock<HashMap<ApplicantId, Applicant>>,
}

impl InMemoryApplicantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.applicants.read().await.len()
    }
}

impl DomainPort for InMemoryApplicantStore {}

#[async_trait]
impl ApplicantRepository for InMemoryApplicantStore {
    #[instrument(skip(self, applicant), fields(applicant_id = %applicant.id()))]
    async fn save(&self, applicant: &Applicant) -> Result<(), PortError> {
        debug!("Saving applicant");

        let mut applicants = self.applicants.write().await;
        if applicants.contains_key(&applicant.id()) {
            return Err(PortError::conflict(format!(
                "applicant {} already exists",
                applicant.id()
            )));
        }
        applicants.insert(applicant.id(), applicant.clone());
        Ok(())
    }

    #[instrument(skip(self, applicant), fields(applicant_id = %applicant.id()))]
    async fn update(&self, applicant: &Applicant) -> Result<(), PortError> {
        debug!("Updating applicant");

        let mut applicants = self.applicants.write().await;
        match applicants.get_mut(&applicant.id()) {
            Some(stored) => {
                *stored = applicant.clone();
                Ok(())
            }
            None => Err(PortError::not_found("Applicant", applicant.id())),
        }
    }

    #[instrument(skip(self), fields(applicant_id = %id))]
    async fn find_by_id(&self, id: ApplicantId) -> Result<Option<Applicant>, PortError> {
        debug!("Fetching applicant by ID");
        Ok(self.applicants.read().await.get(&id).cloned())
    }
}
