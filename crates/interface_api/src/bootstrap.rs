//! Service wiring for the binary and the API tests

use std::sync::Arc;

use tracing::info;

use core_kernel::CoreError;
use domain_grants::{GrantError, GrantWorkflowService, SeededScores};
use infra_store::{InMemoryApplicantStore, InMemoryApplicationStore, InMemoryGrantStore, InMemoryWorkerStore};

use crate::config::ApiConfig;

const REFERENCE_EXPERTS: [(&str, &str, &str); 3] = [
    ("Gustavo Fring", "bio", "PhD"),
    ("Jesse Pinkman", "bio", "Master"),
    ("Walter White", "chemistry", "PhD"),
];

/// Builds a workflow service over the in-memory stores
pub fn build_service(config: &ApiConfig) -> Result<GrantWorkflowService, CoreError> {
    let workflow = config.workflow_config()?;

    let service = GrantWorkflowService::new(
        Arc::new(InMemoryApplicantStore::new()),
        Arc::new(InMemoryApplicationStore::new()),
        Arc::new(InMemoryGrantStore::new()),
        Arc::new(InMemoryWorkerStore::new()),
        workflow,
    );

    Ok(match config.score_seed {
        Some(seed) => service.with_score_source(Box::new(SeededScores::from_seed(seed))),
        None => service,
    })
}

/// Registers the reference roster, one applicant and one founder
pub async fn seed_reference_data(service: &GrantWorkflowService) -> Result<(), GrantError> {
    for (name, specialization, degree) in REFERENCE_EXPERTS {
        service.register_expert(name, specialization, degree).await?;
    }
    let applicant = service
        .register_applicant("Skyler White", Some("skyler@example.com".to_string()), None)
        .await?;
    let founder = service.register_founder("Gregory House").await?;

    info!(
        experts = REFERENCE_EXPERTS.len(),
        applicant_id = %applicant.id(),
        founder_id = %founder.id,
        "Reference data registered"
    );
    Ok(())
}
