//! Repository ports for the grant review domain
//!
//! The workflow service depends only on these traits. Adapters (the
//! in-memory store, or a database later on) implement them and are injected
//! at startup:
//!
//! ```rust,ignore
//! let service = GrantWorkflowService::new(
//!     Arc::new(InMemoryApplicantStore::new()),
//!     Arc::new(InMemoryApplicationStore::new()),
//!     Arc::new(InMemoryGrantStore::new()),
//!     Arc::new(InMemoryWorkerStore::new()),
//!     WorkflowConfig::default(),
//! );
//! ```
//!
//! All methods are async and return `Result<T, PortError>`.

use async_trait::async_trait;

use core_kernel::{ApplicantId, ApplicationId, DomainPort, ExpertId, FounderId, GrantId, PortError};

use crate::applicant::Applicant;
use crate::application::{Application, ApplicationStatus};
use crate::expert::Expert;
use crate::founder::Founder;
use crate::grant::Grant;

/// Storage for applicants
#[async_trait]
pub trait ApplicantRepository: DomainPort {
    /// Stores a new applicant; `Conflict` if the id is taken
    async fn save(&self, applicant: &Applicant) -> Result<(), PortError>;

    /// Replaces a stored applicant; `NotFound` if absent
    async fn update(&self, applicant: &Applicant) -> Result<(), PortError>;

    async fn find_by_id(&self, id: ApplicantId) -> Result<Option<Applicant>, PortError>;
}

/// Storage for applications
#[async_trait]
pub trait ApplicationRepository: DomainPort {
    /// Stores a new application; `Conflict` if the id is taken
    async fn save(&self, application: &Application) -> Result<(), PortError>;

    /// Replaces a stored application; `NotFound` if absent
    async fn update(&self, application: &Application) -> Result<(), PortError>;

    /// Removes a stored application; `NotFound` if absent
    async fn delete(&self, id: ApplicationId) -> Result<(), PortError>;

    async fn find_by_id(&self, id: ApplicationId) -> Result<Option<Application>, PortError>;

    /// Applications in `status`, oldest first
    async fn find_by_status(&self, status: ApplicationStatus) -> Result<Vec<Application>, PortError>;
}

/// Storage for funding programmes
#[async_trait]
pub trait GrantRepository: DomainPort {
    /// Stores a new programme; `Conflict` if the id is taken
    async fn save(&self, grant: &Grant) -> Result<(), PortError>;

    async fn find_by_id(&self, id: GrantId) -> Result<Option<Grant>, PortError>;

    /// All programmes, oldest first
    async fn list(&self) -> Result<Vec<Grant>, PortError>;
}

/// Storage for experts and founders
#[async_trait]
pub trait WorkerRepository: DomainPort {
    async fn save_expert(&self, expert: &Expert) -> Result<(), PortError>;

    async fn save_founder(&self, founder: &Founder) -> Result<(), PortError>;

    async fn find_expert_by_id(&self, id: ExpertId) -> Result<Option<Expert>, PortError>;

    async fn find_founder_by_id(&self, id: FounderId) -> Result<Option<Founder>, PortError>;

    /// All experts in registration order
    async fn list_experts(&self) -> Result<Vec<Expert>, PortError>;
}
