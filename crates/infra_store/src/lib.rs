//! Infrastructure Storage Layer
//!
//! In-memory adapters for the grant review repository ports. State lives for
//! the lifetime of the process; there is no durability.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{
//!     InMemoryApplicantStore, InMemoryApplicationStore, InMemoryGrantStore, InMemoryWorkerStore,
//! };
//! use domain_grants::{GrantWorkflowService, WorkflowConfig};
//! use std::sync::Arc;
//!
//! let service = GrantWorkflowService::new(
//!     Arc::new(InMemoryApplicantStore::new()),
//!     Arc::new(InMemoryApplicationStore::new()),
//!     Arc::new(InMemoryGrantStore::new()),
//!     Arc::new(InMemoryWorkerStore::new()),
//!     WorkflowConfig::default(),
//! );
//! ```

pub mod applicants;
pub mod applications;
pub mod grants;
pub mod workers;

pub use applicants::InMemoryApplicantStore;
pub use applications::InMemoryApplicationStore;
pub use grants::InMemoryGrantStore;
pub use workers::InMemoryWorkerStore;
