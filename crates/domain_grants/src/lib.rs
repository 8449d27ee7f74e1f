//! Grant Review Domain
//!
//! This crate implements the grant application lifecycle: submission,
//! expert assignment, chained expert evaluation and the founder's funding
//! decision.
//!
//! # Application Lifecycle
//!
//! ```text
//! Draft -> Submitted -> UnderReview -> DecisionMade
//!                (any of the first three) -> Withdrawn
//! ```
//!
//! # Evaluation
//!
//! A selection strategy picks experts for an application, the workflow wires
//! them into an [`EvaluationChain`], and starting the chain makes every
//! expert from the starting point onward score the application in order.
//!
//! # Funding programmes
//!
//! An application may be filed under a [`Grant`]; the programme ceiling then
//! caps both the requested and the granted amount.

pub mod applicant;
pub mod application;
pub mod grant;
pub mod evaluation;
pub mod decision;
pub mod scoring;
pub mod expert;
pub mod selection;
pub mod chain;
pub mod founder;
pub mod ports;
pub mod config;
pub mod service;
pub mod error;

pub use applicant::Applicant;
pub use application::{Application, ApplicationData, ApplicationStatus, StatusChange};
pub use grant::Grant;
pub use evaluation::Evaluation;
pub use decision::{Decision, DecisionResult};
pub use scoring::{ScoreSource, ScoringPolicy, ScriptedScores, SeededScores};
pub use expert::{DegreeExpertFactory, Expert, ExpertFactory, Qualification};
pub use selection::{BySpecialization, ExpertSelectionStrategy, QualificationThreshold, RoundRobin};
pub use chain::EvaluationChain;
pub use founder::Founder;
pub use ports::{ApplicantRepository, ApplicationRepository, GrantRepository, WorkerRepository};
pub use config::{SelectionConfig, WorkflowConfig};
pub use service::GrantWorkflowService;
pub use error::GrantError;
