//! Test Data Builders
//!
//! Builder patterns for application data, expert rosters and a workflow
//! service wired to in-memory stores. Tests specify only the relevant
//! fields and take defaults for everything else.

use std::sync::Arc;

use core_kernel::Money;
use domain_grants::{
    ApplicationData, DegreeExpertFactory, Expert, ExpertFactory, ExpertSelectionStrategy,
    GrantError, GrantWorkflowService, ScriptedScores, WorkflowConfig,
};
use infra_store::{InMemoryApplicantStore, InMemoryApplicationStore, InMemoryGrantStore, InMemoryWorkerStore};

use crate::fixtures::{ApplicationFixtures, ExpertSpec, MoneyFixtures};

/// Builder for application content
pub struct ApplicationDataBuilder {
    title: String,
    description: String,
    requested_amount: Money,
}

impl Default for ApplicationDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationDataBuilder {
    /// Starts from the reference bio proposal
    pub fn new() -> Self {
        Self {
            title: ApplicationFixtures::bio_title().to_string(),
            description: "Reference proposal".to_string(),
            requested_amount: MoneyFixtures::usd_requested(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_requested_amount(mut self, amount: Money) -> Self {
        self.requested_amount = amount;
        self
    }

    /// Builds the data, propagating validation failures
    pub fn try_build(self) -> Result<ApplicationData, GrantError> {
        ApplicationData::new(self.title, self.description, self.requested_amount)
    }

    /// Builds the data
    ///
    /// # Panics
    ///
    /// Panics if the configured values are invalid
    pub fn build(self) -> ApplicationData {
        match self.try_build() {
            Ok(data) => data,
            Err(err) => panic!("invalid application data: {err}"),
        }
    }
}

/// Builds expert records through the degree-based factory
#[derive(Default)]
pub struct RosterBuilder {
    specs: Vec<(String, String, String)>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expert(mut self, name: &str, specialization: &str, degree: &str) -> Self {
        self.specs
            .push((name.to_string(), specialization.to_string(), degree.to_string()));
        self
    }

    pub fn with_experts(mut self, specs: &[ExpertSpec]) -> Self {
        for (name, specialization, degree) in specs {
            self = self.with_expert(name, specialization, degree);
        }
        self
    }

    /// Experts in the order they were added
    pub fn build(self) -> Vec<Expert> {
        let factory = DegreeExpertFactory;
        self.specs
            .iter()
            .map(|(name, specialization, degree)| {
                factory.create_expert(name, specialization, degree)
            })
            .collect()
    }
}

/// Builder for a workflow service backed by in-memory stores
///
/// Scores default to a fixed script so runs are reproducible.
pub struct WorkflowBuilder {
    config: WorkflowConfig,
    scores: Vec<u8>,
    strategy: Option<Box<dyn ExpertSelectionStrategy>>,
}

impl Default for WorkflowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowBuilder {
    pub fn new() -> Self {
        Self {
            config: WorkflowConfig::default(),
            scores: vec![7],
            strategy: None,
        }
    }

    pub fn with_config(mut self, config: WorkflowConfig) -> Self {
        self.config = config;
        self
    }

    /// Scores handed out in order, cycling when exhausted
    pub fn with_scores(mut self, scores: impl Into<Vec<u8>>) -> Self {
        self.scores = scores.into();
        self
    }

    pub fn with_strategy(mut self, strategy: Box<dyn ExpertSelectionStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn build(self) -> GrantWorkflowService {
        let service = GrantWorkflowService::new(
            Arc::new(InMemoryApplicantStore::new()),
            Arc::new(InMemoryApplicationStore::new()),
            Arc::new(InMemoryGrantStore::new()),
            Arc::new(InMemoryWorkerStore::new()),
            self.config,
        )
        .with_score_source(Box::new(ScriptedScores::new(self.scores)));

        match self.strategy {
            Some(strategy) => service.with_strategy(strategy),
            None => service,
        }
    }
}
