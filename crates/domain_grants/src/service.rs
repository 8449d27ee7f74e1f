//! Grant workflow service
//!
//! Sequences submission, expert assignment, chain evaluation and the final
//! decision against the repository ports. Business rules live on the
//! aggregates; this layer resolves references, applies workflow settings and
//! persists the results.
//!
//! Every read-modify-write of one application runs under that application's
//! lock, so two requests never interleave writes to the same record. A lock
//! entry lives only while some request holds or waits on it.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use core_kernel::{ApplicantId, ApplicationId, ExpertId, FounderId, GrantId, Money};

use crate::applicant::Applicant;
use crate::application::{Application, ApplicationData, ApplicationStatus};
use crate::chain::EvaluationChain;
use crate::config::WorkflowConfig;
use crate::decision::{Decision, DecisionResult};
use crate::error::GrantError;
use crate::evaluation::Evaluation;
use crate::expert::{DegreeExpertFactory, Expert, ExpertFactory};
use crate::founder::Founder;
use crate::grant::Grant;
use crate::ports::{ApplicantRepository, ApplicationRepository, GrantRepository, WorkerRepository};
use crate::scoring::{ScoreSource, SeededScores};
use crate::selection::ExpertSelectionStrategy;

/// Orchestrates the application lifecycle over injected repositories
pub struct GrantWorkflowService {
    applicants: Arc<dyn ApplicantRepository>,
    applications: Arc<dyn ApplicationRepository>,
    grants: Arc<dyn GrantRepository>,
    workers: Arc<dyn WorkerRepository>,
    strategy: Box<dyn ExpertSelectionStrategy>,
    factory: Box<dyn ExpertFactory>,
    scores: Mutex<Box<dyn ScoreSource>>,
    chains: RwLock<HashMap<ApplicationId, EvaluationChain>>,
    record_locks: Mutex<HashMap<ApplicationId, Arc<Mutex<()>>>>,
    config: WorkflowConfig,
}

impl GrantWorkflowService {
    /// Creates a service using the configured strategy, the degree-based
    /// expert factory and an entropy-seeded score source
    pub fn new(
        applicants: Arc<dyn ApplicantRepository>,
        applications: Arc<dyn ApplicationRepository>,
        grants: Arc<dyn GrantRepository>,
        workers: Arc<dyn WorkerRepository>,
        config: WorkflowConfig,
    ) -> Self {
        Self {
            applicants,
            applications,
            grants,
            workers,
            strategy: config.selection.build(),
            factory: Box::new(DegreeExpertFactory),
            scores: Mutex::new(Box::new(SeededScores::from_entropy())),
            chains: RwLock::new(HashMap::new()),
            record_locks: Mutex::new(HashMap::new()),
            config,
        }
    }

    pub fn with_strategy(mut self, strategy: Box<dyn ExpertSelectionStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_score_source(mut self, scores: Box<dyn ScoreSource>) -> Self {
        self.scores = Mutex::new(scores);
        self
    }

    pub fn with_factory(mut self, factory: Box<dyn ExpertFactory>) -> Self {
        self.factory = factory;
        self
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    pub async fn register_applicant(
        &self,
        name: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Applicant, GrantError> {
        let applicant = Applicant::new(name, email, phone)?;
        self.applicants.save(&applicant).await?;
        info!(applicant_id = %applicant.id(), "Applicant registered");
        Ok(applicant)
    }

    pub async fn get_applicant(&self, id: ApplicantId) -> Result<Applicant, GrantError> {
        self.applicants
            .find_by_id(id)
            .await?
            .ok_or_else(|| GrantError::not_found("Applicant", id))
    }

    /// Replaces an applicant's contact fields
    pub async fn update_applicant_contact(
        &self,
        id: ApplicantId,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Applicant, GrantError> {
        let mut applicant = self.get_applicant(id).await?;
        applicant.update_contact(email, phone);
        self.applicants.update(&applicant).await?;
        Ok(applicant)
    }

    /// Registers an expert through the expert factory
    pub async fn register_expert(
        &self,
        name: &str,
        specialization: &str,
        degree: &str,
    ) -> Result<Expert, GrantError> {
        if name.trim().is_empty() {
            return Err(GrantError::validation("expert name must not be empty"));
        }
        if specialization.trim().is_empty() {
            return Err(GrantError::validation("expert specialization must not be empty"));
        }

        let expert = self.factory.create_expert(name, specialization, degree);
        self.workers.save_expert(&expert).await?;
        info!(
            expert_id = %expert.id,
            specialization = %expert.specialization,
            scoring = ?expert.scoring,
            "Expert registered"
        );
        Ok(expert)
    }

    pub async fn register_founder(&self, name: &str) -> Result<Founder, GrantError> {
        let founder = Founder::new(name)?;
        self.workers.save_founder(&founder).await?;
        info!(founder_id = %founder.id, "Founder registered");
        Ok(founder)
    }

    /// Registered experts in registration order
    pub async fn experts(&self) -> Result<Vec<Expert>, GrantError> {
        Ok(self.workers.list_experts().await?)
    }

    /// Opens a funding programme in the workflow currency
    pub async fn register_grant(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        max_amount: Money,
    ) -> Result<Grant, GrantError> {
        if max_amount.currency() != self.config.currency {
            return Err(GrantError::validation(format!(
                "grant ceiling must be in {}, got {}",
                self.config.currency,
                max_amount.currency()
            )));
        }

        let grant = Grant::new(title, description, max_amount)?;
        self.grants.save(&grant).await?;
        info!(grant_id = %grant.id, ceiling = %grant.max_amount, "Grant registered");
        Ok(grant)
    }

    pub async fn get_grant(&self, id: GrantId) -> Result<Grant, GrantError> {
        self.grants
            .find_by_id(id)
            .await?
            .ok_or_else(|| GrantError::not_found("Grant", id))
    }

    pub async fn grants(&self) -> Result<Vec<Grant>, GrantError> {
        Ok(self.grants.list().await?)
    }

    // ------------------------------------------------------------------
    // Application lifecycle
    // ------------------------------------------------------------------

    /// Creates and immediately submits an application for an applicant
    pub async fn submit_application(
        &self,
        applicant_id: ApplicantId,
        data: ApplicationData,
    ) -> Result<Application, GrantError> {
        let applicant = self.get_applicant(applicant_id).await?;
        self.check_currency(&data)?;

        let application = applicant.prepare_application(data)?;
        self.applications.save(&application).await?;
        info!(
            application_id = %application.id(),
            applicant_id = %applicant_id,
            status = %application.status(),
            "Application submitted"
        );
        Ok(application)
    }

    /// Stores a new application in `Draft` without submitting it
    pub async fn draft_application(
        &self,
        applicant_id: ApplicantId,
        data: ApplicationData,
    ) -> Result<Application, GrantError> {
        let applicant = self.get_applicant(applicant_id).await?;
        self.check_currency(&data)?;

        let application = applicant.draft_application(data);
        self.applications.save(&application).await?;
        info!(application_id = %application.id(), "Application drafted");
        Ok(application)
    }

    /// Replaces the data of a draft application
    ///
    /// When the application is filed under a grant the new requested amount
    /// must still fit under its ceiling.
    pub async fn edit_application(
        &self,
        application_id: ApplicationId,
        data: ApplicationData,
    ) -> Result<Application, GrantError> {
        self.check_currency(&data)?;
        self.with_record_lock(application_id, self.edit_locked(application_id, data))
            .await
    }

    async fn edit_locked(
        &self,
        application_id: ApplicationId,
        data: ApplicationData,
    ) -> Result<Application, GrantError> {
        let mut application = self.load_application(application_id).await?;
        application.edit(data)?;
        // only the local copy changed so far
        if let Some(grant_id) = application.grant_id() {
            self.get_grant(grant_id)
                .await?
                .check_within_ceiling(&application.data().requested_amount(), "requested amount")?;
        }
        self.applications.update(&application).await?;
        Ok(application)
    }

    /// Submits a stored draft
    pub async fn submit_draft(&self, application_id: ApplicationId) -> Result<Application, GrantError> {
        self.with_record_lock(application_id, self.submit_draft_locked(application_id))
            .await
    }

    async fn submit_draft_locked(&self, application_id: ApplicationId) -> Result<Application, GrantError> {
        let mut application = self.load_application(application_id).await?;
        application.submit()?;
        self.applications.update(&application).await?;
        info!(application_id = %application_id, "Draft submitted");
        Ok(application)
    }

    pub async fn withdraw_application(
        &self,
        application_id: ApplicationId,
    ) -> Result<Application, GrantError> {
        self.with_record_lock(application_id, self.withdraw_locked(application_id))
            .await
    }

    async fn withdraw_locked(&self, application_id: ApplicationId) -> Result<Application, GrantError> {
        let mut application = self.load_application(application_id).await?;
        let previous = application.status();
        application.withdraw()?;
        self.applications.update(&application).await?;
        self.chains.write().await.remove(&application_id);
        info!(application_id = %application_id, from = %previous, "Application withdrawn");
        Ok(application)
    }

    /// Files an application under a funding programme
    pub async fn link_grant(
        &self,
        application_id: ApplicationId,
        grant_id: GrantId,
    ) -> Result<Application, GrantError> {
        let grant = self.get_grant(grant_id).await?;
        self.with_record_lock(application_id, self.link_grant_locked(application_id, grant))
            .await
    }

    async fn link_grant_locked(
        &self,
        application_id: ApplicationId,
        grant: Grant,
    ) -> Result<Application, GrantError> {
        let mut application = self.load_application(application_id).await?;
        application.link_grant(&grant)?;
        self.applications.update(&application).await?;
        info!(application_id = %application_id, grant_id = %grant.id, "Application linked to grant");
        Ok(application)
    }

    // ------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------

    /// Selects experts for an application and wires them into its chain
    ///
    /// Returns the selected experts in chain order. Assigning again replaces
    /// the previous chain. An empty roster yields an empty chain.
    pub async fn assign_experts(&self, application_id: ApplicationId) -> Result<Vec<Expert>, GrantError> {
        let application = self.load_application(application_id).await?;
        if !application.accepts_evaluations() {
            return Err(GrantError::invalid_transition(application.status(), "assign experts to"));
        }

        let roster = self.workers.list_experts().await?;
        let selected = self.strategy.select(&roster, &application);
        let chain = EvaluationChain::wire(application_id, &selected);
        let assigned: Vec<Expert> = selected.into_iter().cloned().collect();

        info!(
            application_id = %application_id,
            strategy = self.strategy.name(),
            chain_length = chain.len(),
            "Experts assigned"
        );
        self.chains.write().await.insert(application_id, chain);
        Ok(assigned)
    }

    /// The chain currently wired for an application, if any
    pub async fn assigned_chain(&self, application_id: ApplicationId) -> Option<EvaluationChain> {
        self.chains.read().await.get(&application_id).cloned()
    }

    /// Starts evaluation at `expert_id` and runs the chain to its end
    ///
    /// When the expert is not part of the assigned chain it evaluates alone.
    /// The application is persisted only if every link succeeds.
    pub async fn start_evaluation(
        &self,
        application_id: ApplicationId,
        expert_id: ExpertId,
    ) -> Result<Vec<Evaluation>, GrantError> {
        self.with_record_lock(application_id, self.evaluate_locked(application_id, expert_id))
            .await
    }

    async fn evaluate_locked(
        &self,
        application_id: ApplicationId,
        expert_id: ExpertId,
    ) -> Result<Vec<Evaluation>, GrantError> {
        let mut application = self.load_application(application_id).await?;
        let expert = self
            .workers
            .find_expert_by_id(expert_id)
            .await?
            .ok_or_else(|| GrantError::not_found("Expert", expert_id))?;
        let roster = self.workers.list_experts().await?;

        let (chain, start) = {
            let chains = self.chains.read().await;
            chains
                .get(&application_id)
                .and_then(|chain| chain.position(expert_id).map(|index| (chain.clone(), index)))
                .unwrap_or_else(|| (EvaluationChain::wire(application_id, &[&expert]), 0))
        };

        let evaluations = {
            let mut scores = self.scores.lock().await;
            chain.run_from(start, &mut application, &roster, &mut **scores)?
        };
        self.applications.update(&application).await?;

        info!(
            application_id = %application_id,
            expert_id = %expert_id,
            evaluations = evaluations.len(),
            status = %application.status(),
            "Evaluation chain completed"
        );
        Ok(evaluations)
    }

    // ------------------------------------------------------------------
    // Decision
    // ------------------------------------------------------------------

    /// Records the founder's decision on an application under review
    ///
    /// A grant above the programme ceiling is always rejected. A grant above
    /// the requested amount is rejected only when the cap is enforced.
    pub async fn make_decision(
        &self,
        application_id: ApplicationId,
        founder_id: FounderId,
        result: DecisionResult,
        granted_amount: Money,
    ) -> Result<Decision, GrantError> {
        self.with_record_lock(
            application_id,
            self.decide_locked(application_id, founder_id, result, granted_amount),
        )
        .await
    }

    async fn decide_locked(
        &self,
        application_id: ApplicationId,
        founder_id: FounderId,
        result: DecisionResult,
        granted_amount: Money,
    ) -> Result<Decision, GrantError> {
        let mut application = self.load_application(application_id).await?;
        let founder = self
            .workers
            .find_founder_by_id(founder_id)
            .await?
            .ok_or_else(|| GrantError::not_found("Founder", founder_id))?;

        if !application.accepts_decision() {
            return Err(GrantError::invalid_transition(
                application.status(),
                "attach a decision to",
            ));
        }
        if let Some(grant_id) = application.grant_id() {
            self.get_grant(grant_id)
                .await?
                .check_within_ceiling(&granted_amount, "granted amount")?;
        }

        let requested = application.data().requested_amount();
        let over_request = matches!(granted_amount.exceeds(&requested), Ok(true));
        if over_request && self.config.enforce_requested_cap {
            return Err(GrantError::validation(format!(
                "granted amount {} exceeds requested amount {}",
                granted_amount, requested
            )));
        }

        let decision = founder.make_decision(&mut application, result, granted_amount)?;
        self.applications.update(&application).await?;
        self.chains.write().await.remove(&application_id);

        if over_request {
            warn!(
                application_id = %application_id,
                granted = %granted_amount,
                requested = %requested,
                "Granted amount exceeds requested amount"
            );
        }
        info!(
            application_id = %application_id,
            founder_id = %founder_id,
            result = %decision.result,
            granted = %decision.granted_amount,
            "Decision made"
        );
        Ok(decision)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub async fn get_application(&self, application_id: ApplicationId) -> Result<Application, GrantError> {
        self.load_application(application_id).await
    }

    pub async fn applications_by_status(
        &self,
        status: ApplicationStatus,
    ) -> Result<Vec<Application>, GrantError> {
        Ok(self.applications.find_by_status(status).await?)
    }

    async fn load_application(&self, application_id: ApplicationId) -> Result<Application, GrantError> {
        self.applications
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| GrantError::not_found("Application", application_id))
    }

    /// Number of applications with a lock currently held or awaited
    pub async fn active_record_locks(&self) -> usize {
        self.record_locks.lock().await.len()
    }

    /// Runs `operation` while holding the application's record lock
    ///
    /// The map entry is dropped again once no other request holds a clone.
    async fn with_record_lock<T>(
        &self,
        application_id: ApplicationId,
        operation: impl Future<Output = Result<T, GrantError>>,
    ) -> Result<T, GrantError> {
        let lock = {
            let mut locks = self.record_locks.lock().await;
            locks.entry(application_id).or_default().clone()
        };

        let result = {
            let _guard = lock.lock().await;
            operation.await
        };

        let mut locks = self.record_locks.lock().await;
        // map entry plus ours
        if Arc::strong_count(&lock) == 2 {
            locks.remove(&application_id);
        }
        result
    }

    fn check_currency(&self, data: &ApplicationData) -> Result<(), GrantError> {
        let currency = data.requested_amount().currency();
        if currency != self.config.currency {
            return Err(GrantError::validation(format!(
                "requested amount must be in {}, got {}",
                self.config.currency, currency
            )));
        }
        Ok(())
    }
}
