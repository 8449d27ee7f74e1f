//! Application aggregate and its status state machine
//!
//! ```text
//! Draft -> Submitted -> UnderReview -> DecisionMade
//!   \          \             \
//!    +----------+-------------+--> Withdrawn
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ApplicantId, ApplicationId, GrantId, Money};
use crate::decision::Decision;
use crate::error::GrantError;
use crate::evaluation::Evaluation;
use crate::grant::Grant;

/// Application status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Being prepared by the applicant, still editable
    Draft,
    /// Handed in, waiting for the first evaluation
    Submitted,
    /// At least one evaluation attached
    UnderReview,
    /// Funding decision attached
    DecisionMade,
    /// Withdrawn before a decision
    Withdrawn,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Draft,
        ApplicationStatus::Submitted,
        ApplicationStatus::UnderReview,
        ApplicationStatus::DecisionMade,
        ApplicationStatus::Withdrawn,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::DecisionMade => "decision_made",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }

    /// Returns true for states with no outgoing edges
    pub fn is_terminal(self) -> bool {
        matches!(self, ApplicationStatus::DecisionMade | ApplicationStatus::Withdrawn)
    }

    /// Checks if `target` is reachable from this status in one step
    pub fn can_transition_to(self, target: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        matches!(
            (self, target),
            (Draft, Submitted) |
            (Submitted, UnderReview) |
            (UnderReview, DecisionMade) |
            (Draft, Withdrawn) |
            (Submitted, Withdrawn) |
            (UnderReview, Withdrawn)
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationStatus {
    type Err = GrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.label() == normalized || normalized == status.label().replace('_', ""))
            .ok_or_else(|| GrantError::validation(format!("unknown application status '{s}'")))
    }
}

/// Proposal content supplied by the applicant
///
/// Replaced wholesale while the owning application is a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationData {
    title: String,
    description: String,
    requested_amount: Money,
}

impl ApplicationData {
    /// Creates proposal content, rejecting an empty title or a negative amount
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        requested_amount: Money,
    ) -> Result<Self, GrantError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(GrantError::validation("application title must not be empty"));
        }
        Ok(Self {
            title,
            description: description.into(),
            requested_amount: requested_amount.require_non_negative()?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn requested_amount(&self) -> Money {
        self.requested_amount
    }
}

/// One observed status change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub from: ApplicationStatus,
    pub to: ApplicationStatus,
    pub at: DateTime<Utc>,
}

/// A grant application under review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    id: ApplicationId,
    applicant_id: ApplicantId,
    data: ApplicationData,
    grant_id: Option<GrantId>,
    status: ApplicationStatus,
    evaluations: Vec<Evaluation>,
    decision: Option<Decision>,
    status_history: Vec<StatusChange>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Application {
    /// Creates a new application in `Draft`
    pub fn new(applicant_id: ApplicantId, data: ApplicationData) -> Self {
        let now = Utc::now();

        Self {
            id: ApplicationId::new_v7(),
            applicant_id,
            data,
            grant_id: None,
            status: ApplicationStatus::Draft,
            evaluations: Vec::new(),
            decision: None,
            status_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> ApplicationId {
        self.id
    }

    pub fn applicant_id(&self) -> ApplicantId {
        self.applicant_id
    }

    pub fn data(&self) -> &ApplicationData {
        &self.data
    }

    /// Funding programme this application is filed under, if any
    pub fn grant_id(&self) -> Option<GrantId> {
        self.grant_id
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Evaluations in the order they were attached
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    pub fn decision(&self) -> Option<&Decision> {
        self.decision.as_ref()
    }

    pub fn status_history(&self) -> &[StatusChange] {
        &self.status_history
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true while evaluations may still be attached
    pub fn accepts_evaluations(&self) -> bool {
        matches!(
            self.status,
            ApplicationStatus::Submitted | ApplicationStatus::UnderReview
        )
    }

    /// Returns true while the single funding decision can still be attached
    pub fn accepts_decision(&self) -> bool {
        self.decision.is_none() && self.status.can_transition_to(ApplicationStatus::DecisionMade)
    }

    /// Mean of all attached scores, if any
    pub fn average_score(&self) -> Option<Decimal> {
        if self.evaluations.is_empty() {
            return None;
        }
        let total: Decimal = self
            .evaluations
            .iter()
            .map(|evaluation| Decimal::from(evaluation.score))
            .sum();
        Some((total / Decimal::from(self.evaluations.len())).round_dp(2))
    }

    /// `Draft -> Submitted`
    pub fn submit(&mut self) -> Result<(), GrantError> {
        self.transition(ApplicationStatus::Submitted, "submit")
    }

    /// Replaces the proposal content; only allowed in `Draft`
    pub fn edit(&mut self, data: ApplicationData) -> Result<(), GrantError> {
        if self.status != ApplicationStatus::Draft {
            return Err(GrantError::invalid_transition(self.status, "edit"));
        }
        self.data = data;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Files the application under a funding programme
    ///
    /// Allowed in any non-terminal status and leaves the status untouched.
    /// The requested amount must fit under the programme ceiling.
    pub fn link_grant(&mut self, grant: &Grant) -> Result<(), GrantError> {
        if self.status.is_terminal() {
            return Err(GrantError::invalid_transition(self.status, "link a grant to"));
        }
        grant.check_within_ceiling(&self.data.requested_amount(), "requested amount")?;

        self.grant_id = Some(grant.id);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Any non-terminal status `-> Withdrawn`
    pub fn withdraw(&mut self) -> Result<(), GrantError> {
        self.transition(ApplicationStatus::Withdrawn, "withdraw")
    }

    /// Appends an evaluation and moves to `UnderReview`
    pub fn attach_evaluation(&mut self, evaluation: Evaluation) -> Result<(), GrantError> {
        if !self.accepts_evaluations() {
            return Err(GrantError::invalid_transition(self.status, "attach an evaluation to"));
        }
        if evaluation.application_id != self.id {
            return Err(GrantError::validation(format!(
                "evaluation {} belongs to {}, not {}",
                evaluation.id, evaluation.application_id, self.id
            )));
        }

        if self.status == ApplicationStatus::Submitted {
            self.transition(ApplicationStatus::UnderReview, "attach an evaluation to")?;
        }
        self.evaluations.push(evaluation);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Attaches the single funding decision, `UnderReview -> DecisionMade`
    pub fn attach_decision(&mut self, decision: Decision) -> Result<(), GrantError> {
        if self.decision.is_some() {
            return Err(GrantError::invalid_transition(self.status, "attach a second decision to"));
        }
        if decision.application_id != self.id {
            return Err(GrantError::validation(format!(
                "decision {} belongs to {}, not {}",
                decision.id, decision.application_id, self.id
            )));
        }

        self.transition(ApplicationStatus::DecisionMade, "attach a decision to")?;
        self.decision = Some(decision);
        Ok(())
    }

    fn transition(&mut self, target: ApplicationStatus, action: &'static str) -> Result<(), GrantError> {
        if !self.status.can_transition_to(target) {
            return Err(GrantError::invalid_transition(self.status, action));
        }

        let now = Utc::now();
        self.status_history.push(StatusChange {
            from: self.status,
            to: target,
            at: now,
        });
        self.status = target;
        self.updated_at = now;
        Ok(())
    }
}
